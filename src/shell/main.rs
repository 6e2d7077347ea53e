use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use course_registrations::shared::core::clock::SystemClock;
use course_registrations::shell::config::AppConfig;
use course_registrations::shell::http::router;
use course_registrations::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let state = AppState::new(Arc::new(SystemClock), config.timestamp_format);
    let app = router(state);

    tracing::info!("Registration page: http://{}/", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
