use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::registrations::use_cases::list_registrations::inbound::http as list_http;
use crate::modules::registrations::use_cases::register_submission::inbound::http as register_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(register_http::show_form))
        .route("/register", post(register_http::handle))
        .route("/registrations", get(list_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
