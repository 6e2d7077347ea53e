use axum::{Json, extract::State};

use crate::modules::registrations::core::registration_row::RegistrationRow;
use crate::modules::registrations::use_cases::list_registrations::handler::list_registrations;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Json<Vec<RegistrationRow>> {
    let page = state.page.lock().await;
    Json(list_registrations(&*page))
}
