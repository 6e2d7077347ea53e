use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::modules::registrations::adapters::outbound::html_page::render_page;
use crate::modules::registrations::adapters::outbound::in_memory_page::{InMemoryPage, SubmitSignal};
use crate::modules::registrations::core::fields::{FieldValue, FormField};
use crate::shell::state::AppState;

/// Posted form, keyed by the input names of the page. An absent `terms` key is an unchecked box.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterSubmissionBody {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub terms: Option<String>,
}

impl RegisterSubmissionBody {
    fn type_into(self, page: &mut InMemoryPage) {
        page.type_into(FormField::FullName, FieldValue::Text(self.full_name));
        page.type_into(FormField::Email, FieldValue::Text(self.email));
        page.type_into(FormField::Phone, FieldValue::Text(self.phone));
        page.type_into(FormField::BirthDate, FieldValue::Text(self.birth_date));
        page.type_into(FormField::Terms, FieldValue::Checked(self.terms.is_some()));
    }
}

pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    let page = state.page.lock().await;
    Html(render_page(&page))
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Form<RegisterSubmissionBody>, FormRejection>,
) -> impl IntoResponse {
    let Form(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!(%rejection, "unreadable registration form");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    let mut page = state.page.lock().await;
    body.type_into(&mut page);
    let mut signal = SubmitSignal::new();
    state.register_handler.handle_submit(&mut signal, &mut *page);
    Html(render_page(&page)).into_response()
}
