use crate::modules::registrations::adapters::outbound::html_page::render_page;
use crate::modules::registrations::adapters::outbound::in_memory_page::{InMemoryPage, SubmitSignal};
use crate::modules::registrations::core::fields::{FieldValue, FormField, ValidatedField};
use crate::modules::registrations::core::ports::{RegistrationForm, RegistrationTable};
use crate::modules::registrations::core::rules::min_age_cutoff;
use crate::modules::registrations::use_cases::list_registrations::handler::list_registrations;
use crate::modules::registrations::use_cases::register_submission::handler::RegistrationFormHandler;
use crate::shared::core::clock::{Clock, SystemClock, TimestampFormat};
use crate::tests::fixtures::submissions::submission_builder::SubmissionBuilder;

#[test]
fn registers_a_thirteen_year_old_today_and_resets_the_form() {
    let handler = RegistrationFormHandler::new(SystemClock, TimestampFormat::default());
    let mut page = InMemoryPage::new();
    let birth_date = min_age_cutoff(SystemClock.today())
        .unwrap()
        .format("%Y-%m-%d")
        .to_string();
    SubmissionBuilder::new()
        .full_name("Jane Doe")
        .email("jane@example.com")
        .phone("+35812345678")
        .birth_date(birth_date.clone())
        .terms_accepted(true)
        .fill(&mut page);
    let mut signal = SubmitSignal::new();

    let decision = handler.handle_submit(&mut signal, &mut page);

    assert!(decision.is_accepted());
    assert!(signal.default_prevented());
    let rows = list_registrations(&page);
    assert_eq!(rows.len(), 1);
    let [timestamp, name, email, phone, birth] = rows[0].cells();
    assert!(!timestamp.is_empty());
    assert_eq!(
        [name, email, phone, birth],
        ["Jane Doe", "jane@example.com", "+35812345678", birth_date.as_str()]
    );
    assert!(page.visible_errors().is_empty());
    for field in FormField::ALL {
        assert_eq!(page.read_field(field), FieldValue::cleared(field));
    }
}

#[test]
fn rejects_then_accepts_after_correction() {
    let handler = RegistrationFormHandler::new(SystemClock, TimestampFormat::default());
    let mut page = InMemoryPage::new();
    let mut signal = SubmitSignal::new();

    SubmissionBuilder::new()
        .email("jane@")
        .terms_accepted(false)
        .fill(&mut page);
    handler.handle_submit(&mut signal, &mut page);

    let shown: Vec<ValidatedField> = page.visible_errors().into_iter().map(|(f, _)| f).collect();
    assert_eq!(shown, vec![ValidatedField::Email, ValidatedField::Terms]);
    assert!(page.rows().is_empty());
    assert_eq!(page.read_field(FormField::Email).as_text(), "jane@");
    assert_eq!(page.read_field(FormField::Phone).as_text(), "+35812345678");

    page.type_into(FormField::Email, FieldValue::Text("jane@example.com".into()));
    page.type_into(FormField::Terms, FieldValue::Checked(true));
    handler.handle_submit(&mut signal, &mut page);

    assert!(page.visible_errors().is_empty());
    assert_eq!(page.rows().len(), 1);
    let html = render_page(&page);
    assert_eq!(html.matches("<tr><td>").count(), 1);
    assert!(html.contains("<td>jane@example.com</td>"));
}
