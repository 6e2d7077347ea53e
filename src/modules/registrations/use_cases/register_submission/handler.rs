use tracing::{debug, info, info_span};
use uuid::Uuid;

use crate::modules::registrations::core::fields::FormField;
use crate::modules::registrations::core::ports::{RegistrationForm, RegistrationTable, SubmitEvent};
use crate::modules::registrations::core::submission::Submission;
use crate::modules::registrations::use_cases::register_submission::decide::decide_register;
use crate::modules::registrations::use_cases::register_submission::decision::Decision;
use crate::shared::core::clock::{Clock, TimestampFormat};

/// Runs one submission cycle against a page: validate, then either show errors or commit a row.
pub struct RegistrationFormHandler<TClock>
where
    TClock: Clock,
{
    clock: TClock,
    timestamp_format: TimestampFormat,
}

impl<TClock> RegistrationFormHandler<TClock>
where
    TClock: Clock,
{
    pub fn new(clock: TClock, timestamp_format: TimestampFormat) -> Self {
        Self {
            clock,
            timestamp_format,
        }
    }

    pub fn handle_submit<TEvent, TPage>(&self, event: &mut TEvent, page: &mut TPage) -> Decision
    where
        TEvent: SubmitEvent + ?Sized,
        TPage: RegistrationForm + RegistrationTable + ?Sized,
    {
        event.prevent_default();

        let span = info_span!("submission", submission_id = %Uuid::now_v7());
        let _entered = span.enter();

        let now = self.clock.now();
        page.write_timestamp(&self.timestamp_format.format(now));
        page.clear_errors();

        let submission = read_submission(&*page);
        debug!(timestamp = %submission.timestamp, "submission captured");

        let decision = decide_register(&submission, now.date());
        match &decision {
            Decision::Rejected { errors } => {
                for error in errors {
                    page.set_error(error.field(), &error.to_string());
                }
                info!(failed = ?decision.failed_fields(), "registration rejected");
            }
            Decision::Accepted { row } => {
                page.append_row(row.clone());
                page.reset();
                info!(rows = page.rows().len(), "registration appended");
            }
        }
        decision
    }
}

fn read_submission<TPage>(page: &TPage) -> Submission
where
    TPage: RegistrationForm + ?Sized,
{
    Submission::new(
        page.read_field(FormField::FullName).as_text(),
        page.read_field(FormField::Email).as_text(),
        page.read_field(FormField::Phone).as_text(),
        page.read_field(FormField::BirthDate).as_text(),
        page.read_field(FormField::Terms).is_checked(),
        page.read_field(FormField::Timestamp).as_text(),
    )
}
