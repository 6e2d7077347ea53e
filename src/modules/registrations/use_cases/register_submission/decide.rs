// Pure decision function for a registration submission.
//
// Purpose
// - Run every field rule against the submission and either produce the table row or the list of failures.
//
// Responsibilities
// - Evaluate all five rules, even after the first failure, so every message can be shown at once.
// - Never perform input or output.

use chrono::NaiveDate;

use crate::modules::registrations::core::registration_row::RegistrationRow;
use crate::modules::registrations::core::rules::{
    validate_birth_date, validate_email, validate_full_name, validate_phone, validate_terms,
};
use crate::modules::registrations::core::submission::Submission;
use crate::modules::registrations::use_cases::register_submission::decision::Decision;

pub fn decide_register(submission: &Submission, today: NaiveDate) -> Decision {
    let checks = [
        validate_full_name(&submission.full_name),
        validate_email(&submission.email),
        validate_phone(&submission.phone),
        validate_birth_date(&submission.birth_date, today),
        validate_terms(submission.terms_accepted),
    ];
    let errors: Vec<_> = checks.into_iter().filter_map(Result::err).collect();

    if errors.is_empty() {
        Decision::Accepted {
            row: RegistrationRow::from(submission),
        }
    } else {
        Decision::Rejected { errors }
    }
}
