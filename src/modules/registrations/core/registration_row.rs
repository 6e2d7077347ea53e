use serde::Serialize;

use crate::modules::registrations::core::submission::Submission;

/// A committed registration as shown in the results table.
///
/// Cells are always rendered in the order of [`RegistrationRow::cells`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRow {
    pub timestamp: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
}

impl RegistrationRow {
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.timestamp,
            &self.full_name,
            &self.email,
            &self.phone,
            &self.birth_date,
        ]
    }
}

impl From<&Submission> for RegistrationRow {
    fn from(submission: &Submission) -> Self {
        Self {
            timestamp: submission.timestamp.clone(),
            full_name: submission.full_name.clone(),
            email: submission.email.clone(),
            phone: submission.phone.clone(),
            birth_date: submission.birth_date.clone(),
        }
    }
}
