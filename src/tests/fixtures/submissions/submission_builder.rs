// Shared test fixture for submissions.
// Defaults come from json/submission.json; setters override single fields.

use serde::Deserialize;

use crate::modules::registrations::adapters::outbound::in_memory_page::InMemoryPage;
use crate::modules::registrations::core::fields::{FieldValue, FormField};
use crate::modules::registrations::core::submission::Submission;

const SUBMISSION_JSON: &str = include_str!("json/submission.json");

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionDto {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub terms_accepted: bool,
    pub timestamp: String,
}

pub struct SubmissionBuilder {
    inner: Submission,
}

impl Default for SubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmissionBuilder {
    pub fn new() -> Self {
        let dto: SubmissionDto = serde_json::from_str(SUBMISSION_JSON).unwrap();
        Self {
            inner: Submission {
                full_name: dto.full_name,
                email: dto.email,
                phone: dto.phone,
                birth_date: dto.birth_date,
                terms_accepted: dto.terms_accepted,
                timestamp: dto.timestamp,
            },
        }
    }

    pub fn full_name(mut self, v: impl Into<String>) -> Self {
        self.inner.full_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn phone(mut self, v: impl Into<String>) -> Self {
        self.inner.phone = v.into();
        self
    }

    pub fn birth_date(mut self, v: impl Into<String>) -> Self {
        self.inner.birth_date = v.into();
        self
    }

    pub fn terms_accepted(mut self, v: bool) -> Self {
        self.inner.terms_accepted = v;
        self
    }

    pub fn timestamp(mut self, v: impl Into<String>) -> Self {
        self.inner.timestamp = v.into();
        self
    }

    pub fn build(self) -> Submission {
        self.inner
    }

    /// Type the values into the page's form the way a user would. The timestamp is left to the handler.
    pub fn fill(self, page: &mut InMemoryPage) {
        let s = self.inner;
        page.type_into(FormField::FullName, FieldValue::Text(s.full_name));
        page.type_into(FormField::Email, FieldValue::Text(s.email));
        page.type_into(FormField::Phone, FieldValue::Text(s.phone));
        page.type_into(FormField::BirthDate, FieldValue::Text(s.birth_date));
        page.type_into(FormField::Terms, FieldValue::Checked(s.terms_accepted));
    }
}

#[cfg(test)]
mod submission_builder_tests {
    use super::*;
    use crate::modules::registrations::core::ports::RegistrationForm;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = SubmissionBuilder::default().build();
        assert_eq!(built.full_name, "Jane Doe");
        assert_eq!(built.email, "jane@example.com");
        assert_eq!(built.phone, "+35812345678");
        assert_eq!(built.birth_date, "2000-01-01");
        assert!(built.terms_accepted);
        assert_eq!(built.timestamp, "19.10.2026 12.00.00");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = SubmissionBuilder::new()
            .full_name("Matti Meikäläinen")
            .email("matti@example.fi")
            .phone("+3584012345")
            .birth_date("1985-06-15")
            .terms_accepted(false)
            .timestamp("1.1.2026 0.00.00")
            .build();

        assert_eq!(custom.full_name, "Matti Meikäläinen");
        assert_eq!(custom.email, "matti@example.fi");
        assert_eq!(custom.phone, "+3584012345");
        assert_eq!(custom.birth_date, "1985-06-15");
        assert!(!custom.terms_accepted);
        assert_eq!(custom.timestamp, "1.1.2026 0.00.00");
    }

    #[rstest]
    fn fill_types_every_input_but_the_timestamp() {
        let mut page = InMemoryPage::new();
        SubmissionBuilder::new().fill(&mut page);
        assert_eq!(page.read_field(FormField::FullName).as_text(), "Jane Doe");
        assert!(page.read_field(FormField::Terms).is_checked());
        assert_eq!(page.read_field(FormField::Timestamp).as_text(), "");
    }
}
