// One submission cycle's snapshot of the form.
//
// Purpose
// - Carry the trimmed field values and the generated timestamp to the decider.
//
// Responsibilities
// - Trim text fields on construction. The birth date stays raw: it is shown as typed.
// - Be independent of where the values came from (markup page, HTTP form, tests).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub terms_accepted: bool,
    pub timestamp: String,
}

impl Submission {
    pub fn new(
        full_name: &str,
        email: &str,
        phone: &str,
        birth_date: impl Into<String>,
        terms_accepted: bool,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            birth_date: birth_date.into(),
            terms_accepted,
            timestamp: timestamp.into(),
        }
    }
}

#[cfg(test)]
mod submission_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_trim_text_fields_but_keep_the_birth_date_raw() {
        let submission = Submission::new(
            "  Jane Doe ",
            "\tjane@example.com\n",
            " +35812345678 ",
            " 2000-01-01",
            true,
            "19.10.2026 12.00.00",
        );
        assert_eq!(submission.full_name, "Jane Doe");
        assert_eq!(submission.email, "jane@example.com");
        assert_eq!(submission.phone, "+35812345678");
        assert_eq!(submission.birth_date, " 2000-01-01");
        assert!(submission.terms_accepted);
        assert_eq!(submission.timestamp, "19.10.2026 12.00.00");
    }
}
