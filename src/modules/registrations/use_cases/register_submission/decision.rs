use crate::modules::registrations::core::fields::ValidatedField;
use crate::modules::registrations::core::registration_row::RegistrationRow;
use crate::modules::registrations::core::rules::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted { row: RegistrationRow },
    Rejected { errors: Vec<ValidationError> },
}

impl Decision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted { .. })
    }

    /// Fields that failed, in form order. Empty when accepted.
    pub fn failed_fields(&self) -> Vec<ValidatedField> {
        match self {
            Decision::Accepted { .. } => Vec::new(),
            Decision::Rejected { errors } => errors.iter().map(ValidationError::field).collect(),
        }
    }
}
