// In memory implementation of the page ports.
//
// Purpose
// - Model the registration page as an explicit state object: form inputs, error slots, results table.
// - Back the hosted page and the tests without any rendered document.
//
// Responsibilities
// - Keep every error slot present, empty when no message is shown.
// - Preserve row insertion order. Rows are never edited or removed.

use std::collections::{BTreeMap, HashMap};

use crate::modules::registrations::core::fields::{FieldValue, FormField, ValidatedField};
use crate::modules::registrations::core::ports::{RegistrationForm, RegistrationTable, SubmitEvent};
use crate::modules::registrations::core::registration_row::RegistrationRow;

#[derive(Debug, Clone)]
pub struct InMemoryPage {
    fields: HashMap<FormField, FieldValue>,
    errors: BTreeMap<ValidatedField, String>,
    rows: Vec<RegistrationRow>,
}

impl Default for InMemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPage {
    pub fn new() -> Self {
        let mut page = Self {
            fields: HashMap::new(),
            errors: BTreeMap::new(),
            rows: Vec::new(),
        };
        page.reset();
        page.clear_errors();
        page
    }

    /// User input. Checkbox fields ignore text and text fields ignore checkbox state.
    pub fn type_into(&mut self, field: FormField, value: FieldValue) {
        let value = match (field.is_checkbox(), value) {
            (true, FieldValue::Checked(checked)) => FieldValue::Checked(checked),
            (false, FieldValue::Text(text)) => FieldValue::Text(text),
            _ => return,
        };
        self.fields.insert(field, value);
    }

    pub fn error(&self, field: ValidatedField) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Error slots that currently show a message, in form order.
    pub fn visible_errors(&self) -> Vec<(ValidatedField, &str)> {
        self.errors
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, message)| (*field, message.as_str()))
            .collect()
    }

    pub fn timestamp(&self) -> &str {
        self.fields
            .get(&FormField::Timestamp)
            .map(FieldValue::as_text)
            .unwrap_or_default()
    }
}

impl RegistrationForm for InMemoryPage {
    fn read_field(&self, field: FormField) -> FieldValue {
        self.fields
            .get(&field)
            .cloned()
            .unwrap_or_else(|| FieldValue::cleared(field))
    }

    fn write_timestamp(&mut self, timestamp: &str) {
        self.fields
            .insert(FormField::Timestamp, FieldValue::Text(timestamp.to_string()));
    }

    fn clear_errors(&mut self) {
        for field in ValidatedField::ALL {
            self.errors.insert(field, String::new());
        }
    }

    fn set_error(&mut self, field: ValidatedField, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    fn reset(&mut self) {
        for field in FormField::ALL {
            self.fields.insert(field, FieldValue::cleared(field));
        }
    }
}

impl RegistrationTable for InMemoryPage {
    fn append_row(&mut self, row: RegistrationRow) {
        self.rows.push(row);
    }

    fn rows(&self) -> &[RegistrationRow] {
        &self.rows
    }
}

/// Submission signal that records whether the host's default behaviour was suppressed.
#[derive(Debug, Default)]
pub struct SubmitSignal {
    default_prevented: bool,
}

impl SubmitSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl SubmitEvent for SubmitSignal {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
