// Ports define what the registration handler needs from the hosting page, without implementing it.
//
// Purpose
// - Describe the page capabilities as traits: the submit signal, the form with its error slots, the table.
//
// Boundaries
// - No markup or transport here. Adapters implement these traits.
// - Missing page elements are a setup error of the adapter, so the capabilities are infallible.
//
// Testing guidance
// - Use the in memory page adapter for tests and local hosting.

use crate::modules::registrations::core::fields::{FieldValue, FormField, ValidatedField};
use crate::modules::registrations::core::registration_row::RegistrationRow;

pub trait SubmitEvent {
    /// Suppress the host's own submission behaviour (navigation, reload).
    fn prevent_default(&mut self);
}

pub trait RegistrationForm {
    fn read_field(&self, field: FormField) -> FieldValue;
    fn write_timestamp(&mut self, timestamp: &str);
    fn clear_errors(&mut self);
    fn set_error(&mut self, field: ValidatedField, message: &str);
    /// Restore every input, the timestamp included, to its empty state.
    fn reset(&mut self);
}

pub trait RegistrationTable {
    /// Append at the end of the table body.
    fn append_row(&mut self, row: RegistrationRow);
    fn rows(&self) -> &[RegistrationRow];
}
