use crate::modules::registrations::core::ports::RegistrationTable;
use crate::modules::registrations::core::registration_row::RegistrationRow;

/// Snapshot of the table body in insertion order. Read only.
pub fn list_registrations<TTable>(table: &TTable) -> Vec<RegistrationRow>
where
    TTable: RegistrationTable + ?Sized,
{
    table.rows().to_vec()
}
