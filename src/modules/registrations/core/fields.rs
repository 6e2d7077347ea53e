// Field identifiers shared between the form, the error slots and the markup.
//
// Purpose
// - Name every form input and every error slot once, so adapters and the handler agree on them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FullName,
    Email,
    Phone,
    BirthDate,
    Terms,
    Timestamp,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::FullName,
        FormField::Email,
        FormField::Phone,
        FormField::BirthDate,
        FormField::Terms,
        FormField::Timestamp,
    ];

    /// Markup name of the input.
    pub fn name(self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::BirthDate => "birthDate",
            FormField::Terms => "terms",
            FormField::Timestamp => "timestamp",
        }
    }

    pub fn is_checkbox(self) -> bool {
        matches!(self, FormField::Terms)
    }
}

/// The five fields that carry a validation rule and an error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValidatedField {
    FullName,
    Email,
    Phone,
    BirthDate,
    Terms,
}

impl ValidatedField {
    pub const ALL: [ValidatedField; 5] = [
        ValidatedField::FullName,
        ValidatedField::Email,
        ValidatedField::Phone,
        ValidatedField::BirthDate,
        ValidatedField::Terms,
    ];

    pub fn error_slot_id(self) -> &'static str {
        match self {
            ValidatedField::FullName => "error-name",
            ValidatedField::Email => "error-email",
            ValidatedField::Phone => "error-phone",
            ValidatedField::BirthDate => "error-birth",
            ValidatedField::Terms => "error-terms",
        }
    }

    pub fn form_field(self) -> FormField {
        match self {
            ValidatedField::FullName => FormField::FullName,
            ValidatedField::Email => FormField::Email,
            ValidatedField::Phone => FormField::Phone,
            ValidatedField::BirthDate => FormField::BirthDate,
            ValidatedField::Terms => FormField::Terms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Text content; a checkbox reads as an empty string.
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(value) => value,
            FieldValue::Checked(_) => "",
        }
    }

    /// Checkbox state; a text input counts as unchecked.
    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checked(true))
    }

    /// Empty value for the field's input kind.
    pub fn cleared(field: FormField) -> Self {
        if field.is_checkbox() {
            FieldValue::Checked(false)
        } else {
            FieldValue::Text(String::new())
        }
    }
}
