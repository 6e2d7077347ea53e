// Field validation rules.
//
// Purpose
// - Decide, field by field, whether a submission may become a registration row.
//
// Responsibilities
// - One pure function per field. Each returns the field's ValidationError on failure.
// - Never touch the page. The caller decides where messages go.
//
// Notes
// - The email shape check is intentionally loose: single `@`, a dot somewhere after it.
// - Phone digits are ASCII only.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use thiserror::Error;

use crate::modules::registrations::core::fields::ValidatedField;

pub const MIN_AGE_YEARS: i32 = 13;
pub const MIN_NAME_WORDS: usize = 2;
pub const MIN_NAME_WORD_CHARS: usize = 2;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+358[0-9]{7,10}$").expect("phone pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthDateProblem {
    Missing,
    Malformed,
    InFuture,
    TooYoung,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your full name (at least two words, each 2+ characters).")]
    FullName,

    #[error("Please enter a valid email address (e.g., name@example.com).")]
    Email,

    #[error("Phone must start with +358 and contain 7 to 10 digits (no spaces).")]
    Phone,

    #[error("Birth date must be valid and age at least 13 years.")]
    BirthDate(BirthDateProblem),

    #[error("You must accept the terms to register.")]
    TermsNotAccepted,
}

impl ValidationError {
    pub fn field(&self) -> ValidatedField {
        match self {
            ValidationError::FullName => ValidatedField::FullName,
            ValidationError::Email => ValidatedField::Email,
            ValidationError::Phone => ValidatedField::Phone,
            ValidationError::BirthDate(_) => ValidatedField::BirthDate,
            ValidationError::TermsNotAccepted => ValidatedField::Terms,
        }
    }
}

/// Words are separated by single spaces, so a doubled space produces an empty word.
pub fn validate_full_name(full_name: &str) -> Result<(), ValidationError> {
    if full_name.is_empty() {
        return Err(ValidationError::FullName);
    }
    let words: Vec<&str> = full_name.split(' ').collect();
    if words.len() < MIN_NAME_WORDS {
        return Err(ValidationError::FullName);
    }
    if words
        .iter()
        .any(|word| word.chars().count() < MIN_NAME_WORD_CHARS)
    {
        return Err(ValidationError::FullName);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::Email)
    }
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_PATTERN.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::Phone)
    }
}

/// Latest birth date that is still at least [`MIN_AGE_YEARS`] old on `today`.
///
/// On 29 February the same day may not exist in the cutoff year; the cutoff then
/// rolls forward to 1 March.
pub fn min_age_cutoff(today: NaiveDate) -> Option<NaiveDate> {
    let year = today.year() - MIN_AGE_YEARS;
    NaiveDate::from_ymd_opt(year, today.month(), today.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

pub fn validate_birth_date(raw: &str, today: NaiveDate) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::BirthDate(BirthDateProblem::Missing));
    }
    let birth_date = NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT)
        .map_err(|_| ValidationError::BirthDate(BirthDateProblem::Malformed))?;
    if birth_date > today {
        return Err(ValidationError::BirthDate(BirthDateProblem::InFuture));
    }
    match min_age_cutoff(today) {
        Some(cutoff) if birth_date <= cutoff => Ok(()),
        _ => Err(ValidationError::BirthDate(BirthDateProblem::TooYoung)),
    }
}

pub fn validate_terms(accepted: bool) -> Result<(), ValidationError> {
    if accepted {
        Ok(())
    } else {
        Err(ValidationError::TermsNotAccepted)
    }
}
