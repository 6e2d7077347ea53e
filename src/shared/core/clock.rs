// Wall clock port.
//
// Purpose
// - Give handlers "now" without reaching for the system clock directly.
//
// Testing guidance
// - Use FixedClock to pin today's date when asserting age boundaries.

use std::fmt::Write;
use std::sync::Arc;

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Finnish locale shape, e.g. `19.10.2026 14.03.12`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-d.%-m.%Y %H.%M.%S";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid timestamp format: {0:?}")]
pub struct InvalidTimestampFormat(pub String);

/// A strftime pattern checked up front, so formatting can never fail later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormat(String);

impl TimestampFormat {
    pub fn parse(pattern: impl Into<String>) -> Result<Self, InvalidTimestampFormat> {
        let pattern = pattern.into();
        let broken = pattern.is_empty()
            || StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error))
            || !renders_without_offset(&pattern);
        if broken {
            return Err(InvalidTimestampFormat(pattern));
        }
        Ok(Self(pattern))
    }

    pub fn format(&self, moment: NaiveDateTime) -> String {
        moment.format(&self.0).to_string()
    }
}

/// Zone and offset specifiers have nothing to read from a naive local time and fail to render.
fn renders_without_offset(pattern: &str) -> bool {
    let sample = NaiveDateTime::default();
    let mut rendered = String::new();
    write!(
        rendered,
        "{}",
        sample.format_with_items(StrftimeItems::new(pattern))
    )
    .is_ok()
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self(DEFAULT_TIMESTAMP_FORMAT.to_string())
    }
}

pub trait Clock: Send + Sync {
    /// Local wall time.
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

impl<TClock> Clock for Arc<TClock>
where
    TClock: Clock + ?Sized,
{
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Noon on the given date.
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date.and_hms_opt(12, 0, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
