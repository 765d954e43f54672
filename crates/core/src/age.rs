//! Plausibility check for birth dates.
//!
//! A birth date is accepted when it is not in the future and the difference
//! between the current year and the birth year does not exceed
//! [`MAX_AGE_YEARS`]. Only calendar years are compared, so anyone born in
//! `today.year() - MAX_AGE_YEARS` is accepted regardless of month and day.

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;

/// Upper bound on a plausible human age, in calendar years.
pub const MAX_AGE_YEARS: i32 = 120;

/// Why a birth date was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeViolation {
    InFuture,
    TooOld,
}

impl AgeViolation {
    /// Stable machine-readable code (used as the `validator` error code).
    pub fn code(self) -> &'static str {
        match self {
            AgeViolation::InFuture => "birthday_in_future",
            AgeViolation::TooOld => "birthday_too_old",
        }
    }

    /// Human-readable message shown next to the form field.
    pub fn message(self) -> String {
        match self {
            AgeViolation::InFuture => "Birth date cannot be in the future".to_string(),
            AgeViolation::TooOld => {
                format!("Expected an age of at most {MAX_AGE_YEARS} years")
            }
        }
    }
}

/// Classify `date` relative to `today`. Returns `None` when it is plausible.
pub fn check_birth_date(date: NaiveDate, today: NaiveDate) -> Option<AgeViolation> {
    if date > today {
        return Some(AgeViolation::InFuture);
    }
    if today.year() - date.year() > MAX_AGE_YEARS {
        return Some(AgeViolation::TooOld);
    }
    None
}

/// Reject birth dates in the future or implying an implausible age.
pub fn validate_birth_date(date: NaiveDate, today: NaiveDate) -> Result<(), CoreError> {
    match check_birth_date(date, today) {
        None => Ok(()),
        Some(violation) => Err(CoreError::Validation(violation.message())),
    }
}
