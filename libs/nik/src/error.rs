//! Error types for identifier parsing and decoding.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when parsing or decoding a NIK.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The code is not exactly 16 ASCII digits.
    #[error("invalid identifier format: {reason}")]
    InvalidIdentifierFormat { reason: String },

    /// The embedded birth date does not exist on the calendar.
    #[error("invalid birth date in identifier: {year:04}-{month:02}-{day:02}")]
    InvalidBirthDate { year: i32, month: u32, day: u32 },

    /// The birth date resolves to a day after the reference date.
    #[error("birth date {birth} is after reference date {reference}")]
    BirthDateAfterReference {
        birth: NaiveDate,
        reference: NaiveDate,
    },
}

impl IdentifierError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Self::InvalidIdentifierFormat {
            reason: reason.into(),
        }
    }

    /// Returns true if the code failed the structural format check.
    pub fn is_format_error(&self) -> bool {
        matches!(self, IdentifierError::InvalidIdentifierFormat { .. })
    }

    /// Returns true if the format was fine but the birth date is unusable.
    pub fn is_date_error(&self) -> bool {
        matches!(
            self,
            IdentifierError::InvalidBirthDate { .. } | IdentifierError::BirthDateAfterReference { .. }
        )
    }
}
