//! Error types for phone resolution and prefix tables.

use thiserror::Error;

/// Errors returned by the resolver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// No locale context and no locale-agnostic parse produced a valid number.
    #[error("unparsable phone number: '{input}'")]
    UnparsableNumber { input: String },

    /// A region code that is not one of the supported locale contexts.
    #[error("unknown region '{0}'")]
    UnknownRegion(String),
}

impl PhoneError {
    /// Returns true if the input could not be resolved to a number.
    pub fn is_unparsable(&self) -> bool {
        matches!(self, PhoneError::UnparsableNumber { .. })
    }
}

/// Errors building a prefix table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrefixTableError {
    /// A record has an empty prefix.
    #[error("prefix cannot be empty (label '{label}')")]
    EmptyPrefix { label: String },

    /// A prefix contains something other than decimal digits.
    #[error("prefix '{prefix}' must contain only digits")]
    NonDigitPrefix { prefix: String },

    /// Two records share a prefix.
    #[error("duplicate prefix '{prefix}'")]
    DuplicatePrefix { prefix: String },
}

/// A provider could not parse the input under the requested context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ParseFailure(pub String);
