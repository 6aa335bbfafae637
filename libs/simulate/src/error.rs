//! Error types for candidate sets and seed digests.

use thiserror::Error;

/// Errors building a [`CandidateSet`](crate::CandidateSet) or reading a
/// [`SeedHash`](crate::SeedHash).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulateError {
    /// The set has no name.
    #[error("candidate set name cannot be empty")]
    EmptyName,

    /// The set has no values to select from.
    #[error("candidate set '{name}' has no values")]
    EmptyCandidateSet { name: String },

    /// A `name=a,b,c` definition without the `=`.
    #[error("invalid candidate set '{input}': expected name=value,value,...")]
    InvalidDefinition { input: String },

    /// A stored digest that is not 64 lowercase hex characters.
    #[error("invalid seed hash '{value}': expected 64 lowercase hex characters")]
    InvalidSeedHash { value: String },
}
