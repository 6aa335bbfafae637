//! # idscope-phone
//!
//! Phone number resolution and carrier/locality inference.
//!
//! ## Pipeline
//!
//! 1. [`Resolver`] strips a raw string and resolves it under an ordered list
//!    of locale contexts ([`Region`]), falling back to a locale-agnostic parse.
//! 2. [`Inferencer`] labels the resolved number with a carrier and a
//!    locality, asking the [`MetadataProvider`] first and falling back to
//!    longest-prefix matching over [`FallbackTables`].
//!
//! Both steps are pure: no network access, no caching, no shared mutable
//! state. Resolvers and tables can be shared freely across threads.

mod error;
mod infer;
mod provider;
mod region;
mod resolver;
mod table;
mod tables;

#[cfg(test)]
mod testing;

pub use error::{ParseFailure, PhoneError, PrefixTableError};
pub use infer::{Classification, Inferencer};
pub use provider::{LibPhonenumber, MetadataProvider};
pub use region::{trunk_prefix_for, Region, DEFAULT_REGIONS};
pub use resolver::{strip, NormalizedPhoneNumber, Resolver};
pub use table::{CarrierRecord, LocalityRecord, PrefixRecord, PrefixTable, UNKNOWN};
pub use tables::FallbackTables;

/// Resolves a raw string with the bundled metadata and default region order.
pub fn resolve_phone(raw: &str) -> Result<NormalizedPhoneNumber, PhoneError> {
    Resolver::new().resolve(raw)
}

/// Classifies a resolved number with the bundled metadata and tables.
pub fn classify_phone(number: &NormalizedPhoneNumber) -> Classification {
    Inferencer::new(&LibPhonenumber).classify(number)
}
