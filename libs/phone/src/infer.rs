//! Carrier and locality inference.
//!
//! The provider is asked first. A missing or blank label falls back to the
//! static table for the number's calling code, matched against the national
//! dialing form. Misses resolve to `"Unknown"` and are never errors.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::table::{PrefixTable, UNKNOWN};
use crate::{FallbackTables, MetadataProvider, NormalizedPhoneNumber};

/// Carrier and locality labels for one number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub carrier: String,
    pub locality: String,
}

impl Classification {
    /// True when both labels are the `"Unknown"` sentinel.
    pub fn is_unknown(&self) -> bool {
        self.carrier == UNKNOWN && self.locality == UNKNOWN
    }
}

/// Infers carrier and locality from a provider plus fallback tables.
#[derive(Debug)]
pub struct Inferencer<'a, P> {
    provider: &'a P,
    tables: &'a FallbackTables,
}

impl<'a, P: MetadataProvider> Inferencer<'a, P> {
    /// Inferencer using the built-in fallback tables.
    pub fn new(provider: &'a P) -> Self {
        Self::with_tables(provider, FallbackTables::builtin())
    }

    pub fn with_tables(provider: &'a P, tables: &'a FallbackTables) -> Self {
        Self { provider, tables }
    }

    pub fn carrier_of(&self, number: &NormalizedPhoneNumber) -> String {
        let authoritative = self
            .provider
            .carrier_name(number.country_code, &number.national_number);
        infer(
            "carrier",
            authoritative,
            self.tables.carriers(number.country_code),
            number,
        )
    }

    pub fn locality_of(&self, number: &NormalizedPhoneNumber) -> String {
        let authoritative = self
            .provider
            .locality_name(number.country_code, &number.national_number);
        infer(
            "locality",
            authoritative,
            self.tables.localities(number.country_code),
            number,
        )
    }

    pub fn classify(&self, number: &NormalizedPhoneNumber) -> Classification {
        Classification {
            carrier: self.carrier_of(number),
            locality: self.locality_of(number),
        }
    }
}

fn infer(
    kind: &'static str,
    authoritative: Option<String>,
    table: Option<&PrefixTable>,
    number: &NormalizedPhoneNumber,
) -> String {
    if let Some(label) = authoritative.filter(|label| !label.trim().is_empty()) {
        return label;
    }

    let dialing = number.national_dialing_form();
    match table.and_then(|t| t.longest_match(&dialing)) {
        Some(record) => {
            debug!(kind, prefix = %record.prefix, "fallback table hit");
            record.label.clone()
        }
        None => UNKNOWN.to_string(),
    }
}
