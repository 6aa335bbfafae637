//! Built-in fallback tables, scoped by calling code.
//!
//! Prefixes are written in national dialing form (trunk prefix included),
//! which is what the inferencer matches against.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::error;

use crate::table::PrefixTable;

const INDONESIA_CARRIERS: &[(&str, &str)] = &[
    ("0811", "Telkomsel (Halo)"),
    ("0812", "Telkomsel (Simpati)"),
    ("0813", "Telkomsel (Simpati)"),
    ("0821", "Telkomsel (Simpati)"),
    ("0822", "Telkomsel (Simpati)"),
    ("0823", "Telkomsel (AS)"),
    ("0852", "Telkomsel (AS)"),
    ("0853", "Telkomsel (AS)"),
    ("0814", "Indosat (Matrix)"),
    ("0815", "Indosat (Matrix)"),
    ("0816", "Indosat (IM3)"),
    ("0855", "Indosat (IM3)"),
    ("0856", "Indosat (IM3)"),
    ("0857", "Indosat (IM3)"),
    ("0858", "Indosat (Mentari)"),
    ("0817", "XL"),
    ("0818", "XL"),
    ("0819", "XL"),
    ("0859", "XL"),
    ("0877", "XL"),
    ("0878", "XL"),
    ("0831", "AXIS"),
    ("0832", "AXIS"),
    ("0833", "AXIS"),
    ("0838", "AXIS"),
    ("0895", "Three"),
    ("0896", "Three"),
    ("0897", "Three"),
    ("0898", "Three"),
    ("0899", "Three"),
    ("0881", "Smartfren"),
    ("0882", "Smartfren"),
    ("0883", "Smartfren"),
    ("0884", "Smartfren"),
    ("0885", "Smartfren"),
    ("0886", "Smartfren"),
    ("0887", "Smartfren"),
    ("0888", "Smartfren"),
    ("0889", "Smartfren"),
];

const MALAYSIA_CARRIERS: &[(&str, &str)] = &[("012", "Maxis"), ("019", "Celcom")];

const INDONESIA_AREA_CODES: &[(&str, &str)] = &[
    ("021", "Jakarta"),
    ("022", "Bandung"),
    ("024", "Semarang"),
    ("0271", "Solo"),
    ("0274", "Yogyakarta"),
    ("031", "Surabaya"),
    ("0361", "Denpasar"),
    ("0431", "Manado"),
    ("061", "Medan"),
    ("0711", "Palembang"),
    ("0751", "Padang"),
];

static BUILTIN: LazyLock<FallbackTables> = LazyLock::new(|| {
    FallbackTables::new()
        .with_carriers(62, builtin_table("carriers/62", INDONESIA_CARRIERS))
        .with_carriers(60, builtin_table("carriers/60", MALAYSIA_CARRIERS))
        .with_localities(62, builtin_table("localities/62", INDONESIA_AREA_CODES))
});

fn builtin_table(name: &str, pairs: &[(&str, &str)]) -> PrefixTable {
    PrefixTable::from_pairs(pairs).unwrap_or_else(|e| {
        error!(table = name, error = %e, "built-in prefix table rejected");
        PrefixTable::default()
    })
}

/// Carrier and locality tables keyed by calling code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackTables {
    carriers: BTreeMap<u16, PrefixTable>,
    localities: BTreeMap<u16, PrefixTable>,
}

impl FallbackTables {
    /// Empty tables: every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tables shipped with the crate.
    pub fn builtin() -> &'static FallbackTables {
        &BUILTIN
    }

    /// Sets the carrier table for a calling code.
    pub fn with_carriers(mut self, country_code: u16, table: PrefixTable) -> Self {
        self.carriers.insert(country_code, table);
        self
    }

    /// Sets the locality table for a calling code.
    pub fn with_localities(mut self, country_code: u16, table: PrefixTable) -> Self {
        self.localities.insert(country_code, table);
        self
    }

    pub fn carriers(&self, country_code: u16) -> Option<&PrefixTable> {
        self.carriers.get(&country_code)
    }

    pub fn localities(&self, country_code: u16) -> Option<&PrefixTable> {
        self.localities.get(&country_code)
    }
}
