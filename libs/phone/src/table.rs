//! Longest-prefix-match lookup tables.
//!
//! Records are kept sorted by descending prefix length, so the first record
//! whose prefix matches is also the most specific one. Ties in length are
//! ordered by prefix, which keeps iteration deterministic.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::PrefixTableError;

/// Sentinel label returned when nothing matches.
pub const UNKNOWN: &str = "Unknown";

/// A digit prefix and the label it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefixRecord {
    pub prefix: String,
    pub label: String,
}

/// Carrier table entry.
pub type CarrierRecord = PrefixRecord;

/// Locality (area code) table entry.
pub type LocalityRecord = PrefixRecord;

impl PrefixRecord {
    pub fn new(prefix: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            label: label.into(),
        }
    }
}

/// An immutable set of prefix records with unique prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable {
    records: Vec<PrefixRecord>,
}

impl PrefixTable {
    /// Builds a table, rejecting empty, non-digit, or duplicate prefixes.
    pub fn new<I>(records: I) -> Result<Self, PrefixTableError>
    where
        I: IntoIterator<Item = PrefixRecord>,
    {
        let mut seen = BTreeSet::new();
        let mut sorted: Vec<PrefixRecord> = Vec::new();

        for record in records {
            if record.prefix.is_empty() {
                return Err(PrefixTableError::EmptyPrefix {
                    label: record.label,
                });
            }
            if !record.prefix.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PrefixTableError::NonDigitPrefix {
                    prefix: record.prefix,
                });
            }
            if !seen.insert(record.prefix.clone()) {
                return Err(PrefixTableError::DuplicatePrefix {
                    prefix: record.prefix,
                });
            }
            sorted.push(record);
        }

        sorted.sort_by(|a, b| {
            b.prefix
                .len()
                .cmp(&a.prefix.len())
                .then_with(|| a.prefix.cmp(&b.prefix))
        });

        Ok(Self { records: sorted })
    }

    /// Builds a table from `(prefix, label)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, PrefixTableError> {
        Self::new(pairs.iter().map(|(p, l)| PrefixRecord::new(*p, *l)))
    }

    /// The most specific record whose prefix starts `digits`.
    pub fn longest_match(&self, digits: &str) -> Option<&PrefixRecord> {
        self.records
            .iter()
            .find(|record| digits.starts_with(record.prefix.as_str()))
    }

    /// The label of the longest match, or [`UNKNOWN`].
    pub fn lookup(&self, digits: &str) -> &str {
        self.longest_match(digits)
            .map(|record| record.label.as_str())
            .unwrap_or(UNKNOWN)
    }

    /// Records in match order (longest prefix first).
    pub fn iter(&self) -> impl Iterator<Item = &PrefixRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_longest_prefix_wins() {
        let table = PrefixTable::from_pairs(&[("081", "Group"), ("0812", "Specific")]).unwrap();
        assert_eq!(table.lookup("08123456789"), "Specific");
        assert_eq!(table.lookup("08150000000"), "Group");
        assert_eq!(table.lookup("0899"), UNKNOWN);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let a = PrefixTable::from_pairs(&[("0812", "Specific"), ("081", "Group")]).unwrap();
        let b = PrefixTable::from_pairs(&[("081", "Group"), ("0812", "Specific")]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.longest_match("0812").map(|r| r.label.as_str()), Some("Specific"));
    }

    #[test]
    fn test_duplicate_prefix_rejected() {
        let err = PrefixTable::from_pairs(&[("0812", "A"), ("0812", "B")]).unwrap_err();
        assert_eq!(
            err,
            PrefixTableError::DuplicatePrefix {
                prefix: "0812".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_prefixes_rejected() {
        assert!(matches!(
            PrefixTable::from_pairs(&[("", "A")]),
            Err(PrefixTableError::EmptyPrefix { .. })
        ));
        assert!(matches!(
            PrefixTable::from_pairs(&[("08a", "A")]),
            Err(PrefixTableError::NonDigitPrefix { .. })
        ));
    }

    #[test]
    fn test_iter_is_longest_first() {
        let table = PrefixTable::from_pairs(&[("0", "a"), ("021", "b"), ("02", "c")]).unwrap();
        let prefixes: Vec<_> = table.iter().map(|r| r.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["021", "02", "0"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    proptest! {
        #[test]
        fn match_is_a_prefix_and_no_longer_match_exists(
            prefixes in proptest::collection::btree_set("[0-9]{1,4}", 1..20),
            digits in "[0-9]{0,12}",
        ) {
            let table = PrefixTable::new(
                prefixes.iter().map(|p| PrefixRecord::new(p.clone(), p.clone())),
            )
            .unwrap();

            match table.longest_match(&digits) {
                Some(found) => {
                    prop_assert!(digits.starts_with(&found.prefix));
                    for p in &prefixes {
                        if digits.starts_with(p.as_str()) {
                            prop_assert!(p.len() <= found.prefix.len());
                        }
                    }
                }
                None => {
                    prop_assert!(prefixes.iter().all(|p| !digits.starts_with(p.as_str())));
                }
            }
        }
    }
}
