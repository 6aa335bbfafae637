//! In-memory provider with a tiny numbering plan, used by unit tests.

use std::collections::BTreeMap;

use crate::{MetadataProvider, ParseFailure, Region};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FakeNumber {
    code: u16,
    national: String,
}

/// Knows the calling codes of [`Region::ALL`] and a rough validity rule per
/// country. Carrier and locality labels are empty unless seeded.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeMetadata {
    carriers: BTreeMap<(u16, String), String>,
    localities: BTreeMap<(u16, String), String>,
}

impl FakeMetadata {
    pub(crate) fn with_carrier(mut self, code: u16, national: &str, label: &str) -> Self {
        self.carriers
            .insert((code, national.to_string()), label.to_string());
        self
    }

    pub(crate) fn with_locality(mut self, code: u16, national: &str, label: &str) -> Self {
        self.localities
            .insert((code, national.to_string()), label.to_string());
        self
    }
}

impl MetadataProvider for FakeMetadata {
    type Candidate = FakeNumber;

    fn parse(&self, raw: &str, region: Option<Region>) -> Result<FakeNumber, ParseFailure> {
        let (code, national) = if let Some(rest) = raw.strip_prefix('+') {
            let region = Region::ALL
                .into_iter()
                .find(|r| rest.starts_with(&r.calling_code().to_string()))
                .ok_or_else(|| ParseFailure("invalid country code".to_string()))?;
            let len = region.calling_code().to_string().len();
            (region.calling_code(), rest[len..].to_string())
        } else {
            let region = region.ok_or_else(|| ParseFailure("missing country".to_string()))?;
            let national = raw.strip_prefix(region.trunk_prefix()).unwrap_or(raw);
            (region.calling_code(), national.to_string())
        };

        if national.is_empty() {
            return Err(ParseFailure("no national number".to_string()));
        }
        Ok(FakeNumber { code, national })
    }

    fn is_valid(&self, c: &FakeNumber) -> bool {
        let n = c.national.as_str();
        let len = n.len();
        match c.code {
            62 => {
                let mobile = n.starts_with('8') && (9..=12).contains(&len);
                let fixed = ["21", "22", "24", "31", "61"]
                    .iter()
                    .any(|p| n.starts_with(p))
                    && (9..=10).contains(&len);
                mobile || fixed
            }
            1 => len == 10 && !n.starts_with('0') && !n.starts_with('1'),
            44 => len == 10 && (n.starts_with('2') || n.starts_with('7')),
            65 => len == 8 && (n.starts_with('8') || n.starts_with('9')),
            60 => n.starts_with('1') && (9..=10).contains(&len),
            61 => n.starts_with('4') && len == 9,
            _ => false,
        }
    }

    fn country_code(&self, c: &FakeNumber) -> u16 {
        c.code
    }

    fn national_number(&self, c: &FakeNumber) -> String {
        c.national.clone()
    }

    fn format_e164(&self, c: &FakeNumber) -> String {
        format!("+{}{}", c.code, c.national)
    }

    fn format_international(&self, c: &FakeNumber) -> String {
        format!("+{} {}", c.code, c.national)
    }

    fn carrier_name(&self, country_code: u16, national_number: &str) -> Option<String> {
        self.carriers
            .get(&(country_code, national_number.to_string()))
            .cloned()
    }

    fn locality_name(&self, country_code: u16, national_number: &str) -> Option<String> {
        self.localities
            .get(&(country_code, national_number.to_string()))
            .cloned()
    }
}
