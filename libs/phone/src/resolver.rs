//! Locale-disambiguating phone number resolution.
//!
//! A short national number is often structurally valid in more than one
//! country. The resolver tries an ordered list of regions and keeps the first
//! one that yields a valid number belonging to that region's calling code.
//! Only when none does is a single locale-agnostic parse attempted, which
//! requires an explicit `+` calling code.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::region::{trunk_prefix_for, DEFAULT_REGIONS};
use crate::{LibPhonenumber, MetadataProvider, PhoneError, Region};

/// A validated phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedPhoneNumber {
    pub e164: String,
    pub international: String,
    pub country_code: u16,
    /// Digits only, without trunk prefix or leading zero.
    pub national_number: String,
    /// Region that produced the parse; `None` for a locale-agnostic parse.
    pub locale_context: Option<Region>,
    pub is_valid: bool,
}

impl NormalizedPhoneNumber {
    /// The number as dialled inside its own country, with the trunk prefix
    /// restored (`8123456789` becomes `08123456789` in Indonesia).
    #[must_use]
    pub fn national_dialing_form(&self) -> String {
        format!(
            "{}{}",
            trunk_prefix_for(self.country_code),
            self.national_number
        )
    }
}

/// Removes every character that is not a decimal digit. A `+` survives only
/// when it comes before all digits.
#[must_use]
pub fn strip(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() || (c == '+' && out.is_empty()) {
            out.push(c);
        }
    }
    out
}

/// Resolves raw strings against an ordered list of locale contexts.
#[derive(Debug, Clone)]
pub struct Resolver<P = LibPhonenumber> {
    provider: P,
    regions: Vec<Region>,
}

impl Resolver<LibPhonenumber> {
    /// Resolver over the bundled metadata with the default region order.
    pub fn new() -> Self {
        Self::with_provider(LibPhonenumber)
    }
}

impl Default for Resolver<LibPhonenumber> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MetadataProvider> Resolver<P> {
    /// Resolver over a custom provider with the default region order.
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            regions: DEFAULT_REGIONS.to_vec(),
        }
    }

    /// Replaces the region order. The order is significant: earlier regions
    /// win when a number is valid in several.
    pub fn regions(mut self, regions: Vec<Region>) -> Self {
        self.regions = regions;
        self
    }

    /// The configured region order.
    pub fn region_order(&self) -> &[Region] {
        &self.regions
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolves a raw string to a validated number.
    pub fn resolve(&self, raw: &str) -> Result<NormalizedPhoneNumber, PhoneError> {
        let cleaned = strip(raw);
        let unparsable = || PhoneError::UnparsableNumber {
            input: raw.to_string(),
        };

        if !cleaned.bytes().any(|b| b.is_ascii_digit()) {
            return Err(unparsable());
        }

        for region in &self.regions {
            match self.provider.parse(&cleaned, Some(*region)) {
                Ok(candidate) => {
                    if self.provider.is_valid(&candidate)
                        && self.provider.country_code(&candidate) == region.calling_code()
                    {
                        debug!(region = %region, "phone number resolved");
                        return Ok(self.normalize(&candidate, Some(*region)));
                    }
                    trace!(region = %region, "parsed but not valid for region");
                }
                Err(e) => trace!(region = %region, error = %e, "parse failed"),
            }
        }

        if !cleaned.starts_with('+') {
            return Err(unparsable());
        }

        match self.provider.parse(&cleaned, None) {
            Ok(candidate) if self.provider.is_valid(&candidate) => {
                debug!("phone number resolved without locale context");
                Ok(self.normalize(&candidate, None))
            }
            Ok(_) => Err(unparsable()),
            Err(e) => {
                trace!(error = %e, "locale-agnostic parse failed");
                Err(unparsable())
            }
        }
    }

    fn normalize(&self, candidate: &P::Candidate, region: Option<Region>) -> NormalizedPhoneNumber {
        let national_number: String = self
            .provider
            .national_number(candidate)
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        NormalizedPhoneNumber {
            e164: self.provider.format_e164(candidate),
            international: self.provider.format_international(candidate),
            country_code: self.provider.country_code(candidate),
            national_number,
            locale_context: region,
            is_valid: self.provider.is_valid(candidate),
        }
    }
}
