//! Phone metadata providers.
//!
//! The resolver and the inferencer only talk to a [`MetadataProvider`]. The
//! bundled [`LibPhonenumber`] provider wraps the `phonenumber` crate, which
//! carries numbering-plan metadata but no carrier or geocoding data, so its
//! label lookups always come back empty and the static fallback tables
//! answer instead.

use phonenumber::{country, Mode, PhoneNumber};

use crate::{ParseFailure, Region};

/// Capabilities the engine needs from a numbering-plan source.
pub trait MetadataProvider: Send + Sync {
    /// Provider-specific parsed representation.
    type Candidate;

    /// Parses `raw` assuming `region` for national-format input. `None`
    /// requests a locale-agnostic parse, which needs an explicit `+` code.
    fn parse(&self, raw: &str, region: Option<Region>) -> Result<Self::Candidate, ParseFailure>;

    /// Whether the candidate is a valid, assignable number.
    fn is_valid(&self, candidate: &Self::Candidate) -> bool;

    /// International calling code of the candidate.
    fn country_code(&self, candidate: &Self::Candidate) -> u16;

    /// National significant number, digits only, without trunk prefix.
    fn national_number(&self, candidate: &Self::Candidate) -> String;

    fn format_e164(&self, candidate: &Self::Candidate) -> String;

    fn format_international(&self, candidate: &Self::Candidate) -> String;

    /// Authoritative carrier name, if the provider knows one.
    fn carrier_name(&self, _country_code: u16, _national_number: &str) -> Option<String> {
        None
    }

    /// Authoritative locality name, if the provider knows one.
    fn locality_name(&self, _country_code: u16, _national_number: &str) -> Option<String> {
        None
    }
}

impl<P: MetadataProvider> MetadataProvider for &P {
    type Candidate = P::Candidate;

    fn parse(&self, raw: &str, region: Option<Region>) -> Result<Self::Candidate, ParseFailure> {
        (**self).parse(raw, region)
    }

    fn is_valid(&self, candidate: &Self::Candidate) -> bool {
        (**self).is_valid(candidate)
    }

    fn country_code(&self, candidate: &Self::Candidate) -> u16 {
        (**self).country_code(candidate)
    }

    fn national_number(&self, candidate: &Self::Candidate) -> String {
        (**self).national_number(candidate)
    }

    fn format_e164(&self, candidate: &Self::Candidate) -> String {
        (**self).format_e164(candidate)
    }

    fn format_international(&self, candidate: &Self::Candidate) -> String {
        (**self).format_international(candidate)
    }

    fn carrier_name(&self, country_code: u16, national_number: &str) -> Option<String> {
        (**self).carrier_name(country_code, national_number)
    }

    fn locality_name(&self, country_code: u16, national_number: &str) -> Option<String> {
        (**self).locality_name(country_code, national_number)
    }
}

/// Provider backed by the `phonenumber` crate's bundled metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhonenumber;

impl LibPhonenumber {
    fn country_id(region: Region) -> country::Id {
        match region {
            Region::Indonesia => country::Id::ID,
            Region::UnitedStates => country::Id::US,
            Region::UnitedKingdom => country::Id::GB,
            Region::Singapore => country::Id::SG,
            Region::Malaysia => country::Id::MY,
            Region::Australia => country::Id::AU,
        }
    }
}

impl MetadataProvider for LibPhonenumber {
    type Candidate = PhoneNumber;

    fn parse(&self, raw: &str, region: Option<Region>) -> Result<PhoneNumber, ParseFailure> {
        phonenumber::parse(region.map(Self::country_id), raw)
            .map_err(|e| ParseFailure(e.to_string()))
    }

    fn is_valid(&self, candidate: &PhoneNumber) -> bool {
        phonenumber::is_valid(candidate)
    }

    fn country_code(&self, candidate: &PhoneNumber) -> u16 {
        candidate.code().value()
    }

    fn national_number(&self, candidate: &PhoneNumber) -> String {
        candidate.national().value().to_string()
    }

    fn format_e164(&self, candidate: &PhoneNumber) -> String {
        candidate.format().mode(Mode::E164).to_string()
    }

    fn format_international(&self, candidate: &PhoneNumber) -> String {
        candidate.format().mode(Mode::International).to_string()
    }
}
