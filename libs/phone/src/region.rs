//! Supported locale contexts.

use serde::{Deserialize, Serialize};

use crate::PhoneError;

/// A country used as the parsing assumption for national-format input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Region {
    Indonesia,
    UnitedStates,
    UnitedKingdom,
    Singapore,
    Malaysia,
    Australia,
}

/// Default resolution order: the primary region first, then the fallbacks.
pub const DEFAULT_REGIONS: [Region; 6] = [
    Region::Indonesia,
    Region::UnitedStates,
    Region::UnitedKingdom,
    Region::Singapore,
    Region::Malaysia,
    Region::Australia,
];

impl Region {
    /// Every supported region.
    pub const ALL: [Region; 6] = DEFAULT_REGIONS;

    /// ISO 3166-1 alpha-2 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Region::Indonesia => "ID",
            Region::UnitedStates => "US",
            Region::UnitedKingdom => "GB",
            Region::Singapore => "SG",
            Region::Malaysia => "MY",
            Region::Australia => "AU",
        }
    }

    /// International calling code.
    #[must_use]
    pub const fn calling_code(&self) -> u16 {
        match self {
            Region::Indonesia => 62,
            Region::UnitedStates => 1,
            Region::UnitedKingdom => 44,
            Region::Singapore => 65,
            Region::Malaysia => 60,
            Region::Australia => 61,
        }
    }

    /// Digits dialled before a national number inside the country.
    #[must_use]
    pub const fn trunk_prefix(&self) -> &'static str {
        match self {
            Region::UnitedStates => "1",
            Region::Singapore => "",
            _ => "0",
        }
    }

    /// Finds the supported region that owns a calling code.
    #[must_use]
    pub fn for_calling_code(code: u16) -> Option<Region> {
        Self::ALL.into_iter().find(|r| r.calling_code() == code)
    }

    /// Parses a comma-separated list such as `"ID,US,SG"`, keeping order.
    pub fn parse_list(s: &str) -> Result<Vec<Region>, PhoneError> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect()
    }
}

/// Trunk prefix for a calling code, empty when the country is not supported.
#[must_use]
pub fn trunk_prefix_for(country_code: u16) -> &'static str {
    Region::for_calling_code(country_code)
        .map(|r| r.trunk_prefix())
        .unwrap_or("")
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Region {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|r| r.code() == upper)
            .ok_or_else(|| PhoneError::UnknownRegion(s.to_string()))
    }
}

impl TryFrom<String> for Region {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.code().to_string()
    }
}
