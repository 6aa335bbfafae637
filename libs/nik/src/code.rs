//! The validated 16-digit code and its fixed-offset fields.
//!
//! ```text
//! 32 73 01 01 01 97 000 1
//! PP CC DD B1 B2 B3 SSS G
//! ```
//!
//! `PP` province, `PPCC` city, `PPCCDD` district, `B1 B2 B3` the birth
//! date groups (see [`DateLayout`]), `SSS` birth-order sequence, `G` gender
//! parity digit.

use serde::{Deserialize, Serialize};

use crate::IdentifierError;

/// Number of characters in a NIK.
pub const NIK_LEN: usize = 16;

/// Order of the year, month and day groups inside the six birth-date digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateLayout {
    /// `YY MM DD` at offsets 6, 8 and 10.
    YearMonthDay,
    /// `DD MM YY`, the order printed on registration cards.
    DayMonthYear,
}

impl DateLayout {
    /// Splits the written groups into `(year_2digit, month, day)`.
    #[must_use]
    pub fn split(self, groups: [u32; 3]) -> (u32, u32, u32) {
        match self {
            DateLayout::YearMonthDay => (groups[0], groups[1], groups[2]),
            DateLayout::DayMonthYear => (groups[2], groups[1], groups[0]),
        }
    }
}

/// A strictly parsed NIK: exactly 16 ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nik([u8; NIK_LEN]);

impl Nik {
    /// Parses a code, rejecting anything that is not exactly 16 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, IdentifierError> {
        if s.is_empty() {
            return Err(IdentifierError::format("identifier cannot be empty"));
        }

        let bytes = s.as_bytes();
        if bytes.len() != NIK_LEN {
            return Err(IdentifierError::format(format!(
                "expected {NIK_LEN} digits, got {} characters",
                s.chars().count()
            )));
        }

        if let Some(pos) = bytes.iter().position(|b| !b.is_ascii_digit()) {
            return Err(IdentifierError::format(format!(
                "non-digit character at position {pos}"
            )));
        }

        let mut digits = [0u8; NIK_LEN];
        digits.copy_from_slice(bytes);
        Ok(Self(digits))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    fn field(&self, start: usize, end: usize) -> &str {
        &self.as_str()[start..end]
    }

    fn number(&self, start: usize, end: usize) -> u32 {
        self.0[start..end]
            .iter()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }

    /// Two-digit province code, `code[0:2]`.
    #[must_use]
    pub fn province_code(&self) -> &str {
        self.field(0, 2)
    }

    /// Four-digit city/regency code, `code[0:4]`.
    #[must_use]
    pub fn city_code(&self) -> &str {
        self.field(0, 4)
    }

    /// Six-digit district code, `code[0:6]`.
    #[must_use]
    pub fn district_code(&self) -> &str {
        self.field(0, 6)
    }

    /// The three two-digit groups of the birth date, `code[6:8]`,
    /// `code[8:10]` and `code[10:12]`, in the order they are written.
    ///
    /// Which group is the year depends on the [`DateLayout`] used to read
    /// them.
    #[must_use]
    pub fn date_groups(&self) -> [u32; 3] {
        [self.number(6, 8), self.number(8, 10), self.number(10, 12)]
    }

    /// Three-digit birth-order sequence, `code[12:15]`.
    #[must_use]
    pub fn sequence(&self) -> &str {
        self.field(12, 15)
    }

    /// The trailing gender parity digit, `code[15]`.
    #[must_use]
    pub fn gender_digit(&self) -> u8 {
        self.0[15] - b'0'
    }
}

impl std::fmt::Display for Nik {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Nik {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Nik {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Nik {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
