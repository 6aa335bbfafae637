//! Attributes derived from the birth date and the parity digit.

use serde::{Deserialize, Serialize};

/// Gender encoded by the parity of the trailing digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Odd digits are male, even digits female. No other field is consulted.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Self {
        if digit % 2 == 1 {
            Self::Male
        } else {
            Self::Female
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Western zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zodiac {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

/// `(month, last day inclusive, sign)` in calendar order. The final row
/// catches the tail of December.
const ZODIAC_BOUNDARIES: [(u32, u32, Zodiac); 13] = [
    (1, 20, Zodiac::Capricorn),
    (2, 19, Zodiac::Aquarius),
    (3, 21, Zodiac::Pisces),
    (4, 20, Zodiac::Aries),
    (5, 21, Zodiac::Taurus),
    (6, 21, Zodiac::Gemini),
    (7, 23, Zodiac::Cancer),
    (8, 23, Zodiac::Leo),
    (9, 23, Zodiac::Virgo),
    (10, 23, Zodiac::Libra),
    (11, 22, Zodiac::Scorpio),
    (12, 21, Zodiac::Sagittarius),
    (12, 31, Zodiac::Capricorn),
];

impl Zodiac {
    /// Looks up the sign for a month/day pair.
    ///
    /// Returns `None` only for a month outside 1..=12 or a day past 31.
    #[must_use]
    pub fn from_month_day(month: u32, day: u32) -> Option<Self> {
        ZODIAC_BOUNDARIES
            .iter()
            .find(|(m, cutoff, _)| (month == *m && day <= *cutoff) || month < *m)
            .filter(|_| month >= 1)
            .map(|(_, _, sign)| *sign)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
        }
    }
}

impl std::fmt::Display for Zodiac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named birth-year cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Generation {
    SilentGeneration,
    BabyBoomers,
    GenX,
    Millennials,
    GenZ,
    GenAlpha,
}

impl Generation {
    /// Maps a four-digit birth year to its cohort. Each threshold is
    /// inclusive, so a boundary year belongs to the newer cohort.
    #[must_use]
    pub const fn from_birth_year(year: i32) -> Self {
        if year >= 2010 {
            Self::GenAlpha
        } else if year >= 1997 {
            Self::GenZ
        } else if year >= 1981 {
            Self::Millennials
        } else if year >= 1965 {
            Self::GenX
        } else if year >= 1946 {
            Self::BabyBoomers
        } else {
            Self::SilentGeneration
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SilentGeneration => "Silent Generation",
            Self::BabyBoomers => "Baby Boomers",
            Self::GenX => "Gen X",
            Self::Millennials => "Millennials",
            Self::GenZ => "Gen Z",
            Self::GenAlpha => "Gen Alpha",
        }
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, Gender::Male)]
    #[case(3, Gender::Male)]
    #[case(9, Gender::Male)]
    #[case(0, Gender::Female)]
    #[case(2, Gender::Female)]
    #[case(8, Gender::Female)]
    fn test_gender_parity(#[case] digit: u8, #[case] expected: Gender) {
        assert_eq!(Gender::from_digit(digit), expected);
    }

    #[rstest]
    #[case(12, 22, Zodiac::Capricorn)]
    #[case(12, 21, Zodiac::Sagittarius)]
    #[case(12, 31, Zodiac::Capricorn)]
    #[case(1, 1, Zodiac::Capricorn)]
    #[case(1, 20, Zodiac::Capricorn)]
    #[case(1, 21, Zodiac::Aquarius)]
    #[case(2, 19, Zodiac::Aquarius)]
    #[case(2, 20, Zodiac::Pisces)]
    #[case(3, 21, Zodiac::Pisces)]
    #[case(3, 22, Zodiac::Aries)]
    #[case(7, 23, Zodiac::Cancer)]
    #[case(7, 24, Zodiac::Leo)]
    #[case(11, 22, Zodiac::Scorpio)]
    #[case(11, 23, Zodiac::Sagittarius)]
    fn test_zodiac_boundaries(#[case] month: u32, #[case] day: u32, #[case] expected: Zodiac) {
        assert_eq!(Zodiac::from_month_day(month, day), Some(expected));
    }

    #[test]
    fn test_zodiac_out_of_range() {
        assert_eq!(Zodiac::from_month_day(13, 1), None);
        assert_eq!(Zodiac::from_month_day(0, 1), None);
        assert_eq!(Zodiac::from_month_day(12, 32), None);
    }

    #[test]
    fn test_zodiac_covers_every_calendar_day() {
        let days_in_month = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (idx, days) in days_in_month.iter().enumerate() {
            let month = idx as u32 + 1;
            for day in 1..=*days {
                assert!(
                    Zodiac::from_month_day(month, day).is_some(),
                    "no sign for {month}/{day}"
                );
            }
        }
    }

    #[rstest]
    #[case(2010, Generation::GenAlpha)]
    #[case(2024, Generation::GenAlpha)]
    #[case(2009, Generation::GenZ)]
    #[case(1997, Generation::GenZ)]
    #[case(1996, Generation::Millennials)]
    #[case(1981, Generation::Millennials)]
    #[case(1980, Generation::GenX)]
    #[case(1965, Generation::GenX)]
    #[case(1964, Generation::BabyBoomers)]
    #[case(1946, Generation::BabyBoomers)]
    #[case(1945, Generation::SilentGeneration)]
    #[case(1901, Generation::SilentGeneration)]
    fn test_generation_thresholds(#[case] year: i32, #[case] expected: Generation) {
        assert_eq!(Generation::from_birth_year(year), expected);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Generation::GenZ.to_string(), "Gen Z");
        assert_eq!(Generation::SilentGeneration.to_string(), "Silent Generation");
        assert_eq!(Zodiac::Sagittarius.to_string(), "Sagittarius");
        assert_eq!(Gender::Female.to_string(), "Female");
    }
}
