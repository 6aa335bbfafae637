//! Static administrative-region tables keyed by code prefix.
//!
//! The province table and the city table are independent: a city entry
//! carries its own province name and is never reconciled against the
//! two-digit lookup.

use serde::{Deserialize, Serialize};

/// Sentinel label for codes missing from a table.
pub const UNKNOWN: &str = "Unknown";

/// Two-digit province codes.
const PROVINCES: &[(&str, &str)] = &[
    ("11", "Aceh"),
    ("12", "Sumatera Utara"),
    ("13", "Sumatera Barat"),
    ("14", "Riau"),
    ("15", "Jambi"),
    ("16", "Sumatera Selatan"),
    ("17", "Bengkulu"),
    ("18", "Lampung"),
    ("19", "Kepulauan Bangka Belitung"),
    ("21", "Kepulauan Riau"),
    ("31", "Jakarta"),
    ("32", "Jawa Barat"),
    ("33", "Jawa Tengah"),
    ("34", "Yogyakarta"),
    ("35", "Jawa Timur"),
    ("36", "Banten"),
    ("51", "Bali"),
    ("52", "Nusa Tenggara Barat"),
    ("53", "Nusa Tenggara Timur"),
    ("61", "Kalimantan Barat"),
    ("62", "Kalimantan Tengah"),
    ("63", "Kalimantan Selatan"),
    ("64", "Kalimantan Timur"),
    ("65", "Kalimantan Utara"),
    ("71", "Sulawesi Utara"),
    ("72", "Sulawesi Tengah"),
    ("73", "Sulawesi Selatan"),
    ("74", "Sulawesi Tenggara"),
    ("75", "Gorontalo"),
    ("76", "Sulawesi Barat"),
    ("81", "Maluku"),
    ("82", "Maluku Utara"),
    ("91", "Papua Barat"),
    ("92", "Papua"),
    ("94", "Papua Tengah"),
];

/// Four-digit city/regency codes.
const CITIES: &[(&str, &str, &str)] = &[
    ("3171", "Jakarta Selatan", "Jakarta"),
    ("3172", "Jakarta Timur", "Jakarta"),
    ("3173", "Jakarta Pusat", "Jakarta"),
    ("3174", "Jakarta Barat", "Jakarta"),
    ("3175", "Jakarta Utara", "Jakarta"),
    ("3273", "Bandung", "Jawa Barat"),
    ("3374", "Semarang", "Jawa Tengah"),
    ("3578", "Surabaya", "Jawa Timur"),
];

/// City and province named by the four-digit city table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub province: String,
}

impl Location {
    fn unknown() -> Self {
        Self {
            city: UNKNOWN.to_string(),
            province: UNKNOWN.to_string(),
        }
    }

    /// Returns true when the city table had no entry.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.city == UNKNOWN && self.province == UNKNOWN
    }
}

/// Resolves a two-digit province code, or [`UNKNOWN`].
#[must_use]
pub fn province_name(code: &str) -> &'static str {
    PROVINCES
        .binary_search_by(|(k, _)| (*k).cmp(code))
        .map(|idx| PROVINCES[idx].1)
        .unwrap_or(UNKNOWN)
}

/// Resolves a four-digit city code to its `{city, province}` pair.
#[must_use]
pub fn city_location(code: &str) -> Location {
    CITIES
        .binary_search_by(|(k, _, _)| (*k).cmp(code))
        .map(|idx| {
            let (_, city, province) = CITIES[idx];
            Location {
                city: city.to_string(),
                province: province.to_string(),
            }
        })
        .unwrap_or_else(|_| Location::unknown())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_sorted_and_unique() {
        // binary search depends on strict ordering
        assert!(PROVINCES.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(CITIES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_province_lookup() {
        assert_eq!(province_name("32"), "Jawa Barat");
        assert_eq!(province_name("11"), "Aceh");
        assert_eq!(province_name("94"), "Papua Tengah");
        assert_eq!(province_name("99"), UNKNOWN);
        assert_eq!(province_name("00"), UNKNOWN);
    }

    #[test]
    fn test_city_lookup() {
        let loc = city_location("3273");
        assert_eq!(loc.city, "Bandung");
        assert_eq!(loc.province, "Jawa Barat");
        assert!(!loc.is_unknown());
    }

    #[test]
    fn test_city_lookup_miss() {
        let loc = city_location("3201");
        assert!(loc.is_unknown());
        assert_eq!(loc.city, UNKNOWN);
        assert_eq!(loc.province, UNKNOWN);
    }

    #[test]
    fn test_city_provinces_exist_in_province_table() {
        for (code, _, province) in CITIES {
            assert_eq!(province_name(&code[..2]), *province);
        }
    }
}
