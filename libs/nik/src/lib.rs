//! # idscope-nik
//!
//! Structural decoding of the 16-digit Indonesian population-register code
//! (Nomor Induk Kependudukan, "NIK").
//!
//! ## Design Principles
//!
//! - Codes are parsed strictly: exactly 16 ASCII digits or nothing is decoded
//! - Decoding is a pure function of the code and a reference date
//! - Table misses degrade to `"Unknown"`, never to an error
//! - Records are plain values with serde support
//!
//! ## Example
//!
//! ```ignore
//! let record = idscope_nik::decode_identifier("3273010101970001")?;
//! assert_eq!(record.province, "Jawa Barat");
//! assert_eq!(record.location.city, "Bandung");
//! ```

mod code;
mod cohort;
mod decode;
mod error;
mod regions;

pub use code::{DateLayout, Nik, NIK_LEN};
pub use cohort::{Gender, Generation, Zodiac};
pub use decode::{
    age_on, decode, decode_at, decode_nik, resolve_century, IdentifierRecord, MAX_PLAUSIBLE_AGE,
};
pub use error::IdentifierError;
pub use regions::{city_location, province_name, Location, UNKNOWN};

/// Decodes a code against today's date.
///
/// Fails with [`IdentifierError::InvalidIdentifierFormat`] unless the input is
/// exactly 16 ASCII digits.
pub fn decode_identifier(code: &str) -> Result<IdentifierRecord, IdentifierError> {
    decode(code)
}
