//! Seed digests.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{CandidateSet, SimulateError};

/// Number of hex characters in a digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// SHA-256 digest of a seed input, hex encoded.
///
/// Every selector reads one hex character of the digest. Positions wrap
/// modulo [`DIGEST_HEX_LEN`], so any index is readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeedHash(String);

impl TryFrom<String> for SeedHash {
    type Error = SimulateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let well_formed = value.len() == DIGEST_HEX_LEN
            && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        if !well_formed {
            return Err(SimulateError::InvalidSeedHash { value });
        }
        Ok(Self(value))
    }
}

impl From<SeedHash> for String {
    fn from(hash: SeedHash) -> Self {
        hash.0
    }
}

impl SeedHash {
    /// Digest of `seed` as UTF-8 bytes.
    pub fn of(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        Self(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value (0-15) of the hex character at `position`.
    pub fn nibble(&self, position: usize) -> u8 {
        let c = self
            .0
            .as_bytes()
            .get(position % DIGEST_HEX_LEN)
            .copied()
            .unwrap_or(b'0');
        match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            _ => 0,
        }
    }

    /// Selects a value from `set` by the nibble at `position` modulo its size.
    pub fn select<'a>(&self, position: usize, set: &'a CandidateSet) -> &'a str {
        let values = set.values();
        &values[usize::from(self.nibble(position)) % values.len()]
    }

    /// Whether an optional fact is present: the nibble at `position` is a
    /// multiple of `modulus`. A zero modulus is never present.
    pub fn gate(&self, position: usize, modulus: u8) -> bool {
        modulus != 0 && self.nibble(position) % modulus == 0
    }
}

impl fmt::Display for SeedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        let hash = SeedHash::of("abc");
        assert_eq!(
            hash.as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(hash.nibble(0), 0xb);
        assert_eq!(hash.nibble(1), 0xa);
        assert_eq!(hash.nibble(2), 7);
        assert_eq!(hash.nibble(DIGEST_HEX_LEN), hash.nibble(0));
    }

    #[test]
    fn test_select_by_modulo() {
        let hash = SeedHash::of("abc");
        let set = CandidateSet::new("colour", ["red", "green", "blue"]).unwrap();
        // 0xb = 11, 11 % 3 = 2
        assert_eq!(hash.select(0, &set), "blue");
        // 0xa = 10, 10 % 3 = 1
        assert_eq!(hash.select(1, &set), "green");
    }

    #[test]
    fn test_serde_round_trip() {
        let hash = SeedHash::of("abc");
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{hash}\""));
        assert_eq!(serde_json::from_str::<SeedHash>(&json).unwrap(), hash);
    }

    #[test]
    fn test_rejects_malformed_digests() {
        let upper = SeedHash::of("abc").as_str().to_uppercase();
        let mut garbage = "z".repeat(DIGEST_HEX_LEN);
        assert!(SeedHash::try_from(upper).is_err());
        assert!(SeedHash::try_from("ba7816bf".to_string()).is_err());
        assert!(SeedHash::try_from(garbage.clone()).is_err());

        garbage = format!("\"{garbage}\"");
        let err = serde_json::from_str::<SeedHash>(&garbage).unwrap_err();
        assert!(err.to_string().contains("invalid seed hash"));
    }

    #[test]
    fn test_gate() {
        let hash = SeedHash::of("abc");
        // nibble(2) = 7
        assert!(hash.gate(2, 1));
        assert!(hash.gate(2, 7));
        assert!(!hash.gate(2, 2));
        assert!(!hash.gate(2, 0));
    }
}
