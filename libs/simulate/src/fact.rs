//! Candidate sets and simulated facts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{SeedHash, SimulateError};

/// A named, non-empty list of values a fact may take.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCandidateSet")]
pub struct CandidateSet {
    name: String,
    values: Vec<String>,
}

#[derive(Deserialize)]
struct RawCandidateSet {
    name: String,
    values: Vec<String>,
}

impl TryFrom<RawCandidateSet> for CandidateSet {
    type Error = SimulateError;

    fn try_from(raw: RawCandidateSet) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.values)
    }
}

impl CandidateSet {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Result<Self, SimulateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SimulateError::EmptyName);
        }
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(SimulateError::EmptyCandidateSet { name });
        }
        Ok(Self { name, values })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values in selection order. Never empty.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl FromStr for CandidateSet {
    type Err = SimulateError;

    /// Parses `name=a,b,c`. Blank values are dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, values) = s
            .split_once('=')
            .ok_or_else(|| SimulateError::InvalidDefinition {
                input: s.to_string(),
            })?;
        let values = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty());
        Self::new(name.trim(), values)
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.values.join(","))
    }
}

/// A placeholder value chosen from a digest. Not derived from any record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimulatedFact {
    pub seed_hash: SeedHash,
    /// Nibble read from the digest.
    pub selector_bits: u8,
    /// Digest character that was read.
    pub position: usize,
    pub derived_value: String,
    /// Name of the candidate set.
    pub label: String,
}

/// Simulates one fact, reading digest position 0.
pub fn simulate_fact(seed: &str, set: &CandidateSet) -> SimulatedFact {
    fact_at(&SeedHash::of(seed), 0, set)
}

/// Simulates one fact per set. Set `i` reads digest position `i`.
pub fn simulate(seed: &str, sets: &[CandidateSet]) -> Vec<SimulatedFact> {
    let hash = SeedHash::of(seed);
    sets.iter()
        .enumerate()
        .map(|(position, set)| fact_at(&hash, position, set))
        .collect()
}

/// Like [`simulate`], but set `i` only yields a fact when
/// [`SeedHash::gate`] passes for position `i` and `modulus`. Kept facts keep
/// their original position.
pub fn simulate_gated(seed: &str, sets: &[CandidateSet], modulus: u8) -> Vec<SimulatedFact> {
    let hash = SeedHash::of(seed);
    sets.iter()
        .enumerate()
        .filter(|(position, _)| hash.gate(*position, modulus))
        .map(|(position, set)| fact_at(&hash, position, set))
        .collect()
}

fn fact_at(hash: &SeedHash, position: usize, set: &CandidateSet) -> SimulatedFact {
    let derived_value = hash.select(position, set).to_string();
    trace!(label = set.name(), position, "simulated fact selected");
    SimulatedFact {
        seed_hash: hash.clone(),
        selector_bits: hash.nibble(position),
        position,
        derived_value,
        label: set.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn shapes() -> CandidateSet {
        CandidateSet::new("shape", ["circle", "square", "triangle", "hexagon"]).unwrap()
    }

    #[test]
    fn test_same_seed_same_fact() {
        let a = simulate_fact("+628123456789", &shapes());
        let b = simulate_fact("+628123456789", &shapes());
        assert_eq!(a, b);
        assert_eq!(a.label, "shape");
        assert_eq!(a.position, 0);
        assert!(shapes().values().contains(&a.derived_value));
    }

    #[test]
    fn test_fact_matches_digest() {
        let fact = simulate_fact("abc", &shapes());
        assert_eq!(fact.seed_hash, SeedHash::of("abc"));
        assert_eq!(fact.selector_bits, 0xb);
        // 11 % 4 = 3
        assert_eq!(fact.derived_value, "hexagon");
    }

    #[test]
    fn test_simulate_reads_successive_positions() {
        let sets = vec![shapes(), shapes(), shapes()];
        let facts = simulate("abc", &sets);
        assert_eq!(facts.len(), 3);
        for (i, fact) in facts.iter().enumerate() {
            assert_eq!(fact.position, i);
            assert_eq!(fact.selector_bits, fact.seed_hash.nibble(i));
        }
        assert_eq!(facts[0], simulate_fact("abc", &shapes()));
    }

    #[test]
    fn test_simulate_without_sets() {
        assert!(simulate("abc", &[]).is_empty());
    }

    #[test]
    fn test_gated_keeps_matching_positions() {
        // "abc" digest starts b a 7 8 1 6
        let sets = vec![shapes(); 6];
        let facts = simulate_gated("abc", &sets, 2);
        let positions: Vec<usize> = facts.iter().map(|f| f.position).collect();
        assert_eq!(positions, [1, 3, 5]);

        let all = simulate("abc", &sets);
        for fact in &facts {
            assert_eq!(fact, &all[fact.position]);
        }
    }

    #[test]
    fn test_gated_modulus_bounds() {
        let sets = vec![shapes(); 4];
        assert_eq!(simulate_gated("abc", &sets, 1), simulate("abc", &sets));
        assert!(simulate_gated("abc", &sets, 0).is_empty());
    }

    #[rstest]
    #[case("shape=circle,square", "shape", 2)]
    #[case(" tier = gold , silver ,, bronze ", "tier", 3)]
    #[case("single=only", "single", 1)]
    fn test_parse_definition(#[case] input: &str, #[case] name: &str, #[case] count: usize) {
        let set: CandidateSet = input.parse().unwrap();
        assert_eq!(set.name(), name);
        assert_eq!(set.values().len(), count);
    }

    #[rstest]
    #[case("no-equals-sign")]
    #[case("=a,b")]
    #[case("empty=")]
    #[case("blank= , ,")]
    fn test_parse_definition_rejects(#[case] input: &str) {
        assert!(input.parse::<CandidateSet>().is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: CandidateSet =
            serde_json::from_str(r#"{"name":"hue","values":["red"]}"#).unwrap();
        assert_eq!(ok.values(), ["red"]);
        assert!(serde_json::from_str::<CandidateSet>(r#"{"name":"hue","values":[]}"#).is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let set = shapes();
        let parsed: CandidateSet = set.to_string().parse().unwrap();
        assert_eq!(parsed, set);
    }
}
