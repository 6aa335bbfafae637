//! # idscope-simulate
//!
//! Reproducible placeholder facts, kept apart from real decoding.
//!
//! Two generation modes live here and never mix:
//!
//! - [`simulate_fact`] / [`simulate`] hash a seed with SHA-256 and pick values
//!   from a [`CandidateSet`] by reading digest nibbles. The same seed always
//!   yields the same [`SimulatedFact`], across calls and processes.
//!   [`simulate_gated`] additionally drops facts whose gate nibble fails.
//! - [`jitter`] draws from a thread-local random generator and never sees a
//!   digest.
//!
//! Simulated facts are placeholders. Callers must label them as simulated
//! whenever they are shown next to decoded data.

mod error;
mod fact;
mod hash;
pub mod jitter;

pub use error::SimulateError;
pub use fact::{simulate, simulate_fact, simulate_gated, CandidateSet, SimulatedFact};
pub use hash::{SeedHash, DIGEST_HEX_LEN};
