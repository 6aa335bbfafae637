//! Non-reproducible variation.
//!
//! Nothing here reads a [`SeedHash`](crate::SeedHash) or produces a
//! [`SimulatedFact`](crate::SimulatedFact). Values from this module must not
//! be combined with digest-derived values.

use rand::Rng;

/// `base` shifted by a uniformly random offset in `-spread..=spread`, drawn
/// from the thread-local generator.
pub fn jitter(base: i64, spread: u32) -> i64 {
    jitter_with(&mut rand::rng(), base, spread)
}

/// Same as [`jitter`] with a caller-supplied generator.
pub fn jitter_with<R: Rng>(rng: &mut R, base: i64, spread: u32) -> i64 {
    let spread = i64::from(spread);
    base.saturating_add(rng.random_range(-spread..=spread))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_zero_spread_is_identity() {
        assert_eq!(jitter(42, 0), 42);
    }

    #[test]
    fn test_stays_within_spread() {
        for _ in 0..1_000 {
            let v = jitter(30, 5);
            assert!((25..=35).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn test_supplied_generator_is_used() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let xs: Vec<_> = (0..16).map(|_| jitter_with(&mut a, 0, 100)).collect();
        let ys: Vec<_> = (0..16).map(|_| jitter_with(&mut b, 0, 100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_saturates() {
        assert!(jitter(i64::MAX, 10) <= i64::MAX);
        assert!(jitter(i64::MIN, 10) >= i64::MIN);
    }
}
