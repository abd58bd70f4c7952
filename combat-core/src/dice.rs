//! Random source for the combat engine.
//!
//! All randomness flows through a [`Dice`] owned by the engine, so a
//! seeded instance makes a whole battle reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A seedable random number source.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: StdRng,
}

impl Dice {
    /// Dice seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic dice (useful for testing).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a uniformly random index below `len`, or `None` if `len` is zero.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }

    /// Pick one element uniformly.
    pub fn pick<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        self.pick_index(options.len()).map(|i| &options[i])
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_picks() {
        let mut a = Dice::seeded(42);
        let mut b = Dice::seeded(42);
        let picks_a: Vec<_> = (0..20).map(|_| a.pick_index(6)).collect();
        let picks_b: Vec<_> = (0..20).map(|_| b.pick_index(6)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|p| matches!(p, Some(i) if *i < 6)));
    }

    #[test]
    fn test_pick() {
        let mut dice = Dice::seeded(7);
        let empty: [u8; 0] = [];
        assert!(dice.pick(&empty).is_none());

        let options = ["bolt", "toes"];
        let mut seen = [false; 2];
        for _ in 0..100 {
            let idx = dice.pick_index(options.len()).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "both options should come up");
    }
}
