//! Random number generation for dungeon generation
//!
//! Uses a seeded ChaCha RNG so that a seed and a config reproduce the same level.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator random number source
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// The seed it was created from is kept so a level can report it.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform pick in `lo..=hi`, both ends included.
    ///
    /// An empty range (`hi < lo`) collapses to `lo`.
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform float in `[0, 1)`
    pub fn unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    /// Returns true with probability `p`
    pub fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.rn2(10);
            assert!(n < 10);
        }
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = GameRng::new(42);
        let mut seen_hi = false;
        for _ in 0..1000 {
            let n = rng.range_inclusive(6, 12);
            assert!((6..=12).contains(&n));
            seen_hi |= n == 12;
        }
        assert!(seen_hi, "upper bound should be reachable");
    }

    #[test]
    fn test_empty_range_collapses() {
        let mut rng = GameRng::new(7);
        assert_eq!(rng.range_inclusive(8, 6), 8);
        assert_eq!(rng.range_inclusive(3, 3), 3);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = GameRng::new(1);
        for _ in 0..200 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.rn2(100), rng2.rn2(100));
        }
    }

    #[test]
    fn test_seed_survives_draws() {
        let mut rng = GameRng::new(1234);
        rng.rn2(10);
        rng.unit();
        assert_eq!(rng.seed(), 1234);
    }
}
