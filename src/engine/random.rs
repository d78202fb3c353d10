//! Seeded pseudo-random source for reproducible palettes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic random number generator.
///
/// Each instance owns its state; two instances built from the same seed and
/// driven through the same call sequence produce the same values. There is
/// no global or thread-local state, and nothing here reads the clock: callers
/// that want run-to-run variation pass in their own entropy as the seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    draws: u64,
    rng: StdRng,
}

impl SeededRandom {
    /// Creates a generator from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            draws: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this generator started from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of values drawn so far.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Uniform float in `[min, max)`. Returns `min` for an empty or invalid range.
    pub fn next_float(&mut self, min: f64, max: f64) -> f64 {
        self.draws += 1;
        if !(min < max) || !min.is_finite() || !max.is_finite() {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Uniform integer in `[min, max]`. Returns `min` when `max <= min`.
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        self.draws += 1;
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Picks one element uniformly. `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        self.draws += 1;
        let index = self.rng.gen_range(0..items.len());
        items.get(index)
    }
}
