//! Injectable randomness.
//!
//! Randomness is a capability handed to the engine rather than a call
//! into a global RNG, so tests and reproducible simulations can supply
//! fixed sequences. The two draws the engine makes (the trouble draw and
//! the assault choice) are provided methods over a single `next_in`
//! primitive, which keeps scripted sources trivial.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound (exclusive) of the trouble draw.
pub const TROUBLE_BOUND: u32 = 100;

/// Uniform integer source for engine decisions.
pub trait RandomSource: Send + Sync {
    /// Draws a uniform integer in `[0, bound)`. `bound` is always >= 1.
    fn next_in(&self, bound: u32) -> u32;

    /// The per-invocation trouble draw, uniform in `[0, 100)`.
    fn trouble_random(&self) -> u32 {
        self.next_in(TROUBLE_BOUND)
    }

    /// Chooses an index into a list of `active_count` active assaults.
    fn choose_assault(&self, active_count: u32) -> u32 {
        self.next_in(active_count)
    }
}

/// Thread-local OS-seeded randomness; the production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in(&self, bound: u32) -> u32 {
        rand::rng().random_range(0..bound)
    }
}

/// Seeded randomness for reproducible simulation runs.
///
/// The mutex serializes draws; simulation is single-threaded in
/// practice, so contention is not a concern.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Creates a source producing the same sequence for the same seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in(&self, bound: u32) -> u32 {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        rng.random_range(0..bound)
    }
}

// ============================================================================
// Tests
// ============================================================================
