//! Randomness sources for the synthetic models
//!
//! ## Table of Contents
//! - **RandomSource**: Trait with a single uniform sampling capability
//! - **ThreadRandom**: Thread-local RNG, used in production
//! - **SeededRandom**: Seeded `StdRng` for reproducible output

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed samples.
///
/// Every synthetic value the service produces is drawn through this trait,
/// so swapping the implementation makes the whole API deterministic.
pub trait RandomSource: Send + Sync {
    /// Draw a sample from the closed interval `[low, high]`.
    fn uniform(&self, low: f64, high: f64) -> f64;

    /// Source name for logging
    fn name(&self) -> &str {
        "custom"
    }
}

/// Thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }

    fn name(&self) -> &str {
        "thread"
    }
}

/// Seeded RNG shared across requests.
pub struct SeededRandom {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Create a source seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl std::fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeededRandom").field("seed", &self.seed).finish()
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.rng.lock().gen_range(low..=high)
    }

    fn name(&self) -> &str {
        "seeded"
    }
}
