//! Motion sources — concrete [`MotionSource`] implementations.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::MotionSource;

/// Uniform coin flip per scan.
pub struct RandomMotion {
    rng: Mutex<StdRng>,
}

impl Default for RandomMotion {
    fn default() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl RandomMotion {
    /// A reproducible sequence of scan results.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl MotionSource for RandomMotion {
    fn detect(&self) -> bool {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_bool(0.5)
    }
}

/// Always returns the same scan result.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMotion(pub bool);

impl MotionSource for FixedMotion {
    fn detect(&self) -> bool {
        self.0
    }
}
