use crate::domain::ports::NoiseSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Draws from the thread-local RNG. Default for live traffic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngNoise;

impl NoiseSource for ThreadRngNoise {
    fn next_below(&self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        rand::rng().random_range(0..upper)
    }
}

/// Reproducible noise from a seeded RNG.
///
/// The sequence is shared by every caller, so concurrent requests see
/// interleaved draws of one stream.
#[derive(Debug)]
pub struct SeededNoise {
    rng: Mutex<StdRng>,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn next_below(&self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(0..upper)
    }
}

/// Always returns the same value (clamped below `upper`).
#[derive(Debug, Clone, Copy)]
pub struct FixedNoise(pub u32);

impl NoiseSource for FixedNoise {
    fn next_below(&self, upper: u32) -> u32 {
        self.0.min(upper.saturating_sub(1))
    }
}

/// No noise at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn next_below(&self, _upper: u32) -> u32 {
        0
    }
}
