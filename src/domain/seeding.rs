//! Parameters for randomized initial seeding.

use rand::{SeedableRng, rngs::StdRng};

use crate::error::{LifeError, Result};

/// Upper bound of the live-probability scale.
pub const MAX_LIVE_PROBABILITY: u8 = 100;

/// Largest grid accepted, in cells (64 Mi, one byte each).
pub const MAX_CELLS: usize = 1 << 26;

/// Everything needed to build a first generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedParams {
    pub width: usize,
    pub height: usize,
    /// Chance in percent that any single cell starts alive
    pub live_probability_percent: u8,
    /// Fixed RNG seed; `None` draws one from the OS
    pub rng_seed: Option<u64>,
}

impl SeedParams {
    pub const fn new(width: usize, height: usize, live_probability_percent: u8) -> Self {
        Self {
            width,
            height,
            live_probability_percent,
            rng_seed: None,
        }
    }

    pub const fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.width, self.height)?;
        validate_probability(self.live_probability_percent)
    }

    /// RNG the seeding pass draws from.
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

pub(crate) fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(LifeError::invalid_argument(format!(
            "grid dimensions must be positive, got {width}x{height}"
        )));
    }
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        _ => Err(LifeError::invalid_argument(format!(
            "grid of {width}x{height} cells exceeds the {MAX_CELLS} cell limit"
        ))),
    }
}

pub(crate) fn validate_probability(percent: u8) -> Result<()> {
    if percent > MAX_LIVE_PROBABILITY {
        return Err(LifeError::invalid_argument(format!(
            "live probability must be within 0..={MAX_LIVE_PROBABILITY}, got {percent}"
        )));
    }
    Ok(())
}
