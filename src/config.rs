//! Runtime configuration: grid shape, seeding, pacing and cell geometry.
//!
//! Values are fixed once the simulation is built; nothing here is
//! renegotiated while it runs.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::SeedParams;
use crate::error::{LifeError, Result};

/// Largest drawable extent along either axis, in pixels.
pub const MAX_CANVAS_EXTENT: u64 = 1 << 20;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LifeConfig {
    /// Side of a drawn cell in pixels
    pub cell_size: u32,
    /// Gap between neighbouring cells in pixels
    pub cell_spacing: u32,
    pub grid_width: usize,
    pub grid_height: usize,
    pub live_probability_percent: u8,
    pub tick_interval_ms: u64,
    pub rng_seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size: 10,
            cell_spacing: 2,
            grid_width: 120,
            grid_height: 60,
            live_probability_percent: 30,
            tick_interval_ms: 100,
            rng_seed: None,
        }
    }
}

impl LifeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LifeError::config(e.to_string()))
    }

    /// Read a TOML file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content)
                .map_err(|e| LifeError::config(format!("{}: {e}", path.display()))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(LifeError::config(format!("{}: {e}", path.display()))),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.seed_params().validate()?;
        if self.cell_size == 0 {
            return Err(LifeError::invalid_argument("cell_size must be positive"));
        }
        if self.tick_interval_ms == 0 {
            return Err(LifeError::invalid_argument("tick_interval_ms must be positive"));
        }
        if self.cell_size.checked_add(self.cell_spacing).is_none() {
            return Err(LifeError::invalid_argument(format!(
                "cell_size {} plus cell_spacing {} overflows",
                self.cell_size, self.cell_spacing
            )));
        }
        for (axis, cells) in [("width", self.grid_width), ("height", self.grid_height)] {
            match self.canvas_extent(cells) {
                Some(px) if px <= MAX_CANVAS_EXTENT => {}
                _ => {
                    return Err(LifeError::invalid_argument(format!(
                        "canvas {axis} for {cells} cells exceeds {MAX_CANVAS_EXTENT} px"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Pixels needed along one axis: `cells` pitches plus a one-cell margin each side
    pub fn canvas_extent(&self, cells: usize) -> Option<u64> {
        let pitch = u64::from(self.cell_size).checked_add(u64::from(self.cell_spacing))?;
        u64::try_from(cells)
            .ok()?
            .checked_mul(pitch)?
            .checked_add(2 * u64::from(self.cell_size))
    }

    pub fn seed_params(&self) -> SeedParams {
        SeedParams {
            width: self.grid_width,
            height: self.grid_height,
            live_probability_percent: self.live_probability_percent,
            rng_seed: self.rng_seed,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Distance in pixels from one cell's origin to the next
    pub fn cell_pitch(&self) -> u32 {
        self.cell_size.saturating_add(self.cell_spacing)
    }
}
