use std::mem;
use std::time::Duration;

use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::config::LifeConfig;
use crate::domain::{Grid, Pattern, SeedParams};
use crate::error::Result;

/// Read-only view of one generation, handed to renderers after each step.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub generation: u64,
    pub grid: &'a Grid,
}

/// GameState drives the engine: it owns the current generation plus a
/// back buffer, and decides when the next generation is due.
pub struct GameState {
    grid: Grid,
    back: Grid,
    seed_params: SeedParams,
    rng: StdRng,
    pub is_running: bool,
    pub generation: u64,
    update_timer: Duration,
    tick_interval: Duration,
}

impl GameState {
    /// Validate `config` and randomly seed the first generation
    pub fn new(config: &LifeConfig) -> Result<Self> {
        config.validate()?;
        let seed_params = config.seed_params();
        let mut rng = seed_params.rng();
        let grid = Grid::seed_with_rng(
            seed_params.width,
            seed_params.height,
            seed_params.live_probability_percent,
            &mut rng,
        )?;
        info!(
            width = seed_params.width,
            height = seed_params.height,
            population = grid.population(),
            "Seeded initial generation"
        );
        Ok(Self::assemble(grid, seed_params, rng, config.tick_interval()))
    }

    /// Start from an empty grid with `pattern` centred on it
    pub fn with_pattern(config: &LifeConfig, pattern: &Pattern) -> Result<Self> {
        config.validate()?;
        let seed_params = config.seed_params();
        let mut grid = Grid::new(seed_params.width, seed_params.height)?;
        pattern.place_centered(&mut grid);
        info!(
            pattern = pattern.name,
            description = pattern.description,
            population = grid.population(),
            "Placed pattern"
        );
        let rng = seed_params.rng();
        Ok(Self::assemble(grid, seed_params, rng, config.tick_interval()))
    }

    fn assemble(grid: Grid, seed_params: SeedParams, rng: StdRng, tick_interval: Duration) -> Self {
        let back = grid.clone();
        Self {
            grid,
            back,
            seed_params,
            rng,
            is_running: true,
            generation: 0,
            update_timer: Duration::ZERO,
            tick_interval,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            generation: self.generation,
            grid: &self.grid,
        }
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        info!(running = self.is_running, generation = self.generation, "Toggled simulation");
        self
    }

    /// Advance exactly one generation, paused or not
    pub fn step(mut self) -> Self {
        self.grid.advance_into(&mut self.back);
        mem::swap(&mut self.grid, &mut self.back);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "Advanced generation"
        );
        self
    }

    /// Replace the grid with a new random generation and reset the counter.
    ///
    /// Draws continue from the state's RNG, so a fixed seed still yields a
    /// reproducible sequence of reseeds.
    pub fn reseed(mut self) -> Self {
        let SeedParams { width, height, live_probability_percent, .. } = self.seed_params;
        match Grid::seed_with_rng(width, height, live_probability_percent, &mut self.rng) {
            Ok(grid) => {
                info!(population = grid.population(), "Reseeded grid");
                self.grid = grid;
                self.generation = 0;
                self.update_timer = Duration::ZERO;
            }
            Err(e) => warn!("Reseed failed, keeping current generation: {e}"),
        }
        self
    }

    /// Account for `delta` of elapsed time and advance at most once.
    ///
    /// Returns the state together with whether a new generation was produced.
    pub fn tick(mut self, delta: Duration) -> (Self, bool) {
        if !self.is_running {
            return (self, false);
        }

        self.update_timer += delta;
        if self.update_timer < self.tick_interval {
            return (self, false);
        }

        self.update_timer = Duration::ZERO;
        (self.step(), true)
    }
}
