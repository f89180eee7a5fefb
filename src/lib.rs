// Domain layer - the life engine
pub mod domain;

// Application layer - pacing and render hand-off
pub mod application;

// Infrastructure layer - configuration, rendering, input
pub mod config;
pub mod error;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::{Frame, GameState, Renderer, run_headless};
pub use config::LifeConfig;
pub use domain::{Cell, CellState, Grid, Pattern, Position, SeedParams, presets};
pub use error::{LifeError, Result};
