mod cell;
mod grid;
mod patterns;
mod seeding;

pub use cell::{Cell, CellState, Position};
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use seeding::{MAX_CELLS, MAX_LIVE_PROBABILITY, SeedParams};
