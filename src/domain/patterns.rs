use super::{Cell, Grid};

/// Named arrangement of live cells, stored relative to its top-left corner.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Stamp the pattern with its top-left at `(x, y)`. Cells falling off the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        for (dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, Cell::Alive);
        }
    }

    /// Stamp the pattern in the middle of the grid
    pub fn place_centered(&self, grid: &mut Grid) {
        let (w, h) = grid.dimensions();
        let x = w.saturating_sub(self.width) / 2;
        let y = h.saturating_sub(self.height) / 2;
        self.place_on(grid, x, y);
    }
}

/// Small library of classic patterns
pub mod presets {
    use super::*;

    /// 2x2 still life
    pub fn block() -> Pattern {
        Pattern::new(
            "block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    pub fn beehive() -> Pattern {
        Pattern::new(
            "beehive",
            "Still life",
            vec![
                (1, 0), (2, 0),
                (0, 1), (3, 1),
                (1, 2), (2, 2),
            ],
        )
    }

    pub fn blinker() -> Pattern {
        Pattern::new("blinker", "Oscillator (period 2)", vec![(0, 1), (1, 1), (2, 1)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Smallest spaceship, travels one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Spaceship (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r-pentomino",
            "Methuselah, settles after 1103 generations",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), beehive(), blinker(), toad(), glider(), r_pentomino()]
    }

    /// Case-insensitive lookup by pattern name
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
