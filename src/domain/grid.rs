use rand::Rng;

use super::{Cell, CellState, Position, SeedParams};
use super::seeding::{MAX_LIVE_PROBABILITY, validate_dimensions, validate_probability};
use crate::error::Result;

/// Moore neighborhood offsets, centre excluded.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Fixed-size generation of cells, stored row-major.
///
/// Edges do not wrap: anything past the border counts as dead.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Create a grid whose listed coordinates are alive. Out-of-range entries are skipped.
    pub fn from_alive<I>(width: usize, height: usize, alive: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(width, height)?;
        alive
            .into_iter()
            .for_each(|(x, y)| grid.set(x, y, Cell::Alive));
        Ok(grid)
    }

    /// Randomly populate a fresh grid from `params`
    pub fn seed(params: &SeedParams) -> Result<Self> {
        params.validate()?;
        let mut rng = params.rng();
        Self::seed_with_rng(
            params.width,
            params.height,
            params.live_probability_percent,
            &mut rng,
        )
    }

    /// Randomly populate a fresh grid from a caller-supplied RNG.
    ///
    /// Each cell takes exactly one draw in `0..100` and lives when the draw is
    /// below `live_probability_percent`, so raising the percentage can only
    /// add live cells for a given draw sequence.
    pub fn seed_with_rng<R: Rng>(
        width: usize,
        height: usize,
        live_probability_percent: u8,
        rng: &mut R,
    ) -> Result<Self> {
        validate_dimensions(width, height)?;
        validate_probability(live_probability_percent)?;

        let cells = (0..width * height)
            .map(|_| {
                let draw: u8 = rng.random_range(0..MAX_LIVE_PROBABILITY);
                Cell::from_alive(draw < live_probability_percent)
            })
            .collect();

        Ok(Self { width, height, cells })
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell at position, `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.index(x, y)])
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Overwrite a cell; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Number of live cells among the 8 neighbors of `(x, y)`.
    pub fn live_neighbor_count(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.get(nx, ny)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next generation as a new grid
    pub fn advance(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.index(x, y)];
                current.evolve(self.live_neighbor_count(x, y))
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Write the next generation into `next`, reusing its allocation.
    ///
    /// `self` is only read and `next` only written, so no cell can observe a
    /// neighbor's already-updated state. `next` must have the same
    /// dimensions as `self`; grids are never resized.
    pub fn advance_into(&self, next: &mut Grid) {
        debug_assert_eq!(
            next.dimensions(),
            self.dimensions(),
            "back buffer must match the current generation's dimensions"
        );

        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.index(x, y);
                next.cells[idx] = self.cells[idx].evolve(self.live_neighbor_count(x, y));
            }
        }
    }

    /// Every cell with its position, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().enumerate().map(|(idx, cell)| CellState {
            position: Position::new(idx % self.width, idx / self.width),
            alive: cell.is_alive(),
        })
    }

    /// Positions of live cells only
    pub fn alive_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter_cells()
            .filter(|state| state.alive)
            .map(|state| state.position)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn block_at(width: usize, height: usize, x: usize, y: usize) -> Grid {
        Grid::from_alive(width, height, [(x, y), (x + 1, y), (x, y + 1), (x + 1, y + 1)]).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(Grid::new(0, 5), Err(LifeError::InvalidArgument(_))));
        assert!(matches!(Grid::new(5, 0), Err(LifeError::InvalidArgument(_))));
    }

    #[test]
    fn test_seed_rejects_bad_probability() {
        let params = SeedParams::new(5, 5, 150).with_rng_seed(1);
        assert!(matches!(Grid::seed(&params), Err(LifeError::InvalidArgument(_))));
    }

    #[test]
    fn test_seed_fills_every_cell_exactly_once() {
        let grid = Grid::seed(&SeedParams::new(7, 3, 50).with_rng_seed(11)).unwrap();
        let positions: HashSet<_> = grid.iter_cells().map(|s| s.position).collect();
        assert_eq!(positions.len(), 21);
        assert!(positions.iter().all(|p| p.x < 7 && p.y < 3));
    }

    #[test]
    fn test_seed_extremes() {
        let none = Grid::seed(&SeedParams::new(10, 10, 0).with_rng_seed(3)).unwrap();
        let all = Grid::seed(&SeedParams::new(10, 10, 100).with_rng_seed(3)).unwrap();
        assert_eq!(none.population(), 0);
        assert_eq!(all.population(), 100);
    }

    #[test]
    fn test_seed_is_deterministic_with_fixed_seed() {
        let params = SeedParams::new(40, 25, 35).with_rng_seed(0xC0FFEE);
        assert_eq!(Grid::seed(&params).unwrap(), Grid::seed(&params).unwrap());
    }

    #[test]
    fn test_corner_counts_only_in_bounds_neighbors() {
        let grid = Grid::from_alive(5, 5, [(0, 1), (1, 0), (1, 1)]).unwrap();
        assert_eq!(grid.live_neighbor_count(0, 0), 3);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let grid = Grid::from_alive(6, 4, [(5, 2), (2, 3)]).unwrap();
        assert_eq!(grid.live_neighbor_count(0, 2), 0);
        assert_eq!(grid.live_neighbor_count(2, 0), 0);
    }

    #[test]
    fn test_full_neighborhood() {
        let grid = Grid::seed(&SeedParams::new(3, 3, 100).with_rng_seed(0)).unwrap();
        assert_eq!(grid.live_neighbor_count(1, 1), 8);
        assert_eq!(grid.live_neighbor_count(0, 0), 3);
        assert_eq!(grid.live_neighbor_count(1, 0), 5);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let grid = Grid::from_alive(5, 5, [(2, 2)]).unwrap();
        assert_eq!(grid.advance().population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = block_at(6, 6, 2, 2);
        let once = block.advance();
        let twice = once.advance();
        assert_eq!(once, block);
        assert_eq!(twice, block);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = Grid::from_alive(5, 5, [(1, 2), (2, 2), (3, 2)]).unwrap();
        let vertical = Grid::from_alive(5, 5, [(2, 1), (2, 2), (2, 3)]).unwrap();
        assert_eq!(horizontal.advance(), vertical);
        assert_eq!(vertical.advance(), horizontal);
    }

    #[test]
    fn test_update_reads_only_previous_generation() {
        // An in-place sweep would kill (1, 0) after (0, 0) had already died.
        let grid = Grid::from_alive(3, 3, [(0, 0), (1, 0), (2, 0)]).unwrap();
        let next = grid.advance();
        let expected = Grid::from_alive(3, 3, [(1, 0), (1, 1)]).unwrap();
        assert_eq!(next, expected);
    }

    #[test]
    fn test_advance_into_matches_advance() {
        let grid = Grid::seed(&SeedParams::new(30, 20, 40).with_rng_seed(5)).unwrap();
        let mut back = Grid::new(30, 20).unwrap();
        grid.advance_into(&mut back);
        assert_eq!(back, grid.advance());
    }

    #[test]
    fn test_advance_into_keeps_buffer_dimensions() {
        let grid = block_at(8, 6, 3, 2);
        let mut back = Grid::new(8, 6).unwrap();
        grid.advance_into(&mut back);
        assert_eq!(back.dimensions(), (8, 6));
        assert_eq!(back, grid);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "back buffer must match")]
    fn test_advance_into_rejects_mismatched_buffer() {
        let grid = Grid::new(8, 8).unwrap();
        let mut back = Grid::new(2, 2).unwrap();
        grid.advance_into(&mut back);
    }

    #[test]
    fn test_alive_cells_lists_live_positions() {
        let grid = Grid::from_alive(4, 4, [(3, 0), (0, 3)]).unwrap();
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![Position::new(3, 0), Position::new(0, 3)]);
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(3, 0, Cell::Alive);
        grid.set(0, 3, Cell::Alive);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.get(3, 0), None);
    }

    proptest! {
        #[test]
        fn prop_dead_grid_stays_dead(w in 1usize..40, h in 1usize..40) {
            let grid = Grid::new(w, h).unwrap();
            prop_assert_eq!(grid.advance().population(), 0);
        }

        #[test]
        fn prop_neighbor_count_bounded(seed: u64, w in 1usize..20, h in 1usize..20) {
            let grid = Grid::seed(&SeedParams::new(w, h, 60).with_rng_seed(seed)).unwrap();
            for state in grid.iter_cells() {
                prop_assert!(grid.live_neighbor_count(state.position.x, state.position.y) <= 8);
            }
        }

        #[test]
        fn prop_higher_probability_never_loses_cells(seed: u64, low in 0u8..=100, high in 0u8..=100) {
            let (low, high) = (low.min(high), low.max(high));
            let sparse = Grid::seed(&SeedParams::new(16, 16, low).with_rng_seed(seed)).unwrap();
            let dense = Grid::seed(&SeedParams::new(16, 16, high).with_rng_seed(seed)).unwrap();
            for pos in sparse.alive_cells() {
                prop_assert!(dense.is_alive(pos.x, pos.y));
            }
        }

        #[test]
        fn prop_advance_is_deterministic(seed: u64) {
            let grid = Grid::seed(&SeedParams::new(24, 24, 35).with_rng_seed(seed)).unwrap();
            prop_assert_eq!(grid.advance(), grid.advance());
        }
    }
}
