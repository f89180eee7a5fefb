/// Life state of a single grid position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Next state under the standard B3/S23 rule:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Fixed coordinate of a cell within its grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// One cell record as handed to renderers: where it is and whether it lives.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellState {
    pub position: Position,
    pub alive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead);
        }
    }

    #[test]
    fn test_reproduction_needs_exactly_three() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(Cell::Dead.evolve(n), Cell::Dead);
        }
    }

    #[test]
    fn test_from_alive() {
        assert_eq!(Cell::from_alive(true), Cell::Alive);
        assert!(!Cell::from_alive(false).is_alive());
    }
}
