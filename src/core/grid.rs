//! Grid module: coordinate space, bounds checks, and free-cell placement.
//!
//! Boundary policy is rejection: a cell outside the grid is a fatal
//! collision for the simulation step, not a wraparound.

use crate::core::rng::SimpleRng;
use crate::types::Cell;

/// Rejection samples before falling back to an exhaustive free-cell scan.
/// Keeps placement O(1) on a sparse grid and bounded on a crowded one.
const MAX_PLACEMENT_ATTEMPTS: u32 = 64;

/// The playable coordinate space: [0, width) x [0, height).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i16,
    height: i16,
}

impl Grid {
    pub fn new(width: i16, height: i16) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self { width, height }
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Sample a uniformly random cell for which `occupied` is false.
    ///
    /// Tries bounded rejection sampling first, then scans the whole grid and
    /// picks uniformly among the remaining free cells. Returns `None` when
    /// the grid is saturated; callers must treat that as a reportable
    /// condition, never place on an occupied cell.
    pub fn random_free_cell(
        &self,
        rng: &mut SimpleRng,
        occupied: impl Fn(Cell) -> bool,
    ) -> Option<Cell> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let cell = Cell::new(
                rng.next_range(self.width as u32) as i16,
                rng.next_range(self.height as u32) as i16,
            );
            if !occupied(cell) {
                return Some(cell);
            }
        }

        let free: Vec<Cell> = self
            .cells()
            .filter(|&cell| !occupied(cell))
            .collect();
        rng.pick(&free).copied()
    }

    /// Iterate every cell of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_edges() {
        let grid = Grid::new(20, 10);
        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(19, 9)));
        assert!(!grid.in_bounds(Cell::new(20, 0)));
        assert!(!grid.in_bounds(Cell::new(0, 10)));
        assert!(!grid.in_bounds(Cell::new(-1, 0)));
        assert!(!grid.in_bounds(Cell::new(0, -1)));
    }

    #[test]
    fn test_random_free_cell_avoids_occupied() {
        let grid = Grid::new(8, 8);
        let mut rng = SimpleRng::new(42);
        let blocked = Cell::new(3, 3);

        for _ in 0..200 {
            let cell = grid
                .random_free_cell(&mut rng, |c| c == blocked)
                .expect("grid is nearly empty");
            assert!(grid.in_bounds(cell));
            assert_ne!(cell, blocked);
        }
    }

    #[test]
    fn test_random_free_cell_finds_single_free_cell() {
        // Everything occupied except one cell: rejection sampling will
        // almost certainly miss, so the scan fallback must find it.
        let grid = Grid::new(16, 16);
        let mut rng = SimpleRng::new(7);
        let free = Cell::new(15, 15);

        let cell = grid.random_free_cell(&mut rng, |c| c != free);
        assert_eq!(cell, Some(free));
    }

    #[test]
    fn test_random_free_cell_saturated_grid_fails_closed() {
        let grid = Grid::new(4, 4);
        let mut rng = SimpleRng::new(7);
        assert_eq!(grid.random_free_cell(&mut rng, |_| true), None);
    }

    #[test]
    fn test_cells_iterates_whole_grid() {
        let grid = Grid::new(5, 3);
        let all: Vec<Cell> = grid.cells().collect();
        assert_eq!(all.len(), grid.cell_count());
        assert_eq!(all[0], Cell::new(0, 0));
        assert_eq!(all[4], Cell::new(4, 0));
        assert_eq!(*all.last().unwrap(), Cell::new(4, 2));
    }
}
