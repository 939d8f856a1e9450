// engine.rs - Simulation state and the B3/S23 transition

use log::trace;
use rand::Rng;

use crate::grid::{Cell, Grid, NeighborCounts};

/// Offsets of the 8 Moore neighbors.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Counts the live toroidal neighbors of every cell.
///
/// Row indices wrap modulo the height and column indices modulo the width,
/// so the edges of the grid touch the opposite edges.
pub fn count_neighbors(grid: &Grid) -> NeighborCounts {
    let (height, width) = (grid.height(), grid.width());
    let mut counts = Vec::with_capacity(height * width);

    for row in 0..height as isize {
        for col in 0..width as isize {
            let live = NEIGHBOR_OFFSETS
                .iter()
                .filter(|&&(dr, dc)| grid.get_wrapped(row + dr, col + dc).is_alive())
                .count();
            counts.push(live as u8);
        }
    }

    NeighborCounts {
        height,
        width,
        counts,
    }
}

/// Conway's rule for a single cell.
#[rustfmt::skip]
pub fn next_cell(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3)                     => Cell::Alive, // Birth
        _                                   => Cell::Dead,  // Death or stays dead
    }
}

/// A grid plus its generation counter.
///
/// The grid is only changed by [`Life::step`]; [`Life::reset`] builds a
/// replacement instance instead of mutating this one.
#[derive(Clone, Debug)]
pub struct Life {
    grid: Grid,
    next_grid: Grid,
    generation: u64,
}

impl Life {
    /// Random `height` x `width` grid at generation 0.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new<R: Rng + ?Sized>(height: usize, width: usize, rng: &mut R) -> Self {
        Self::from_grid(Grid::random(height, width, rng))
    }

    /// Wraps an explicit grid at generation 0.
    pub fn from_grid(grid: Grid) -> Self {
        let next_grid = Grid::dead(grid.height(), grid.width());
        Self {
            grid,
            next_grid,
            generation: 0,
        }
    }

    /// Advances exactly one generation.
    pub fn step(&mut self) {
        let neighbors = count_neighbors(&self.grid);

        // Write into `next_grid`, since we're still reading from `grid`
        for ((next, &cell), &n) in self
            .next_grid
            .cells_mut()
            .iter_mut()
            .zip(self.grid.cells())
            .zip(neighbors.as_slice())
        {
            *next = next_cell(cell, n);
        }

        std::mem::swap(&mut self.grid, &mut self.next_grid);
        self.generation += 1;
        trace!(
            "generation {} population {}",
            self.generation,
            self.grid.population()
        );
    }

    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Fresh random state with the same dimensions, at generation 0.
    #[must_use]
    pub fn reset<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new(self.height(), self.width(), rng)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn life_from(rows: &[&[u8]]) -> Life {
        Life::from_grid(Grid::from_rows(rows).unwrap())
    }

    #[test]
    fn test_new_state() {
        let life = Life::new(12, 9, &mut StdRng::seed_from_u64(1));
        assert_eq!(life.height(), 12);
        assert_eq!(life.width(), 9);
        assert_eq!(life.generation(), 0);
    }

    #[test]
    fn test_seeded_construction_is_reproducible() {
        let a = Life::new(16, 16, &mut StdRng::seed_from_u64(42));
        let b = Life::new(16, 16, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_next_cell_rule() {
        for n in 0..=8 {
            let born = next_cell(Cell::Dead, n);
            let kept = next_cell(Cell::Alive, n);
            assert_eq!(born.is_alive(), n == 3, "dead with {n}");
            assert_eq!(kept.is_alive(), n == 2 || n == 3, "alive with {n}");
        }
    }

    #[test]
    fn test_count_neighbors_wraps_corner() {
        // Only (0,0) alive on a 3x3 torus: every other cell is one of its neighbors
        let grid = Grid::from_rows(&[[1, 0, 0], [0, 0, 0], [0, 0, 0]]).unwrap();
        let counts = count_neighbors(&grid);

        assert_eq!(counts.height(), 3);
        assert_eq!(counts.width(), 3);
        assert_eq!(counts.get(0, 0), Some(0));
        for (r, c) in [(0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
            assert_eq!(counts.get(r, c), Some(1), "cell ({r}, {c})");
        }
    }

    #[test]
    fn test_count_neighbors_wraps_non_square() {
        // Live cell in the bottom-right corner of a 4x6 torus
        let mut grid = Grid::dead(4, 6);
        grid.set(3, 5, Cell::Alive);
        let counts = count_neighbors(&grid);

        for (r, c) in [(0, 0), (0, 4), (0, 5), (2, 0), (3, 0), (2, 4), (2, 5), (3, 4)] {
            assert_eq!(counts.get(r, c), Some(1), "cell ({r}, {c})");
        }
        assert_eq!(counts.get(3, 5), Some(0));
        assert_eq!(counts.get(1, 1), Some(0));
        assert_eq!(counts.as_slice().iter().map(|&n| n as usize).sum::<usize>(), 8);
    }

    #[test]
    fn test_count_neighbors_cross() {
        let grid = Grid::from_rows(&[
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 1, 0, 1, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ])
        .unwrap();
        let counts = count_neighbors(&grid);
        assert_eq!(counts.get(2, 2), Some(4));
        assert_eq!(counts.get(0, 0), Some(0));
        assert_eq!(counts.get(1, 1), Some(2));
    }

    #[test]
    fn test_count_neighbors_full_grid() {
        let grid = Grid::from_rows(&[[1; 4]; 4]).unwrap();
        let counts = count_neighbors(&grid);
        assert!(counts.as_slice().iter().all(|&n| n == 8));
    }

    #[test]
    fn test_step_keeps_dimensions() {
        let mut rng = StdRng::seed_from_u64(3);
        for (h, w) in [(1, 1), (1, 7), (5, 3), (17, 23)] {
            let mut life = Life::new(h, w, &mut rng);
            life.step();
            assert_eq!(life.height(), h);
            assert_eq!(life.width(), w);
            assert_eq!(life.grid().cells().len(), h * w);
        }
    }

    #[test]
    fn test_generation_counter() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut life = Life::new(10, 10, &mut rng);
        life.step();
        assert_eq!(life.generation(), 1);
        life.steps(4);
        assert_eq!(life.generation(), 5);

        let fresh = life.reset(&mut rng);
        assert_eq!(fresh.generation(), 0);
        assert_eq!(fresh.height(), 10);
        assert_eq!(fresh.width(), 10);
    }

    #[test]
    fn test_block_still_life() {
        let mut life = life_from(&[
            &[0, 0, 0, 0],
            &[0, 1, 1, 0],
            &[0, 1, 1, 0],
            &[0, 0, 0, 0],
        ]);
        let initial = life.grid().clone();
        life.step();
        assert_eq!(life.grid(), &initial);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut life = life_from(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);
        let horizontal = life.grid().clone();

        life.step();
        assert_eq!(
            life.grid().to_rows(),
            vec![
                vec![0, 0, 0, 0, 0],
                vec![0, 0, 1, 0, 0],
                vec![0, 0, 1, 0, 0],
                vec![0, 0, 1, 0, 0],
                vec![0, 0, 0, 0, 0],
            ]
        );

        life.step();
        assert_eq!(life.grid(), &horizontal);
    }

    #[test]
    fn test_blinker_across_edge() {
        // Horizontal blinker split over the left/right seam
        let mut life = life_from(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[1, 1, 0, 0, 1],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);
        life.step();
        assert_eq!(
            life.grid().to_rows(),
            vec![
                vec![0, 0, 0, 0, 0],
                vec![1, 0, 0, 0, 0],
                vec![1, 0, 0, 0, 0],
                vec![1, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn test_all_dead_fixed_point() {
        let mut life = Life::from_grid(Grid::dead(8, 6));
        life.steps(25);
        assert!(life.grid().is_all_dead());
        assert_eq!(life.generation(), 25);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut life = life_from(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]);
        life.step();
        assert!(life.grid().is_all_dead());
    }
}
