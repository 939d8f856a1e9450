// grid.rs - Grid types for Conway's Game of Life

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::GridError;

/// Reference grid size used by the app.
pub const DEFAULT_HEIGHT: usize = 100;
pub const DEFAULT_WIDTH: usize = 100;

/// Probability of a cell starting ALIVE in a random grid.
pub const INITIAL_FILL: f64 = 0.5;

/// Largest cell count a parsed [`GridSize`] may describe.
pub const MAX_CELLS: usize = 1 << 24;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl TryFrom<u8> for Cell {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            other => Err(GridError::InvalidCell(other)),
        }
    }
}

/// Fixed-size toroidal grid of cells, stored row-major.
///
/// Height and width never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn dead(height: usize, width: usize) -> Self {
        assert!(height != 0 && width != 0, "grid dimensions must be positive");
        let size = height.checked_mul(width).expect("grid too big");
        Self {
            height,
            width,
            cells: vec![Cell::Dead; size],
        }
    }

    /// Creates a grid where every cell is independently alive with
    /// probability [`INITIAL_FILL`].
    pub fn random<R: Rng + ?Sized>(height: usize, width: usize, rng: &mut R) -> Self {
        let mut grid = Self::dead(height, width);
        for cell in grid.cells.iter_mut() {
            *cell = Cell::from(rng.gen_bool(INITIAL_FILL));
        }
        grid
    }

    /// Builds a grid from nested rows of 0/1 values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for &v in values {
                cells.push(Cell::try_from(v)?);
            }
        }

        Ok(Self {
            height: rows.len(),
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn size(&self) -> GridSize {
        GridSize {
            height: self.height,
            width: self.width,
        }
    }

    fn idx(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| col + row * self.width)
    }

    /// Gets a cell, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    /// Gets a cell with both coordinates reduced modulo the grid size.
    pub fn get_wrapped(&self, row: isize, col: isize) -> Cell {
        let r = row.rem_euclid(self.height as isize) as usize;
        let c = col.rem_euclid(self.width as isize) as usize;
        self.cells[c + r * self.width]
    }

    /// Sets a cell. Out-of-bounds writes are ignored and return `false`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.idx(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Snapshot as nested 0/1 rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.as_u8()).collect())
            .collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_all_dead(&self) -> bool {
        self.cells.iter().all(|c| !c.is_alive())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Live-neighbor count for every cell of a grid, same shape as the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborCounts {
    pub(crate) height: usize,
    pub(crate) width: usize,
    pub(crate) counts: Vec<u8>,
}

impl NeighborCounts {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        (row < self.height && col < self.width).then(|| self.counts[col + row * self.width])
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.counts
    }
}

/// Grid dimensions, written as `HEIGHTxWIDTH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub height: usize,
    pub width: usize,
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

impl FromStr for GridSize {
    type Err = GridError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidSize(value.to_string());
        let (height, width) = value.split_once(['x', 'X']).ok_or_else(invalid)?;
        let height: usize = height.trim().parse().map_err(|_| invalid())?;
        let width: usize = width.trim().parse().map_err(|_| invalid())?;
        match height.checked_mul(width) {
            Some(cells) if cells != 0 && cells <= MAX_CELLS => {}
            _ => return Err(invalid()),
        }
        Ok(Self { height, width })
    }
}
