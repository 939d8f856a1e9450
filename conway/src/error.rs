// error.rs - Errors for the few fallible grid entry points

use thiserror::Error;

/// Errors raised while building grids from external input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A cell value other than 0 or 1.
    #[error("invalid cell value {0}, expected 0 or 1")]
    InvalidCell(u8),

    /// No rows, or a first row with no columns.
    #[error("grid must have at least one row and one column")]
    Empty,

    /// A row whose length differs from the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Size text that is not `HEIGHTxWIDTH` with positive numbers, or
    /// describes more than `MAX_CELLS` cells.
    #[error("invalid grid size `{0}`, expected HEIGHTxWIDTH with positive numbers and at most 16777216 cells")]
    InvalidSize(String),

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
}
