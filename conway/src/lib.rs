//! Conway's Game of Life on a fixed-size toroidal grid.
//!
//! The [`engine::Life`] state owns a [`grid::Grid`] and a generation counter
//! and advances under the classic B3/S23 rule. [`color`] holds the pure
//! hue/intensity mapping the display uses for live cells.
//!
//! ```
//! use conway::{Life, rainbow_color};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut life = Life::new(100, 100, &mut rng);
//! life.step();
//! assert_eq!(life.generation(), 1);
//!
//! let live = rainbow_color(1.5, 1.0);
//! let frame = conway::raster(life.grid(), live);
//! assert_eq!(frame.len(), 100 * 100);
//! ```

pub mod color;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;

pub use color::{Rgb, rainbow_color, raster};
pub use engine::{Life, count_neighbors, next_cell};
pub use error::GridError;
pub use grid::{Cell, Grid, GridSize, NeighborCounts};
pub use patterns::{PATTERNS, Pattern};
