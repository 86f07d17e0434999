//! Dense row-major 2D grids built from line-oriented text.
//!
//! [`Grid`] is a generic, bounds-checked 2D array with position
//! arithmetic, directional movement, search, and row iteration.
//! [`Grid::read`] materializes byte grids straight off a
//! [`Cursor`](lattice_scan::Cursor), validating that every row matches the
//! width fixed by the first; a blank line separates successive grid
//! records in one stream.
//!
//! # Examples
//!
//! ```
//! use lattice_grid::{Direction, Grid, Position};
//! use lattice_scan::Cursor;
//!
//! let mut cursor = Cursor::new(&b"#.#\n...\n"[..]);
//! let grid = Grid::read(&mut cursor).unwrap();
//!
//! let start = Position::new(0, 1);
//! let up = start.step(Direction::Up, 1).unwrap();
//! assert_eq!(grid.get(up), Some(&b'#'));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod position;

mod read;

pub use error::GridError;
pub use grid::{Cells, Find, Grid, Rows};
pub use position::{Direction, OutOfRange, Position};
