//! Lattice: grid and scanner building blocks for line-oriented textual
//! input.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the lattice sub-crates. For most users, adding `lattice` as a single
//! dependency is sufficient.
//!
//! Two families of building blocks turn text bytes into structured data:
//!
//! - a buffered, forward-only [`scan::Cursor`] with backtracking-safe scan
//!   primitives (literal prefixes, delimited fields, digits and integers,
//!   keyword sets) that compose into larger parsers, and
//! - a dense, bounds-checked [`grid::Grid`] with position arithmetic,
//!   directional movement, search, and row iteration, built straight from
//!   delimited text.
//!
//! # Quick start
//!
//! ```rust
//! use lattice::prelude::*;
//! use lattice::scan::scan;
//!
//! let input = b"start 2 1\n#.#\n...\n#.#\n";
//! let mut cursor = Cursor::new(&input[..]);
//!
//! // A header line, scanned field by field.
//! scan::prefix(&mut cursor, b"start ").unwrap();
//! let x: usize = scan::unsigned(&mut cursor).unwrap();
//! scan::spaces(&mut cursor).unwrap();
//! let y: usize = scan::unsigned(&mut cursor).unwrap();
//! scan::prefix(&mut cursor, b"\n").unwrap();
//!
//! // Then the map itself.
//! let grid = Grid::read(&mut cursor).unwrap();
//! let start = Position::new(x, y);
//! assert_eq!(grid.get(start), Some(&b'.'));
//!
//! // Walk up and hit the wall.
//! let wall = start.step(Direction::Up, 1).unwrap();
//! assert_eq!(grid.get(wall), Some(&b'#'));
//! let corner = grid.find(&b'#').next().unwrap();
//! assert_eq!(corner, Position::new(0, 0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`scan`] | `lattice-scan` | `Cursor`, scan primitives, `ScanError` |
//! | [`grid`] | `lattice-grid` | `Grid`, `Position`, `Direction`, `GridError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Buffered cursor and scan primitives (`lattice-scan`).
///
/// The [`scan::Cursor`] type and [`scan::ScanError`] are also available in
/// the [`prelude`]; the primitive functions live in [`scan::scan`].
pub use lattice_scan as scan;

/// Positions, directions, and the dense 2D grid (`lattice-grid`).
///
/// The main types ([`grid::Grid`], [`grid::Position`],
/// [`grid::Direction`]) are also available in the [`prelude`].
pub use lattice_grid as grid;

/// Common imports for typical lattice usage.
///
/// ```rust
/// use lattice::prelude::*;
/// ```
pub mod prelude {
    pub use lattice_grid::{Direction, Grid, GridError, OutOfRange, Position};
    pub use lattice_scan::{Cursor, Keyword, ScanError};
}
