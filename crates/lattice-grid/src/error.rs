//! Error types for grid construction and mutation.

use std::fmt;

use lattice_scan::ScanError;

use crate::position::Position;

/// Errors from [`Grid`](crate::Grid) construction, mutation, and text
/// reading.
///
/// Out-of-range *reads* are not errors — `get`/`row` return `None` for
/// those, since probing a candidate position is a normal boundary check.
/// Every variant here is a genuine input or caller contract violation and
/// should propagate.
#[derive(Debug)]
pub enum GridError {
    /// The item count is not divisible by the requested width.
    Dimensions {
        /// Number of items supplied.
        len: usize,
        /// Requested grid width.
        width: usize,
    },
    /// A row of text differs in length from the width fixed by the first
    /// row.
    Ragged {
        /// Zero-based index of the offending row.
        line: usize,
        /// Length of the offending row.
        len: usize,
        /// Width fixed by the first row.
        width: usize,
    },
    /// A write to a position outside the grid.
    OutOfBounds {
        /// The rejected position.
        pos: Position,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
    /// A reader-layer error while consuming grid text.
    Scan(ScanError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimensions { len, width } => {
                write!(f, "{len} items do not divide into rows of width {width}")
            }
            Self::Ragged { line, len, width } => {
                write!(f, "row {line} has length {len}, expected {width}")
            }
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "position {pos} outside {width}x{height} grid")
            }
            Self::Scan(e) => write!(f, "scan error: {e}"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scan(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ScanError> for GridError {
    fn from(e: ScanError) -> Self {
        Self::Scan(e)
    }
}
