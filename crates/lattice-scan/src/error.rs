//! Error types for the scan layer.

use std::fmt;
use std::io;

/// Errors from [`Cursor`](crate::Cursor) operations and scan primitives.
///
/// [`NoMatch`](Self::NoMatch) is the expected, recoverable parse-failure
/// signal: the pattern did not occur next in the stream and the cursor was
/// left exactly where it was, so the caller can try the next alternative.
/// Every other variant indicates a genuine input or caller problem and
/// should propagate to the top-level caller rather than being absorbed.
#[derive(Debug)]
pub enum ScanError {
    /// The pattern did not occur next in the stream. The cursor's read
    /// position is unchanged.
    NoMatch,
    /// Numeric accumulation exceeded the target integer's range. The
    /// digits read before the overflow stay consumed.
    Overflow,
    /// The stream ended before an exact-length request could be satisfied.
    EndOfStream,
    /// The request needs more bytes buffered at once than the cursor's
    /// buffer can hold.
    BufferExhausted {
        /// Bytes the operation needed available at once.
        needed: usize,
        /// The cursor's fixed buffer capacity.
        capacity: usize,
    },
    /// An I/O error from the underlying reader, surfaced verbatim.
    Io(io::Error),
}

impl ScanError {
    /// True for the recoverable [`NoMatch`](Self::NoMatch) signal.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => write!(f, "input does not match"),
            Self::Overflow => write!(f, "integer accumulation overflowed"),
            Self::EndOfStream => write!(f, "unexpected end of stream"),
            Self::BufferExhausted { needed, capacity } => {
                write!(f, "request for {needed} bytes exceeds buffer capacity {capacity}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ScanError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
