//! Incremental, backtracking-safe token scanning over a buffered byte
//! stream.
//!
//! The crate has two layers:
//!
//! - [`Cursor`]: a forward-only read position over any `Read` source, with
//!   a fixed-capacity internal buffer and peek-then-consume semantics.
//! - [`scan`]: stateless parse primitives over a cursor — literal
//!   prefixes, delimited fields, digits and integers, keyword sets — each
//!   upholding the *no match, no effect* rule: a failed attempt leaves the
//!   read position untouched, so alternatives compose by simply trying the
//!   next one.
//!
//! # Examples
//!
//! ```
//! use lattice_scan::{scan, Cursor};
//!
//! let mut cursor = Cursor::new(&b"x=12, y=7"[..]);
//! scan::prefix(&mut cursor, b"x=").unwrap();
//! let x: u32 = scan::unsigned(&mut cursor).unwrap();
//! scan::prefix(&mut cursor, b",").unwrap();
//! scan::spaces(&mut cursor).unwrap();
//! scan::prefix(&mut cursor, b"y=").unwrap();
//! let y: u32 = scan::unsigned(&mut cursor).unwrap();
//! assert_eq!((x, y), (12, 7));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod int;
pub mod scan;

pub use cursor::{Cursor, DEFAULT_CAPACITY};
pub use error::ScanError;
pub use int::{ScanSigned, ScanUnsigned};
pub use scan::Keyword;
