//! Building byte grids from delimited text.

use std::io::Read;

use lattice_scan::Cursor;

use crate::error::GridError;
use crate::grid::Grid;

impl Grid<u8> {
    /// Read one grid record from `cursor`.
    ///
    /// Consumes successive lines (trailing `\n` stripped) until end of
    /// stream or a zero-length line. The first line fixes the width; every
    /// later line must match it exactly or the read fails with
    /// [`GridError::Ragged`]. The terminating blank line is consumed too,
    /// so a blank line acts as a record separator: repeated calls pull
    /// successive grids off one stream.
    ///
    /// A missing first line yields the canonical empty grid rather than an
    /// error, and so does a first line of length ≤ 1 — a single character
    /// is read as "no grid here", not as a 1-wide grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lattice_grid::Grid;
    /// use lattice_scan::Cursor;
    ///
    /// let mut cursor = Cursor::new(&b"12\n34\n\n56\n78\n"[..]);
    /// let first = Grid::read(&mut cursor).unwrap();
    /// let second = Grid::read(&mut cursor).unwrap();
    /// assert_eq!(first.row(0), Some(&b"12"[..]));
    /// assert_eq!(second.row(0), Some(&b"56"[..]));
    /// ```
    pub fn read<R: Read>(cursor: &mut Cursor<R>) -> Result<Grid<u8>, GridError> {
        let mut items = Vec::new();
        let mut width = 0;
        let mut height = 0;
        loop {
            let line = match cursor.read_line()? {
                None => break,
                Some(line) => line,
            };
            if height == 0 {
                if line.len() <= 1 {
                    return Ok(Grid::empty());
                }
                width = line.len();
            } else if line.is_empty() {
                // Record separator, consumed: the cursor now sits at the
                // start of the next record.
                break;
            } else if line.len() != width {
                return Err(GridError::Ragged {
                    line: height,
                    len: line.len(),
                    width,
                });
            }
            items.extend_from_slice(line);
            height += 1;
        }
        if height == 0 {
            return Ok(Grid::empty());
        }
        Ok(Grid::from_raw(width, height, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn read_str(text: &str) -> Result<Grid<u8>, GridError> {
        Grid::read(&mut Cursor::new(text.as_bytes()))
    }

    // ── Single records ──────────────────────────────────────────

    #[test]
    fn read_builds_row_major_grid() {
        let grid = read_str("123\n456\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.row(0), Some(&b"123"[..]));
        assert_eq!(grid.row(1), Some(&b"456"[..]));
    }

    #[test]
    fn read_without_trailing_newline() {
        let grid = read_str("123\n456").unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.row(1), Some(&b"456"[..]));
    }

    #[test]
    fn read_ragged_rows_fail() {
        assert!(matches!(
            read_str("123\n45\n"),
            Err(GridError::Ragged {
                line: 1,
                len: 2,
                width: 3,
            })
        ));
        assert!(matches!(
            read_str("12\n345\n"),
            Err(GridError::Ragged {
                line: 1,
                len: 3,
                width: 2,
            })
        ));
    }

    // ── Empty-grid edges ────────────────────────────────────────

    #[test]
    fn read_empty_input_is_empty_grid() {
        let grid = read_str("").unwrap();
        assert_eq!(grid, Grid::empty());
    }

    #[test]
    fn read_blank_first_line_is_empty_grid() {
        let grid = read_str("\nabc\n").unwrap();
        assert_eq!(grid, Grid::empty());
    }

    #[test]
    fn read_single_character_first_line_is_empty_grid() {
        // One character is "no grid here", not a 1-wide grid.
        let grid = read_str("x\nyz\n").unwrap();
        assert_eq!(grid, Grid::empty());
    }

    // ── Sequential records ──────────────────────────────────────

    #[test]
    fn read_consumes_separator_between_records() {
        let mut cursor = Cursor::new(&b"12\n34\n\n56\n78\n"[..]);
        let first = Grid::read(&mut cursor).unwrap();
        let second = Grid::read(&mut cursor).unwrap();
        assert_eq!(first.get(Position::new(0, 0)), Some(&b'1'));
        assert_eq!(first.get(Position::new(1, 1)), Some(&b'4'));
        assert_eq!(second.get(Position::new(0, 0)), Some(&b'5'));
        assert_eq!(second.get(Position::new(1, 1)), Some(&b'8'));
        // Stream exhausted: a third read sees no first line.
        assert_eq!(Grid::read(&mut cursor).unwrap(), Grid::empty());
    }

    #[test]
    fn read_records_are_independent() {
        let mut cursor = Cursor::new(&b"ab\ncd\n\nef\ngh\n"[..]);
        let mut first = Grid::read(&mut cursor).unwrap();
        let second = Grid::read(&mut cursor).unwrap();
        first.put(Position::new(0, 0), b'z').unwrap();
        assert_eq!(second.get(Position::new(0, 0)), Some(&b'e'));
    }

    #[test]
    fn read_display_roundtrip() {
        let text = "ab\ncd\n";
        let grid = read_str(text).unwrap();
        assert_eq!(grid.to_string(), text);
    }
}
