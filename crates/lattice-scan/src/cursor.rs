//! Buffered forward-only cursor over a byte stream.
//!
//! [`Cursor`] wraps any `Read` source with a fixed-capacity buffer and
//! exposes peek-then-consume semantics: scan primitives inspect buffered
//! bytes without advancing, and commit consumption only once a match is
//! confirmed. That is what makes the "no match, no effect" contract of the
//! primitives in [`crate::scan`] cheap to uphold — a failed attempt simply
//! never calls [`consume`](Cursor::consume).
//!
//! Generic over `R: Read` so tests can feed `&[u8]` and production code can
//! use files or sockets.

use std::io::{ErrorKind, Read};

use crate::error::ScanError;

/// Default buffer capacity in bytes.
pub const DEFAULT_CAPACITY: usize = 4096;

/// A forward-only read position over a byte stream, with an internal
/// fixed-capacity buffer.
///
/// The cursor never seeks backward. Refilling compacts the buffer (the
/// unconsumed tail moves to the front), so a span returned by
/// [`take`](Cursor::take) or [`read_line`](Cursor::read_line) stays valid
/// until the next operation that pulls from the inner reader.
///
/// # Examples
///
/// ```
/// use lattice_scan::Cursor;
///
/// let mut cursor = Cursor::new(&b"abcdef"[..]);
/// assert_eq!(cursor.peek(3).unwrap(), b"abc");
/// cursor.consume(2);
/// assert_eq!(cursor.take(2).unwrap(), b"cd");
/// ```
pub struct Cursor<R> {
    inner: R,
    buf: Box<[u8]>,
    /// First unconsumed byte.
    start: usize,
    /// One past the last buffered byte.
    end: usize,
    /// The inner reader reported end of stream.
    eof: bool,
}

impl<R: Read> Cursor<R> {
    /// Wrap `inner` with the [`DEFAULT_CAPACITY`] buffer.
    pub fn new(inner: R) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, inner)
    }

    /// Wrap `inner` with a buffer of exactly `capacity` bytes.
    ///
    /// The capacity bounds every zero-copy operation: a peek, token, or
    /// line longer than `capacity` fails with
    /// [`ScanError::BufferExhausted`].
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        assert!(capacity > 0, "cursor buffer capacity must be at least 1");
        Self {
            inner,
            buf: vec![0; capacity].into_boxed_slice(),
            start: 0,
            end: 0,
            eof: false,
        }
    }

    /// The fixed buffer capacity.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The buffered, unconsumed bytes. Never pulls from the inner reader.
    pub fn buffered(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    /// Compact and pull once from the inner reader.
    ///
    /// Returns the number of bytes added; `0` means end of stream. The
    /// caller must leave room (`buffered().len() < capacity`).
    fn refill(&mut self) -> Result<usize, ScanError> {
        if self.eof {
            return Ok(0);
        }
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        debug_assert!(self.end < self.buf.len(), "refill called with a full buffer");
        loop {
            match self.inner.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(0);
                }
                Ok(n) => {
                    self.end += n;
                    return Ok(n);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ScanError::Io(e)),
            }
        }
    }

    /// Pull from the inner reader until at least `n` bytes are buffered or
    /// the stream ends.
    ///
    /// Returns the buffered byte count, which is less than `n` only at end
    /// of stream. Fails with [`ScanError::BufferExhausted`] if `n` exceeds
    /// the buffer capacity.
    pub fn fill_at_least(&mut self, n: usize) -> Result<usize, ScanError> {
        if n > self.buf.len() {
            return Err(ScanError::BufferExhausted {
                needed: n,
                capacity: self.buf.len(),
            });
        }
        while self.end - self.start < n {
            if self.refill()? == 0 {
                break;
            }
        }
        Ok(self.end - self.start)
    }

    /// Exactly `n` bytes, without consuming them.
    ///
    /// Fails with [`ScanError::EndOfStream`] if the stream ends first, or
    /// [`ScanError::BufferExhausted`] if `n` exceeds the capacity.
    pub fn peek(&mut self, n: usize) -> Result<&[u8], ScanError> {
        if self.fill_at_least(n)? < n {
            return Err(ScanError::EndOfStream);
        }
        Ok(&self.buf[self.start..self.start + n])
    }

    /// Discard `n` previously peeked bytes.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the buffered length — consuming bytes that
    /// were never peeked is a caller bug, not an input condition.
    pub fn consume(&mut self, n: usize) {
        let buffered = self.end - self.start;
        assert!(n <= buffered, "consume({n}) exceeds {buffered} buffered bytes");
        self.start += n;
    }

    /// Peek and consume `n` bytes in one step, returning the consumed span.
    ///
    /// The span borrows the internal buffer; it stays valid until the next
    /// operation that pulls from the inner reader.
    pub fn take(&mut self, n: usize) -> Result<&[u8], ScanError> {
        if self.fill_at_least(n)? < n {
            return Err(ScanError::EndOfStream);
        }
        let at = self.start;
        self.start += n;
        Ok(&self.buf[at..at + n])
    }

    /// Offset of the first occurrence of `byte` ahead of the read position,
    /// pulling from the inner reader as needed.
    ///
    /// Returns `Ok(None)` when the stream ends, or the buffer fills to
    /// capacity, without `byte` appearing. The read position is unchanged
    /// either way.
    pub fn find_byte(&mut self, byte: u8) -> Result<Option<usize>, ScanError> {
        let mut searched = 0;
        loop {
            let window = &self.buf[self.start + searched..self.end];
            if let Some(i) = window.iter().position(|&b| b == byte) {
                return Ok(Some(searched + i));
            }
            searched = self.end - self.start;
            if self.eof || searched == self.buf.len() {
                return Ok(None);
            }
            // Compaction preserves offsets relative to the read position,
            // so `searched` stays meaningful across the refill.
            self.refill()?;
        }
    }

    /// Span of the next line: `(content_len, total_len)` relative to the
    /// read position, where `total_len` includes the `\n` if present.
    fn line_span(&mut self) -> Result<Option<(usize, usize)>, ScanError> {
        match self.find_byte(b'\n')? {
            Some(i) => Ok(Some((i, i + 1))),
            None => {
                let buffered = self.end - self.start;
                if !self.eof {
                    // Buffer full with no delimiter in sight.
                    return Err(ScanError::BufferExhausted {
                        needed: buffered + 1,
                        capacity: self.buf.len(),
                    });
                }
                if buffered == 0 {
                    return Ok(None);
                }
                // Final line without a trailing delimiter.
                Ok(Some((buffered, buffered)))
            }
        }
    }

    /// The next line with its trailing `\n` stripped, consuming through the
    /// delimiter. The final line needs no trailing `\n`.
    ///
    /// Returns `Ok(None)` at end of stream. A line longer than the buffer
    /// capacity fails with [`ScanError::BufferExhausted`].
    pub fn read_line(&mut self) -> Result<Option<&[u8]>, ScanError> {
        match self.line_span()? {
            None => Ok(None),
            Some((content, total)) => {
                let at = self.start;
                self.start += total;
                Ok(Some(&self.buf[at..at + content]))
            }
        }
    }

    /// The next line including its trailing `\n`, if the stream has one.
    ///
    /// Same termination and capacity behavior as
    /// [`read_line`](Cursor::read_line).
    pub fn read_line_raw(&mut self) -> Result<Option<&[u8]>, ScanError> {
        match self.line_span()? {
            None => Ok(None),
            Some((_, total)) => {
                let at = self.start;
                self.start += total;
                Ok(Some(&self.buf[at..at + total]))
            }
        }
    }

    /// True iff no byte remains in the buffer or the stream.
    pub fn at_end(&mut self) -> Result<bool, ScanError> {
        Ok(self.fill_at_least(1)? == 0)
    }
}
