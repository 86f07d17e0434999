//! Scan primitives: incremental parsers over a [`Cursor`].
//!
//! Every primitive is a stateless function taking the cursor as its shared
//! mutable context. The contract across the module is **no match, no
//! effect**: a primitive that fails with [`ScanError::NoMatch`] leaves the
//! cursor's read position exactly where it found it, so ordered alternation
//! composes without any explicit rewind — try one primitive, and on
//! `NoMatch` try the next. The single documented exception is integer
//! overflow partway through [`unsigned`]/[`signed`], where the digits
//! already accepted stay consumed.

use std::io::Read;

use crate::cursor::Cursor;
use crate::error::ScanError;
use crate::int::{ScanSigned, ScanUnsigned};

/// Match and consume `literal` byte-for-byte.
///
/// Fails with [`ScanError::NoMatch`], consuming nothing, when the next
/// bytes differ or the stream ends before `literal.len()` bytes. A literal
/// longer than the cursor's buffer capacity fails distinctly with
/// [`ScanError::BufferExhausted`], so callers that care can tell
/// "mismatch" from "request too large for this cursor".
pub fn prefix<R: Read>(cursor: &mut Cursor<R>, literal: &[u8]) -> Result<(), ScanError> {
    if cursor.fill_at_least(literal.len())? < literal.len() {
        return Err(ScanError::NoMatch);
    }
    if &cursor.buffered()[..literal.len()] != literal {
        return Err(ScanError::NoMatch);
    }
    cursor.consume(literal.len());
    Ok(())
}

/// The span strictly before the first `delimiter` byte, consuming through
/// and including the delimiter.
///
/// Fails with [`ScanError::NoMatch`], consuming nothing, when no delimiter
/// occurs before the end of the stream or before the cursor's buffer fills
/// to capacity.
pub fn until<R: Read>(cursor: &mut Cursor<R>, delimiter: u8) -> Result<&[u8], ScanError> {
    match cursor.find_byte(delimiter)? {
        Some(i) => {
            let span = cursor.take(i + 1)?;
            Ok(&span[..i])
        }
        None => Err(ScanError::NoMatch),
    }
}

/// Consume zero or more ASCII space bytes (`' '` only, not general
/// whitespace).
///
/// Never fails with `NoMatch` — no leading space is a successful no-op.
/// Only reader-layer errors propagate.
pub fn spaces<R: Read>(cursor: &mut Cursor<R>) -> Result<(), ScanError> {
    loop {
        if cursor.fill_at_least(1)? == 0 || cursor.buffered()[0] != b' ' {
            return Ok(());
        }
        cursor.consume(1);
    }
}

/// Consume one ASCII digit and return its value 0–9.
///
/// Fails with [`ScanError::NoMatch`], consuming nothing, when the next
/// byte is not a digit or the stream has ended.
pub fn decimal_digit<R: Read>(cursor: &mut Cursor<R>) -> Result<u8, ScanError> {
    if cursor.fill_at_least(1)? == 0 {
        return Err(ScanError::NoMatch);
    }
    let byte = cursor.buffered()[0];
    if !byte.is_ascii_digit() {
        return Err(ScanError::NoMatch);
    }
    cursor.consume(1);
    Ok(byte - b'0')
}

/// Greedily scan an unsigned decimal integer.
///
/// Requires at least one leading digit; otherwise fails with
/// [`ScanError::NoMatch`] and consumes nothing. Further digits accumulate
/// as `value * 10 + digit` with checked arithmetic and scanning stops at
/// the first non-digit byte, leaving it unread.
///
/// On arithmetic overflow the failure is [`ScanError::Overflow`] and the
/// digits consumed so far are **not** rewound — overflow is an input
/// error, not a backtracking signal.
///
/// # Examples
///
/// ```
/// use lattice_scan::{scan, Cursor};
///
/// let mut cursor = Cursor::new(&b"4567xyz"[..]);
/// assert_eq!(scan::unsigned::<u32, _>(&mut cursor).unwrap(), 4567);
/// assert_eq!(cursor.peek(3).unwrap(), b"xyz");
/// ```
pub fn unsigned<T: ScanUnsigned, R: Read>(cursor: &mut Cursor<R>) -> Result<T, ScanError> {
    let mut value = T::ZERO
        .push_digit(decimal_digit(cursor)?)
        .ok_or(ScanError::Overflow)?;
    loop {
        match decimal_digit(cursor) {
            Ok(digit) => value = value.push_digit(digit).ok_or(ScanError::Overflow)?,
            Err(ScanError::NoMatch) => return Ok(value),
            Err(e) => return Err(e),
        }
    }
}

/// Greedily scan a signed decimal integer: an optional `'-'` followed by
/// digits.
///
/// A `'-'` not followed by a digit fails with [`ScanError::NoMatch`] and
/// consumes nothing — sign and first digit are peeked together before
/// anything commits, so alternation stays rewind-free. Negative values
/// accumulate on the negative side, so the type's minimum parses.
/// Overflow behaves as in [`unsigned`].
///
/// Note the two-byte lookahead: a cursor with capacity 1 cannot host this
/// primitive.
pub fn signed<T: ScanSigned, R: Read>(cursor: &mut Cursor<R>) -> Result<T, ScanError> {
    let available = cursor.fill_at_least(2)?;
    if available == 0 {
        return Err(ScanError::NoMatch);
    }
    let negative = cursor.buffered()[0] == b'-';
    if negative {
        if available < 2 || !cursor.buffered()[1].is_ascii_digit() {
            return Err(ScanError::NoMatch);
        }
        cursor.consume(1);
    }
    let mut value = T::ZERO;
    let push = |value: T, digit| {
        if negative {
            value.push_digit_neg(digit)
        } else {
            value.push_digit(digit)
        }
    };
    value = push(value, decimal_digit(cursor)?).ok_or(ScanError::Overflow)?;
    loop {
        match decimal_digit(cursor) {
            Ok(digit) => value = push(value, digit).ok_or(ScanError::Overflow)?,
            Err(ScanError::NoMatch) => return Ok(value),
            Err(e) => return Err(e),
        }
    }
}

/// A closed set of named variants that can be matched off a stream.
///
/// Order in [`NAMES`](Keyword::NAMES) is significant: [`keyword`] tries
/// entries front to back and the first prefix match wins. A name that is a
/// strict prefix of a later name therefore shadows it — with `("red", ..)`
/// before `("redux", ..)`, `"redux"` can never match. This deliberately
/// preserves declaration-order semantics instead of longest-match; list
/// the longer name first when both must be reachable.
pub trait Keyword: Copy + Sized + 'static {
    /// Variant names paired with their values, in declaration order.
    const NAMES: &'static [(&'static str, Self)];
}

/// Match one variant of a [`Keyword`] set by its name.
///
/// Tries each name in declaration order as a [`prefix`] match and returns
/// the first hit, consuming its name. Fails with [`ScanError::NoMatch`],
/// consuming nothing, when no name matches.
pub fn keyword<K: Keyword, R: Read>(cursor: &mut Cursor<R>) -> Result<K, ScanError> {
    for &(name, value) in K::NAMES {
        match prefix(cursor, name.as_bytes()) {
            Ok(()) => return Ok(value),
            Err(ScanError::NoMatch) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(ScanError::NoMatch)
}
