//! Column letter codec
//!
//! Columns are labelled in bijective base 26: the digits 1-26 map to `A`-`Z`
//! and there is no zero digit, so `Z` is followed by `AA` rather than `BA`.

use crate::error::{Error, Result};
use crate::MAX_COLUMN;
use std::fmt;

/// Convert a 1-based column index to its letters (1 = A, 26 = Z, 27 = AA, etc.)
///
/// Defined for `1..=MAX_COLUMN`.
///
/// # Examples
/// ```
/// use gridref_core::column_to_letters;
///
/// assert_eq!(column_to_letters(1), "A");
/// assert_eq!(column_to_letters(28), "AB");
/// assert_eq!(column_to_letters(16_384), "XFD");
/// ```
pub fn column_to_letters(column: u16) -> String {
    debug_assert!(
        (1..=MAX_COLUMN).contains(&column),
        "column {column} outside 1..={MAX_COLUMN}"
    );
    let mut letters = String::with_capacity(3);
    // Writing into a String never fails.
    let _ = write_column_letters(&mut letters, column);
    letters
}

/// Write the letters of a 1-based column index without allocating.
pub(crate) fn write_column_letters<W: fmt::Write>(out: &mut W, column: u16) -> fmt::Result {
    // u16::MAX needs four letters
    let mut buf = [0u8; 4];
    let mut pos = buf.len();
    let mut n = u32::from(column);

    while n > 0 {
        n -= 1;
        pos -= 1;
        buf[pos] = b'A' + (n % 26) as u8;
        n /= 26;
    }

    for &b in &buf[pos..] {
        out.write_char(char::from(b))?;
    }
    Ok(())
}

/// Convert column letters to a 1-based index (A = 1, Z = 26, AA = 27, etc.)
///
/// Only uppercase `A`-`Z` is accepted.
pub fn letters_to_column(letters: &str) -> Result<u16> {
    if letters.is_empty() {
        return Err(Error::invalid_reference("empty column letters"));
    }

    let mut column: u32 = 0;
    for b in letters.bytes() {
        if !b.is_ascii_uppercase() {
            return Err(Error::InvalidReference(format!(
                "invalid column letters '{letters}'"
            )));
        }
        column = column * 26 + u32::from(b - b'A' + 1);
        // Checked per letter so long inputs cannot overflow
        if column > u32::from(MAX_COLUMN) {
            return Err(Error::InvalidReference(format!(
                "column '{letters}' is beyond XFD"
            )));
        }
    }

    Ok(column as u16)
}
