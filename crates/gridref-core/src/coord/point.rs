//! Single cell coordinates

use super::column::{letters_to_column, write_column_letters};
use crate::error::{Error, Result};
use crate::{MAX_COLUMN, MAX_ROW};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A cell location on a sheet (e.g., "B7")
///
/// Both coordinates are 1-based: `1 <= row <= MAX_ROW` and
/// `1 <= column <= MAX_COLUMN`. Points compare componentwise, so `a <= b`
/// holds only when `a` is neither below nor right of `b`; points such as
/// `B1` and `A2` are incomparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetPoint {
    row: u32,
    column: u16,
}

impl SheetPoint {
    /// Create a point, checking both coordinates against the grid bounds
    ///
    /// # Examples
    /// ```
    /// use gridref_core::SheetPoint;
    ///
    /// let point = SheetPoint::new(7, 2).unwrap();
    /// assert_eq!(point.to_string(), "B7");
    /// assert!(SheetPoint::new(0, 1).is_err());
    /// ```
    pub fn new(row: u32, column: u16) -> Result<Self> {
        if !(1..=MAX_ROW).contains(&row) {
            return Err(Error::InvalidReference(format!(
                "row {row} outside 1..={MAX_ROW}"
            )));
        }
        if !(1..=MAX_COLUMN).contains(&column) {
            return Err(Error::InvalidReference(format!(
                "column {column} outside 1..={MAX_COLUMN}"
            )));
        }
        Ok(Self { row, column })
    }

    /// Build a point whose coordinates the caller has already bounded.
    pub(crate) const fn from_parts(row: u32, column: u16) -> Self {
        Self { row, column }
    }

    /// Row number (1-based)
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Column number (1-based, A = 1)
    pub const fn column(&self) -> u16 {
        self.column
    }

    /// Parse a single cell reference such as `"XFD1048576"`
    ///
    /// The input must be exactly `letters digits`: uppercase letters, a row
    /// without leading zeros and no whitespace or `$` markers.
    pub fn parse(s: &str) -> Result<Self> {
        parse_cell(s, s)
    }

    /// Componentwise minimum (top-most row, left-most column)
    pub fn min_corner(self, other: Self) -> Self {
        Self {
            row: self.row.min(other.row),
            column: self.column.min(other.column),
        }
    }

    /// Componentwise maximum (bottom-most row, right-most column)
    pub fn max_corner(self, other: Self) -> Self {
        Self {
            row: self.row.max(other.row),
            column: self.column.max(other.column),
        }
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        self.to_string()
    }
}

/// Parse one `cell` of the reference grammar. `reference` is the complete
/// input, used for error messages.
pub(crate) fn parse_cell(cell: &str, reference: &str) -> Result<SheetPoint> {
    let invalid = |reason: &str| Error::InvalidReference(format!("{reason} in '{reference}'"));

    let bytes = cell.as_bytes();
    let letters_len = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
    if letters_len == 0 {
        return Err(invalid("no column letters"));
    }
    if letters_len > 3 {
        return Err(invalid("too many column letters"));
    }

    let digits = &bytes[letters_len..];
    if digits.is_empty() {
        return Err(invalid("no row number"));
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(invalid("unexpected character"));
    }
    if digits[0] == b'0' {
        return Err(invalid("leading zero in row number"));
    }
    // MAX_ROW has seven digits
    if digits.len() > 7 {
        return Err(invalid("row number out of range"));
    }

    let row = digits
        .iter()
        .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'));
    if row > MAX_ROW {
        return Err(invalid("row number out of range"));
    }

    let column = letters_to_column(&cell[..letters_len])
        .map_err(|_| invalid("column out of range"))?;

    Ok(SheetPoint { row, column })
}

impl PartialOrd for SheetPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.row.cmp(&other.row), self.column.cmp(&other.column)) {
            (Ordering::Equal, c) => Some(c),
            (r, Ordering::Equal) => Some(r),
            (r, c) if r == c => Some(r),
            _ => None,
        }
    }
}

impl fmt::Display for SheetPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_column_letters(f, self.column)?;
        write!(f, "{}", self.row)
    }
}

impl FromStr for SheetPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SheetPoint {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SheetPoint {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text =
            <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
