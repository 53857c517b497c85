//! Rectangular ranges and their algebra

use super::point::{parse_cell, SheetPoint};
use crate::error::{Error, Result};
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

/// A rectangle of cells (e.g., "A1:Z100")
///
/// `first` is the top-left corner and `last` the bottom-right corner; the
/// range is always normalized (`first <= last` on both axes). A range may
/// collapse to a single cell, in which case `first == last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetRange {
    first: SheetPoint,
    last: SheetPoint,
}

impl SheetRange {
    /// Create a range from its top-left and bottom-right corners
    ///
    /// Corners are not reordered: a `last` above or left of `first` is an
    /// error.
    pub fn new(first: SheetPoint, last: SheetPoint) -> Result<Self> {
        if first <= last {
            Ok(Self { first, last })
        } else {
            Err(Error::InvalidReference(format!(
                "range end {last} is above or left of its start {first}"
            )))
        }
    }

    /// Build a range whose corners the caller has already ordered.
    pub(crate) const fn from_corners(first: SheetPoint, last: SheetPoint) -> Self {
        Self { first, last }
    }

    /// Create a single-cell range
    pub const fn single(point: SheetPoint) -> Self {
        Self {
            first: point,
            last: point,
        }
    }

    /// Parse a range from `A1` or `A1:B10` notation
    ///
    /// # Examples
    /// ```
    /// use gridref_core::SheetRange;
    ///
    /// let range = SheetRange::parse("BD14:EG256").unwrap();
    /// assert_eq!(range.first().row(), 14);
    /// assert_eq!(range.first().column(), 56);
    /// assert_eq!(range.last().row(), 256);
    /// assert_eq!(range.last().column(), 137);
    ///
    /// assert!(SheetRange::parse("B1:A1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((first, last)) => {
                let first = parse_cell(first, s)?;
                let last = parse_cell(last, s)?;
                Self::new(first, last)
            }
            None => parse_cell(s, s).map(Self::single),
        }
    }

    /// Top-left corner
    pub const fn first(&self) -> SheetPoint {
        self.first
    }

    /// Bottom-right corner
    pub const fn last(&self) -> SheetPoint {
        self.last
    }

    /// Whether the range covers exactly one cell
    pub fn is_single_cell(&self) -> bool {
        self.first == self.last
    }

    /// Number of columns in the range
    pub fn width(&self) -> u16 {
        self.last.column() - self.first.column() + 1
    }

    /// Number of rows in the range
    pub fn height(&self) -> u32 {
        self.last.row() - self.first.row() + 1
    }

    /// Total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        u64::from(self.height()) * u64::from(self.width())
    }

    /// Check if a cell is within this range
    pub fn contains(&self, point: &SheetPoint) -> bool {
        self.first <= *point && *point <= self.last
    }

    /// Smallest range covering both `self` and `other`
    ///
    /// The result also covers any cells between disjoint inputs.
    pub fn bounding_union(&self, other: &SheetRange) -> SheetRange {
        Self {
            first: self.first.min_corner(other.first),
            last: self.last.max_corner(other.last),
        }
    }

    /// Cells shared by both ranges, if any
    pub fn intersect(&self, other: &SheetRange) -> Option<SheetRange> {
        let first = self.first.max_corner(other.first);
        let last = self.last.min_corner(other.last);
        if first.row() > last.row() || first.column() > last.column() {
            return None;
        }
        Some(Self { first, last })
    }

    /// Check if the ranges share at least one cell
    pub fn intersects(&self, other: &SheetRange) -> bool {
        self.intersect(other).is_some()
    }

    /// Check if this range fully covers `other`
    ///
    /// Not symmetric: `A1:D4` overlaps `B2:C3`, but not the other way round.
    pub fn overlaps(&self, other: &SheetRange) -> bool {
        self.first <= other.first && other.last <= self.last
    }

    /// Iterate over all points in the range (row by row)
    pub fn cells(&self) -> SheetPoints {
        SheetPoints {
            range: *self,
            next: Some(self.first),
            remaining: self.cell_count(),
        }
    }

    /// Format as `A1` or `A1:B10`; a single cell never uses the colon form
    pub fn to_a1_string(&self) -> String {
        self.to_string()
    }
}

impl From<SheetPoint> for SheetRange {
    fn from(point: SheetPoint) -> Self {
        Self::single(point)
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_cell() {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}:{}", self.first, self.last)
        }
    }
}

impl FromStr for SheetRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SheetRange {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SheetRange {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text =
            <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Iterator over the points of a range
pub struct SheetPoints {
    range: SheetRange,
    next: Option<SheetPoint>,
    remaining: u64,
}

impl Iterator for SheetPoints {
    type Item = SheetPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.remaining -= 1;

        // Move to next cell
        self.next = if current.column() < self.range.last.column() {
            Some(SheetPoint::from_parts(current.row(), current.column() + 1))
        } else if current.row() < self.range.last.row() {
            Some(SheetPoint::from_parts(
                current.row() + 1,
                self.range.first.column(),
            ))
        } else {
            None
        };

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for SheetPoints {}
