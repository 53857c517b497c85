//! Structural edit transforms
//!
//! Inserting or deleting a band of cells moves every range that lies after
//! the band on the shift axis. All four directions run one algorithm,
//! parameterized by the shift [`Axis`] and whether the band is inserted or
//! deleted:
//!
//! | direction | shift axis | band     |
//! |-----------|------------|----------|
//! | `Right`   | columns    | inserted |
//! | `Down`    | rows       | inserted |
//! | `Left`    | columns    | deleted  |
//! | `Up`      | rows       | deleted  |
//!
//! The edited area's extent on the perpendicular axis restricts which rows
//! (or columns) are moved. A range only partly inside that extent would be
//! torn apart, which is reported as [`Error::PartialOverlap`].
//!
//! ```rust
//! use gridref_core::{SheetRange, ShiftEdit};
//!
//! let merged = SheetRange::parse("E4:G4").unwrap();
//! let edit = ShiftEdit::delete_shift_left(SheetRange::parse("F1:F7").unwrap());
//!
//! assert_eq!(edit.apply(&merged).unwrap(), Some(SheetRange::parse("E4:F4").unwrap()));
//! ```

use crate::coord::{SheetPoint, SheetRange};
use crate::error::{Error, Result};
use crate::{MAX_COLUMN, MAX_ROW};

/// A sheet axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// The other axis
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }

    /// Last valid index on this axis
    pub fn max_index(self) -> u32 {
        match self {
            Axis::Row => MAX_ROW,
            Axis::Column => u32::from(MAX_COLUMN),
        }
    }

    fn index(self, point: SheetPoint) -> u32 {
        match self {
            Axis::Row => point.row(),
            Axis::Column => u32::from(point.column()),
        }
    }

    /// Inclusive `(first, last)` extent of a range on this axis
    fn span(self, range: &SheetRange) -> (u32, u32) {
        (self.index(range.first()), self.index(range.last()))
    }

    /// `point` moved to `index` on this axis; `index` must be within the grid.
    fn with_index(self, point: SheetPoint, index: u32) -> SheetPoint {
        debug_assert!((1..=self.max_index()).contains(&index));
        match self {
            Axis::Row => SheetPoint::from_parts(index, point.column()),
            Axis::Column => SheetPoint::from_parts(point.row(), index as u16),
        }
    }
}

/// Where the cells next to an edited band go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftDirection {
    /// Columns inserted, cells move right
    Right,
    /// Rows inserted, cells move down
    Down,
    /// Columns deleted, cells move left
    Left,
    /// Rows deleted, cells move up
    Up,
}

impl ShiftDirection {
    /// Axis along which cells are displaced
    pub fn axis(self) -> Axis {
        match self {
            ShiftDirection::Right | ShiftDirection::Left => Axis::Column,
            ShiftDirection::Down | ShiftDirection::Up => Axis::Row,
        }
    }

    /// Whether the band is inserted (as opposed to deleted)
    pub fn is_insert(self) -> bool {
        matches!(self, ShiftDirection::Right | ShiftDirection::Down)
    }
}

/// An insertion or deletion of a rectangular area, with the direction the
/// surrounding cells shift in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftEdit {
    /// The inserted or deleted area
    pub area: SheetRange,
    /// Direction the neighbouring cells move
    pub direction: ShiftDirection,
}

impl ShiftEdit {
    pub fn new(area: SheetRange, direction: ShiftDirection) -> Self {
        Self { area, direction }
    }

    /// Insert `area`, pushing cells to its right further right
    pub fn insert_shift_right(area: SheetRange) -> Self {
        Self::new(area, ShiftDirection::Right)
    }

    /// Insert `area`, pushing cells below it further down
    pub fn insert_shift_down(area: SheetRange) -> Self {
        Self::new(area, ShiftDirection::Down)
    }

    /// Delete `area`, pulling cells to its right leftwards
    pub fn delete_shift_left(area: SheetRange) -> Self {
        Self::new(area, ShiftDirection::Left)
    }

    /// Delete `area`, pulling cells below it upwards
    pub fn delete_shift_up(area: SheetRange) -> Self {
        Self::new(area, ShiftDirection::Up)
    }

    /// Reposition `original` after this edit
    ///
    /// Returns `Ok(None)` when the range no longer exists on the sheet: it
    /// was pushed past the grid edge by an insert, or deleted entirely.
    pub fn apply(&self, original: &SheetRange) -> Result<Option<SheetRange>> {
        let axis = self.direction.axis();
        let (first, last) = axis.span(original);
        let (band_start, band_end) = axis.span(&self.area);

        // Nothing at or after the band start belongs to the range
        if band_start > last {
            return Ok(Some(*original));
        }

        let cross = axis.perpendicular();
        let (cross_first, cross_last) = cross.span(original);
        let (edit_first, edit_last) = cross.span(&self.area);

        if edit_last < cross_first || edit_first > cross_last {
            return Ok(Some(*original));
        }
        if edit_first > cross_first || edit_last < cross_last {
            log::debug!(
                "{:?} edit of {} only partially covers {}",
                self.direction,
                self.area,
                original
            );
            return Err(Error::PartialOverlap {
                original: *original,
                edited: self.area,
            });
        }

        let moved = if self.direction.is_insert() {
            insert_band(first, last, band_start, band_end, axis.max_index())
        } else {
            delete_band(first, last, band_start, band_end)
        };

        let result = moved.map(|(first, last)| {
            SheetRange::from_corners(
                axis.with_index(original.first(), first),
                axis.with_index(original.last(), last),
            )
        });

        match &result {
            Some(range) => log::trace!(
                "{:?} edit of {}: {} -> {}",
                self.direction,
                self.area,
                original,
                range
            ),
            None => log::trace!(
                "{:?} edit of {}: {} eliminated",
                self.direction,
                self.area,
                original
            ),
        }

        Ok(result)
    }

    /// Reposition a batch of ranges, e.g. all merged areas of a sheet
    ///
    /// Ranges eliminated by the edit are dropped. Fails on the first range
    /// the edit only partially covers.
    pub fn apply_all<I>(&self, ranges: I) -> Result<Vec<SheetRange>>
    where
        I: IntoIterator<Item = SheetRange>,
    {
        let mut moved = Vec::new();
        for range in ranges {
            if let Some(range) = self.apply(&range)? {
                moved.push(range);
            }
        }
        Ok(moved)
    }
}

/// Move the span `[first, last]` after inserting `[start, end]`.
fn insert_band(first: u32, last: u32, start: u32, end: u32, bound: u32) -> Option<(u32, u32)> {
    let width = end - start + 1;
    let shift = |v: u32| if v < start { v } else { v + width };

    let first = shift(first);
    if first > bound {
        return None;
    }
    Some((first, shift(last).min(bound)))
}

/// Move the span `[first, last]` after deleting `[start, end]`.
fn delete_band(first: u32, last: u32, start: u32, end: u32) -> Option<(u32, u32)> {
    if start <= first && last <= end {
        return None;
    }

    let deleted = |v: u32| (start..=end).contains(&v);
    let first = if deleted(first) { end + 1 } else { first };
    let last = if deleted(last) { start - 1 } else { last };

    // Indices removed at or before `v`
    let removed_before = |v: u32| if v >= start { v.min(end) - start + 1 } else { 0 };

    Some((first - removed_before(first), last - removed_before(last)))
}

impl SheetRange {
    /// Reposition this range after `inserted` is inserted with cells shifted right
    ///
    /// # Examples
    /// ```
    /// use gridref_core::SheetRange;
    ///
    /// let range = SheetRange::parse("C4:F8").unwrap();
    /// let moved = range.insert_shift_right(&SheetRange::parse("C1:D11").unwrap()).unwrap();
    /// assert_eq!(moved, Some(SheetRange::parse("E4:H8").unwrap()));
    /// ```
    pub fn insert_shift_right(&self, inserted: &SheetRange) -> Result<Option<SheetRange>> {
        ShiftEdit::insert_shift_right(*inserted).apply(self)
    }

    /// Reposition this range after `inserted` is inserted with cells shifted down
    pub fn insert_shift_down(&self, inserted: &SheetRange) -> Result<Option<SheetRange>> {
        ShiftEdit::insert_shift_down(*inserted).apply(self)
    }

    /// Reposition this range after `deleted` is removed with cells shifted left
    pub fn delete_shift_left(&self, deleted: &SheetRange) -> Result<Option<SheetRange>> {
        ShiftEdit::delete_shift_left(*deleted).apply(self)
    }

    /// Reposition this range after `deleted` is removed with cells shifted up
    pub fn delete_shift_up(&self, deleted: &SheetRange) -> Result<Option<SheetRange>> {
        ShiftEdit::delete_shift_up(*deleted).apply(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn r(s: &str) -> SheetRange {
        SheetRange::parse(s).unwrap()
    }

    fn check(direction: ShiftDirection, cases: &[(&str, &str, Option<&str>)]) {
        for &(original, edited, expected) in cases {
            let edit = ShiftEdit::new(r(edited), direction);
            assert_eq!(
                edit.apply(&r(original)).unwrap(),
                expected.map(r),
                "{direction:?}: {original} edited by {edited}"
            );
        }
    }

    fn check_partial(direction: ShiftDirection, cases: &[(&str, &str)]) {
        for &(original, edited) in cases {
            let edit = ShiftEdit::new(r(edited), direction);
            assert_eq!(
                edit.apply(&r(original)),
                Err(Error::PartialOverlap {
                    original: r(original),
                    edited: r(edited),
                }),
                "{direction:?}: {original} edited by {edited}"
            );
        }
    }

    #[test]
    fn test_insert_shift_right() {
        check(
            ShiftDirection::Right,
            &[
                ("C4:F8", "C1:F3", Some("C4:F8")),    // Inserted area fully above
                ("C4:F8", "A9:G12", Some("C4:F8")),   // Fully below
                ("C4:F8", "G1:H5", Some("C4:F8")),    // Fully to the right
                ("C4:F8", "C1:D11", Some("E4:H8")),   // At the left column of the range
                ("C4:F8", "A1:B8", Some("E4:H8")),    // Fully to the left
                ("C4:F8", "D4:E8", Some("C4:H8")),    // Inside the range
                ("C4:F8", "D2:I8", Some("C4:L8")),    // Inside, overlapping = extend
                ("C4:F8", "F4:F8", Some("C4:G8")),    // Last column of the range
                ("XFD1", "XFB1", None),               // Pushed out of the grid
                ("XFA1:XFD1", "XEZ1:XFA1", Some("XFC1:XFD1")), // Partially pushed out
                ("XFA1:XFD1", "XFB1:XFC1", Some("XFA1:XFD1")), // Extended past the edge
            ],
        );
    }

    #[test]
    fn test_insert_shift_right_partial_cover() {
        check_partial(
            ShiftDirection::Right,
            &[
                ("C4:F8", "B3:B4"), // Partially above
                ("C4:F8", "B5:C7"), // In the middle
                ("C4:F8", "A5:B9"), // Partially below
            ],
        );
    }

    #[test]
    fn test_insert_shift_down() {
        check(
            ShiftDirection::Down,
            &[
                ("D6:G10", "A1:C15", Some("D6:G10")),  // Fully to the left
                ("D6:G10", "H1:K15", Some("D6:G10")),  // Fully to the right
                ("D6:G10", "A11:K15", Some("D6:G10")), // Fully below
                ("D6:G10", "D6:G11", Some("D12:G16")), // At the top row of the range
                ("D6:G10", "C4:H7", Some("D10:G14")),  // Above the range
                ("D6:G10", "D7:G9", Some("D6:G13")),   // Inside the range
                ("D6:G10", "A7:H9", Some("D6:G13")),   // Inside, overlapping = extend
                ("D6:G10", "D10:G11", Some("D6:G12")), // Last row of the range
                ("A1048576", "A1048575", None),        // Pushed out of the grid
                ("A1048574:A1048576", "A1048570:A1048571", Some("A1048576")),
                ("A1048570:A1048572", "A1048571:A1048576", Some("A1048570:A1048576")),
            ],
        );
    }

    #[test]
    fn test_insert_shift_down_partial_cover() {
        check_partial(
            ShiftDirection::Down,
            &[
                ("D6:G10", "A6:E6"),  // Left
                ("D6:G10", "D5:D5"),  // Above
                ("D6:G10", "E7:H15"), // Right
            ],
        );
    }

    #[test]
    fn test_delete_shift_left() {
        check(
            ShiftDirection::Left,
            &[
                ("E4:G4", "B3:C5", Some("C4:E4")), // Fully to the left
                ("E4:G4", "A2:D5", Some("A4:C4")), // Ends next to the range
                ("E4:G4", "F1:F7", Some("E4:F4")), // Strictly inside
                ("E4:G4", "E4:G4", None),          // Exactly the range
                ("E4:G4", "A1:Z9", None),          // Covers the range
                ("E4:G4", "H1:K10", Some("E4:G4")), // Fully to the right
                ("E4:G4", "G3:H5", Some("E4:F4")), // Cuts the right edge
                ("E4:G4", "D1:E9", Some("D4:E4")), // Cuts the left edge
                ("D4:E4", "A5:F9", Some("D4:E4")), // Fully below
                ("D4:E4", "A1:F3", Some("D4:E4")), // Fully above
                ("D4:E4", "A5:F10", Some("D4:E4")),
            ],
        );
    }

    #[test]
    fn test_delete_shift_left_partial_cover() {
        check_partial(
            ShiftDirection::Left,
            &[
                ("D4:E8", "A1:B5"), // Partial left
                ("D4:E8", "D2:E7"), // Partial inside
                ("D4:E8", "C4:D6"), // Partial left and inside
            ],
        );
    }

    #[test]
    fn test_delete_shift_up() {
        check(
            ShiftDirection::Up,
            &[
                ("B5:B8", "A1:C3", Some("B2:B5")),  // Fully above with a gap
                ("B5:B8", "A2:C4", Some("B2:B5")),  // Ends right above the range
                ("B5:B8", "A6:C7", Some("B5:B6")),  // Strictly inside
                ("B5:B8", "A5:C8", None),           // Exactly the range
                ("B5:B8", "A4:C9", None),           // Covers the range
                ("B5:B8", "A9:C10", Some("B5:B8")), // Fully below
                ("B5:B8", "A6:C10", Some("B5:B5")), // Cuts the bottom edge
                ("B5:B8", "A3:C6", Some("B3:B4")),  // Cuts the top edge
                ("B5:B8", "A1:A10", Some("B5:B8")), // Fully on the left
                ("B5:B8", "C1:C10", Some("B5:B8")), // Fully on the right
                ("B5:D8", "B9:C10", Some("B5:D8")), // Partial width below
            ],
        );
    }

    #[test]
    fn test_delete_shift_up_partial_cover() {
        check_partial(
            ShiftDirection::Up,
            &[
                ("B5:D8", "A1:B3"), // Partial above
                ("B5:D8", "C6:D8"), // Partial inside
                ("B5:D8", "B1:B6"), // Partial above and inside
            ],
        );
    }

    #[test]
    fn test_directional_methods_match_edit() {
        let range = r("C4:F8");
        let area = r("D4:E8");
        assert_eq!(
            range.insert_shift_right(&area),
            ShiftEdit::insert_shift_right(area).apply(&range)
        );
        assert_eq!(
            r("D6:G10").insert_shift_down(&r("D6:G11")).unwrap(),
            Some(r("D12:G16"))
        );
        assert_eq!(
            r("E4:G4").delete_shift_left(&r("F1:F7")).unwrap(),
            Some(r("E4:F4"))
        );
        assert_eq!(r("B5:B8").delete_shift_up(&r("A4:C9")).unwrap(), None);
    }

    #[test]
    fn test_apply_all_drops_eliminated_ranges() {
        let edit = ShiftEdit::delete_shift_up(r("A5:Z8"));
        let merged = [r("B2:C3"), r("B5:C8"), r("B10:C12")];

        assert_eq!(
            edit.apply_all(merged).unwrap(),
            vec![r("B2:C3"), r("B6:C8")]
        );
    }

    #[test]
    fn test_apply_all_stops_on_partial_overlap() {
        let edit = ShiftEdit::insert_shift_down(r("A3:B3"));
        let merged = [r("A5:B6"), r("B5:C6")];

        assert_eq!(
            edit.apply_all(merged),
            Err(Error::PartialOverlap {
                original: r("B5:C6"),
                edited: r("A3:B3"),
            })
        );
    }

    #[test]
    fn test_axes() {
        assert_eq!(ShiftDirection::Right.axis(), Axis::Column);
        assert_eq!(ShiftDirection::Left.axis(), Axis::Column);
        assert_eq!(ShiftDirection::Down.axis(), Axis::Row);
        assert_eq!(ShiftDirection::Up.axis(), Axis::Row);
        assert_eq!(Axis::Row.perpendicular(), Axis::Column);
        assert_eq!(Axis::Column.max_index(), 16_384);
        assert!(ShiftDirection::Down.is_insert());
        assert!(!ShiftDirection::Up.is_insert());
    }
}
