//! # gridref
//!
//! Reference-range algebra for spreadsheet documents.
//!
//! gridref parses, formats, combines and structurally edits rectangular cell
//! ranges in A1 notation (`A1`, `C4:F8`, `A1:XFD1048576`). It is meant to sit
//! under the code that inserts or deletes rows and columns and must keep
//! merged areas, named ranges and similar references consistent.
//!
//! ## Features
//!
//! - Strict A1 parsing and canonical formatting
//! - Bounding union, intersection and containment
//! - Insert/delete transforms in all four shift directions
//! - Optional `serde` support (ranges serialize as their A1 text)
//!
//! ## Example
//!
//! ```rust
//! use gridref::prelude::*;
//!
//! let merged = SheetRange::parse("C4:F8").unwrap();
//!
//! // Two columns inserted at C, cells shifted right
//! let edit = ShiftEdit::insert_shift_right(SheetRange::parse("C1:D11").unwrap());
//! let moved = edit.apply(&merged).unwrap().unwrap();
//! assert_eq!(moved.to_string(), "E4:H8");
//!
//! // The edit only covers rows 3-4 of the merged area
//! let edit = ShiftEdit::insert_shift_right(SheetRange::parse("B3:B4").unwrap());
//! assert!(matches!(edit.apply(&merged), Err(Error::PartialOverlap { .. })));
//! ```

pub mod prelude;

// Re-export core types
pub use gridref_core::{
    column_to_letters,
    letters_to_column,
    // Edit types
    Axis,
    // Error types
    Error,
    Result,
    ShiftDirection,
    ShiftEdit,
    // Coordinate types
    SheetPoint,
    SheetPoints,
    SheetRange,
    // Grid bounds
    MAX_COLUMN,
    MAX_ROW,
};
