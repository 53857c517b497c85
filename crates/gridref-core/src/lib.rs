//! # gridref-core
//!
//! Core coordinate types for the gridref reference-range algebra.
//!
//! This crate provides:
//! - [`SheetPoint`] and [`SheetRange`] - 1-based cell coordinates and rectangles
//! - [`column_to_letters`] / [`letters_to_column`] - the column letter codec
//! - Range algebra on [`SheetRange`] (bounding union, intersection, containment)
//! - [`ShiftEdit`] - insert/delete transforms that reposition a range after a
//!   structural edit of the sheet
//!
//! ## Example
//!
//! ```rust
//! use gridref_core::SheetRange;
//!
//! let merged = SheetRange::parse("C4:F8").unwrap();
//! let inserted = SheetRange::parse("D4:E8").unwrap();
//!
//! let moved = merged.insert_shift_right(&inserted).unwrap();
//! assert_eq!(moved.map(|r| r.to_string()), Some("C4:H8".to_string()));
//! ```

pub mod coord;
pub mod error;
pub mod shift;

// Re-exports for convenience
pub use coord::{column_to_letters, letters_to_column, SheetPoint, SheetPoints, SheetRange};
pub use error::{Error, Result};
pub use shift::{Axis, ShiftDirection, ShiftEdit};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROW: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit, column `XFD`)
pub const MAX_COLUMN: u16 = 16_384;
