//! Coordinate types and the A1 reference grammar
//!
//! This module contains:
//! - [`column_to_letters`] / [`letters_to_column`] - bijective base-26 column labels
//! - [`SheetPoint`] - a single cell location (e.g., "B7")
//! - [`SheetRange`] - a rectangle of cells (e.g., "A1:Z100") and its algebra

mod column;
mod point;
mod range;

pub use column::{column_to_letters, letters_to_column};
pub use point::SheetPoint;
pub use range::{SheetPoints, SheetRange};
