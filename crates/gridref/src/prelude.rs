//! Prelude module - common imports for gridref users
//!
//! ```rust
//! use gridref::prelude::*;
//! ```

pub use crate::{
    // Error types
    Error,
    Result,
    // Edit types
    ShiftDirection,
    ShiftEdit,
    // Coordinate types
    SheetPoint,
    SheetRange,
    // Grid bounds
    MAX_COLUMN,
    MAX_ROW,
};
