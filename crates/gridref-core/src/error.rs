//! Error types for gridref-core

use crate::coord::SheetRange;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridref-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Reference text (or coordinate) outside the A1 grammar or the grid
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// The edited band only covers part of the range's perpendicular extent,
    /// so the edited range would no longer be a rectangle.
    #[error("Edit {edited} partially overlaps range {original}")]
    PartialOverlap {
        original: SheetRange,
        edited: SheetRange,
    },
}

impl Error {
    /// Create an invalid reference error with a message
    pub fn invalid_reference<S: Into<String>>(msg: S) -> Self {
        Error::InvalidReference(msg.into())
    }
}
