//! Error types shared by the grid store and its callers.

use std::error::Error;
use std::fmt;

/// Errors from bounds-checked grid access.
///
/// An out-of-range coordinate is a programmer error: correct neighbour
/// enumeration never produces one, and it is surfaced rather than clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside the `side x side` lattice.
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Lattice side length.
        side: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { row, col, side } => {
                write!(f, "coordinate ({row}, {col}) outside {side}x{side} grid")
            }
        }
    }
}

impl Error for GridError {}
