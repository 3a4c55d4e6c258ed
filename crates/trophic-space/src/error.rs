//! Error types for lattice construction.

use std::error::Error;
use std::fmt;

/// Errors from [`Lattice::new`](crate::Lattice::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// The lattice would contain zero cells.
    EmptySpace,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "lattice side length must be at least 1"),
        }
    }
}

impl Error for SpaceError {}
