//! Lattice geometry for the Trophic simulator.
//!
//! Purely geometric: nothing in this crate depends on cell contents.

pub mod error;
pub mod lattice;

pub use error::SpaceError;
pub use lattice::{Adjacency, Lattice};
