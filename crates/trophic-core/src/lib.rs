//! Core types shared across the Trophic simulator crates.

pub mod cell;
pub mod error;

pub use cell::{Animal, Cell, Species};
pub use error::GridError;
