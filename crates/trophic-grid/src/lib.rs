//! The double-buffered cell grid for the Trophic simulator.
//!
//! [`DualGrid`] owns all cell state in two same-shaped buffers: a read-only
//! "current" snapshot and a "next" staging buffer guarded per cell. The rule
//! engine evaluates against current and commits into next through the claim
//! discipline; [`DualGrid::publish`] replaces current with next's contents at
//! end of tick.

pub mod dual;
pub mod view;

pub use dual::DualGrid;
pub use view::GridView;
