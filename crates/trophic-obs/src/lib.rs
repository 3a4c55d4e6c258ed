//! The reporting collaborator: population census and text rendering.
//!
//! Consumes only read-only [`GridView`]s taken after each publish; nothing in
//! this crate can influence simulation state.

pub mod census;
pub mod observer;
pub mod render;

pub use census::Census;
pub use observer::{ConsoleObserver, Observer, RecordingObserver, SilentObserver};
pub use render::render;

#[doc(no_inline)]
pub use trophic_grid::GridView;
