//! Trophic: a grid-based predator-prey ecosystem simulator.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Trophic sub-crates. For most users, adding `trophic` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use trophic::prelude::*;
//!
//! // A 12x12 world, 5 ticks, fixed seed.
//! let config = SimConfig {
//!     side: 12,
//!     ticks: 5,
//!     seed: 7,
//!     initial_plants: 40,
//!     initial_herbivores: 12,
//!     initial_carnivores: 4,
//!     ..SimConfig::default()
//! };
//! let mut driver = TickDriver::new(config).unwrap();
//! let mut recorder = RecordingObserver::new();
//! driver.run(&mut recorder).unwrap();
//!
//! // Tick 0 is the initial state; one census per published tick follows.
//! assert_eq!(recorder.history.len(), 6);
//! assert_eq!(recorder.history[0].plants, 40);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `trophic-core` | Cell and animal state, grid errors |
//! | [`space`] | `trophic-space` | Lattice geometry and neighbourhoods |
//! | [`grid`] | `trophic-grid` | Double-buffered cell store with claims |
//! | [`obs`] | `trophic-obs` | Census, text rendering, observers |
//! | [`engine`] | `trophic-engine` | Configuration, species rules, tick driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell and animal state, grid errors (`trophic-core`).
///
/// The tagged [`types::Cell`] variant and the [`types::Animal`] record are
/// the vocabulary every other crate speaks.
pub use trophic_core as types;

/// Lattice geometry and neighbourhoods (`trophic-space`).
///
/// [`space::Lattice`] maps coordinates to indices and enumerates
/// [`space::Adjacency::Orthogonal`] and [`space::Adjacency::Moore`]
/// neighbourhoods in a fixed scan order.
pub use trophic_space as space;

/// Double-buffered cell store (`trophic-grid`).
///
/// [`grid::DualGrid`] holds the current/next buffer pair and enforces the
/// per-destination claim discipline; [`grid::GridView`] is its read-only
/// published view.
pub use trophic_grid as grid;

/// Census, text rendering, and observers (`trophic-obs`).
///
/// Implement [`obs::Observer`] to receive each published state, or use
/// [`obs::ConsoleObserver`] / [`obs::RecordingObserver`].
pub use trophic_obs as obs;

/// Configuration, species rules, and the tick driver (`trophic-engine`).
///
/// [`engine::TickDriver`] owns the grid and advances the simulation;
/// [`engine::SimConfig`] fixes every tunable at construction time.
pub use trophic_engine as engine;

/// Common imports for typical Trophic usage.
///
/// ```rust
/// use trophic::prelude::*;
/// ```
pub mod prelude {
    // Cell vocabulary
    pub use trophic_core::{Animal, Cell, GridError, Species};

    // Geometry
    pub use trophic_space::{Adjacency, Lattice};

    // Storage
    pub use trophic_grid::{DualGrid, GridView};

    // Reporting
    pub use trophic_obs::{
        render, Census, ConsoleObserver, Observer, RecordingObserver, SilentObserver,
    };

    // Engine
    pub use trophic_engine::{ConfigError, Phase, SimConfig, TickDriver, PHASE_ORDER};
}
