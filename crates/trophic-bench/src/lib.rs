//! Benchmark profiles for the Trophic ecosystem simulator.
//!
//! Provides pre-built [`SimConfig`] profiles:
//!
//! - [`reference_profile`]: 64x64 grid with populations scaled from the
//!   default 20x20 densities
//! - [`stress_profile`]: 200x200 grid (40K cells) at the same densities

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use trophic_engine::SimConfig;

/// Density-scaled profile for a `side` x `side` grid.
///
/// Keeps the default 20x20 occupancy fractions (37.5% plants, 10%
/// herbivores, 3.75% carnivores) so predator-prey dynamics stay comparable
/// across sizes.
fn scaled_profile(side: usize, seed: u64) -> SimConfig {
    let capacity = side * side;
    SimConfig {
        side,
        seed,
        initial_plants: capacity * 3 / 8,
        initial_herbivores: capacity / 10,
        initial_carnivores: capacity * 3 / 80,
        ..SimConfig::default()
    }
}

/// Reference benchmark profile: 64x64 grid (4K cells).
pub fn reference_profile(seed: u64) -> SimConfig {
    scaled_profile(64, seed)
}

/// Stress benchmark profile: 200x200 grid (40K cells).
pub fn stress_profile(seed: u64) -> SimConfig {
    scaled_profile(200, seed)
}
