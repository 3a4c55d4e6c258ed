//! Simulation engine for the Trophic ecosystem: configuration, species
//! rules, and the phase-ordered parallel tick driver.

pub mod config;
pub mod rng;
pub mod rules;
pub mod tick;

pub use config::{ConfigError, SimConfig};
pub use tick::{Phase, TickDriver, PHASE_ORDER};
