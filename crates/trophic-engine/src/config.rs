//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is fixed at construction time; there is no runtime
//! reconfiguration. [`SimConfig::validate`] checks every structural invariant
//! before any simulation state is built, so a bad configuration is reported
//! at startup rather than mid-run.

use std::error::Error;
use std::fmt;

use trophic_core::GridError;

/// Errors detected during [`SimConfig::validate`] or driver construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid side length is zero.
    EmptyGrid,
    /// Tick count is zero.
    ZeroTicks,
    /// Initial populations do not fit on the grid.
    PopulationExceedsCapacity {
        /// Sum of the configured initial counts.
        requested: usize,
        /// `side * side`.
        capacity: usize,
    },
    /// A probability parameter is above 100 percent.
    PercentageOutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The configured value.
        value: u32,
    },
    /// The reproduction energy threshold does not exceed the reproduction
    /// cost, which would let reproduction leave a parent with no energy.
    ThresholdBelowCost {
        /// Configured reproduction energy threshold.
        threshold: i32,
        /// Configured reproduction energy cost.
        cost: i32,
    },
    /// An energy parameter that must be positive is not.
    NonPositiveEnergy {
        /// Name of the offending parameter.
        name: &'static str,
        /// The configured value.
        value: i32,
    },
    /// A scripted placement fell outside the grid.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid side length must be at least 1"),
            Self::ZeroTicks => write!(f, "tick count must be at least 1"),
            Self::PopulationExceedsCapacity {
                requested,
                capacity,
            } => write!(
                f,
                "initial populations ({requested}) exceed grid capacity ({capacity})"
            ),
            Self::PercentageOutOfRange { name, value } => {
                write!(f, "{name} must be at most 100, got {value}")
            }
            Self::ThresholdBelowCost { threshold, cost } => write!(
                f,
                "reproduction_energy_threshold ({threshold}) must exceed \
                 reproduction_energy_cost ({cost})"
            ),
            Self::NonPositiveEnergy { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            Self::Grid(e) => write!(f, "placement: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Complete configuration for one simulation run.
///
/// Probabilities are whole percentages in `0..=100`. The `Default` values
/// mirror the legacy reference constants: a 20x20 grid run for 20 ticks with
/// 150 plants, 40 herbivores, and 15 carnivores.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Grid side length; the lattice holds `side * side` cells.
    pub side: usize,
    /// Number of ticks to run.
    pub ticks: u64,
    /// Master RNG seed. Identical seed and config reproduce the run exactly.
    pub seed: u64,
    /// Initial plant count.
    pub initial_plants: usize,
    /// Initial herbivore count.
    pub initial_herbivores: usize,
    /// Initial carnivore count.
    pub initial_carnivores: usize,
    /// Chance (%) that a surviving plant reproduces each tick.
    pub plant_reproduction_pct: u32,
    /// Chance (%) that an eligible animal reproduces.
    pub animal_reproduction_pct: u32,
    /// Energy a herbivore gains by eating a plant.
    pub herbivore_energy_gain: i32,
    /// Energy a carnivore gains by eating a herbivore.
    pub carnivore_energy_gain: i32,
    /// Consecutive foodless ticks that kill an animal.
    pub max_no_food_ticks: u32,
    /// Minimum energy for an animal to attempt reproduction.
    pub reproduction_energy_threshold: i32,
    /// Chance (%) that an unfed animal wanders to an empty neighbour.
    pub movement_pct: u32,
    /// Plants older than this die of old age.
    pub plant_max_age: u32,
    /// Energy deducted from a parent on successful reproduction.
    pub reproduction_energy_cost: i32,
    /// Starting energy for initially placed animals.
    pub initial_animal_energy: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            side: 20,
            ticks: 20,
            seed: 42,
            initial_plants: 150,
            initial_herbivores: 40,
            initial_carnivores: 15,
            plant_reproduction_pct: 30,
            animal_reproduction_pct: 25,
            herbivore_energy_gain: 1,
            carnivore_energy_gain: 2,
            max_no_food_ticks: 3,
            reproduction_energy_threshold: 5,
            movement_pct: 50,
            plant_max_age: 10,
            reproduction_energy_cost: 2,
            initial_animal_energy: 5,
        }
    }
}

impl SimConfig {
    /// Grid capacity (`side * side`).
    pub fn capacity(&self) -> usize {
        self.side * self.side
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.ticks == 0 {
            return Err(ConfigError::ZeroTicks);
        }
        let requested = self.initial_plants + self.initial_herbivores + self.initial_carnivores;
        if requested > self.capacity() {
            return Err(ConfigError::PopulationExceedsCapacity {
                requested,
                capacity: self.capacity(),
            });
        }
        for (name, value) in [
            ("plant_reproduction_pct", self.plant_reproduction_pct),
            ("animal_reproduction_pct", self.animal_reproduction_pct),
            ("movement_pct", self.movement_pct),
        ] {
            if value > 100 {
                return Err(ConfigError::PercentageOutOfRange { name, value });
            }
        }
        if self.reproduction_energy_threshold <= self.reproduction_energy_cost {
            return Err(ConfigError::ThresholdBelowCost {
                threshold: self.reproduction_energy_threshold,
                cost: self.reproduction_energy_cost,
            });
        }
        for (name, value) in [
            ("initial_animal_energy", self.initial_animal_energy),
            ("herbivore_energy_gain", self.herbivore_energy_gain),
            ("carnivore_energy_gain", self.carnivore_energy_gain),
            ("reproduction_energy_cost", self.reproduction_energy_cost),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositiveEnergy { name, value });
            }
        }
        Ok(())
    }
}
