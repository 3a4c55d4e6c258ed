//! Phase-ordered tick driver.
//!
//! Each tick snapshots the grid, runs the three species phases in a fixed
//! order (carnivores, then herbivores, then plants), and publishes the
//! staging buffer. Within a phase, cells are processed in parallel in nine
//! colour classes keyed by `(row % 3, col % 3)`: two source cells of the same
//! class are at least three apart in both axes, so their Moore footprints
//! cannot overlap and the worker schedule cannot affect the outcome. Across
//! classes the sweep is sequential, and every cell draws from its own seeded
//! RNG stream, so a run is fully determined by seed and configuration.

use rand::seq::SliceRandom;
use rayon::prelude::*;
use trophic_core::{Animal, Cell, GridError, Species};
use trophic_grid::{DualGrid, GridView};
use trophic_obs::{Census, Observer};
use trophic_space::Lattice;

use crate::config::{ConfigError, SimConfig};
use crate::rng;
use crate::rules::{self, RuleContext};

/// One species update pass within a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Carnivores hunt first, while the snapshot still shows every herbivore.
    Carnivores,
    /// Herbivores graze on whatever plants survive in the staging buffer.
    Herbivores,
    /// Plants age, die, and spread last.
    Plants,
}

impl Phase {
    /// The species this phase updates.
    pub fn species(self) -> Species {
        match self {
            Self::Carnivores => Species::Carnivore,
            Self::Herbivores => Species::Herbivore,
            Self::Plants => Species::Plant,
        }
    }

    /// Domain-separation tag for the per-cell RNG streams.
    fn stream_tag(self) -> u64 {
        match self {
            Self::Carnivores => 0,
            Self::Herbivores => 1,
            Self::Plants => 2,
        }
    }
}

/// The fixed within-tick phase order.
pub const PHASE_ORDER: [Phase; 3] = [Phase::Carnivores, Phase::Herbivores, Phase::Plants];

/// Owns the grid and advances the simulation tick by tick.
pub struct TickDriver {
    grid: DualGrid,
    config: SimConfig,
    tick: u64,
}

impl TickDriver {
    /// Build a driver with randomly placed initial populations.
    ///
    /// Placement shuffles the cell indices once with the seed-derived
    /// placement stream and deals them out plant-first, so no two organisms
    /// share a cell and the layout is reproducible.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lattice = Lattice::new(config.side).expect("side validated");
        let mut grid = DualGrid::new(lattice);

        let mut indices: Vec<usize> = (0..config.capacity()).collect();
        indices.shuffle(&mut rng::placement_stream(config.seed));
        let mut slots = indices.into_iter();
        let side = config.side;
        let mut place = |count: usize, cell: Cell, grid: &mut DualGrid| -> Result<(), GridError> {
            for _ in 0..count {
                let idx = slots.next().expect("capacity validated");
                grid.set_current(idx / side, idx % side, cell)?;
            }
            Ok(())
        };
        let spawn = Animal::with_energy(config.initial_animal_energy);
        place(config.initial_plants, Cell::Plant { age: 0 }, &mut grid)?;
        place(config.initial_herbivores, Cell::Herbivore(spawn), &mut grid)?;
        place(config.initial_carnivores, Cell::Carnivore(spawn), &mut grid)?;

        Ok(Self {
            grid,
            config,
            tick: 0,
        })
    }

    /// Build a driver from scripted placements instead of random ones.
    ///
    /// The `initial_*` counts in `config` are ignored and stored as zero;
    /// `cells` alone decides the starting grid. Out-of-bounds placements
    /// surface as [`ConfigError::Grid`].
    pub fn from_cells(
        config: SimConfig,
        cells: &[(usize, usize, Cell)],
    ) -> Result<Self, ConfigError> {
        let config = SimConfig {
            initial_plants: 0,
            initial_herbivores: 0,
            initial_carnivores: 0,
            ..config
        };
        config.validate()?;
        let lattice = Lattice::new(config.side).expect("side validated");
        let mut grid = DualGrid::new(lattice);
        for &(row, col, cell) in cells {
            grid.set_current(row, col, cell)?;
        }
        Ok(Self {
            grid,
            config,
            tick: 0,
        })
    }

    /// The configuration this driver was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Read-only view of the last published grid state.
    pub fn view(&self) -> GridView<'_> {
        self.grid.view()
    }

    /// Population counts of the last published grid state.
    pub fn census(&self) -> Census {
        Census::of(&self.grid.view())
    }

    /// Advance the simulation by one tick.
    pub fn step(&mut self) -> Result<(), GridError> {
        self.grid.snapshot_to_next();
        self.tick += 1;
        for phase in PHASE_ORDER {
            self.run_phase(phase)?;
        }
        self.grid.publish();
        let census = self.census();
        tracing::debug!(tick = self.tick, %census, "tick published");
        Ok(())
    }

    /// Run one species phase over the pre-tick snapshot.
    fn run_phase(&self, phase: Phase) -> Result<(), GridError> {
        let ctx = RuleContext {
            grid: &self.grid,
            config: &self.config,
        };
        let species = phase.species();
        let side = self.config.side;
        let seed = self.config.seed;
        let tick = self.tick;

        for class in 0..9usize {
            let (row_mod, col_mod) = (class / 3, class % 3);
            let mut sources = Vec::new();
            for row in (row_mod..side).step_by(3) {
                for col in (col_mod..side).step_by(3) {
                    if self.grid.current(row, col)?.species() == Some(species) {
                        sources.push((row, col));
                    }
                }
            }
            sources.par_iter().try_for_each(|&(row, col)| {
                let cell = self.grid.lattice().index(row, col) as u64;
                let mut stream = rng::cell_stream(seed, tick, phase.stream_tag(), cell);
                match phase {
                    Phase::Carnivores => rules::step_carnivore(&ctx, row, col, &mut stream),
                    Phase::Herbivores => rules::step_herbivore(&ctx, row, col, &mut stream),
                    Phase::Plants => rules::step_plant(&ctx, row, col, &mut stream),
                }
            })?;
        }
        Ok(())
    }

    /// Run the configured number of ticks, reporting each published state.
    ///
    /// The observer sees the initial state as tick 0 before any update runs.
    pub fn run<O: Observer>(&mut self, observer: &mut O) -> Result<(), GridError> {
        let census = self.census();
        observer.on_tick(self.tick, &census, &self.grid.view());
        for _ in 0..self.config.ticks {
            self.step()?;
            let census = self.census();
            observer.on_tick(self.tick, &census, &self.grid.view());
        }
        Ok(())
    }
}
