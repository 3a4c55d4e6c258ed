//! Per-species population counts.

use std::fmt;

use trophic_core::Species;
use trophic_grid::GridView;

/// Occupant counts for one published grid state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Census {
    /// Number of plant cells.
    pub plants: usize,
    /// Number of herbivore cells.
    pub herbivores: usize,
    /// Number of carnivore cells.
    pub carnivores: usize,
}

impl Census {
    /// Count occupants by species in one pass over the view.
    pub fn of(view: &GridView<'_>) -> Self {
        let mut census = Self::default();
        for cell in view.iter() {
            match cell.species() {
                Some(Species::Plant) => census.plants += 1,
                Some(Species::Herbivore) => census.herbivores += 1,
                Some(Species::Carnivore) => census.carnivores += 1,
                None => {}
            }
        }
        census
    }

    /// The count for one species.
    pub fn count(&self, species: Species) -> usize {
        match species {
            Species::Plant => self.plants,
            Species::Herbivore => self.herbivores,
            Species::Carnivore => self.carnivores,
        }
    }

    /// Total occupied cells.
    pub fn total(&self) -> usize {
        self.plants + self.herbivores + self.carnivores
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "plants={} herbivores={} carnivores={}",
            self.plants, self.herbivores, self.carnivores
        )
    }
}
