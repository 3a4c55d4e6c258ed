//! The tagged cell variant and its species classification.
//!
//! A cell is either empty or occupied by exactly one organism. Plants carry
//! only an age; animals carry the full energy/age/starvation record. Keeping
//! the per-kind state inside the variant makes invalid combinations (an empty
//! cell with leftover energy, a plant with a starvation counter)
//! unrepresentable.

/// The three occupant kinds of the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    /// Stationary producer; eaten by herbivores.
    Plant,
    /// Eats plants; hunted by carnivores.
    Herbivore,
    /// Eats herbivores.
    Carnivore,
}

impl Species {
    /// Display glyph used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Self::Plant => '*',
            Self::Herbivore => 'h',
            Self::Carnivore => 'C',
        }
    }
}

/// Per-animal state carried by herbivore and carnivore cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animal {
    /// Current energy. A live animal in a published grid always has
    /// `energy >= 1`; dropping to zero or below kills it by end of tick.
    pub energy: i32,
    /// Ticks since creation.
    pub age: u32,
    /// Consecutive ticks without feeding. Reaching the configured
    /// starvation threshold kills the animal.
    pub ticks_without_food: u32,
}

impl Animal {
    /// A freshly placed or newborn animal with the given starting energy.
    pub fn with_energy(energy: i32) -> Self {
        Self {
            energy,
            age: 0,
            ticks_without_food: 0,
        }
    }

    /// Offspring produced by reproduction: `energy = 1`, everything else zero.
    pub fn newborn() -> Self {
        Self::with_energy(1)
    }
}

/// One lattice cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    /// The canonical empty state.
    #[default]
    Empty,
    /// A plant; dies of old age or overcrowding.
    Plant {
        /// Ticks since the plant sprouted.
        age: u32,
    },
    /// A herbivore.
    Herbivore(Animal),
    /// A carnivore.
    Carnivore(Animal),
}

impl Cell {
    /// The occupant's species, or `None` for an empty cell.
    pub fn species(&self) -> Option<Species> {
        match self {
            Self::Empty => None,
            Self::Plant { .. } => Some(Species::Plant),
            Self::Herbivore(_) => Some(Species::Herbivore),
            Self::Carnivore(_) => Some(Species::Carnivore),
        }
    }

    /// Whether the cell is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The animal record, if this cell holds a herbivore or carnivore.
    pub fn animal(&self) -> Option<&Animal> {
        match self {
            Self::Herbivore(a) | Self::Carnivore(a) => Some(a),
            _ => None,
        }
    }

    /// Display glyph: `'.'` for empty, otherwise the species glyph.
    pub fn glyph(&self) -> char {
        self.species().map_or('.', Species::glyph)
    }
}
