//! Square lattice with 4- or 8-connected neighbourhoods.

use smallvec::SmallVec;

use crate::error::SpaceError;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
///
/// The order is fixed and load-bearing: every "first eligible neighbour"
/// scan in the rule engine walks this list, so tie-breaking is reproducible
/// for a given RNG stream. The orthogonal directions come first so that
/// [`Adjacency::Orthogonal`] is a prefix of [`Adjacency::Moore`].
const OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Neighbourhood mode for [`Lattice::neighbours`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adjacency {
    /// The 4 cardinal neighbours.
    Orthogonal,
    /// The full Moore neighbourhood: cardinals plus diagonals, up to 8 cells.
    Moore,
}

impl Adjacency {
    fn degree(self) -> usize {
        match self {
            Self::Orthogonal => 4,
            Self::Moore => 8,
        }
    }
}

/// A `side x side` square lattice with absorbing edges.
///
/// Edge and corner cells simply have fewer neighbours (a corner has 3 Moore
/// neighbours, an edge cell 5). Out-of-range coordinates are never clamped
/// or wrapped; bounds violations are the grid store's to report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
    side: usize,
}

impl Lattice {
    /// Create a lattice with `side * side` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `side` is 0.
    pub fn new(side: usize) -> Result<Self, SpaceError> {
        if side == 0 {
            return Err(SpaceError::EmptySpace);
        }
        Ok(Self { side })
    }

    /// Side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total cell count (`side * side`).
    pub fn cell_count(&self) -> usize {
        self.side * self.side
    }

    /// Whether `(row, col)` lies on the lattice.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.side && col < self.side
    }

    /// Row-major flat index of `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.side + col
    }

    /// Inverse of [`Lattice::index`].
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.side, index % self.side)
    }

    /// In-bounds neighbours of `(row, col)` in the fixed offset order.
    pub fn neighbours(
        &self,
        row: usize,
        col: usize,
        adjacency: Adjacency,
    ) -> SmallVec<[(usize, usize); 8]> {
        let mut result = SmallVec::new();
        for &(dr, dc) in &OFFSETS[..adjacency.degree()] {
            let nr = row as isize + dr;
            let nc = col as isize + dc;
            if nr >= 0 && nc >= 0 {
                let (nr, nc) = (nr as usize, nc as usize);
                if self.in_bounds(nr, nc) {
                    result.push((nr, nc));
                }
            }
        }
        result
    }
}
