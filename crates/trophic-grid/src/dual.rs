//! Double-buffered grid store with per-destination claims.
//!
//! The per-tick lifecycle mirrors a ping-pong arena:
//! 1. [`DualGrid::snapshot_to_next`] — next becomes an exact copy of current
//! 2. Rule evaluation reads current freely and mutates next through
//!    [`DualGrid::store_next`] / [`DualGrid::claim_next`]
//! 3. [`DualGrid::publish`] — next's final contents replace current
//!
//! Every next-buffer cell sits behind its own mutex, so a write that could
//! race with another source cell's write (a move destination, a reproduction
//! target) is committed under that cell's lock, after re-checking
//! eligibility. At most one claimant wins a given destination per tick; the
//! loser is told so and takes its fallback branch — losing is not an error.

use parking_lot::Mutex;
use trophic_core::{Cell, GridError};
use trophic_space::Lattice;

use crate::view::GridView;

/// The current/next cell buffer pair. Owns all cell state.
pub struct DualGrid {
    lattice: Lattice,
    /// Published state. Read-only between `snapshot_to_next` and `publish`.
    current: Vec<Cell>,
    /// Staging state, guarded per cell.
    next: Vec<Mutex<Cell>>,
}

impl DualGrid {
    /// Create an all-empty grid over `lattice`.
    pub fn new(lattice: Lattice) -> Self {
        let n = lattice.cell_count();
        Self {
            lattice,
            current: vec![Cell::Empty; n],
            next: (0..n).map(|_| Mutex::new(Cell::Empty)).collect(),
        }
    }

    /// The underlying lattice geometry.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.lattice.in_bounds(row, col) {
            Ok(self.lattice.index(row, col))
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                side: self.lattice.side(),
            })
        }
    }

    /// Read a cell from the published buffer.
    pub fn current(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        Ok(self.current[self.checked_index(row, col)?])
    }

    /// Write a cell directly into the published buffer.
    ///
    /// Initialization only: takes `&mut self`, so it cannot overlap with a
    /// tick in progress.
    pub fn set_current(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.checked_index(row, col)?;
        self.current[idx] = cell;
        Ok(())
    }

    /// Read a cell from the staging buffer (locks it briefly).
    pub fn read_next(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        let idx = self.checked_index(row, col)?;
        Ok(*self.next[idx].lock())
    }

    /// Unconditionally write a cell into the staging buffer.
    ///
    /// For writes to the source cell itself (aging in place, vacating an
    /// origin after a won move). Destination cells that other sources might
    /// also target go through [`DualGrid::claim_next`] instead.
    pub fn store_next(&self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.checked_index(row, col)?;
        *self.next[idx].lock() = cell;
        Ok(())
    }

    /// Atomically claim a staging cell: under the cell's lock, re-check that
    /// `eligible` still holds for its contents and only then commit
    /// `replacement`.
    ///
    /// Returns `Ok(true)` if the claim won. `Ok(false)` means another source
    /// claimed the destination first (it is no longer eligible); the caller
    /// takes its no-feeding/no-movement fallback for the tick.
    pub fn claim_next(
        &self,
        row: usize,
        col: usize,
        eligible: impl FnOnce(&Cell) -> bool,
        replacement: Cell,
    ) -> Result<bool, GridError> {
        let idx = self.checked_index(row, col)?;
        let mut slot = self.next[idx].lock();
        if eligible(&slot) {
            *slot = replacement;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Copy current into next. Run at the start of every tick, before any
    /// rule evaluation.
    pub fn snapshot_to_next(&mut self) {
        for (dst, src) in self.next.iter_mut().zip(&self.current) {
            *dst.get_mut() = *src;
        }
    }

    /// Replace current with next's final contents.
    ///
    /// The only state-publishing operation: reporting observers see the grid
    /// exclusively through views taken after `publish`.
    pub fn publish(&mut self) {
        for (dst, src) in self.current.iter_mut().zip(self.next.iter_mut()) {
            *dst = *src.get_mut();
        }
    }

    /// Read-only view of the published buffer.
    pub fn view(&self) -> GridView<'_> {
        GridView::new(self.lattice.side(), &self.current)
    }
}
