//! Read-only view over the published grid.

use trophic_core::Cell;

/// A borrowed, read-only view of the published ("current") buffer.
///
/// This is the only surface the reporting collaborator sees; it cannot
/// observe the staging buffer mid-tick.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    side: usize,
    cells: &'a [Cell],
}

impl<'a> GridView<'a> {
    pub(crate) fn new(side: usize, cells: &'a [Cell]) -> Self {
        Self { side, cells }
    }

    /// Lattice side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.side && col < self.side {
            Some(self.cells[row * self.side + col])
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + 'a {
        self.cells.iter().copied()
    }

    /// The rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [Cell]> {
        self.cells.chunks(self.side)
    }
}
