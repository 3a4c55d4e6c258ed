//! Character-grid rendering.

use trophic_grid::GridView;

/// Render the view as one glyph per cell, one row per line.
///
/// `'.'` empty, `'*'` plant, `'h'` herbivore, `'C'` carnivore.
pub fn render(view: &GridView<'_>) -> String {
    let side = view.side();
    let mut out = String::with_capacity(side * (side + 1));
    for row in view.rows() {
        for cell in row {
            out.push(cell.glyph());
        }
        out.push('\n');
    }
    out
}
