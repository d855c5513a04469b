//! Marching-squares tile compositing.
//!
//! Each interior grid cell maps to one of 16 configurations according to
//! its four corner samples; the matching atlas tile is copied over the
//! cell's pixel block in the scaled image.

use std::ops::Range;

use raster::{ContourAtlas, Image, Rgb};

use crate::config::STEP;
use crate::grid::Grid;
use crate::shared::RegionMut;

/// Configuration code for interior cell (row, col).
///
/// Bit weights: 8 top-left, 4 top-right, 2 bottom-right, 1 bottom-left.
#[inline]
pub fn cell_code(grid: &Grid, row: usize, col: usize) -> u8 {
    8 * grid.get(row, col)
        + 4 * grid.get(row, col + 1)
        + 2 * grid.get(row + 1, col + 1)
        + grid.get(row + 1, col)
}

/// Composite the atlas tile of every cell in `rows` x `cols` into the
/// image view, each tile's top-left corner at `(row*STEP, col*STEP)`.
pub fn march_cells(
    grid: &Grid,
    atlas: &ContourAtlas,
    view: &mut RegionMut<Rgb>,
    rows: Range<usize>,
    cols: Range<usize>,
) {
    for row in rows {
        for col in cols.clone() {
            let code = cell_code(grid, row, col);
            blit_tile(view, atlas.tile(code), row * STEP, col * STEP);
        }
    }
}

/// Copy `tile` into the view with its top-left corner at (top, left).
fn blit_tile(view: &mut RegionMut<Rgb>, tile: &Image, top: usize, left: usize) {
    for row in 0..tile.height() {
        for col in 0..tile.width() {
            view.set(top + row, left + col, tile.pixel(row, col));
        }
    }
}
