//! Binary occupancy grid sampled from the scaled image.
//!
//! The grid has one row/column more than the number of whole steps in
//! each image dimension. Interior cells sample the step-aligned pixel at
//! their top-left corner; the last row and column sample the image's
//! boundary pixels, since no further step fits. A cell is 1 when its
//! sample reads dark (mean channel value at or below the threshold).

use std::ops::Range;

use raster::Rgb;

use crate::config::{LUMA_THRESHOLD, STEP};
use crate::error::PipelineResult;
use crate::shared::{RegionMut, SharedBuffer};

/// The `(q+1) x (p+1)` binary grid for a scaled image.
pub struct Grid {
    cells: SharedBuffer<u8>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Allocate the grid for an image of the given pixel dimensions.
    ///
    /// Cells start at 0; the bottom-right corner cell is written by no
    /// sampling sub-phase and keeps that value, so every cell the
    /// marching phase reads is deterministic.
    pub fn try_new(image_width: usize, image_height: usize) -> PipelineResult<Self> {
        let rows = image_height / STEP + 1;
        let cols = image_width / STEP + 1;
        let mut cells = Vec::new();
        cells.try_reserve_exact(rows * cols)?;
        cells.resize(rows * cols, 0u8);
        Ok(Self {
            cells: SharedBuffer::from_vec(cols, rows, cells),
            rows,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Rows of interior cells (everything above the boundary row).
    pub fn interior_rows(&self) -> usize {
        self.rows - 1
    }

    /// Columns of interior cells (everything left of the boundary column).
    pub fn interior_cols(&self) -> usize {
        self.cols - 1
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells.get(row, col)
    }

    /// Write view over the given cell rectangle.
    pub fn region(&self, rows: Range<usize>, cols: Range<usize>) -> RegionMut<'_, u8> {
        self.cells.region(rows, cols)
    }
}

/// 1 when the pixel reads dark, 0 otherwise.
#[inline]
fn classify(px: Rgb) -> u8 {
    if px.luma() > LUMA_THRESHOLD {
        0
    } else {
        1
    }
}

/// Sub-phase 1: sample the step-aligned pixel of every interior cell in
/// the view's rectangle.
pub fn sample_interior(image: &SharedBuffer<Rgb>, view: &mut RegionMut<u8>) {
    for row in view.rows() {
        for col in view.cols() {
            let px = image.get(row * STEP, col * STEP);
            view.set(row, col, classify(px));
        }
    }
}

/// Sub-phase 2: populate the grid's last column from the pixels of the
/// image's last column (the view covers a row band of that column).
pub fn sample_edge_column(image: &SharedBuffer<Rgb>, view: &mut RegionMut<u8>) {
    let grid_col = view.cols().start;
    for row in view.rows() {
        let px = image.get(row * STEP, image.width() - 1);
        view.set(row, grid_col, classify(px));
    }
}

/// Sub-phase 3: populate the grid's last row from the pixels of the
/// image's last row (the view covers a column band of that row).
pub fn sample_edge_row(image: &SharedBuffer<Rgb>, view: &mut RegionMut<u8>) {
    let grid_row = view.rows().start;
    for col in view.cols() {
        let px = image.get(image.height() - 1, col * STEP);
        view.set(grid_row, col, classify(px));
    }
}
