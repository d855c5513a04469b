//! The parallel contour pipeline: rescale, sample, march.
//!
//! A fixed pool of worker threads is spawned once; every worker runs the
//! full phase sequence over its own partition and meets the others at a
//! barrier after each phase. Shared buffers are allocated before the
//! spawn and collected into the output image after the join.

use raster::{ContourAtlas, Image, Rgb};
use tracing::debug;

use crate::config::{RESCALE_HEIGHT, RESCALE_WIDTH, STEP};
use crate::error::{PipelineError, PipelineResult};
use crate::grid::{self, Grid};
use crate::march;
use crate::partition::partition;
use crate::phase::{Phase, PhaseBarrier};
use crate::rescale::{needs_rescale, rescale_rows};
use crate::shared::SharedBuffer;

/// Per-worker handle on the run's shared state.
struct WorkerContext<'a> {
    id: usize,
    workers: usize,
    /// Source image; present only when the run downscales.
    source: Option<&'a Image>,
    scaled: &'a SharedBuffer<Rgb>,
    grid: &'a Grid,
    atlas: &'a ContourAtlas,
    phases: &'a PhaseBarrier,
}

/// Run the full pipeline over `image` with `workers` threads.
///
/// Returns the contour map: the (possibly downscaled) image with the
/// atlas tile of each cell's configuration composited over it. The
/// output is byte-identical for any worker count.
pub fn render_contour_map(
    image: Image,
    atlas: &ContourAtlas,
    workers: usize,
) -> PipelineResult<Image> {
    if workers == 0 {
        return Err(PipelineError::NoWorkers);
    }
    debug_assert_eq!(atlas.tile_size(), STEP);

    let rescale = needs_rescale(&image);
    debug!(
        width = image.width(),
        height = image.height(),
        workers,
        rescale,
        "starting contour pipeline"
    );

    // When no downscaling is needed the source buffer is moved into the
    // shared scaled buffer, so the marching phase composites in place.
    let (source, scaled) = if rescale {
        let dst = Image::new(RESCALE_WIDTH, RESCALE_HEIGHT, Rgb::BLACK)?;
        let buf = SharedBuffer::from_vec(RESCALE_WIDTH, RESCALE_HEIGHT, dst.into_raw());
        (Some(image), buf)
    } else {
        let (width, height) = (image.width(), image.height());
        (None, SharedBuffer::from_vec(width, height, image.into_raw()))
    };

    let grid = Grid::try_new(scaled.width(), scaled.height())?;
    let phases = PhaseBarrier::new(workers);

    std::thread::scope(|s| {
        for id in 0..workers {
            let ctx = WorkerContext {
                id,
                workers,
                source: source.as_ref(),
                scaled: &scaled,
                grid: &grid,
                atlas,
                phases: &phases,
            };
            s.spawn(move || run_worker(ctx));
        }
    });

    debug!(
        width = scaled.width(),
        height = scaled.height(),
        "contour pipeline complete"
    );

    let (width, height) = (scaled.width(), scaled.height());
    Ok(Image::from_raw(width, height, scaled.into_vec())?)
}

/// Phase sequence executed by every worker.
///
/// Each step derives this worker's partition, builds the matching write
/// view and calls the phase body; the barrier after each phase makes its
/// writes visible to all workers before the next phase reads them.
fn run_worker(ctx: WorkerContext<'_>) {
    let WorkerContext {
        id,
        workers,
        source,
        scaled,
        grid,
        atlas,
        phases,
    } = ctx;

    if let Some(src) = source {
        let rows = partition(scaled.height(), workers, id);
        let mut view = scaled.region(rows, 0..scaled.width());
        rescale_rows(src, &mut view, scaled.width(), scaled.height());
        phases.complete(Phase::Rescale);
    }

    // Interior samples: column band, all interior rows.
    let cols = partition(grid.interior_cols(), workers, id);
    let mut view = grid.region(0..grid.interior_rows(), cols);
    grid::sample_interior(scaled, &mut view);
    phases.complete(Phase::InteriorSamples);

    // Last grid column: row band of the boundary column.
    let rows = partition(grid.interior_rows(), workers, id);
    let mut view = grid.region(rows, grid.cols() - 1..grid.cols());
    grid::sample_edge_column(scaled, &mut view);
    phases.complete(Phase::EdgeColumnSamples);

    // Last grid row: column band of the boundary row.
    let cols = partition(grid.interior_cols(), workers, id);
    let mut view = grid.region(grid.rows() - 1..grid.rows(), cols);
    grid::sample_edge_row(scaled, &mut view);
    phases.complete(Phase::EdgeRowSamples);

    // March: cell-column band across all interior rows. The pixel region
    // is the matching vertical band; tiles cover it exactly.
    let cells = partition(grid.interior_cols(), workers, id);
    let mut view = scaled.region(
        0..grid.interior_rows() * STEP,
        cells.start * STEP..cells.end * STEP,
    );
    march::march_cells(grid, atlas, &mut view, 0..grid.interior_rows(), cells);
    phases.complete(Phase::March);
}
