//! Parallel marching-squares contour extraction.
//!
//! The pipeline turns a raster image into a contour map in four steps,
//! all executed by a fixed pool of worker threads with a barrier between
//! steps:
//! 1. Oversized sources are downscaled to the rescale bound with bicubic
//!    interpolation.
//! 2. The (scaled) image is thresholded into a binary occupancy grid at
//!    fixed step intervals, boundary row/column sampled from edge pixels.
//! 3. Each 2x2 grid cell is classified into one of 16 configurations.
//! 4. The pre-rendered contour tile of that configuration is composited
//!    over the cell's pixel block.
//!
//! Work in every phase is partitioned into disjoint ranges, so workers
//! never contend on a cell; the barrier is the only synchronization
//! primitive. The output is byte-identical for any worker count.

pub mod config;
pub mod error;
pub mod grid;
pub mod march;
pub mod partition;
pub mod phase;
pub mod pipeline;
pub mod rescale;
pub mod shared;

pub use config::{LUMA_THRESHOLD, RESCALE_HEIGHT, RESCALE_WIDTH, STEP};
pub use error::{PipelineError, PipelineResult};
pub use pipeline::render_contour_map;
