//! Error types for the contour pipeline.

use thiserror::Error;

/// Result type alias using PipelineError.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Primary error type for pipeline operations.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("unable to allocate memory")]
    Alloc(#[from] std::collections::TryReserveError),

    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error(transparent)]
    Raster(#[from] raster::RasterError),
}
