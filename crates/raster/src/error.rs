//! Error types for raster decoding, encoding and atlas loading.

use thiserror::Error;

/// Result type alias using RasterError.
pub type RasterResult<T> = Result<T, RasterError>;

/// Primary error type for raster operations.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("unable to allocate memory")]
    Alloc(#[from] std::collections::TryReserveError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid ppm data: {0}")]
    Format(String),

    #[error("pixel buffer length {len} does not match {width}x{height}")]
    BufferMismatch {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("contour atlas error: {0}")]
    Atlas(String),
}
