//! Compile-time tuning constants for the contour pipeline.

/// Pixel spacing between adjacent grid sample points, and the edge
/// length of every contour tile.
pub const STEP: usize = 8;

/// Mean channel value (0-255) above which a sample counts as background.
/// At or below it, the sample is "dark" and lies inside the contour.
pub const LUMA_THRESHOLD: u8 = 200;

/// Maximum width a source image may have before it is scaled down.
pub const RESCALE_WIDTH: usize = 2048;

/// Maximum height a source image may have before it is scaled down.
pub const RESCALE_HEIGHT: usize = 2048;
