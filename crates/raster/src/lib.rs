//! Raster data model and file collaborators for the isomap workspace.
//!
//! Provides the shared image type plus the two on-disk collaborators of
//! the contour pipeline:
//! - PPM (binary P6) decoding and encoding
//! - the contour tile atlas, one pre-rendered tile per cell configuration

pub mod atlas;
pub mod error;
pub mod image;
pub mod ppm;

pub use atlas::{ContourAtlas, CONTOUR_CONFIG_COUNT, DEFAULT_ATLAS_DIR};
pub use error::{RasterError, RasterResult};
pub use image::{Image, Rgb};
pub use ppm::{read_ppm, write_ppm};
