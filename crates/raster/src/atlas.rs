//! On-disk atlas of pre-rendered contour tiles.
//!
//! The atlas maps each 4-bit cell configuration to the tile that is
//! composited for it: `<dir>/0.ppm` through `<dir>/15.ppm`. All tiles
//! must be square and share one edge length; downstream code relies on
//! that invariant without re-checking it.

use std::path::Path;

use tracing::debug;

use crate::error::{RasterError, RasterResult};
use crate::image::Image;
use crate::ppm::read_ppm;

/// Number of marching-squares cell configurations.
pub const CONTOUR_CONFIG_COUNT: usize = 16;

/// Directory the CLI loads tiles from, relative to the working directory.
pub const DEFAULT_ATLAS_DIR: &str = "contours";

/// The 16 contour tiles, indexed by configuration code.
#[derive(Debug, Clone)]
pub struct ContourAtlas {
    tiles: Vec<Image>,
    tile_size: usize,
}

impl ContourAtlas {
    /// Load `0.ppm` .. `15.ppm` from `dir` and validate that every tile
    /// is a `tile_size` x `tile_size` square.
    pub fn load(dir: &Path, tile_size: usize) -> RasterResult<Self> {
        let mut tiles = Vec::with_capacity(CONTOUR_CONFIG_COUNT);
        for code in 0..CONTOUR_CONFIG_COUNT {
            let path = dir.join(format!("{code}.ppm"));
            let tile = read_ppm(&path).map_err(|e| {
                RasterError::Atlas(format!("failed to load tile {}: {e}", path.display()))
            })?;
            tiles.push(tile);
        }
        debug!(dir = %dir.display(), tile_size, "loaded contour atlas");
        Self::from_tiles(tiles, tile_size)
    }

    /// Build an atlas from in-memory tiles, validating the shared shape.
    pub fn from_tiles(tiles: Vec<Image>, tile_size: usize) -> RasterResult<Self> {
        if tiles.len() != CONTOUR_CONFIG_COUNT {
            return Err(RasterError::Atlas(format!(
                "expected {CONTOUR_CONFIG_COUNT} tiles, found {}",
                tiles.len()
            )));
        }
        for (code, tile) in tiles.iter().enumerate() {
            if tile.width() != tile_size || tile.height() != tile_size {
                return Err(RasterError::Atlas(format!(
                    "tile {code} is {}x{}, expected {tile_size}x{tile_size}",
                    tile.width(),
                    tile.height()
                )));
            }
        }
        Ok(Self { tiles, tile_size })
    }

    /// Tile for the given configuration code (0-15).
    #[inline]
    pub fn tile(&self, code: u8) -> &Image {
        &self.tiles[code as usize]
    }

    /// Edge length shared by every tile.
    pub fn tile_size(&self) -> usize {
        self.tile_size
    }
}
