//! Deterministic generators for test images and atlases.

use raster::{ContourAtlas, Image, Rgb, CONTOUR_CONFIG_COUNT};

/// Image filled with a single color.
pub fn solid_image(width: usize, height: usize, color: Rgb) -> Image {
    Image::new(width, height, color).expect("test image allocation")
}

/// Diagonal brightness ramp covering the full 0-255 range, so grids
/// sampled from it contain both dark and bright cells.
pub fn gradient_image(width: usize, height: usize) -> Image {
    let mut img = Image::new(width, height, Rgb::BLACK).expect("test image allocation");
    let span = (width + height - 2).max(1);
    for row in 0..height {
        for col in 0..width {
            let level = ((row + col) * 255 / span) as u8;
            img.set_pixel(row, col, Rgb::new(level, level, level));
        }
    }
    img
}

/// The color of the synthetic tile for `code` (distinct per code).
pub fn tile_color(code: u8) -> Rgb {
    Rgb::new(code * 16, 100, 255 - code * 16)
}

/// Atlas of 16 solid-color tiles, one distinguishable color per
/// configuration code, so tests can tell which tile was composited where.
pub fn coded_atlas(tile_size: usize) -> ContourAtlas {
    let tiles = (0..CONTOUR_CONFIG_COUNT)
        .map(|code| {
            Image::new(tile_size, tile_size, tile_color(code as u8)).expect("tile allocation")
        })
        .collect();
    ContourAtlas::from_tiles(tiles, tile_size).expect("synthetic atlas")
}
