//! Tests for contour atlas loading and validation.

use std::path::Path;

use raster::{write_ppm, ContourAtlas, Image, RasterError, Rgb, CONTOUR_CONFIG_COUNT};

const TILE: usize = 8;

/// Write a full set of solid-color tiles into `dir`, one per code.
fn write_tiles(dir: &Path, tile: usize) {
    for code in 0..CONTOUR_CONFIG_COUNT {
        let color = Rgb::new((code * 16) as u8, 0, 255 - (code * 16) as u8);
        let img = Image::new(tile, tile, color).unwrap();
        write_ppm(&img, &dir.join(format!("{code}.ppm"))).unwrap();
    }
}

// ============================================================================
// Happy path
// ============================================================================

#[test]
fn test_load_full_atlas() {
    let dir = tempfile::tempdir().unwrap();
    write_tiles(dir.path(), TILE);

    let atlas = ContourAtlas::load(dir.path(), TILE).unwrap();
    assert_eq!(atlas.tile_size(), TILE);

    for code in 0..CONTOUR_CONFIG_COUNT as u8 {
        let tile = atlas.tile(code);
        assert_eq!(tile.width(), TILE);
        assert_eq!(tile.height(), TILE);
        assert_eq!(tile.pixel(0, 0).r, code * 16);
    }
}

// ============================================================================
// Validation failures
// ============================================================================

#[test]
fn test_load_missing_tile() {
    let dir = tempfile::tempdir().unwrap();
    write_tiles(dir.path(), TILE);
    std::fs::remove_file(dir.path().join("7.ppm")).unwrap();

    let err = ContourAtlas::load(dir.path(), TILE).unwrap_err();
    assert!(matches!(err, RasterError::Atlas(_)));
    assert!(err.to_string().contains("7.ppm"));
}

#[test]
fn test_load_rejects_wrong_tile_size() {
    let dir = tempfile::tempdir().unwrap();
    write_tiles(dir.path(), TILE);
    // Overwrite one tile with mismatched dimensions.
    let odd = Image::new(TILE + 1, TILE + 1, Rgb::BLACK).unwrap();
    write_ppm(&odd, &dir.path().join("3.ppm")).unwrap();

    let err = ContourAtlas::load(dir.path(), TILE).unwrap_err();
    assert!(matches!(err, RasterError::Atlas(_)));
}

#[test]
fn test_from_tiles_rejects_wrong_count() {
    let tiles = vec![Image::new(TILE, TILE, Rgb::BLACK).unwrap(); 15];
    let err = ContourAtlas::from_tiles(tiles, TILE).unwrap_err();
    assert!(matches!(err, RasterError::Atlas(_)));
}

#[test]
fn test_from_tiles_rejects_non_square() {
    let mut tiles = vec![Image::new(TILE, TILE, Rgb::BLACK).unwrap(); 15];
    tiles.push(Image::new(TILE, TILE - 1, Rgb::BLACK).unwrap());
    let err = ContourAtlas::from_tiles(tiles, TILE).unwrap_err();
    assert!(matches!(err, RasterError::Atlas(_)));
}
