//! Bicubic downscaling of oversized source images.
//!
//! Sources wider or taller than the rescale bound are resampled to
//! exactly `RESCALE_WIDTH` x `RESCALE_HEIGHT` before grid sampling.
//! Each destination pixel interpolates a 4x4 source neighborhood with
//! the Catmull-Rom kernel; neighbor indices are clamped at the edges.

use raster::{Image, Rgb};

use crate::config::{RESCALE_HEIGHT, RESCALE_WIDTH};
use crate::shared::RegionMut;

/// True when either dimension exceeds the rescale bound.
pub fn needs_rescale(image: &Image) -> bool {
    image.width() > RESCALE_WIDTH || image.height() > RESCALE_HEIGHT
}

/// Catmull-Rom kernel weight (a = -0.5) at distance `t`.
fn cubic_weight(t: f32) -> f32 {
    let t = t.abs();
    if t <= 1.0 {
        ((1.5 * t - 2.5) * t) * t + 1.0
    } else if t < 2.0 {
        ((-0.5 * t + 2.5) * t - 4.0) * t + 2.0
    } else {
        0.0
    }
}

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

#[inline]
fn quantize(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Bicubic sample of `src` at normalized coordinates `(u, v)` in [0, 1].
///
/// `(0, 0)` maps to the top-left source pixel and `(1, 1)` to the
/// bottom-right one. Channels are rounded and clamped to 0-255.
pub fn sample_bicubic(src: &Image, u: f32, v: f32) -> Rgb {
    let x = u * (src.width() - 1) as f32;
    let y = v * (src.height() - 1) as f32;
    let fx = x - x.floor();
    let fy = y - y.floor();
    let x0 = x.floor() as isize;
    let y0 = y.floor() as isize;

    let mut acc = [0.0f32; 3];
    for n in -1..=2isize {
        let wy = cubic_weight(fy - n as f32);
        let row = clamp_index(y0 + n, src.height());
        for m in -1..=2isize {
            let w = wy * cubic_weight(fx - m as f32);
            let px = src.pixel(row, clamp_index(x0 + m, src.width()));
            acc[0] += w * px.r as f32;
            acc[1] += w * px.g as f32;
            acc[2] += w * px.b as f32;
        }
    }
    Rgb::new(quantize(acc[0]), quantize(acc[1]), quantize(acc[2]))
}

/// Fill the view's destination rows with bicubic samples of `src`.
///
/// `dst_width` and `dst_height` are the full destination dimensions; the
/// view covers the row band this worker owns.
pub fn rescale_rows(src: &Image, dst: &mut RegionMut<Rgb>, dst_width: usize, dst_height: usize) {
    let x_span = (dst_width - 1).max(1) as f32;
    let y_span = (dst_height - 1).max(1) as f32;
    for row in dst.rows() {
        let v = row as f32 / y_span;
        for col in dst.cols() {
            let u = col as f32 / x_span;
            dst.set(row, col, sample_bicubic(src, u, v));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::SharedBuffer;

    #[test]
    fn test_needs_rescale_boundary() {
        let fits = Image::new(RESCALE_WIDTH, RESCALE_HEIGHT, Rgb::WHITE).unwrap();
        assert!(!needs_rescale(&fits));

        let wide = Image::new(RESCALE_WIDTH + 1, 16, Rgb::WHITE).unwrap();
        assert!(needs_rescale(&wide));

        let tall = Image::new(16, RESCALE_HEIGHT + 1, Rgb::WHITE).unwrap();
        assert!(needs_rescale(&tall));
    }

    #[test]
    fn test_kernel_partition_of_unity() {
        // The four neighbor weights of any sample position sum to 1.
        for &fx in &[0.0f32, 0.1, 0.25, 0.5, 0.75, 0.99] {
            let sum: f32 = (-1..=2).map(|m| cubic_weight(fx - m as f32)).sum();
            assert!((sum - 1.0).abs() < 1e-5, "fx={fx} sum={sum}");
        }
    }

    #[test]
    fn test_constant_image_is_preserved() {
        let src = Image::new(100, 60, Rgb::new(37, 200, 250)).unwrap();
        for &(u, v) in &[(0.0, 0.0), (0.5, 0.5), (0.31, 0.77), (1.0, 1.0)] {
            assert_eq!(sample_bicubic(&src, u, v), Rgb::new(37, 200, 250));
        }
    }

    #[test]
    fn test_corners_map_exactly() {
        let mut src = Image::new(10, 10, Rgb::BLACK).unwrap();
        src.set_pixel(0, 0, Rgb::new(10, 20, 30));
        src.set_pixel(9, 9, Rgb::new(200, 100, 50));

        assert_eq!(sample_bicubic(&src, 0.0, 0.0), Rgb::new(10, 20, 30));
        assert_eq!(sample_bicubic(&src, 1.0, 1.0), Rgb::new(200, 100, 50));
    }

    #[test]
    fn test_rescale_rows_fills_band() {
        let src = Image::new(64, 64, Rgb::new(9, 9, 9)).unwrap();
        let dst = SharedBuffer::from_vec(16, 16, vec![Rgb::BLACK; 256]);

        let mut view = dst.region(4..8, 0..16);
        rescale_rows(&src, &mut view, 16, 16);

        assert_eq!(dst.get(4, 0), Rgb::new(9, 9, 9));
        assert_eq!(dst.get(7, 15), Rgb::new(9, 9, 9));
        // Rows outside the band stay untouched.
        assert_eq!(dst.get(3, 0), Rgb::BLACK);
        assert_eq!(dst.get(8, 0), Rgb::BLACK);
    }
}
