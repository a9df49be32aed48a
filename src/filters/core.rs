//! Core pixel utilities shared by the compositing stages.
//!
//! This module provides:
//! - Porter-Duff "over" and "atop" blending on straight-alpha RGBA
//! - Anti-aliased coverage for discs and rounded rectangles
//! - Channel normalization of 1/3/4 channel inputs to RGBA

use ndarray::{Array3, ArrayView3};

use crate::error::{Error, Result};

/// Blend color onto existing pixel using alpha.
///
/// Uses Porter-Duff "over" compositing.
#[inline]
pub fn blend_over_f32(
    dst: &mut [f32; 4],
    src_r: f32,
    src_g: f32,
    src_b: f32,
    src_a: f32,
) {
    if src_a <= 0.0 {
        return;
    }
    if src_a >= 1.0 {
        dst[0] = src_r;
        dst[1] = src_g;
        dst[2] = src_b;
        dst[3] = 1.0;
        return;
    }

    let out_a = src_a + dst[3] * (1.0 - src_a);

    if out_a > 0.0 {
        dst[0] = (src_r * src_a + dst[0] * dst[3] * (1.0 - src_a)) / out_a;
        dst[1] = (src_g * src_a + dst[1] * dst[3] * (1.0 - src_a)) / out_a;
        dst[2] = (src_b * src_a + dst[2] * dst[3] * (1.0 - src_a)) / out_a;
        dst[3] = out_a;
    }
}

/// Blend color onto existing pixel using Porter-Duff "atop".
///
/// The destination alpha is kept; the source only tints pixels the
/// destination already covers.
#[inline]
pub fn blend_atop_f32(
    dst: &mut [f32; 4],
    src_r: f32,
    src_g: f32,
    src_b: f32,
    src_a: f32,
) {
    if src_a <= 0.0 || dst[3] <= 0.0 {
        return;
    }
    let src_a = src_a.min(1.0);
    dst[0] = src_r * src_a + dst[0] * (1.0 - src_a);
    dst[1] = src_g * src_a + dst[1] * (1.0 - src_a);
    dst[2] = src_b * src_a + dst[2] * (1.0 - src_a);
}

/// Fraction of the pixel centered at `(px, py)` that lies outside a disc.
///
/// One pixel wide linear ramp across the circle boundary.
#[inline]
pub fn outside_disc_coverage(px: f32, py: f32, cx: f32, cy: f32, radius: f32) -> f32 {
    let dist = ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt();
    (dist - radius + 0.5).clamp(0.0, 1.0)
}

/// Fraction of the pixel centered at `(px, py)` inside a rounded rectangle.
///
/// The radius is clamped to half the smaller side.
#[inline]
pub fn rounded_rect_coverage(
    px: f32,
    py: f32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    radius: f32,
) -> f32 {
    let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);

    // Signed distance to the rect shrunk by the radius (negative inside)
    let qx = (x + r - px).max(px - (x + width - r));
    let qy = (y + r - py).max(py - (y + height - r));

    let outside = (qx.max(0.0) * qx.max(0.0) + qy.max(0.0) * qy.max(0.0)).sqrt();
    let inside = qx.max(qy).min(0.0);
    let sdf = outside + inside - r;

    (0.5 - sdf).clamp(0.0, 1.0)
}

/// Normalize a 1, 3, or 4 channel image to RGBA.
///
/// Grayscale and RGB inputs are treated as fully opaque.
pub fn to_rgba_f32(input: ArrayView3<f32>) -> Result<Array3<f32>> {
    let (height, width, channels) = input.dim();
    if channels == 4 {
        return Ok(input.to_owned());
    }
    if channels != 1 && channels != 3 {
        return Err(Error::InvalidArgument(format!(
            "expected 1, 3 or 4 channels, got {channels}"
        )));
    }

    let mut output = Array3::<f32>::zeros((height, width, 4));
    for y in 0..height {
        for x in 0..width {
            if channels == 1 {
                let v = input[[y, x, 0]];
                output[[y, x, 0]] = v;
                output[[y, x, 1]] = v;
                output[[y, x, 2]] = v;
            } else {
                output[[y, x, 0]] = input[[y, x, 0]];
                output[[y, x, 1]] = input[[y, x, 1]];
                output[[y, x, 2]] = input[[y, x, 2]];
            }
            output[[y, x, 3]] = 1.0;
        }
    }
    Ok(output)
}

/// Convert u8 image (0-255) to f32 (0.0-1.0)
pub fn u8_to_f32(input: ArrayView3<u8>) -> Array3<f32> {
    input.mapv(|v| v as f32 / 255.0)
}

/// Convert f32 image (0.0-1.0) to u8 (0-255)
pub fn f32_to_u8(input: ArrayView3<f32>) -> Array3<u8> {
    input.mapv(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_over_onto_transparent() {
        let mut dst = [0.0; 4];
        blend_over_f32(&mut dst, 0.2, 0.4, 0.6, 0.5);
        assert!((dst[0] - 0.2).abs() < 1e-6);
        assert!((dst[3] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_blend_over_opaque_replaces() {
        let mut dst = [0.1, 0.1, 0.1, 0.3];
        blend_over_f32(&mut dst, 0.9, 0.8, 0.7, 1.0);
        assert_eq!(dst, [0.9, 0.8, 0.7, 1.0]);
    }

    #[test]
    fn test_blend_atop_keeps_alpha() {
        let mut dst = [1.0, 1.0, 1.0, 0.25];
        blend_atop_f32(&mut dst, 0.0, 0.0, 0.0, 0.5);
        assert!((dst[0] - 0.5).abs() < 1e-6);
        assert_eq!(dst[3], 0.25);
    }

    #[test]
    fn test_blend_atop_ignores_empty_destination() {
        let mut dst = [0.0; 4];
        blend_atop_f32(&mut dst, 1.0, 1.0, 1.0, 1.0);
        assert_eq!(dst, [0.0; 4]);
    }

    #[test]
    fn test_disc_coverage() {
        assert_eq!(outside_disc_coverage(0.5, 0.5, 0.0, 0.0, 4.0), 0.0);
        assert_eq!(outside_disc_coverage(10.5, 0.5, 0.0, 0.0, 4.0), 1.0);
    }

    #[test]
    fn test_rounded_rect_coverage() {
        // Center and straight edges are fully covered
        assert_eq!(rounded_rect_coverage(5.5, 5.5, 0.0, 0.0, 10.0, 10.0, 3.0), 1.0);
        assert_eq!(rounded_rect_coverage(0.5, 5.5, 0.0, 0.0, 10.0, 10.0, 3.0), 1.0);
        // Extreme corner pixel is cut away
        assert_eq!(rounded_rect_coverage(0.5, 0.5, 0.0, 0.0, 10.0, 10.0, 3.0), 0.0);
        // Outside the rect
        assert_eq!(rounded_rect_coverage(11.5, 5.5, 0.0, 0.0, 10.0, 10.0, 3.0), 0.0);
        // Zero radius is a plain rect
        assert_eq!(rounded_rect_coverage(0.5, 0.5, 0.0, 0.0, 10.0, 10.0, 0.0), 1.0);
    }

    #[test]
    fn test_to_rgba_channels() {
        let gray = Array3::<f32>::from_elem((2, 2, 1), 0.5);
        let rgba = to_rgba_f32(gray.view()).unwrap();
        assert_eq!(rgba.dim(), (2, 2, 4));
        assert_eq!(rgba[[1, 1, 2]], 0.5);
        assert_eq!(rgba[[1, 1, 3]], 1.0);

        let bad = Array3::<f32>::zeros((2, 2, 2));
        assert!(matches!(to_rgba_f32(bad.view()), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_u8_roundtrip() {
        let img = Array3::<u8>::from_elem((1, 1, 4), 200);
        assert_eq!(f32_to_u8(u8_to_f32(img.view()).view()), img);
    }
}
