//! Exact quarter-turn rotation of RGBA buffers.
//!
//! All rotations are clockwise (CW) in image space (y pointing down):
//! - 90° CW: (x, y) -> (H - 1 - y, x)
//! - 180°: (x, y) -> (W - 1 - x, H - 1 - y)
//! - 270° CW (90° CCW): (x, y) -> (y, W - 1 - x)
//!
//! Quarter turns are pixel permutations, so rotating a rasterized corner is
//! lossless and needs no resampling.

use ndarray::{Array3, ArrayView3};

/// Rotate image 90 degrees clockwise.
///
/// # Returns
/// Rotated image (W, H, C) - note dimensions are swapped
pub fn rotate_90_cw_f32(image: ArrayView3<f32>) -> Array3<f32> {
    let (h, w, c) = image.dim();
    let mut result = Array3::<f32>::zeros((w, h, c));

    for y in 0..h {
        for x in 0..w {
            let new_y = x;
            let new_x = h - 1 - y;
            for ch in 0..c {
                result[[new_y, new_x, ch]] = image[[y, x, ch]];
            }
        }
    }

    result
}

/// Rotate image 180 degrees.
pub fn rotate_180_f32(image: ArrayView3<f32>) -> Array3<f32> {
    let (h, w, c) = image.dim();
    let mut result = Array3::<f32>::zeros((h, w, c));

    for y in 0..h {
        for x in 0..w {
            let new_y = h - 1 - y;
            let new_x = w - 1 - x;
            for ch in 0..c {
                result[[new_y, new_x, ch]] = image[[y, x, ch]];
            }
        }
    }

    result
}

/// Rotate image 270 degrees clockwise (90 degrees counter-clockwise).
pub fn rotate_270_cw_f32(image: ArrayView3<f32>) -> Array3<f32> {
    let (h, w, c) = image.dim();
    let mut result = Array3::<f32>::zeros((w, h, c));

    for y in 0..h {
        for x in 0..w {
            let new_y = w - 1 - x;
            let new_x = y;
            for ch in 0..c {
                result[[new_y, new_x, ch]] = image[[y, x, ch]];
            }
        }
    }

    result
}

/// Rotate clockwise by `turns` quarter turns (taken modulo 4).
pub fn rotate_quarter_turns_f32(image: ArrayView3<f32>, turns: usize) -> Array3<f32> {
    match turns % 4 {
        1 => rotate_90_cw_f32(image),
        2 => rotate_180_f32(image),
        3 => rotate_270_cw_f32(image),
        _ => image.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_90_cw_2x3() {
        // Pixel values encode (row, col) position
        let image = Array3::from_shape_vec((2, 3, 2), vec![
            0.0, 0.0,   0.0, 1.0,   0.0, 2.0,
            1.0, 0.0,   1.0, 1.0,   1.0, 2.0,
        ]).unwrap();

        let rotated = rotate_90_cw_f32(image.view());
        assert_eq!(rotated.shape(), &[3, 2, 2]);

        // Original (0,0) -> rotated (0, 1)
        assert_eq!(rotated[[0, 1, 0]], 0.0);
        assert_eq!(rotated[[0, 1, 1]], 0.0);
        // Original (0,2) -> rotated (2, 1)
        assert_eq!(rotated[[2, 1, 1]], 2.0);
        // Original (1,0) -> rotated (0, 0)
        assert_eq!(rotated[[0, 0, 0]], 1.0);
    }

    #[test]
    fn test_quarter_turns_compose() {
        let image = Array3::from_shape_vec((2, 3, 1), vec![
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
        ]).unwrap();

        let twice = rotate_90_cw_f32(rotate_90_cw_f32(image.view()).view());
        assert_eq!(twice, rotate_180_f32(image.view()));

        let thrice = rotate_90_cw_f32(twice.view());
        assert_eq!(thrice, rotate_270_cw_f32(image.view()));

        assert_eq!(rotate_quarter_turns_f32(image.view(), 4), image);
        assert_eq!(rotate_quarter_turns_f32(image.view(), 5), rotate_90_cw_f32(image.view()));
    }
}
