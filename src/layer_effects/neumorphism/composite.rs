//! Composite & clip: paint edge bands, corner bitmaps and the element.

use ndarray::{Array3, ArrayView3};

use crate::error::{Error, Result};
use crate::filters::core::{blend_over_f32, rounded_rect_coverage};
use crate::geometry::IntRect;

use super::corners::CornerBitmaps;
use super::gradient::{linear_t, Edge, EdgeGradients};

/// RGBA paint surface positioned in device space.
///
/// `pixels` is `(height, width, 4)` straight RGBA; pixel `[0, 0]` sits at
/// device `(origin_x, origin_y)`. Painting outside the surface is dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    pixels: Array3<f32>,
    origin_x: i32,
    origin_y: i32,
}

impl Canvas {
    /// Transparent canvas covering `bounds`.
    pub fn new(bounds: IntRect) -> Self {
        let width = bounds.width.max(0) as usize;
        let height = bounds.height.max(0) as usize;
        Self {
            pixels: Array3::zeros((height, width, 4)),
            origin_x: bounds.x,
            origin_y: bounds.y,
        }
    }

    /// Wrap existing RGBA pixels, e.g. a host's background layer.
    pub fn from_pixels(pixels: Array3<f32>, origin_x: i32, origin_y: i32) -> Result<Self> {
        let channels = pixels.dim().2;
        if channels != 4 {
            return Err(Error::InvalidArgument(format!(
                "canvas needs 4 channels, got {channels}"
            )));
        }
        Ok(Self { pixels, origin_x, origin_y })
    }

    pub fn bounds(&self) -> IntRect {
        let (height, width, _) = self.pixels.dim();
        IntRect::new(self.origin_x, self.origin_y, width as i32, height as i32)
    }

    pub fn pixels(&self) -> &Array3<f32> {
        &self.pixels
    }

    pub fn into_pixels(self) -> Array3<f32> {
        self.pixels
    }

    /// Pixel at device coordinates, `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[f32; 4]> {
        let (cx, cy) = self.local(x, y)?;
        Some([
            self.pixels[[cy, cx, 0]],
            self.pixels[[cy, cx, 1]],
            self.pixels[[cy, cx, 2]],
            self.pixels[[cy, cx, 3]],
        ])
    }

    fn local(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let (height, width, _) = self.pixels.dim();
        let cx = usize::try_from(x - self.origin_x).ok()?;
        let cy = usize::try_from(y - self.origin_y).ok()?;
        (cx < width && cy < height).then_some((cx, cy))
    }

    /// Source-over one straight RGBA color at device coordinates.
    fn blend(&mut self, x: i32, y: i32, src: [f32; 4]) {
        let Some((cx, cy)) = self.local(x, y) else {
            return;
        };
        let mut dst = [
            self.pixels[[cy, cx, 0]],
            self.pixels[[cy, cx, 1]],
            self.pixels[[cy, cx, 2]],
            self.pixels[[cy, cx, 3]],
        ];
        blend_over_f32(&mut dst, src[0], src[1], src[2], src[3]);
        for (c, v) in dst.into_iter().enumerate() {
            self.pixels[[cy, cx, c]] = v;
        }
    }

    /// Fill `rect` with a per-pixel paint function of device coordinates.
    pub fn fill_rect_with(&mut self, rect: IntRect, paint: impl Fn(i32, i32) -> [f32; 4]) {
        let Some(area) = rect.intersection(&self.bounds()) else {
            return;
        };
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.blend(x, y, paint(x, y));
            }
        }
    }

    /// Draw an RGBA image with its top-left pixel at device `(x, y)`,
    /// scaling each pixel's alpha by `mask(device_x, device_y)`.
    pub fn draw_image_masked(
        &mut self,
        x: i32,
        y: i32,
        image: ArrayView3<f32>,
        mask: impl Fn(i32, i32) -> f32,
    ) {
        let (height, width, _) = image.dim();
        let rect = IntRect::new(x, y, width as i32, height as i32);
        let Some(area) = rect.intersection(&self.bounds()) else {
            return;
        };
        for dy in area.y..area.bottom() {
            for dx in area.x..area.right() {
                let (ix, iy) = ((dx - x) as usize, (dy - y) as usize);
                let alpha = image[[iy, ix, 3]] * mask(dx, dy);
                if alpha <= 0.0 {
                    continue;
                }
                let src = [image[[iy, ix, 0]], image[[iy, ix, 1]], image[[iy, ix, 2]], alpha];
                self.blend(dx, dy, src);
            }
        }
    }

    pub fn draw_image(&mut self, x: i32, y: i32, image: ArrayView3<f32>) {
        self.draw_image_masked(x, y, image, |_, _| 1.0);
    }
}

/// Paint the four edge bands and four corners around `bounds`.
///
/// Bands run along each element edge, shortened by `clip_radius` at both
/// ends; the corner bitmaps fill the remaining squares.
///
/// # Arguments
/// * `canvas` - Target surface, in the same device space as `bounds`
/// * `bounds` - Element rectangle
/// * `distance` - Band depth in pixels (already floored to 1)
/// * `clip_radius` - Corner rounding, at most `distance`
/// * `edges` - Ramp per edge for the current light origin
/// * `corners` - Bitmaps of side `distance + clip_radius`
pub fn paint_shadow(
    canvas: &mut Canvas,
    bounds: IntRect,
    distance: u32,
    clip_radius: u32,
    edges: &EdgeGradients,
    corners: &CornerBitmaps,
) {
    let d = distance as i32;
    let c = clip_radius as i32;
    let extent = distance as f32;
    let (left, top) = (bounds.x, bounds.y);
    let (right, bottom) = (bounds.right(), bounds.bottom());

    let bands = [
        (Edge::Left, IntRect::new(left - d, top + c, d, bounds.height - 2 * c)),
        (Edge::Top, IntRect::new(left + c, top - d, bounds.width - 2 * c, d)),
        (Edge::Right, IntRect::new(right, top + c, d, bounds.height - 2 * c)),
        (Edge::Bottom, IntRect::new(left + c, bottom, bounds.width - 2 * c, d)),
    ];
    for (edge, rect) in bands {
        if rect.is_empty() {
            continue;
        }
        let ramp = edges.ramp(edge);
        // Offset of the pixel center from the element edge
        let offset = move |x: i32, y: i32| match edge {
            Edge::Left => left as f32 - (x as f32 + 0.5),
            Edge::Top => top as f32 - (y as f32 + 0.5),
            Edge::Right => x as f32 + 0.5 - right as f32,
            Edge::Bottom => y as f32 + 0.5 - bottom as f32,
        };
        canvas.fill_rect_with(rect, |x, y| ramp.sample(linear_t(offset(x, y), extent)));
    }

    canvas.draw_image(left - d, top - d, corners.top_left().view());
    canvas.draw_image(right - c, top - d, corners.top_right().view());
    canvas.draw_image(right - c, bottom - c, corners.bottom_right().view());
    canvas.draw_image(left - d, bottom - c, corners.bottom_left().view());
}

/// Draw the element's own pixels over the shadow, rounded by `clip_radius`.
///
/// # Arguments
/// * `canvas` - Target surface
/// * `element` - RGBA float pixels, same size as `bounds`
/// * `bounds` - Where the element sits on the canvas
/// * `clip_radius` - Corner radius; 0 draws the element unmasked
pub fn paint_element(
    canvas: &mut Canvas,
    element: ArrayView3<f32>,
    bounds: IntRect,
    clip_radius: u32,
) {
    if clip_radius == 0 {
        canvas.draw_image(bounds.x, bounds.y, element);
        return;
    }
    let radius = clip_radius as f32;
    let (x, y) = (bounds.x as f32, bounds.y as f32);
    let (width, height) = (bounds.width as f32, bounds.height as f32);
    canvas.draw_image_masked(bounds.x, bounds.y, element, |px, py| {
        rounded_rect_coverage(px as f32 + 0.5, py as f32 + 0.5, x, y, width, height, radius)
    });
}
