//! Corner rasterization.
//!
//! The four corners are first drawn as if the light came from the top-left:
//!
//! | Corner       | Fill                                               |
//! |--------------|----------------------------------------------------|
//! | top-left     | radial, light ramp                                 |
//! | top-right    | radial light ramp, then conical shadow ramp (atop) |
//! | bottom-right | radial, shadow ramp                                |
//! | bottom-left  | radial light ramp, then conical shadow ramp (atop) |
//!
//! Each radial fill is centered on the bitmap corner that touches the
//! element, so the fade runs outward. The conical pass only tints pixels the
//! radial pass already covered, turning the light band into the shadow band
//! around the two corners diagonal to the light.
//!
//! For other light origins every canonical bitmap is rotated clockwise by a
//! quarter turn per corner step and moved to the slot it now belongs to.

use ndarray::Array3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::filters::core::{blend_atop_f32, blend_over_f32, outside_disc_coverage};
use crate::filters::rotate::rotate_quarter_turns_f32;

use super::gradient::{conical_t, radial_t, ColorRamp, GradientSet};
use super::params::{EffectParameters, LightOrigin};

/// Conical sweep start for the canonical top-right corner. Just short of a
/// full turn so the shadow end of the ramp lands on the horizontal axis
/// without wrapping.
const TOP_RIGHT_SWEEP_START: f32 = 359.9;
const BOTTOM_LEFT_SWEEP_START: f32 = 270.0;

/// Canonical corner bitmap feeding each slot (top-left, top-right,
/// bottom-right, bottom-left), indexed by light origin.
const SLOT_SOURCES: [[usize; 4]; 4] = [
    [0, 1, 2, 3],
    [3, 0, 1, 2],
    [2, 3, 0, 1],
    [1, 2, 3, 0],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Canonical {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

const CANONICAL: [Canonical; 4] = [
    Canonical::TopLeft,
    Canonical::TopRight,
    Canonical::BottomRight,
    Canonical::BottomLeft,
];

/// The four rasterized corners, already oriented for the light origin.
///
/// Bitmaps are `(side, side, 4)` straight RGBA arrays.
#[derive(Clone, Debug, PartialEq)]
pub struct CornerBitmaps {
    side: usize,
    origin: LightOrigin,
    slots: [Array3<f32>; 4],
}

impl CornerBitmaps {
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn origin(&self) -> LightOrigin {
        self.origin
    }

    pub fn top_left(&self) -> &Array3<f32> {
        &self.slots[0]
    }

    pub fn top_right(&self) -> &Array3<f32> {
        &self.slots[1]
    }

    pub fn bottom_right(&self) -> &Array3<f32> {
        &self.slots[2]
    }

    pub fn bottom_left(&self) -> &Array3<f32> {
        &self.slots[3]
    }

    /// Bitmaps in slot order: top-left, top-right, bottom-right, bottom-left.
    pub fn slots(&self) -> &[Array3<f32>; 4] {
        &self.slots
    }
}

/// Rasterize all four corners for `params`.
///
/// # Arguments
/// * `set` - Ramps derived from the base color
/// * `params` - Normalized effect parameters; `distance` 0 paints a 1 pixel corner
///
/// # Returns
/// Bitmaps of side `max(distance, 1) + clip_radius`, each already rotated
/// for `params.origin` and stored in the slot it is drawn at.
pub fn rasterize(set: &GradientSet, params: &EffectParameters) -> CornerBitmaps {
    let distance = params.effective_distance();
    let clip_radius = params.clip_radius;
    let side = params.corner_side();
    let (light, shadow) = set.corner_side_ramps(distance, clip_radius);
    let shift = params.origin.corner_index();

    let paint_slot = |slot: usize| {
        let kind = CANONICAL[SLOT_SOURCES[shift][slot]];
        let bitmap = rasterize_canonical(kind, side, clip_radius, &light, &shadow, &set.corner);
        rotate_quarter_turns_f32(bitmap.view(), shift)
    };

    #[cfg(feature = "parallel")]
    let slots = {
        let mut slots: [Array3<f32>; 4] = Default::default();
        slots
            .par_iter_mut()
            .enumerate()
            .for_each(|(slot, bitmap)| *bitmap = paint_slot(slot));
        slots
    };
    #[cfg(not(feature = "parallel"))]
    let slots = [0usize, 1, 2, 3].map(paint_slot);

    CornerBitmaps {
        side,
        origin: params.origin,
        slots,
    }
}

fn rasterize_canonical(
    kind: Canonical,
    side: usize,
    clip_radius: u32,
    light: &ColorRamp,
    shadow: &ColorRamp,
    corner: &ColorRamp,
) -> Array3<f32> {
    let s = side as f32;
    let (cx, cy) = match kind {
        Canonical::TopLeft => (s, s),
        Canonical::TopRight => (0.0, s),
        Canonical::BottomRight => (0.0, 0.0),
        Canonical::BottomLeft => (s, 0.0),
    };
    let (radial, sweep_start) = match kind {
        Canonical::TopLeft => (light, None),
        Canonical::TopRight => (light, Some(TOP_RIGHT_SWEEP_START)),
        Canonical::BottomRight => (shadow, None),
        Canonical::BottomLeft => (light, Some(BOTTOM_LEFT_SWEEP_START)),
    };
    // Notch diameter is 2 * clip_radius - 1
    let notch = (clip_radius > 1).then(|| clip_radius as f32 - 0.5);

    let mut result = Array3::<f32>::zeros((side, side, 4));

    for y in 0..side {
        for x in 0..side {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let coverage = match notch {
                Some(radius) => outside_disc_coverage(px, py, cx, cy, radius),
                None => 1.0,
            };
            if coverage <= 0.0 {
                continue;
            }

            let mut pixel = [0.0f32; 4];
            let [r, g, b, a] = radial.sample(radial_t(px, py, cx, cy, s));
            blend_over_f32(&mut pixel, r, g, b, a);

            if let Some(start) = sweep_start {
                let [r, g, b, a] = corner.sample(conical_t(px, py, cx, cy, start));
                blend_atop_f32(&mut pixel, r, g, b, a);
            }

            pixel[3] *= coverage;
            for (c, v) in pixel.into_iter().enumerate() {
                result[[y, x, c]] = v;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::filters::rotate::rotate_90_cw_f32;
    use crate::layer_effects::neumorphism::palette::Palette;

    fn params(distance: u32, clip_radius: u32, origin: LightOrigin) -> EffectParameters {
        EffectParameters {
            distance,
            clip_radius,
            color: Color::rgb(240, 240, 240),
            origin,
        }
    }

    fn corners(p: &EffectParameters) -> CornerBitmaps {
        let set = GradientSet::define(&Palette::derive(p.color));
        rasterize(&set, p)
    }

    #[test]
    fn test_bitmap_side() {
        let c = corners(&params(6, 3, LightOrigin::TopLeft));
        assert_eq!(c.side(), 9);
        for bitmap in c.slots() {
            assert_eq!(bitmap.dim(), (9, 9, 4));
        }
    }

    #[test]
    fn test_zero_distance_still_one_pixel() {
        let c = corners(&params(0, 0, LightOrigin::TopLeft));
        assert_eq!(c.top_left().dim(), (1, 1, 4));
    }

    #[test]
    fn test_top_left_fades_outward() {
        let c = corners(&params(8, 0, LightOrigin::TopLeft));
        let tl = c.top_left();
        // Inner corner is opaque-ish highlight, outer corner is empty
        assert!(tl[[7, 7, 3]] > 0.8);
        assert_eq!(tl[[7, 7, 0]], 1.0);
        assert_eq!(tl[[0, 0, 3]], 0.0);
    }

    #[test]
    fn test_bottom_right_is_shadow() {
        let c = corners(&params(8, 0, LightOrigin::TopLeft));
        let br = c.bottom_right();
        assert!(br[[0, 0, 3]] > 0.8);
        assert!((br[[0, 0, 0]] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_diagonal_corner_blends_light_into_shadow() {
        let c = corners(&params(8, 0, LightOrigin::TopLeft));
        let tr = c.top_right();
        // Along the left column (next to the lit top edge) the corner is light,
        // along the bottom row (next to the shadowed right edge) it is shadow.
        let near_top_edge = tr[[4, 0, 0]];
        let near_right_edge = tr[[7, 4, 0]];
        assert!(near_top_edge > 0.97);
        assert!(near_right_edge < 0.85);
        // Conical pass never changes coverage
        let set = GradientSet::define(&Palette::derive(Color::rgb(240, 240, 240)));
        let alpha = set.light_side.sample(radial_t(4.5, 7.5, 0.0, 8.0, 8.0))[3];
        assert!((tr[[7, 4, 3]] - alpha).abs() < 1e-6);
    }

    #[test]
    fn test_clip_radius_carves_notch() {
        let c = corners(&params(6, 4, LightOrigin::TopLeft));
        let tl = c.top_left();
        // Pixel right at the inner corner is inside the notch
        assert_eq!(tl[[9, 9, 3]], 0.0);
        // Just outside the notch the band is close to solid
        assert!(tl[[9, 5, 3]] > 0.9);
        // The notch boundary is anti-aliased
        let edge = tl[[9, 6, 3]];
        assert!(edge > 0.3 && edge < 0.8);
    }

    #[test]
    fn test_clip_radius_one_has_no_notch() {
        let c = corners(&params(6, 1, LightOrigin::TopLeft));
        assert!(c.top_left()[[6, 6, 3]] > 0.9);
    }

    #[test]
    fn test_origin_rotates_and_reassigns() {
        let base = corners(&params(5, 2, LightOrigin::TopLeft));
        let turned = corners(&params(5, 2, LightOrigin::TopRight));
        // The top-left slot for a top-right light is the canonical
        // bottom-left corner turned a quarter clockwise.
        assert_eq!(turned.top_left(), &rotate_90_cw_f32(base.bottom_left().view()));
        assert_eq!(turned.top_right(), &rotate_90_cw_f32(base.top_left().view()));
        assert_eq!(turned.bottom_right(), &rotate_90_cw_f32(base.top_right().view()));
        assert_eq!(turned.bottom_left(), &rotate_90_cw_f32(base.bottom_right().view()));
    }

    #[test]
    fn test_every_slot_is_painted() {
        for origin in LightOrigin::ALL {
            let c = corners(&params(4, 2, origin));
            assert_eq!(c.origin(), origin);
            for bitmap in c.slots() {
                assert_eq!(bitmap.dim(), (6, 6, 4));
                assert!(bitmap.iter().skip(3).step_by(4).any(|&a| a > 0.5));
            }
        }
    }

    #[test]
    fn test_slot_sources_are_rotations() {
        for (shift, row) in SLOT_SOURCES.iter().enumerate() {
            for (slot, &source) in row.iter().enumerate() {
                assert_eq!(source, (slot + 4 - shift) % 4);
            }
        }
    }
}
