//! Gradient definition: color ramps, edge assignment, and the per-pixel
//! position functions for linear, radial and conical fills.

use crate::color::Color;

use super::palette::Palette;
use super::params::LightOrigin;

/// Gradient stop definition: position (0.0-1.0) and color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub position: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(position: f32, color: Color) -> Self {
        Self { position, color }
    }
}

/// Ordered stop list mapping a gradient position to a color.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRamp {
    stops: Vec<GradientStop>,
}

impl ColorRamp {
    /// Build a ramp, clamping positions into `[0, 1]` and sorting them.
    pub fn new(stops: impl IntoIterator<Item = GradientStop>) -> Self {
        let mut stops: Vec<GradientStop> = stops
            .into_iter()
            .map(|s| GradientStop::new(s.position.clamp(0.0, 1.0), s.color))
            .collect();
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { stops }
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Copy of this ramp with the first stop moved to `position`.
    pub fn with_start(&self, position: f32) -> Self {
        let mut stops = self.stops.clone();
        if let Some(first) = stops.first_mut() {
            first.position = position;
        }
        Self::new(stops)
    }

    /// Interpolate straight RGBA at position `t`, padding past either end.
    pub fn sample(&self, t: f32) -> [f32; 4] {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return [0.0; 4],
        };
        if t <= first.position {
            return first.color.to_f32();
        }
        if t >= last.position {
            return last.color.to_f32();
        }

        for pair in self.stops.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if t > next.position {
                continue;
            }
            let span = next.position - prev.position;
            if span < 1e-6 {
                return next.color.to_f32();
            }
            let local_t = ((t - prev.position) / span).clamp(0.0, 1.0);
            let a = prev.color.to_f32();
            let b = next.color.to_f32();
            return [
                a[0] + (b[0] - a[0]) * local_t,
                a[1] + (b[1] - a[1]) * local_t,
                a[2] + (b[2] - a[2]) * local_t,
                a[3] + (b[3] - a[3]) * local_t,
            ];
        }
        last.color.to_f32()
    }
}

/// The three ramps every other gradient is built from.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSet {
    pub light_side: ColorRamp,
    pub shadow_side: ColorRamp,
    /// Angular ramp blending shadow into the light side around the two
    /// corners diagonal to the light.
    pub corner: ColorRamp,
}

impl GradientSet {
    pub fn define(palette: &Palette) -> Self {
        Self {
            light_side: ColorRamp::new([
                GradientStop::new(0.0, palette.light_start),
                GradientStop::new(1.0, palette.light_stop),
            ]),
            shadow_side: ColorRamp::new([
                GradientStop::new(0.0, palette.shadow_start),
                GradientStop::new(1.0, palette.shadow_stop),
            ]),
            corner: ColorRamp::new([
                GradientStop::new(0.0, palette.shadow_start),
                GradientStop::new(0.25, palette.shadow_stop),
                GradientStop::new(0.75, palette.shadow_stop),
                GradientStop::new(1.0, palette.shadow_start),
            ]),
        }
    }

    /// Light and shadow ramps for the radial corner fills.
    ///
    /// A corner radius spans `distance + clip_radius`, so the fade starts at
    /// `clip_radius / (distance + clip_radius)`. This keeps a solid band
    /// under the rounded notch and matches the edge ramps pixel for pixel.
    pub fn corner_side_ramps(&self, distance: u32, clip_radius: u32) -> (ColorRamp, ColorRamp) {
        if clip_radius == 0 {
            return (self.light_side.clone(), self.shadow_side.clone());
        }
        let start = clip_radius as f32 / (distance + clip_radius) as f32;
        (self.light_side.with_start(start), self.shadow_side.with_start(start))
    }
}

/// Side of the element bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Left = 0,
    Top = 1,
    Right = 2,
    Bottom = 3,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom];
}

/// Which side ramp an edge uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Light,
    Shadow,
}

/// Edge tones (left, top, right, bottom) indexed by light origin.
const EDGE_TONES: [[Tone; 4]; 4] = [
    [Tone::Light, Tone::Light, Tone::Shadow, Tone::Shadow],
    [Tone::Shadow, Tone::Light, Tone::Light, Tone::Shadow],
    [Tone::Shadow, Tone::Shadow, Tone::Light, Tone::Light],
    [Tone::Light, Tone::Shadow, Tone::Shadow, Tone::Light],
];

pub fn edge_tone(origin: LightOrigin, edge: Edge) -> Tone {
    EDGE_TONES[origin.corner_index()][edge as usize]
}

/// Linear ramps for the four edge bands.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeGradients {
    ramps: [ColorRamp; 4],
}

impl EdgeGradients {
    pub fn assign(set: &GradientSet, origin: LightOrigin) -> Self {
        let ramps = Edge::ALL.map(|edge| match edge_tone(origin, edge) {
            Tone::Light => set.light_side.clone(),
            Tone::Shadow => set.shadow_side.clone(),
        });
        Self { ramps }
    }

    pub fn ramp(&self, edge: Edge) -> &ColorRamp {
        &self.ramps[edge as usize]
    }
}

/// Position along a linear band: 0 at the element edge, 1 at `extent`.
#[inline]
pub fn linear_t(offset: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 1.0;
    }
    offset / extent
}

/// Position in a radial fill centered at `(cx, cy)`.
#[inline]
pub fn radial_t(px: f32, py: f32, cx: f32, cy: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 1.0;
    }
    ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt() / radius
}

/// Position in a conical fill centered at `(cx, cy)`.
///
/// Angles run counter-clockwise from 3 o'clock as seen on screen (y grows
/// downward in pixel space), starting at `start_degrees`.
#[inline]
pub fn conical_t(px: f32, py: f32, cx: f32, cy: f32, start_degrees: f32) -> f32 {
    let angle = (cy - py).atan2(px - cx).to_degrees();
    (angle - start_degrees).rem_euclid(360.0) / 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> GradientSet {
        GradientSet::define(&Palette::derive(Color::rgb(240, 240, 240)))
    }

    #[test]
    fn test_sample_endpoints_and_middle() {
        let ramp = set().light_side;
        assert_eq!(ramp.sample(-1.0)[3], 1.0);
        assert_eq!(ramp.sample(2.0)[3], 0.0);
        assert!((ramp.sample(0.5)[3] - 0.5).abs() < 1e-6);
        // Fading never changes the color, only alpha
        assert_eq!(ramp.sample(0.5)[0], 1.0);
    }

    #[test]
    fn test_corner_ramp_is_symmetric() {
        let ramp = set().corner;
        assert_eq!(ramp.stops().len(), 4);
        for t in [0.05, 0.1, 0.2, 0.3] {
            let a = ramp.sample(t);
            let b = ramp.sample(1.0 - t);
            assert!((a[3] - b[3]).abs() < 1e-5);
        }
        assert_eq!(ramp.sample(0.5)[3], 0.0);
    }

    #[test]
    fn test_corner_side_ramps_shift_start() {
        let set = set();
        let (light, shadow) = set.corner_side_ramps(4, 4);
        assert_eq!(light.stops()[0].position, 0.5);
        assert_eq!(shadow.stops()[0].position, 0.5);
        assert_eq!(light.sample(0.4)[3], 1.0);

        let (light, _) = set.corner_side_ramps(4, 0);
        assert_eq!(light, set.light_side);
    }

    #[test]
    fn test_edge_assignment_top_left() {
        let set = set();
        let edges = EdgeGradients::assign(&set, LightOrigin::TopLeft);
        assert_eq!(edges.ramp(Edge::Left), &set.light_side);
        assert_eq!(edges.ramp(Edge::Top), &set.light_side);
        assert_eq!(edges.ramp(Edge::Right), &set.shadow_side);
        assert_eq!(edges.ramp(Edge::Bottom), &set.shadow_side);
    }

    #[test]
    fn test_edge_tones_rotate_with_origin() {
        // Each origin lights exactly the two edges meeting at its corner
        assert_eq!(edge_tone(LightOrigin::TopRight, Edge::Top), Tone::Light);
        assert_eq!(edge_tone(LightOrigin::TopRight, Edge::Right), Tone::Light);
        assert_eq!(edge_tone(LightOrigin::BottomRight, Edge::Bottom), Tone::Light);
        assert_eq!(edge_tone(LightOrigin::BottomLeft, Edge::Left), Tone::Light);
        for origin in LightOrigin::ALL {
            let shift = origin.corner_index();
            for edge in Edge::ALL {
                let canonical = EDGE_TONES[0][(edge as usize + 4 - shift) % 4];
                assert_eq!(edge_tone(origin, edge), canonical);
            }
        }
    }

    #[test]
    fn test_conical_directions() {
        // Right of center is angle 0, straight up is 90
        assert!(conical_t(10.0, 0.0, 0.0, 0.0, 0.0).abs() < 1e-6);
        assert!((conical_t(0.0, -10.0, 0.0, 0.0, 0.0) - 0.25).abs() < 1e-6);
        // Left of center with the sweep starting straight down
        assert!((conical_t(-10.0, 0.0, 0.0, 0.0, 270.0) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_radial_and_linear() {
        assert!((radial_t(3.0, 4.0, 0.0, 0.0, 10.0) - 0.5).abs() < 1e-6);
        assert_eq!(linear_t(2.0, 4.0), 0.5);
        assert_eq!(linear_t(1.0, 0.0), 1.0);
    }
}
