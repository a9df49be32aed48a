//! Palette derivation: four working colors from one base color.

use crate::color::Color;

/// Lightness factor (percent) used for both the highlight and the shadow.
pub const LIGHTNESS_FACTOR: u32 = 125;

/// Highlight and shadow colors with their transparent fade targets.
///
/// Each `*_stop` color has the RGB of its `*_start` color and zero alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub light_start: Color,
    pub light_stop: Color,
    pub shadow_start: Color,
    pub shadow_stop: Color,
}

impl Palette {
    pub fn derive(base: Color) -> Self {
        let light_start = base.lighter(LIGHTNESS_FACTOR);
        let shadow_start = light_start.darker(LIGHTNESS_FACTOR);
        Self {
            light_start,
            light_stop: light_start.with_alpha(0),
            shadow_start,
            shadow_stop: shadow_start.with_alpha(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_gray_palette() {
        let p = Palette::derive(Color::rgb(240, 240, 240));
        assert_eq!(p.light_start, Color::rgb(255, 255, 255));
        assert_eq!(p.shadow_start, Color::rgb(204, 204, 204));
        assert!(p.shadow_start.r < 240);
    }

    #[test]
    fn test_stops_share_rgb_with_starts() {
        let p = Palette::derive(Color::rgba(30, 90, 160, 200));
        assert_eq!(p.light_stop, p.light_start.with_alpha(0));
        assert_eq!(p.shadow_stop, p.shadow_start.with_alpha(0));
        assert_eq!(p.light_start.a, 200);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let base = Color::rgb(12, 34, 56);
        assert_eq!(Palette::derive(base), Palette::derive(base));
    }
}
