//! Effect parameters and the light-origin corner.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::{Error, Result};

/// Bounding-box corner the light shines from.
///
/// The discriminant is the corner's rotational index: each step is a
/// clockwise quarter turn from `TopLeft`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LightOrigin {
    #[default]
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl LightOrigin {
    pub const ALL: [LightOrigin; 4] = [
        LightOrigin::TopLeft,
        LightOrigin::TopRight,
        LightOrigin::BottomRight,
        LightOrigin::BottomLeft,
    ];

    /// Number of clockwise quarter turns from `TopLeft`.
    pub const fn corner_index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: i64) -> Result<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| Error::InvalidArgument(format!("no light origin with index {index}")))
    }

    pub const fn name(self) -> &'static str {
        match self {
            LightOrigin::TopLeft => "top-left",
            LightOrigin::TopRight => "top-right",
            LightOrigin::BottomRight => "bottom-right",
            LightOrigin::BottomLeft => "bottom-left",
        }
    }
}

impl TryFrom<i32> for LightOrigin {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        Self::from_index(value as i64)
    }
}

impl FromStr for LightOrigin {
    type Err = Error;

    /// Accepts `top-left`, `top_left`, `TopLeft` and similar spellings.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "topleft" => Ok(LightOrigin::TopLeft),
            "topright" => Ok(LightOrigin::TopRight),
            "bottomright" => Ok(LightOrigin::BottomRight),
            "bottomleft" => Ok(LightOrigin::BottomLeft),
            _ => Err(Error::InvalidArgument(format!("unknown light origin {s:?}"))),
        }
    }
}

impl fmt::Display for LightOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete configuration of a neumorphism effect.
///
/// `distance` is the shadow extent in pixels and `clip_radius` the corner
/// rounding; `clip_radius <= distance` after [`EffectParameters::normalized`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EffectParameters {
    pub distance: u32,
    pub clip_radius: u32,
    pub color: Color,
    pub origin: LightOrigin,
}

impl Default for EffectParameters {
    fn default() -> Self {
        Self {
            distance: 4,
            clip_radius: 0,
            color: Color::default(),
            origin: LightOrigin::TopLeft,
        }
    }
}

impl EffectParameters {
    /// Clamp the clip radius into `[0, distance]`.
    pub fn normalized(self) -> Self {
        Self {
            clip_radius: self.clip_radius.min(self.distance),
            ..self
        }
    }

    /// Distance used for geometry. A zero distance still needs a one pixel
    /// band so the gradients have a non-degenerate extent.
    pub fn effective_distance(&self) -> u32 {
        self.distance.max(1)
    }

    /// Side length of each corner bitmap.
    pub fn corner_side(&self) -> usize {
        (self.effective_distance() + self.clip_radius) as usize
    }
}
