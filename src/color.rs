//! 8-bit RGBA color with lightness derivation.
//!
//! `lighter` and `darker` scale HSL lightness by a percentage factor, the
//! same way toolkit palettes derive bevel colors from a base color:
//! `lighter(150)` multiplies lightness by 1.5, `darker(200)` halves it.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::filters::color_science::{hsl_to_rgb, rgb_to_hsl};

/// Straight (non-premultiplied) RGBA color, 0-255 per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same RGB with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Lighter color: lightness multiplied by `factor / 100`.
    ///
    /// Factors below 100 are forwarded to [`Color::darker`] with the
    /// reciprocal factor; a factor of 0 leaves the color unchanged.
    pub fn lighter(self, factor: u32) -> Self {
        if factor == 0 || factor == 100 {
            return self;
        }
        if factor < 100 {
            return self.darker(10_000 / factor);
        }
        self.scale_lightness(factor as f32 / 100.0)
    }

    /// Darker color: lightness multiplied by `100 / factor`.
    pub fn darker(self, factor: u32) -> Self {
        if factor == 0 || factor == 100 {
            return self;
        }
        if factor < 100 {
            return self.lighter(10_000 / factor);
        }
        self.scale_lightness(100.0 / factor as f32)
    }

    fn scale_lightness(self, scale: f32) -> Self {
        let [r, g, b, _] = self.to_f32();
        let (h, s, l) = rgb_to_hsl(r, g, b);
        let (nr, ng, nb) = hsl_to_rgb(h, s, (l * scale).clamp(0.0, 1.0));
        Self {
            r: channel_to_u8(nr),
            g: channel_to_u8(ng),
            b: channel_to_u8(nb),
            a: self.a,
        }
    }

    /// Channels as floats in 0.0-1.0.
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(Error::InvalidArgument(format!("malformed color {hex:?}")));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidArgument(format!("malformed color {hex:?}")))
        };
        let a = if digits.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

/// Rounded conversion so lightness scaling of gray stays exact (204, not 203).
#[inline]
fn channel_to_u8(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Default for Color {
    /// Neutral window gray.
    fn default() -> Self {
        Self::rgb(0xef, 0xef, 0xef)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
