//! WebAssembly exports for the neumorphism effect.
//!
//! These functions are exposed to JavaScript via wasm-bindgen and work on
//! flat RGBA byte buffers (length = width * height * 4).

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::color::Color;
use crate::layer_effects::neumorphism::params::{EffectParameters, LightOrigin};
use crate::layer_effects::neumorphism::NeumorphismEffect;

/// Pixels added on each side of the element by [`neumorphism_rgba_wasm`].
#[wasm_bindgen]
pub fn neumorphism_padding_wasm(distance: i32) -> u32 {
    distance.max(1) as u32 + 1
}

/// Render an element with a neumorphism shadow.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Element width in pixels
/// * `height` - Element height in pixels
/// * `distance` - Shadow extent in pixels
/// * `clip_radius` - Corner rounding, clamped to `distance`
/// * `color` - Base color as [r, g, b] or [r, g, b, a]
/// * `origin` - Light corner: "top-left", "top-right", "bottom-right", "bottom-left"
///
/// # Returns
/// Flat RGBA bytes of the expanded image; each side grows by
/// `neumorphism_padding_wasm(distance)` pixels.
#[wasm_bindgen]
pub fn neumorphism_rgba_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    distance: i32,
    clip_radius: i32,
    color: &[u8],
    origin: &str,
) -> Result<Vec<u8>, JsValue> {
    let input = Array3::from_shape_vec((height, width, 4), data.to_vec())
        .map_err(|e| JsValue::from_str(&format!("Invalid dimensions: {e}")))?;

    let color = match *color {
        [r, g, b] => Color::rgb(r, g, b),
        [r, g, b, a] => Color::rgba(r, g, b, a),
        _ => return Err(JsValue::from_str("color must have 3 or 4 components")),
    };
    let origin = origin
        .parse::<LightOrigin>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let effect = NeumorphismEffect::new(EffectParameters {
        distance: distance.max(0) as u32,
        clip_radius: clip_radius.max(0) as u32,
        color,
        origin,
    });
    let (result, _) = effect
        .render_u8(input.view())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(result.into_raw_vec_and_offset().0)
}
