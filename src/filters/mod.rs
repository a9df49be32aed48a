//! Pixel-level building blocks used by the layer effects.
//!
//! ## Supported Formats
//!
//! Buffers are `ndarray` arrays of shape (H, W, C):
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | Grayscale float | (H, W, 1) | f32 | Single luminance channel, 0.0-1.0 |
//! | RGB float | (H, W, 3) | f32 | Red, green, blue, 0.0-1.0 |
//! | RGBA float | (H, W, 4) | f32 | RGB + straight alpha, 0.0-1.0 |
//! | RGBA8 | (H, W, 4) | u8 | Boundary format, converted on entry/exit |
//!
//! Compositing always happens in RGBA float; 1 and 3 channel inputs are
//! widened to opaque RGBA first.

pub mod color_science;
pub mod core;
pub mod rotate;
