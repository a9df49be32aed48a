//! Neumorph
//!
//! Soft "neumorphic" shadows for rectangular elements: a light highlight on
//! the side facing a light-source corner, a darker shadow on the opposite
//! side, seamless blended corners and an optional clip radius.
//!
//! The effect renders into plain `ndarray` RGBA buffers, with Python
//! bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Element pixels may have 1, 3, or 4 channels:
//! - **Grayscale**: (height, width, 1) - single channel, opaque
//! - **RGB**: (height, width, 3) - 3 color channels, opaque
//! - **RGBA**: (height, width, 4) - 3 color channels + alpha
//!
//! Both bit depths are supported:
//! - `u8`: 8-bit per channel (0-255)
//! - `f32`: Float per channel (0.0-1.0)
//!
//! ## Usage
//!
//! ```
//! use ndarray::Array3;
//! use neumorph::{Color, EffectParameters, LightOrigin, NeumorphismEffect};
//!
//! let mut effect = NeumorphismEffect::new(EffectParameters {
//!     distance: 6,
//!     clip_radius: 3,
//!     color: Color::rgb(230, 230, 235),
//!     origin: LightOrigin::TopLeft,
//! });
//! effect.set_origin(LightOrigin::BottomRight);
//!
//! let button = Array3::<f32>::from_elem((24, 64, 4), 0.9);
//! let out = effect.render(button.view()).unwrap();
//! assert_eq!(out.image.dim(), (24 + 14, 64 + 14, 4));
//! ```

pub mod color;
pub mod error;
pub mod filters;
pub mod geometry;
pub mod layer_effects;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use color::Color;
pub use error::{Error, Result};
pub use geometry::IntRect;
pub use layer_effects::neumorphism::composite::Canvas;
pub use layer_effects::neumorphism::gradient::{ColorRamp, Edge, GradientStop};
pub use layer_effects::neumorphism::params::{EffectParameters, LightOrigin};
pub use layer_effects::neumorphism::{Composited, NeumorphismEffect, ParameterChange};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::color::Color;
    use crate::error::Error;
    use crate::geometry::IntRect;
    use crate::layer_effects::neumorphism::params::{EffectParameters, LightOrigin};
    use crate::layer_effects::neumorphism::NeumorphismEffect;

    impl From<Error> for PyErr {
        fn from(err: Error) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    /// Neumorphism shadow effect.
    ///
    /// Colors are (R, G, B, A) tuples 0-255; origins are corner names such
    /// as "top-left" or "bottom_right".
    #[pyclass(name = "NeumorphismEffect", unsendable)]
    pub struct PyNeumorphismEffect {
        inner: NeumorphismEffect,
    }

    #[pymethods]
    impl PyNeumorphismEffect {
        #[new]
        #[pyo3(signature = (
            distance=4,
            color=(239, 239, 239, 255),
            origin="top-left",
            clip_radius=0,
        ))]
        fn new(
            distance: i32,
            color: (u8, u8, u8, u8),
            origin: &str,
            clip_radius: i32,
        ) -> PyResult<Self> {
            let params = EffectParameters {
                distance: distance.max(0) as u32,
                clip_radius: clip_radius.max(0) as u32,
                color: Color::from(color),
                origin: origin.parse::<LightOrigin>()?,
            };
            Ok(Self { inner: NeumorphismEffect::new(params) })
        }

        fn color(&self) -> (u8, u8, u8, u8) {
            let c = self.inner.color();
            (c.r, c.g, c.b, c.a)
        }

        fn set_color(&mut self, color: (u8, u8, u8, u8)) -> bool {
            self.inner.set_color(Color::from(color))
        }

        fn distance(&self) -> u32 {
            self.inner.distance()
        }

        fn set_distance(&mut self, distance: i32) -> bool {
            self.inner.set_distance(distance)
        }

        fn origin(&self) -> &'static str {
            self.inner.origin().name()
        }

        fn set_origin(&mut self, origin: &str) -> PyResult<bool> {
            Ok(self.inner.set_origin(origin.parse::<LightOrigin>()?))
        }

        fn clip_radius(&self) -> u32 {
            self.inner.clip_radius()
        }

        fn set_clip_radius(&mut self, radius: i32) -> bool {
            self.inner.set_clip_radius(radius)
        }

        /// Expanded (x, y, width, height) the effect paints for an element.
        fn bounding_rect_for(
            &self,
            x: i32,
            y: i32,
            width: i32,
            height: i32,
        ) -> (i32, i32, i32, i32) {
            let r = self.inner.required_bounds(IntRect::new(x, y, width, height));
            (r.x, r.y, r.width, r.height)
        }

        /// Render an element (H, W, C) u8 image.
        ///
        /// Returns the composited RGBA image and its (x, y) offset relative
        /// to the element's top-left corner.
        fn render<'py>(
            &self,
            py: Python<'py>,
            image: PyReadonlyArray3<'py, u8>,
        ) -> PyResult<(Bound<'py, PyArray3<u8>>, (i32, i32))> {
            let (result, bounds) = self.inner.render_u8(image.as_array())?;
            Ok((result.into_pyarray(py), (bounds.x, bounds.y)))
        }

        /// Same as render but for f32 images (0.0-1.0 range).
        fn render_f32<'py>(
            &self,
            py: Python<'py>,
            image: PyReadonlyArray3<'py, f32>,
        ) -> PyResult<(Bound<'py, PyArray3<f32>>, (i32, i32))> {
            let out = self.inner.render(image.as_array())?;
            Ok((out.image.into_pyarray(py), (out.bounds.x, out.bounds.y)))
        }
    }

    /// Neumorph Rust extension module
    #[pymodule]
    pub fn neumorph(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_class::<PyNeumorphismEffect>()?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::neumorph;
