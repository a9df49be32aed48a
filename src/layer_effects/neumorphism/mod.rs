//! Neumorphism effect: a soft dual-tone shadow around a rectangular element.
//!
//! The side facing the light origin gets a highlight derived from the base
//! color, the opposite side a darker shadow, and the corners blend between
//! the two without seams. An optional clip radius rounds both the shadow's
//! inner edge and the element's own corners.
//!
//! ## Pipeline
//!
//! 1. [`palette`]: four working colors from the base color
//! 2. [`gradient`]: side, corner and edge ramps
//! 3. [`corners`]: four corner bitmaps, oriented for the light origin
//! 4. [`composite`]: edge bands + corners + (rounded) element
//!
//! Stages 1-3 run eagerly whenever a parameter changes; rendering only reads
//! the prepared state. The corner bitmaps live behind an [`Arc`] that is
//! swapped as a whole on regeneration, so a snapshot taken with
//! [`NeumorphismEffect::corners`] is never observed half-updated.

pub mod composite;
pub mod corners;
pub mod gradient;
pub mod palette;
pub mod params;

use std::fmt;
use std::sync::Arc;

use ndarray::{Array3, ArrayView3};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::filters::core::{f32_to_u8, to_rgba_f32, u8_to_f32};
use crate::geometry::IntRect;

use composite::{paint_element, paint_shadow, Canvas};
use corners::CornerBitmaps;
use gradient::{ColorRamp, Edge, EdgeGradients, GradientSet};
use palette::Palette;
use params::{EffectParameters, LightOrigin};

/// Notification sent to listeners after a parameter changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterChange {
    Color(Color),
    Distance(u32),
    Origin(LightOrigin),
    ClipRadius(u32),
}

type Listener = Box<dyn FnMut(&ParameterChange)>;

/// Rendered element with its shadow.
#[derive(Clone, Debug, PartialEq)]
pub struct Composited {
    /// `(height, width, 4)` straight RGBA.
    pub image: Array3<f32>,
    /// Placement of `image` relative to the element's top-left corner.
    pub bounds: IntRect,
}

/// The shadow compositor.
pub struct NeumorphismEffect {
    params: EffectParameters,
    palette: Palette,
    gradients: GradientSet,
    edges: EdgeGradients,
    corners: Arc<CornerBitmaps>,
    listeners: Vec<Listener>,
}

impl NeumorphismEffect {
    pub fn new(params: EffectParameters) -> Self {
        let params = params.normalized();
        let palette = Palette::derive(params.color);
        let gradients = GradientSet::define(&palette);
        let edges = EdgeGradients::assign(&gradients, params.origin);
        let corners = Arc::new(corners::rasterize(&gradients, &params));
        Self {
            params,
            palette,
            gradients,
            edges,
            corners,
            listeners: Vec::new(),
        }
    }

    /// Register a callback invoked after every effective parameter change.
    pub fn subscribe(&mut self, listener: impl FnMut(&ParameterChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn parameters(&self) -> EffectParameters {
        self.params
    }

    pub fn color(&self) -> Color {
        self.params.color
    }

    pub fn distance(&self) -> u32 {
        self.params.distance
    }

    pub fn origin(&self) -> LightOrigin {
        self.params.origin
    }

    pub fn clip_radius(&self) -> u32 {
        self.params.clip_radius
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn gradients(&self) -> &GradientSet {
        &self.gradients
    }

    pub fn edge_ramp(&self, edge: Edge) -> &ColorRamp {
        self.edges.ramp(edge)
    }

    /// Snapshot of the current corner bitmaps.
    pub fn corners(&self) -> Arc<CornerBitmaps> {
        Arc::clone(&self.corners)
    }

    /// Returns `true` if the color changed.
    pub fn set_color(&mut self, color: Color) -> bool {
        if color == self.params.color {
            return false;
        }
        self.params.color = color;
        self.palette = Palette::derive(color);
        self.gradients = GradientSet::define(&self.palette);
        self.edges = EdgeGradients::assign(&self.gradients, self.params.origin);
        self.regenerate();
        self.notify(ParameterChange::Color(color));
        true
    }

    /// Set the shadow extent; negative values clamp to 0.
    ///
    /// Shrinking below the clip radius clamps the radius too, and listeners
    /// then also receive a [`ParameterChange::ClipRadius`].
    pub fn set_distance(&mut self, distance: i32) -> bool {
        let distance = distance.max(0) as u32;
        if distance == self.params.distance {
            return false;
        }
        let old_radius = self.params.clip_radius;
        self.params.distance = distance;
        self.params = self.params.normalized();
        self.regenerate();
        self.notify(ParameterChange::Distance(distance));
        if old_radius != self.params.clip_radius {
            self.notify(ParameterChange::ClipRadius(self.params.clip_radius));
        }
        true
    }

    pub fn set_origin(&mut self, origin: LightOrigin) -> bool {
        if origin == self.params.origin {
            return false;
        }
        self.params.origin = origin;
        self.edges = EdgeGradients::assign(&self.gradients, origin);
        self.regenerate();
        self.notify(ParameterChange::Origin(origin));
        true
    }

    /// Set the origin from a rotational corner index (0-3).
    pub fn set_origin_index(&mut self, index: i64) -> Result<bool> {
        Ok(self.set_origin(LightOrigin::from_index(index)?))
    }

    /// Set the rounding radius, clamped into `[0, distance]`.
    pub fn set_clip_radius(&mut self, radius: i32) -> bool {
        let radius = (radius.max(0) as u32).min(self.params.distance);
        if radius == self.params.clip_radius {
            return false;
        }
        self.params.clip_radius = radius;
        self.regenerate();
        self.notify(ParameterChange::ClipRadius(radius));
        true
    }

    /// Apply a whole parameter set through the individual setters.
    ///
    /// Distance goes before the clip radius so a larger radius is not
    /// clamped against the old distance.
    pub fn apply(&mut self, params: EffectParameters) {
        self.set_color(params.color);
        self.set_origin(params.origin);
        self.set_distance(params.distance.min(i32::MAX as u32) as i32);
        self.set_clip_radius(params.clip_radius.min(i32::MAX as u32) as i32);
    }

    /// Region the effect paints for an element occupying `element`.
    pub fn required_bounds(&self, element: IntRect) -> IntRect {
        element.expanded(self.params.effective_distance() as i32 + 1)
    }

    /// Paint shadow and element into a host canvas.
    ///
    /// `element` holds the element's pixels (1, 3 or 4 channels) and must
    /// match the size of `bounds`, given in the canvas's device space.
    pub fn render_into(
        &self,
        canvas: &mut Canvas,
        element: ArrayView3<f32>,
        bounds: IntRect,
    ) -> Result<()> {
        let (height, width, _) = element.dim();
        if width as i64 != bounds.width as i64 || height as i64 != bounds.height as i64 {
            return Err(Error::InvalidArgument(format!(
                "element is {width}x{height} but bounds are {}x{}",
                bounds.width, bounds.height
            )));
        }
        let element = to_rgba_f32(element)?;
        log::trace!("rendering neumorphism around {bounds:?}");

        let corners = self.corners();
        paint_shadow(
            canvas,
            bounds,
            self.params.effective_distance(),
            self.params.clip_radius,
            &self.edges,
            &corners,
        );
        paint_element(canvas, element.view(), bounds, self.params.clip_radius);
        Ok(())
    }

    /// Render onto a fresh transparent canvas sized by
    /// [`required_bounds`](Self::required_bounds).
    pub fn render(&self, element: ArrayView3<f32>) -> Result<Composited> {
        let (height, width, _) = element.dim();
        let bounds = IntRect::new(0, 0, width as i32, height as i32);
        let mut canvas = Canvas::new(self.required_bounds(bounds));
        self.render_into(&mut canvas, element, bounds)?;
        Ok(Composited {
            bounds: canvas.bounds(),
            image: canvas.into_pixels(),
        })
    }

    /// [`render`](Self::render) for 8-bit pixels.
    pub fn render_u8(&self, element: ArrayView3<u8>) -> Result<(Array3<u8>, IntRect)> {
        let composited = self.render(u8_to_f32(element).view())?;
        Ok((f32_to_u8(composited.image.view()), composited.bounds))
    }

    fn regenerate(&mut self) {
        log::debug!(
            "regenerating corners: side={} origin={} clip_radius={}",
            self.params.corner_side(),
            self.params.origin,
            self.params.clip_radius
        );
        self.corners = Arc::new(corners::rasterize(&self.gradients, &self.params));
    }

    fn notify(&mut self, change: ParameterChange) {
        for listener in &mut self.listeners {
            listener(&change);
        }
    }
}

impl Default for NeumorphismEffect {
    fn default() -> Self {
        Self::new(EffectParameters::default())
    }
}

impl fmt::Debug for NeumorphismEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NeumorphismEffect")
            .field("params", &self.params)
            .field("palette", &self.palette)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
