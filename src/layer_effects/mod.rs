//! Layer effects for element styling.
//!
//! ## Shadow Effects
//! - **Neumorphism** - Dual-tone highlight/shadow around a rectangular
//!   element with blended, optionally rounded corners (`neumorphism/`)
//!
//! ## Layer Effects vs Filters
//!
//! Layer effects differ from filters in that they:
//! - Paint outside the element (returning the expanded placement)
//! - Keep prepared state between renders
//! - Preserve the element's own pixels on top

pub mod neumorphism;
