//! # shimmer-core
//!
//! Backend-agnostic engine for the "shimmer" loading placeholder: a gradient
//! band sweeping across opaque content.
//!
//! ```text
//! AnimationDriver ──progress──▶ ShimmerCompositor ──MaskLayer──▶ PaintContext
//!   (tick per frame)             (sweep rect, shader)             (backend)
//! ```
//!
//! `Shimmer` bundles the two halves for hosts that just want one effect.

pub mod color;
pub mod compositor;
pub mod config;
pub mod driver;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod layer;
pub mod shimmer;

pub use color::Color;
pub use compositor::{Change, CompositorStats, ShimmerCompositor};
pub use config::{ShimmerConfig, ShimmerConfigFile};
pub use driver::{AnimationDriver, AnimationState, CycleEvent, DriverState, Tick, Timing};
pub use easing::EasingType;
pub use error::ConfigError;
pub use geometry::Direction;
pub use gradient::{Alignment, ColorStop, GradientSpec, LinearShader, SpreadMode};
pub use layer::{BlendMode, MaskLayer, PaintContext};
pub use shimmer::Shimmer;

pub use kurbo::{Point, Rect, Size};
