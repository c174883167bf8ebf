//! # Gradient Module
//!
//! Describes the shimmer gradient and resolves it into a backend-neutral
//! linear shader over a sweep rectangle.
//!
//! ## Key Types
//! - `GradientSpec`: ordered color stops plus begin/end alignment and spread mode.
//! - `LinearShader`: a gradient resolved to absolute start/end points.
//! - `Alignment`: a point in the [-1, 1] space of a rectangle.

use crate::color::Color;
use crate::error::ConfigError;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Stop offsets of the two-color convenience gradient.
pub const FROM_COLORS_STOPS: [f32; 5] = [0.0, 0.35, 0.5, 0.65, 1.0];

/// A color at a position along the gradient axis.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: Color,
    pub offset: f32,
}

impl ColorStop {
    pub fn new(color: Color, offset: f32) -> Self {
        Self { color, offset }
    }
}

/// A point inside a rectangle, where (-1, -1) is the rectangle's origin corner
/// and (1, 1) the opposite corner.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    pub x: f64,
    pub y: f64,
}

impl Alignment {
    pub const TOP_LEFT: Alignment = Alignment::new(-1.0, -1.0);
    pub const TOP_RIGHT: Alignment = Alignment::new(1.0, -1.0);
    pub const CENTER_LEFT: Alignment = Alignment::new(-1.0, 0.0);
    pub const CENTER: Alignment = Alignment::new(0.0, 0.0);
    pub const CENTER_RIGHT: Alignment = Alignment::new(1.0, 0.0);
    pub const BOTTOM_LEFT: Alignment = Alignment::new(-1.0, 1.0);
    pub const BOTTOM_RIGHT: Alignment = Alignment::new(1.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Resolves this alignment against `rect`.
    ///
    /// `rect` may have a negative width or height; the result is then mirrored
    /// along that axis, which is how inverted sweep rectangles flip the
    /// gradient direction.
    pub fn within_rect(&self, rect: Rect) -> Point {
        let half = Vec2::new(rect.width() / 2.0, rect.height() / 2.0);
        Point::new(
            rect.x0 + half.x + self.x * half.x,
            rect.y0 + half.y + self.y * half.y,
        )
    }
}

/// How the gradient extends past its first and last stop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadMode {
    #[default]
    Pad,
    Repeat,
    Reflect,
}

/// A linear gradient description, independent of where it is drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    pub stops: Vec<ColorStop>,
    #[serde(default = "default_begin")]
    pub begin: Alignment,
    #[serde(default = "default_end")]
    pub end: Alignment,
    #[serde(default)]
    pub spread: SpreadMode,
}

fn default_begin() -> Alignment {
    Alignment::TOP_LEFT
}

fn default_end() -> Alignment {
    Alignment::CENTER_RIGHT
}

impl GradientSpec {
    /// Builds a gradient from explicit stops with the default axis
    /// (top-left to center-right) and `SpreadMode::Pad`.
    pub fn new(stops: Vec<ColorStop>) -> Self {
        Self {
            stops,
            begin: default_begin(),
            end: default_end(),
            spread: SpreadMode::Pad,
        }
    }

    /// The classic shimmer band: `base, base, highlight, base, base` at
    /// stops `0, 0.35, 0.5, 0.65, 1`.
    pub fn from_colors(base: Color, highlight: Color) -> Self {
        let colors = [base, base, highlight, base, base];
        Self::new(
            colors
                .into_iter()
                .zip(FROM_COLORS_STOPS)
                .map(|(color, offset)| ColorStop::new(color, offset))
                .collect(),
        )
    }

    pub fn with_axis(mut self, begin: Alignment, end: Alignment) -> Self {
        self.begin = begin;
        self.end = end;
        self
    }

    pub fn with_spread(mut self, spread: SpreadMode) -> Self {
        self.spread = spread;
        self
    }

    /// Checks the stop sequence: at least two stops, all within [0, 1],
    /// non-decreasing, starting at 0 and ending at 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stops.len() < 2 {
            return Err(ConfigError::TooFewStops {
                count: self.stops.len(),
            });
        }
        let mut previous = 0.0f32;
        for (index, stop) in self.stops.iter().enumerate() {
            // NaN fails this range check too.
            if !(0.0..=1.0).contains(&stop.offset) {
                return Err(ConfigError::StopOutOfRange {
                    index,
                    offset: stop.offset,
                });
            }
            if stop.offset < previous {
                return Err(ConfigError::DecreasingStops {
                    index,
                    offset: stop.offset,
                });
            }
            previous = stop.offset;
        }
        let first = self.stops[0].offset;
        if first != 0.0 {
            return Err(ConfigError::FirstStopNotZero(first));
        }
        let last = self.stops[self.stops.len() - 1].offset;
        if last != 1.0 {
            return Err(ConfigError::LastStopNotOne(last));
        }
        Ok(())
    }

    /// Maps this gradient onto `rect`.
    pub fn create_shader(&self, rect: Rect) -> LinearShader {
        let mut shader = LinearShader::default();
        shader.rebuild(self, rect);
        shader
    }
}

/// A gradient resolved to absolute coordinates.
///
/// Coordinates are local to the mask rectangle's origin; backends translate
/// by the mask offset when drawing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearShader {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearShader {
    /// Re-derives the shader from `spec` over `rect` in place, reusing the
    /// stop buffer.
    pub fn rebuild(&mut self, spec: &GradientSpec, rect: Rect) {
        self.start = spec.begin.within_rect(rect);
        self.end = spec.end.within_rect(rect);
        self.stops.clear();
        self.stops.extend_from_slice(&spec.stops);
        self.spread = spec.spread;
    }

    /// True when start and end coincide, so the gradient has no direction.
    pub fn is_degenerate(&self) -> bool {
        (self.end - self.start).hypot() < f64::EPSILON
    }
}
