//! # Shimmer Configuration
//!
//! Immutable description of one shimmer: timing, direction and gradient.
//!
//! ## Responsibilities
//! - **Defaults & builders**: `ShimmerConfig::default()` plus `with_*` setters.
//! - **Validation**: `validate()` enforces positive period and a well-formed gradient.
//! - **Serialization**: JSON form with millisecond integers, validated on load.

use crate::color::Color;
use crate::easing::EasingType;
use crate::error::ConfigError;
use crate::geometry::Direction;
use crate::gradient::GradientSpec;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default base (dim) color of the convenience gradient.
pub const DEFAULT_BASE_COLOR: Color = Color::from_hex(0xE0E0E0);
/// Default highlight color of the convenience gradient.
pub const DEFAULT_HIGHLIGHT_COLOR: Color = Color::from_hex(0xF5F5F5);
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(1500);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ShimmerConfigFile", into = "ShimmerConfigFile")]
pub struct ShimmerConfig {
    /// Duration of one sweep. Must be positive.
    pub period: Duration,
    pub curve: EasingType,
    /// Pause between cycles.
    pub delay: Duration,
    pub direction: Direction,
    pub gradient: GradientSpec,
    /// Number of cycles to run, `0` meaning forever.
    pub loop_count: u32,
    pub enabled: bool,
    /// When set, a disabled shimmer shows its content untouched instead of
    /// a frozen highlight.
    pub hide_when_disabled: bool,
}

impl Default for ShimmerConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            curve: EasingType::Linear,
            delay: Duration::ZERO,
            direction: Direction::Ltr,
            gradient: GradientSpec::from_colors(DEFAULT_BASE_COLOR, DEFAULT_HIGHLIGHT_COLOR),
            loop_count: 0,
            enabled: true,
            hide_when_disabled: false,
        }
    }
}

impl ShimmerConfig {
    /// Default timing with the two-color convenience gradient.
    pub fn from_colors(base: Color, highlight: Color) -> Self {
        Self {
            gradient: GradientSpec::from_colors(base, highlight),
            ..Self::default()
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn with_curve(mut self, curve: EasingType) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_gradient(mut self, gradient: GradientSpec) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn with_loop_count(mut self, loop_count: u32) -> Self {
        self.loop_count = loop_count;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_hide_when_disabled(mut self, hide: bool) -> Self {
        self.hide_when_disabled = hide;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period.is_zero() {
            return Err(ConfigError::NonPositivePeriod);
        }
        self.gradient.validate()
    }

    /// Whether cycles repeat forever.
    pub fn is_infinite(&self) -> bool {
        self.loop_count == 0
    }
}

/// On-disk form of `ShimmerConfig`.
///
/// Durations are signed milliseconds so that negative values in a file are
/// reported instead of failing as a generic parse error.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShimmerConfigFile {
    pub period_ms: i64,
    pub curve: EasingType,
    pub delay_ms: i64,
    pub direction: Direction,
    pub gradient: GradientSpec,
    pub loop_count: u32,
    pub enabled: bool,
    pub hide_when_disabled: bool,
}

impl Default for ShimmerConfigFile {
    fn default() -> Self {
        ShimmerConfig::default().into()
    }
}

impl TryFrom<ShimmerConfigFile> for ShimmerConfig {
    type Error = ConfigError;

    fn try_from(file: ShimmerConfigFile) -> Result<Self, Self::Error> {
        if file.period_ms <= 0 {
            return Err(ConfigError::NonPositivePeriod);
        }
        if file.delay_ms < 0 {
            return Err(ConfigError::NegativeDelay {
                millis: file.delay_ms,
            });
        }
        let config = ShimmerConfig {
            period: Duration::from_millis(file.period_ms as u64),
            curve: file.curve,
            delay: Duration::from_millis(file.delay_ms as u64),
            direction: file.direction,
            gradient: file.gradient,
            loop_count: file.loop_count,
            enabled: file.enabled,
            hide_when_disabled: file.hide_when_disabled,
        };
        config.validate()?;
        Ok(config)
    }
}

impl From<ShimmerConfig> for ShimmerConfigFile {
    fn from(config: ShimmerConfig) -> Self {
        Self {
            period_ms: i64::try_from(config.period.as_millis()).unwrap_or(i64::MAX),
            curve: config.curve,
            delay_ms: i64::try_from(config.delay.as_millis()).unwrap_or(i64::MAX),
            direction: config.direction,
            gradient: config.gradient,
            loop_count: config.loop_count,
            enabled: config.enabled,
            hide_when_disabled: config.hide_when_disabled,
        }
    }
}
