use thiserror::Error;

/// Configuration precondition violations, reported when a shimmer is built.
///
/// None of these are recoverable at runtime; a shimmer is never constructed
/// from an invalid configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("animation period must be positive")]
    NonPositivePeriod,
    #[error("delay must not be negative, got {millis}ms")]
    NegativeDelay { millis: i64 },
    #[error("gradient needs at least 2 stops, got {count}")]
    TooFewStops { count: usize },
    #[error("gradient stop {index} at {offset} is outside [0, 1]")]
    StopOutOfRange { index: usize, offset: f32 },
    #[error("gradient stop {index} at {offset} is before the previous stop")]
    DecreasingStops { index: usize, offset: f32 },
    #[error("first gradient stop must be at 0.0, got {0}")]
    FirstStopNotZero(f32),
    #[error("last gradient stop must be at 1.0, got {0}")]
    LastStopNotOne(f32),
    #[error("invalid color {0:?}, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}
