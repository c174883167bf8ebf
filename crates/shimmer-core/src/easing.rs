use keyframe::EasingFunction;
use serde::{Deserialize, Serialize};

/// Timing curve applied to the linear cycle value before it becomes progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl EasingType {
    pub const ALL: [EasingType; 4] = [
        EasingType::Linear,
        EasingType::EaseIn,
        EasingType::EaseOut,
        EasingType::EaseInOut,
    ];

    /// Evaluates the curve, clamping input and output to [0, 1].
    pub fn eval(&self, x: f64) -> f64 {
        self.function().y(x.clamp(0.0, 1.0)).clamp(0.0, 1.0)
    }

    fn function(self) -> &'static dyn EasingFunction {
        use keyframe::functions::{EaseIn, EaseInOut, EaseOut, Linear};
        match self {
            EasingType::Linear => &Linear,
            EasingType::EaseIn => &EaseIn,
            EasingType::EaseOut => &EaseOut,
            EasingType::EaseInOut => &EaseInOut,
        }
    }
}

/// Lets a configured curve drive `keyframe` sequences directly.
impl EasingFunction for EasingType {
    fn y(&self, x: f64) -> f64 {
        self.function().y(x)
    }
}
