//! Easing functions for animations

use std::f64::consts::PI;

/// Easing function type
///
/// Maps normalized progress `t` in `[0, 1]` to an eased progress value.
/// Every library curve satisfies `apply(0.0) == 0.0` and
/// `apply(1.0) == 1.0`. [`Easing::Custom`] curves should preserve the same
/// boundary law so the tween driver's completion check behaves predictably,
/// but they are free to overshoot in between.
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    Linear,
    EaseInCubic,
    /// Cubic ease-out, the engine default.
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutQuart,
    EaseInOutSine,
    /// Caller-supplied curve.
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Easing::Custom(f) => f(t),
        }
    }
}
