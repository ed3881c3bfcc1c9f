//! Easing functions for tweens

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use framekit_common::FrameKitError;

use crate::math::clamp;

/// Quadratic ease-in, clamped to `[0, 1]`.
pub fn ease_in(t: f64) -> f64 {
    clamp(t * t, 0.0, 1.0)
}

/// Quadratic ease-out, clamped to `[0, 1]`.
pub fn ease_out(t: f64) -> f64 {
    clamp(1.0 - (1.0 - t) * (1.0 - t), 0.0, 1.0)
}

/// Quadratic ease-in-out. Input is clamped, so `0 -> 0`, `0.5 -> 0.5`, `1 -> 1`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = clamp(t, 0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// A user-supplied easing curve.
pub type EasingFn = Rc<dyn Fn(f64) -> f64>;

/// Easing curve applied to tween progress.
///
/// Output may leave `[0, 1]` for `Custom` curves; the frame animator's
/// interpolation step clamps it back, so overshoot never reaches the
/// animated value.
#[derive(Clone, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Custom(EasingFn),
}

impl Easing {
    /// Wrap any curve, including closures that capture parameters.
    pub fn custom<F>(curve: F) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        Easing::Custom(Rc::new(curve))
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => ease_in(t),
            Easing::EaseOut => ease_out(t),
            Easing::EaseInOut => ease_in_out(t),
            Easing::Custom(f) => f(t),
        }
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = FrameKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "linear" => Ok(Easing::Linear),
            "ease-in" => Ok(Easing::EaseIn),
            "ease-out" => Ok(Easing::EaseOut),
            "ease-in-out" => Ok(Easing::EaseInOut),
            other => Err(FrameKitError::invalid_argument(format!(
                "unknown easing '{other}' (expected linear, ease-in, ease-out or ease-in-out)"
            ))),
        }
    }
}
