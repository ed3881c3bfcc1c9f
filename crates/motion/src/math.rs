//! Scalar interpolation and range-mapping helpers.
//!
//! All functions are total: degenerate inputs (empty ranges, NaN factors,
//! non-positive smoothing times) map to documented fallback values instead
//! of producing NaN or panicking.

use std::f64::consts::PI;

/// Limit `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: NaN maps to `min`, and when
/// `min > max` the result is `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    min.max(max.min(value))
}

/// Linear interpolation from `a` to `b`.
///
/// The blend factor `t` is clamped to `[0, 1]` first, so the result always
/// lies between `a` and `b`. An easing curve that overshoots (anticipation,
/// back, elastic) is therefore flattened at the endpoints when its output
/// is fed through here.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * clamp(t, 0.0, 1.0)
}

/// Frame-rate independent exponential approach of `current` toward `target`.
///
/// `delta` is the frame time in seconds (see `FrameClock::delta_secs`),
/// `smooth_time` roughly how long reaching the target should take. A
/// non-positive `smooth_time` snaps straight to `target`.
pub fn damp(current: f64, target: f64, delta: f64, smooth_time: f64) -> f64 {
    if smooth_time.is_nan() || smooth_time <= 0.0 {
        return target;
    }
    let t = 1.0 - (-delta / smooth_time).exp();
    current + (target - current) * t
}

/// Position of `value` within `[min, max]` as a fraction.
///
/// Not clamped: values outside the range map outside `[0, 1]`. An empty
/// range (`min == max`) yields `0`.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if min == max {
        return 0.0;
    }
    (value - min) / (max - min)
}

/// Map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Not clamped. An empty input range yields `out_min`.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if in_min == in_max {
        return out_min;
    }
    (value - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

pub fn rad_to_deg(radians: f64) -> f64 {
    radians * (180.0 / PI)
}
