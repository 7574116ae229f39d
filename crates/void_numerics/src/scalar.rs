//! Scalar primitives
//!
//! Trigonometry in this crate works in **degrees**: every function here takes
//! and returns degrees. [`Angle`](crate::Angle) is the only type that stores
//! radians.

use crate::tolerance::{self, Tolerance};

/// Sine of an angle in degrees
#[inline]
pub fn sin(degrees: f32) -> f32 {
    degrees.to_radians().sin()
}

/// Cosine of an angle in degrees
#[inline]
pub fn cos(degrees: f32) -> f32 {
    degrees.to_radians().cos()
}

/// Tangent of an angle in degrees
#[inline]
pub fn tan(degrees: f32) -> f32 {
    degrees.to_radians().tan()
}

/// Arcsine in degrees
#[inline]
pub fn asin(value: f32) -> f32 {
    value.asin().to_degrees()
}

/// Arccosine in degrees
#[inline]
pub fn acos(value: f32) -> f32 {
    value.acos().to_degrees()
}

/// Arctangent in degrees
#[inline]
pub fn atan(value: f32) -> f32 {
    value.atan().to_degrees()
}

/// Four-quadrant arctangent of `y / x` in degrees
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    y.atan2(x).to_degrees()
}

/// Hyperbolic sine of an angle in degrees
#[inline]
pub fn sinh(degrees: f32) -> f32 {
    degrees.to_radians().sinh()
}

/// Hyperbolic cosine of an angle in degrees
#[inline]
pub fn cosh(degrees: f32) -> f32 {
    degrees.to_radians().cosh()
}

/// Hyperbolic tangent of an angle in degrees
#[inline]
pub fn tanh(degrees: f32) -> f32 {
    degrees.to_radians().tanh()
}

/// Inverse hyperbolic sine in degrees
#[inline]
pub fn asinh(value: f32) -> f32 {
    value.asinh().to_degrees()
}

/// Inverse hyperbolic cosine in degrees
#[inline]
pub fn acosh(value: f32) -> f32 {
    value.acosh().to_degrees()
}

/// Inverse hyperbolic tangent in degrees
#[inline]
pub fn atanh(value: f32) -> f32 {
    value.atanh().to_degrees()
}

/// Clamp value between min and max
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min { min }
    else if value > max { max }
    else { value }
}

/// Clamp value to [0, 1]
#[inline]
pub fn clamp01(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Floored modulo: the result takes the sign of `divisor`
///
/// `modulo(-20.0, 360.0) == 340.0`, unlike the `%` operator.
#[inline]
pub fn modulo(value: f32, divisor: f32) -> f32 {
    let r = value % divisor;
    if r != 0.0 && (r < 0.0) != (divisor < 0.0) {
        r + divisor
    } else {
        r
    }
}

#[inline]
pub fn pow(base: f32, exponent: f32) -> f32 {
    base.powf(exponent)
}

#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    a.min(b)
}

#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    a.max(b)
}

/// Linear interpolation with `t` clamped to [0, 1]
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    lerp_unclamped(a, b, clamp01(t))
}

/// Linear interpolation, extrapolating for `t` outside [0, 1]
#[inline]
pub fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Position of `value` between `a` and `b` as a fraction
///
/// Returns 0 for a degenerate range (`a == b`).
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Compare two scalars using the calling thread's tolerance
#[inline]
pub fn approximately(a: f32, b: f32) -> bool {
    tolerance::current().is_within(a, b)
}

/// Compare two scalars using an explicit tolerance
#[inline]
pub fn approximately_with(a: f32, b: f32, tolerance: &Tolerance) -> bool {
    tolerance.is_within(a, b)
}

/// Wrap into `(-half, half]` of a period; in-range values come back untouched.
pub(crate) fn wrap_signed_period(value: f32, period: f32) -> f32 {
    let half = period * 0.5;
    if value > -half && value <= half {
        return value;
    }
    let r = wrap_unsigned_period(value, period);
    if r > half { r - period } else { r }
}

/// Wrap into `[0, period)`; in-range values come back untouched.
pub(crate) fn wrap_unsigned_period(value: f32, period: f32) -> f32 {
    if (0.0..period).contains(&value) {
        return value;
    }
    let r = value.rem_euclid(period);
    // rem_euclid may round up to exactly `period` for tiny negative inputs
    if r >= period { 0.0 } else { r }
}

/// Wrap an angle in degrees into (-180, 180]
#[inline]
pub fn wrap_signed_degrees(degrees: f32) -> f32 {
    wrap_signed_period(degrees, 360.0)
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn wrap_unsigned_degrees(degrees: f32) -> f32 {
    wrap_unsigned_period(degrees, 360.0)
}
