//! Angle type with degree/radian duality and direction-aware interpolation
//!
//! An [`Angle`] stores radians. Values are not kept in any range: comparison
//! works on the raw radians, so `Angle::from_degrees(0.0)` and
//! `Angle::from_degrees(360.0)` are different angles until wrapped.
//!
//! # Example
//!
//! ```
//! use void_numerics::{Angle, LerpDirection};
//!
//! let from = Angle::from_degrees(350.0);
//! let to = Angle::from_degrees(10.0);
//!
//! // The shortest arc crosses zero
//! let mid = from.lerp(to, 0.5, LerpDirection::Shortest);
//! assert!(mid.wrap_signed().degrees().abs() < 1e-3);
//! ```

use core::fmt;
use core::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign, DivAssign};

use crate::direction::{self, LerpDirection};
use crate::quality::{self, Quality};
use crate::scalar::{clamp01, lerp_unclamped, wrap_signed_period, wrap_unsigned_period};
use crate::tolerance::{self, Tolerance};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const TAU: f32 = core::f32::consts::TAU;

/// A rotation amount, stored in radians
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle {
    radians: f32,
}

impl Angle {
    pub const ZERO: Self = Self::from_radians(0.0);
    pub const RIGHT: Self = Self::from_radians(core::f32::consts::FRAC_PI_2);
    pub const HALF_TURN: Self = Self::from_radians(core::f32::consts::PI);
    pub const FULL_TURN: Self = Self::from_radians(TAU);

    #[inline]
    pub const fn from_radians(radians: f32) -> Self {
        Self { radians }
    }

    #[inline]
    pub fn from_degrees(degrees: f32) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    #[inline]
    pub const fn radians(self) -> f32 {
        self.radians
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        self.radians.to_degrees()
    }

    /// Equivalent angle in (-π, π]
    #[inline]
    pub fn wrap_signed(self) -> Self {
        Self::from_radians(wrap_signed_period(self.radians, TAU))
    }

    /// Equivalent angle in [0, 2π)
    #[inline]
    pub fn wrap_unsigned(self) -> Self {
        Self::from_radians(wrap_unsigned_period(self.radians, TAU))
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_radians(self.radians.abs())
    }

    /// Sign of the shortest arc from zero to this angle: -1, 0 or 1
    pub fn sign(self) -> f32 {
        let delta = direction::shortest(0.0, self.degrees());
        if delta > 0.0 {
            1.0
        } else if delta < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    pub fn approx_eq(self, other: Self) -> bool {
        self.approx_eq_with(other, &tolerance::current())
    }

    pub fn approx_eq_with(self, other: Self, tolerance: &Tolerance) -> bool {
        tolerance.is_within(self.radians, other.radians)
    }

    // Forward trigonometry: angle in, magnitude out

    #[inline]
    pub fn sin(self) -> f32 {
        self.radians.sin()
    }

    #[inline]
    pub fn cos(self) -> f32 {
        self.radians.cos()
    }

    #[inline]
    pub fn tan(self) -> f32 {
        self.radians.tan()
    }

    #[inline]
    pub fn sinh(self) -> f32 {
        self.radians.sinh()
    }

    #[inline]
    pub fn cosh(self) -> f32 {
        self.radians.cosh()
    }

    #[inline]
    pub fn tanh(self) -> f32 {
        self.radians.tanh()
    }

    // Inverse trigonometry: magnitude in, angle out

    #[inline]
    pub fn asin(value: f32) -> Self {
        Self::from_radians(value.asin())
    }

    #[inline]
    pub fn acos(value: f32) -> Self {
        Self::from_radians(value.acos())
    }

    #[inline]
    pub fn atan(value: f32) -> Self {
        Self::from_radians(value.atan())
    }

    #[inline]
    pub fn atan2(y: f32, x: f32) -> Self {
        Self::from_radians(y.atan2(x))
    }

    #[inline]
    pub fn asinh(value: f32) -> Self {
        Self::from_radians(value.asinh())
    }

    #[inline]
    pub fn acosh(value: f32) -> Self {
        Self::from_radians(value.acosh())
    }

    #[inline]
    pub fn atanh(value: f32) -> Self {
        Self::from_radians(value.atanh())
    }

    /// Signed distance to `other` along the minimal arc
    pub fn shortest_to(self, other: Self) -> Self {
        Self::from_degrees(direction::shortest(self.degrees(), other.degrees()))
    }

    /// `FULL_TURN - shortest_to(other)`, see [`direction::longest`]
    pub fn longest_to(self, other: Self) -> Self {
        Self::from_degrees(direction::longest(self.degrees(), other.degrees()))
    }

    pub fn clockwise_to(self, other: Self) -> Self {
        Self::from_degrees(direction::clockwise(self.degrees(), other.degrees()))
    }

    pub fn counterclockwise_to(self, other: Self) -> Self {
        Self::from_degrees(direction::counterclockwise(self.degrees(), other.degrees()))
    }

    /// Interpolate towards `other` along `direction`, extrapolating outside [0, 1]
    ///
    /// [`LerpDirection::Longest`] travels `360 - shortest` degrees and does not
    /// generally end on `other` at `t = 1`.
    pub fn lerp_unclamped(self, other: Self, t: f32, direction: LerpDirection) -> Self {
        match direction {
            // No wrapping, so stay in radians
            LerpDirection::Direct => Self::from_radians(lerp_unclamped(self.radians, other.radians, t)),
            _ => {
                let from = self.degrees();
                Self::from_degrees(from + t * direction.delta(from, other.degrees()))
            }
        }
    }

    /// Interpolate towards `other` along `direction` with `t` clamped to [0, 1]
    #[inline]
    pub fn lerp(self, other: Self, t: f32, direction: LerpDirection) -> Self {
        self.lerp_unclamped(other, clamp01(t), direction)
    }

    /// [`lerp`](Self::lerp) with `t` eased by `quality`
    pub fn lerp_smooth(self, other: Self, t: f32, quality: Quality, direction: LerpDirection) -> Self {
        self.lerp_unclamped(other, quality::smooth(quality, clamp01(t)), direction)
    }

    /// Interpolate by the smoothed position of `value` between two edges
    pub fn lerp_smoothstep(
        self,
        other: Self,
        edge0: f32,
        edge1: f32,
        value: f32,
        quality: Quality,
        direction: LerpDirection,
    ) -> Self {
        self.lerp_unclamped(other, quality::smoothstep(edge0, edge1, value, quality), direction)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

impl Add for Angle {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::from_radians(self.radians + rhs.radians) }
}
impl Sub for Angle {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::from_radians(self.radians - rhs.radians) }
}
impl Mul<f32> for Angle {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { Self::from_radians(self.radians * rhs) }
}
impl Mul<Angle> for f32 {
    type Output = Angle;
    #[inline] fn mul(self, rhs: Angle) -> Angle { Angle::from_radians(self * rhs.radians) }
}
impl Div<f32> for Angle {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { Self::from_radians(self.radians / rhs) }
}
impl Neg for Angle {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::from_radians(-self.radians) }
}
impl AddAssign for Angle {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}
impl SubAssign for Angle {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}
impl MulAssign<f32> for Angle {
    #[inline] fn mul_assign(&mut self, rhs: f32) { *self = *self * rhs; }
}
impl DivAssign<f32> for Angle {
    #[inline] fn div_assign(&mut self, rhs: f32) { *self = *self / rhs; }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_degree_radian_accessors() {
        let a = Angle::from_degrees(180.0);
        assert_abs_diff_eq!(a.radians(), core::f32::consts::PI, epsilon = 1e-6);
        assert_abs_diff_eq!(Angle::RIGHT.degrees(), 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(Angle::from_radians(1.0).degrees().to_radians(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_raw_comparison() {
        let zero = Angle::ZERO;
        let turn = Angle::FULL_TURN;
        assert_ne!(zero, turn);
        assert!(zero < turn);
        assert_abs_diff_eq!(turn.wrap_unsigned().radians(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_wrap_ranges() {
        for i in -30..30 {
            let a = Angle::from_degrees(i as f32 * 61.0);
            let s = a.wrap_signed();
            assert!(s.radians() > -core::f32::consts::PI && s.radians() <= core::f32::consts::PI);
            assert_eq!(s.wrap_signed(), s);

            let u = a.wrap_unsigned();
            assert!(u.radians() >= 0.0 && u.radians() < TAU);
            assert_eq!(u.wrap_unsigned(), u);
        }
    }

    #[test]
    fn test_lerp_shortest_crosses_zero() {
        let from = Angle::from_degrees(350.0);
        let to = Angle::from_degrees(10.0);
        let mid = from.lerp_unclamped(to, 0.5, LerpDirection::Shortest);
        assert!(direction::shortest(0.0, mid.degrees()).abs() < 1e-3);
    }

    #[test]
    fn test_lerp_directions() {
        let from = Angle::from_degrees(0.0);
        let to = Angle::from_degrees(90.0);

        let cw = from.lerp(to, 0.5, LerpDirection::Clockwise);
        assert_abs_diff_eq!(cw.degrees(), -135.0, epsilon = 1e-3);

        let ccw = from.lerp(to, 0.5, LerpDirection::Counterclockwise);
        assert_abs_diff_eq!(ccw.degrees(), 45.0, epsilon = 1e-3);

        let long = from.lerp(to, 0.5, LerpDirection::Longest);
        assert_abs_diff_eq!(long.degrees(), 135.0, epsilon = 1e-3);

        let direct = Angle::from_degrees(350.0).lerp(Angle::from_degrees(10.0), 0.5, LerpDirection::Direct);
        assert_abs_diff_eq!(direct.degrees(), 180.0, epsilon = 1e-3);
    }

    #[test]
    fn test_lerp_longest_endpoint() {
        let from = Angle::ZERO;
        let end = from.lerp(Angle::from_degrees(90.0), 1.0, LerpDirection::Longest);
        assert_abs_diff_eq!(end.degrees(), 270.0, epsilon = 1e-3);

        // Ends on the target mirrored across the start
        let end = Angle::from_degrees(10.0).lerp(Angle::from_degrees(350.0), 1.0, LerpDirection::Longest);
        assert_abs_diff_eq!(end.degrees(), 390.0, epsilon = 1e-3);
        assert_abs_diff_eq!(end.wrap_unsigned().degrees(), 30.0, epsilon = 1e-3);
    }

    #[test]
    fn test_lerp_clamps() {
        let from = Angle::ZERO;
        let to = Angle::RIGHT;
        assert_eq!(from.lerp(to, 2.0, LerpDirection::Direct), to);
        assert_abs_diff_eq!(
            from.lerp_unclamped(to, 2.0, LerpDirection::Direct).degrees(),
            180.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_lerp_smooth() {
        let from = Angle::ZERO;
        let to = Angle::from_degrees(100.0);
        let eased = from.lerp_smooth(to, 0.25, Quality::Medium, LerpDirection::Shortest);
        assert_abs_diff_eq!(eased.degrees(), 15.625, epsilon = 1e-3);

        let stepped = from.lerp_smoothstep(to, 0.0, 4.0, 1.0, Quality::Low, LerpDirection::Shortest);
        assert_abs_diff_eq!(stepped.degrees(), 25.0, epsilon = 1e-3);
    }

    #[test]
    fn test_sign() {
        assert_eq!(Angle::from_degrees(30.0).sign(), 1.0);
        assert_eq!(Angle::from_degrees(330.0).sign(), -1.0);
        assert_eq!(Angle::ZERO.sign(), 0.0);
        assert_eq!(Angle::from_degrees(-30.0).sign(), -1.0);
    }

    #[test]
    fn test_trig_helpers() {
        assert_abs_diff_eq!(Angle::RIGHT.sin(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Angle::HALF_TURN.cos(), -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Angle::asin(1.0).degrees(), 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(Angle::atan2(-1.0, 0.0).degrees(), -90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(Angle::asinh(Angle::from_radians(0.5).sinh()).radians(), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_arithmetic() {
        let mut a = Angle::from_degrees(30.0);
        a += Angle::from_degrees(60.0);
        assert_abs_diff_eq!(a.degrees(), 90.0, epsilon = 1e-4);
        a *= 2.0;
        assert_abs_diff_eq!(a.degrees(), 180.0, epsilon = 1e-4);
        assert_abs_diff_eq!((-a / 4.0).degrees(), -45.0, epsilon = 1e-4);
    }

    #[test]
    fn test_display() {
        assert_eq!(Angle::ZERO.to_string(), "0°");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_angle_serialization() {
        let a = Angle::from_degrees(42.0);
        let serialized = bincode::serialize(&a).unwrap();
        let deserialized: Angle = bincode::deserialize(&serialized).unwrap();
        assert_eq!(a, deserialized);
    }
}
