//! Quaternion for 3D rotations
//!
//! # Normalization
//!
//! Unit length is restored at fixed points rather than maintained
//! continuously:
//!
//! - the constructors ([`Quaternion::new`], [`Quaternion::from_euler`],
//!   [`Quaternion::from_axis_angle`]) normalize what they build;
//! - [`normalize`](Quaternion::normalize), [`invert`](Quaternion::invert) and
//!   [`conjugate`](Quaternion::conjugate) renormalize explicitly;
//! - `+` and `-` normalize both operands, combine, and normalize the result;
//! - `*` and `/` normalize both operands before combining.
//!
//! Writing the public fields directly can leave a quaternion off unit length
//! until one of the above runs.
//!
//! # Euler angles
//!
//! Euler vectors are `(pitch, yaw, roll)` in degrees about x, y and z. The
//! rotation applies pitch first, then roll, then yaw:
//! `q = q_yaw * q_roll * q_pitch`. Converting back need not reproduce the
//! input: several Euler triples describe the same rotation.

use core::ops::{Add, Sub, Mul, Div, AddAssign, SubAssign, MulAssign, DivAssign};

use crate::angle::Angle;
use crate::quality::{self, Quality};
use crate::scalar::{self, clamp, clamp01, lerp_unclamped};
use crate::tolerance::{self, Tolerance};
use crate::vector::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Below this gap from 1, slerp mixes linearly
const PARALLEL_EPSILON: f32 = 4.0 * f32::EPSILON;

/// Quaternion representing a 3D rotation
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self::from_raw(0.0, 0.0, 0.0, 1.0);

    /// Create a normalized quaternion from components
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_raw(x, y, z, w).normalized()
    }

    /// Create from components as given, without normalizing
    #[inline]
    pub const fn from_raw(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create from a rotation of `angle` around `axis`
    pub fn from_axis_angle(axis: Vec3, angle: Angle) -> Self {
        let half = angle * 0.5;
        let (sin, cos) = (half.sin(), half.cos());
        let axis = axis.normalize();
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Create from Euler angles `(pitch, yaw, roll)` in degrees
    pub fn from_euler(euler: Vec3) -> Self {
        let (sp, cp) = (scalar::sin(euler.x * 0.5), scalar::cos(euler.x * 0.5));
        let (sy, cy) = (scalar::sin(euler.y * 0.5), scalar::cos(euler.y * 0.5));
        let (sr, cr) = (scalar::sin(euler.z * 0.5), scalar::cos(euler.z * 0.5));

        Self::new(
            sy * sr * cp + cy * cr * sp,
            sy * cr * cp + cy * sr * sp,
            cy * sr * cp - sy * cr * sp,
            cy * cr * cp - sy * sr * sp,
        )
    }

    /// Convert to Euler angles `(pitch, yaw, roll)` in degrees
    pub fn to_euler(self) -> Vec3 {
        let q = self.normalized();

        let pitch = scalar::atan2(
            2.0 * (q.w * q.x - q.y * q.z),
            1.0 - 2.0 * (q.x * q.x + q.z * q.z),
        );
        let yaw = scalar::atan2(
            2.0 * (q.w * q.y - q.x * q.z),
            1.0 - 2.0 * (q.y * q.y + q.z * q.z),
        );
        // Clamped so gimbal lock cannot push asin out of its domain
        let roll = scalar::asin(clamp(2.0 * (q.x * q.y + q.w * q.z), -1.0, 1.0));

        Vec3::new(pitch, yaw, roll)
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Unit-length copy; a zero quaternion becomes the identity
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::from_raw(self.x / len, self.y / len, self.z / len, self.w / len)
        } else {
            Self::IDENTITY
        }
    }

    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    #[inline]
    pub fn conjugated(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    #[inline]
    pub fn conjugate(&mut self) {
        *self = self.conjugated();
    }

    /// Multiplicative inverse, renormalized
    pub fn inverted(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > 0.0 {
            let inv = 1.0 / len_sq;
            Self::new(-self.x * inv, -self.y * inv, -self.z * inv, self.w * inv)
        } else {
            Self::IDENTITY
        }
    }

    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverted();
    }

    /// Component-wise interpolation with `t` clamped to [0, 1]
    ///
    /// Not rotation-aware; use [`slerp`](Self::slerp) for uniform angular speed.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.lerp_unclamped(other, clamp01(t))
    }

    pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
        Self::new(
            lerp_unclamped(self.x, other.x, t),
            lerp_unclamped(self.y, other.y, t),
            lerp_unclamped(self.z, other.z, t),
            lerp_unclamped(self.w, other.w, t),
        )
    }

    /// Spherical linear interpolation with `t` clamped to [0, 1]
    #[inline]
    pub fn slerp(self, other: Self, t: f32) -> Self {
        self.slerp_unclamped(other, clamp01(t))
    }

    /// Spherical linear interpolation along the shorter arc
    pub fn slerp_unclamped(self, other: Self, t: f32) -> Self {
        let dot = clamp(self.dot(other), -1.0, 1.0);
        let sign = if dot < 0.0 { -1.0 } else { 1.0 };
        let cos_theta = dot.abs();

        // sin(theta) vanishes for (anti)parallel operands
        if 1.0 - cos_theta <= PARALLEL_EPSILON {
            return Self::from_raw(
                lerp_unclamped(self.x, sign * other.x, t),
                lerp_unclamped(self.y, sign * other.y, t),
                lerp_unclamped(self.z, sign * other.z, t),
                lerp_unclamped(self.w, sign * other.w, t),
            );
        }

        let theta = Angle::acos(cos_theta);
        let sin_theta = theta.sin();
        let s1 = (theta * (1.0 - t)).sin() / sin_theta;
        let s2 = sign * (theta * t).sin() / sin_theta;

        Self::from_raw(
            self.x * s1 + other.x * s2,
            self.y * s1 + other.y * s2,
            self.z * s1 + other.z * s2,
            self.w * s1 + other.w * s2,
        )
    }

    /// [`slerp`](Self::slerp) with `t` eased by `quality`
    pub fn slerp_smooth(self, other: Self, t: f32, quality: Quality) -> Self {
        self.slerp_unclamped(other, quality::smooth(quality, clamp01(t)))
    }

    /// Slerp by the smoothed position of `value` between two edges
    pub fn slerp_smoothstep(self, other: Self, edge0: f32, edge1: f32, value: f32, quality: Quality) -> Self {
        self.slerp_unclamped(other, quality::smoothstep(edge0, edge1, value, quality))
    }

    /// Rotate a vector
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let qv = Vec3::new(self.x, self.y, self.z);
        let uv = qv.cross(v);
        let uuv = qv.cross(uv);
        v + (uv * self.w + uuv) * 2.0
    }

    pub fn approx_eq(self, other: Self) -> bool {
        self.approx_eq_with(other, &tolerance::current())
    }

    pub fn approx_eq_with(self, other: Self, tolerance: &Tolerance) -> bool {
        tolerance.is_within(self.x, other.x)
            && tolerance.is_within(self.y, other.y)
            && tolerance.is_within(self.z, other.z)
            && tolerance.is_within(self.w, other.w)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    fn hamilton(a: Self, b: Self) -> Self {
        Self::from_raw(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (a, b) = (self.normalized(), rhs.normalized());
        Self::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let (a, b) = (self.normalized(), rhs.normalized());
        Self::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
    }
}

/// Composition: `a * b` applies `b` first
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::hamilton(self.normalized(), rhs.normalized())
    }
}

/// `a * b⁻¹`
impl Div for Quaternion {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::hamilton(self.normalized(), rhs.normalized().inverted())
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Quaternion {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}
