//! 3x3 matrix and 2D homogeneous transforms

use core::ops::Mul;

use super::{Mat2, Matrix};
use crate::angle::Angle;
use crate::error::{NumericsError, Result};
use crate::scalar;
use crate::vector::{Vec2, Vec3};

/// 3x3 `f32` matrix (row-major, column vectors)
///
/// Doubles as a 2D affine transform acting on `(x, y, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3(pub(crate) Matrix<f32, 3, 3>);

square_matrix!(Mat3, 3);

impl Mat3 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    pub const ZERO: Self = Self::from_rows([[0.0; 3]; 3]);

    named_accessors! {
        m11, m11_mut => (0, 0);
        m12, m12_mut => (0, 1);
        m13, m13_mut => (0, 2);
        m21, m21_mut => (1, 0);
        m22, m22_mut => (1, 1);
        m23, m23_mut => (1, 2);
        m31, m31_mut => (2, 0);
        m32, m32_mut => (2, 1);
        m33, m33_mut => (2, 2);
    }

    /// Rule of three: cofactor sum along the first row
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.m11() * (self.m22() * self.m33() - self.m23() * self.m32())
            - self.m12() * (self.m21() * self.m33() - self.m23() * self.m31())
            + self.m13() * (self.m21() * self.m32() - self.m22() * self.m31())
    }

    /// Transposed cofactor matrix
    pub fn adjugate(&self) -> Self {
        Self::from_rows([
            [
                self.m22() * self.m33() - self.m23() * self.m32(),
                self.m13() * self.m32() - self.m12() * self.m33(),
                self.m12() * self.m23() - self.m13() * self.m22(),
            ],
            [
                self.m23() * self.m31() - self.m21() * self.m33(),
                self.m11() * self.m33() - self.m13() * self.m31(),
                self.m13() * self.m21() - self.m11() * self.m23(),
            ],
            [
                self.m21() * self.m32() - self.m22() * self.m31(),
                self.m12() * self.m31() - self.m11() * self.m32(),
                self.m11() * self.m22() - self.m12() * self.m21(),
            ],
        ])
    }

    /// The 2x2 matrix left after deleting `row` and `col`
    pub fn minor(&self, row: usize, col: usize) -> Result<Mat2> {
        if row >= 3 || col >= 3 {
            return Err(NumericsError::OutOfRange { row, col, rows: 3, cols: 3 });
        }
        Ok(self.minor_unchecked(row, col))
    }

    pub(crate) fn minor_unchecked(&self, row: usize, col: usize) -> Mat2 {
        let mut out = Mat2::ZERO;
        let rows = (0..3).filter(|&r| r != row);
        for (i, r) in rows.enumerate() {
            let cols = (0..3).filter(|&c| c != col);
            for (j, c) in cols.enumerate() {
                out.0.elements[i][j] = self.0.elements[r][c];
            }
        }
        out
    }

    /// Translation by `translation`
    pub fn create_translation(translation: Vec2) -> Self {
        let mut m = Self::IDENTITY;
        *m.m13_mut() = translation.x;
        *m.m23_mut() = translation.y;
        m
    }

    /// Non-uniform scale
    pub fn create_scale(scale: Vec2) -> Self {
        let mut m = Self::IDENTITY;
        *m.m11_mut() = scale.x;
        *m.m22_mut() = scale.y;
        m
    }

    /// Counterclockwise rotation by `degrees`
    pub fn create_rotation(degrees: f32) -> Self {
        Self::rotation_from(scalar::cos(degrees), scalar::sin(degrees))
    }

    /// Counterclockwise rotation by `angle`
    pub fn create_rotation_angle(angle: Angle) -> Self {
        Self::rotation_from(angle.cos(), angle.sin())
    }

    fn rotation_from(cos: f32, sin: f32) -> Self {
        Self::from_rows([
            [cos, -sin, 0.0],
            [sin, cos, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// `T * S * R`: rotate, then scale, then translate
    pub fn create_transform(translation: Vec2, rotation: Angle, scale: Vec2) -> Self {
        Self::create_translation(translation) * Self::create_scale(scale) * Self::create_rotation_angle(rotation)
    }

    /// Apply to the point `(x, y, 1)`
    #[inline]
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        (*self * point.extend(1.0)).truncate()
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.m11() * rhs.x + self.m12() * rhs.y + self.m13() * rhs.z,
            self.m21() * rhs.x + self.m22() * rhs.y + self.m23() * rhs.z,
            self.m31() * rhs.x + self.m32() * rhs.y + self.m33() * rhs.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::Tolerance;

    fn sample() -> Mat3 {
        Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [0.0, 1.0, 4.0],
            [5.0, 6.0, 0.0],
        ])
    }

    #[test]
    fn test_determinant() {
        assert_eq!(sample().determinant(), 1.0);
        assert_eq!(Mat3::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert_eq!(
            inv,
            Mat3::from_rows([
                [-24.0, 18.0, 5.0],
                [20.0, -15.0, -4.0],
                [-5.0, 4.0, 1.0],
            ])
        );
        assert!((m * inv).approx_eq_with(&Mat3::IDENTITY, &Tolerance::new(4)));
    }

    #[test]
    fn test_singular_rows() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [1.0, 2.0, 3.0],
            [4.0, 1.0, 1.0],
        ]);
        assert!(matches!(m.inverse(), Err(NumericsError::SingularMatrix { .. })));
    }

    #[test]
    fn test_minor() {
        let m = sample();
        assert_eq!(m.minor(0, 0).unwrap(), Mat2::from_rows([[1.0, 4.0], [6.0, 0.0]]));
        assert_eq!(m.minor(1, 2).unwrap(), Mat2::from_rows([[1.0, 2.0], [5.0, 6.0]]));
        assert!(m.minor(3, 0).is_err());
    }

    #[test]
    fn test_transpose_involution() {
        let m = sample();
        assert_eq!(m.transposed().transposed(), m);
        assert_eq!(m.transposed().m31(), 3.0);
    }

    #[test]
    fn test_rotation_degrees_and_angle_agree() {
        let a = Mat3::create_rotation(90.0);
        let b = Mat3::create_rotation_angle(Angle::from_degrees(90.0));
        assert!(a.approx_eq(&b));
        assert!(a.transform_point(Vec2::X).approx_eq(Vec2::Y));
    }

    #[test]
    fn test_transform_order() {
        // Rotate (1, 0) to (0, 1), scale to (0, 3), then move by (5, 0)
        let m = Mat3::create_transform(Vec2::new(5.0, 0.0), Angle::RIGHT, Vec2::new(2.0, 3.0));
        let p = m.transform_point(Vec2::X);
        assert!(p.approx_eq(Vec2::new(5.0, 3.0)), "{:?}", p);

        let origin = m.transform_point(Vec2::ZERO);
        assert_eq!(origin, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_translation_and_scale() {
        let t = Mat3::create_translation(Vec2::new(2.0, -1.0));
        assert_eq!(t.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(3.0, 0.0));

        let s = Mat3::create_scale(Vec2::new(2.0, 4.0));
        assert_eq!(s.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(2.0, 4.0));
        assert_eq!(s.inverse().unwrap().transform_point(Vec2::new(2.0, 4.0)), Vec2::new(1.0, 1.0));
    }
}
