//! 4x4 matrix, 3D transforms and projections

use core::ops::Mul;

use super::{Mat3, Matrix};
use crate::error::{NumericsError, Result};
use crate::quaternion::Quaternion;
use crate::scalar;
use crate::vector::{Vec2, Vec3, Vec4};

/// 4x4 `f32` matrix (row-major, column vectors)
///
/// Translation lives in the last column (`m14`, `m24`, `m34`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4(pub(crate) Matrix<f32, 4, 4>);

square_matrix!(Mat4, 4);

impl Mat4 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub const ZERO: Self = Self::from_rows([[0.0; 4]; 4]);

    named_accessors! {
        m11, m11_mut => (0, 0);
        m12, m12_mut => (0, 1);
        m13, m13_mut => (0, 2);
        m14, m14_mut => (0, 3);
        m21, m21_mut => (1, 0);
        m22, m22_mut => (1, 1);
        m23, m23_mut => (1, 2);
        m24, m24_mut => (1, 3);
        m31, m31_mut => (2, 0);
        m32, m32_mut => (2, 1);
        m33, m33_mut => (2, 2);
        m34, m34_mut => (2, 3);
        m41, m41_mut => (3, 0);
        m42, m42_mut => (3, 1);
        m43, m43_mut => (3, 2);
        m44, m44_mut => (3, 3);
    }

    /// Cofactor expansion along the first row
    pub fn determinant(&self) -> f32 {
        (0..4).fold(0.0, |det, col| {
            let term = self.0.elements[0][col] * self.minor_unchecked(0, col).determinant();
            if col % 2 == 0 { det + term } else { det - term }
        })
    }

    /// Transposed cofactor matrix
    pub fn adjugate(&self) -> Self {
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                let cofactor = self.minor_unchecked(col, row).determinant();
                out.0.elements[row][col] = if (row + col) % 2 == 0 { cofactor } else { -cofactor };
            }
        }
        out
    }

    /// The 3x3 matrix left after deleting `row` and `col`
    pub fn minor(&self, row: usize, col: usize) -> Result<Mat3> {
        if row >= 4 || col >= 4 {
            return Err(NumericsError::OutOfRange { row, col, rows: 4, cols: 4 });
        }
        Ok(self.minor_unchecked(row, col))
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Mat3 {
        let mut out = Mat3::ZERO;
        for (i, r) in (0..4).filter(|&r| r != row).enumerate() {
            for (j, c) in (0..4).filter(|&c| c != col).enumerate() {
                out.0.elements[i][j] = self.0.elements[r][c];
            }
        }
        out
    }

    pub fn create_translation(translation: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        *m.m14_mut() = translation.x;
        *m.m24_mut() = translation.y;
        *m.m34_mut() = translation.z;
        m
    }

    pub fn create_scale(scale: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        *m.m11_mut() = scale.x;
        *m.m22_mut() = scale.y;
        *m.m33_mut() = scale.z;
        m
    }

    /// Rotation from Euler angles `(pitch, yaw, roll)` in degrees
    pub fn create_rotation(euler: Vec3) -> Self {
        Self::create_rotation_quaternion(Quaternion::from_euler(euler))
    }

    /// Rotation block expanded from a unit quaternion
    pub fn create_rotation_quaternion(q: Quaternion) -> Self {
        let (x2, y2, z2) = (q.x + q.x, q.y + q.y, q.z + q.z);
        let (xx, yy, zz) = (q.x * x2, q.y * y2, q.z * z2);
        let (xy, xz, yz) = (q.x * y2, q.x * z2, q.y * z2);
        let (wx, wy, wz) = (q.w * x2, q.w * y2, q.w * z2);

        Self::from_rows([
            [1.0 - (yy + zz), xy - wz, xz + wy, 0.0],
            [xy + wz, 1.0 - (xx + zz), yz - wx, 0.0],
            [xz - wy, yz + wx, 1.0 - (xx + yy), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// `T * S * R`: rotate, then scale, then translate
    pub fn create_transform(translation: Vec3, euler: Vec3, scale: Vec3) -> Self {
        Self::create_translation(translation) * Self::create_scale(scale) * Self::create_rotation(euler)
    }

    /// Perspective projection (right-handed, depth in [-1, 1])
    ///
    /// `fov` is the vertical field of view in degrees. `near` and `far` may be
    /// passed in either order.
    pub fn create_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let (near, far) = (scalar::min(near, far), scalar::max(near, far));
        let f = 1.0 / scalar::tan(fov * 0.5);
        let nf = 1.0 / (near - far);

        Self::from_rows([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (far + near) * nf, 2.0 * far * near * nf],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Perspective projection with the aspect ratio of `viewport`
    pub fn create_perspective_viewport(fov: f32, viewport: Vec2, near: f32, far: f32) -> Self {
        Self::create_perspective(fov, viewport.x / viewport.y, near, far)
    }

    /// Orthographic projection showing `scale` units above and below center
    pub fn create_orthographic(scale: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::create_orthographic_offset(scale, aspect, near, far, Vec2::ZERO)
    }

    /// Orthographic projection centered on `offset`
    pub fn create_orthographic_offset(scale: f32, aspect: f32, near: f32, far: f32, offset: Vec2) -> Self {
        let (near, far) = (scalar::min(near, far), scalar::max(near, far));
        let (half_width, half_height) = (scale * aspect, scale);

        let (left, right) = (offset.x - half_width, offset.x + half_width);
        let (bottom, top) = (offset.y - half_height, offset.y + half_height);
        let rml = right - left;
        let tmb = top - bottom;
        let fmn = far - near;

        Self::from_rows([
            [2.0 / rml, 0.0, 0.0, -(right + left) / rml],
            [0.0, 2.0 / tmb, 0.0, -(top + bottom) / tmb],
            [0.0, 0.0, -2.0 / fmn, -(far + near) / fmn],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn create_orthographic_viewport(scale: f32, viewport: Vec2, near: f32, far: f32, offset: Vec2) -> Self {
        Self::create_orthographic_offset(scale, viewport.x / viewport.y, near, far, offset)
    }

    /// Apply to the point `(x, y, z, 1)`, dividing through by `w`
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let v = *self * point.extend(1.0);
        if v.w == 0.0 || v.w == 1.0 {
            v.truncate()
        } else {
            v.truncate() / v.w
        }
    }

    /// Apply to the direction `(x, y, z, 0)`; translation is ignored
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        (*self * vector.extend(0.0)).truncate()
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        let [r0, r1, r2, r3] = self.0.elements;
        let row = |r: [f32; 4]| r[0] * rhs.x + r[1] * rhs.y + r[2] * rhs.z + r[3] * rhs.w;
        Vec4::new(row(r0), row(r1), row(r2), row(r3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::Tolerance;

    fn sample() -> Mat4 {
        Mat4::from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ])
    }

    #[test]
    fn test_determinant_and_adjugate() {
        let m = sample();
        assert_eq!(m.determinant(), 30.0);
        assert_eq!(
            m.adjugate(),
            Mat4::from_rows([
                [25.0, 5.0, 0.0, -10.0],
                [-75.0, 3.0, 30.0, 6.0],
                [-5.0, -1.0, 0.0, 8.0],
                [-15.0, 3.0, 0.0, 6.0],
            ])
        );
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq_with(&Mat4::IDENTITY, &Tolerance::new(5)));
        assert!((inv * m).approx_eq_with(&Mat4::IDENTITY, &Tolerance::new(5)));
    }

    #[test]
    fn test_singular() {
        let mut m = sample();
        for col in 0..4 {
            let value = m.get(0, col).unwrap();
            m.set(3, col, value * 2.0).unwrap();
        }
        assert!(matches!(m.inverse(), Err(NumericsError::SingularMatrix { .. })));
        assert!(matches!(m / sample(), Ok(_)));
        assert!(matches!(sample() / m, Err(NumericsError::SingularMatrix { .. })));
    }

    #[test]
    fn test_singular_respects_tolerance() {
        let m = Mat4::create_scale(Vec3::new(1e-2, 1e-2, 1.0));
        assert!(m.inverse_with(&Tolerance::new(6)).is_ok());
        assert!(m.inverse_with(&Tolerance::new(3)).is_err());
    }

    #[test]
    fn test_minor() {
        let m = sample();
        assert_eq!(
            m.minor(1, 2).unwrap(),
            Mat3::from_rows([[1.0, 0.0, -1.0], [2.0, 1.0, -3.0], [1.0, 0.0, 0.0]])
        );
        assert!(m.minor(0, 4).is_err());
    }

    #[test]
    fn test_transpose() {
        let m = sample();
        let mut t = m;
        t.transpose();
        assert_eq!(t.m14(), m.m41());
        assert_eq!(t.transposed(), m);
        assert_eq!(t.determinant(), m.determinant());
    }

    #[test]
    fn test_transform_end_to_end() {
        let m = Mat4::create_transform(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 90.0, 0.0), Vec3::ONE);

        assert_eq!(m.transform_point(Vec3::ZERO), Vec3::new(1.0, 0.0, 0.0));

        // 90 degrees of yaw turns +Z onto +X before the offset
        let p = m.transform_point(Vec3::Z);
        assert!(p.approx_eq_with(Vec3::new(2.0, 0.0, 0.0), &Tolerance::new(5)), "{:?}", p);
    }

    #[test]
    fn test_transform_order() {
        let m = Mat4::create_transform(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 90.0), Vec3::new(2.0, 3.0, 1.0));
        // Roll (1, 0, 0) onto +Y, stretch by 3, then lift by 5 along z
        let p = m.transform_point(Vec3::X);
        assert!(p.approx_eq_with(Vec3::new(0.0, 3.0, 5.0), &Tolerance::new(5)), "{:?}", p);
    }

    #[test]
    fn test_rotation_matches_quaternion() {
        let euler = Vec3::new(25.0, -40.0, 70.0);
        let m = Mat4::create_rotation(euler);
        let q = Quaternion::from_euler(euler);
        let v = Vec3::new(0.3, -1.0, 2.0);
        assert!(m.transform_vector(v).approx_eq_with(q * v, &Tolerance::new(5)));
        assert!((m.transposed() * m).approx_eq_with(&Mat4::IDENTITY, &Tolerance::new(5)));
    }

    #[test]
    fn test_transform_vector_ignores_translation() {
        let m = Mat4::create_translation(Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(m.transform_vector(Vec3::X), Vec3::X);
        assert_eq!(m.transform_point(Vec3::X), Vec3::new(5.0, 5.0, 6.0));
        assert_eq!(m * Vec4::W, Vec4::new(4.0, 5.0, 6.0, 1.0));
    }

    #[test]
    fn test_perspective_reorders_planes() {
        let a = Mat4::create_perspective(90.0, 1.5, 0.1, 100.0);
        let b = Mat4::create_perspective(90.0, 1.5, 100.0, 0.1);
        assert_eq!(a, b);
        assert_eq!(a.m43(), -1.0);
        assert_eq!(a.m44(), 0.0);

        let near = a.transform_point(Vec3::new(0.0, 0.0, -0.1));
        let far = a.transform_point(Vec3::new(0.0, 0.0, -100.0));
        assert!(scalar::approximately_with(near.z, -1.0, &Tolerance::new(4)));
        assert!(scalar::approximately_with(far.z, 1.0, &Tolerance::new(4)));
    }

    #[test]
    fn test_perspective_viewport() {
        let a = Mat4::create_perspective_viewport(60.0, Vec2::new(800.0, 400.0), 1.0, 50.0);
        assert_eq!(a, Mat4::create_perspective(60.0, 2.0, 1.0, 50.0));
    }

    #[test]
    fn test_orthographic() {
        let m = Mat4::create_orthographic(2.0, 2.0, 1.0, 10.0);
        assert_eq!(m, Mat4::create_orthographic(2.0, 2.0, 10.0, 1.0));

        let corner = m.transform_point(Vec3::new(4.0, 2.0, -1.0));
        assert!(corner.approx_eq(Vec3::new(1.0, 1.0, -1.0)), "{:?}", corner);
    }

    #[test]
    fn test_orthographic_offset_and_viewport() {
        let m = Mat4::create_orthographic_offset(2.0, 2.0, 1.0, 10.0, Vec2::new(1.0, 1.0));
        let corner = m.transform_point(Vec3::new(5.0, 3.0, -10.0));
        assert!(corner.approx_eq(Vec3::new(1.0, 1.0, 1.0)), "{:?}", corner);

        let v = Mat4::create_orthographic_viewport(2.0, Vec2::new(800.0, 400.0), 1.0, 10.0, Vec2::ZERO);
        assert_eq!(v, Mat4::create_orthographic(2.0, 2.0, 1.0, 10.0));
    }
}
