//! 2x2 matrix

use core::ops::Mul;

use super::Matrix;
use crate::vector::Vec2;

/// 2x2 `f32` matrix (row-major, column vectors)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat2(pub(crate) Matrix<f32, 2, 2>);

square_matrix!(Mat2, 2);

impl Mat2 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0],
        [0.0, 1.0],
    ]);

    pub const ZERO: Self = Self::from_rows([[0.0; 2]; 2]);

    named_accessors! {
        m11, m11_mut => (0, 0);
        m12, m12_mut => (0, 1);
        m21, m21_mut => (1, 0);
        m22, m22_mut => (1, 1);
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self.m11() * self.m22() - self.m12() * self.m21()
    }

    /// Transposed cofactor matrix
    pub fn adjugate(&self) -> Self {
        Self::from_rows([
            [self.m22(), -self.m12()],
            [-self.m21(), self.m11()],
        ])
    }

    #[inline]
    pub fn trace(&self) -> f32 {
        self.m11() + self.m22()
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(
            self.m11() * rhs.x + self.m12() * rhs.y,
            self.m21() * rhs.x + self.m22() * rhs.y,
        )
    }
}
