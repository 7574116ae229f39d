//! Matrix types
//!
//! [`Matrix`] is a dense, fixed-dimension grid stored row-major. The square
//! types [`Mat2`], [`Mat3`] and [`Mat4`] wrap a `Matrix<f32, N, N>` and add
//! named element accessors, linear algebra and transform builders.
//!
//! # Convention
//!
//! Storage is row-major and vectors are columns:
//!
//! ```text
//! | m11 m12 m13 |   | x |
//! | m21 m22 m23 | * | y |
//! | m31 m32 m33 |   | z |
//! ```
//!
//! so in `A * B * v`, `B` is applied first.
//!
//! # Access
//!
//! Indexed access is 0-based and checked on every read and write:
//!
//! ```
//! use void_numerics::{Matrix, NumericsError};
//!
//! let mut m: Matrix<i32, 2, 3> = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
//! assert_eq!(m.get(1, 2), Ok(6));
//!
//! m.set(0, 0, 9).unwrap();
//! assert_eq!(m.get(0, 0), Ok(9));
//!
//! assert!(matches!(m.get(2, 0), Err(NumericsError::OutOfRange { .. })));
//! ```
//!
//! # Equality
//!
//! `==` compares every element exactly. Use `approx_eq` for comparisons under
//! the current [`Tolerance`](crate::Tolerance).

pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;

use core::fmt::Debug;
use core::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign, DivAssign};

use crate::error::{NumericsError, Result};
use crate::tolerance::{self, Tolerance};

/// Scalar types a [`Matrix`] can hold
pub trait Element:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_element {
    ($($t:ty => $zero:expr, $one:expr;)*) => {
        $(
            impl Element for $t {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
        )*
    };
}

impl_element! {
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
    i32 => 0, 1;
    i64 => 0, 1;
}

/// Dense `R`x`C` grid of `T`, row-major
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) elements: [[T; C]; R],
}

impl<T: Element, const R: usize, const C: usize> Matrix<T, R, C> {
    pub const ROWS: usize = R;
    pub const COLS: usize = C;

    #[inline]
    pub const fn from_rows(rows: [[T; C]; R]) -> Self {
        Self { elements: rows }
    }

    /// Alias for [`from_rows`](Self::from_rows)
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        Self::from_rows(rows)
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_rows([[T::ZERO; C]; R])
    }

    /// Build from a per-cell value list in row-major order
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() != R * C {
            return Err(NumericsError::DimensionMismatch {
                expected: R * C,
                found: values.len(),
            });
        }
        let mut m = Self::zero();
        for (i, value) in values.iter().enumerate() {
            m.elements[i / C][i % C] = *value;
        }
        Ok(m)
    }

    #[inline]
    fn check(row: usize, col: usize) -> Result<()> {
        if row < R && col < C {
            Ok(())
        } else {
            Err(NumericsError::OutOfRange { row, col, rows: R, cols: C })
        }
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        Self::check(row, col)?;
        Ok(&self.elements[row][col])
    }

    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        Self::check(row, col)?;
        Ok(&mut self.elements[row][col])
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.at(row, col).copied()
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.at_mut(row, col)? = value;
        Ok(())
    }

    pub fn row(&self, row: usize) -> Result<[T; C]> {
        Self::check(row, 0)?;
        Ok(self.elements[row])
    }

    pub fn column(&self, col: usize) -> Result<[T; R]> {
        Self::check(0, col)?;
        let mut out = [T::ZERO; R];
        for (r, value) in out.iter_mut().enumerate() {
            *value = self.elements[r][col];
        }
        Ok(out)
    }

    #[inline]
    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.elements
    }

    /// Elements in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter().flatten()
    }

    pub fn transpose(&self) -> Matrix<T, C, R> {
        let mut out = Matrix::<T, C, R>::zero();
        for r in 0..R {
            for c in 0..C {
                out.elements[c][r] = self.elements[r][c];
            }
        }
        out
    }

    pub fn map<U: Element>(&self, mut f: impl FnMut(T) -> U) -> Matrix<U, R, C> {
        let mut out = Matrix::<U, R, C>::zero();
        for r in 0..R {
            for c in 0..C {
                out.elements[r][c] = f(self.elements[r][c]);
            }
        }
        out
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        let mut out = *self;
        for r in 0..R {
            for c in 0..C {
                out.elements[r][c] = f(self.elements[r][c], other.elements[r][c]);
            }
        }
        out
    }

    /// True matrix product `self * rhs`
    pub fn mul_matrix<const K: usize>(&self, rhs: &Matrix<T, C, K>) -> Matrix<T, R, K> {
        let mut out = Matrix::<T, R, K>::zero();
        for r in 0..R {
            for k in 0..K {
                let mut sum = T::ZERO;
                for c in 0..C {
                    sum = sum + self.elements[r][c] * rhs.elements[c][k];
                }
                out.elements[r][k] = sum;
            }
        }
        out
    }
}

impl<T: Element, const N: usize> Matrix<T, N, N> {
    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.elements[i][i] = T::ONE;
        }
        m
    }

    pub fn trace(&self) -> T {
        (0..N).fold(T::ZERO, |sum, i| sum + self.elements[i][i])
    }
}

impl<const R: usize, const C: usize> Matrix<f32, R, C> {
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, &tolerance::current())
    }

    pub fn approx_eq_with(&self, other: &Self, tolerance: &Tolerance) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| tolerance.is_within(*a, *b))
    }

    pub fn is_finite(&self) -> bool {
        self.iter().all(|x| x.is_finite())
    }
}

impl<T: Element, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Element, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Element, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<T: Element, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl<T: Element, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<T: Element, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>> for Matrix<T, R, C> {
    type Output = Matrix<T, R, K>;
    fn mul(self, rhs: Matrix<T, C, K>) -> Matrix<T, R, K> {
        self.mul_matrix(&rhs)
    }
}

impl<T: Element, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Element, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Element, const R: usize, const C: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = self.mul_matrix(&rhs);
    }
}

// Scalar products are implemented per element type so they cannot overlap
// with the matrix product above.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Add<$t> for Matrix<$t, R, C> {
                type Output = Self;
                fn add(self, rhs: $t) -> Self {
                    self.map(|a| a + rhs)
                }
            }

            impl<const R: usize, const C: usize> Add<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;
                fn add(self, rhs: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    rhs.map(|a| self + a)
                }
            }

            impl<const R: usize, const C: usize> Sub<$t> for Matrix<$t, R, C> {
                type Output = Self;
                fn sub(self, rhs: $t) -> Self {
                    self.map(|a| a - rhs)
                }
            }

            impl<const R: usize, const C: usize> AddAssign<$t> for Matrix<$t, R, C> {
                fn add_assign(&mut self, rhs: $t) {
                    *self = *self + rhs;
                }
            }

            impl<const R: usize, const C: usize> SubAssign<$t> for Matrix<$t, R, C> {
                fn sub_assign(&mut self, rhs: $t) {
                    *self = *self - rhs;
                }
            }

            impl<const R: usize, const C: usize> Mul<$t> for Matrix<$t, R, C> {
                type Output = Self;
                fn mul(self, rhs: $t) -> Self {
                    self.map(|a| a * rhs)
                }
            }

            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;
                fn mul(self, rhs: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    rhs.map(|a| self * a)
                }
            }

            impl<const R: usize, const C: usize> Div<$t> for Matrix<$t, R, C> {
                type Output = Self;
                fn div(self, rhs: $t) -> Self {
                    self.map(|a| a / rhs)
                }
            }

            impl<const R: usize, const C: usize> MulAssign<$t> for Matrix<$t, R, C> {
                fn mul_assign(&mut self, rhs: $t) {
                    *self = *self * rhs;
                }
            }

            impl<const R: usize, const C: usize> DivAssign<$t> for Matrix<$t, R, C> {
                fn div_assign(&mut self, rhs: $t) {
                    *self = *self / rhs;
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64, i32, i64);

/// Getter/mutator pairs for fixed, compile-time indices
macro_rules! named_accessors {
    ($($get:ident, $get_mut:ident => ($r:literal, $c:literal);)*) => {
        $(
            #[inline]
            pub fn $get(&self) -> f32 {
                self.0.elements[$r][$c]
            }

            #[inline]
            pub fn $get_mut(&mut self) -> &mut f32 {
                &mut self.0.elements[$r][$c]
            }
        )*
    };
}

/// Surface shared by the square `f32` matrices
///
/// Expects the type to provide `determinant()` and `adjugate()`.
macro_rules! square_matrix {
    ($name:ident, $n:literal) => {
        impl $name {
            #[inline]
            pub const fn from_rows(rows: [[f32; $n]; $n]) -> Self {
                Self($crate::matrix::Matrix::from_rows(rows))
            }

            /// Build from a per-cell value list in row-major order
            pub fn from_slice(values: &[f32]) -> $crate::Result<Self> {
                $crate::matrix::Matrix::from_slice(values).map(Self)
            }

            #[inline]
            pub fn at(&self, row: usize, col: usize) -> $crate::Result<&f32> {
                self.0.at(row, col)
            }

            #[inline]
            pub fn at_mut(&mut self, row: usize, col: usize) -> $crate::Result<&mut f32> {
                self.0.at_mut(row, col)
            }

            #[inline]
            pub fn get(&self, row: usize, col: usize) -> $crate::Result<f32> {
                self.0.get(row, col)
            }

            #[inline]
            pub fn set(&mut self, row: usize, col: usize, value: f32) -> $crate::Result<()> {
                self.0.set(row, col, value)
            }

            #[inline]
            pub fn as_matrix(&self) -> &$crate::matrix::Matrix<f32, $n, $n> {
                &self.0
            }

            #[inline]
            pub fn to_rows(&self) -> [[f32; $n]; $n] {
                self.0.elements
            }

            /// Transpose in place
            pub fn transpose(&mut self) {
                *self = self.transposed();
            }

            pub fn transposed(&self) -> Self {
                Self(self.0.transpose())
            }

            /// Inverse, or [`SingularMatrix`](crate::NumericsError::SingularMatrix)
            /// when the determinant is within the current tolerance of zero
            pub fn inverse(&self) -> $crate::Result<Self> {
                self.inverse_with(&$crate::tolerance::current())
            }

            pub fn inverse_with(&self, tolerance: &$crate::Tolerance) -> $crate::Result<Self> {
                let determinant = self.determinant();
                if tolerance.is_zero(determinant) {
                    log::trace!(
                        "Rejected inversion of {}: determinant {:e} within epsilon {:e}",
                        stringify!($name),
                        determinant,
                        tolerance.epsilon()
                    );
                    return Err($crate::NumericsError::SingularMatrix { determinant });
                }
                Ok(self.adjugate() * (1.0 / determinant))
            }

            /// Invert in place; the matrix is left untouched on failure
            pub fn invert(&mut self) -> $crate::Result<()> {
                *self = self.inverse()?;
                Ok(())
            }

            /// `self * rhs⁻¹` assigned to `self`
            pub fn try_div_assign(&mut self, rhs: Self) -> $crate::Result<()> {
                *self = (*self / rhs)?;
                Ok(())
            }

            pub fn approx_eq(&self, other: &Self) -> bool {
                self.0.approx_eq(&other.0)
            }

            pub fn approx_eq_with(&self, other: &Self, tolerance: &$crate::Tolerance) -> bool {
                self.0.approx_eq_with(&other.0, tolerance)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl From<$crate::matrix::Matrix<f32, $n, $n>> for $name {
            fn from(m: $crate::matrix::Matrix<f32, $n, $n>) -> Self {
                Self(m)
            }
        }

        impl From<$name> for $crate::matrix::Matrix<f32, $n, $n> {
            fn from(m: $name) -> Self {
                m.0
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;
            #[inline] fn add(self, rhs: Self) -> Self { Self(self.0 + rhs.0) }
        }
        impl core::ops::Sub for $name {
            type Output = Self;
            #[inline] fn sub(self, rhs: Self) -> Self { Self(self.0 - rhs.0) }
        }
        impl core::ops::Add<f32> for $name {
            type Output = Self;
            #[inline] fn add(self, rhs: f32) -> Self { Self(self.0 + rhs) }
        }
        impl core::ops::Sub<f32> for $name {
            type Output = Self;
            #[inline] fn sub(self, rhs: f32) -> Self { Self(self.0 - rhs) }
        }
        impl core::ops::Neg for $name {
            type Output = Self;
            #[inline] fn neg(self) -> Self { Self(-self.0) }
        }
        impl core::ops::Mul for $name {
            type Output = Self;
            #[inline] fn mul(self, rhs: Self) -> Self { Self(self.0.mul_matrix(&rhs.0)) }
        }
        impl core::ops::Mul<f32> for $name {
            type Output = Self;
            #[inline] fn mul(self, rhs: f32) -> Self { Self(self.0 * rhs) }
        }
        impl core::ops::Div<f32> for $name {
            type Output = Self;
            #[inline] fn div(self, rhs: f32) -> Self { Self(self.0 / rhs) }
        }
        /// Multiplication by the inverse of `rhs`
        impl core::ops::Div for $name {
            type Output = $crate::Result<Self>;
            fn div(self, rhs: Self) -> $crate::Result<Self> {
                Ok(self * rhs.inverse()?)
            }
        }
        impl core::ops::AddAssign for $name {
            #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
        }
        impl core::ops::SubAssign for $name {
            #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
        }
        impl core::ops::MulAssign for $name {
            #[inline] fn mul_assign(&mut self, rhs: Self) { *self = *self * rhs; }
        }
        impl core::ops::AddAssign<f32> for $name {
            #[inline] fn add_assign(&mut self, rhs: f32) { *self = *self + rhs; }
        }
        impl core::ops::SubAssign<f32> for $name {
            #[inline] fn sub_assign(&mut self, rhs: f32) { *self = *self - rhs; }
        }
        impl core::ops::MulAssign<f32> for $name {
            #[inline] fn mul_assign(&mut self, rhs: f32) { *self = *self * rhs; }
        }
        impl core::ops::DivAssign<f32> for $name {
            #[inline] fn div_assign(&mut self, rhs: f32) { *self = *self / rhs; }
        }
    };
}

mod mat2;
mod mat3;
mod mat4;
