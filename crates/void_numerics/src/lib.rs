//! Void Numerics - Rotation, Transform and Interpolation Math
//!
//! Numerics core shared by engine subsystems that animate or place things in
//! space.
//!
//! # Features
//!
//! - Fixed-dimension [`Matrix`] with square [`Mat2`], [`Mat3`] and [`Mat4`]
//! - Determinant, adjugate and inverse with singular-matrix reporting
//! - Translation, scale, rotation, perspective and orthographic builders
//! - [`Quaternion`] rotations with spherical interpolation
//! - [`Angle`] with degree/radian duality and directional interpolation
//! - [`Quality`] smoothing applied by every interpolation routine
//! - Per-thread comparison [`Tolerance`]
//!
//! # Example
//!
//! ```
//! use void_numerics::prelude::*;
//!
//! let m = Mat4::create_transform(
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(0.0, 90.0, 0.0),
//!     Vec3::ONE,
//! );
//! assert_eq!(m.transform_point(Vec3::ZERO), Vec3::new(1.0, 0.0, 0.0));
//!
//! let from = Angle::from_degrees(10.0);
//! let to = Angle::from_degrees(350.0);
//! let mid = from.lerp(to, 0.5, LerpDirection::Shortest);
//! assert!(mid.approx_eq(Angle::from_degrees(0.0)));
//!
//! let eased = Quality::High.apply(0.25);
//! assert!(eased < 0.25);
//! ```
//!
//! # Tolerance
//!
//! Approximate comparisons and singularity checks read the calling thread's
//! [`Tolerance`]. Change it for a region of code with [`tolerance::scoped`],
//! or pass one explicitly to any `*_with` variant.

pub mod angle;
pub mod direction;
pub mod error;
pub mod matrix;
pub mod quality;
pub mod quaternion;
pub mod scalar;
pub mod tolerance;
pub mod vector;

pub mod prelude {
    //! Common imports for numerics functionality
    pub use crate::angle::Angle;
    pub use crate::direction::LerpDirection;
    pub use crate::error::{NumericsError, Result};
    pub use crate::matrix::{Element, Mat2, Mat3, Mat4, Matrix};
    pub use crate::quality::{smooth, smoothstep, Quality};
    pub use crate::quaternion::Quaternion;
    pub use crate::tolerance::{Tolerance, ToleranceGuard};
    pub use crate::vector::{Vec2, Vec3, Vec4};
}

pub use prelude::*;
