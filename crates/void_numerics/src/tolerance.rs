//! Comparison tolerance
//!
//! Every approximate comparison in the crate (`approximately`, the
//! `approx_eq` helpers, singular-matrix detection) consults a [`Tolerance`].
//! Callers either pass one explicitly through the `*_with` variants or rely
//! on the tolerance current for the calling thread.
//!
//! The current tolerance is thread-local: changing it on one thread never
//! affects comparisons running on another.
//!
//! # Example
//!
//! ```
//! use void_numerics::tolerance::{self, Tolerance};
//! use void_numerics::scalar::approximately;
//!
//! assert!(!approximately(1.0, 1.001));
//!
//! let loose = tolerance::with(Tolerance::new(2), || approximately(1.0, 1.001));
//! assert!(loose);
//!
//! // Restored once the closure returns
//! assert_eq!(tolerance::precision(), Tolerance::DEFAULT_PRECISION);
//! ```

use std::cell::Cell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precision level and the epsilon derived from it
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u32", into = "u32"))]
pub struct Tolerance {
    precision: u32,
    epsilon: f32,
}

impl Tolerance {
    /// Precision used when nothing else has been configured
    pub const DEFAULT_PRECISION: u32 = 6;

    /// Create a tolerance for the given precision level
    pub fn new(precision: u32) -> Self {
        Self {
            precision,
            epsilon: epsilon_for(precision),
        }
    }

    /// Loose tolerance for values that went through several float round trips
    pub fn coarse() -> Self {
        Self::new(3)
    }

    /// Tight tolerance, close to the limit of `f32`
    pub fn fine() -> Self {
        Self::new(7)
    }

    /// Number of decimal digits two values must agree on
    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Largest absolute difference still considered equal (`10^-precision`)
    #[inline]
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Set the precision level, re-deriving epsilon
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self.epsilon = epsilon_for(precision);
        self
    }

    /// Check whether two scalars are equal under this tolerance
    #[inline]
    pub fn is_within(&self, a: f32, b: f32) -> bool {
        (a - b).abs() <= self.epsilon
    }

    /// Check whether a scalar is within tolerance of zero
    #[inline]
    pub fn is_zero(&self, value: f32) -> bool {
        value.abs() <= self.epsilon
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRECISION)
    }
}

impl From<u32> for Tolerance {
    fn from(precision: u32) -> Self {
        Self::new(precision)
    }
}

impl From<Tolerance> for u32 {
    fn from(tolerance: Tolerance) -> Self {
        tolerance.precision
    }
}

fn epsilon_for(precision: u32) -> f32 {
    10f32.powi(-(precision.min(i32::MAX as u32) as i32))
}

thread_local! {
    static CURRENT: Cell<Option<Tolerance>> = const { Cell::new(None) };
}

/// Tolerance current for the calling thread
pub fn current() -> Tolerance {
    CURRENT.with(|c| c.get()).unwrap_or_default()
}

/// Replace the calling thread's tolerance, returning the previous one
pub fn set(tolerance: Tolerance) -> Tolerance {
    let previous = CURRENT.with(|c| c.replace(Some(tolerance))).unwrap_or_default();
    log::debug!(
        "Tolerance changed: precision {} -> {} (epsilon {:e})",
        previous.precision,
        tolerance.precision,
        tolerance.epsilon
    );
    previous
}

/// Set the calling thread's precision level
pub fn set_precision(precision: u32) -> Tolerance {
    set(Tolerance::new(precision))
}

/// Drop any thread override and fall back to [`Tolerance::default`]
pub fn reset() {
    CURRENT.with(|c| c.set(None));
}

/// Precision level current for the calling thread
pub fn precision() -> u32 {
    current().precision
}

/// Epsilon current for the calling thread
pub fn epsilon() -> f32 {
    current().epsilon
}

/// Installs a tolerance for the calling thread until dropped
#[must_use = "the previous tolerance is restored as soon as the guard is dropped"]
pub struct ToleranceGuard {
    previous: Option<Tolerance>,
    // Thread-local state must be restored on the thread that changed it
    _not_send: core::marker::PhantomData<*const ()>,
}

impl Drop for ToleranceGuard {
    fn drop(&mut self) {
        let previous = self.previous;
        CURRENT.with(|c| c.set(previous));
        log::debug!("Tolerance restored: precision {}", previous.unwrap_or_default().precision);
    }
}

/// Install `tolerance` for the calling thread, restoring the previous one when
/// the returned guard goes out of scope
pub fn scoped(tolerance: Tolerance) -> ToleranceGuard {
    let previous = CURRENT.with(|c| c.get());
    set(tolerance);
    ToleranceGuard {
        previous,
        _not_send: core::marker::PhantomData,
    }
}

/// Run `f` with `tolerance` installed for the calling thread
pub fn with<R>(tolerance: Tolerance, f: impl FnOnce() -> R) -> R {
    let _guard = scoped(tolerance);
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerance() {
        let tol = Tolerance::default();
        assert_eq!(tol.precision, 6);
        assert!((tol.epsilon - 1e-6).abs() < 1e-12);
    }

    #[test]
    fn test_epsilon_follows_precision() {
        let tol = Tolerance::fine().with_precision(4);
        assert_eq!(tol.precision(), 4);
        assert_eq!(tol.epsilon(), Tolerance::new(4).epsilon());
        assert_eq!(Tolerance::from(4), tol);
        assert_eq!(u32::from(tol), 4);
    }

    #[test]
    fn test_with_precision() {
        let tol = Tolerance::default().with_precision(2);
        assert_eq!(tol.precision, 2);
        assert!(tol.is_within(1.0, 1.005));
        assert!(!tol.is_within(1.0, 1.02));
    }

    #[test]
    fn test_set_and_reset() {
        let previous = set_precision(3);
        assert_eq!(previous, Tolerance::default());
        assert_eq!(precision(), 3);
        assert!((epsilon() - 1e-3).abs() < 1e-9);

        reset();
        assert_eq!(current(), Tolerance::default());
    }

    #[test]
    fn test_scoped_restores() {
        reset();
        {
            let _guard = scoped(Tolerance::coarse());
            assert_eq!(precision(), 3);
            {
                let _inner = scoped(Tolerance::fine());
                assert_eq!(precision(), 7);
            }
            assert_eq!(precision(), 3);
        }
        assert_eq!(precision(), Tolerance::DEFAULT_PRECISION);
    }

    #[test]
    fn test_thread_isolation() {
        set_precision(1);
        let other = std::thread::spawn(precision).join().unwrap();
        assert_eq!(other, Tolerance::DEFAULT_PRECISION);
        assert_eq!(precision(), 1);
        reset();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_tolerance_serialization() {
        let tol = Tolerance::new(4);
        let serialized = bincode::serialize(&tol).unwrap();
        let deserialized: Tolerance = bincode::deserialize(&serialized).unwrap();
        assert_eq!(tol, deserialized);
    }
}
