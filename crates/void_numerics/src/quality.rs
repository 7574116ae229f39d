//! Smoothing strategy shared by every interpolation routine
//!
//! A [`Quality`] selects the easing curve applied to a normalized
//! interpolation parameter before it is used:
//!
//! | quality | curve |
//! |---|---|
//! | `Low` | `t` (identity) |
//! | `Medium` | `3t² − 2t³` (smoothstep) |
//! | `High` | `6t⁵ − 15t⁴ + 10t³` (smootherstep) |
//!
//! # Example
//!
//! ```
//! use void_numerics::{smooth, smoothstep, Quality};
//!
//! assert_eq!(smooth(Quality::Low, 0.25), 0.25);
//! assert_eq!(smooth(Quality::Medium, 0.5), 0.5);
//! assert_eq!(smoothstep(0.0, 10.0, 20.0, Quality::High), 1.0);
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::{NumericsError, Result};
use crate::scalar::{clamp01, inverse_lerp};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smoothing curve selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quality {
    /// No easing
    Low,
    /// Cubic smoothstep
    #[default]
    Medium,
    /// Quintic smootherstep
    High,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Low, Quality::Medium, Quality::High];

    /// Apply this quality's curve to `t`
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        smooth(self, t)
    }

    pub fn name(self) -> &'static str {
        match self {
            Quality::Low => "low",
            Quality::Medium => "medium",
            Quality::High => "high",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Quality {
    type Error = NumericsError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Quality::Low),
            1 => Ok(Quality::Medium),
            2 => Ok(Quality::High),
            other => Err(NumericsError::invalid_enum("Quality", other)),
        }
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        match quality {
            Quality::Low => 0,
            Quality::Medium => 1,
            Quality::High => 2,
        }
    }
}

impl FromStr for Quality {
    type Err = NumericsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Quality::Low),
            "medium" => Ok(Quality::Medium),
            "high" => Ok(Quality::High),
            _ => Err(NumericsError::invalid_enum("Quality", s)),
        }
    }
}

/// Map `t` through the curve selected by `quality`
///
/// `t` is expected in [0, 1] and is not clamped.
#[inline]
pub fn smooth(quality: Quality, t: f32) -> f32 {
    match quality {
        Quality::Low => t,
        Quality::Medium => t * t * (3.0 - 2.0 * t),
        Quality::High => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
    }
}

/// [`smooth`] for an untyped quality code
///
/// Fails with [`NumericsError::InvalidEnum`] for codes other than 0, 1, 2.
pub fn smooth_raw(code: u8, t: f32) -> Result<f32> {
    Ok(smooth(Quality::try_from(code)?, t))
}

/// Position of `value` between the edges, clamped to [0, 1] and smoothed
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, value: f32, quality: Quality) -> f32 {
    smooth(quality, clamp01(inverse_lerp(edge0, edge1, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_endpoints_fixed() {
        for quality in Quality::ALL {
            assert_eq!(smooth(quality, 0.0), 0.0);
            assert_eq!(smooth(quality, 1.0), 1.0);
        }
    }

    #[test]
    fn test_curves() {
        assert_eq!(smooth(Quality::Low, 0.3), 0.3);
        assert_abs_diff_eq!(smooth(Quality::Medium, 0.25), 0.15625, epsilon = 1e-6);
        assert_abs_diff_eq!(smooth(Quality::High, 0.25), 0.103515625, epsilon = 1e-6);
        for quality in Quality::ALL {
            assert_abs_diff_eq!(smooth(quality, 0.5), 0.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_monotonic() {
        for quality in Quality::ALL {
            let mut last = 0.0;
            for i in 1..=100 {
                let value = smooth(quality, i as f32 / 100.0);
                assert!(value >= last, "{} not monotonic at step {}", quality, i);
                last = value;
            }
        }
    }

    #[test]
    fn test_smoothstep_clamps() {
        assert_eq!(smoothstep(0.0, 1.0, -2.0, Quality::High), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 3.0, Quality::Medium), 1.0);
        assert_abs_diff_eq!(smoothstep(10.0, 20.0, 12.5, Quality::Medium), 0.15625, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_quality_code() {
        assert_eq!(smooth_raw(1, 0.5), Ok(0.5));
        let err = smooth_raw(3, 0.5).unwrap_err();
        assert!(matches!(err, NumericsError::InvalidEnum { kind: "Quality", .. }));
    }

    #[test]
    fn test_parse_quality() {
        assert_eq!("High".parse::<Quality>(), Ok(Quality::High));
        assert!("ultra".parse::<Quality>().is_err());
        for quality in Quality::ALL {
            assert_eq!(Quality::try_from(u8::from(quality)), Ok(quality));
        }
    }
}
