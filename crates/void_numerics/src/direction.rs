//! Directional angular distance
//!
//! All functions here take raw angle measures in degrees and return the
//! signed number of degrees to travel from `a` to `b` along the chosen arc.
//! Positive values run counterclockwise.

use core::fmt;
use core::str::FromStr;

use crate::error::{NumericsError, Result};
use crate::scalar::modulo;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Path taken when interpolating between two angles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LerpDirection {
    /// Raw `b - a`, no wrapping
    Direct,
    /// Minimal arc, in (-180, 180]
    #[default]
    Shortest,
    /// `360 - shortest`
    ///
    /// Always travels a positive amount and ends on `2 * from - to` (mod 360),
    /// the target mirrored across the start: from 0 to 90 it ends at 270.
    Longest,
    /// Always the negative arc
    Clockwise,
    /// Always the positive arc
    Counterclockwise,
}

impl LerpDirection {
    pub const ALL: [LerpDirection; 5] = [
        LerpDirection::Direct,
        LerpDirection::Shortest,
        LerpDirection::Longest,
        LerpDirection::Clockwise,
        LerpDirection::Counterclockwise,
    ];

    /// Degrees to travel from `from` to `to` along this path
    #[inline]
    pub fn delta(self, from: f32, to: f32) -> f32 {
        match self {
            LerpDirection::Direct => to - from,
            LerpDirection::Shortest => shortest(from, to),
            LerpDirection::Longest => longest(from, to),
            LerpDirection::Clockwise => clockwise(from, to),
            LerpDirection::Counterclockwise => counterclockwise(from, to),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LerpDirection::Direct => "direct",
            LerpDirection::Shortest => "shortest",
            LerpDirection::Longest => "longest",
            LerpDirection::Clockwise => "clockwise",
            LerpDirection::Counterclockwise => "counterclockwise",
        }
    }
}

impl fmt::Display for LerpDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for LerpDirection {
    type Error = NumericsError;

    fn try_from(code: u8) -> Result<Self> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| NumericsError::invalid_enum("LerpDirection", code))
    }
}

impl FromStr for LerpDirection {
    type Err = NumericsError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == name)
            .ok_or_else(|| NumericsError::invalid_enum("LerpDirection", s))
    }
}

/// Signed minimal difference from `a` to `b`, in (-180, 180]
#[inline]
pub fn shortest(a: f32, b: f32) -> f32 {
    let delta = modulo(b - a, 360.0);
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// `360 - shortest(a, b)`, left unwrapped
///
/// Ranges over [180, 540): `longest(10, 350)` is 380. Adding it to `a` lands
/// on `b` only when `shortest(a, b)` is 0 or 180.
#[inline]
pub fn longest(a: f32, b: f32) -> f32 {
    360.0 - shortest(a, b)
}

/// Negative arc from `a` to `b`; always <= 0
#[inline]
pub fn clockwise(a: f32, b: f32) -> f32 {
    let delta = shortest(a, b);
    if delta < 0.0 { delta } else { delta - 360.0 }
}

/// Positive arc from `a` to `b`; always >= 0
#[inline]
pub fn counterclockwise(a: f32, b: f32) -> f32 {
    let delta = shortest(a, b);
    if delta > 0.0 { delta } else { delta + 360.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_crosses_zero() {
        assert_eq!(shortest(10.0, 350.0), -20.0);
        assert_eq!(shortest(350.0, 10.0), 20.0);
        assert_eq!(shortest(0.0, 180.0), 180.0);
        assert_eq!(shortest(180.0, 0.0), 180.0);
        assert_eq!(shortest(-720.0, 45.0), 45.0);
    }

    #[test]
    fn test_longest_unwrapped() {
        assert_eq!(longest(10.0, 350.0), 380.0);
        assert_eq!(longest(0.0, 90.0), 270.0);
    }

    #[test]
    fn test_forced_arcs() {
        assert_eq!(clockwise(0.0, 90.0), -270.0);
        assert_eq!(clockwise(90.0, 0.0), -90.0);
        assert_eq!(counterclockwise(90.0, 0.0), 270.0);
        assert_eq!(counterclockwise(0.0, 90.0), 90.0);
        // Equal angles go the full turn
        assert_eq!(clockwise(30.0, 30.0), -360.0);
        assert_eq!(counterclockwise(30.0, 30.0), 360.0);
    }

    #[test]
    fn test_distance_consistency() {
        for i in -12..12 {
            for j in -12..12 {
                let a = i as f32 * 37.0;
                let b = j as f32 * 53.0;
                let s = shortest(a, b);
                assert!(s > -180.0 && s <= 180.0, "shortest({}, {}) = {}", a, b, s);
                assert!(clockwise(a, b) <= 0.0);
                assert!(counterclockwise(a, b) >= 0.0);
                assert_eq!(s + longest(a, b), 360.0);
            }
        }
    }

    #[test]
    fn test_direct_delta() {
        assert_eq!(LerpDirection::Direct.delta(350.0, 10.0), -340.0);
        assert_eq!(LerpDirection::Shortest.delta(350.0, 10.0), 20.0);
    }

    #[test]
    fn test_direction_codes() {
        assert_eq!(LerpDirection::try_from(4), Ok(LerpDirection::Counterclockwise));
        assert!(LerpDirection::try_from(5).is_err());
        assert_eq!("Clockwise".parse::<LerpDirection>(), Ok(LerpDirection::Clockwise));
        assert!(matches!(
            "sideways".parse::<LerpDirection>(),
            Err(NumericsError::InvalidEnum { kind: "LerpDirection", .. })
        ));
    }
}
