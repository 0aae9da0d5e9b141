//! # Rounding Policies
//!
//! [`RoundingPolicy`] names the seven ways a float can be mapped to an
//! integral value.
//!
//! ## Policy Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  mode  policy          rule                       2.5   3.5  -2.5  -3.1 │
//! │  ────  ──────────────  ─────────────────────────  ────  ────  ────  ──── │
//! │   0    Nearest         closest, ties away from 0   3     4    -3    -3  │
//! │   1    TowardZero      drop the fraction            2     3    -2    -3  │
//! │   2    AwayFromZero    grow magnitude               3     4    -3    -4  │
//! │   3    NearestEven     closest, ties to even        2     4    -2    -3  │
//! │   4    NearestOdd      closest, ties to odd         3     3    -3    -3  │
//! │   5    Ceiling         toward +infinity             3     4    -2    -3  │
//! │   6    Floor           toward -infinity             2     3    -3    -4  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Selecting a Policy
//! ```rust
//! use mpa_core::RoundingPolicy;
//!
//! let by_name: RoundingPolicy = "bankers".parse().unwrap();
//! let by_mode = RoundingPolicy::from_mode(3).unwrap();
//! assert_eq!(by_name, by_mode);
//! assert_eq!(by_mode.to_string(), "nearest_even");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MpaError, MpaResult};
use crate::float::RoundingFloat;

/// A rule mapping a float to an integral float.
///
/// Policies are plain values: `Copy`, stateless, chosen per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Closest integer; halfway cases go away from zero.
    #[default]
    Nearest,
    /// Truncate the fractional part.
    TowardZero,
    /// Next integer away from zero unless already integral.
    AwayFromZero,
    /// Closest integer; halfway cases go to the even neighbor.
    NearestEven,
    /// Closest integer; halfway cases go to the odd neighbor.
    NearestOdd,
    /// Smallest integer not less than the value.
    Ceiling,
    /// Largest integer not greater than the value.
    Floor,
}

impl RoundingPolicy {
    /// Every policy, indexed by its mode number.
    pub const ALL: [RoundingPolicy; 7] = [
        RoundingPolicy::Nearest,
        RoundingPolicy::TowardZero,
        RoundingPolicy::AwayFromZero,
        RoundingPolicy::NearestEven,
        RoundingPolicy::NearestOdd,
        RoundingPolicy::Ceiling,
        RoundingPolicy::Floor,
    ];

    /// Resolves a numeric mode selector.
    ///
    /// ## Errors
    /// `InvalidRoundMode` when `mode` is outside `0..=6`.
    pub fn from_mode(mode: i64) -> MpaResult<Self> {
        usize::try_from(mode)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or_else(|| {
                MpaError::invalid_round_mode(format!(
                    "Attempted to set rounding mode to {}. Valid range is 0-{}.",
                    mode,
                    Self::ALL.len() - 1
                ))
            })
    }

    /// The numeric mode selector of this policy.
    #[inline]
    pub const fn mode(&self) -> u8 {
        *self as u8
    }

    /// Canonical snake_case name, as used by serde and `Display`.
    pub const fn name(&self) -> &'static str {
        match self {
            RoundingPolicy::Nearest => "nearest",
            RoundingPolicy::TowardZero => "toward_zero",
            RoundingPolicy::AwayFromZero => "away_from_zero",
            RoundingPolicy::NearestEven => "nearest_even",
            RoundingPolicy::NearestOdd => "nearest_odd",
            RoundingPolicy::Ceiling => "ceiling",
            RoundingPolicy::Floor => "floor",
        }
    }

    /// Returns true if this policy has a halfway-case rule.
    #[inline]
    pub const fn breaks_ties(&self) -> bool {
        matches!(
            self,
            RoundingPolicy::Nearest | RoundingPolicy::NearestEven | RoundingPolicy::NearestOdd
        )
    }

    /// Rounds `value` with this policy.
    #[inline]
    pub fn apply<F: RoundingFloat>(self, value: F) -> F {
        crate::round::round(value, self)
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingPolicy {
    type Err = MpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "nearest" | "round" | "half_up" | "half_away" => Ok(RoundingPolicy::Nearest),
            "toward_zero" | "towards_zero" | "trunc" | "truncate" => Ok(RoundingPolicy::TowardZero),
            "away_from_zero" | "away" | "up" => Ok(RoundingPolicy::AwayFromZero),
            "nearest_even" | "towards_even" | "half_even" | "banker" | "bankers" | "rint" => {
                Ok(RoundingPolicy::NearestEven)
            }
            "nearest_odd" | "towards_odd" | "half_odd" => Ok(RoundingPolicy::NearestOdd),
            "ceiling" | "ceil" => Ok(RoundingPolicy::Ceiling),
            "floor" | "down" => Ok(RoundingPolicy::Floor),
            _ => Err(MpaError::invalid_round_mode(format!(
                "Unknown rounding policy: '{}'. Valid options: nearest, toward_zero, \
                 away_from_zero, nearest_even, nearest_odd, ceiling, floor",
                s.trim()
            ))),
        }
    }
}

impl TryFrom<i64> for RoundingPolicy {
    type Error = MpaError;

    fn try_from(mode: i64) -> Result<Self, Self::Error> {
        Self::from_mode(mode)
    }
}
