//! # Rounding Evaluator
//!
//! Seven rounding functions, generic over [`RoundingFloat`] so each one
//! exists for both `f32` and `f64`, plus [`round`] which dispatches on a
//! [`RoundingPolicy`].
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TOTAL: defined for every input, never fails, never panics              │
//! │                                                                         │
//! │  finite x  ──► r integral, |x - r| < 1, r == x when x is integral       │
//! │  NaN       ──► NaN                                                      │
//! │  ±inf      ──► ±inf                                                     │
//! │  zero r    ──► carries the sign of x  (floor(-0.0) == -0.0)             │
//! │                                                                         │
//! │  PURE: no state, no FP environment access, safe from any thread         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mpa_core::round::{self, nearest, nearest_even, nearest_odd};
//! use mpa_core::RoundingPolicy;
//!
//! assert_eq!(nearest(2.5_f64), 3.0);
//! assert_eq!(nearest_even(2.5_f64), 2.0);
//! assert_eq!(nearest_odd(3.5_f32), 3.0);
//! assert_eq!(round::round(-3.1_f64, RoundingPolicy::AwayFromZero), -4.0);
//! ```
//!
//! ## Large Magnitudes
//! Once `|x| >= 2^52` (`2^23` for `f32`) every representable value is
//! already integral, so no halfway case can occur and every policy returns
//! `x` unchanged. Parity is tested in the float domain, never through an
//! integer cast.

use crate::float::RoundingFloat;
use crate::policy::RoundingPolicy;

/// Rounds with the given policy.
#[inline]
pub fn round<F: RoundingFloat>(value: F, policy: RoundingPolicy) -> F {
    match policy {
        RoundingPolicy::Nearest => nearest(value),
        RoundingPolicy::TowardZero => toward_zero(value),
        RoundingPolicy::AwayFromZero => away_from_zero(value),
        RoundingPolicy::NearestEven => nearest_even(value),
        RoundingPolicy::NearestOdd => nearest_odd(value),
        RoundingPolicy::Ceiling => ceiling(value),
        RoundingPolicy::Floor => floor(value),
    }
}

/// Closest integer, halfway cases away from zero.
#[inline]
pub fn nearest<F: RoundingFloat>(value: F) -> F {
    value.round()
}

/// Drops the fractional part. `toward_zero(-0.5) == -0.0`.
#[inline]
pub fn toward_zero<F: RoundingFloat>(value: F) -> F {
    value.trunc()
}

/// Ceiling for non-negative values, floor for negative ones.
///
/// `-0.0 >= 0.0`, so negative zero takes the ceiling branch and stays
/// negative zero. NaN takes the floor branch and stays NaN.
#[inline]
pub fn away_from_zero<F: RoundingFloat>(value: F) -> F {
    if value >= F::ZERO {
        value.ceil()
    } else {
        value.floor()
    }
}

/// Closest integer, halfway cases to the even neighbor.
#[inline]
pub fn nearest_even<F: RoundingFloat>(value: F) -> F {
    value.round_ties_even()
}

/// Closest integer, halfway cases to the odd neighbor.
///
/// Starts from the ties-to-even result. When `value` sat exactly halfway
/// and landed on an even integer, the odd neighbor is one unit from it on
/// the side of `value`.
///
/// `value - even` is exact here: the two operands are within a factor of
/// two of each other (or one of them is zero), so the 0.5 comparison is
/// a true tie test.
pub fn nearest_odd<F: RoundingFloat>(value: F) -> F {
    let even = value.round_ties_even();
    let offset = value - even;

    if offset.abs() == F::HALF && even.is_even_integral() {
        if offset > F::ZERO {
            even + F::ONE
        } else {
            even - F::ONE
        }
    } else {
        even
    }
}

/// Smallest integer not less than `value`. `ceiling(-0.0000001) == -0.0`.
#[inline]
pub fn ceiling<F: RoundingFloat>(value: F) -> F {
    value.ceil()
}

/// Largest integer not greater than `value`. `floor(-0.0) == -0.0`.
#[inline]
pub fn floor<F: RoundingFloat>(value: F) -> F {
    value.floor()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FLOAT_EPSILON: f32 = 1e-6;

    fn assert_neg_zero<F: RoundingFloat>(value: F) {
        assert!(value == F::ZERO, "expected zero, got {value}");
        assert!(value.is_sign_negative(), "expected -0.0, got +0.0");
    }

    fn assert_pos_zero<F: RoundingFloat>(value: F) {
        assert!(value == F::ZERO, "expected zero, got {value}");
        assert!(!value.is_sign_negative(), "expected +0.0, got -0.0");
    }

    // --- nearest ---

    #[test]
    fn test_nearest_f32() {
        assert_eq!(nearest(2.0_f32), 2.0);
        assert_eq!(nearest(2.1_f32), 2.0);
        assert_eq!(nearest(2.5_f32), 3.0);
        assert_eq!(nearest(2.9_f32), 3.0);
        assert_eq!(nearest(-2.0_f32), -2.0);
        assert_eq!(nearest(-2.1_f32), -2.0);
        assert_eq!(nearest(-2.5_f32), -3.0);
        assert_eq!(nearest(-2.9_f32), -3.0);
        assert_eq!(nearest(0.0_f32), 0.0);
        assert_eq!(nearest(0.5_f32), 1.0);
        assert_eq!(nearest(-0.5_f32), -1.0);
    }

    #[test]
    fn test_nearest_f64() {
        assert_eq!(nearest(2.0), 2.0);
        assert_eq!(nearest(2.1), 2.0);
        assert_eq!(nearest(2.5), 3.0);
        assert_eq!(nearest(-2.5), -3.0);
        assert_eq!(nearest(0.5), 1.0);
        assert_eq!(nearest(-0.5), -1.0);
    }

    #[test]
    fn test_nearest_just_below_half() {
        // 0.49999999999999994 must not round up
        assert_pos_zero(nearest(0.499_999_999_999_999_94_f64));
        assert_neg_zero(nearest(-0.4_f64));
    }

    // --- toward_zero ---

    #[test]
    fn test_toward_zero_f32() {
        assert_eq!(toward_zero(2.9_f32), 2.0);
        assert_eq!(toward_zero(2.0_f32), 2.0);
        assert_eq!(toward_zero(0.5_f32), 0.0);
        assert_eq!(toward_zero(-2.9_f32), -2.0);
        assert_neg_zero(toward_zero(-0.5_f32));
    }

    #[test]
    fn test_toward_zero_f64() {
        assert_eq!(toward_zero(3.9), 3.0);
        assert_eq!(toward_zero(-3.9), -3.0);
        assert_eq!(toward_zero(0.1), 0.0);
        assert_neg_zero(toward_zero(-0.5));
    }

    // --- away_from_zero ---

    #[test]
    fn test_away_from_zero_f32() {
        assert_eq!(away_from_zero(2.1_f32), 3.0);
        assert_eq!(away_from_zero(2.0_f32), 2.0);
        assert_eq!(away_from_zero(0.0_f32), 0.0);
        assert_eq!(away_from_zero(-2.1_f32), -3.0);
        assert_eq!(away_from_zero(-2.0_f32), -2.0);
        assert_eq!(away_from_zero(0.5_f32), 1.0);
        assert_eq!(away_from_zero(-0.5_f32), -1.0);
    }

    #[test]
    fn test_away_from_zero_f64() {
        assert_eq!(away_from_zero(3.1), 4.0);
        assert_eq!(away_from_zero(-3.1), -4.0);
        assert_pos_zero(away_from_zero(0.0));
        assert_neg_zero(away_from_zero(-0.0));
        assert_eq!(away_from_zero(f64::MIN_POSITIVE), 1.0);
        assert_eq!(away_from_zero(-f64::MIN_POSITIVE), -1.0);
    }

    #[test]
    fn test_subnormals_move_to_the_adjacent_integer() {
        let tiny = -3.409_967_840_374_05e-309_f64;
        assert!(!tiny.is_normal());
        assert_eq!(away_from_zero(tiny), -1.0);
        assert_eq!(floor(tiny), -1.0);
        assert_neg_zero(ceiling(tiny));
        assert_neg_zero(toward_zero(tiny));
        // the distance is below one, but not representably so
        assert_eq!(tiny - away_from_zero(tiny), 1.0);

        let tiny = f32::from_bits(1);
        assert_eq!(away_from_zero(tiny), 1.0);
        assert_eq!(ceiling(tiny), 1.0);
        assert_eq!(nearest_odd(tiny), 0.0);
    }

    // --- nearest_even ---

    #[test]
    fn test_nearest_even_f32() {
        assert_eq!(nearest_even(2.0_f32), 2.0);
        assert_eq!(nearest_even(2.1_f32), 2.0);
        assert_eq!(nearest_even(2.5_f32), 2.0);
        assert_eq!(nearest_even(3.5_f32), 4.0);
        assert_eq!(nearest_even(2.9_f32), 3.0);
        assert_eq!(nearest_even(-2.5_f32), -2.0);
        assert_eq!(nearest_even(-3.5_f32), -4.0);
        assert_pos_zero(nearest_even(0.5_f32));
        assert_neg_zero(nearest_even(-0.5_f32));
    }

    #[test]
    fn test_nearest_even_f64() {
        assert_eq!(nearest_even(2.5), 2.0);
        assert_eq!(nearest_even(3.5), 4.0);
        assert_eq!(nearest_even(-2.5), -2.0);
        assert_eq!(nearest_even(-3.5), -4.0);
        assert_eq!(nearest_even(0.5), 0.0);
    }

    // --- nearest_odd ---

    #[test]
    fn test_nearest_odd_f32() {
        assert_eq!(nearest_odd(2.0_f32), 2.0);
        assert_eq!(nearest_odd(2.1_f32), 2.0);
        assert_eq!(nearest_odd(2.5_f32), 3.0);
        assert_eq!(nearest_odd(3.5_f32), 3.0);
        assert_eq!(nearest_odd(2.9_f32), 3.0);
        assert_eq!(nearest_odd(-2.5_f32), -3.0);
        assert_eq!(nearest_odd(-3.5_f32), -3.0);
        assert_eq!(nearest_odd(0.5_f32), 1.0);
        assert_eq!(nearest_odd(-0.5_f32), -1.0);
    }

    #[test]
    fn test_nearest_odd_f64() {
        assert_eq!(nearest_odd(2.5), 3.0);
        assert_eq!(nearest_odd(3.5), 3.0);
        assert_eq!(nearest_odd(-2.5), -3.0);
        assert_eq!(nearest_odd(-3.5), -3.0);
        assert_eq!(nearest_odd(0.5), 1.0);
        assert_eq!(nearest_odd(1.5), 1.0);
        assert_eq!(nearest_odd(-1.5), -1.0);
    }

    #[test]
    fn test_nearest_odd_non_ties_follow_nearest() {
        assert_eq!(nearest_odd(4.4), 4.0);
        assert_eq!(nearest_odd(4.6), 5.0);
        assert_eq!(nearest_odd(-4.6), -5.0);
        assert_neg_zero(nearest_odd(-0.2));
        assert_pos_zero(nearest_odd(0.2));
    }

    #[test]
    fn test_nearest_odd_last_representable_ties() {
        // 2^52 - 0.5 is the largest f64 tie; 2^23 - 0.5 the largest f32 tie
        assert_eq!(nearest_odd(4_503_599_627_370_495.5_f64), 4_503_599_627_370_495.0);
        assert_eq!(nearest_odd(-4_503_599_627_370_495.5_f64), -4_503_599_627_370_495.0);
        assert_eq!(nearest_odd(8_388_607.5_f32), 8_388_607.0);
        assert_eq!(nearest_odd(8_388_606.5_f32), 8_388_607.0);
    }

    #[test]
    fn test_large_magnitudes_are_unchanged() {
        let large_f64 = [
            4_503_599_627_370_496.0,
            9_007_199_254_740_993.0,
            1e300,
            -1e300,
            f64::MAX,
            f64::MIN,
        ];
        for policy in RoundingPolicy::ALL {
            for x in large_f64 {
                assert_eq!(round(x, policy), x, "{policy} changed {x}");
            }
            for x in [16_777_217.0_f32, 3e38, f32::MAX, f32::MIN] {
                assert_eq!(round(x, policy), x, "{policy} changed {x}");
            }
        }
    }

    // --- ceiling ---

    #[test]
    fn test_ceiling_f32() {
        assert_eq!(ceiling(2.1_f32), 3.0);
        assert_eq!(ceiling(2.0_f32), 2.0);
        assert_eq!(ceiling(-2.1_f32), -2.0);
        assert_eq!(ceiling(-2.0_f32), -2.0);
        assert_eq!(ceiling(0.0_f32), 0.0);
        assert!((ceiling(0.000_000_1_f32) - 1.0).abs() < FLOAT_EPSILON);
        assert_neg_zero(ceiling(-0.000_000_1_f32));
    }

    #[test]
    fn test_ceiling_f64() {
        assert_eq!(ceiling(3.1), 4.0);
        assert_eq!(ceiling(-3.1), -3.0);
        assert_eq!(ceiling(0.0), 0.0);
        assert_eq!(ceiling(0.000_000_1), 1.0);
        assert_neg_zero(ceiling(-0.000_000_1));
    }

    // --- floor ---

    #[test]
    fn test_floor_f32() {
        assert_eq!(floor(2.1_f32), 2.0);
        assert_eq!(floor(2.0_f32), 2.0);
        assert_eq!(floor(-2.1_f32), -3.0);
        assert_eq!(floor(-2.0_f32), -2.0);
        assert_eq!(floor(0.0_f32), 0.0);
        assert_eq!(floor(0.999_999_f32), 0.0);
        assert_eq!(floor(-0.000_000_1_f32), -1.0);
    }

    #[test]
    fn test_floor_f64() {
        assert_eq!(floor(3.9), 3.0);
        assert_eq!(floor(-3.9), -4.0);
        assert_eq!(floor(0.0), 0.0);
        assert_neg_zero(floor(-0.0));
    }

    // --- specials ---

    #[test]
    fn test_special_values_propagate() {
        for policy in RoundingPolicy::ALL {
            assert!(round(f64::NAN, policy).is_nan(), "{policy}");
            assert!(round(-f64::NAN, policy).is_nan(), "{policy}");
            assert!(round(f32::NAN, policy).is_nan(), "{policy}");
            assert_eq!(round(f64::INFINITY, policy), f64::INFINITY, "{policy}");
            assert_eq!(round(f64::NEG_INFINITY, policy), f64::NEG_INFINITY, "{policy}");
            assert_eq!(round(f32::INFINITY, policy), f32::INFINITY, "{policy}");
            assert_eq!(round(f32::NEG_INFINITY, policy), f32::NEG_INFINITY, "{policy}");
        }
    }

    #[test]
    fn test_signaling_nan_stays_nan() {
        // quiet bit clear, payload 1
        let snan = f64::from_bits(0x7ff0_0000_0000_0001);
        assert!(snan.is_nan());
        for policy in RoundingPolicy::ALL {
            assert!(round(snan, policy).is_nan(), "{policy}");
        }
    }

    #[test]
    fn test_signed_zero_in_is_signed_zero_out() {
        for policy in RoundingPolicy::ALL {
            assert_neg_zero(round(-0.0_f64, policy));
            assert_pos_zero(round(0.0_f64, policy));
            assert_neg_zero(round(-0.0_f32, policy));
        }
    }

    #[test]
    fn test_dispatch_matches_named_functions() {
        let x = -7.5_f64;
        assert_eq!(round(x, RoundingPolicy::Nearest), nearest(x));
        assert_eq!(round(x, RoundingPolicy::TowardZero), toward_zero(x));
        assert_eq!(round(x, RoundingPolicy::AwayFromZero), away_from_zero(x));
        assert_eq!(round(x, RoundingPolicy::NearestEven), nearest_even(x));
        assert_eq!(round(x, RoundingPolicy::NearestOdd), nearest_odd(x));
        assert_eq!(round(x, RoundingPolicy::Ceiling), ceiling(x));
        assert_eq!(round(x, RoundingPolicy::Floor), floor(x));
    }

    #[test]
    fn test_concurrent_use() {
        let handles: Vec<_> = (0..4)
            .map(|t| {
                std::thread::spawn(move || {
                    (0..1000)
                        .map(|i| nearest_odd(f64::from(i * 4 + t) + 0.5))
                        .all(|r| !r.is_even_integral())
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}

// =============================================================================
// Property Tests
// =============================================================================
