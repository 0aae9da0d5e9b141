//! # Float Abstraction
//!
//! The [`RoundingFloat`] trait is the seam between the rounding policies and
//! the concrete IEEE 754 binary formats. It is implemented for exactly two
//! types, `f32` and `f64`, and is sealed so the set cannot grow by accident.
//!
//! ## Why Not `num_traits::Float`?
//! The policies need only a handful of primitives, and one of them
//! (`round_ties_even`) is not part of the common float traits. Keeping the
//! surface this small makes every primitive the evaluator relies on visible
//! in one place.

use std::fmt;
use std::ops::{Add, Sub};

use crate::consts::Precision;
use crate::policy::RoundingPolicy;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A binary floating-point type the rounding policies can operate on.
///
/// ## Method-Call Sugar
/// ```rust
/// use mpa_core::{RoundingFloat, RoundingPolicy};
///
/// assert_eq!(3.5_f64.round_with(RoundingPolicy::NearestOdd), 3.0);
/// assert_eq!(3.5_f32.round_with(RoundingPolicy::NearestEven), 4.0);
/// ```
pub trait RoundingFloat:
    sealed::Sealed
    + Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Positive zero.
    const ZERO: Self;
    /// Exactly one half.
    const HALF: Self;
    /// Exactly one.
    const ONE: Self;
    /// The precision tag of this type.
    const PRECISION: Precision;

    /// Nearest integer, ties away from zero.
    fn round(self) -> Self;
    /// Integer part, toward zero.
    fn trunc(self) -> Self;
    /// Smallest integer not less than `self`.
    fn ceil(self) -> Self;
    /// Largest integer not greater than `self`.
    fn floor(self) -> Self;
    /// Nearest integer, ties to even.
    fn round_ties_even(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;

    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;
    fn is_sign_negative(self) -> bool;

    /// Returns true if `self` is an integral value divisible by two.
    ///
    /// Computed in the float domain, so it stays total for magnitudes that
    /// do not fit any integer type.
    fn is_even_integral(self) -> bool;

    /// Lossless widening to `f64`.
    fn to_f64(self) -> f64;

    /// Rounds `self` with the given policy.
    #[inline]
    fn round_with(self, policy: RoundingPolicy) -> Self {
        crate::round::round(self, policy)
    }
}

macro_rules! impl_rounding_float {
    ($t:ty, $precision:expr) => {
        impl RoundingFloat for $t {
            const ZERO: Self = 0.0;
            const HALF: Self = 0.5;
            const ONE: Self = 1.0;
            const PRECISION: Precision = $precision;

            #[inline]
            fn round(self) -> Self {
                <$t>::round(self)
            }

            #[inline]
            fn trunc(self) -> Self {
                <$t>::trunc(self)
            }

            #[inline]
            fn ceil(self) -> Self {
                <$t>::ceil(self)
            }

            #[inline]
            fn floor(self) -> Self {
                <$t>::floor(self)
            }

            #[inline]
            fn round_ties_even(self) -> Self {
                <$t>::round_ties_even(self)
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            #[inline]
            fn is_sign_negative(self) -> bool {
                <$t>::is_sign_negative(self)
            }

            #[inline]
            fn is_even_integral(self) -> bool {
                self % 2.0 == 0.0
            }

            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }
    };
}

impl_rounding_float!(f32, Precision::Single);
impl_rounding_float!(f64, Precision::Double);
