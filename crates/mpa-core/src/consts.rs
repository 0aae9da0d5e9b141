//! # Numeric Constants
//!
//! Mathematical constants at single and double precision, plus the
//! [`Precision`] tag used to talk about the two float formats at runtime.
//!
//! Constants that `std` already provides are taken from `std::f32::consts`
//! and `std::f64::consts`; the rest are written out to full double
//! precision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MpaError;

// =============================================================================
// Circle Constants
// =============================================================================

pub const PI_F32: f32 = std::f32::consts::PI;
pub const PI_F64: f64 = std::f64::consts::PI;

pub const TAU_F32: f32 = std::f32::consts::TAU;
pub const TAU_F64: f64 = std::f64::consts::TAU;

// =============================================================================
// Euler's Number
// =============================================================================

pub const E_F32: f32 = std::f32::consts::E;
pub const E_F64: f64 = std::f64::consts::E;

// =============================================================================
// Square Roots
// =============================================================================

pub const SQRT2_F64: f64 = std::f64::consts::SQRT_2;
/// 1 / sqrt(2)
pub const INV_SQRT2_F64: f64 = std::f64::consts::FRAC_1_SQRT_2;
pub const SQRT3_F64: f64 = 1.732_050_807_568_877_293_53;
pub const SQRT_PI_F64: f64 = 1.772_453_850_905_516_027_30;
pub const SQRT5_F64: f64 = 2.236_067_977_499_789_696_41;

// =============================================================================
// Natural Logarithms
// =============================================================================

pub const LN2_F64: f64 = std::f64::consts::LN_2;
pub const LN10_F64: f64 = std::f64::consts::LN_10;

/// (1 + sqrt(5)) / 2
pub const GOLDEN_RATIO_F64: f64 = 1.618_033_988_749_894_848_20;

// =============================================================================
// Precision
// =============================================================================

/// Which binary floating-point format a value is carried in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// IEEE 754 binary32 (`f32`).
    Single,
    /// IEEE 754 binary64 (`f64`).
    #[default]
    Double,
}

impl Precision {
    /// Storage width in bits.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Precision::Single => 32,
            Precision::Double => 64,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Single => write!(f, "single"),
            Precision::Double => write!(f, "double"),
        }
    }
}

impl FromStr for Precision {
    type Err = MpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" | "f32" | "float" | "32" => Ok(Precision::Single),
            "double" | "f64" | "64" => Ok(Precision::Double),
            other => Err(MpaError::invalid_argument(format!(
                "Unknown precision: '{other}'. Valid options: single, double"
            ))),
        }
    }
}
