//! # Rounding Reports
//!
//! One [`RoundingReport`] per (value, policy) pair, printed as text or
//! serialized as JSON.
//!
//! Single-precision evaluation narrows the input to `f32`, rounds it there
//! and widens the result back, which is exact. Non-finite values become
//! `null` in JSON.

use mpa_core::{Logger, Precision, Rounder, RoundingPolicy};
use serde::Serialize;
use std::fmt;

/// The outcome of rounding one value under one policy.
///
/// Serialize-only: non-finite values are written as `null`, which has no
/// `f64` to read back into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundingReport {
    pub input: f64,
    pub policy: RoundingPolicy,
    pub precision: Precision,
    pub result: f64,
}

impl RoundingReport {
    /// Rounds `input` with `policy` in the requested precision.
    pub fn evaluate(
        input: f64,
        policy: RoundingPolicy,
        precision: Precision,
        logger: Option<&dyn Logger>,
    ) -> Self {
        let rounder = match logger {
            Some(logger) => Rounder::new(policy).with_logger(logger),
            None => Rounder::new(policy),
        };

        let result = match precision {
            // nearest f32; magnitudes beyond f32::MAX become infinite
            Precision::Single => f64::from(rounder.round(input as f32)),
            Precision::Double => rounder.round(input),
        };

        RoundingReport {
            input,
            policy,
            precision,
            result,
        }
    }

    /// Evaluates `input` under every policy, in mode order.
    pub fn table(input: f64, precision: Precision, logger: Option<&dyn Logger>) -> Vec<Self> {
        RoundingPolicy::ALL
            .into_iter()
            .map(|policy| Self::evaluate(input, policy, precision, logger))
            .collect()
    }
}

impl fmt::Display for RoundingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) = {}", self.policy, self.input, self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_double() {
        let report = RoundingReport::evaluate(-2.5, RoundingPolicy::NearestOdd, Precision::Double, None);
        assert_eq!(report.result, -3.0);
        assert_eq!(report.to_string(), "nearest_odd(-2.5) = -3");
    }

    #[test]
    fn test_evaluate_single_narrows() {
        // 2^24 + 1 is not representable in f32 and narrows to 2^24
        let input = 16_777_217.0;
        let single = RoundingReport::evaluate(input, RoundingPolicy::Ceiling, Precision::Single, None);
        let double = RoundingReport::evaluate(input, RoundingPolicy::Ceiling, Precision::Double, None);
        assert_eq!(single.result, 16_777_216.0);
        assert_eq!(double.result, 16_777_217.0);
        assert_eq!(single.input, input);
    }

    #[test]
    fn test_table_covers_every_policy() {
        let results: Vec<f64> = RoundingReport::table(2.5, Precision::Double, None)
            .iter()
            .map(|r| r.result)
            .collect();
        assert_eq!(results, vec![3.0, 2.0, 3.0, 2.0, 3.0, 3.0, 2.0]);
    }

    #[test]
    fn test_json_shape() {
        let report = RoundingReport::evaluate(3.5, RoundingPolicy::NearestEven, Precision::Single, None);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"input":3.5,"policy":"nearest_even","precision":"single","result":4.0}"#
        );
    }

    #[test]
    fn test_json_non_finite_is_null() {
        let report = RoundingReport::evaluate(f64::NAN, RoundingPolicy::Floor, Precision::Double, None);
        let json = serde_json::to_value(report).unwrap();
        assert!(json["input"].is_null());
        assert!(json["result"].is_null());
    }
}
