//! # Rounder
//!
//! A [`RoundingPolicy`] bundled with an optional injected [`Logger`], for
//! callers that want a trace of what was rounded and how ties were broken.
//!
//! ```rust
//! use std::sync::Mutex;
//! use mpa_core::{logging, Rounder, RoundingPolicy};
//!
//! let lines = Mutex::new(Vec::new());
//! let logger = logging::from_fn(|record| lines.lock().unwrap().push(record.render()));
//!
//! let rounder = Rounder::new(RoundingPolicy::NearestOdd).with_logger(&logger);
//! assert_eq!(rounder.round(3.5_f64), 3.0);
//!
//! let lines = lines.lock().unwrap();
//! assert!(lines.iter().any(|l| l.contains("halfway case 3.5")));
//! ```
//!
//! Without a logger, `Rounder::round` is exactly [`crate::round::round`].

use std::fmt;

use crate::float::RoundingFloat;
use crate::logging::Logger;
use crate::policy::RoundingPolicy;
use crate::round;

/// A policy plus an optional diagnostics sink.
#[derive(Clone, Copy, Default)]
pub struct Rounder<'a> {
    policy: RoundingPolicy,
    logger: Option<&'a dyn Logger>,
}

impl<'a> Rounder<'a> {
    pub const fn new(policy: RoundingPolicy) -> Self {
        Rounder {
            policy,
            logger: None,
        }
    }

    /// Attaches a logger that receives one Trace record per call, plus a
    /// Debug record whenever a tie-breaking policy meets a halfway case.
    pub fn with_logger(self, logger: &'a dyn Logger) -> Self {
        Rounder {
            logger: Some(logger),
            ..self
        }
    }

    #[inline]
    pub const fn policy(&self) -> RoundingPolicy {
        self.policy
    }

    /// Rounds `value`. Never fails; logging does not change the result.
    pub fn round<F: RoundingFloat>(&self, value: F) -> F {
        let result = round::round(value, self.policy);

        if let Some(logger) = self.logger {
            if self.policy.breaks_ties() && (value - value.trunc()).abs() == F::HALF {
                crate::mpa_debug!(
                    logger,
                    "halfway case {} resolved by {} to {}",
                    value,
                    self.policy,
                    result
                );
            }
            crate::mpa_trace!(
                logger,
                "{}({}) = {} [{}]",
                self.policy,
                value,
                result,
                F::PRECISION
            );
        }

        result
    }
}

impl From<RoundingPolicy> for Rounder<'_> {
    fn from(policy: RoundingPolicy) -> Self {
        Rounder::new(policy)
    }
}

impl fmt::Debug for Rounder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rounder")
            .field("policy", &self.policy)
            .field("has_logger", &self.logger.is_some())
            .finish()
    }
}
