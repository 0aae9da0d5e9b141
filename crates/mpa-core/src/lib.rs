//! # mpa-core: Rounding Policies for MPA
//!
//! This crate is the numeric foundation of MPA. It maps IEEE-754 floats to
//! integral floats under seven selectable policies, and carries the small
//! amount of shared plumbing (errors, constants, target detection, logging)
//! the rest of MPA builds on.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          MPA Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    mpa-cli (binary `mpa`)                       │   │
//! │  │    round ──► table ──► mode ──► arch ──► config                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mpa-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  policy   │  │   round   │  │   error   │  │  logging  │  │   │
//! │  │   │ Rounding  │  │  nearest  │  │ MpaError  │  │  Logger   │  │   │
//! │  │   │  Policy   │  │ floor ... │  │ ErrorKind │  │ LogRecord │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │   float   │  │  consts   │  │   arch    │                 │   │
//! │  │   │ f32 / f64 │  │ Precision │  │  ArmV8 .. │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`policy`] - The seven rounding policies and how to select one
//! - [`round`] - One function per policy plus the [`round::round`] dispatcher
//! - [`float`] - The sealed `RoundingFloat` trait over `f32` and `f64`
//! - [`rounder`] - A policy bundled with an optional logger
//! - [`error`] - Categorized error type with call-site locations
//! - [`consts`] - Mathematical constants and [`Precision`]
//! - [`arch`] - Compile-time ARM revision detection
//! - [`logging`] - Injected logger trait, sinks and macros
//!
//! ## Design Principles
//!
//! 1. **Total Functions**: Rounding never fails. NaN and infinities pass through
//! 2. **Signed Zeros**: The sign of a zero result follows IEEE-754 rules
//! 3. **No Global State**: Policies and loggers are passed in, never stored
//! 4. **Explicit Errors**: Only policy selection can fail, with a typed error
//!
//! ## Example Usage
//!
//! ```rust
//! use mpa_core::{round, RoundingFloat, RoundingPolicy};
//!
//! assert_eq!(round::nearest(2.5_f64), 3.0);
//! assert_eq!(round::nearest_even(2.5_f64), 2.0);
//! assert_eq!(round::nearest_odd(2.5_f32), 3.0);
//!
//! let policy = RoundingPolicy::from_mode(6).unwrap();
//! assert_eq!((-3.1_f64).round_with(policy), -4.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod arch;
pub mod consts;
pub mod error;
pub mod float;
pub mod logging;
pub mod policy;
pub mod round;
pub mod rounder;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use arch::Architecture;
pub use consts::Precision;
pub use error::{ErrorCategory, ErrorKind, Location, MpaError, MpaResult};
pub use float::RoundingFloat;
pub use logging::{ConsoleLogger, FnLogger, LogLevel, LogRecord, Logger, TracingLogger};
pub use policy::RoundingPolicy;
pub use rounder::Rounder;
