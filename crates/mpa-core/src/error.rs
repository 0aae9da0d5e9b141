//! # Error Types
//!
//! The error taxonomy shared by everything built on mpa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  MpaError { kind, message, location }                                  │
//! │  │                                                                      │
//! │  ├── ErrorCategory::Logic    - caller passed something invalid         │
//! │  │   ├── ErrorKind::InvalidRoundMode                                   │
//! │  │   └── ErrorKind::InvalidArgument                                    │
//! │  │                                                                      │
//! │  └── ErrorCategory::Runtime  - environment did not cooperate           │
//! │      └── ErrorKind::ResourceNotFound                                   │
//! │                                                                         │
//! │  Match on the category when any logic error will do, on the kind       │
//! │  when the exact failure matters.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where Errors Come From
//! The rounding evaluator itself never fails. Errors only arise around it:
//! parsing a mode selector, parsing a precision name, or an application
//! failing to locate a resource such as a config file.
//!
//! ## Example
//! ```rust
//! use mpa_core::{ErrorKind, RoundingPolicy};
//!
//! let err = RoundingPolicy::from_mode(9).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidRoundMode);
//! assert!(err.is_logic());
//! assert_eq!(
//!     err.to_string(),
//!     "MPA Logic Error: Invalid Round Mode: \
//!      Attempted to set rounding mode to 9. Valid range is 0-6."
//! );
//! ```

use std::fmt;
use std::panic::Location as CallerLocation;

use thiserror::Error;

// =============================================================================
// Category & Kind
// =============================================================================

/// Broad class of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A precondition was violated by the caller.
    Logic,
    /// Something outside the caller's control failed.
    Runtime,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Logic => write!(f, "Logic"),
            ErrorCategory::Runtime => write!(f, "Runtime"),
        }
    }
}

/// The specific failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A rounding mode selector was out of range or unrecognized.
    InvalidRoundMode,
    /// An argument other than a mode selector could not be interpreted.
    InvalidArgument,
    /// A required resource could not be located.
    ResourceNotFound,
}

impl ErrorKind {
    /// Category this kind belongs to. Fixed per kind.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::InvalidRoundMode | ErrorKind::InvalidArgument => ErrorCategory::Logic,
            ErrorKind::ResourceNotFound => ErrorCategory::Runtime,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidRoundMode => write!(f, "Invalid Round Mode"),
            ErrorKind::InvalidArgument => write!(f, "Invalid Argument"),
            ErrorKind::ResourceNotFound => write!(f, "Resource Not Found"),
        }
    }
}

// =============================================================================
// Location
// =============================================================================

/// Source position where an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// Captures the location of the caller.
    #[track_caller]
    pub fn caller() -> Self {
        let loc = CallerLocation::caller();
        Location {
            file: loc.file(),
            line: loc.line(),
            column: loc.column(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

// =============================================================================
// MpaError
// =============================================================================

/// An error raised by MPA code.
///
/// Every error carries the same context: what kind of failure it was, a
/// human-readable message, and where it was raised. Constructors are
/// `#[track_caller]`, so the location points at the code that called them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("MPA {} Error: {kind}: {message}", .kind.category())]
pub struct MpaError {
    kind: ErrorKind,
    message: String,
    location: Location,
}

impl MpaError {
    /// Creates an error of the given kind at the caller's location.
    #[track_caller]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        MpaError {
            kind,
            message: message.into(),
            location: Location::caller(),
        }
    }

    #[track_caller]
    pub fn invalid_round_mode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRoundMode, message)
    }

    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    #[track_caller]
    pub fn resource_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResourceNotFound, message)
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// True for errors caused by invalid input from the caller.
    #[inline]
    pub fn is_logic(&self) -> bool {
        self.category() == ErrorCategory::Logic
    }

    /// True for errors caused by the environment.
    #[inline]
    pub fn is_runtime(&self) -> bool {
        self.category() == ErrorCategory::Runtime
    }

    /// The message without the category/kind prefix.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with MpaError.
pub type MpaResult<T> = Result<T, MpaError>;

// =============================================================================
// Unit Tests
// =============================================================================
