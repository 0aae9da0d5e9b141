//! # Logging
//!
//! Diagnostics are delivered to a [`Logger`] that the caller passes in.
//! There is no process-wide callback slot: code that wants to log takes a
//! logger as a parameter (usually `Option<&dyn Logger>`), and code that does
//! not care passes nothing.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  mpa_info!(logger, "rounded {}", x)                                     │
//! │        │   captures file!(), line!(), module_path!()                    │
//! │        ▼                                                                │
//! │  Logger::emit ──► enabled(level)? ──► Logger::log(&LogRecord)           │
//! │                                            │                            │
//! │            ┌───────────────────────────────┼─────────────────────┐      │
//! │            ▼                               ▼                     ▼      │
//! │     TracingLogger                   ConsoleLogger          from_fn(..)  │
//! │     tracing events                  "[INF] (file:line mod) msg"         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Custom Loggers
//! Any `Fn(&LogRecord) + Send + Sync` becomes a logger through [`from_fn`]:
//! ```rust
//! use std::sync::Mutex;
//! use mpa_core::{logging, mpa_warn};
//!
//! let seen = Mutex::new(Vec::new());
//! let logger = logging::from_fn(|record| {
//!     seen.lock().unwrap().push(format!("User{}: {}", record.level.tag(), record.message));
//! });
//!
//! mpa_warn!(logger, "value: {}", 123);
//! assert_eq!(seen.lock().unwrap()[0], "UserWRN: value: 123");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

// =============================================================================
// Log Level
// =============================================================================

/// Severity of a log record. Ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Fatal,
}

impl LogLevel {
    /// Three-letter tag used in rendered records.
    pub const fn tag(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRC",
            LogLevel::Debug => "DBG",
            LogLevel::Info => "INF",
            LogLevel::Warning => "WRN",
            LogLevel::Error => "ERR",
            LogLevel::Fatal => "FTL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warning => write!(f, "warning"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Fatal => write!(f, "fatal"),
        }
    }
}

// =============================================================================
// Log Record
// =============================================================================

/// One diagnostic event, borrowed for the duration of a `log` call.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub level: LogLevel,
    pub message: fmt::Arguments<'a>,
    pub file: &'static str,
    pub line: u32,
    pub module: &'static str,
}

impl LogRecord<'_> {
    /// Renders as `[INF] (src/round.rs:42 mpa_core::round) message`.
    pub fn render(&self) -> String {
        format!(
            "[{}] ({}:{} {}) {}",
            self.level.tag(),
            self.file,
            self.line,
            self.module,
            self.message
        )
    }
}

// =============================================================================
// Logger Trait
// =============================================================================

/// A sink for log records.
pub trait Logger: Send + Sync {
    /// Receives a record that passed [`Logger::enabled`].
    fn log(&self, record: &LogRecord<'_>);

    /// Returns false to skip formatting and delivery for `level`.
    fn enabled(&self, level: LogLevel) -> bool {
        let _ = level;
        true
    }

    /// Builds a record and delivers it if `level` is enabled. This is what
    /// the logging macros expand to.
    fn emit(
        &self,
        level: LogLevel,
        message: fmt::Arguments<'_>,
        file: &'static str,
        line: u32,
        module: &'static str,
    ) {
        if self.enabled(level) {
            self.log(&LogRecord {
                level,
                message,
                file,
                line,
                module,
            });
        }
    }
}

/// A logger backed by a closure. Built with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnLogger<F>(F);

/// Wraps a closure as a [`Logger`], the injected counterpart of a
/// user-supplied logging callback.
pub fn from_fn<F>(f: F) -> FnLogger<F>
where
    F: Fn(&LogRecord<'_>) + Send + Sync,
{
    FnLogger(f)
}

impl<F> Logger for FnLogger<F>
where
    F: Fn(&LogRecord<'_>) + Send + Sync,
{
    fn log(&self, record: &LogRecord<'_>) {
        (self.0)(record)
    }
}

impl<F> fmt::Debug for FnLogger<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLogger").finish_non_exhaustive()
    }
}

// =============================================================================
// Provided Loggers
// =============================================================================

/// Forwards records to `tracing` under the `mpa` target.
///
/// `Fatal` has no tracing counterpart and is emitted as an error event with
/// `fatal = true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, r: &LogRecord<'_>) {
        match r.level {
            LogLevel::Trace => {
                tracing::trace!(target: "mpa", file = r.file, line = r.line, module = r.module, "{}", r.message)
            }
            LogLevel::Debug => {
                tracing::debug!(target: "mpa", file = r.file, line = r.line, module = r.module, "{}", r.message)
            }
            LogLevel::Info => {
                tracing::info!(target: "mpa", file = r.file, line = r.line, module = r.module, "{}", r.message)
            }
            LogLevel::Warning => {
                tracing::warn!(target: "mpa", file = r.file, line = r.line, module = r.module, "{}", r.message)
            }
            LogLevel::Error => {
                tracing::error!(target: "mpa", file = r.file, line = r.line, module = r.module, "{}", r.message)
            }
            LogLevel::Fatal => {
                tracing::error!(target: "mpa", fatal = true, file = r.file, line = r.line, module = r.module, "{}", r.message)
            }
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Trace => tracing::enabled!(target: "mpa", tracing::Level::TRACE),
            LogLevel::Debug => tracing::enabled!(target: "mpa", tracing::Level::DEBUG),
            LogLevel::Info => tracing::enabled!(target: "mpa", tracing::Level::INFO),
            LogLevel::Warning => tracing::enabled!(target: "mpa", tracing::Level::WARN),
            LogLevel::Error | LogLevel::Fatal => {
                tracing::enabled!(target: "mpa", tracing::Level::ERROR)
            }
        }
    }
}

/// Writes rendered records to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub const fn new(min_level: LogLevel) -> Self {
        ConsoleLogger { min_level }
    }

    pub const fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, record: &LogRecord<'_>) {
        // a failed diagnostic write is not worth surfacing
        let _ = writeln!(std::io::stderr().lock(), "{}", record.render());
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

// =============================================================================
// Macros
// =============================================================================

/// Logs a formatted message at an explicit level.
///
/// `$logger` is anything with a `Logger` impl reachable by method call:
/// a logger value, a reference, or a `&dyn Logger`.
#[macro_export]
macro_rules! mpa_log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::logging::Logger as _;
        ($logger).emit(
            $level,
            ::std::format_args!($($arg)+),
            ::std::file!(),
            ::std::line!(),
            ::std::module_path!(),
        )
    }};
}

#[macro_export]
macro_rules! mpa_trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::mpa_log!($logger, $crate::logging::LogLevel::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! mpa_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::mpa_log!($logger, $crate::logging::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! mpa_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::mpa_log!($logger, $crate::logging::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! mpa_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::mpa_log!($logger, $crate::logging::LogLevel::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! mpa_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::mpa_log!($logger, $crate::logging::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! mpa_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::mpa_log!($logger, $crate::logging::LogLevel::Fatal, $($arg)+)
    };
}
