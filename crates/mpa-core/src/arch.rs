//! # Target Architecture
//!
//! Which ARM revision the crate was compiled for, resolved once at build
//! time into [`Architecture::TARGET`]. Call sites branch on an enum value
//! instead of scattering `#[cfg]` attributes.
//!
//! ## Detection Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  target_arch   target_feature        Architecture                       │
//! │  ───────────   ───────────────────   ────────────                       │
//! │  aarch64       sve2 (ARMv9 baseline) ArmV9                              │
//! │  aarch64       -                     ArmV8                              │
//! │  arm           v7                    ArmV7                              │
//! │  anything else                       Unknown                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ```rust
//! use mpa_core::Architecture;
//!
//! let arch = Architecture::current();
//! if arch.is_supported() {
//!     assert!(arch.is_arm());
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ARM revision known to MPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Architecture {
    /// 64-bit ARMv9-A or newer.
    ArmV9,
    /// 64-bit ARMv8-A.
    ArmV8,
    /// 32-bit ARMv7-A.
    ArmV7,
    /// Any other architecture, or an ARM revision MPA does not know.
    Unknown,
}

impl Architecture {
    /// The architecture this build targets.
    pub const TARGET: Architecture = Architecture::detect();

    const fn detect() -> Self {
        if cfg!(all(target_arch = "aarch64", target_feature = "sve2")) {
            Architecture::ArmV9
        } else if cfg!(target_arch = "aarch64") {
            Architecture::ArmV8
        } else if cfg!(all(target_arch = "arm", target_feature = "v7")) {
            Architecture::ArmV7
        } else {
            Architecture::Unknown
        }
    }

    /// Same as [`Architecture::TARGET`].
    #[inline]
    pub const fn current() -> Self {
        Self::TARGET
    }

    /// Applies the detection rules to an arbitrary target description,
    /// e.g. one reported by another machine.
    pub fn from_target(target_arch: &str, target_features: &[&str]) -> Self {
        let has = |feature: &str| target_features.iter().any(|f| *f == feature);
        match target_arch {
            "aarch64" if has("sve2") => Architecture::ArmV9,
            "aarch64" => Architecture::ArmV8,
            "arm" if has("v7") => Architecture::ArmV7,
            _ => Architecture::Unknown,
        }
    }

    pub const fn is_arm(&self) -> bool {
        !matches!(self, Architecture::Unknown)
    }

    pub const fn is_64_bit(&self) -> bool {
        matches!(self, Architecture::ArmV9 | Architecture::ArmV8)
    }

    /// Returns true if MPA has a dedicated code path for this target.
    pub const fn is_supported(&self) -> bool {
        self.is_arm()
    }

    /// One-line human description.
    pub const fn description(&self) -> &'static str {
        match self {
            Architecture::ArmV9 => "It is a ARMv9 architecture.",
            Architecture::ArmV8 => "It is a ARMv8 architecture.",
            Architecture::ArmV7 => "It is a ARMv7 architecture.",
            Architecture::Unknown => "It is a non supported MPA architecture.",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Architecture::ArmV9 => write!(f, "armv9"),
            Architecture::ArmV8 => write!(f, "armv8"),
            Architecture::ArmV7 => write!(f, "armv7"),
            Architecture::Unknown => write!(f, "unknown"),
        }
    }
}
