//! Message priorities.
//!
//! # Ordering
//! ```text
//! DEBUG < INFO < NOTICE < WARNING < ERROR < CRITICAL < ALERT < EMERGENCY
//! ```
//!
//! # Design Decisions
//! - Derived `Ord` follows declaration order, so thresholds compare directly
//! - Parsing is case-insensitive and accepts the usual short aliases
//! - Displayed as the uppercase name; config files carry levels as strings
//!   and go through `FromStr`

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Urgency of a log record, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Debug messages.
    Debug,
    /// Information.
    Info,
    /// Normal runtime conditions.
    Notice,
    /// General warnings.
    Warning,
    /// General errors.
    Error,
    /// Severe situations.
    Critical,
    /// Take immediate action.
    Alert,
    /// System is unusable.
    Emergency,
}

impl Priority {
    /// Every priority, lowest to highest.
    pub const ALL: [Priority; 8] = [
        Priority::Debug,
        Priority::Info,
        Priority::Notice,
        Priority::Warning,
        Priority::Error,
        Priority::Critical,
        Priority::Alert,
        Priority::Emergency,
    ];

    /// Uppercase name, as printed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Debug => "DEBUG",
            Priority::Info => "INFO",
            Priority::Notice => "NOTICE",
            Priority::Warning => "WARNING",
            Priority::Error => "ERROR",
            Priority::Critical => "CRITICAL",
            Priority::Alert => "ALERT",
            Priority::Emergency => "EMERGENCY",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known priority.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority: {0:?}")]
pub struct ParsePriorityError(pub String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Priority::Debug),
            "info" => Ok(Priority::Info),
            "notice" => Ok(Priority::Notice),
            "warning" | "warn" => Ok(Priority::Warning),
            "error" | "err" => Ok(Priority::Error),
            "critical" | "crit" => Ok(Priority::Critical),
            "alert" => Ok(Priority::Alert),
            "emergency" | "emerg" => Ok(Priority::Emergency),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}
