//! Configuration schema definitions.
//!
//! Describes the desired shape of the logger tree. All types derive Serde
//! traits for deserialization from TOML or JSON files.

use serde::{Deserialize, Serialize};

/// Root of a logging configuration file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Settings for the root logger.
    pub root: RootConfig,

    /// Named loggers below the root.
    pub loggers: Vec<LoggerConfig>,
}

/// Root logger configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RootConfig {
    /// Threshold (debug, info, notice, warning, error, critical, alert, emergency).
    pub level: String,

    /// Handlers attached to the root, in order.
    pub handlers: Vec<HandlerConfig>,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            level: "warning".to_string(),
            handlers: vec![HandlerConfig {
                kind: HandlerKind::Stderr,
                level: default_handler_level(),
            }],
        }
    }
}

/// A named logger's configuration.
///
/// Omitted fields leave the logger's current value alone.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggerConfig {
    /// Dotted logger name (e.g., "app.db").
    pub name: String,

    /// Threshold override.
    #[serde(default)]
    pub level: Option<String>,

    /// Replacement handler list.
    #[serde(default)]
    pub handlers: Option<Vec<HandlerConfig>>,
}

/// A handler declaration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HandlerConfig {
    /// Which sink to build.
    pub kind: HandlerKind,

    /// Handler's own minimum priority (default: debug).
    #[serde(default = "default_handler_level")]
    pub level: String,
}

/// Sinks that can be declared from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerKind {
    /// Process standard error.
    Stderr,
    /// Process standard output.
    Stdout,
    /// Forward into `tracing` events.
    Tracing,
}

fn default_handler_level() -> String {
    "debug".to_string()
}
