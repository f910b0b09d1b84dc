//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Parse every priority name
//! - Reject empty names, empty dotted segments and duplicate loggers
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: LoggingConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is applied to any registry

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::LoggingConfig;
use crate::name::SEPARATOR;
use crate::priority::Priority;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A priority string could not be parsed.
    #[error("{field}: unknown priority {value:?}")]
    InvalidPriority { field: String, value: String },

    /// A `[[loggers]]` entry has an empty name.
    #[error("logger name is empty; configure the root under [root]")]
    EmptyName,

    /// A logger name contains an empty dotted segment.
    #[error("logger {0:?} has an empty name segment")]
    EmptySegment(String),

    /// The same logger is configured twice.
    #[error("logger {0:?} is configured more than once")]
    DuplicateLogger(String),
}

/// Parse a priority field, naming the field on failure.
pub fn parse_level(field: &str, value: &str) -> Result<Priority, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidPriority {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = parse_level("root.level", &config.root.level) {
        errors.push(e);
    }
    for (i, handler) in config.root.handlers.iter().enumerate() {
        if let Err(e) = parse_level(&format!("root.handlers[{}].level", i), &handler.level) {
            errors.push(e);
        }
    }

    let mut seen = HashSet::new();
    for logger in &config.loggers {
        if logger.name.is_empty() {
            errors.push(ValidationError::EmptyName);
            continue;
        }
        if logger.name.split(SEPARATOR).any(str::is_empty) {
            errors.push(ValidationError::EmptySegment(logger.name.clone()));
        }
        if !seen.insert(logger.name.as_str()) {
            errors.push(ValidationError::DuplicateLogger(logger.name.clone()));
        }
        if let Some(level) = &logger.level {
            if let Err(e) = parse_level(&format!("{}.level", logger.name), level) {
                errors.push(e);
            }
        }
        for (i, handler) in logger.handlers.iter().flatten().enumerate() {
            let field = format!("{}.handlers[{}].level", logger.name, i);
            if let Err(e) = parse_level(&field, &handler.level) {
                errors.push(e);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
