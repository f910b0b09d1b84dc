//! Logger nodes.
//!
//! # Responsibilities
//! - Hold a logger's name, threshold and attached handlers
//! - Provide pure transforms that return a modified copy
//!
//! # Design Decisions
//! - A `Logger` is a value: transforms consume `self` and return a new node
//! - Nothing here touches the registry; commit changes with `Registry::save`
//! - Handlers compare by identity (`Arc::ptr_eq`), so two nodes are equal
//!   only if they share the same handler instances in the same order

use std::fmt;
use std::sync::Arc;

use crate::handler::{Handler, SharedHandler};
use crate::priority::Priority;

/// Threshold given to loggers created implicitly on first access.
pub const DEFAULT_LEVEL: Priority = Priority::Warning;

/// A named node in the logger hierarchy.
#[derive(Clone)]
pub struct Logger {
    name: String,
    level: Priority,
    handlers: Vec<SharedHandler>,
}

impl Logger {
    /// Create a logger with an explicit level and no handlers.
    pub fn new(name: impl Into<String>, level: Priority) -> Self {
        Self {
            name: name.into(),
            level,
            handlers: Vec::new(),
        }
    }

    /// Placeholder node: default level, no handlers.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_LEVEL)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The logger's own threshold.
    pub fn level(&self) -> Priority {
        self.level
    }

    /// Handlers attached directly to this logger, most recently added first.
    pub fn handlers(&self) -> &[SharedHandler] {
        &self.handlers
    }

    /// Replace the threshold.
    pub fn set_level(self, level: Priority) -> Self {
        Self { level, ..self }
    }

    /// Replace the handler list wholesale.
    pub fn set_handlers<I>(self, handlers: I) -> Self
    where
        I: IntoIterator<Item = SharedHandler>,
    {
        Self {
            handlers: handlers.into_iter().collect(),
            ..self
        }
    }

    /// Prepend a handler.
    pub fn add_handler<H: Handler + 'static>(self, handler: H) -> Self {
        self.add_shared_handler(Arc::new(handler))
    }

    /// Prepend an already shared handler.
    pub fn add_shared_handler(mut self, handler: SharedHandler) -> Self {
        self.handlers.insert(0, handler);
        self
    }

    /// Drop every attached handler; the logger then relies on its ancestors.
    pub fn remove_all_handlers(self) -> Self {
        Self {
            handlers: Vec::new(),
            ..self
        }
    }

    /// Whether this logger's own gate lets `priority` through.
    pub fn is_enabled_for(&self, priority: Priority) -> bool {
        priority >= self.level
    }
}

impl PartialEq for Logger {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.level == other.level
            && self.handlers.len() == other.handlers.len()
            && self
                .handlers
                .iter()
                .zip(other.handlers.iter())
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("handlers", &self.handlers)
            .finish()
    }
}
