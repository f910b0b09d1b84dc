//! Handler forwarding records into `tracing` events.
//!
//! Lets a logger tree feed whatever subscriber the host process installed.

use crate::handler::{Handler, HandlerError};
use crate::priority::Priority;

/// Re-emits accepted records as `tracing` events with target `logtree`.
#[derive(Debug, Clone)]
pub struct TracingHandler {
    level: Priority,
}

impl TracingHandler {
    pub fn new(level: Priority) -> Self {
        Self { level }
    }
}

impl Handler for TracingHandler {
    fn level(&self) -> Priority {
        self.level
    }

    fn emit(&self, logger: &str, priority: Priority, message: &str) -> Result<(), HandlerError> {
        match priority {
            Priority::Debug => {
                tracing::debug!(
                    target: "logtree",
                    logger = %logger,
                    priority = %priority,
                    "{}",
                    message
                )
            }
            Priority::Info | Priority::Notice => {
                tracing::info!(
                    target: "logtree",
                    logger = %logger,
                    priority = %priority,
                    "{}",
                    message
                )
            }
            Priority::Warning => {
                tracing::warn!(
                    target: "logtree",
                    logger = %logger,
                    priority = %priority,
                    "{}",
                    message
                )
            }
            Priority::Error | Priority::Critical | Priority::Alert | Priority::Emergency => {
                tracing::error!(
                    target: "logtree",
                    logger = %logger,
                    priority = %priority,
                    "{}",
                    message
                )
            }
        }
        Ok(())
    }
}
