//! Record dispatch.
//!
//! # Data Flow
//! ```text
//! log(name, priority, message)
//!     → registry.get(name)                       (creates the chain if new)
//!     → priority < logger.level ?  → stop
//!     → effective handlers:
//!         handlers("") ++ handlers("a") ++ ... ++ handlers(parent) ++ handlers(name)
//!     → for each handler: handler.handle(name, priority, message)
//! ```
//!
//! # Design Decisions
//! - Only the target logger's threshold gates dispatch; ancestor thresholds
//!   are never consulted
//! - Each handler applies its own minimum priority independently
//! - The handler list is collected first, then run with the registry unlocked
//! - The first handler error aborts the remaining handlers and is returned

use crate::handler::{HandlerError, SharedHandler};
use crate::name::ancestor_chain;
use crate::observability::metrics;
use crate::priority::Priority;
use crate::registry::Registry;

impl Registry {
    /// Handlers a record logged at `name` would be offered to, root first,
    /// the logger's own handlers last.
    pub fn effective_handlers(&self, name: &str) -> Vec<SharedHandler> {
        let logger = self.get(name);
        let mut handlers = self.ancestor_handlers(name);
        handlers.extend(logger.handlers().iter().cloned());
        handlers
    }

    /// Handlers of every proper ancestor of `name`, root first.
    fn ancestor_handlers(&self, name: &str) -> Vec<SharedHandler> {
        let mut handlers = Vec::new();
        if let Some((_, ancestors)) = ancestor_chain(name).split_last() {
            for ancestor in ancestors {
                handlers.extend(self.get(ancestor).handlers().iter().cloned());
            }
        }
        handlers
    }

    /// Log `message` at `priority` through the logger called `name`.
    pub fn log(&self, name: &str, priority: Priority, message: &str) -> Result<(), HandlerError> {
        let logger = self.get(name);
        if !logger.is_enabled_for(priority) {
            metrics::record_dispatch(false);
            return Ok(());
        }
        metrics::record_dispatch(true);

        let mut handlers = self.ancestor_handlers(name);
        handlers.extend(logger.handlers().iter().cloned());

        for handler in &handlers {
            handler.handle(name, priority, message)?;
        }
        Ok(())
    }

    pub fn debug(&self, name: &str, message: &str) -> Result<(), HandlerError> {
        self.log(name, Priority::Debug, message)
    }

    pub fn info(&self, name: &str, message: &str) -> Result<(), HandlerError> {
        self.log(name, Priority::Info, message)
    }

    pub fn notice(&self, name: &str, message: &str) -> Result<(), HandlerError> {
        self.log(name, Priority::Notice, message)
    }

    pub fn warning(&self, name: &str, message: &str) -> Result<(), HandlerError> {
        self.log(name, Priority::Warning, message)
    }

    pub fn error(&self, name: &str, message: &str) -> Result<(), HandlerError> {
        self.log(name, Priority::Error, message)
    }

    pub fn critical(&self, name: &str, message: &str) -> Result<(), HandlerError> {
        self.log(name, Priority::Critical, message)
    }

    pub fn alert(&self, name: &str, message: &str) -> Result<(), HandlerError> {
        self.log(name, Priority::Alert, message)
    }

    pub fn emergency(&self, name: &str, message: &str) -> Result<(), HandlerError> {
        self.log(name, Priority::Emergency, message)
    }
}
