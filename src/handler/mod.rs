//! Output handlers.
//!
//! # Data Flow
//! ```text
//! dispatch (logger gate passed)
//!     → Handler::handle(logger, priority, message)
//!         → priority < handler.level()  → nothing
//!         → otherwise                   → Handler::emit (write, forward, ...)
//! ```
//!
//! # Design Decisions
//! - Every handler owns its own minimum priority (the second gate)
//! - Handlers are shared as `Arc<dyn Handler>` so one sink can hang off many loggers
//! - Emit failures are typed and returned; the dispatcher decides what to do with them

pub mod bridge;
pub mod stream;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::priority::Priority;

pub use bridge::TracingHandler;
pub use stream::StreamHandler;

/// Shared, type-erased handler as stored on a logger.
pub type SharedHandler = Arc<dyn Handler>;

/// Errors raised while emitting a record.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Writing to the underlying sink failed.
    #[error("handler I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A previous writer panicked while holding the sink lock.
    #[error("handler lock poisoned")]
    Poisoned,

    /// The handler was closed and no longer accepts records.
    #[error("handler is closed")]
    Closed,
}

/// A sink that conditionally emits `(priority, message)` records.
pub trait Handler: Send + Sync + fmt::Debug {
    /// Minimum priority this handler acts on.
    fn level(&self) -> Priority;

    /// Unconditionally emit a record. Called by [`Handler::handle`] once the
    /// handler's own gate has passed.
    fn emit(&self, logger: &str, priority: Priority, message: &str) -> Result<(), HandlerError>;

    /// Emit the record if `priority` meets this handler's level.
    fn handle(&self, logger: &str, priority: Priority, message: &str) -> Result<(), HandlerError> {
        if priority < self.level() {
            return Ok(());
        }
        self.emit(logger, priority, message)
    }

    /// Release the sink. Further records may fail with [`HandlerError::Closed`].
    fn close(&self) -> Result<(), HandlerError> {
        Ok(())
    }
}
