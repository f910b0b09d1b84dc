//! Hierarchical logger registry.
//!
//! Loggers live in a dot-separated namespace (`""` is the root, `"app"` its
//! child, `"app.db"` a grandchild). Each has a threshold and a list of
//! handlers. Logging at `"app.db"` passes the record through that logger's
//! threshold, then offers it to every handler from the root down to
//! `"app.db"` itself; each handler applies its own minimum priority.
//!
//! ```no_run
//! use logtree::{Logger, Priority, Registry, StreamHandler};
//!
//! let registry = Registry::new();
//! registry.update("app.db", |l: Logger| {
//!     l.set_level(Priority::Debug)
//!         .add_handler(StreamHandler::stdout(Priority::Info))
//! });
//! registry.info("app.db", "connected").ok();
//! ```

pub mod config;
pub mod dispatch;
pub mod global;
pub mod handler;
pub mod logger;
pub mod name;
pub mod observability;
pub mod priority;
pub mod registry;
pub mod trap;

pub use global::{
    alert_m, critical_m, debug_m, emergency_m, error_m, get_logger, get_root_logger, info_m, log_m,
    notice_m, save_global_logger, traplogging, update_global_logger, warning_m,
};
pub use handler::{Handler, HandlerError, SharedHandler, StreamHandler, TracingHandler};
pub use logger::Logger;
pub use name::{ancestor_chain, ROOT_LOGGER_NAME};
pub use priority::Priority;
pub use registry::Registry;
