//! Process-wide registry and the free-function call surface.
//!
//! # Lifecycle
//! ```text
//! first call to global() (or an explicit init())
//!     → Registry::new()  (root at WARNING, stderr handler)
//!     → lives until process exit
//! ```
//!
//! Code that wants isolation (tests, embedded use) should own a `Registry`
//! directly; everything here is a thin wrapper over the shared instance.

use std::fmt;
use std::sync::OnceLock;

use crate::handler::HandlerError;
use crate::logger::Logger;
use crate::priority::Priority;
use crate::registry::Registry;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Install `registry` as the process-wide instance.
///
/// Returns the rejected registry if one was already installed.
pub fn init(registry: Registry) -> Result<(), Registry> {
    GLOBAL.set(registry)
}

/// The process-wide registry, constructed with defaults on first use.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(|| {
        tracing::debug!("Initializing global logger registry");
        Registry::new()
    })
}

pub fn get_logger(name: &str) -> Logger {
    global().get(name)
}

pub fn get_root_logger() -> Logger {
    global().get_root()
}

pub fn save_global_logger(logger: Logger) {
    global().save(logger)
}

pub fn update_global_logger<F>(name: &str, transform: F)
where
    F: FnOnce(Logger) -> Logger,
{
    global().update(name, transform)
}

pub fn remove_all_handlers(name: &str) {
    global().remove_all_handlers(name)
}

pub fn log_m(name: &str, priority: Priority, message: &str) -> Result<(), HandlerError> {
    global().log(name, priority, message)
}

pub fn debug_m(name: &str, message: &str) -> Result<(), HandlerError> {
    global().debug(name, message)
}

pub fn info_m(name: &str, message: &str) -> Result<(), HandlerError> {
    global().info(name, message)
}

pub fn notice_m(name: &str, message: &str) -> Result<(), HandlerError> {
    global().notice(name, message)
}

pub fn warning_m(name: &str, message: &str) -> Result<(), HandlerError> {
    global().warning(name, message)
}

pub fn error_m(name: &str, message: &str) -> Result<(), HandlerError> {
    global().error(name, message)
}

pub fn critical_m(name: &str, message: &str) -> Result<(), HandlerError> {
    global().critical(name, message)
}

pub fn alert_m(name: &str, message: &str) -> Result<(), HandlerError> {
    global().alert(name, message)
}

pub fn emergency_m(name: &str, message: &str) -> Result<(), HandlerError> {
    global().emergency(name, message)
}

/// [`Registry::traplogging`] against the global registry.
pub fn traplogging<T, E, F>(name: &str, priority: Priority, prefix: &str, action: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: fmt::Display,
{
    global().traplogging(name, priority, prefix, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test touches its own subtree; the global registry is shared by the
    // whole test binary.

    #[test]
    fn test_global_root_is_seeded() {
        let root = get_root_logger();
        assert_eq!(root.name(), "");
        assert!(global().contains(""));
    }

    #[test]
    fn test_set_level_save_and_reload() {
        let logger = get_logger("global_tests.level").set_level(Priority::Debug);
        let handlers_before = logger.handlers().len();
        save_global_logger(logger);

        let reloaded = get_logger("global_tests.level");
        assert_eq!(reloaded.level(), Priority::Debug);
        assert_eq!(reloaded.handlers().len(), handlers_before);
    }

    #[test]
    fn test_update_global_logger() {
        update_global_logger("global_tests.update", |l| l.set_level(Priority::Emergency));
        assert_eq!(get_logger("global_tests.update").level(), Priority::Emergency);
        // Filtered at the logger gate, so no handler ever runs.
        assert!(critical_m("global_tests.update", "quiet").is_ok());
    }

    #[test]
    fn test_init_after_first_use_is_rejected() {
        global();
        assert!(init(Registry::new()).is_err());
    }
}
