//! Failure trapping.
//!
//! Runs a unit of work and, if it fails, logs `"<prefix>: <failure>"` through
//! a named logger before handing the original failure back to the caller.
//!
//! # Design Decisions
//! - The error value is returned untouched; nothing is wrapped or replaced
//! - A handler error raised while logging the failure is reported through
//!   `tracing` and dropped so it cannot mask the original failure
//! - Panics get the same treatment via `trap_panics`, then keep unwinding

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::{self, UnwindSafe};

use crate::observability::metrics;
use crate::priority::Priority;
use crate::registry::Registry;

impl Registry {
    /// Run `action`, logging any error it returns before passing it on.
    pub fn traplogging<T, E, F>(
        &self,
        name: &str,
        priority: Priority,
        prefix: &str,
        action: F,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: fmt::Display,
    {
        action().map_err(|err| {
            self.log_trapped(name, priority, prefix, &err);
            err
        })
    }

    /// Await `action`, logging any error it resolves to before passing it on.
    pub async fn traplogging_async<T, E, Fut>(
        &self,
        name: &str,
        priority: Priority,
        prefix: &str,
        action: Fut,
    ) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        action.await.map_err(|err| {
            self.log_trapped(name, priority, prefix, &err);
            err
        })
    }

    /// Run `action`, logging a panic's payload before resuming the unwind.
    pub fn trap_panics<T, F>(&self, name: &str, priority: Priority, prefix: &str, action: F) -> T
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(action) {
            Ok(value) => value,
            Err(payload) => {
                self.log_trapped(name, priority, prefix, &panic_message(payload.as_ref()));
                panic::resume_unwind(payload)
            }
        }
    }

    fn log_trapped(
        &self,
        name: &str,
        priority: Priority,
        prefix: &str,
        failure: &dyn fmt::Display,
    ) {
        metrics::record_trapped_failure();
        let message = format!("{}: {}", prefix, failure);
        if let Err(e) = self.log(name, priority, &message) {
            tracing::warn!(logger = %name, error = %e, "Failed to log trapped failure");
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{Handler, HandlerError, StreamHandler};
    use crate::logger::Logger;
    use std::sync::Arc;

    fn capture() -> (Registry, Arc<StreamHandler<Vec<u8>>>) {
        let sink = Arc::new(StreamHandler::new(Vec::new(), Priority::Debug));
        let root = Logger::new("", Priority::Debug).add_shared_handler(sink.clone());
        let registry = Registry::with_root(root);
        (registry, sink)
    }

    fn written(sink: &StreamHandler<Vec<u8>>) -> String {
        sink.inspect(|buf| String::from_utf8_lossy(buf).into_owned()).unwrap()
    }

    #[derive(Debug, PartialEq)]
    struct Boom(u32);

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom #{}", self.0)
        }
    }

    #[test]
    fn test_success_passes_through_silently() {
        let (registry, sink) = capture();
        let value: Result<u32, Boom> =
            registry.traplogging("L", Priority::Error, "ctx", || Ok(7));
        assert_eq!(value, Ok(7));
        assert_eq!(written(&sink), "");
    }

    #[test]
    fn test_failure_is_logged_once_and_returned_unchanged() {
        let (registry, sink) = capture();
        let result: Result<(), Boom> =
            registry.traplogging("L", Priority::Error, "ctx", || Err(Boom(3)));

        assert_eq!(result, Err(Boom(3)));
        assert_eq!(written(&sink), "ctx: boom #3\n");
    }

    #[test]
    fn test_failure_below_logger_level_is_still_returned() {
        let (registry, sink) = capture();
        registry.save(Logger::new("L", Priority::Critical));

        let result: Result<(), Boom> =
            registry.traplogging("L", Priority::Error, "ctx", || Err(Boom(1)));

        assert_eq!(result, Err(Boom(1)));
        assert_eq!(written(&sink), "");
    }

    #[test]
    fn test_logging_failure_does_not_mask_original() {
        #[derive(Debug)]
        struct Broken;
        impl Handler for Broken {
            fn level(&self) -> Priority {
                Priority::Debug
            }
            fn emit(&self, _: &str, _: Priority, _: &str) -> Result<(), HandlerError> {
                Err(HandlerError::Poisoned)
            }
        }

        let registry = Registry::with_root(Logger::new("", Priority::Debug).add_handler(Broken));
        let result: Result<(), Boom> =
            registry.traplogging("L", Priority::Error, "ctx", || Err(Boom(9)));
        assert_eq!(result, Err(Boom(9)));
    }

    #[tokio::test]
    async fn test_async_failure_is_logged() {
        let (registry, sink) = capture();
        let result: Result<(), Boom> = registry
            .traplogging_async("jobs", Priority::Critical, "worker", async { Err(Boom(5)) })
            .await;

        assert_eq!(result, Err(Boom(5)));
        assert_eq!(written(&sink), "worker: boom #5\n");
    }

    #[test]
    fn test_panic_is_logged_then_resumed() {
        let (registry, sink) = capture();

        let outcome = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            registry.trap_panics("L", Priority::Alert, "task", || panic!("exploded"))
        }));

        assert!(outcome.is_err());
        assert_eq!(written(&sink), "task: exploded\n");
    }

    #[test]
    fn test_panic_free_action_returns_value() {
        let (registry, _sink) = capture();
        assert_eq!(registry.trap_panics("L", Priority::Alert, "task", || 42), 42);
    }
}
