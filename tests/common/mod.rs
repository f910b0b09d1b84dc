//! Shared utilities for integration tests.

use std::sync::{Arc, Mutex};

use logtree::{Handler, HandlerError, Logger, Priority, Registry};

/// One captured record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub handler: &'static str,
    pub logger: String,
    pub priority: Priority,
    pub message: String,
}

/// Journal shared by every handler of a test.
pub type Journal = Arc<Mutex<Vec<Record>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

/// Handler that records what it emits into a shared journal.
#[derive(Debug)]
pub struct RecordingHandler {
    tag: &'static str,
    level: Priority,
    journal: Journal,
}

impl RecordingHandler {
    pub fn new(tag: &'static str, level: Priority, journal: &Journal) -> Self {
        Self {
            tag,
            level,
            journal: journal.clone(),
        }
    }
}

impl Handler for RecordingHandler {
    fn level(&self) -> Priority {
        self.level
    }

    fn emit(&self, logger: &str, priority: Priority, message: &str) -> Result<(), HandlerError> {
        self.journal.lock().map_err(|_| HandlerError::Poisoned)?.push(Record {
            handler: self.tag,
            logger: logger.to_string(),
            priority,
            message: message.to_string(),
        });
        Ok(())
    }
}

/// Registry whose root has no handlers, so nothing reaches stderr.
#[allow(dead_code)]
pub fn silent_registry(root_level: Priority) -> Registry {
    Registry::with_root(Logger::new("", root_level))
}

/// Tags of the handlers that fired, in order.
#[allow(dead_code)]
pub fn fired(journal: &Journal) -> Vec<&'static str> {
    journal.lock().unwrap().iter().map(|r| r.handler).collect()
}
