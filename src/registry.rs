//! Logger registry.
//!
//! # Responsibilities
//! - Map dotted names to `Logger` values
//! - Materialize missing loggers (and their ancestors) on first lookup
//! - Replace individual entries on save
//!
//! # Invariants
//! - The root (`""`) exists from construction onwards
//! - Every ancestor of a present logger is present too
//!
//! # Design Decisions
//! - Backed by a `DashMap`: per-shard locking, no global lock
//! - Lookups return clones; no map guard ever escapes this module, so
//!   handlers run with the registry unlocked
//! - Placeholder inserts race benignly: competing inserts are value-identical
//! - `save` is an unconditional overwrite, last writer wins

use std::sync::Arc;

use dashmap::DashMap;

use crate::handler::StreamHandler;
use crate::logger::Logger;
use crate::name::{ancestor_chain, ROOT_LOGGER_NAME};
use crate::observability::metrics;
use crate::priority::Priority;

/// Threshold of the root logger in a freshly constructed registry.
pub const DEFAULT_ROOT_LEVEL: Priority = Priority::Warning;

/// Minimum priority of the stderr handler seeded onto the root.
pub const DEFAULT_ROOT_HANDLER_LEVEL: Priority = Priority::Debug;

/// Registry of every logger known to the process (or to a test).
#[derive(Debug)]
pub struct Registry {
    loggers: DashMap<String, Logger>,
}

impl Registry {
    /// Create a registry whose root logs to stderr.
    pub fn new() -> Self {
        let root = Logger::new(ROOT_LOGGER_NAME, DEFAULT_ROOT_LEVEL)
            .add_shared_handler(Arc::new(StreamHandler::stderr(DEFAULT_ROOT_HANDLER_LEVEL)));
        Self::with_root(root)
    }

    /// Create a registry seeded with the given root.
    ///
    /// The root's name is forced to `""` whatever `root` says.
    pub fn with_root(root: Logger) -> Self {
        let root =
            Logger::new(ROOT_LOGGER_NAME, root.level()).set_handlers(root.handlers().to_vec());
        let loggers = DashMap::new();
        loggers.insert(ROOT_LOGGER_NAME.to_string(), root);
        Self { loggers }
    }

    /// Look up a logger, creating it and any missing ancestors first.
    pub fn get(&self, name: &str) -> Logger {
        // Clone out before touching any entry: a live read guard on the same
        // shard would deadlock the inserts below.
        let existing = self.loggers.get(name).map(|entry| entry.value().clone());
        if let Some(logger) = existing {
            return logger;
        }

        let mut created = 0usize;
        let mut found = None;
        for ancestor in ancestor_chain(name) {
            let placeholder_name = ancestor.clone();
            let entry = self.loggers.entry(ancestor).or_insert_with(|| {
                created += 1;
                Logger::placeholder(placeholder_name)
            });
            found = Some(entry.value().clone());
        }

        if created > 0 {
            tracing::debug!(logger = %name, created, "Materialized logger chain");
            metrics::record_loggers_created(created);
        }

        // The chain always ends with `name` itself.
        found.unwrap_or_else(|| Logger::placeholder(name))
    }

    /// The root logger.
    pub fn get_root(&self) -> Logger {
        self.get(ROOT_LOGGER_NAME)
    }

    /// Store `logger` under its own name, replacing any previous entry.
    ///
    /// Ancestors of a newly saved name are materialized so the hierarchy
    /// invariant holds even when `save` precedes any lookup.
    pub fn save(&self, logger: Logger) {
        let chain = ancestor_chain(logger.name());
        if let Some((_, ancestors)) = chain.split_last() {
            let mut created = 0usize;
            for ancestor in ancestors {
                if !self.loggers.contains_key(ancestor) {
                    self.loggers.entry(ancestor.clone()).or_insert_with(|| {
                        created += 1;
                        Logger::placeholder(ancestor.as_str())
                    });
                }
            }
            metrics::record_loggers_created(created);
        }
        self.loggers.insert(logger.name().to_string(), logger);
    }

    /// Read-modify-write of a single logger.
    ///
    /// The result is saved under its own name, like [`Registry::save`]. Not
    /// atomic: a concurrent `save` of the same name between the read and the
    /// write is overwritten.
    pub fn update<F>(&self, name: &str, transform: F)
    where
        F: FnOnce(Logger) -> Logger,
    {
        self.save(transform(self.get(name)));
    }

    /// Detach every handler from the named logger.
    pub fn remove_all_handlers(&self, name: &str) {
        self.update(name, Logger::remove_all_handlers);
    }

    /// Whether a logger with this exact name exists. Does not create it.
    pub fn contains(&self, name: &str) -> bool {
        self.loggers.contains_key(name)
    }

    /// Sorted snapshot of every known logger name.
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> =
            self.loggers.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of known loggers, root included.
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    /// Never true: the root is always present.
    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
