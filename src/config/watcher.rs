//! Configuration file watcher for hot reload.

use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::apply::apply_config;
use crate::config::loader::load_config;
use crate::config::schema::LoggingConfig;
use crate::observability::metrics;
use crate::registry::Registry;

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<LoggingConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<LoggingConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file in a background thread.
    ///
    /// Keep the returned watcher alive for as long as reloads are wanted.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Logging config change detected, reloading...");
                        match load_config(&path) {
                            Ok(new_config) => {
                                deliver(&tx, new_config);
                            }
                            Err(e) => {
                                metrics::record_config_reload("invalid");
                                tracing::error!(
                                    error = %e,
                                    "Failed to reload logging config; keeping current configuration"
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Logging config watcher started");
        Ok(watcher)
    }
}

/// Hand a reloaded config to the receiver. Returns false if it is gone.
fn deliver(tx: &mpsc::UnboundedSender<LoggingConfig>, config: LoggingConfig) -> bool {
    match tx.send(config) {
        Ok(()) => true,
        Err(_) => {
            metrics::record_config_reload("dropped");
            tracing::warn!("Logging config receiver closed; dropping reloaded configuration");
            false
        }
    }
}

/// Apply every configuration received on `updates` to `registry`.
///
/// The task ends when all senders are dropped.
pub fn spawn_reload_task<R>(
    registry: R,
    mut updates: mpsc::UnboundedReceiver<LoggingConfig>,
) -> JoinHandle<()>
where
    R: Deref<Target = Registry> + Send + 'static,
{
    tokio::spawn(async move {
        while let Some(config) = updates.recv().await {
            match apply_config(&config, &registry) {
                Ok(()) => metrics::record_config_reload("applied"),
                Err(e) => {
                    metrics::record_config_reload("rejected");
                    tracing::error!(error = %e, "Rejected logging config update");
                }
            }
        }
        tracing::debug!("Logging config reload task finished");
    })
}
