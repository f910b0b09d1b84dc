//! logtree demo.
//!
//! Loads a logging configuration (path from `LOGTREE_CONFIG`, optional),
//! applies it to the process-wide registry and logs a few records through
//! a small tree.
//!
//! ```text
//! LOGTREE_CONFIG=logging.toml RUST_LOG=logtree=debug logtree-demo
//! ```

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logtree::config::{apply_config, load_config};
use logtree::{global, Priority};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics about the tree itself go through tracing.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logtree=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let registry = global::global();

    if let Some(path) = std::env::var_os("LOGTREE_CONFIG").map(PathBuf::from) {
        let config = load_config(&path)?;
        apply_config(&config, registry)?;
        tracing::info!(path = %path.display(), "Configuration loaded");
    } else {
        tracing::info!("No LOGTREE_CONFIG set, using defaults");
    }

    registry.update("demo.worker", |l| l.set_level(Priority::Debug));

    registry.debug("demo.worker", "worker starting")?;
    registry.info("demo", "filtered by the default WARNING threshold")?;
    registry.warning("demo", "disk usage at 91%")?;

    let parsed: Result<u16, _> =
        registry.traplogging("demo.worker", Priority::Error, "parsing port", || {
            "80a".parse::<u16>()
        });
    if parsed.is_err() {
        registry.notice("demo.worker", "falling back to port 8080")?;
    }

    tracing::info!(loggers = ?registry.logger_names(), "Shutdown complete");
    Ok(())
}
