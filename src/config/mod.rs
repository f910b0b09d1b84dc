//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML/JSON)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggingConfig (validated, immutable)
//!     → apply.rs (Registry::update per configured logger)
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → sent over a channel; spawn_reload_task applies it
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - A rejected reload leaves the tree exactly as it was

pub mod apply;
pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use apply::apply_config;
pub use loader::{load_config, parse_config, ConfigError, ConfigFormat};
pub use schema::{HandlerConfig, HandlerKind, LoggerConfig, LoggingConfig, RootConfig};
pub use validation::{validate_config, ValidationError};
pub use watcher::{spawn_reload_task, ConfigWatcher};
