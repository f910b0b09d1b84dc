//! Applying a configuration to a registry.
//!
//! Each configured logger is rewritten with `Registry::update`, so loggers
//! the file does not mention keep whatever they had.

use std::sync::Arc;

use crate::config::loader::ConfigError;
use crate::config::schema::{HandlerConfig, HandlerKind, LoggingConfig};
use crate::config::validation::{parse_level, validate_config, ValidationError};
use crate::handler::{SharedHandler, StreamHandler, TracingHandler};
use crate::name::ROOT_LOGGER_NAME;
use crate::registry::Registry;

/// Build a handler from its declaration.
pub fn build_handler(
    config: &HandlerConfig,
    field: &str,
) -> Result<SharedHandler, ValidationError> {
    let level = parse_level(field, &config.level)?;
    let handler: SharedHandler = match config.kind {
        HandlerKind::Stderr => Arc::new(StreamHandler::stderr(level)),
        HandlerKind::Stdout => Arc::new(StreamHandler::stdout(level)),
        HandlerKind::Tracing => Arc::new(TracingHandler::new(level)),
    };
    Ok(handler)
}

fn build_handlers(
    configs: &[HandlerConfig],
    owner: &str,
) -> Result<Vec<SharedHandler>, ValidationError> {
    configs
        .iter()
        .enumerate()
        .map(|(i, h)| build_handler(h, &format!("{}.handlers[{}].level", owner, i)))
        .collect()
}

/// Validate `config` and write it into `registry`.
///
/// Nothing is written unless the whole configuration is valid.
pub fn apply_config(config: &LoggingConfig, registry: &Registry) -> Result<(), ConfigError> {
    validate_config(config).map_err(ConfigError::Validation)?;
    let invalid = |e: ValidationError| ConfigError::Validation(vec![e]);

    let root_level = parse_level("root.level", &config.root.level).map_err(invalid)?;
    let root_handlers = build_handlers(&config.root.handlers, "root").map_err(invalid)?;

    let mut planned = Vec::with_capacity(config.loggers.len());
    for logger in &config.loggers {
        let level = match &logger.level {
            Some(level) => {
                let field = format!("{}.level", logger.name);
                Some(parse_level(&field, level).map_err(invalid)?)
            }
            None => None,
        };
        let handlers = match &logger.handlers {
            Some(handlers) => Some(build_handlers(handlers, &logger.name).map_err(invalid)?),
            None => None,
        };
        planned.push((logger.name.as_str(), level, handlers));
    }

    registry.update(ROOT_LOGGER_NAME, |root| {
        root.set_level(root_level).set_handlers(root_handlers)
    });
    for (name, level, handlers) in planned {
        registry.update(name, |mut logger| {
            if let Some(level) = level {
                logger = logger.set_level(level);
            }
            if let Some(handlers) = handlers {
                logger = logger.set_handlers(handlers);
            }
            logger
        });
    }

    tracing::info!(loggers = config.loggers.len(), "Logging configuration applied");
    Ok(())
}
