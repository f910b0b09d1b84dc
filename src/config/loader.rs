//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LoggingConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// On-disk formats understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from the file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<LoggingConfig, ConfigError> {
    let config: LoggingConfig = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate configuration from a TOML or JSON file.
pub fn load_config(path: &Path) -> Result<LoggingConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, ConfigFormat::from_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::HandlerKind;
    use std::io::Write;

    const SAMPLE: &str = r#"
[root]
level = "error"
handlers = [{ kind = "stderr" }]

[[loggers]]
name = "app.db"
level = "debug"
handlers = [{ kind = "stdout", level = "info" }]

[[loggers]]
name = "app.net"
"#;

    #[test]
    fn test_parse_toml() {
        let config = parse_config(SAMPLE, ConfigFormat::Toml).unwrap();

        assert_eq!(config.root.level, "error");
        assert_eq!(config.root.handlers[0].kind, HandlerKind::Stderr);
        assert_eq!(config.root.handlers[0].level, "debug");
        assert_eq!(config.loggers.len(), 2);
        assert_eq!(config.loggers[0].level.as_deref(), Some("debug"));
        assert!(config.loggers[1].level.is_none());
        assert!(config.loggers[1].handlers.is_none());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("", ConfigFormat::Toml).unwrap();
        assert_eq!(config.root.level, "warning");
        assert_eq!(config.root.handlers.len(), 1);
        assert!(config.loggers.is_empty());
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "root": {"level": "info", "handlers": []},
            "loggers": [{"name": "svc", "level": "alert"}]
        }"#;
        let config = parse_config(json, ConfigFormat::Json).unwrap();
        assert_eq!(config.root.level, "info");
        assert!(config.root.handlers.is_empty());
        assert_eq!(config.loggers[0].name, "svc");
    }

    #[test]
    fn test_validation_errors_surface() {
        let err = parse_config("[root]\nlevel = \"loud\"\n", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
        assert!(err.to_string().contains("root.level"));
    }

    #[test]
    fn test_syntax_error() {
        let err = parse_config("[root", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_from_file_picks_format_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"loggers": [{{"name": "disk"}}]}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.loggers[0].name, "disk");
        assert_eq!(ConfigFormat::from_path(Path::new("x.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("x.JSON")), ConfigFormat::Json);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/logtree.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
