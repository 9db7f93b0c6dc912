//! Configuration loading and semantic validation.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::env::apply_env;
use crate::config::schema::ServerConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// A single semantic validation failure.
#[derive(Debug, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve the effective configuration.
///
/// Reads the optional TOML file, applies the environment overlay, then runs
/// semantic checks. With no file, defaults plus the environment are used.
pub fn load_config(path: Option<&Path>) -> Result<ServerConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ServerConfig::default(),
    };

    apply_env(&mut config);
    validate(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Semantic validation, reporting every failure rather than the first.
fn validate(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError {
            field: "listener.host",
            message: "must not be empty".to_string(),
        });
    }

    if config.dashboard.static_dir.as_os_str().is_empty() {
        errors.push(ValidationError {
            field: "dashboard.static_dir",
            message: "must not be empty".to_string(),
        });
    }

    if config.views.engine.trim().is_empty() {
        errors.push(ValidationError {
            field: "views.engine",
            message: "must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
