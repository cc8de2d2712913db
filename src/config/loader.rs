//! Configuration loading from disk and environment.
//!
//! # Responsibilities
//! - Parse the TOML config file when present
//! - Apply environment-variable overrides (RELAY_* prefix)
//! - Run semantic validation before handing the config out
//!
//! # Design Decisions
//! - A missing file is not fatal: an environment-only deployment is
//!   valid as long as the required keys survive validation
//! - Environment always wins over the file

use std::fs;
use std::path::Path;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env(String),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env(e) => write!(f, "Environment error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate the relay configuration.
///
/// Reads `path` if it exists, then applies `RELAY_*` environment
/// overrides, then validates. The process must not serve traffic when
/// this returns an error.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let mut config = if path.exists() {
        let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
        parse_config(&content)?
    } else {
        tracing::info!(path = %path.display(), "Config file not found, using environment only");
        RelayConfig::default()
    };

    apply_env_overrides(&mut config)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Parse a TOML document into an (unvalidated) config.
pub fn parse_config(content: &str) -> Result<RelayConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}

fn apply_env_overrides(config: &mut RelayConfig) -> Result<(), ConfigError> {
    if let Ok(v) = std::env::var("RELAY_TARGET_URL") {
        config.target_url = v;
    }
    if let Ok(v) = std::env::var("RELAY_APP_PORT") {
        config.app_port = v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Env(format!("RELAY_APP_PORT is not a port: {:?}", v)))?;
    }
    if let Ok(v) = std::env::var("RELAY_PROXY_URL") {
        config.proxy_url = v;
    }
    if let Ok(v) = std::env::var("RELAY_PROXY_USERNAME") {
        config.proxy_username = v;
    }
    if let Ok(v) = std::env::var("RELAY_PROXY_PASSWORD") {
        config.proxy_password = v;
    }
    if let Ok(v) = std::env::var("RELAY_ERROR_STATUS") {
        config.error_status = v.trim().parse().map_err(|_| {
            ConfigError::Env(format!("RELAY_ERROR_STATUS is not a status code: {:?}", v))
        })?;
    }
    Ok(())
}
