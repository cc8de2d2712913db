//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Enforce required keys (target_url, app_port)
//! - Check the proxy URL parses after credential injection
//! - Reject one-sided credential pairs
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before the listener binds; a failing config never serves traffic

use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;
use crate::egress::proxy_url;

/// A single semantic problem with the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("target_url is required")]
    MissingTargetUrl,

    #[error("target_url {0:?} is not an absolute http(s) URL")]
    InvalidTargetUrl(String),

    #[error("app_port must be non-zero")]
    InvalidPort,

    #[error("proxy_url is invalid: {0}")]
    InvalidProxyUrl(String),

    #[error("error_status {0} is not a valid HTTP status code")]
    InvalidErrorStatus(u16),
}

/// Validate a loaded configuration, collecting every error found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.target_url.is_empty() {
        errors.push(ValidationError::MissingTargetUrl);
    } else {
        match Url::parse(&config.target_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => errors.push(ValidationError::InvalidTargetUrl(config.target_url.clone())),
        }
    }

    if config.app_port == 0 {
        errors.push(ValidationError::InvalidPort);
    }

    // Exercises the same builder used at startup, so a config that
    // validates here cannot fail proxy construction later.
    if let Err(e) = proxy_url::build(
        &config.proxy_url,
        &config.proxy_username,
        &config.proxy_password,
    ) {
        errors.push(ValidationError::InvalidProxyUrl(e.to_string()));
    }

    if !(100..=599).contains(&config.error_status) {
        errors.push(ValidationError::InvalidErrorStatus(config.error_status));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> RelayConfig {
        RelayConfig {
            target_url: "http://localhost:9000".to_string(),
            app_port: 8080,
            ..RelayConfig::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_target_url() {
        let config = RelayConfig::default();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::MissingTargetUrl)));
    }

    #[test]
    fn test_relative_target_url_rejected() {
        let mut config = valid_config();
        config.target_url = "localhost:9000".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidTargetUrl(_))));
    }

    #[test]
    fn test_one_sided_credentials_rejected() {
        let mut config = valid_config();
        config.proxy_url = "proxy.example.com:8080".to_string();
        config.proxy_username = "u".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidProxyUrl(_))));
    }

    #[test]
    fn test_malformed_proxy_url_rejected() {
        let mut config = valid_config();
        config.proxy_url = "://bad".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidProxyUrl(_))));
    }

    #[test]
    fn test_collects_multiple_errors() {
        let config = RelayConfig {
            target_url: String::new(),
            app_port: 0,
            error_status: 42,
            ..RelayConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
