//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Country API URL must use http or https")]
    InvalidCountryApiUrl,

    #[error("Country lookup timeout must be between 1 and 120 seconds")]
    InvalidTimeout,

    #[error("Invalid popular country code: {0}")]
    InvalidPopularCode(String),

    #[error("Default dial code must start with '+' followed by digits")]
    InvalidDialCode,

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
