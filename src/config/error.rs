//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),

    #[error("Storage namespace must be a plain file name")]
    InvalidNamespace,

    #[error("Invalid payment key format")]
    InvalidPaymentKey,

    #[error("A live payment key is required in production")]
    LivePaymentKeyRequired,

    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    #[error("Invalid timeout for {0}")]
    InvalidTimeout(&'static str),

    #[error("Invalid relay URL format")]
    InvalidRelayUrl,

    #[error("Relay URL must use HTTPS in production")]
    RelayUrlMustBeHttps,
}

impl From<ConfigError> for DomainError {
    fn from(err: ConfigError) -> Self {
        DomainError::new(ErrorCode::InternalError, err.to_string())
    }
}
