//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SPORTS_REGISTRATION` prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use sports_registration::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Registrations stored under {}", config.storage.data_dir.display());
//! ```

mod catalog;
mod error;
mod payment;
mod receipt;
mod relay;
mod runtime;
mod storage;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use payment::{PaymentConfig, PLACEHOLDER_KEY_ID};
pub use receipt::ReceiptConfig;
pub use relay::RelayConfig;
pub use runtime::{Environment, LogFormat, RuntimeConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development setup with payments and the relay unconfigured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Environment and logging
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Registration store location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Offering catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Hosted checkout
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Spreadsheet relay
    #[serde(default)]
    pub relay: RelayConfig,

    /// Receipt documents
    #[serde(default)]
    pub receipt: ReceiptConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SPORTS_REGISTRATION` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SPORTS_REGISTRATION__STORAGE__DATA_DIR=/var/lib/sports` -> `storage.data_dir`
    /// - `SPORTS_REGISTRATION__PAYMENT__KEY_ID=rzp_live_...` -> `payment.key_id`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SPORTS_REGISTRATION")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Production additionally requires a live payment key and an HTTPS
    /// relay endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let production = self.is_production();
        self.runtime.validate()?;
        self.storage.validate()?;
        self.payment.validate(production)?;
        self.relay.validate(production)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.runtime.is_production()
    }
}
