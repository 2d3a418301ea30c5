//! Relay configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::relay::SheetsRelayConfig;

/// Spreadsheet relay configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Forward finished registrations at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Web-app endpoint receiving the JSON record
    pub web_app_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl RelayConfig {
    /// Settings for [`SheetsRelay`](crate::adapters::relay::SheetsRelay)
    pub fn sheets_relay_config(&self) -> SheetsRelayConfig {
        SheetsRelayConfig {
            enabled: self.enabled,
            web_app_url: self.web_app_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Validate relay configuration
    ///
    /// An unset or placeholder URL is allowed; the relay then reports
    /// itself as not configured.
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout("relay"));
        }
        if !self.enabled {
            return Ok(());
        }

        let relay = self.sheets_relay_config();
        let Some(url) = relay.endpoint() else {
            return Ok(());
        };
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ValidationError::InvalidRelayUrl);
        }
        if production && !url.starts_with("https://") {
            return Err(ValidationError::RelayUrlMustBeHttps);
        }
        Ok(())
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            web_app_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    15
}
