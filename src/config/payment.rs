//! Payment configuration

use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::payment::CheckoutConfig;
use crate::domain::wizard::PaymentTerms;

/// Key value shipped in templates; treated as "not configured".
pub const PLACEHOLDER_KEY_ID: &str = "rzp_test_XXXXXXXXXXXXXX";

/// Payment configuration (hosted checkout)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Checkout key id (`rzp_test_...` or `rzp_live_...`)
    pub key_id: Option<String>,

    /// ISO currency code
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Name shown on the checkout form
    #[serde(default = "default_merchant_name")]
    pub merchant_name: String,

    /// Extra metadata merged into every initiation
    #[serde(default = "default_notes")]
    pub notes: BTreeMap<String, String>,

    /// Retries the checkout form allows
    #[serde(default = "default_retry_max")]
    pub retry_max: u32,

    /// Seconds the checkout form stays open
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl PaymentConfig {
    /// The key id, unless missing, blank or the template placeholder
    pub fn configured_key(&self) -> Option<&str> {
        self.key_id
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_KEY_ID)
    }

    /// Check if using a test key
    pub fn is_test_mode(&self) -> bool {
        self.configured_key()
            .map_or(true, |k| k.starts_with("rzp_test_"))
    }

    /// Check if using a live key
    pub fn is_live_mode(&self) -> bool {
        self.configured_key()
            .is_some_and(|k| k.starts_with("rzp_live_"))
    }

    /// Settings for [`CheckoutGateway`](crate::adapters::payment::CheckoutGateway)
    pub fn checkout_config(&self) -> CheckoutConfig {
        CheckoutConfig {
            key_id: self.configured_key().map(str::to_string),
            retry_max: self.retry_max,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Currency, merchant and notes applied to every payment request
    pub fn terms(&self) -> PaymentTerms {
        PaymentTerms {
            currency: self.currency.clone(),
            merchant_name: self.merchant_name.clone(),
            notes: self.notes.clone(),
        }
    }

    /// Validate payment configuration
    ///
    /// A missing key is allowed outside production; initiation then fails
    /// with a "not configured" outcome.
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        if let Some(key) = self.configured_key() {
            if !key.starts_with("rzp_") {
                return Err(ValidationError::InvalidPaymentKey);
            }
        }
        if production && !self.is_live_mode() {
            return Err(ValidationError::LivePaymentKeyRequired);
        }

        let currency = self.currency.trim();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCurrency(self.currency.clone()));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout("payment"));
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            key_id: None,
            currency: default_currency(),
            merchant_name: default_merchant_name(),
            notes: default_notes(),
            retry_max: default_retry_max(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_merchant_name() -> String {
    "BCOE Sports Registration".to_string()
}

fn default_notes() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("organizer".to_string(), "Student Council".to_string()),
        ("event".to_string(), "College Sports Event 2026".to_string()),
    ])
}

fn default_retry_max() -> u32 {
    3
}

fn default_timeout_secs() -> u64 {
    900
}
