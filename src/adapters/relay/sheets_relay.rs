//! Spreadsheet web-app relay.
//!
//! POSTs each finished registration as JSON to a spreadsheet web app.
//! A disabled relay, or a missing or placeholder URL, short-circuits without
//! touching the network. Transport and HTTP errors become
//! `RelayOutcome::Failed` and are logged, never raised.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::registration::RegistrationRecord;
use crate::ports::{RegistrationRelay, RelayOutcome};

/// URL shipped in sample configuration; never a real endpoint.
pub const PLACEHOLDER_WEB_APP_URL: &str = "YOUR_WEB_APP_URL_HERE";

/// Configuration for the spreadsheet relay.
#[derive(Debug, Clone)]
pub struct SheetsRelayConfig {
    pub enabled: bool,
    pub web_app_url: Option<String>,
    pub timeout: Duration,
}

impl SheetsRelayConfig {
    /// The endpoint to call, if one is really configured.
    pub fn endpoint(&self) -> Option<&str> {
        self.web_app_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && *url != PLACEHOLDER_WEB_APP_URL)
    }
}

pub struct SheetsRelay {
    config: SheetsRelayConfig,
    client: Client,
}

impl SheetsRelay {
    pub fn new(config: SheetsRelayConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client for relay");
                Client::new()
            });
        Self { config, client }
    }

    /// Checks that the web app answers a plain GET, without sending a record.
    pub async fn check_connection(&self) -> RelayOutcome {
        if !self.config.enabled {
            return RelayOutcome::Disabled;
        }
        let Some(url) = self.config.endpoint() else {
            return RelayOutcome::NotConfigured;
        };

        let outcome = self.classify(self.client.get(url).send().await);
        tracing::info!(outcome = %outcome, "Relay connection checked");
        outcome
    }

    fn classify(&self, result: reqwest::Result<reqwest::Response>) -> RelayOutcome {
        match result {
            Ok(response) if response.status().is_success() => RelayOutcome::Sent,
            Ok(response) => RelayOutcome::Failed(format!("HTTP {}", response.status())),
            Err(e) if e.is_timeout() => RelayOutcome::Failed(format!(
                "Timed out after {}s",
                self.config.timeout.as_secs()
            )),
            Err(e) if e.is_connect() => RelayOutcome::Failed(format!("Connection failed: {}", e)),
            Err(e) => RelayOutcome::Failed(e.to_string()),
        }
    }
}

#[async_trait]
impl RegistrationRelay for SheetsRelay {
    async fn forward(&self, record: &RegistrationRecord) -> RelayOutcome {
        if !self.config.enabled {
            tracing::debug!(registration_id = %record.id, "Relay disabled, skipping");
            return RelayOutcome::Disabled;
        }
        let Some(url) = self.config.endpoint() else {
            tracing::warn!(
                registration_id = %record.id,
                "Relay URL not configured, skipping"
            );
            return RelayOutcome::NotConfigured;
        };

        let result = self.client.post(url).json(record).send().await;
        let outcome = self.classify(result);

        match &outcome {
            RelayOutcome::Sent => {
                tracing::info!(registration_id = %record.id, "Registration relayed")
            }
            other => tracing::error!(
                registration_id = %record.id,
                outcome = %other,
                "Relay failed"
            ),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Gender;
    use crate::domain::registration::test_support::record;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn relay(enabled: bool, url: Option<String>) -> SheetsRelay {
        SheetsRelay::new(SheetsRelayConfig {
            enabled,
            web_app_url: url,
            timeout: Duration::from_secs(2),
        })
    }

    #[tokio::test]
    async fn disabled_relay_short_circuits() {
        let outcome = relay(false, Some("http://127.0.0.1:9/exec".to_string()))
            .forward(&record("chess", Gender::Boys))
            .await;
        assert_eq!(outcome, RelayOutcome::Disabled);
    }

    #[tokio::test]
    async fn placeholder_url_counts_as_not_configured() {
        let rec = record("chess", Gender::Boys);
        for url in [None, Some(PLACEHOLDER_WEB_APP_URL.to_string()), Some("  ".to_string())] {
            assert_eq!(relay(true, url).forward(&rec).await, RelayOutcome::NotConfigured);
        }
    }

    #[tokio::test]
    async fn posts_record_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/exec"))
            .and(body_partial_json(serde_json::json!({
                "sportId": "chess",
                "paymentStatus": "Success"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = relay(true, Some(format!("{}/exec", server.uri())))
            .forward(&record("chess", Gender::Boys))
            .await;
        assert_eq!(outcome, RelayOutcome::Sent);
    }

    #[tokio::test]
    async fn server_error_is_reported_as_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let outcome = relay(true, Some(server.uri()))
            .forward(&record("chess", Gender::Boys))
            .await;
        assert!(matches!(outcome, RelayOutcome::Failed(reason) if reason.contains("500")));
    }

    #[tokio::test]
    async fn connection_check_uses_get_and_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exec"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let outcome = relay(true, Some(format!("{}/exec", server.uri())))
            .check_connection()
            .await;
        assert_eq!(outcome, RelayOutcome::Sent);
    }

    #[tokio::test]
    async fn connection_check_reports_status_and_configuration() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let failed = relay(true, Some(server.uri())).check_connection().await;
        assert!(matches!(failed, RelayOutcome::Failed(reason) if reason.contains("403")));
        assert_eq!(
            relay(false, Some(server.uri())).check_connection().await,
            RelayOutcome::Disabled
        );
        assert_eq!(
            relay(true, Some(PLACEHOLDER_WEB_APP_URL.to_string()))
                .check_connection()
                .await,
            RelayOutcome::NotConfigured
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_reported_as_failed() {
        let outcome = relay(true, Some("http://127.0.0.1:1/exec".to_string()))
            .forward(&record("chess", Gender::Boys))
            .await;
        assert!(matches!(outcome, RelayOutcome::Failed(_)));
    }
}
