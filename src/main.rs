//! Sports registration admin tool.
//!
//! Loads configuration, opens the registration store and prints a JSON
//! summary of the catalog and the registrations collected so far.
//!
//! ```bash
//! SPORTS_REGISTRATION__STORAGE__DATA_DIR=./data cargo run --bin sports-registration
//! ```
//!
//! With `--check-relay` it only checks that the spreadsheet web app answers
//! and prints the outcome. The process exits non-zero when the check fails.
//!
//! ```bash
//! cargo run --bin sports-registration -- --check-relay
//! ```

use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sports_registration::adapters::relay::{SheetsRelay, SheetsRelayConfig};
use sports_registration::adapters::{FileRegistrationStore, YamlCatalogLoader};
use sports_registration::config::{AppConfig, LogFormat};
use sports_registration::domain::catalog::{CategoryFilter, Gender};
use sports_registration::ports::{RegistrationStore, RelayOutcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    tracing::info!(
        environment = ?config.runtime.environment,
        data_dir = %config.storage.data_dir.display(),
        namespace = %config.storage.namespace,
        "Configuration loaded"
    );

    if std::env::args().skip(1).any(|arg| arg == "--check-relay") {
        return check_relay(config.relay.sheets_relay_config()).await;
    }

    let catalog = YamlCatalogLoader::new(config.catalog.path.as_ref())
        .load()
        .await?;
    let store = FileRegistrationStore::new(&config.storage.data_dir, &config.storage.namespace);
    let stats = store.stats().await?;

    let relay: SheetsRelayConfig = config.relay.sheets_relay_config();
    let summary = json!({
        "catalog": {
            "offerings": catalog.len(),
            "boys": catalog.query(Gender::Boys, CategoryFilter::All).len(),
            "girls": catalog.query(Gender::Girls, CategoryFilter::All).len(),
        },
        "registrations": stats,
        "payment": {
            "configured": config.payment.configured_key().is_some(),
            "testMode": config.payment.is_test_mode(),
        },
        "relay": {
            "enabled": relay.enabled,
            "configured": relay.endpoint().is_some(),
        },
        "store": store.path().display().to_string(),
    });

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

async fn check_relay(config: SheetsRelayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = SheetsRelay::new(config).check_connection().await;
    let report = json!({
        "relay": {
            "outcome": outcome.to_string(),
            "reachable": outcome.is_sent(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    match outcome {
        RelayOutcome::Failed(reason) => Err(format!("Relay check failed: {}", reason).into()),
        _ => Ok(()),
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.runtime.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.runtime.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
