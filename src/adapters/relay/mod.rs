//! Relay adapters for forwarding finished registrations.

mod sheets_relay;

pub use sheets_relay::{SheetsRelay, SheetsRelayConfig, PLACEHOLDER_WEB_APP_URL};
