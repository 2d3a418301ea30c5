//! Registration relay port - best-effort forwarding to an external sink.
//!
//! `Sent` only means the sink accepted the request. Nothing confirms the
//! record was written on the other side.

use async_trait::async_trait;
use std::fmt;

use crate::domain::registration::RegistrationRecord;

/// What happened to one forward attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Sent,
    /// Relaying is switched off in configuration.
    Disabled,
    /// No endpoint (or only the placeholder) is configured.
    NotConfigured,
    Failed(String),
}

impl RelayOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, RelayOutcome::Sent)
    }
}

impl fmt::Display for RelayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayOutcome::Sent => f.write_str("sent"),
            RelayOutcome::Disabled => f.write_str("disabled"),
            RelayOutcome::NotConfigured => f.write_str("not configured"),
            RelayOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

#[async_trait]
pub trait RegistrationRelay: Send + Sync {
    /// Forwards a finished record. Never returns an error.
    async fn forward(&self, record: &RegistrationRecord) -> RelayOutcome;
}
