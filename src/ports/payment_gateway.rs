//! Payment gateway port.
//!
//! One `initiate` call starts one checkout and resolves to exactly one
//! [`PaymentOutcome`]. Configuration or gateway-load problems come back as
//! `InitiationFailed` without waiting for the user.

use async_trait::async_trait;

use crate::domain::wizard::{PaymentOutcome, PaymentRequest};

/// Port for payment gateway integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Starts a checkout for `request` and waits for its outcome.
    ///
    /// Never fails with an error: every failure mode is a `PaymentOutcome`.
    async fn initiate(&self, request: PaymentRequest) -> PaymentOutcome;

    /// Returns true if the gateway has usable credentials.
    fn is_configured(&self) -> bool {
        true
    }
}
