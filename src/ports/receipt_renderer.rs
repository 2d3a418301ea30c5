//! Receipt renderer port.
//!
//! Produces a receipt document for a paid registration. Callers treat
//! failures as recoverable: the registration goes ahead without a receipt.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::registration::{Receipt, RegistrationDraft};
use crate::domain::wizard::PaymentProof;

#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("Payment is not confirmed, no receipt issued")]
    PaymentNotConfirmed,

    #[error("Failed to write receipt: {0}")]
    IoError(String),

    #[error("Failed to render receipt: {0}")]
    RenderFailed(String),
}

impl From<ReceiptError> for DomainError {
    fn from(err: ReceiptError) -> Self {
        DomainError::new(ErrorCode::ReceiptError, err.to_string())
    }
}

#[async_trait]
pub trait ReceiptRenderer: Send + Sync {
    /// Renders a receipt and returns its id and generation time.
    async fn render(
        &self,
        draft: &RegistrationDraft,
        proof: &PaymentProof,
    ) -> Result<Receipt, ReceiptError>;
}
