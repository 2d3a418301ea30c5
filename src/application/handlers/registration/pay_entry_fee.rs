//! PayEntryFeeHandler - runs the payment step of the wizard.
//!
//! Starts a checkout for the selected offering, records the outcome on the
//! wizard and, once the payment is confirmed, asks the receipt renderer for
//! a receipt. A failed receipt never undoes the payment.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::registration::{self, Receipt};
use crate::domain::wizard::{
    PaymentBanner, PaymentOutcome, PaymentTerms, WizardError, WizardState,
};
use crate::ports::{PaymentGateway, ReceiptRenderer};

/// Shown when a paid registration ends up without a receipt.
pub const RECEIPT_FALLBACK_MESSAGE: &str =
    "Receipt generation failed. Please generate it manually later.";

/// Result of one payment attempt.
#[derive(Debug)]
pub struct PayEntryFeeResult {
    pub outcome: PaymentOutcome,
    /// Banner to show on the payment step right after the attempt.
    pub banner: Option<PaymentBanner>,
    pub receipt: Option<Receipt>,
    /// Set when the payment succeeded but no receipt could be produced.
    pub receipt_notice: Option<&'static str>,
}

impl PayEntryFeeResult {
    pub fn is_paid(&self) -> bool {
        matches!(self.outcome, PaymentOutcome::Success { .. })
            && matches!(self.banner, Some(PaymentBanner::Success { .. }))
    }
}

#[derive(Debug, Clone, Error)]
pub enum PayEntryFeeError {
    #[error(transparent)]
    Wizard(#[from] WizardError),
}

impl From<PayEntryFeeError> for DomainError {
    fn from(err: PayEntryFeeError) -> Self {
        match err {
            PayEntryFeeError::Wizard(e) => e.into(),
        }
    }
}

/// Handler for the payment step.
pub struct PayEntryFeeHandler {
    gateway: Arc<dyn PaymentGateway>,
    receipts: Arc<dyn ReceiptRenderer>,
    terms: PaymentTerms,
}

impl PayEntryFeeHandler {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        receipts: Arc<dyn ReceiptRenderer>,
        terms: PaymentTerms,
    ) -> Self {
        Self {
            gateway,
            receipts,
            terms,
        }
    }

    pub async fn handle(
        &self,
        wizard: &mut WizardState,
    ) -> Result<PayEntryFeeResult, PayEntryFeeError> {
        // 1. Build the request (rejects a second payment)
        let request = wizard.payment_request(&self.terms)?;
        tracing::info!(
            amount_minor = request.amount_minor,
            currency = %request.currency,
            description = %request.description,
            "Initiating payment"
        );

        // 2. Wait for the gateway
        let outcome = self.gateway.initiate(request).await;
        match &outcome {
            PaymentOutcome::Success { payment_id } => {
                tracing::info!(payment_id = %payment_id, "Payment succeeded")
            }
            PaymentOutcome::Cancelled => tracing::info!("Payment cancelled by user"),
            PaymentOutcome::InitiationFailed { reason } => {
                tracing::error!(reason = %reason, "Payment initiation failed")
            }
        }

        // 3. Record it on the wizard
        let now = Timestamp::now();
        wizard.record_payment(&outcome, now)?;

        // 4. Receipt, best effort
        let (receipt, receipt_notice) = if wizard.is_paid() {
            self.issue_receipt(wizard).await?
        } else {
            (None, None)
        };

        Ok(PayEntryFeeResult {
            outcome,
            banner: wizard.payment_banner(&now),
            receipt,
            receipt_notice,
        })
    }

    async fn issue_receipt(
        &self,
        wizard: &mut WizardState,
    ) -> Result<(Option<Receipt>, Option<&'static str>), WizardError> {
        let draft = registration::preview(wizard)?;
        let proof = wizard
            .payment_proof()
            .cloned()
            .ok_or(WizardError::PaymentNotConfirmed)?;

        match self.receipts.render(&draft, &proof).await {
            Ok(receipt) => {
                wizard.attach_receipt(receipt.clone())?;
                Ok((Some(receipt), None))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Receipt generation failed");
                Ok((None, Some(RECEIPT_FALLBACK_MESSAGE)))
            }
        }
    }
}
