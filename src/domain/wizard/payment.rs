//! Payment value types exchanged between the wizard and the gateway port.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::catalog::Offering;
use crate::domain::foundation::Timestamp;

/// How long the "Failed" banner stays visible after a cancelled payment.
pub const FAILURE_BANNER_TTL_SECS: i64 = 5;

/// Result of one payment initiation. Exactly one per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// The gateway confirmed the payment.
    Success { payment_id: String },
    /// The user dismissed the checkout.
    Cancelled,
    /// The gateway could not be started (missing key, gateway unavailable).
    InitiationFailed { reason: String },
}

impl PaymentOutcome {
    pub fn success(payment_id: impl Into<String>) -> Self {
        PaymentOutcome::Success {
            payment_id: payment_id.into(),
        }
    }

    pub fn initiation_failed(reason: impl Into<String>) -> Self {
        PaymentOutcome::InitiationFailed {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PaymentOutcome::Success { .. } => "success",
            PaymentOutcome::Cancelled => "cancelled",
            PaymentOutcome::InitiationFailed { .. } => "initiation_failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Success,
    Failed,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Success => f.write_str("Success"),
            PaymentStatus::Failed => f.write_str("Failed"),
        }
    }
}

/// Evidence of a payment attempt held by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProof {
    pub external_payment_id: String,
    pub status: PaymentStatus,
    /// Amount in major currency units.
    pub amount: u32,
    pub recorded_at: Timestamp,
}

impl PaymentProof {
    /// True when the payment succeeded with a usable external id.
    pub fn is_confirmed(&self) -> bool {
        self.status == PaymentStatus::Success && !self.external_payment_id.trim().is_empty()
    }
}

/// Merchant-level settings applied to every payment request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentTerms {
    pub currency: String,
    pub merchant_name: String,
    pub notes: BTreeMap<String, String>,
}

/// Everything the gateway needs to start a checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRequest {
    /// Amount in minor currency units.
    pub amount_minor: u64,
    pub currency: String,
    pub merchant_name: String,
    pub description: String,
    pub notes: BTreeMap<String, String>,
}

impl PaymentRequest {
    pub fn for_offering(offering: &Offering, terms: &PaymentTerms) -> Self {
        let mut notes = terms.notes.clone();
        notes.insert("sport_id".to_string(), offering.id.to_string());
        notes.insert("sport_name".to_string(), offering.name.clone());
        notes.insert("category".to_string(), offering.category.to_string());
        notes.insert("game_type".to_string(), offering.game_type.to_string());

        Self {
            amount_minor: offering.entry_fee_minor(),
            currency: terms.currency.clone(),
            merchant_name: terms.merchant_name.clone(),
            description: format!("{} Entry Fee", offering.name),
            notes,
        }
    }
}

/// What the payment step shows for the current proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentBanner {
    Success { payment_id: String, amount: u32 },
    Failed,
}

/// Fee confirmation shown on entry to the payment step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub sport_name: String,
    pub game_type_label: String,
    pub entry_fee: u32,
}

impl PaymentSummary {
    pub fn for_offering(offering: &Offering) -> Self {
        Self {
            sport_name: offering.name.clone(),
            game_type_label: offering.game_type_label(),
            entry_fee: offering.entry_fee,
        }
    }
}
