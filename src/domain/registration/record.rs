//! RegistrationDraft and RegistrationRecord.
//!
//! The draft is what the review step previews; the record is the same
//! content stamped with an id and submission time. Field names follow the
//! spreadsheet columns, hence camelCase.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Category, Gender, GameType};
use crate::domain::foundation::{OfferingId, RegistrationId, Timestamp};
use crate::domain::wizard::PaymentStatus;

/// Placeholder used for fields that do not apply to an entry.
pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub sport_id: OfferingId,
    pub sport_name: String,
    pub category: Category,
    pub gender: Gender,
    pub game_type: GameType,
    pub entry_fee: u32,
    pub icon: String,
    pub payment_status: PaymentStatus,
    pub external_payment_id: String,
    pub payment_amount: u32,
    pub team_name: String,
    pub players: Vec<String>,
    pub players_string: String,
    pub captain: String,
    pub vice_captain: String,
    pub contact: String,
    pub receipt_id: String,
    pub receipt_generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub id: RegistrationId,
    pub timestamp: Timestamp,
    /// Human readable submission time (IST).
    pub submitted_at: String,
    #[serde(flatten)]
    pub details: RegistrationDraft,
}

impl RegistrationRecord {
    pub fn new(id: RegistrationId, timestamp: Timestamp, details: RegistrationDraft) -> Self {
        Self {
            id,
            submitted_at: timestamp.to_display_ist(),
            timestamp,
            details,
        }
    }

    pub fn sport_id(&self) -> &OfferingId {
        &self.details.sport_id
    }

    pub fn gender(&self) -> Gender {
        self.details.gender
    }
}
