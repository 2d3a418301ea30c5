//! Receipt reference carried from the payment step into the record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ReceiptId, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub receipt_id: ReceiptId,
    pub generated_at: Timestamp,
}

impl Receipt {
    /// Issues a fresh receipt id stamped with `generated_at`.
    pub fn issue(generated_at: Timestamp) -> Self {
        Self {
            receipt_id: ReceiptId::generate(&generated_at),
            generated_at,
        }
    }
}
