//! Registration wizard handlers.
//!
//! Each handler drives one side-effecting transition of a `WizardState`
//! through the ports. Pure navigation stays on the wizard itself.

mod pay_entry_fee;
mod start_over;
mod submit_registration;

pub use pay_entry_fee::{
    PayEntryFeeError, PayEntryFeeHandler, PayEntryFeeResult, RECEIPT_FALLBACK_MESSAGE,
};
pub use start_over::{StartOverHandler, StartOverResult};
pub use submit_registration::{
    SubmitRegistrationError, SubmitRegistrationHandler, SubmitRegistrationResult,
};
