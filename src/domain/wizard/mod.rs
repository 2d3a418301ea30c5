//! The four-step registration wizard.
//!
//! `WizardState` owns the session; validators, the roster and the payment
//! value types are split out so they can be tested on their own.

mod errors;
mod payment;
mod roster;
mod state;
mod step;
mod validation;

pub use errors::{StepError, WizardError};
pub use payment::{
    PaymentBanner, PaymentOutcome, PaymentProof, PaymentRequest, PaymentStatus, PaymentSummary,
    PaymentTerms, FAILURE_BANNER_TTL_SECS,
};
pub use roster::{LeaderOption, PlayerSlot, Roster};
pub use state::{PlayerDetailsForm, StepEntry, WizardState};
pub use step::WizardStep;
pub use validation::{
    duplicate_names, is_valid_contact, validate_payment, validate_player_details,
    validate_sport_selection, PlayerDetailsInput, StepValidation,
};
