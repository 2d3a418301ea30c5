//! Application handlers.

pub mod registration;

pub use registration::{
    PayEntryFeeError, PayEntryFeeHandler, PayEntryFeeResult, StartOverHandler,
    StartOverResult, SubmitRegistrationError, SubmitRegistrationHandler,
    SubmitRegistrationResult, RECEIPT_FALLBACK_MESSAGE,
};
