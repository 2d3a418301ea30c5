//! Application layer - Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    PayEntryFeeError, PayEntryFeeHandler, PayEntryFeeResult, StartOverHandler,
    StartOverResult, SubmitRegistrationError, SubmitRegistrationHandler,
    SubmitRegistrationResult, RECEIPT_FALLBACK_MESSAGE,
};
