//! Wizard error types.

use thiserror::Error;

use super::WizardStep;
use crate::domain::catalog::Gender;
use crate::domain::foundation::{DomainError, ErrorCode, OfferingId};

/// A single user-correctable validation failure, displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("No offering selected")]
    NoOfferingSelected,

    #[error("Team/Participant name is required")]
    TeamNameRequired,

    #[error("Contact number must be exactly 10 digits")]
    InvalidContact,

    #[error("Duplicate player name: \"{0}\"")]
    DuplicatePlayerName(String),

    #[error("All player fields must be filled")]
    EmptyPlayerName,

    #[error("Please select a captain")]
    CaptainRequired,

    #[error("Please select a vice-captain")]
    ViceCaptainRequired,

    #[error("Captain and Vice-Captain must be different players")]
    SameCaptainAndVice,

    #[error("Payment is required to proceed. Please complete the payment.")]
    PaymentRequired,
}

/// Errors raised by [`WizardState`](super::WizardState) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Cannot leave {step}: {}", join_messages(.errors))]
    ValidationFailed {
        step: WizardStep,
        errors: Vec<StepError>,
    },

    #[error("Cannot move from {from:?} to {to:?}")]
    InvalidTransition { from: WizardStep, to: WizardStep },

    #[error("{0} is the last step, submit to finish")]
    NoNextStep(WizardStep),

    #[error("Operation requires step {expected:?}, wizard is on {actual:?}")]
    NotOnStep {
        expected: WizardStep,
        actual: WizardStep,
    },

    #[error("Offering not found: {0}")]
    OfferingNotFound(OfferingId),

    #[error("Offering {id} is not held for {gender}")]
    OfferingNotInDivision { id: OfferingId, gender: Gender },

    #[error("No offering selected")]
    NoOfferingSelected,

    #[error("Player slot {index} does not exist ({slots} slots)")]
    PlayerSlotOutOfRange { index: usize, slots: usize },

    #[error("Player slot {index} has no name to choose")]
    InvalidLeaderChoice { index: usize },

    #[error("Offering has no captain")]
    NoCaptainForOffering,

    #[error("Entry fee has already been paid")]
    AlreadyPaid,

    #[error("Payment has not been confirmed")]
    PaymentNotConfirmed,
}

impl WizardError {
    /// Validation messages in display order, empty for non-validation errors.
    pub fn step_errors(&self) -> &[StepError] {
        match self {
            WizardError::ValidationFailed { errors, .. } => errors,
            _ => &[],
        }
    }
}

/// Joins step errors into one newline-separated message.
pub fn join_messages(errors: &[StepError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<WizardError> for DomainError {
    fn from(err: WizardError) -> Self {
        let code = match &err {
            WizardError::ValidationFailed { errors, .. }
                if errors.contains(&StepError::PaymentRequired) =>
            {
                ErrorCode::PaymentRequired
            }
            WizardError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            WizardError::InvalidTransition { .. }
            | WizardError::NoNextStep(_)
            | WizardError::NotOnStep { .. } => {
                ErrorCode::InvalidStateTransition
            }
            WizardError::OfferingNotFound(_) => ErrorCode::OfferingNotFound,
            WizardError::AlreadyPaid => ErrorCode::AlreadyPaid,
            WizardError::PaymentNotConfirmed => ErrorCode::PaymentRequired,
            WizardError::OfferingNotInDivision { .. }
            | WizardError::NoOfferingSelected
            | WizardError::PlayerSlotOutOfRange { .. }
            | WizardError::InvalidLeaderChoice { .. }
            | WizardError::NoCaptainForOffering => ErrorCode::ValidationFailed,
        };
        let domain = DomainError::new(code, err.to_string());
        match &err {
            WizardError::ValidationFailed { step, .. } => domain.with_detail("step", step.to_string()),
            WizardError::NotOnStep { actual, .. } => domain.with_detail("step", actual.to_string()),
            _ => domain,
        }
    }
}
