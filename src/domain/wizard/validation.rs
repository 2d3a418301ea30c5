//! Per-step validators.
//!
//! Each validator collects every failure for its step in display order
//! instead of stopping at the first one.

use super::{PaymentProof, Roster, StepError, WizardError, WizardStep};
use crate::domain::catalog::Offering;

/// Outcome of validating the step being left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepValidation {
    step: WizardStep,
    errors: Vec<StepError>,
}

impl StepValidation {
    pub fn new(step: WizardStep, errors: Vec<StepError>) -> Self {
        Self { step, errors }
    }

    pub fn passed(step: WizardStep) -> Self {
        Self::new(step, Vec::new())
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[StepError] {
        &self.errors
    }

    /// Messages joined with newlines, empty when the step passed.
    pub fn combined_message(&self) -> String {
        super::errors::join_messages(&self.errors)
    }

    pub fn into_result(self) -> Result<(), WizardError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(WizardError::ValidationFailed {
                step: self.step,
                errors: self.errors,
            })
        }
    }
}

/// Form fields of the player details step.
#[derive(Debug, Clone, Copy)]
pub struct PlayerDetailsInput<'a> {
    pub team_name: &'a str,
    pub contact: &'a str,
    pub roster: &'a Roster,
    pub has_captain: bool,
}

pub fn validate_sport_selection(offering: Option<&Offering>) -> StepValidation {
    let errors = match offering {
        Some(_) => Vec::new(),
        None => vec![StepError::NoOfferingSelected],
    };
    StepValidation::new(WizardStep::SportSelection, errors)
}

pub fn validate_player_details(input: PlayerDetailsInput<'_>) -> StepValidation {
    let mut errors = Vec::new();

    if input.team_name.trim().is_empty() {
        errors.push(StepError::TeamNameRequired);
    }

    if !is_valid_contact(input.contact) {
        errors.push(StepError::InvalidContact);
    }

    let names = input.roster.trimmed_names();
    errors.extend(
        duplicate_names(&names)
            .into_iter()
            .map(StepError::DuplicatePlayerName),
    );

    if names.iter().any(|n| n.is_empty()) {
        errors.push(StepError::EmptyPlayerName);
    }

    if input.has_captain {
        let captain = input.roster.captain();
        let vice_captain = input.roster.vice_captain();
        if captain.is_none() {
            errors.push(StepError::CaptainRequired);
        }
        if vice_captain.is_none() {
            errors.push(StepError::ViceCaptainRequired);
        }
        if captain.is_some() && captain == vice_captain {
            errors.push(StepError::SameCaptainAndVice);
        }
    }

    StepValidation::new(WizardStep::PlayerDetails, errors)
}

pub fn validate_payment(proof: Option<&PaymentProof>) -> StepValidation {
    let errors = if proof.map_or(false, PaymentProof::is_confirmed) {
        Vec::new()
    } else {
        vec![StepError::PaymentRequired]
    };
    StepValidation::new(WizardStep::Payment, errors)
}

/// Exactly ten ASCII digits once surrounding whitespace is removed.
pub fn is_valid_contact(contact: &str) -> bool {
    let contact = contact.trim();
    contact.len() == 10 && contact.bytes().all(|b| b.is_ascii_digit())
}

/// Names that repeat an earlier non-empty name, compared case-insensitively.
///
/// Each repeat is reported once, in the spelling it was entered with.
pub fn duplicate_names(trimmed: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(trimmed.len());
    let mut duplicates = Vec::new();
    for name in trimmed.iter().filter(|n| !n.is_empty()) {
        let folded = name.to_lowercase();
        if seen.contains(&folded) {
            duplicates.push(name.clone());
        }
        seen.push(folded);
    }
    duplicates
}
