//! Builds registration drafts and records from a wizard session.
//!
//! Pure functions of the wizard state. Persisting or relaying the result is
//! the caller's job.

use super::{RegistrationDraft, RegistrationRecord, NOT_APPLICABLE};
use crate::domain::foundation::{RegistrationId, Timestamp};
use crate::domain::wizard::{WizardError, WizardState, WizardStep};

/// Review-step preview. Identical in content to the record `assemble` builds.
pub fn preview(state: &WizardState) -> Result<RegistrationDraft, WizardError> {
    let offering = state
        .selected_offering()
        .ok_or(WizardError::NoOfferingSelected)?;
    state.validate_step(WizardStep::PlayerDetails).into_result()?;
    state.validate_step(WizardStep::Payment).into_result()?;
    let proof = state
        .payment_proof()
        .ok_or(WizardError::PaymentNotConfirmed)?;

    let roster = state.roster();
    let players = roster.trimmed_names();
    let (captain, vice_captain) = if offering.has_captain {
        (roster.captain_name(), roster.vice_captain_name())
    } else {
        (None, None)
    };
    let (receipt_id, receipt_generated_at) = match state.receipt() {
        Some(receipt) => (
            receipt.receipt_id.to_string(),
            receipt.generated_at.to_iso_string(),
        ),
        None => (NOT_APPLICABLE.to_string(), String::new()),
    };

    Ok(RegistrationDraft {
        sport_id: offering.id.clone(),
        sport_name: offering.name.clone(),
        category: offering.category,
        gender: offering.gender,
        game_type: offering.game_type,
        entry_fee: offering.entry_fee,
        icon: offering.icon.clone(),
        payment_status: proof.status,
        external_payment_id: proof.external_payment_id.clone(),
        payment_amount: proof.amount,
        team_name: state.team_name().trim().to_string(),
        players_string: players.join(", "),
        players,
        captain: captain.unwrap_or_else(|| NOT_APPLICABLE.to_string()),
        vice_captain: vice_captain.unwrap_or_else(|| NOT_APPLICABLE.to_string()),
        contact: state.contact().trim().to_string(),
        receipt_id,
        receipt_generated_at,
    })
}

/// Final record with a fresh id and the current time.
pub fn assemble(state: &WizardState) -> Result<RegistrationRecord, WizardError> {
    assemble_with(state, RegistrationId::new(), Timestamp::now())
}

pub fn assemble_with(
    state: &WizardState,
    id: RegistrationId,
    at: Timestamp,
) -> Result<RegistrationRecord, WizardError> {
    Ok(RegistrationRecord::new(id, at, preview(state)?))
}
