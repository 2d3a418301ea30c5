//! WizardState - the single owned session of a registration in progress.
//!
//! All mutation goes through methods that check the current step, so the
//! state can only move forward once the step being left validates.

use std::sync::Arc;

use serde::Serialize;

use super::validation::{
    validate_payment, validate_player_details, validate_sport_selection, PlayerDetailsInput,
    StepValidation,
};
use super::{
    LeaderOption, PaymentBanner, PaymentOutcome, PaymentProof, PaymentRequest, PaymentStatus,
    PaymentSummary, PaymentTerms, PlayerSlot, Roster, WizardError, WizardStep,
    FAILURE_BANNER_TTL_SECS,
};
use crate::domain::catalog::{Catalog, CategoryFilter, Gender, Offering};
use crate::domain::foundation::{OfferingId, StateMachine, Timestamp};
use crate::domain::registration::{self, Receipt, RegistrationDraft};

/// What the player details step renders on entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetailsForm {
    pub participant_label: String,
    pub slots: Vec<PlayerSlot>,
    pub has_captain: bool,
}

/// Data produced by entering a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEntry {
    SportSelection,
    PlayerDetails(PlayerDetailsForm),
    Payment(PaymentSummary),
    Review(RegistrationDraft),
}

#[derive(Debug, Clone)]
pub struct WizardState {
    catalog: Arc<Catalog>,
    step: WizardStep,
    gender: Gender,
    offering: Option<OfferingId>,
    team_name: String,
    contact: String,
    roster: Roster,
    payment: Option<PaymentProof>,
    receipt: Option<Receipt>,
}

impl WizardState {
    /// Creates an idle session over the given catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            step: WizardStep::Idle,
            gender: Gender::default(),
            offering: None,
            team_name: String::new(),
            contact: String::new(),
            roster: Roster::default(),
            payment: None,
            receipt: None,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn selected_gender(&self) -> Gender {
        self.gender
    }

    /// The selected offering, resolved against the catalog by id.
    pub fn selected_offering(&self) -> Option<&Offering> {
        self.offering
            .as_ref()
            .and_then(|id| self.catalog.find_by_id(id))
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn payment_proof(&self) -> Option<&PaymentProof> {
        self.payment.as_ref()
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    /// Offerings for the selected gender, queried fresh from the catalog.
    pub fn available_offerings(&self, filter: CategoryFilter) -> Vec<&Offering> {
        self.catalog.query(self.gender, filter)
    }

    // ───────────────────────────────────────────────────────────────
    // Step 1: sport selection
    // ───────────────────────────────────────────────────────────────

    /// Leaves `Idle` for the first step.
    pub fn begin(&mut self) -> Result<(), WizardError> {
        self.step = self.checked_transition(WizardStep::SportSelection)?;
        Ok(())
    }

    /// Switches division. Always drops the selected offering.
    pub fn select_gender(&mut self, gender: Gender) -> Result<(), WizardError> {
        self.require_step(WizardStep::SportSelection)?;
        self.gender = gender;
        self.offering = None;
        Ok(())
    }

    pub fn select_offering(&mut self, id: &OfferingId) -> Result<&Offering, WizardError> {
        self.require_step(WizardStep::SportSelection)?;
        let offering = self
            .catalog
            .find_by_id(id)
            .ok_or_else(|| WizardError::OfferingNotFound(id.clone()))?;
        if offering.gender != self.gender {
            return Err(WizardError::OfferingNotInDivision {
                id: id.clone(),
                gender: self.gender,
            });
        }
        self.offering = Some(id.clone());
        self.selected_offering().ok_or(WizardError::NoOfferingSelected)
    }

    pub fn clear_offering(&mut self) -> Result<(), WizardError> {
        self.require_step(WizardStep::SportSelection)?;
        self.offering = None;
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Step 2: player details
    // ───────────────────────────────────────────────────────────────

    pub fn set_team_name(&mut self, team_name: impl Into<String>) -> Result<(), WizardError> {
        self.require_step(WizardStep::PlayerDetails)?;
        self.team_name = team_name.into();
        Ok(())
    }

    pub fn set_contact(&mut self, contact: impl Into<String>) -> Result<(), WizardError> {
        self.require_step(WizardStep::PlayerDetails)?;
        self.contact = contact.into();
        Ok(())
    }

    /// Updates one slot and refreshes the captain chooser.
    pub fn set_player_name(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.require_step(WizardStep::PlayerDetails)?;
        self.roster.set_name(index, name)
    }

    pub fn choose_captain(&mut self, index: Option<usize>) -> Result<(), WizardError> {
        self.require_step(WizardStep::PlayerDetails)?;
        self.require_captaincy(index)?;
        self.roster.choose_captain(index)
    }

    pub fn choose_vice_captain(&mut self, index: Option<usize>) -> Result<(), WizardError> {
        self.require_step(WizardStep::PlayerDetails)?;
        self.require_captaincy(index)?;
        self.roster.choose_vice_captain(index)
    }

    /// Current chooser options; empty for offerings without a captain.
    pub fn leader_options(&self) -> Vec<LeaderOption> {
        if self.selected_offering().map_or(false, |o| o.has_captain) {
            self.roster.leader_options()
        } else {
            Vec::new()
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Step 3: payment
    // ───────────────────────────────────────────────────────────────

    /// Builds the gateway request for the selected offering.
    pub fn payment_request(&self, terms: &PaymentTerms) -> Result<PaymentRequest, WizardError> {
        self.require_step(WizardStep::Payment)?;
        if self.is_paid() {
            return Err(WizardError::AlreadyPaid);
        }
        let offering = self
            .selected_offering()
            .ok_or(WizardError::NoOfferingSelected)?;
        Ok(PaymentRequest::for_offering(offering, terms))
    }

    /// Applies a gateway outcome.
    ///
    /// An initiation failure leaves the proof untouched. A cancel, or a
    /// success without an id, records a `Failed` proof.
    pub fn record_payment(
        &mut self,
        outcome: &PaymentOutcome,
        at: Timestamp,
    ) -> Result<(), WizardError> {
        self.require_step(WizardStep::Payment)?;
        if self.is_paid() {
            return Err(WizardError::AlreadyPaid);
        }
        let amount = self
            .selected_offering()
            .ok_or(WizardError::NoOfferingSelected)?
            .entry_fee;

        let proof = match outcome {
            PaymentOutcome::InitiationFailed { .. } => return Ok(()),
            PaymentOutcome::Success { payment_id } if !payment_id.trim().is_empty() => {
                PaymentProof {
                    external_payment_id: payment_id.trim().to_string(),
                    status: PaymentStatus::Success,
                    amount,
                    recorded_at: at,
                }
            }
            PaymentOutcome::Success { .. } | PaymentOutcome::Cancelled => PaymentProof {
                external_payment_id: String::new(),
                status: PaymentStatus::Failed,
                amount: 0,
                recorded_at: at,
            },
        };
        self.payment = Some(proof);
        Ok(())
    }

    /// Attaches the receipt generated for a confirmed payment.
    pub fn attach_receipt(&mut self, receipt: Receipt) -> Result<(), WizardError> {
        if !self.is_paid() {
            return Err(WizardError::PaymentNotConfirmed);
        }
        self.receipt = Some(receipt);
        Ok(())
    }

    pub fn is_paid(&self) -> bool {
        self.payment.as_ref().map_or(false, PaymentProof::is_confirmed)
    }

    /// Banner for the payment step at `now`. The failure banner expires.
    pub fn payment_banner(&self, now: &Timestamp) -> Option<PaymentBanner> {
        let proof = self.payment.as_ref()?;
        match proof.status {
            PaymentStatus::Success => Some(PaymentBanner::Success {
                payment_id: proof.external_payment_id.clone(),
                amount: proof.amount,
            }),
            PaymentStatus::Failed => {
                let shown_for = now.duration_since(&proof.recorded_at).num_seconds();
                (shown_for < FAILURE_BANNER_TTL_SECS).then_some(PaymentBanner::Failed)
            }
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    pub fn validate_step(&self, step: WizardStep) -> StepValidation {
        match step {
            WizardStep::SportSelection => validate_sport_selection(self.selected_offering()),
            WizardStep::PlayerDetails => validate_player_details(PlayerDetailsInput {
                team_name: &self.team_name,
                contact: &self.contact,
                roster: &self.roster,
                has_captain: self.selected_offering().map_or(false, |o| o.has_captain),
            }),
            WizardStep::Payment => validate_payment(self.payment.as_ref()),
            WizardStep::Idle | WizardStep::Review | WizardStep::Completed => {
                StepValidation::passed(step)
            }
        }
    }

    pub fn validate_current_step(&self) -> StepValidation {
        self.validate_step(self.step)
    }

    /// True if `advance` would succeed.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Idle => true,
            step => step.next().is_some() && self.validate_current_step().is_ok(),
        }
    }

    /// Moves to the next step if the current one validates.
    pub fn advance(&mut self) -> Result<StepEntry, WizardError> {
        if self.step == WizardStep::Idle {
            self.begin()?;
            return Ok(StepEntry::SportSelection);
        }

        let next = self.step.next().ok_or(WizardError::NoNextStep(self.step))?;
        self.validate_current_step().into_result()?;
        self.checked_transition(next)?;

        let entry = match next {
            WizardStep::PlayerDetails => {
                let offering = self
                    .selected_offering()
                    .ok_or(WizardError::NoOfferingSelected)?;
                let participant_label = offering.participant_label().to_string();
                let has_captain = offering.has_captain;
                let players_count = offering.players_count as usize;

                self.roster = Roster::with_slots(players_count);
                StepEntry::PlayerDetails(PlayerDetailsForm {
                    participant_label,
                    slots: self.roster.slots(),
                    has_captain,
                })
            }
            WizardStep::Payment => {
                let summary = PaymentSummary::for_offering(
                    self.selected_offering()
                        .ok_or(WizardError::NoOfferingSelected)?,
                );
                self.payment = None;
                self.receipt = None;
                StepEntry::Payment(summary)
            }
            WizardStep::Review => StepEntry::Review(registration::preview(self)?),
            WizardStep::SportSelection | WizardStep::Idle | WizardStep::Completed => {
                return Err(WizardError::InvalidTransition {
                    from: self.step,
                    to: next,
                })
            }
        };

        self.step = next;
        Ok(entry)
    }

    /// Returns to an earlier numbered step. Never validates or clears data.
    pub fn retreat(&mut self, to: WizardStep) -> Result<(), WizardError> {
        if !to.is_before(&self.step) {
            return Err(WizardError::InvalidTransition {
                from: self.step,
                to,
            });
        }
        self.step = self.checked_transition(to)?;
        Ok(())
    }

    /// Marks the session submitted. Only valid from the review step.
    pub fn complete(&mut self) -> Result<(), WizardError> {
        self.step = self.checked_transition(WizardStep::Completed)?;
        Ok(())
    }

    /// Starts a fresh registration on step 1, keeping the selected gender.
    pub fn reset(&mut self) {
        self.step = WizardStep::SportSelection;
        self.offering = None;
        self.team_name.clear();
        self.contact.clear();
        self.roster = Roster::default();
        self.payment = None;
        self.receipt = None;
    }

    fn require_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::NotOnStep {
                expected,
                actual: self.step,
            })
        }
    }

    fn require_captaincy(&self, index: Option<usize>) -> Result<(), WizardError> {
        let has_captain = self.selected_offering().map_or(false, |o| o.has_captain);
        if index.is_some() && !has_captain {
            return Err(WizardError::NoCaptainForOffering);
        }
        Ok(())
    }

    fn checked_transition(&self, to: WizardStep) -> Result<WizardStep, WizardError> {
        self.step
            .transition_to(to)
            .map_err(|_| WizardError::InvalidTransition {
                from: self.step,
                to,
            })
    }
}
