//! WizardStep - the ordered steps of the registration flow.
//!
//! # Step Order
//!
//! 1. SportSelection → 2. PlayerDetails → 3. Payment → 4. Review
//!
//! `Idle` precedes the first step and `Completed` follows a successful
//! submit. Forward moves go one step at a time; backward moves may jump to
//! any earlier numbered step.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Idle,
    SportSelection,
    PlayerDetails,
    Payment,
    Review,
    Completed,
}

impl WizardStep {
    /// The numbered steps in order.
    pub const ORDER: [WizardStep; 4] = [
        WizardStep::SportSelection,
        WizardStep::PlayerDetails,
        WizardStep::Payment,
        WizardStep::Review,
    ];

    pub const TOTAL: u8 = 4;

    /// 1-based position of a numbered step, `None` for `Idle`/`Completed`.
    pub fn number(&self) -> Option<u8> {
        Self::ORDER
            .iter()
            .position(|s| s == self)
            .map(|idx| idx as u8 + 1)
    }

    pub fn from_number(number: u8) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::ORDER.get(usize::from(idx)).copied())
    }

    /// The following numbered step, if any.
    pub fn next(&self) -> Option<Self> {
        self.number().and_then(|n| Self::from_number(n + 1))
    }

    /// The preceding numbered step, if any.
    pub fn previous(&self) -> Option<Self> {
        self.number().and_then(|n| Self::from_number(n - 1))
    }

    /// Returns true if `self` comes before `other` among the numbered steps.
    pub fn is_before(&self, other: &Self) -> bool {
        match (self.number(), other.number()) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Idle => "Not started",
            WizardStep::SportSelection => "Select Sport",
            WizardStep::PlayerDetails => "Player Details",
            WizardStep::Payment => "Payment",
            WizardStep::Review => "Review & Submit",
            WizardStep::Completed => "Completed",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        match (self, target) {
            (Idle, SportSelection) => true,
            (Review, Completed) => true,
            (Completed, SportSelection) => true,
            (from, to) => from.next() == Some(*to) || to.is_before(from),
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Idle => vec![SportSelection],
            Completed => vec![SportSelection],
            step => {
                let mut targets: Vec<Self> =
                    Self::ORDER.iter().copied().filter(|s| s.is_before(step)).collect();
                if let Some(next) = step.next() {
                    targets.push(next);
                }
                if *step == Review {
                    targets.push(Completed);
                }
                targets
            }
        }
    }
}
