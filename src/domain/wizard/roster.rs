//! Roster - player name slots plus the captain/vice-captain picks.
//!
//! Picks are stored as slot indices. Every name edit refreshes them: a pick
//! survives only while its slot still holds a non-empty name.

use serde::Serialize;

use super::WizardError;

/// One labelled input slot on the player details step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSlot {
    /// Zero-based index used by the setters.
    pub index: usize,
    pub label: String,
}

/// An entry offered by the captain chooser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderOption {
    pub index: usize,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
    captain: Option<usize>,
    vice_captain: Option<usize>,
}

impl Roster {
    /// Creates `players_count` empty slots with no picks.
    pub fn with_slots(players_count: usize) -> Self {
        Self {
            names: vec![String::new(); players_count],
            captain: None,
            vice_captain: None,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn slots(&self) -> Vec<PlayerSlot> {
        (0..self.names.len())
            .map(|index| PlayerSlot {
                index,
                label: format!("Player {} name", index + 1),
            })
            .collect()
    }

    /// Raw names as typed.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Trimmed names in slot order.
    pub fn trimmed_names(&self) -> Vec<String> {
        self.names.iter().map(|n| n.trim().to_string()).collect()
    }

    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> Result<(), WizardError> {
        let slots = self.names.len();
        let slot = self
            .names
            .get_mut(index)
            .ok_or(WizardError::PlayerSlotOutOfRange { index, slots })?;
        *slot = name.into();
        self.refresh_picks();
        Ok(())
    }

    /// Chooser options: slots whose trimmed name is non-empty.
    pub fn leader_options(&self) -> Vec<LeaderOption> {
        self.names
            .iter()
            .enumerate()
            .filter_map(|(index, name)| {
                let name = name.trim();
                (!name.is_empty()).then(|| LeaderOption {
                    index,
                    name: name.to_string(),
                })
            })
            .collect()
    }

    pub fn captain(&self) -> Option<usize> {
        self.captain
    }

    pub fn vice_captain(&self) -> Option<usize> {
        self.vice_captain
    }

    /// Chooses (or clears, with `None`) the captain.
    pub fn choose_captain(&mut self, index: Option<usize>) -> Result<(), WizardError> {
        self.captain = self.checked_pick(index)?;
        Ok(())
    }

    /// Chooses (or clears, with `None`) the vice-captain.
    pub fn choose_vice_captain(&mut self, index: Option<usize>) -> Result<(), WizardError> {
        self.vice_captain = self.checked_pick(index)?;
        Ok(())
    }

    pub fn captain_name(&self) -> Option<String> {
        self.captain.and_then(|i| self.pick_name(i))
    }

    pub fn vice_captain_name(&self) -> Option<String> {
        self.vice_captain.and_then(|i| self.pick_name(i))
    }

    fn pick_name(&self, index: usize) -> Option<String> {
        self.names
            .get(index)
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
    }

    fn checked_pick(&self, index: Option<usize>) -> Result<Option<usize>, WizardError> {
        match index {
            None => Ok(None),
            Some(i) if i >= self.names.len() => Err(WizardError::PlayerSlotOutOfRange {
                index: i,
                slots: self.names.len(),
            }),
            Some(i) if self.pick_name(i).is_none() => {
                Err(WizardError::InvalidLeaderChoice { index: i })
            }
            Some(i) => Ok(Some(i)),
        }
    }

    fn refresh_picks(&mut self) {
        if self.captain.map_or(false, |i| self.pick_name(i).is_none()) {
            self.captain = None;
        }
        if self.vice_captain.map_or(false, |i| self.pick_name(i).is_none()) {
            self.vice_captain = None;
        }
    }
}
