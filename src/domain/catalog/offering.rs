//! Offering - a registrable sport definition.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CatalogError;
use crate::domain::foundation::{OfferingId, ValidationError};

/// Where the sport is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Outdoor,
    Indoor,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Outdoor => "outdoor",
            Category::Indoor => "indoor",
        }
    }

    /// Capitalised label for display ("Outdoor", "Indoor").
    pub fn label(&self) -> &'static str {
        match self {
            Category::Outdoor => "Outdoor",
            Category::Indoor => "Indoor",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category filter used by catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "outdoor" => Ok(CategoryFilter::Only(Category::Outdoor)),
            "indoor" => Ok(CategoryFilter::Only(Category::Indoor)),
            other => Err(ValidationError::invalid_format(
                "category",
                format!("expected all, outdoor or indoor, got '{}'", other),
            )),
        }
    }
}

/// Which division the offering belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Boys,
    Girls,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Boys => "boys",
            Gender::Girls => "girls",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boys" => Ok(Gender::Boys),
            "girls" => Ok(Gender::Girls),
            other => Err(ValidationError::invalid_format(
                "gender",
                format!("expected boys or girls, got '{}'", other),
            )),
        }
    }
}

/// Whether the sport is held for one division only or for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenderRestriction {
    BoysOnly,
    GirlsOnly,
    Both,
}

impl GenderRestriction {
    /// Returns true if an offering of the given division may carry this restriction.
    pub fn admits(&self, gender: Gender) -> bool {
        match self {
            GenderRestriction::BoysOnly => gender == Gender::Boys,
            GenderRestriction::GirlsOnly => gender == Gender::Girls,
            GenderRestriction::Both => true,
        }
    }
}

/// How many players make up one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Individual,
    Double,
    Team,
}

impl GameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Individual => "individual",
            GameType::Double => "double",
            GameType::Team => "team",
        }
    }

    /// Returns true if `players_count` is legal for this game type.
    pub fn accepts_players(&self, players_count: u32) -> bool {
        match self {
            GameType::Individual => players_count == 1,
            GameType::Double => players_count == 2,
            GameType::Team => players_count >= 2,
        }
    }

    /// Team entries elect a captain and vice-captain.
    pub fn has_captain(&self) -> bool {
        matches!(self, GameType::Team)
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registrable sport definition, sourced from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offering {
    pub id: OfferingId,
    pub name: String,
    pub category: Category,
    pub gender: Gender,
    pub gender_restriction: GenderRestriction,
    pub game_type: GameType,
    pub players_count: u32,
    /// Fee in major currency units (rupees).
    pub entry_fee: u32,
    pub icon: String,
    pub has_captain: bool,
}

impl Offering {
    /// Checks the offering's internal consistency.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(self.id.clone()));
        }
        if !self.game_type.accepts_players(self.players_count) {
            return Err(CatalogError::PlayersCountMismatch {
                id: self.id.clone(),
                game_type: self.game_type,
                players_count: self.players_count,
            });
        }
        if self.has_captain != self.game_type.has_captain() {
            return Err(CatalogError::CaptainMismatch(self.id.clone()));
        }
        if !self.gender_restriction.admits(self.gender) {
            return Err(CatalogError::GenderRestrictionMismatch(self.id.clone()));
        }
        Ok(())
    }

    /// Short label for the game type: "Individual", "Double" or "Team (N)".
    pub fn game_type_label(&self) -> String {
        match self.game_type {
            GameType::Individual => "Individual".to_string(),
            GameType::Double => "Double".to_string(),
            GameType::Team => format!("Team ({})", self.players_count),
        }
    }

    /// Label for the team name field on the player details step.
    pub fn participant_label(&self) -> &'static str {
        if self.game_type == GameType::Team {
            "Team Name"
        } else {
            "Participant Name"
        }
    }

    /// Fee in minor currency units (paise) for the payment gateway.
    pub fn entry_fee_minor(&self) -> u64 {
        u64::from(self.entry_fee) * 100
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn offering(id: &str, game_type: GameType, players_count: u32, fee: u32) -> Offering {
        Offering {
            id: OfferingId::new(id).unwrap(),
            name: format!("Sport {}", id),
            category: Category::Outdoor,
            gender: Gender::Boys,
            gender_restriction: GenderRestriction::Both,
            game_type,
            players_count,
            entry_fee: fee,
            icon: "*".to_string(),
            has_captain: game_type.has_captain(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::offering;
    use super::*;

    #[test]
    fn game_type_player_counts() {
        assert!(GameType::Individual.accepts_players(1));
        assert!(!GameType::Individual.accepts_players(2));
        assert!(GameType::Double.accepts_players(2));
        assert!(!GameType::Double.accepts_players(3));
        assert!(GameType::Team.accepts_players(11));
        assert!(!GameType::Team.accepts_players(1));
    }

    #[test]
    fn validate_rejects_mismatched_players_count() {
        let mut o = offering("x", GameType::Double, 2, 100);
        o.players_count = 3;
        assert!(matches!(
            o.validate(),
            Err(CatalogError::PlayersCountMismatch { players_count: 3, .. })
        ));
    }

    #[test]
    fn validate_rejects_captain_flag_on_individual() {
        let mut o = offering("x", GameType::Individual, 1, 50);
        o.has_captain = true;
        assert!(matches!(o.validate(), Err(CatalogError::CaptainMismatch(_))));
    }

    #[test]
    fn validate_rejects_girls_only_for_boys() {
        let mut o = offering("x", GameType::Team, 6, 200);
        o.gender_restriction = GenderRestriction::GirlsOnly;
        assert!(matches!(
            o.validate(),
            Err(CatalogError::GenderRestrictionMismatch(_))
        ));
    }

    #[test]
    fn labels() {
        assert_eq!(offering("a", GameType::Team, 6, 1).game_type_label(), "Team (6)");
        assert_eq!(offering("a", GameType::Double, 2, 1).game_type_label(), "Double");
        assert_eq!(offering("a", GameType::Team, 6, 1).participant_label(), "Team Name");
        assert_eq!(
            offering("a", GameType::Individual, 1, 1).participant_label(),
            "Participant Name"
        );
    }

    #[test]
    fn entry_fee_minor_is_hundredfold() {
        assert_eq!(offering("a", GameType::Team, 6, 250).entry_fee_minor(), 25_000);
    }

    #[test]
    fn category_filter_parses() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Indoor".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Indoor)
        );
        assert!("space".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn gender_restriction_serializes_kebab_case() {
        let json = serde_json::to_string(&GenderRestriction::BoysOnly).unwrap();
        assert_eq!(json, "\"boys-only\"");
    }
}
