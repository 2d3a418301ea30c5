//! Catalog - the queryable list of offerings.
//!
//! Offerings keep their declaration order; every query returns them in that
//! order. A catalog is validated once when it is built and is immutable
//! afterwards, so it is shared behind an `Arc`.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

use super::offering::{Category, CategoryFilter, Gender, Offering};
use super::CatalogError;
use crate::domain::foundation::OfferingId;

const COLLEGE_GAMES_YAML: &str = include_str!("college_games.yaml");

static BUILTIN: Lazy<Result<Arc<Catalog>, CatalogError>> =
    Lazy::new(|| Catalog::from_yaml_str(COLLEGE_GAMES_YAML).map(Arc::new));

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    offerings: Vec<Offering>,
}

/// Immutable, validated list of offerings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    offerings: Vec<Offering>,
}

impl Catalog {
    /// Builds a catalog, checking every offering and id uniqueness.
    pub fn from_offerings(offerings: Vec<Offering>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for offering in &offerings {
            offering.validate()?;
            if !seen.insert(offering.id.clone()) {
                return Err(CatalogError::DuplicateId(offering.id.clone()));
            }
        }
        Ok(Self { offerings })
    }

    /// Parses a YAML catalog document (`offerings: [...]`).
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_offerings(doc.offerings)
    }

    /// The built-in college games catalog.
    pub fn builtin() -> Result<Arc<Catalog>, CatalogError> {
        BUILTIN.clone()
    }

    /// All offerings in declaration order.
    pub fn all(&self) -> &[Offering] {
        &self.offerings
    }

    pub fn len(&self) -> usize {
        self.offerings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty()
    }

    /// Offerings of one division, optionally restricted to a category.
    pub fn query(&self, gender: Gender, filter: CategoryFilter) -> Vec<&Offering> {
        self.offerings
            .iter()
            .filter(|o| o.gender == gender && filter.matches(o.category))
            .collect()
    }

    pub fn find_by_id(&self, id: &OfferingId) -> Option<&Offering> {
        self.offerings.iter().find(|o| &o.id == id)
    }

    /// Offerings of a category across both divisions.
    pub fn by_category(&self, category: Category) -> Vec<&Offering> {
        self.offerings
            .iter()
            .filter(|o| o.category == category)
            .collect()
    }

    /// Sum of entry fees; unknown ids contribute nothing.
    pub fn total_fee(&self, ids: &[OfferingId]) -> u32 {
        ids.iter()
            .filter_map(|id| self.find_by_id(id))
            .map(|o| o.entry_fee)
            .sum()
    }

    /// Sum of player counts; unknown ids contribute nothing.
    pub fn total_players(&self, ids: &[OfferingId]) -> u32 {
        ids.iter()
            .filter_map(|id| self.find_by_id(id))
            .map(|o| o.players_count)
            .sum()
    }
}
