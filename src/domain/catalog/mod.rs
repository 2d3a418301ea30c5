//! Catalog of offerings (sports) and their query helpers.

mod offering;
mod registry;

pub use offering::{Category, CategoryFilter, GameType, Gender, GenderRestriction, Offering};
pub use registry::Catalog;

#[cfg(test)]
pub(crate) use offering::test_support;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, OfferingId};

/// Errors raised while building or loading a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Failed to read catalog: {0}")]
    Io(String),

    #[error("Duplicate offering id: {0}")]
    DuplicateId(OfferingId),

    #[error("Offering {0} has an empty name")]
    EmptyName(OfferingId),

    #[error("Offering {id}: {game_type} entries cannot have {players_count} players")]
    PlayersCountMismatch {
        id: OfferingId,
        game_type: GameType,
        players_count: u32,
    },

    #[error("Offering {0}: captain flag must be set exactly for team entries")]
    CaptainMismatch(OfferingId),

    #[error("Offering {0}: gender restriction excludes its own division")]
    GenderRestrictionMismatch(OfferingId),
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(ErrorCode::InvalidCatalog, err.to_string())
    }
}
