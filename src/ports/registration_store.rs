//! Registration Store Port - durable collection of finished registrations.
//!
//! A store holds one collection keyed by a namespace. Writes are
//! all-or-nothing; unreadable stored data is treated as an empty collection.

use async_trait::async_trait;

use crate::domain::catalog::Gender;
use crate::domain::foundation::{DomainError, ErrorCode, OfferingId, RegistrationId};
use crate::domain::registration::{RegistrationRecord, RegistrationStats};

/// Errors that can occur during store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Registration already stored: {0}")]
    DuplicateId(RegistrationId),

    #[error("Failed to serialize registrations: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::DuplicateId(_) => ErrorCode::DuplicateRegistration,
            StoreError::SerializationFailed(_) | StoreError::IoError(_) => ErrorCode::StorageError,
        };
        let domain = DomainError::new(code, err.to_string());
        match &err {
            StoreError::DuplicateId(id) => domain.with_detail("registration_id", id.to_string()),
            _ => domain,
        }
    }
}

/// Port for persisting registration records
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Append a record
    ///
    /// # Errors
    /// Returns `StoreError::DuplicateId` if a record with the same id exists,
    /// or an IO/serialization error if the write failed. A failed write
    /// leaves the stored collection unchanged.
    async fn append(&self, record: &RegistrationRecord) -> Result<(), StoreError>;

    /// All records in insertion order
    async fn list_all(&self) -> Result<Vec<RegistrationRecord>, StoreError>;

    /// Remove a record, returning whether it existed
    async fn remove(&self, id: RegistrationId) -> Result<bool, StoreError>;

    /// Remove every record
    async fn clear(&self) -> Result<(), StoreError>;

    /// Records for one offering
    async fn filter_by_sport(
        &self,
        sport_id: &OfferingId,
    ) -> Result<Vec<RegistrationRecord>, StoreError> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .filter(|r| r.sport_id() == sport_id)
            .collect())
    }

    /// Records for one division
    async fn filter_by_gender(
        &self,
        gender: Gender,
    ) -> Result<Vec<RegistrationRecord>, StoreError> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .filter(|r| r.gender() == gender)
            .collect())
    }

    /// Totals by gender and by offering name
    async fn stats(&self) -> Result<RegistrationStats, StoreError> {
        Ok(RegistrationStats::from_records(&self.list_all().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_id_converts_with_registration_detail() {
        let id = RegistrationId::new();
        let err = DomainError::from(StoreError::DuplicateId(id));

        assert_eq!(err.code, ErrorCode::DuplicateRegistration);
        assert_eq!(err.details.get("registration_id"), Some(&id.to_string()));
    }

    #[test]
    fn io_error_converts_to_storage_code() {
        let err = DomainError::from(StoreError::IoError("disk full".to_string()));

        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.details.is_empty());
    }
}
