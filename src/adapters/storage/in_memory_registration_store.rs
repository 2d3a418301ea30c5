//! In-Memory Registration Store Adapter
//!
//! Keeps records in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::RegistrationId;
use crate::domain::registration::RegistrationRecord;
use crate::ports::{RegistrationStore, StoreError};

/// In-memory storage for registration records
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistrationStore {
    records: Arc<RwLock<Vec<RegistrationRecord>>>,
}

impl InMemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored records
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl RegistrationStore for InMemoryRegistrationStore {
    async fn append(&self, record: &RegistrationRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<RegistrationRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn remove(&self, id: RegistrationId) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() != before)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.records.write().await.clear();
        Ok(())
    }
}
