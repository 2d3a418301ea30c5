//! File-based Registration Store Adapter
//!
//! Keeps the whole collection as one JSON array at
//! `<data_dir>/<namespace>.json`.
//!
//! # Atomic Writes
//!
//! Every write goes to `<namespace>.json.tmp`, is synced, then renamed over
//! the live file, so a failed write never leaves a half-written collection.
//!
//! # Corrupted Data
//!
//! A file that does not parse is logged and read as an empty collection.
//! The next successful write replaces it.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::foundation::RegistrationId;
use crate::domain::registration::RegistrationRecord;
use crate::ports::{RegistrationStore, StoreError};

/// File-based storage for registration records
#[derive(Debug, Clone)]
pub struct FileRegistrationStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileRegistrationStore {
    /// Create a store for `namespace` under `data_dir`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileRegistrationStore::new("./data", "bcoe_sports_registrations");
    /// ```
    pub fn new<P: AsRef<Path>>(data_dir: P, namespace: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{}.json", namespace)),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Path of the collection file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    async fn read_records(&self) -> Result<Vec<RegistrationRecord>, StoreError> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::IoError(e.to_string())),
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        match serde_json::from_slice(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Stored registrations are unreadable, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write_records(&self, records: &[RegistrationRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await.map_err(|e| {
                StoreError::IoError(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            StoreError::IoError(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(json.as_bytes()).await.map_err(|e| {
            StoreError::IoError(format!(
                "Failed to write temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StoreError::IoError(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StoreError::IoError(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl RegistrationStore for FileRegistrationStore {
    async fn append(&self, record: &RegistrationRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        if records.iter().any(|r| r.id == record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        records.push(record.clone());
        self.write_records(&records).await?;

        tracing::debug!(
            registration_id = %record.id,
            total = records.len(),
            "Registration persisted"
        );
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<RegistrationRecord>, StoreError> {
        self.read_records().await
    }

    async fn remove(&self, id: RegistrationId) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.write_records(&records).await?;
        Ok(true)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::IoError(e.to_string())),
        }
    }
}
