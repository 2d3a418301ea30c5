//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where registration records are kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the collection file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Storage namespace identifier; the collection lives in `<namespace>.json`
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ns = self.namespace.trim();
        if ns.is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__NAMESPACE"));
        }
        if ns.contains(['/', '\\']) || ns == "." || ns == ".." {
            return Err(ValidationError::InvalidNamespace);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            namespace: default_namespace(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_namespace() -> String {
    "bcoe_sports_registrations".to_string()
}
