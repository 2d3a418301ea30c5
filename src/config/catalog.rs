//! Catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Catalog source. Without a path the built-in catalog is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML file replacing the built-in catalog
    pub path: Option<PathBuf>,
}
