//! Loads the offering catalog from a YAML file, or the built-in one.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

use crate::domain::catalog::{Catalog, CatalogError};

#[derive(Debug, Clone, Default)]
pub struct YamlCatalogLoader {
    path: Option<PathBuf>,
}

impl YamlCatalogLoader {
    /// Loader for a catalog file; `None` selects the built-in catalog.
    pub fn new(path: Option<impl AsRef<Path>>) -> Self {
        Self {
            path: path.map(|p| p.as_ref().to_path_buf()),
        }
    }

    pub fn builtin() -> Self {
        Self { path: None }
    }

    pub async fn load(&self) -> Result<Arc<Catalog>, CatalogError> {
        let Some(path) = &self.path else {
            return Catalog::builtin();
        };

        let yaml = fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
        let catalog = Catalog::from_yaml_str(&yaml)?;

        tracing::info!(
            path = %path.display(),
            offerings = catalog.len(),
            "Catalog loaded"
        );
        Ok(Arc::new(catalog))
    }
}
