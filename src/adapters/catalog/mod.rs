//! Catalog loading adapters.

mod yaml_catalog_loader;

pub use yaml_catalog_loader::YamlCatalogLoader;
