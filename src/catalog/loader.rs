//! Catalog loading from disk.
//!
//! The catalog is read once at startup and never refreshed.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::catalog::vehicle::{Catalog, Vehicle};

/// Sample catalog compiled into the binary, used when no path is configured.
const BUNDLED_CATALOG: &str = include_str!("../../data/cars.json");

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a catalog from a JSON array of vehicles.
pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogError> {
    let vehicles: Vec<Vehicle> = serde_json::from_str(content)?;
    Ok(Catalog::new(vehicles))
}

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let catalog = parse_catalog(&content)?;

    tracing::info!(path = %path.display(), vehicles = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

/// The sample catalog shipped with the binary.
pub fn bundled_catalog() -> Result<Catalog, CatalogError> {
    let catalog = parse_catalog(BUNDLED_CATALOG)?;
    tracing::info!(vehicles = catalog.len(), "Bundled catalog loaded");
    Ok(catalog)
}
