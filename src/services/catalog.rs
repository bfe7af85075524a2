use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::models::Scheme;

/// Errors that can occur while loading the scheme catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable scheme catalog, loaded wholesale at startup
///
/// The backing file is a JSON array of schemes. A record that fails to
/// parse is skipped with a warning rather than failing the whole load;
/// malformed eligibility blocks inside a record degrade to "no eligibility
/// data" during deserialization.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    schemes: Arc<Vec<Scheme>>,
}

impl SchemeCatalog {
    /// Load the catalog from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&raw)?;
        let total = records.len();

        let schemes: Vec<Scheme> = records
            .into_iter()
            .filter_map(|record| serde_json::from_value(record).ok())
            .collect();

        if schemes.len() < total {
            tracing::warn!(
                "Skipped {} malformed scheme records in {}",
                total - schemes.len(),
                path.display()
            );
        }
        tracing::info!("Loaded {} schemes from {}", schemes.len(), path.display());

        Ok(Self {
            schemes: Arc::new(schemes),
        })
    }

    /// Build a catalog from schemes already in memory
    pub fn from_schemes(schemes: Vec<Scheme>) -> Self {
        Self {
            schemes: Arc::new(schemes),
        }
    }

    /// Shared handle to the scheme list
    pub fn schemes(&self) -> Arc<Vec<Scheme>> {
        Arc::clone(&self.schemes)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}
