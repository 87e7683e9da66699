//! Server configuration
//!
//! Resolved from environment variables at startup.

use std::path::PathBuf;

use crate::catalog::{Catalog, CatalogResult};

/// Environment variable naming a JSON catalog file
pub const CATALOG_PATH_VAR: &str = "FITPULSE_CATALOG_PATH";

/// Default log directive when `RUST_LOG` does not override it
pub const DEFAULT_LOG_DIRECTIVE: &str = "fitpulse=info";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// JSON catalog to serve instead of the built-in library
    pub catalog_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_path = lookup(CATALOG_PATH_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self { catalog_path }
    }

    /// Load the configured catalog, falling back to the built-in one
    pub fn load_catalog(&self) -> CatalogResult<Catalog> {
        match &self.catalog_path {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path.display());
                Catalog::from_json_file(path)
            }
            None => Ok(Catalog::builtin()),
        }
    }
}
