//! Loading a product catalog from TOML.

use super::product::{Product, seed_products};
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Catalog file contents.
///
/// ```toml
/// [[products]]
/// name = "Apple"
/// category = "Fruits"
/// price = "$1"
/// stocked = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products in display order.
    #[serde(default)]
    products: Vec<Product>,
}

impl CatalogConfig {
    /// The built-in seed catalog.
    pub fn seed() -> Self {
        Self {
            products: seed_products(),
        }
    }

    /// Parses a catalog from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| CatalogError::new(format!("Failed to parse catalog: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a catalog from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        debug!("Loading catalog from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::new(format!("Failed to read catalog file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(products = config.products.len(), "Catalog loaded");
        Ok(config)
    }

    /// Loads from `path` if given, otherwise falls back to the seed catalog.
    pub fn load_or_seed(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No catalog file given, using seed products");
                Ok(Self::seed())
            }
        }
    }

    /// Consumes the config, returning its products.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    /// Rejects catalogs with two products of the same name.
    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for product in &self.products {
            if !seen.insert(product.name().as_str()) {
                return Err(CatalogError::new(format!(
                    "Duplicate product name: {}",
                    product.name()
                )));
            }
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::seed()
    }
}

/// Catalog loading error.
#[derive(Debug, Clone, Display)]
#[display("Catalog error: {} at {}:{}", message, file, line)]
pub struct CatalogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CatalogError {
    /// Creates a new catalog error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl std::error::Error for CatalogError {}
