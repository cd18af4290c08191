//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError};
use crate::config::ShopConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; the catalog is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ShopConfig,
    catalog: Catalog,
}

impl AppState {
    #[must_use]
    pub fn new(config: ShopConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Build state from configuration, loading `SHOP_CATALOG_PATH` when set
    /// and the built-in catalog otherwise.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be read or is invalid.
    pub fn load(config: ShopConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin()?,
        };
        tracing::info!(
            stores = catalog.stores().len(),
            products = catalog.products().len(),
            "catalog loaded"
        );
        Ok(Self::new(config, catalog))
    }

    /// Get a reference to the shop configuration.
    #[must_use]
    pub fn config(&self) -> &ShopConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}
