//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::RecipeCatalog;
use crate::config::RecipeConfig;

/// Application state shared across all handlers.
///
/// The catalog starts out loading; see [`AppState::start_loading`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RecipeConfig,
    catalog: RecipeCatalog,
    http_client: reqwest::Client,
}

impl AppState {
    #[must_use]
    pub fn new(config: RecipeConfig, catalog: RecipeCatalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                http_client: reqwest::Client::new(),
            }),
        }
    }

    /// Spawn the background load of the configured recipe source.
    pub fn start_loading(&self) -> tokio::task::JoinHandle<()> {
        self.inner.catalog.start_loading(
            self.inner.config.recipe_source(),
            self.inner.http_client.clone(),
        )
    }

    /// Get a reference to the recipe configuration.
    #[must_use]
    pub fn config(&self) -> &RecipeConfig {
        &self.inner.config
    }

    /// Get a reference to the recipe catalog.
    #[must_use]
    pub fn catalog(&self) -> &RecipeCatalog {
        &self.inner.catalog
    }
}
