//! Recipe catalog loaded in the background at startup.
//!
//! The server starts immediately with a catalog in the loading state. A
//! background task reads the recipe list and swaps it in when done. A failed
//! load is logged and leaves the catalog ready and empty; there is no retry.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::recipe::Recipe;

/// Errors that can occur while loading recipes.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read recipes: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to fetch recipes: {0}")]
    Http(#[from] reqwest::Error),
    #[error("recipe source answered with HTTP status {0}")]
    Status(u16),
    #[error("failed to parse recipes: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("recipe catalog lock poisoned")]
    Poisoned,
}

/// Where the recipe list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSource {
    /// Local JSON file.
    File(PathBuf),
    /// JSON document served over HTTP.
    Url(String),
}

impl fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

impl RecipeSource {
    /// Read and parse the recipe list.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` on I/O or transport failure, a non-success HTTP
    /// status, or a document that is not a JSON array of recipes.
    pub async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<Recipe>, LoadError> {
        let body = match self {
            Self::File(path) => tokio::fs::read_to_string(path).await?,
            Self::Url(url) => {
                let response = client.get(url).send().await?;
                if !response.status().is_success() {
                    return Err(LoadError::Status(response.status().as_u16()));
                }
                response.text().await?
            }
        };

        Ok(serde_json::from_str(&body)?)
    }
}

/// Point-in-time view of the catalog.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Still waiting for the background load.
    pub loading: bool,
    /// Empty while loading or after a failed load.
    pub recipes: Arc<[Recipe]>,
}

/// Shared recipe catalog.
///
/// Starts in the loading state and is populated once by
/// [`RecipeCatalog::start_loading`].
#[derive(Clone, Default)]
pub struct RecipeCatalog {
    inner: Arc<RwLock<Option<Arc<[Recipe]>>>>,
}

impl RecipeCatalog {
    /// Create a catalog in the loading state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog that is already loaded.
    #[must_use]
    pub fn ready(recipes: Vec<Recipe>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(recipes.into()))),
        }
    }

    /// Check if loading has finished (successfully or not).
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Current state of the catalog.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Poisoned` if a writer panicked.
    pub fn snapshot(&self) -> Result<Snapshot, LoadError> {
        let guard = self.inner.read().map_err(|_| LoadError::Poisoned)?;
        Ok(guard.as_ref().map_or_else(
            || Snapshot {
                loading: true,
                recipes: Arc::from(Vec::new()),
            },
            |recipes| Snapshot {
                loading: false,
                recipes: Arc::clone(recipes),
            },
        ))
    }

    /// Publish the loaded recipes. Called by the background task.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Poisoned` if a reader panicked.
    pub fn set_ready(&self, recipes: Vec<Recipe>) -> Result<(), LoadError> {
        *self.inner.write().map_err(|_| LoadError::Poisoned)? = Some(recipes.into());
        Ok(())
    }

    /// Spawn a background task loading the catalog from `source`.
    ///
    /// Until it completes, [`RecipeCatalog::snapshot`] reports loading.
    pub fn start_loading(&self, source: RecipeSource, client: reqwest::Client) -> JoinHandle<()> {
        let catalog = self.clone();
        info!(%source, "Spawning background recipe load task");

        tokio::spawn(async move {
            let recipes = load(&source, &client).await;
            if let Err(e) = catalog.set_ready(recipes) {
                error!(error = %e, "Failed to publish recipe catalog");
            }
        })
    }
}

/// Load recipes, turning any failure into an empty list.
#[instrument(skip(client))]
async fn load(source: &RecipeSource, client: &reqwest::Client) -> Vec<Recipe> {
    match source.fetch(client).await {
        Ok(recipes) => {
            info!(count = recipes.len(), "Recipes loaded");
            recipes
        }
        Err(e) => {
            error!(error = %e, "Error fetching recipes");
            Vec::new()
        }
    }
}
