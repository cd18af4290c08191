//! Recipe server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `RECIPE_HOST` - Bind address (default: 127.0.0.1)
//! - `RECIPE_PORT` - Listen port (default: 1206)
//! - `RECIPE_STATIC_DIR` - Directory served as static files (images, data)
//! - `RECIPE_DATA_URL` - Fetch recipes over HTTP instead of from the static dir
//! - `RECIPE_DATA_FILE` - Recipe file inside the static dir (default: recipes.json)
//! - `RECIPE_HOME_URL` - Link target of the "home" button
//! - `RECIPE_SEARCH_DEBOUNCE_MS` - Search quiet period (default: 500)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use webenv_core::config::{ConfigError, Env, process_env};

use crate::catalog::RecipeSource;

const DEFAULT_PORT: u16 = 1206;
const DEFAULT_STATIC_DIR: &str = "crates/recipe/static";
const DEFAULT_DATA_FILE: &str = "recipes.json";
const DEFAULT_HOME_URL: &str = "http://localhost:1220/";
const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Recipe application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Static files root
    pub static_dir: PathBuf,
    /// Remote recipe document, preferred over the file
    pub data_url: Option<String>,
    /// Recipe file name relative to `static_dir`
    pub data_file: String,
    /// Home environment URL
    pub home_url: String,
    /// Search debounce quiet period
    pub search_debounce: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            data_url: None,
            data_file: DEFAULT_DATA_FILE.to_string(),
            home_url: DEFAULT_HOME_URL.to_string(),
            search_debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl RecipeConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(&process_env())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(env: &Env<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: env.parse_or("RECIPE_HOST", defaults.host)?,
            port: env.parse_or("RECIPE_PORT", defaults.port)?,
            static_dir: PathBuf::from(env.or_default("RECIPE_STATIC_DIR", DEFAULT_STATIC_DIR)),
            data_url: env.optional("RECIPE_DATA_URL"),
            data_file: env.or_default("RECIPE_DATA_FILE", DEFAULT_DATA_FILE),
            home_url: env.or_default("RECIPE_HOME_URL", DEFAULT_HOME_URL),
            search_debounce: Duration::from_millis(
                env.parse_or("RECIPE_SEARCH_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS)?,
            ),
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
        })
    }

    /// Get the socket address to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Where the recipe list is loaded from.
    #[must_use]
    pub fn recipe_source(&self) -> RecipeSource {
        self.data_url.as_ref().map_or_else(
            || RecipeSource::File(self.static_dir.join(&self.data_file)),
            |url| RecipeSource::Url(url.clone()),
        )
    }

    /// Debounce period in milliseconds, for the page script.
    #[must_use]
    pub fn debounce_ms(&self) -> u128 {
        self.search_debounce.as_millis()
    }
}
