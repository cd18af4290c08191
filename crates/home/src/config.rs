//! Home server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `HOME_HOST` - Bind address (default: 127.0.0.1)
//! - `HOME_PORT` - Listen port (default: 1220)
//! - `HOME_RECIPE_URL` - Recipe environment
//! - `HOME_SHOPPING_URL` - Shopping environment
//! - `HOME_MAP_URL` - Map environment
//! - `HOME_WIKI_URL` - Wiki page embedded under `/wiki`
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use webenv_core::config::{ConfigError, Env, process_env};

const DEFAULT_PORT: u16 = 1220;
const DEFAULT_RECIPE_URL: &str = "http://localhost:1206/";
const DEFAULT_SHOPPING_URL: &str = "http://localhost:1207/";
const DEFAULT_MAP_URL: &str = "http://localhost:3000/#map=7/42.896/-76.481&layers=Y";
const DEFAULT_WIKI_URL: &str =
    "http://localhost:8888/wikipedia_en_all_maxi_2022-05/A/User:The_other_Kiwix_guy/Landing";

/// Home application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    pub recipe_url: String,
    pub shopping_url: String,
    pub map_url: String,
    pub wiki_url: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            recipe_url: DEFAULT_RECIPE_URL.to_string(),
            shopping_url: DEFAULT_SHOPPING_URL.to_string(),
            map_url: DEFAULT_MAP_URL.to_string(),
            wiki_url: DEFAULT_WIKI_URL.to_string(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl HomeConfig {
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
            host: env.parse_or("HOME_HOST", defaults.host)?,
            port: env.parse_or("HOME_PORT", defaults.port)?,
            recipe_url: env.or_default("HOME_RECIPE_URL", DEFAULT_RECIPE_URL),
            shopping_url: env.or_default("HOME_SHOPPING_URL", DEFAULT_SHOPPING_URL),
            map_url: env.or_default("HOME_MAP_URL", DEFAULT_MAP_URL),
            wiki_url: env.or_default("HOME_WIKI_URL", DEFAULT_WIKI_URL),
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
