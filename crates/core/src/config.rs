//! Environment-variable configuration helpers shared by the binaries.
//!
//! Values are read through a lookup function rather than `std::env`
//! directly, so each binary's config parsing can be tested with a plain map.

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Source of configuration values.
#[derive(Debug, Clone, Copy)]
pub struct Env<F> {
    lookup: F,
}

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub const fn new(lookup: F) -> Self {
        Self { lookup }
    }

    /// Get an optional value. Blank values count as unset.
    pub fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|value| !value.trim().is_empty())
    }

    /// Get a required value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if the variable is unset or blank.
    pub fn required(&self, key: &str) -> Result<String, ConfigError> {
        self.optional(key)
            .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    /// Get a value with a default.
    pub fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse a value, falling back to `default` when unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the value is set but does not parse.
    pub fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.optional(key).map_or(Ok(default), |value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
    }
}

/// Lookup backed by the process environment.
#[must_use]
pub fn process_env() -> Env<impl Fn(&str) -> Option<String>> {
    Env::new(|key: &str| std::env::var(key).ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;
    use std::net::IpAddr;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Env<impl Fn(&str) -> Option<String>> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Env::new(move |key: &str| map.get(key).cloned())
    }

    #[test]
    fn test_blank_is_unset() {
        let env = env(&[("A", "  ")]);
        assert_eq!(env.optional("A"), None);
        assert_eq!(env.or_default("A", "x"), "x");
        assert_eq!(
            env.required("A"),
            Err(ConfigError::MissingEnvVar("A".to_string()))
        );
    }

    #[test]
    fn test_parse_or() {
        let env = env(&[("PORT", " 8080 "), ("HOST", "nope")]);
        assert_eq!(env.parse_or("PORT", 1u16).unwrap(), 8080);
        assert_eq!(env.parse_or("MISSING", 7u16).unwrap(), 7);
        assert!(matches!(
            env.parse_or::<IpAddr>("HOST", IpAddr::from([127, 0, 0, 1])),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "HOST"
        ));
    }
}
