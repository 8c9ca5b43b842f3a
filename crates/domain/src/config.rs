//! Client configuration
//!
//! An immutable configuration value built once at startup. Derived fields
//! such as [`ClientConfig::is_production`] are computed eagerly at
//! construction rather than on access, and nothing here is globally
//! mutable.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Deployment environment the client targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Local or development backend.
    #[default]
    Development,
    /// Staging backend.
    Staging,
    /// Production backend.
    Production,
}

impl Environment {
    /// Parses an environment name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfiguration` for unknown names.
    pub fn parse(name: &str) -> DomainResult<Self> {
        match name.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            other => Err(DomainError::InvalidConfiguration(format!(
                "unknown environment: {other}"
            ))),
        }
    }
}

/// Immutable client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the training API.
    pub base_url: Url,
    /// Default per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Deployment environment.
    pub environment: Environment,
    /// Whether this configuration targets production. Derived from
    /// `environment` at construction time.
    pub is_production: bool,
}

impl ClientConfig {
    /// Builds a configuration, validating the base URL and computing
    /// derived flags.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the base URL cannot be parsed
    /// or is not HTTP(S).
    pub fn new(base_url: &str, timeout_ms: u64, environment: Environment) -> DomainResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {base_url}")))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "unsupported scheme: {}",
                base_url.scheme()
            )));
        }

        Ok(Self {
            base_url,
            timeout_ms,
            environment,
            is_production: matches!(environment, Environment::Production),
        })
    }

    /// Builds a configuration with the default timeout.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::new`].
    pub fn with_defaults(base_url: &str, environment: Environment) -> DomainResult<Self> {
        Self::new(base_url, DEFAULT_TIMEOUT_MS, environment)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_production_computed_eagerly() {
        let config =
            ClientConfig::new("https://api.example.com", 30_000, Environment::Production).unwrap();
        assert!(config.is_production);

        let config =
            ClientConfig::new("https://api.example.com", 30_000, Environment::Staging).unwrap();
        assert!(!config.is_production);
    }

    #[test]
    fn test_default_timeout() {
        let config =
            ClientConfig::with_defaults("https://api.example.com", Environment::Development)
                .unwrap();
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn test_rejects_invalid_url() {
        assert!(ClientConfig::new("not a url", 30_000, Environment::Development).is_err());
        assert!(ClientConfig::new("ftp://api.example.com", 30_000, Environment::Development).is_err());
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("prod").unwrap(), Environment::Production);
        assert_eq!(Environment::parse("Staging").unwrap(), Environment::Staging);
        assert_eq!(Environment::parse("dev").unwrap(), Environment::Development);
        assert!(Environment::parse("qa").is_err());
    }
}
