//! Environment configuration loader
//!
//! Builds the immutable [`ClientConfig`] from process environment
//! variables, once, at startup:
//!
//! - `STRIDE_API_BASE_URL` — target API host (required)
//! - `STRIDE_API_TIMEOUT_MS` — per-request timeout, default 30000
//! - `STRIDE_ENV` — `production`/`staging`/`development`, default
//!   `development`
//!
//! Derived flags (`is_production`) are computed by the config
//! constructor, not here and not lazily.

use stride_domain::config::DEFAULT_TIMEOUT_MS;
use stride_domain::{ClientConfig, DomainError, Environment};
use thiserror::Error;

/// Environment variable naming the API base URL.
pub const VAR_BASE_URL: &str = "STRIDE_API_BASE_URL";
/// Environment variable naming the request timeout in milliseconds.
pub const VAR_TIMEOUT_MS: &str = "STRIDE_API_TIMEOUT_MS";
/// Environment variable naming the deployment environment.
pub const VAR_ENVIRONMENT: &str = "STRIDE_ENV";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),

    /// A variable is set but malformed.
    #[error("invalid value for {var}: {value}")]
    InvalidValue {
        /// The offending variable.
        var: &'static str,
        /// The value that failed to parse.
        value: String,
    },

    /// Domain-level validation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Loads configuration from the process environment.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the base URL is missing or any value is
/// malformed.
pub fn load_config_from_env() -> Result<ClientConfig, ConfigError> {
    load_config(|name| std::env::var(name).ok())
}

/// Loads configuration through an arbitrary variable lookup.
///
/// The indirection keeps the loader testable without mutating process
/// state.
///
/// # Errors
///
/// Same as [`load_config_from_env`].
pub fn load_config(lookup: impl Fn(&str) -> Option<String>) -> Result<ClientConfig, ConfigError> {
    let base_url = lookup(VAR_BASE_URL).ok_or(ConfigError::MissingVar(VAR_BASE_URL))?;

    let timeout_ms = match lookup(VAR_TIMEOUT_MS) {
        Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
            var: VAR_TIMEOUT_MS,
            value: raw,
        })?,
        None => DEFAULT_TIMEOUT_MS,
    };

    let environment = match lookup(VAR_ENVIRONMENT) {
        Some(raw) => Environment::parse(&raw)?,
        None => Environment::Development,
    };

    Ok(ClientConfig::new(&base_url, timeout_ms, environment)?)
}
