//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The validation engine is stateless, so the state is configuration plus
//! the metrics counters. Cloning is cheap; every request shares the same
//! counters.

use jsv_schema::{JsonValidator, DEFAULT_REPORT_ROOT};
use thiserror::Error;

use crate::middleware::metrics::ApiMetrics;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default request body limit (2 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// A configuration variable with an unusable value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The variable is set but cannot be parsed.
    #[error("invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        /// Environment variable name.
        name: &'static str,
        /// The raw value found.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to (`PORT`).
    pub port: u16,
    /// Maximum accepted request body size in bytes (`MAX_BODY_BYTES`).
    pub max_body_bytes: usize,
    /// Root token of every report path (`REPORT_ROOT`).
    pub report_root: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            report_root: DEFAULT_REPORT_ROOT.to_string(),
        }
    }
}

impl AppConfig {
    /// Build configuration from process environment variables.
    ///
    /// Unset variables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match lookup("PORT") {
            Some(raw) => parse_var("PORT", &raw)?,
            None => defaults.port,
        };
        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(raw) => parse_var("MAX_BODY_BYTES", &raw)?,
            None => defaults.max_body_bytes,
        };
        let report_root = match lookup("REPORT_ROOT") {
            Some(raw) if raw.is_empty() => {
                return Err(ConfigError::Invalid {
                    name: "REPORT_ROOT",
                    value: raw,
                    reason: "must not be empty".to_string(),
                })
            }
            Some(raw) => raw,
            None => defaults.report_root,
        };
        Ok(Self {
            port,
            max_body_bytes,
            report_root,
        })
    }
}

fn parse_var<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Shared application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Runtime configuration.
    pub config: AppConfig,
    /// The validation engine.
    pub validator: JsonValidator,
    /// Request and outcome counters.
    pub metrics: ApiMetrics,
}

impl AppState {
    /// Create state with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}
