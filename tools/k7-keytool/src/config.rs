//! Keytool configuration from environment variables.

use k7_03_confidential_reveal::RevealPolicy;
use shared_types::{CurveKind, EncodingError};
use std::env;

/// Runtime configuration. Command-line flags override these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeytoolConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Curve used when a command does not name one
    pub default_curve: CurveKind,

    /// Check revealed secrets against the burned token id
    pub verify_reveal: bool,
}

impl Default for KeytoolConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: false,
            default_curve: CurveKind::Secp256k1,
            verify_reveal: true,
        }
    }
}

impl KeytoolConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `K7_LOG_LEVEL` or `RUST_LOG`: Log level (default: warn)
    /// - `K7_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `K7_DEFAULT_CURVE`: Curve for commands without one (default: secp256k1)
    /// - `K7_VERIFY_REVEAL`: Verify revealed secrets (default: true)
    pub fn from_env() -> Result<Self, EncodingError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EncodingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_curve = match lookup("K7_DEFAULT_CURVE") {
            Some(name) => name.parse()?,
            None => defaults.default_curve,
        };

        Ok(Self {
            log_level: lookup("K7_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("K7_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),

            default_curve,

            verify_reveal: lookup("K7_VERIFY_REVEAL")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.verify_reveal),
        })
    }

    /// Apply command-line flags on top of the environment.
    pub fn with_overrides(mut self, log_level: Option<String>, json_logs: bool) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self.json_logs |= json_logs;
        self
    }

    /// Reveal policy for this configuration.
    pub fn reveal_policy(&self) -> RevealPolicy {
        RevealPolicy::default().with_verify_token_id(self.verify_reveal)
    }
}
