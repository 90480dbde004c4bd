//! Configuration loading from environment variables.

use serde::Deserialize;
use std::env;

/// Runtime configuration for WordGloss.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Endpoint the backend worker POSTs explanation requests to.
    pub explain_url: String,
    /// Per-request timeout for explanation fetches, in milliseconds.
    pub explain_timeout_ms: u64,
    /// Largest document accepted from file open or paste, in bytes.
    pub max_document_bytes: usize,
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
///
/// # Arguments
/// - `name`: Environment variable name.
///
/// # Returns
/// `true` when the value is a recognized truthy value.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self {
            explain_url: env::var("WORDGLOSS_EXPLAIN_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8653/explain".to_string()),
            explain_timeout_ms: env::var("WORDGLOSS_EXPLAIN_TIMEOUT_MS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(15_000),
            max_document_bytes: env::var("WORDGLOSS_MAX_DOCUMENT_BYTES")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(2 * 1024 * 1024), // 2MB default
        }
    }
}
