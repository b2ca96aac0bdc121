//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated
//! from environment variables (with `.env` support via dotenvy) or
//! defaults.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL for the eBird v2 API.
pub const DEFAULT_EBIRD_API_URL: &str = "https://api.ebird.org/v2";

/// Default request timeout, in seconds.
///
/// The upstream service gives no latency guarantee, so every request is
/// bounded rather than waiting indefinitely.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// eBird API client configuration.
    pub ebird: EbirdConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the eBird API client.
#[derive(Clone, Serialize, Deserialize)]
pub struct EbirdConfig {
    /// API token sent in the `X-eBirdApiToken` header.
    /// Get a free key at: https://ebird.org/api/keygen
    pub api_token: String,

    /// Base URL of the eBird API.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for EbirdConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EbirdConfig")
            .field("api_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for EbirdConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            base_url: DEFAULT_EBIRD_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "ebird-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            ebird: EbirdConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `EBIRD_API_TOKEN`, `EBIRD_API_URL`, `EBIRD_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(token) = std::env::var("EBIRD_API_TOKEN") {
            config.ebird.api_token = token;
            info!("eBird API token loaded from environment");
        } else {
            warn!(
                "EBIRD_API_TOKEN not set - requests will be rejected by the API. \
                 Get a key at https://ebird.org/api/keygen"
            );
        }

        if let Ok(base_url) = std::env::var("EBIRD_API_URL") {
            config.ebird.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("EBIRD_TIMEOUT_SECS") {
            config.ebird.timeout_secs = timeout.parse().unwrap_or(DEFAULT_TIMEOUT_SECS);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_token_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("EBIRD_API_TOKEN", "test_token_12345");
        }
        let config = Config::from_env();
        assert_eq!(config.ebird.api_token, "test_token_12345");
        unsafe {
            std::env::remove_var("EBIRD_API_TOKEN");
        }
    }

    #[test]
    fn test_default_base_url_and_timeout() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("EBIRD_API_URL");
            std::env::remove_var("EBIRD_TIMEOUT_SECS");
        }
        let config = Config::from_env();
        assert_eq!(config.ebird.base_url, DEFAULT_EBIRD_API_URL);
        assert_eq!(config.ebird.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let ebird = EbirdConfig {
            api_token: "super_secret_token".to_string(),
            ..Default::default()
        };
        let debug_str = format!("{:?}", ebird);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }
}
