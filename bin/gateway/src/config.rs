//! Centralized gateway configuration.
//!
//! This module provides strongly-typed configuration for the gateway,
//! loaded via the `config` crate from environment variables.
//!
//! See [`GuardPaths`](historia_guard::GuardPaths) for the guard's landing
//! and callback paths, which load the same way.

use historia_guard::GuardPaths;
use serde::Deserialize;

/// Gateway configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct GatewayConfig {
    /// Address the gateway listens on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Base URL of the Historia backend API.
    pub backend_url: String,

    /// Directory holding the built front-end bundle.
    #[serde(default = "default_asset_dir")]
    pub asset_dir: String,

    /// Session cookie configuration.
    #[serde(default)]
    pub session: SessionConfig,

    /// Backend readiness probe configuration.
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Guard landing and callback paths.
    #[serde(default)]
    pub guard: GuardPaths,
}

/// Session-cookie configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Cookie lifetime in minutes.
    /// Short lifetimes bound revocation latency.
    #[serde(default = "default_cookie_minutes")]
    pub cookie_minutes: i64,

    /// Whether to set the Secure flag on cookies (requires HTTPS).
    /// Defaults to true for production safety; set to false for local HTTP development.
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,
}

/// Backend readiness probe configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    /// Seconds between health probes until the backend first answers.
    #[serde(default = "default_probe_interval_seconds")]
    pub interval_seconds: u64,
}

fn default_listen_addr() -> String {
    "127.0.0.1:4000".to_string()
}

fn default_asset_dir() -> String {
    "dist".to_string()
}

fn default_cookie_name() -> String {
    "historia_session".to_string()
}

fn default_cookie_minutes() -> i64 {
    480
}

fn default_secure_cookies() -> bool {
    true
}

fn default_probe_interval_seconds() -> u64 {
    2
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            cookie_minutes: default_cookie_minutes(),
            secure_cookies: default_secure_cookies(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_probe_interval_seconds(),
        }
    }
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
