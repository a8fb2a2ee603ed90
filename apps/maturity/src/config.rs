//! # Configuration
//!
//! Server settings come from three layers, later layers winning:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file (`--config maturity.toml`)
//! 3. Environment variables
//!
//! CLI flags for host and port are applied on top by the `server` command.
//!
//! ## Environment Variables
//!
//! - `MATURITY_HOST`, `MATURITY_PORT`: bind address
//! - `MATURITY_RATE_LIMIT`: requests per second (0 disables)
//! - `MATURITY_API_KEY`: if set and non-empty, Bearer authentication is required
//! - `MATURITY_CORS_ORIGINS`: comma-separated origins, or "*" for all
//! - `MATURITY_MAX_SESSIONS`: cap on concurrent navigation sessions
//!
//! ## Example
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 9000
//! rate_limit = 50
//! cors_origins = ["https://maturity.example.com"]
//! ```

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default rate limit: 100 requests per second.
pub const DEFAULT_RATE_LIMIT: u32 = 100;

/// Default cap on live sessions.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

// =============================================================================
// CONFIG STRUCTURES
// =============================================================================

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests per second, 0 disables rate limiting.
    pub rate_limit: u32,
    /// Bearer key. `None` or empty disables authentication.
    pub api_key: Option<String>,
    /// Allowed CORS origins. Empty means localhost only, `["*"]` means any.
    pub cors_origins: Vec<String>,
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            rate_limit: DEFAULT_RATE_LIMIT,
            api_key: None,
            cors_origins: Vec::new(),
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl ServerConfig {
    /// The configured API key, if authentication is enabled.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    /// `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, AppError> {
        toml::from_str(raw).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Defaults, then the optional file, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `MATURITY_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = &mut self.server;

        if let Some(host) = lookup("MATURITY_HOST") {
            server.host = host;
        }
        if let Some(port) = lookup("MATURITY_PORT") {
            server.port = parse_var("MATURITY_PORT", &port)?;
        }
        if let Some(rate) = lookup("MATURITY_RATE_LIMIT") {
            server.rate_limit = parse_var("MATURITY_RATE_LIMIT", &rate)?;
        }
        if let Some(key) = lookup("MATURITY_API_KEY") {
            server.api_key = Some(key).filter(|k| !k.is_empty());
        }
        if let Some(origins) = lookup("MATURITY_CORS_ORIGINS") {
            server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(max) = lookup("MATURITY_MAX_SESSIONS") {
            server.max_sessions = parse_var("MATURITY_MAX_SESSIONS", &max)?;
        }

        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} has invalid value '{}'", name, raw)))
}

// =============================================================================
// TESTS
// =============================================================================
