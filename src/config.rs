// =============================================================================
// ChainTrack AI - Configuration
// =============================================================================

use std::env;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8000")
    pub bind_address: SocketAddr,

    /// Fixed seed for the prediction RNG; `None` draws from the thread RNG
    pub prediction_seed: Option<u64>,

    /// Attach a permissive CORS layer for browser dashboards
    pub cors_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: ([0, 0, 0, 0], 8000).into(),
            prediction_seed: None,
            cors_enabled: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_address = match lookup("BIND_ADDRESS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::Invalid("BIND_ADDRESS", format!("{}", e)))?,
            None => defaults.bind_address,
        };

        let prediction_seed = match lookup("PREDICTION_SEED") {
            Some(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse()
                    .map_err(|e| ConfigError::Invalid("PREDICTION_SEED", format!("{}", e)))?,
            ),
            _ => None,
        };

        let cors_enabled = match lookup("CORS_ENABLED") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                ConfigError::Invalid("CORS_ENABLED", format!("expected true/false, got {:?}", raw))
            })?,
            None => defaults.cors_enabled,
        };

        Ok(Self {
            bind_address,
            prediction_seed,
            cors_enabled,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    Invalid(&'static str, String),
}
