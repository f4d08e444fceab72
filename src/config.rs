use serde::Serialize;
use std::env;
use thiserror::Error;

use crate::client::connection::RpcAddr;

const DEFAULT_RPC_ADDR: &str = "http://[::1]:11101";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Process-level configuration, resolved from `DOCSYNC_*` environment
/// variables with built-in defaults.
#[derive(Debug, Clone, Serialize)]
pub struct DocsyncConfig {
    /// Address of the sync server (`http://`, `https://`, `tcp://` or
    /// `unix://`).
    pub rpc_addr: String,

    /// Seconds to wait while dialing the server.
    pub connect_timeout_secs: u64,

    /// Seconds to wait for an individual request.
    pub request_timeout_secs: u64,

    /// Default log level when nothing more specific is configured.
    pub log_level: String,
}

impl Default for DocsyncConfig {
    fn default() -> Self {
        Self {
            rpc_addr: DEFAULT_RPC_ADDR.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl DocsyncConfig {
    /// Resolves configuration from the environment and validates it.
    ///
    /// Reads `DOCSYNC_ADDR`, `DOCSYNC_CONNECT_TIMEOUT`,
    /// `DOCSYNC_REQUEST_TIMEOUT` and `DOCSYNC_LOG_LEVEL`; unset variables
    /// fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            rpc_addr: env::var("DOCSYNC_ADDR").unwrap_or(defaults.rpc_addr),
            connect_timeout_secs: env_u64(
                "DOCSYNC_CONNECT_TIMEOUT",
                defaults.connect_timeout_secs,
            )?,
            request_timeout_secs: env_u64(
                "DOCSYNC_REQUEST_TIMEOUT",
                defaults.request_timeout_secs,
            )?,
            log_level: env::var("DOCSYNC_LOG_LEVEL")
                .unwrap_or(defaults.log_level)
                .to_lowercase(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "connect timeout must be positive".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "request timeout must be positive".to_string(),
            ));
        }

        RpcAddr::parse(&self.rpc_addr)
            .map_err(|e| ConfigError::ValidationFailed(format!("rpc address: {}", e)))?;

        Ok(())
    }
}

fn env_u64(key: &str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(value) => value.parse::<u64>().map_err(|e| ConfigError::ParseError {
            field: key.to_string(),
            error: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
