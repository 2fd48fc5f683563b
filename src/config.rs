use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::changelog::RetentionPolicy;

/// Server configuration from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// How long a long-poll request may stay parked before resolving
    /// empty. 90 seconds balances held connections against notification
    /// latency.
    pub poll_timeout: Duration,
    pub retention: RetentionPolicy,
    pub public_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables. All variables are
    /// optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("LISTEN_ADDR", "must be a valid socket address"))?;

        let poll_timeout_secs: u64 = std::env::var("POLL_TIMEOUT_SECS")
            .unwrap_or_else(|_| "90".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("POLL_TIMEOUT_SECS", "must be a number of seconds"))?;

        let retention_secs: u64 = std::env::var("CHANGE_RETENTION_SECS")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .map_err(|_| {
                ConfigError::Invalid(
                    "CHANGE_RETENTION_SECS",
                    "must be a number of seconds (0 keeps all history)",
                )
            })?;

        let retention = if retention_secs == 0 {
            RetentionPolicy::Unbounded
        } else {
            RetentionPolicy::Window {
                keep_ms: retention_secs * 1000,
            }
        };

        let public_dir = std::env::var("PUBLIC_DIR")
            .unwrap_or_else(|_| "public".to_string())
            .into();

        Ok(Config {
            listen_addr,
            poll_timeout: Duration::from_secs(poll_timeout_secs),
            retention,
            public_dir,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str, &'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(var, msg) => write!(f, "Invalid value for {}: {}", var, msg),
        }
    }
}

impl std::error::Error for ConfigError {}
