//! Configuration management for the task list server.
//!
//! Configuration can be set via environment variables:
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `TASK_LIST_DATA_DIR` - Optional. Directory for persisted data. Defaults to `./.task-list`.
//! - `TASK_LIST_STORE` - Optional. Storage backend: `memory`, `file` (or `json`), `sqlite` (or `db`).
//!   Defaults to `file`.

use std::path::PathBuf;
use thiserror::Error;

use crate::storage::StoreType;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Unknown storage backend: {0} (expected memory, file or sqlite)")]
    UnknownBackend(String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Directory holding persisted task data
    pub data_dir: PathBuf,

    /// Storage backend for the task list
    pub store_type: StoreType,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` does not parse and
    /// `ConfigError::UnknownBackend` for an unrecognized `TASK_LIST_STORE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let data_dir = lookup("TASK_LIST_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let store_type = match lookup("TASK_LIST_STORE") {
            Some(value) => {
                StoreType::parse(&value).ok_or(ConfigError::UnknownBackend(value))?
            }
            None => StoreType::default(),
        };

        Ok(Self {
            host,
            port,
            data_dir,
            store_type,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(data_dir: PathBuf, store_type: StoreType) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            data_dir,
            store_type,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_data_dir() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".task-list")
}
