//! Key-value storage with pluggable backends.
//!
//! Supports:
//! - `memory`: In-memory storage (non-persistent, for testing)
//! - `file`: One JSON document per key
//! - `sqlite`: SQLite database with a single `kv` table

mod file;
mod memory;
mod sqlite;

pub use file::FileStore;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get current timestamp as RFC3339 string.
pub fn now_string() -> String {
    Utc::now().to_rfc3339()
}

/// Key-value store trait - implemented by all storage backends.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Whether this store persists data across restarts.
    fn is_persistent(&self) -> bool;

    /// Short backend name for diagnostics.
    fn backend_name(&self) -> &'static str;

    /// Read the value stored under `key`, if any.
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the value stored under `key`.
    async fn save(&self, key: &str, value: &[u8]) -> Result<()>;
}

/// Shared store reference
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Store type selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreType {
    Memory,
    #[default]
    File,
    Sqlite,
}

impl StoreType {
    /// Parse from an environment variable value.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" => Some(Self::Memory),
            "file" | "json" => Some(Self::File),
            "sqlite" | "db" => Some(Self::Sqlite),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::File => "file",
            Self::Sqlite => "sqlite",
        }
    }
}

/// Create a store based on type and data directory.
pub async fn create_store(store_type: StoreType, base_dir: PathBuf) -> Result<SharedStore> {
    match store_type {
        StoreType::Memory => Ok(Arc::new(InMemoryStore::new())),
        StoreType::File => Ok(Arc::new(FileStore::new(base_dir).await?)),
        StoreType::Sqlite => Ok(Arc::new(SqliteStore::new(base_dir).await?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_type_parse() {
        assert_eq!(StoreType::parse("memory"), Some(StoreType::Memory));
        assert_eq!(StoreType::parse("JSON"), Some(StoreType::File));
        assert_eq!(StoreType::parse(" sqlite "), Some(StoreType::Sqlite));
        assert_eq!(StoreType::parse("db"), Some(StoreType::Sqlite));
        assert_eq!(StoreType::parse("redis"), None);
        assert_eq!(StoreType::default(), StoreType::File);
    }

    #[tokio::test]
    async fn test_create_store_selects_backend() {
        let temp = tempfile::tempdir().expect("tempdir");

        let memory = create_store(StoreType::Memory, temp.path().to_path_buf())
            .await
            .expect("memory store");
        assert_eq!(memory.backend_name(), "memory");
        assert!(!memory.is_persistent());

        let file = create_store(StoreType::File, temp.path().join("file"))
            .await
            .expect("file store");
        assert_eq!(file.backend_name(), "file");
        assert!(file.is_persistent());

        let sqlite = create_store(StoreType::Sqlite, temp.path().join("db"))
            .await
            .expect("sqlite store");
        assert_eq!(sqlite.backend_name(), "sqlite");
        assert!(sqlite.is_persistent());
    }
}
