//! SQLite-based key-value store.

use super::{now_string, KeyValueStore, Result};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

const SCHEMA: &str = r#"
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY NOT NULL,
    value BLOB NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

const DB_FILE: &str = "tasks.db";

pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub async fn new(base_dir: PathBuf) -> Result<Self> {
        tokio::fs::create_dir_all(&base_dir).await?;
        let db_path = base_dir.join(DB_FILE);

        // Open database in blocking task
        let conn = tokio::task::spawn_blocking(move || {
            let conn = Connection::open(&db_path)?;
            conn.execute_batch(SCHEMA)?;
            tracing::debug!("Opened SQLite store at {}", db_path.display());
            Ok::<_, rusqlite::Error>(conn)
        })
        .await??;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    #[cfg(test)]
    async fn updated_at(&self, key: &str) -> Result<Option<String>> {
        let conn = Arc::clone(&self.conn);
        let key = key.to_string();
        let updated = tokio::task::spawn_blocking(move || {
            let conn = conn.blocking_lock();
            conn.query_row(
                "SELECT updated_at FROM kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
        })
        .await??;
        Ok(updated)
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    fn is_persistent(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let conn = Arc::clone(&self.conn);
        let key = key.to_string();
        let value = tokio::task::spawn_blocking(move || {
            let conn = conn.blocking_lock();
            conn.query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()
        })
        .await??;
        Ok(value)
    }

    async fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        let conn = Arc::clone(&self.conn);
        let key = key.to_string();
        let value = value.to_vec();
        let now = now_string();
        tokio::task::spawn_blocking(move || {
            let conn = conn.blocking_lock();
            conn.execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
        })
        .await??;
        Ok(())
    }
}
