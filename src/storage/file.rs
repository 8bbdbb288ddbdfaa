//! JSON file-based key-value store.
//!
//! Each key maps to `<base_dir>/<sanitized key>.json`. Writes go to a temp file
//! which is then renamed over the target.

use super::{KeyValueStore, Result};
use crate::util::sanitize_filename;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct FileStore {
    base_dir: PathBuf,
    persist_lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub async fn new(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir).await?;
        tracing::debug!("File store rooted at {}", base_dir.display());
        Ok(Self {
            base_dir,
            persist_lock: Arc::new(Mutex::new(())),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir
            .join(format!("{}.json", sanitize_filename(key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    fn is_persistent(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }

    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        let _guard = self.persist_lock.lock().await;
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).await?;
        fs::rename(&tmp_path, &path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_loads_none() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(temp.path().to_path_buf()).await.unwrap();
        assert_eq!(store.load("tasks").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("nested");
        {
            let store = FileStore::new(dir.clone()).await.unwrap();
            store.save("tasks", br#"[{"id":"a"}]"#).await.unwrap();
        }
        let reopened = FileStore::new(dir.clone()).await.unwrap();
        assert_eq!(
            reopened.load("tasks").await.unwrap(),
            Some(br#"[{"id":"a"}]"#.to_vec())
        );
        assert!(dir.join("tasks.json").exists());
        assert!(!dir.join("tasks.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_keys_are_sanitized_into_file_names() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(temp.path().to_path_buf()).await.unwrap();
        store.save("../escape", b"x").await.unwrap();
        assert!(temp.path().join("___escape.json").exists());
        assert_eq!(store.load("../escape").await.unwrap(), Some(b"x".to_vec()));
    }
}
