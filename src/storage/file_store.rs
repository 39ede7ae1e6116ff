//! Key-value store backed by one JSON file per key

use std::path::PathBuf;

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};

use super::file_io::{read_text, write_text_atomic};
use super::KeyValueStore;

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir` (created on first write)
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> TrackerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(TrackerError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        let path = self.path_for(key)?;
        debug!(key, path = %path.display(), "reading blob");
        read_text(path)
    }

    fn set(&self, key: &str, blob: &str) -> TrackerResult<()> {
        let path = self.path_for(key)?;
        debug!(key, bytes = blob.len(), "writing blob");
        write_text_atomic(path, blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absent_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf());
        assert!(store.get("expenses").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("data"));

        store.set("categories", r#"[{"id":"1"}]"#).unwrap();

        assert!(temp_dir.path().join("data").join("categories.json").exists());
        assert_eq!(
            store.get("categories").unwrap().as_deref(),
            Some(r#"[{"id":"1"}]"#)
        );
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf());
        assert!(store.set("../escape", "[]").is_err());
        assert!(store.get("").is_err());
    }
}
