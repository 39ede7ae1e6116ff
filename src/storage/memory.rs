//! In-memory key-value store
//!
//! Used in tests and anywhere persistence should not touch the disk. Writes
//! can be made to fail to exercise the storage-warning path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};

use super::KeyValueStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every `set` fails
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_fail_writes(true);
        store
    }

    /// Toggle write failures
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Seed a raw blob, bypassing the failure switch
    pub fn insert(&self, key: impl Into<String>, blob: impl Into<String>) -> TrackerResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.insert(key.into(), blob.into());
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, blob: &str) -> TrackerResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(TrackerError::Storage(format!(
                "Write to '{}' rejected: storage unavailable",
                key
            )));
        }
        self.insert(key, blob)
    }
}
