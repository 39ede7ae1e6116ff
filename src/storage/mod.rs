//! Storage layer for the expense tracker
//!
//! Persistence is a generic key-value blob store. Each collection is saved
//! as one JSON array under its own key; the tracker only sees the
//! [`KeyValueStore`] trait so tests can swap in a [`MemoryStore`].

pub mod file_io;
pub mod file_store;
pub mod memory;

pub use file_io::{read_text, write_text_atomic};
pub use file_store::JsonFileStore;
pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::error::{TrackerError, TrackerResult};

/// Key of the expenses blob
pub const EXPENSES_KEY: &str = "expenses";
/// Key of the categories blob
pub const CATEGORIES_KEY: &str = "categories";
/// Key of the budgets blob
pub const BUDGETS_KEY: &str = "budgets";

/// A host-provided blob store
pub trait KeyValueStore {
    /// Fetch the blob stored under `key`, if any
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Replace the blob stored under `key`
    fn set(&self, key: &str, blob: &str) -> TrackerResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, blob: &str) -> TrackerResult<()> {
        (**self).set(key, blob)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, blob: &str) -> TrackerResult<()> {
        (**self).set(key, blob)
    }
}

/// Appended to a key to name the copy of its unreadable blob
pub const CORRUPT_KEY_SUFFIX: &str = "-corrupt";

/// A collection read back from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCollection<T> {
    pub items: Vec<T>,
    /// Key holding a copy of the stored blob when it could not be parsed
    pub moved_to: Option<String>,
}

/// Load a collection
///
/// An absent blob is an empty collection. A blob that does not parse is
/// copied to `<key>-corrupt` first and the collection starts empty, so the
/// next save cannot destroy it. Read errors, and failure to make that copy,
/// are returned.
pub fn load_collection<T, S>(store: &S, key: &str) -> TrackerResult<LoadedCollection<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(blob) = store.get(key)? else {
        return Ok(LoadedCollection {
            items: Vec::new(),
            moved_to: None,
        });
    };

    match serde_json::from_str(&blob) {
        Ok(items) => Ok(LoadedCollection {
            items,
            moved_to: None,
        }),
        Err(e) => {
            let backup = format!("{}{}", key, CORRUPT_KEY_SUFFIX);
            warn!(key, backup = %backup, error = %e, "stored collection is unreadable");
            store.set(&backup, &blob).map_err(|err| {
                TrackerError::Storage(format!(
                    "Stored {} is unreadable and could not be copied aside: {}",
                    key, err
                ))
            })?;
            Ok(LoadedCollection {
                items: Vec::new(),
                moved_to: Some(backup),
            })
        }
    }
}

/// Serialize and store a full collection
pub fn save_collection<T, S>(store: &S, key: &str, items: &[T]) -> TrackerResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let blob = serde_json::to_string(items)
        .map_err(|e| TrackerError::Storage(format!("Failed to serialize {}: {}", key, e)))?;
    store.set(key, &blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_categories, Category};

    #[test]
    fn test_absent_collection_is_empty() {
        let store = MemoryStore::new();
        let loaded: LoadedCollection<Category> = load_collection(&store, CATEGORIES_KEY).unwrap();
        assert!(loaded.items.is_empty());
        assert!(loaded.moved_to.is_none());
    }

    #[test]
    fn test_unreadable_collection_is_copied_aside() {
        let store = MemoryStore::new();
        store.insert(CATEGORIES_KEY, "not json").unwrap();

        let loaded: LoadedCollection<Category> = load_collection(&store, CATEGORIES_KEY).unwrap();

        assert!(loaded.items.is_empty());
        assert_eq!(loaded.moved_to.as_deref(), Some("categories-corrupt"));
        assert_eq!(
            store.get("categories-corrupt").unwrap().as_deref(),
            Some("not json")
        );
    }

    #[test]
    fn test_unreadable_collection_without_backup_is_an_error() {
        let store = MemoryStore::failing();
        store.insert(CATEGORIES_KEY, "not json").unwrap();

        let result: TrackerResult<LoadedCollection<Category>> =
            load_collection(&store, CATEGORIES_KEY);

        assert!(matches!(result, Err(TrackerError::Storage(_))));
        assert_eq!(store.get(CATEGORIES_KEY).unwrap().as_deref(), Some("not json"));
    }

    #[test]
    fn test_save_and_load_collection() {
        let store = MemoryStore::new();
        save_collection(&store, CATEGORIES_KEY, &default_categories()).unwrap();

        let loaded: LoadedCollection<Category> = load_collection(&store, CATEGORIES_KEY).unwrap();
        assert_eq!(loaded.items, default_categories());
    }
}
