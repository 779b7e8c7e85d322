//! # Key-Value Backends
//!
//! The `KeyValueStore` trait and its two backends.
//!
//! ## Why a localStorage-Shaped Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Backend Abstraction                                  │
//! │                                                                         │
//! │  The storefront persists four string-keyed serialized entries. The     │
//! │  trait mirrors exactly that surface:                                    │
//! │                                                                         │
//! │     get(key)    → Option<String>     (absent key is NOT an error)      │
//! │     set(key, v) → ()                                                   │
//! │     remove(key) → ()                 (absent key is a no-op)           │
//! │                                                                         │
//! │  ┌──────────────────┐        ┌──────────────────────┐                  │
//! │  │   MemoryStore    │        │    JsonFileStore     │                  │
//! │  │                  │        │                      │                  │
//! │  │  HashMap, used   │        │  <dir>/<key>.json,   │                  │
//! │  │  by tests        │        │  used by real shells │                  │
//! │  └──────────────────┘        └──────────────────────┘                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes are synchronous; the host process is single-instance so there is
//! no concurrent-writer case to handle.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StorageError, StorageResult};

// =============================================================================
// KeyValueStore Trait
// =============================================================================

/// Durable string-keyed entry store.
///
/// `Send` so a boxed backend can live inside state shared across threads.
pub trait KeyValueStore: Send {
    /// Reads an entry. Absent keys yield `Ok(None)`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes an entry, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Deletes an entry. Absent keys are a no-op.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

// =============================================================================
// Memory Store
// =============================================================================

/// Volatile in-memory backend.
///
/// Used by unit tests and by shells that explicitly opt out of persistence;
/// contents are lost when the process ends.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// JSON File Store
// =============================================================================

/// File-backed store: one `<key>.json` file per entry under a data
/// directory.
///
/// ## File Layout
/// ```text
/// ~/.local/share/maison/       (or wherever the shell points it)
/// ├── cart.json
/// ├── wishlist.json
/// ├── user.json                (absent while anonymous)
/// └── orders.json
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "opened json file store");
        Ok(JsonFileStore { dir })
    }

    /// The directory entries live under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Maps a key to its file path, rejecting keys that would escape the
    /// data directory.
    fn entry_path(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            });
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.entry_path(key)?;
        fs::write(&path, value)?;
        debug!(key, bytes = value.len(), "wrote storage entry");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "removed storage entry");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("cart").unwrap(), None);

        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));

        store.remove("cart").unwrap();
        assert_eq!(store.get("cart").unwrap(), None);

        // Removing an absent key is a no-op
        store.remove("cart").unwrap();
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();

        assert_eq!(store.get("wishlist").unwrap(), None);

        store.set("wishlist", "[1,2,3]").unwrap();
        assert_eq!(store.get("wishlist").unwrap().as_deref(), Some("[1,2,3]"));
        assert!(dir.path().join("wishlist.json").exists());

        store.remove("wishlist").unwrap();
        assert_eq!(store.get("wishlist").unwrap(), None);
        assert!(!dir.path().join("wishlist.json").exists());
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();

        store.set("user", "{\"name\":\"a\"}").unwrap();
        store.set("user", "{\"name\":\"b\"}").unwrap();
        assert_eq!(
            store.get("user").unwrap().as_deref(),
            Some("{\"name\":\"b\"}")
        );
    }

    #[test]
    fn test_file_store_rejects_path_escaping_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();

        for key in ["../evil", "a/b", "", "dot.dot"] {
            assert!(matches!(
                store.set(key, "x"),
                Err(StorageError::InvalidKey { .. })
            ));
        }
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("profile").join("maison");
        let store = JsonFileStore::open(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(store.dir(), nested.as_path());
    }
}
