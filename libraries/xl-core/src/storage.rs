//! Key-value persistence
//!
//! The player persists a handful of small JSON values (earned badges,
//! favorites, played tracks, onboarding flag, catalog). Every value is
//! independently read at startup and written through on mutation. Absent or
//! malformed data is treated as empty, never as a fatal error.
//!
//! # Example
//!
//! ```rust
//! use xl_core::storage::{self, keys, KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! storage::save_json(&store, keys::FAVORITED_SONGS, &vec!["xlb001"]);
//!
//! let ids: Vec<String> = storage::load_json(&store, keys::FAVORITED_SONGS).unwrap_or_default();
//! assert_eq!(ids, vec!["xlb001".to_string()]);
//! ```

use crate::error::{CoreError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persisted keys
pub mod keys {
    /// JSON array of earned badge ids
    pub const EARNED_BADGES: &str = "xl_beats_earned_badges";

    /// JSON array of favorited track ids
    pub const FAVORITED_SONGS: &str = "xl_beats_favorited_songs";

    /// JSON array of distinct played track ids
    pub const PLAYED_TRACKS: &str = "xl_beats_played_tracks";

    /// `"true"` once the onboarding screen has been dismissed
    pub const ONBOARDING: &str = "xl_beats_onboarding";

    /// JSON array of albums
    pub const ALBUMS: &str = "xl_beats_albums";

    /// JSON array of single tracks
    pub const SINGLES: &str = "xl_beats_singles";
}

/// Synchronous string key-value store
///
/// There is no transactional guarantee across keys.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if absent
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Read and decode a JSON value
///
/// Malformed data is logged and reported as absent.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Ignoring malformed persisted value");
            None
        }
    }
}

/// Encode and write a JSON value, logging (not propagating) failures
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(CoreError::from)
        .and_then(|raw| store.set(key, &raw));

    if let Err(e) = result {
        tracing::warn!(key, error = %e, "Failed to persist value");
    }
}

/// Whether the onboarding screen has been seen
pub fn has_seen_onboarding(store: &dyn KeyValueStore) -> bool {
    store.get(keys::ONBOARDING).is_some_and(|v| v == "true")
}

/// Record that the onboarding screen has been seen
pub fn mark_onboarding_seen(store: &dyn KeyValueStore) {
    if let Err(e) = store.set(keys::ONBOARDING, "true") {
        tracing::warn!(error = %e, "Failed to persist onboarding flag");
    }
}

/// Process-local store, used for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| CoreError::storage("memory store lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object file
///
/// The whole file is rewritten on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open (or lazily create) the store at `path`
    ///
    /// An unreadable or malformed file starts the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "State file is malformed, starting empty");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read state file, starting empty");
                BTreeMap::new()
            }
        };

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| CoreError::storage("state file lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());

        let raw = serde_json::to_string_pretty(&*values)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
