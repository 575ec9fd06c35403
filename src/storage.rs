//! Durable key-value storage for sheet slices.
//!
//! Mirrors browser local storage: one JSON string per named slot, scoped
//! under an application prefix. Durability is best-effort by contract —
//! every failure (unwritable directory, corrupt file, unparsable slot) is
//! contained here and logged, never surfaced to the sheet. A slice that
//! cannot be read falls back to its hard-coded default; a write that fails
//! leaves the in-memory state authoritative for the rest of the session.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Prefix prepended to every slot key.
pub const DEFAULT_PREFIX: &str = "charakterbogen";

/// Slot key suffixes, one per persisted sheet slice.
pub mod keys {
    pub const PROFILE: &str = "profile";
    pub const STATS: &str = "stats";
    pub const SKILLS: &str = "skills";
    pub const TALENTS: &str = "talents";
    pub const SECONDARY: &str = "secondary";
    pub const GOALS: &str = "goals";
    pub const GROUP: &str = "group";
}

/// Errors from the file-backed storage internals.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw string slots, keyed by full slot name.
///
/// Implementations carry infallible signatures and swallow their own I/O
/// failures; the [`Bridge`] layers JSON (de)serialization on top.
pub trait StorageBackend: Send + Sync {
    /// Read a slot. `None` when the slot was never written or is unreadable.
    fn load(&self, key: &str) -> Option<String>;

    /// Write a slot, best-effort.
    fn save(&self, key: &str, value: &str);

    /// Drop a slot, best-effort.
    fn remove(&self, key: &str);
}

// ============================================================================
// In-memory backend
// ============================================================================

/// Purely in-memory slots. Used by tests and throwaway sessions; nothing
/// survives the process.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        match self.entries.read() {
            Ok(entries) => entries.get(key).cloned(),
            Err(e) => {
                tracing::warn!("memory storage lock poisoned: {e}");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}

// ============================================================================
// File backend
// ============================================================================

/// File-backed slots: an in-memory map written through to a single JSON
/// file, the desktop stand-in for browser local storage.
pub struct FileStorage {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Open storage at an explicit path, loading whatever is already there.
    /// An unreadable or unparsable file degrades to an empty map.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = match read_slots(&path) {
            Ok(slots) => slots,
            Err(e) => {
                tracing::warn!("discarding unreadable storage file {}: {e}", path.display());
                HashMap::new()
            }
        };
        tracing::debug!("sheet storage at {}", path.display());

        Self {
            path,
            cache: RwLock::new(cache),
        }
    }

    /// Open storage at the platform config location
    /// (e.g. `~/.config/charakterbogen/storage.json` on Linux).
    pub fn open_default() -> Self {
        Self::new(default_storage_path())
    }

    /// Where the slots live on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::warn!("storage lock poisoned, skipping flush: {e}");
                return Ok(());
            }
        };
        let data = serde_json::to_string_pretty(&*cache)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    fn flush_best_effort(&self) {
        if let Err(e) = self.flush() {
            tracing::warn!("failed to persist sheet storage: {e}");
        }
    }
}

fn read_slots(path: &Path) -> Result<HashMap<String, String>, StorageError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Platform config location for the storage file, with a working-directory
/// fallback when no home directory can be resolved.
pub fn default_storage_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("de", "charakterbogen", "charakterbogen") {
        dirs.config_dir().join("storage.json")
    } else {
        PathBuf::from("charakterbogen_storage.json")
    }
}

impl StorageBackend for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(cache) => cache.get(key).cloned(),
            Err(e) => {
                tracing::warn!("storage lock poisoned: {e}");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut cache) => {
                cache.insert(key.to_string(), value.to_string());
                drop(cache); // release before I/O
                self.flush_best_effort();
            }
            Err(e) => {
                tracing::warn!("storage lock poisoned, dropping write: {e}");
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut cache) => {
                cache.remove(key);
                drop(cache);
                self.flush_best_effort();
            }
            Err(e) => {
                tracing::warn!("storage lock poisoned, dropping remove: {e}");
            }
        }
    }
}

// ============================================================================
// Bridge
// ============================================================================

/// JSON (de)serialization over a [`StorageBackend`], with key prefixing.
///
/// `load_or` never fails: a missing slot, a parse error, or an unavailable
/// backend all yield the caller's default. `save` is fire-and-forget.
#[derive(Clone)]
pub struct Bridge {
    backend: Arc<dyn StorageBackend>,
    prefix: String,
}

impl Bridge {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Scope slots under a different prefix, e.g. one per character.
    pub fn with_prefix(backend: Arc<dyn StorageBackend>, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}.{}", self.prefix, key)
    }

    /// Read and parse a slot, falling back to `default` when the slot is
    /// missing or does not parse. No distinction is made between
    /// "never saved" and "unparsable".
    pub fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.backend.load(&self.full_key(key)) else {
            return default;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("slot {key} does not parse, using defaults: {e}");
                default
            }
        }
    }

    /// Serialize and write a slot, best-effort.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.backend.save(&self.full_key(key), &raw),
            Err(e) => {
                tracing::warn!("slot {key} failed to serialize, dropping write: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load("a"), None);

        storage.save("a", "1");
        assert_eq!(storage.load("a"), Some("1".to_string()));

        storage.remove("a");
        assert_eq!(storage.load("a"), None);
    }

    #[test]
    fn test_bridge_returns_default_when_slot_missing() {
        let bridge = Bridge::new(Arc::new(MemoryStorage::new()));
        let value: Vec<i32> = bridge.load_or("nothing", vec![1, 2, 3]);
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_bridge_returns_default_on_corrupt_slot() {
        let storage = Arc::new(MemoryStorage::new());
        storage.save("charakterbogen.goals", "{not json");

        let bridge = Bridge::new(storage);
        let value: HashMap<String, String> = bridge.load_or(keys::GOALS, HashMap::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_bridge_round_trip_under_prefix() {
        let storage = Arc::new(MemoryStorage::new());
        let bridge = Bridge::new(storage.clone());

        bridge.save(keys::GOALS, &vec!["x".to_string()]);

        // The raw slot is namespaced...
        assert!(storage.load("charakterbogen.goals").is_some());
        assert_eq!(storage.load("goals"), None);

        // ...and reads back through the bridge unchanged.
        let value: Vec<String> = bridge.load_or(keys::GOALS, vec![]);
        assert_eq!(value, vec!["x".to_string()]);
    }

    #[test]
    fn test_custom_prefix_isolates_slots() {
        let storage = Arc::new(MemoryStorage::new());
        let hero = Bridge::with_prefix(storage.clone(), "hero");
        let villain = Bridge::with_prefix(storage, "villain");

        hero.save(keys::GOALS, &1);
        villain.save(keys::GOALS, &2);

        assert_eq!(hero.load_or(keys::GOALS, 0), 1);
        assert_eq!(villain.load_or(keys::GOALS, 0), 2);
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("storage.json");

        {
            let storage = FileStorage::new(&path);
            storage.save("charakterbogen.profile", r#"{"name":"Gunnar"}"#);
        }

        let reopened = FileStorage::new(&path);
        assert_eq!(
            reopened.load("charakterbogen.profile"),
            Some(r#"{"name":"Gunnar"}"#.to_string())
        );
    }

    #[test]
    fn test_file_storage_remove_persists() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("storage.json");

        let storage = FileStorage::new(&path);
        storage.save("k", "v");
        storage.remove("k");

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.load("k"), None);
    }

    #[test]
    fn test_file_storage_tolerates_corrupt_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("storage.json");
        fs::write(&path, "definitely not json").expect("write");

        let storage = FileStorage::new(&path);
        assert_eq!(storage.load("anything"), None);

        // And it can still take new writes afterwards.
        storage.save("a", "1");
        assert_eq!(storage.load("a"), Some("1".to_string()));
    }

    #[test]
    fn test_file_storage_creates_missing_parent_dirs() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested/deeper/storage.json");

        let storage = FileStorage::new(&path);
        storage.save("a", "1");

        assert!(path.exists());
    }
}
