//! Key-value store capability
//!
//! Mirrors the only persistence the games need: read a string under a
//! well-known key, write one back. Failures are deliberately silent — a
//! missing or unreadable value is treated as absence and the game starts
//! fresh rather than failing.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

/// A get/set string store
pub trait KvStore {
    /// The value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// Write failures are swallowed; the next `get` simply sees the old
    /// state.
    fn set(&self, key: &str, value: &str);
}

impl<S: KvStore + ?Sized> KvStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// In-memory store, used by tests and as the no-persistence default
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<FxHashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// File-backed store holding all keys in one JSON object
///
/// The whole map is re-read before every operation, so several store
/// handles may point at the same file within one single-threaded process.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store location: `.mini_arcade.json` in the current directory
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(".mini_arcade.json")
    }

    fn load(&self) -> FxHashMap<String, String> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.load();
        values.insert(key.to_string(), value.to_string());
        if let Ok(serialized) = serde_json::to_string_pretty(&values) {
            let _ = fs::write(&self.path, serialized);
        }
    }
}
