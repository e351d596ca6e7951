//! Preference stores: where a previously chosen locale is read from.
//!
//! Values are JSON values rather than strings because the store may hold
//! anything under a key; the loader only accepts a plain string for the
//! locale preference.

use crate::error::PreferenceError;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Key under which the chosen locale code is stored.
pub const LOCALE_PREFERENCE_KEY: &str = "LOCALE";

/// Read-only key-value access to stored preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
}

/// Preference store held in memory.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single value.
    pub fn with_value(key: &str, value: Value) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }

    pub fn set(&self, key: &str, value: Value) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
    }

    pub fn remove(&self, key: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

/// Preference store backed by a JSON object file.
///
/// The file is read once when the store is opened. A missing file is an
/// empty store.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl FilePreferenceStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PreferenceError> {
        let path = path.as_ref().to_path_buf();
        let shown = path.display().to_string();

        let values = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str::<Map<String, Value>>(&content).map_err(
                |source| PreferenceError::Parse {
                    path: shown.clone(),
                    source,
                },
            )?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Preferences file {} not found, starting empty", shown);
                Map::new()
            }
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: shown,
                    source,
                })
            }
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}
