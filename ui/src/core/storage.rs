//! Durable key-value storage for user preferences.
//!
//! - Web/WASM: `window.localStorage`.
//! - Native: a small JSON object file in the platform config directory.
//! - Tests: an in-memory map.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(&'static str),
    #[error("preference file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("browser storage call failed: {0}")]
    Js(String),
}

/// A string-to-string store that survives restarts.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same map, which lets tests model a
/// "fresh start" over the same durable data.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{PreferenceStore, StorageError};

    /// `window.localStorage`, looked up on every call so a blocked storage
    /// (private mode, sandboxed iframe) surfaces as an error instead of a panic.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalStorage;

    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable("no window"))?;
        window
            .local_storage()
            .map_err(|err| StorageError::Js(format!("{err:?}")))?
            .ok_or(StorageError::Unavailable("localStorage disabled"))
    }

    impl PreferenceStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            storage()?
                .get_item(key)
                .map_err(|err| StorageError::Js(format!("{err:?}")))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Js(format!("{err:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FilePreferences;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{PreferenceStore, StorageError};

    const FILE_NAME: &str = "preferences.json";

    /// JSON object file (`{"key": "value"}`), rewritten whole on every `set`.
    #[derive(Debug, Clone)]
    pub struct FilePreferences {
        path: PathBuf,
    }

    impl FilePreferences {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `preferences.json` inside the per-user config directory.
        pub fn in_config_dir() -> Result<Self, StorageError> {
            let dirs = directories::ProjectDirs::from("com", "BlueBoost", "BlueBoost")
                .ok_or(StorageError::Unavailable("no home directory"))?;
            Ok(Self::new(dirs.config_dir().join(FILE_NAME)))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
                Ok(raw) => Ok(serde_json::from_str(&raw)?),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(err) => Err(err.into()),
            }
        }
    }

    impl PreferenceStore for FilePreferences {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.read_all()?.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = self.read_all()?;
            entries.insert(key.to_string(), value.to_string());
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
            Ok(())
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clones_share_entries() {
        let store = MemoryPreferences::new();
        let twin = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(twin.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn memory_with_entry_is_prefilled() {
        let store = MemoryPreferences::with_entry("k", "v");
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.get("missing").unwrap(), None);
    }
}
