//! Platform detection and the platform-specific backends for preferences and
//! the root document.

use std::rc::Rc;

use super::document::DocumentRoot;
use super::storage::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Desktop => "desktop",
        }
    }
}

/// The durable store for this platform. Falls back to an in-memory store
/// (preference lost on exit) when the durable one cannot be set up.
#[cfg(target_arch = "wasm32")]
pub fn preference_store() -> Rc<dyn PreferenceStore> {
    Rc::new(super::storage::LocalStorage)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn preference_store() -> Rc<dyn PreferenceStore> {
    match super::storage::FilePreferences::in_config_dir() {
        Ok(prefs) => {
            tracing::debug!("[prefs] using {}", prefs.path().display());
            Rc::new(prefs)
        }
        Err(err) => {
            tracing::warn!("[prefs] {err}; language choice will not persist");
            Rc::new(super::storage::MemoryPreferences::new())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn document_root() -> Rc<dyn DocumentRoot> {
    Rc::new(super::document::BrowserDocument)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn document_root() -> Rc<dyn DocumentRoot> {
    Rc::new(super::document::EvalDocument)
}
