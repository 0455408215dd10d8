use std::rc::Rc;

use serde::Deserialize;

use super::{Direction, I18nError, Language, TranslationTable};
use crate::core::document::DocumentRoot;
use crate::core::storage::PreferenceStore;

/// Storage key of the saved language.
pub const STORAGE_KEY: &str = "blueBoost-language";

/// What `translate` does when the active language has no such key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingKeyPolicy {
    /// Return the key itself.
    #[default]
    ReturnKey,
    /// Panic with the key and language. Meant for development and tests.
    Panic,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocalizationConfig {
    pub storage_key: String,
    pub missing_key_policy: MissingKeyPolicy,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            missing_key_policy: MissingKeyPolicy::ReturnKey,
        }
    }
}

/// Active language plus everything a language switch has to keep in sync.
pub struct LocalizationState {
    language: Language,
    table: Rc<TranslationTable>,
    store: Rc<dyn PreferenceStore>,
    document: Rc<dyn DocumentRoot>,
    config: LocalizationConfig,
}

impl LocalizationState {
    /// A state in the primary language that has not touched storage or the document.
    pub fn new(
        table: Rc<TranslationTable>,
        store: Rc<dyn PreferenceStore>,
        document: Rc<dyn DocumentRoot>,
        config: LocalizationConfig,
    ) -> Self {
        Self {
            language: Language::default(),
            table,
            store,
            document,
            config,
        }
    }

    /// Builds the state and re-applies a previously saved language, if any.
    pub fn restore(
        table: Rc<TranslationTable>,
        store: Rc<dyn PreferenceStore>,
        document: Rc<dyn DocumentRoot>,
        config: LocalizationConfig,
    ) -> Self {
        let mut state = Self::new(table, store, document, config);
        match state.store.get(&state.config.storage_key) {
            Ok(Some(saved)) => match Language::from_code(&saved) {
                Some(language) => {
                    tracing::debug!(%language, "[i18n] restoring saved language");
                    state.set_language(language);
                }
                None => tracing::debug!(saved = %saved, "[i18n] ignoring unrecognised saved language"),
            },
            Ok(None) => {}
            Err(err) => tracing::warn!("[i18n] could not read saved language: {err}"),
        }
        state
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn config(&self) -> &LocalizationConfig {
        &self.config
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Switches language, updates the document attributes and saves the choice.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.document.apply(language, language.direction());
        if let Err(err) = self.store.set(&self.config.storage_key, language.code()) {
            tracing::warn!(%language, "[i18n] could not save language: {err}");
        }
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language.toggled());
    }

    /// Looks `key` up in the active language. A miss returns the key itself
    /// (or panics under [`MissingKeyPolicy::Panic`]).
    pub fn translate(&self, key: &str) -> String {
        match self.try_translate(key) {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!("[i18n] {err}");
                match self.config.missing_key_policy {
                    MissingKeyPolicy::ReturnKey => key.to_string(),
                    MissingKeyPolicy::Panic => panic!("{err}"),
                }
            }
        }
    }

    pub fn try_translate(&self, key: &str) -> Result<String, I18nError> {
        self.table
            .lookup(self.language, key)
            .ok_or_else(|| I18nError::MissingKey {
                language: self.language,
                key: key.to_string(),
            })
    }
}
