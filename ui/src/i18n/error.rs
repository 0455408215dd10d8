use thiserror::Error;

use super::Language;

/// Raised when a component reads the localization context without a
/// `LocalizationProvider` ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("use_i18n must be called inside a LocalizationProvider")]
pub struct MissingProviderError;

#[derive(Debug, Clone, Error)]
pub enum I18nError {
    #[error("no embedded translations for `{language}` (expected {path})")]
    MissingAsset { language: Language, path: String },

    #[error("failed to parse {language} translations: {messages}")]
    Parse { language: Language, messages: String },

    #[error("failed to register {language} translations: {messages}")]
    Bundle { language: Language, messages: String },

    #[error("no `{key}` translation for {language}")]
    MissingKey { language: Language, key: String },
}
