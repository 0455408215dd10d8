//! Internationalization (i18n) support for `blueboost-ui`.
//!
//! This module wires together:
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - Dioxus context (one [`LocalizationState`] per tree root)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en-US/blueboost-ui.ftl   (primary / reference)
//!   ar-SA/blueboost-ui.ftl   (secondary, right-to-left)
//! ```
//!
//! Usage in a component (inside a `LocalizationProvider`):
//! ```ignore
//! let i18n = use_i18n()?;
//! let title = i18n.t("hero-title");
//! ```
//!
//! To add a message:
//! 1. Add it to `en-US/blueboost-ui.ftl`.
//! 2. Add the same ID to every other locale (the completeness tests fail otherwise).
//!
//! A key missing from the active language renders as the key itself; switch
//! [`MissingKeyPolicy`] to `Panic` to make drift loud during development.

pub mod brand;
mod context;
mod error;
mod language;
pub mod numerals;
mod state;
mod table;

pub use context::{use_i18n, use_localization_scope, I18n, LocalizationProvider};
pub use error::{I18nError, MissingProviderError};
pub use language::{Direction, Language};
pub use numerals::{localize_digits, to_arabic_indic};
pub use state::{LocalizationConfig, LocalizationState, MissingKeyPolicy, STORAGE_KEY};
pub use table::{TranslationTable, DOMAIN};
