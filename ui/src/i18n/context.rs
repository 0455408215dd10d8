//! Dioxus glue: one `LocalizationState` per tree root, shared through context.
//!
//! ```ignore
//! rsx! { LocalizationProvider { Page {} } }
//!
//! #[component]
//! fn Page() -> Element {
//!     let mut i18n = use_i18n()?;
//!     rsx! {
//!         h1 { dir: i18n.direction().as_str(), {i18n.t("hero-title")} }
//!         button { onclick: move |_| i18n.toggle_language(), "🌐" }
//!     }
//! }
//! ```

use std::rc::Rc;

use dioxus::prelude::*;

use super::{
    localize_digits, Direction, Language, LocalizationConfig, LocalizationState,
    MissingProviderError, TranslationTable,
};
use crate::core::platform;

/// Handle to the shared localization state. Reads subscribe the calling
/// component, so switching language re-renders every consumer.
#[derive(Clone, Copy)]
pub struct I18n {
    state: Signal<LocalizationState>,
}

impl I18n {
    pub fn language(&self) -> Language {
        self.state.read().language()
    }

    pub fn direction(&self) -> Direction {
        self.state.read().direction()
    }

    /// Direction without subscribing; for frame callbacks outside render.
    pub fn peek_direction(&self) -> Direction {
        self.state.peek().direction()
    }

    pub fn t(&self, key: &str) -> String {
        self.state.read().translate(key)
    }

    /// Digits as the active language displays them.
    pub fn digits(&self, number: &str) -> String {
        localize_digits(self.language(), number)
    }

    pub fn set_language(&mut self, language: Language) {
        self.state.write().set_language(language);
    }

    pub fn toggle_language(&mut self) {
        self.state.write().toggle_language();
    }
}

/// Provides the localization context to the current component and its
/// descendants. `init` runs once, on first render.
pub fn use_localization_scope(init: impl FnOnce() -> LocalizationState) -> I18n {
    let state = use_signal(init);
    use_context_provider(|| I18n { state })
}

/// Reads the localization context established by an ancestor.
pub fn use_i18n() -> Result<I18n, MissingProviderError> {
    try_use_context::<I18n>().ok_or(MissingProviderError)
}

/// Root provider: loads the embedded tables, restores the saved language from
/// the platform store and keeps the document's `lang`/`dir` in sync.
#[component]
pub fn LocalizationProvider(
    #[props(default)] config: LocalizationConfig,
    children: Element,
) -> Element {
    let table = use_hook(|| TranslationTable::embedded().map(Rc::new));
    let table = table?;

    let i18n = use_localization_scope(move || {
        let state = LocalizationState::restore(
            table,
            platform::preference_store(),
            platform::document_root(),
            config,
        );
        tracing::info!(
            language = %state.language(),
            platform = platform::Platform::current().as_str(),
            "[i18n] localization ready"
        );
        state
    });
    let direction = i18n.direction();

    rsx! {
        div { class: "app-root", dir: direction.as_str(), {children} }
    }
}
