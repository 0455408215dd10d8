use dioxus::prelude::*;

use crate::i18n::{use_i18n, Language};

fn flag(language: Language) -> &'static str {
    match language {
        Language::English => "🇺🇸",
        Language::Arabic => "🇸🇦",
    }
}

/// Flag button switching between the two languages. The tooltip is written in
/// the active language and names the one it switches to.
#[component]
pub fn LanguageToggle() -> Element {
    let mut i18n = use_i18n()?;
    let tooltip = i18n.t("language-toggle-title");

    rsx! {
        button {
            r#type: "button",
            class: "language-toggle",
            title: "{tooltip}",
            aria_label: "{tooltip}",
            onclick: move |_| i18n.toggle_language(),
            span { class: "language-toggle__flag", aria_hidden: "true", {flag(i18n.language())} }
        }
    }
}
