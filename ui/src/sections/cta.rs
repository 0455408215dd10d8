use dioxus::prelude::*;

use crate::i18n::brand::{brand_token, split_brand};
use crate::i18n::use_i18n;

#[component]
pub fn CallToAction() -> Element {
    let i18n = use_i18n()?;
    let title = split_brand(&i18n.t("cta-title"), brand_token(i18n.language()));

    rsx! {
        section { class: "cta",
            h2 { class: "cta__title",
                "{title.before}"
                if let Some(brand) = &title.brand {
                    span { class: "highlight cta__brand", "{brand}" }
                }
                "{title.after}"
            }
            p { class: "cta__description", {i18n.t("cta-description")} }
            div { class: "cta__actions",
                button { r#type: "button", class: "button button--ghost", {i18n.t("cta-sign-in")} }
                button { r#type: "button", class: "button button--primary", {i18n.t("cta-sign-up")} }
            }
        }
    }
}
