use dioxus::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn FeaturesList() -> Element {
    let i18n = use_i18n()?;

    rsx! {
        section { class: "features-list",
            h2 { class: "section-title", {i18n.t("features-title")} }
            p { class: "features-list__description", {i18n.t("features-description")} }
        }
    }
}
