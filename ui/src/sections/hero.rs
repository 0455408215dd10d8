use dioxus::prelude::*;

use super::LanguageToggle;
use crate::i18n::brand::BRAND_EN;
use crate::i18n::use_i18n;

pub(crate) const MENU_ITEMS: [&str; 4] = [
    "nav-home",
    "nav-basket",
    "nav-become-pro",
    "nav-about",
];
const ONLINE_BOOSTERS: &str = "1100";

#[component]
pub fn Hero() -> Element {
    let i18n = use_i18n()?;
    let mut menu_open = use_signal(|| false);
    let menu_label = i18n.t("nav-menu-label");

    rsx! {
        section { class: "hero",
            header { class: "hero__bar",
                span { class: "hero__logo", "{BRAND_EN}" }
                span { class: "pill hero__games", {i18n.t("header-choose-games")} }

                div { class: "hero__actions",
                    span { class: "pill hero__boosters",
                        span { class: "hero__boosters-dot", aria_hidden: "true" }
                        strong { {i18n.digits(ONLINE_BOOSTERS)} }
                        span { {i18n.t("header-online-boosters")} }
                    }
                    LanguageToggle {}
                    button {
                        r#type: "button",
                        class: "hero__menu-button",
                        aria_label: "{menu_label}",
                        aria_expanded: menu_open(),
                        onclick: move |_| menu_open.set(!menu_open()),
                        for dot in 0..4 {
                            span { key: "{dot}", class: "hero__menu-dot" }
                        }
                    }
                }
            }

            if menu_open() {
                nav { class: "hero__menu",
                    {MENU_ITEMS.iter().map(|key| rsx! {
                        button {
                            key: "{key}",
                            r#type: "button",
                            class: "hero__menu-item",
                            onclick: move |_| menu_open.set(false),
                            {i18n.t(key)}
                        }
                    })}
                }
            }

            div { class: "hero__content",
                h1 { class: "hero__title", {i18n.t("hero-title")} }
                p { class: "hero__subtitle", {i18n.t("hero-subtitle")} }
            }
        }
    }
}
