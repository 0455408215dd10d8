use dioxus::prelude::*;

use super::GAME_KEYS;
use crate::i18n::brand::BRAND_EN;
use crate::i18n::use_i18n;

pub(crate) const COMPANY_LINKS: [&str; 3] = [
    "footer-loyalty",
    "footer-coaches",
    "footer-newsletter",
];
pub(crate) const LEGAL_LINKS: [&str; 3] = [
    "footer-terms-of-use",
    "footer-privacy-policy",
    "footer-dmca-notice",
];

#[component]
pub fn Footer() -> Element {
    let i18n = use_i18n()?;
    let links = |keys: &'static [&'static str]| {
        rsx! {
            ul { class: "footer__links",
                {keys.iter().map(|key| rsx! {
                    li { key: "{key}", a { href: "#", {i18n.t(key)} } }
                })}
            }
        }
    };

    rsx! {
        footer { class: "footer",
            nav { class: "footer__games",
                {GAME_KEYS.iter().map(|key| rsx! {
                    a { key: "{key}", href: "#", class: "footer__game", {i18n.t(key)} }
                })}
            }

            div { class: "footer__columns",
                div { class: "footer__about",
                    span { class: "footer__logo", "{BRAND_EN}" }
                    p { {i18n.t("footer-description")} }
                }
                div { class: "footer__group",
                    h4 { {i18n.t("footer-company")} }
                    {links(&COMPANY_LINKS)}
                }
                div { class: "footer__group",
                    h4 { {i18n.t("footer-legal")} }
                    {links(&LEGAL_LINKS)}
                }
                div { class: "footer__help",
                    h4 { {i18n.t("footer-need-help")} }
                    p { {i18n.t("footer-support-description")} }
                    button { r#type: "button", class: "button button--primary", {i18n.t("footer-lets-chat")} }
                    a { href: "#", class: "footer__help-center", {i18n.t("footer-help-center")} }
                }
            }

            p { class: "footer__copyright", {i18n.t("footer-copyright")} }
        }
    }
}
