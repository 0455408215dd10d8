use dioxus::prelude::*;

use super::GAME_KEYS;
use crate::i18n::use_i18n;

#[component]
pub fn Games() -> Element {
    let i18n = use_i18n()?;

    rsx! {
        section { class: "games",
            div { class: "games__grid",
                {GAME_KEYS.iter().enumerate().map(|(index, key)| rsx! {
                    article { key: "{key}", class: "game-card",
                        span { class: "game-card__index", {i18n.digits(&format!("{:02}", index + 1))} }
                        h3 { class: "game-card__name", {i18n.t(key)} }
                    }
                })}
            }
        }
    }
}
