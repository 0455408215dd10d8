use dioxus::prelude::*;

use crate::i18n::use_i18n;

/// Figure and label key of each statistic. Labels may span two lines.
pub(crate) const STATS: [(&str, &str); 4] = [
    ("500+", "stats-completed-boosts"),
    ("24+", "stats-service"),
    ("500+", "stats-positive-reviews"),
    ("5+", "stats-years-experience"),
];

#[component]
pub fn Stats() -> Element {
    let i18n = use_i18n()?;

    rsx! {
        section { class: "stats",
            span { class: "section-eyebrow", {i18n.t("stats-title")} }
            h2 { class: "section-title", {i18n.t("stats-heading")} }
            p { class: "stats__subtitle",
                {i18n.t("stats-subtitle")}
                " "
                span { class: "highlight", {i18n.t("stats-subtitle-highlight")} }
            }

            div { class: "stats__grid",
                {STATS.iter().map(|(figure, label_key)| {
                    let label = i18n.t(label_key);
                    rsx! {
                        div { key: "{label_key}", class: "stat",
                            strong { class: "stat__value", {i18n.digits(figure)} }
                            span { class: "stat__label",
                                {label.lines().map(|line| rsx! {
                                    span { key: "{line}", class: "stat__label-line", "{line}" }
                                })}
                            }
                        }
                    }
                })}
            }
        }
    }
}
