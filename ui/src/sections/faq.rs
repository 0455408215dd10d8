use dioxus::prelude::*;

use crate::i18n::use_i18n;

/// Question key and, where one is written, the answer key.
pub(crate) const FAQ_ENTRIES: [(&str, Option<&str>); 7] = [
    ("faq-blueboost-question", Some("faq-blueboost-answer")),
    ("faq-safety-question", None),
    ("faq-cancel-question", None),
    ("faq-track-question", None),
    ("faq-issues-question", None),
    ("faq-prices-question", None),
    ("faq-timeframe-question", None),
];

/// Single-open accordion: clicking the open item closes it, clicking another
/// item moves the selection there.
fn next_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
pub fn Faq() -> Element {
    let i18n = use_i18n()?;
    let mut open = use_signal(|| Some(0usize));

    rsx! {
        section { class: "faq",
            span { class: "section-eyebrow", {i18n.t("faq-title")} }
            h2 { class: "section-title",
                {i18n.t("faq-heading")}
                " "
                span { class: "highlight", {i18n.t("faq-subheading")} }
            }

            div { class: "faq__items",
                {FAQ_ENTRIES.iter().enumerate().map(|(index, (question, answer))| {
                    let expanded = open() == Some(index);
                    let class = if expanded { "faq__item faq__item--open" } else { "faq__item" };
                    rsx! {
                        div { key: "{question}", class: "{class}",
                            button {
                                r#type: "button",
                                class: "faq__question",
                                aria_expanded: expanded,
                                onclick: move |_| {
                                    let next = next_open(open(), index);
                                    open.set(next);
                                },
                                span { {i18n.t(question)} }
                                span { class: "faq__chevron", aria_hidden: "true",
                                    if expanded { "−" } else { "+" }
                                }
                            }
                            if expanded {
                                if let Some(answer) = answer {
                                    p { class: "faq__answer", {i18n.t(answer)} }
                                }
                            }
                        }
                    }
                })}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(next_open(Some(0), 0), None);
    }

    #[test]
    fn clicking_another_item_moves_selection() {
        assert_eq!(next_open(Some(0), 3), Some(3));
        assert_eq!(next_open(None, 2), Some(2));
    }

    #[test]
    fn only_the_first_entry_has_an_answer() {
        assert!(FAQ_ENTRIES[0].1.is_some());
        assert!(FAQ_ENTRIES[1..].iter().all(|(_, answer)| answer.is_none()));
    }
}
