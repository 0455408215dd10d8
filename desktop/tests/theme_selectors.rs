#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that the CSS selectors the landing page sections rely on (the
  testimonial marquee, the FAQ accordion and the right-to-left overrides
  especially) remain present in the unified shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor drops or renames core classes, preventing a silent
  styling regression in packaged (embedded) desktop builds.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing to the
  shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you rename or remove a selector:
    1. Update the Dioxus component markup in `ui/src/sections`.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".app-root {",
    ".page {",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".pill {",
    ".highlight {",
    // Hero & navigation card
    ".hero__menu-button",
    ".hero__menu {",
    ".hero__menu-item",
    ".language-toggle",
    // Testimonial marquee
    ".marquee__lane",
    ".marquee__strip",
    ".testimonial-card",
    // Statistics (two-line labels)
    ".stat__label-line",
    // FAQ accordion
    ".faq__item--open",
    ".faq__answer",
    // Footer
    ".footer__columns",
    // Right-to-left mirroring
    "[dir=\"rtl\"] .hero__menu",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}
