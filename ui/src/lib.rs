//! Shared UI crate for the BlueBoost landing page. The localization context,
//! the testimonial marquee and every page section live here; the web and
//! desktop crates only launch [`Landing`].

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod marquee;
pub mod sections;
pub mod views;

pub use views::Landing;

/// Shared theme stylesheet. Desktop inlines the same file with `include_str!`.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
