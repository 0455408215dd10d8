//! Landing page sections. Every section reads the shared localization context,
//! so each must render under a [`crate::i18n::LocalizationProvider`].

mod cta;
mod faq;
mod features_list;
mod footer;
mod games;
mod hero;
mod language_toggle;
mod stats;
pub mod testimonials;

pub use cta::CallToAction;
pub use faq::Faq;
pub use features_list::FeaturesList;
pub use footer::Footer;
pub use games::Games;
pub use hero::Hero;
pub use language_toggle::LanguageToggle;
pub use stats::Stats;
pub use testimonials::Testimonials;

pub(crate) use faq::FAQ_ENTRIES;
pub(crate) use footer::{COMPANY_LINKS, LEGAL_LINKS};
pub(crate) use hero::MENU_ITEMS;
pub(crate) use stats::STATS;

/// Game catalogue, in display order. Shared by the games grid and the footer.
pub(crate) const GAME_KEYS: [&str; 8] = [
    "games-marvel-rivals",
    "games-overwatch2",
    "games-league-of-legends",
    "games-valorant",
    "games-teamfight-tactics",
    "games-rainbow-six-siege",
    "games-call-of-duty",
    "games-dota2",
];
