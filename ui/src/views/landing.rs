use dioxus::prelude::*;

use crate::i18n::{LocalizationConfig, LocalizationProvider};
use crate::marquee::MarqueeConfig;
use crate::sections::{
    CallToAction, Faq, FeaturesList, Footer, Games, Hero, Stats, Testimonials,
};

/// The whole landing page, wrapped in its localization provider.
#[component]
pub fn Landing(
    #[props(default)] localization: LocalizationConfig,
    #[props(default)] marquee: MarqueeConfig,
) -> Element {
    rsx! {
        LocalizationProvider { config: localization,
            main { class: "page page-landing",
                Hero {}
                Games {}
                FeaturesList {}
                Testimonials { config: marquee }
                Stats {}
                Faq {}
                CallToAction {}
                Footer {}
            }
        }
    }
}
