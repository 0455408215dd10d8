use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::Landing;

fn main() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("[web] logger already initialised: {err}");
    }
    tracing::info!("[web] launching BlueBoost v{}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "BlueBoost" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Landing {}
    }
}
