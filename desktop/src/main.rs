#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::Landing;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

fn main() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("[desktop] logger already initialised: {err}");
    }

    let resource_dir = resolve_resource_dir();
    tracing::info!(
        "[desktop] launching BlueBoost v{} (resources: {})",
        env!("CARGO_PKG_VERSION"),
        resource_dir.display()
    );

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("BlueBoost – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Always inline the embedded theme (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Landing {}
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
