//! LitPath AI — Dioxus-powered research search client.

use std::sync::OnceLock;

use dioxus::prelude::*;
use litpath_core::ClientConfig;

mod app;
mod landing;
mod results;
mod search;
mod state;

use app::App;

/// Backend configuration, fixed before Dioxus launches.
pub static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> ClientConfig {
    let path = std::path::Path::new(litpath_core::config::CONFIG_FILE_NAME);
    ClientConfig::load(path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring config file, using defaults");
        ClientConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> ClientConfig {
    ClientConfig::default()
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("litpath=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    #[cfg(target_arch = "wasm32")]
    let _ = dioxus::logger::init(tracing::Level::INFO);

    let config = load_config();
    tracing::info!(base_url = config.base_url.as_str(), "Starting LitPath");
    let _ = CONFIG.set(config);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("LitPath AI")
                            .with_inner_size(LogicalSize::new(1280.0, 860.0))
                            .with_min_inner_size(LogicalSize::new(720.0, 500.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
