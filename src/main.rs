//! Résumé Manager Frontend Entry Point

mod app;
mod components;
mod config;
mod draft;
mod error;
mod logging;
mod models;
mod photo;
mod records;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = logging::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    log::info!("starting {}", config.title);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
