//! CRUD List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logging::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
