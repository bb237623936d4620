#![allow(warnings)]
//! Feedback Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod logger;
mod models;
mod notify;
mod session;
mod store;
mod validation;
mod view_state;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::load();
    logger::init(config.log_level);
    log::info!("[APP] Starting, API at {}", config.api_base_url);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
