//! Flynn Scheduler Frontend Entry Point

mod commands;
mod render;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    log::info!("[APP] Starting Flynn Scheduler");
    mount_to_body(App);
}
