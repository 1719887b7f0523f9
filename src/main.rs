#![allow(warnings)]
//! Shopping List Frontend Entry Point

mod store;
mod components;
mod app;
mod logger;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init_logger() {
        web_sys::console::error_1(&format!("[MAIN] Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
