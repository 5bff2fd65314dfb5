//! Marketing Site Web Frontend
//!
//! Leptos-based WASM frontend: tool showcase pages, the contact form and
//! the cookie consent banner.

mod api;
mod app;
mod browser;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }
    leptos::mount::mount_to_body(App);
}
