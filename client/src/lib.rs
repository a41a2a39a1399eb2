//! # client
//!
//! Leptos + WASM frontend for the sticky-notes board.
//!
//! Rendered on the server (`ssr`) and hydrated in the browser (`hydrate`).
//! Components translate DOM pointer, click and input events into calls on
//! the `notes` crate's `BoardCore` and re-render from its note list.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then hydrate
/// the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
