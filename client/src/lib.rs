//! # client
//!
//! Leptos frontend for the storefront homepage. Rendered on the server
//! (`ssr`) and hydrated in the browser (`hydrate`).
//!
//! The page is split in two layers: [`view`] maps the props record into a
//! plain view model, and [`components`] turn that model into markup. Only
//! the second layer touches Leptos.

pub mod app;
pub mod components;
pub mod pages;
pub mod view;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
