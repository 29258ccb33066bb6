//! # client
//!
//! Leptos + WASM frontend for PlataformaPCP, the industrial production
//! planning and control platform.
//!
//! This crate contains the pages, components, application state, the
//! session/auth layer, and the route guard. The `server` crate renders it
//! with the `ssr` feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only happens on hot reload; the first logger stays.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
