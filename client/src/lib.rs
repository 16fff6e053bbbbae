//! # client
//!
//! Leptos + WASM frontend for the Pulseboard monitoring dashboard.
//!
//! This crate contains pages, components, application state, network
//! helpers, and the route-authorization guards. The server crate mounts it
//! for SSR and serves the hydration bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
