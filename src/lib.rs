//! # site-client
//!
//! Leptos + WASM frontend for the member site. Replaces the React
//! `client/` with a Rust-native UI layer.
//!
//! This crate contains the auth-aware navigation bar, pages, shared
//! application state, the REST client for the auth/profile backend, and the
//! session-change event channel that keeps the navbar in sync with logins
//! and logouts.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered body in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
