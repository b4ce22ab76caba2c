//! # workforme-client
//!
//! Leptos + WASM frontend for the WorkForMe casual-labor job board.
//! Replaces the React single-file client with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the network
//! types and REST client, and the persisted session store that keeps the
//! auth token and user profile across page reloads.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
