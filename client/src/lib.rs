//! # pyxell-client
//!
//! Leptos + WASM frontend for the Pyxell AI assistant: registration, login
//! and a chat view with a typing indicator, all talking to a remote HTTP API.
//!
//! The login/registration submit flow lives in `state::submit`; its
//! collaborators (HTTP transport, token store, navigator, alert slot) are
//! traits so the flow can be exercised without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
