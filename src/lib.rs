//! # ephemeral-chat-client
//!
//! Leptos + WASM frontend for an ephemeral chat room. Polls the room's
//! message API on a fixed interval, renders text / code / image messages,
//! tracks the room expiry countdown, and submits new messages through the
//! send endpoints.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST helpers the poller and send forms share.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
