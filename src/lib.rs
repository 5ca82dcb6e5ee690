//! # esglens
//!
//! Leptos + WASM frontend for the ESG Lens corporate sustainability
//! dashboard. Session-aware routing resolves a confirmed role for each
//! visitor, redirects them to the dashboard that role owns, and guards
//! the admin surface behind an explicit role requirement.
//!
//! This crate contains pages, components, application state, network
//! types, and the role resolution/redirect pipeline under `auth`.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
