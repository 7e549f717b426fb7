//! # client
//!
//! Leptos frontend for the internship portal sign-in page.
//!
//! The page renders server-side through the `portal` host and hydrates in the
//! browser. Form behavior lives in `portal_auth::flow`; this crate binds it to
//! signals, performs the HTTP call with `gloo-net`, and runs navigation.

pub mod app;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
