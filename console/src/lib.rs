//! # console
//!
//! Leptos + WASM frontend for the Konectame marketplace admin console.
//!
//! This crate contains the authentication state store, the route guard for
//! the `/admin` tree, the identity-provider boundary with its REST and
//! in-memory adapters, and the pages and components of the console shell.
//! The host binary server-renders `app::App`; the `hydrate` build takes over
//! in the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
