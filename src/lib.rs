//! # wispr-client
//!
//! Leptos + WASM frontend for the Wispr social-growth dashboard: a ranked
//! project leaderboard, an OAuth connect/disconnect flow against the X
//! identity platform, and a static projects directory.
//!
//! There is no backend in this crate. All state lives in browser local
//! storage and component signals; browser-only behavior (storage, fetch,
//! timers, URL manipulation) is gated behind the `hydrate` feature so the
//! pure session and sorting logic stays testable with plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(crate::app::App);
}
