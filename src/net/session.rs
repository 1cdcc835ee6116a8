//! Browser session orchestration: boot hydration, OAuth callback handling,
//! profile sync, connect and disconnect.
//!
//! All state transitions live in [`crate::state::auth`] as pure functions
//! over a [`KeyValueStore`]; this module wires them to the real browser
//! (localStorage, `window.location`, history) and the API client.

use leptos::prelude::RwSignal;
#[cfg(feature = "hydrate")]
use leptos::prelude::{GetUntracked as _, Set as _};

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::{self, ToastKind};
#[cfg(feature = "hydrate")]
use crate::util::storage::BrowserStore;

#[cfg(feature = "hydrate")]
const CONNECT_SUCCESS: &str = "\u{1d54f} account connected successfully";
#[cfg(feature = "hydrate")]
const CONNECT_FAILURE: &str = "Failed to connect \u{1d54f} account";

/// Boot-time session setup, run once from the app shell.
///
/// Hydrates auth state from localStorage, folds any OAuth callback query
/// parameters into it (announcing the outcome as a toast), scrubs those
/// parameters from the address bar, and kicks off a profile sync when the
/// session claims a connection.
pub fn start(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    {
        let mut store = BrowserStore;
        let mut state = AuthState::hydrate(&mut store);

        let params = crate::util::query::parse(&current_query());
        let outcome = crate::state::auth::CallbackOutcome::classify(&params);
        let sync_now = crate::state::auth::apply_callback(&mut state, &mut store, &outcome);
        match &outcome {
            crate::state::auth::CallbackOutcome::Tokens { .. }
            | crate::state::auth::CallbackOutcome::Connected => {
                toast::show(toasts, ToastKind::Success, CONNECT_SUCCESS);
            }
            crate::state::auth::CallbackOutcome::Failed => {
                toast::show(toasts, ToastKind::Error, CONNECT_FAILURE);
            }
            crate::state::auth::CallbackOutcome::Nothing => {}
        }
        if outcome.requires_url_cleanup() {
            strip_query();
        }

        let connected = state.connected;
        auth.set(state);
        if sync_now || connected {
            sync_profile(auth);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, toasts);
    }
}

/// Re-fetch `/users/me` and fold the result into the session.
///
/// Called at boot, when the avatar menu opens, and after tab focus returns
/// a stale session. Safe to call concurrently; the last write wins and all
/// writes are idempotent.
pub fn sync_profile(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = auth.get_untracked().token.clone();
        let fetch = crate::net::api::fetch_current_user(token).await;
        let mut store = BrowserStore;
        let mut state = auth.get_untracked();
        crate::state::auth::apply_profile_fetch(&mut state, &mut store, fetch);
        auth.set(state);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Begin the OAuth handshake by redirecting the whole page to the API.
pub fn connect() {
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        let origin = window.location().origin().unwrap_or_default();
        let url = crate::net::api::authorize_url(&origin);
        if let Err(err) = window.location().set_href(&url) {
            leptos::logging::warn!("redirect to authorization failed: {err:?}");
        }
    }
}

/// Disconnect the linked account after user confirmation.
///
/// The server call is best-effort; local credentials are cleared and the
/// page reloaded regardless of its outcome.
pub fn disconnect(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let confirmed = window
            .confirm_with_message("Disconnect your \u{1d54f} account?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        leptos::task::spawn_local(async move {
            let token = auth.get_untracked().token.clone();
            crate::net::api::post_disconnect(token).await;

            let mut store = BrowserStore;
            crate::state::auth::clear_connection(&mut store);
            let mut state = auth.get_untracked();
            state.user = None;
            state.connected = false;
            auth.set(state);

            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().set_href("/") {
                    leptos::logging::warn!("reload after disconnect failed: {err:?}");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// The current `window.location.search`, empty when unavailable.
#[cfg(feature = "hydrate")]
fn current_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Replace the address bar with the bare path, dropping query and hash.
/// Uses `history.replaceState` so no navigation or reload happens.
#[cfg(feature = "hydrate")]
fn strip_query() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_else(|_| "/".into());
    let result = window.history().and_then(|history| {
        history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path))
    });
    if let Err(err) = result {
        leptos::logging::warn!("could not clean callback parameters: {err:?}");
    }
}
