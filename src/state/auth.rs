//! Session state and its reducers.
//!
//! The session is a client-local cache of `{token, user, connected}`
//! persisted to storage and reconciled against the `/users/me` endpoint.
//! Everything here is pure over the `KeyValueStore` facade; the browser
//! glue lives in `net::session`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use crate::net::types::{UserProfile, unwrap_data};
use crate::util::query;
use crate::util::storage::{KeyValueStore, TRUE, keys};

/// Client-local session: bearer token, cached profile, and whether the
/// account is connected to X.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub connected: bool,
}

impl AuthState {
    /// Rebuild the session from persisted storage at startup.
    ///
    /// A cached user still wrapped in a `data` envelope (stored by an older
    /// client) is unwrapped and written back in normalized form. When only
    /// the connected flag survives, the bare `username` key seeds a minimal
    /// profile.
    pub fn hydrate(store: &mut impl KeyValueStore) -> Self {
        let token = store.get(keys::TOKEN);
        let cached_user = store.get(keys::USER);
        let flag = store.flag(keys::X_CONNECTED);

        if let (Some(token), Some(raw)) = (&token, &cached_user) {
            if let Some(user) = parse_cached_user(store, raw) {
                let connected = user.is_connected() || flag;
                return Self {
                    token: Some(token.clone()),
                    user: Some(user),
                    connected,
                };
            }
        }
        if flag {
            let user = store.get(keys::USERNAME).map(|username| UserProfile {
                username: Some(username),
                ..UserProfile::default()
            });
            return Self {
                token,
                user,
                connected: true,
            };
        }
        Self {
            token,
            user: None,
            connected: false,
        }
    }
}

/// Parse the cached `user` JSON, unwrapping a stale `data` envelope and
/// rewriting the normalized form back to storage when one is found.
fn parse_cached_user(store: &mut impl KeyValueStore, raw: &str) -> Option<UserProfile> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let wrapped = value.get("data").is_some_and(Value::is_object);
    let value = unwrap_data(value);
    let user: UserProfile = serde_json::from_value(value.clone()).ok()?;
    if wrapped {
        if let Ok(json) = serde_json::to_string(&value) {
            store.set(keys::USER, &json);
        }
    }
    Some(user)
}

/// Outcome of a `/users/me` fetch, classified by the transport layer.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileFetch {
    /// HTTP 2xx with a JSON body, possibly `data`-wrapped.
    Profile(Value),
    /// HTTP 401.
    Unauthorized,
    /// Transport failure, a non-2xx status, or a body that was not JSON.
    Unreachable,
}

/// Reconcile local session state with a profile fetch outcome.
///
/// Success trusts the server-reported `x_connected` flag in both
/// directions. Failure paths fall back to whatever storage last recorded
/// and never clear the connected flag without evidence. Applying the same
/// outcome twice is equivalent to applying it once, so redundant concurrent
/// syncs converge.
pub fn apply_profile_fetch(
    state: &mut AuthState,
    store: &mut impl KeyValueStore,
    fetch: ProfileFetch,
) {
    match fetch {
        ProfileFetch::Profile(value) => {
            let value = unwrap_data(value);
            let Ok(user) = serde_json::from_value::<UserProfile>(value.clone()) else {
                // Malformed payload degrades the same way as an
                // unreachable server.
                restore_cached(state, store);
                return;
            };
            if user.is_connected() {
                if let Ok(json) = serde_json::to_string(&value) {
                    store.set(keys::USER, &json);
                }
                store.set(keys::X_CONNECTED, TRUE);
                state.user = Some(user);
                state.connected = true;
            } else {
                store.remove(keys::X_CONNECTED);
                state.user = Some(user);
                state.connected = false;
            }
        }
        ProfileFetch::Unauthorized | ProfileFetch::Unreachable => restore_cached(state, store),
    }
}

/// Local-storage fallback shared by the unauthorized and unreachable
/// paths: connection state becomes whatever was last cached.
fn restore_cached(state: &mut AuthState, store: &mut impl KeyValueStore) {
    let flag = store.flag(keys::X_CONNECTED);
    if flag {
        if let Some(raw) = store.get(keys::USER) {
            if let Some(user) = parse_cached_user(store, &raw) {
                state.user = Some(user);
            }
        }
    }
    state.connected = flag;
}

/// Classified result of scanning the page query string for OAuth
/// completion parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum CallbackOutcome {
    /// Token-bearing success redirect.
    Tokens {
        access: String,
        refresh: String,
        username: Option<String>,
    },
    /// Flag-only success redirect (`x_connected=true`).
    Connected,
    /// `x_error=true` or a generic `error` parameter.
    Failed,
    /// No OAuth parameters present.
    Nothing,
}

impl CallbackOutcome {
    /// Classify parsed query parameters. The token-bearing form wins over
    /// the flag form; any error parameter wins over nothing.
    pub fn classify(params: &[(String, String)]) -> Self {
        let access = query::first(params, "access_token");
        let refresh = query::first(params, "refresh_token");
        if let (Some(access), Some(refresh)) = (access, refresh) {
            if !access.is_empty() && !refresh.is_empty() {
                return Self::Tokens {
                    access: access.to_owned(),
                    refresh: refresh.to_owned(),
                    username: query::first(params, "username")
                        .filter(|u| !u.is_empty())
                        .map(str::to_owned),
                };
            }
        }
        if query::first(params, "x_connected") == Some("true") {
            return Self::Connected;
        }
        if query::first(params, "x_error") == Some("true") || query::first(params, "error").is_some()
        {
            return Self::Failed;
        }
        Self::Nothing
    }

    /// Whether the query string must be stripped so a refresh does not
    /// replay this branch.
    pub fn requires_url_cleanup(&self) -> bool {
        !matches!(self, Self::Nothing)
    }
}

/// Apply a classified OAuth callback to session state and storage.
/// Returns `true` when a profile sync should follow.
pub fn apply_callback(
    state: &mut AuthState,
    store: &mut impl KeyValueStore,
    outcome: &CallbackOutcome,
) -> bool {
    match outcome {
        CallbackOutcome::Tokens {
            access,
            refresh,
            username,
        } => {
            store.set(keys::TOKEN, access);
            store.set(keys::ACCESS_TOKEN, access);
            store.set(keys::REFRESH_TOKEN, refresh);
            if let Some(username) = username {
                store.set(keys::USERNAME, username);
            }
            store.set(keys::X_CONNECTED, TRUE);
            state.token = Some(access.clone());
            state.connected = true;
            true
        }
        CallbackOutcome::Connected => {
            store.set(keys::X_CONNECTED, TRUE);
            state.connected = true;
            true
        }
        CallbackOutcome::Failed => {
            store.remove(keys::X_CONNECTED);
            state.connected = false;
            false
        }
        CallbackOutcome::Nothing => false,
    }
}

/// Explicit login with a known token and profile.
pub fn login(
    state: &mut AuthState,
    store: &mut impl KeyValueStore,
    token: String,
    user: UserProfile,
) {
    state.connected = user.is_connected();
    if let Ok(json) = serde_json::to_string(&user) {
        store.set(keys::USER, &json);
    }
    store.set(keys::TOKEN, &token);
    state.token = Some(token);
    state.user = Some(user);
}

/// Drop the in-memory session and its two storage keys. Does not touch the
/// connection flag; `clear_connection` owns the disconnect flow.
pub fn logout(state: &mut AuthState, store: &mut impl KeyValueStore) {
    state.token = None;
    state.user = None;
    state.connected = false;
    store.remove(keys::TOKEN);
    store.remove(keys::USER);
}

/// Replace the cached profile after a server-side update.
pub fn update_user(state: &mut AuthState, store: &mut impl KeyValueStore, user: UserProfile) {
    state.connected = user.is_connected();
    if let Ok(json) = serde_json::to_string(&user) {
        store.set(keys::USER, &json);
    }
    state.user = Some(user);
}

/// Storage half of the disconnect flow. Runs regardless of whether the
/// best-effort server call succeeded, so the client can never stay stuck
/// believing it is connected after the user asked to leave.
pub fn clear_connection(store: &mut impl KeyValueStore) {
    store.remove(keys::X_CONNECTED);
    store.remove(keys::ACCESS_TOKEN);
    store.remove(keys::REFRESH_TOKEN);
    store.remove(keys::USER);
}
