//! Narrow key-value facade over browser `localStorage`.
//!
//! Session and preference persistence go through the `KeyValueStore` trait
//! so the fallback logic in the session reducers can run against an
//! in-memory map in native tests and on the server. Two tabs can still race
//! on writes with last-write-wins semantics; there is no cross-tab
//! invalidation signal.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Storage keys shared by the session and preference code.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const USERNAME: &str = "username";
    pub const USER: &str = "user";
    pub const X_CONNECTED: &str = "x_connected";
    pub const DARK_MODE: &str = "darkMode";
}

/// Sentinel value for boolean-ish keys (`x_connected`, `darkMode`).
pub const TRUE: &str = "true";

/// External key-value collaborator. Absent keys read as `None`; writes are
/// fire-and-forget.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);

    /// Reads a `"true"`-sentinel flag.
    fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| v == TRUE)
    }
}

/// In-memory store used in native builds and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// `localStorage`-backed store. Browser only; every call re-resolves the
/// storage object so a denied storage permission degrades to no-ops.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
impl BrowserStore {
    fn raw() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::raw().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(s) = Self::raw() {
            if s.set_item(key, value).is_err() {
                leptos::logging::warn!("localStorage write failed for {key}");
            }
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(s) = Self::raw() {
            if s.remove_item(key).is_err() {
                leptos::logging::warn!("localStorage remove failed for {key}");
            }
        }
    }
}
