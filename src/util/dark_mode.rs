//! Dark mode initialization and toggle.
//!
//! Reads the `darkMode` preference through the storage facade and applies
//! the `dark` class to the document element. Toggle writes the sentinel
//! back and updates the class. Requires a browser environment.

#[cfg(feature = "hydrate")]
use crate::util::storage::{BrowserStore, KeyValueStore, TRUE, keys};

/// Read the dark mode preference.
///
/// Returns `true` if the user previously enabled dark mode, or if the
/// system prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(stored) = BrowserStore.get(keys::DARK_MODE) {
            return stored == TRUE;
        }
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `dark` class on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    if class_list.add_1("dark").is_err() {
                        leptos::logging::warn!("failed to set the dark class");
                    }
                } else if class_list.remove_1("dark").is_err() {
                    leptos::logging::warn!("failed to clear the dark class");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        let mut store = BrowserStore;
        store.set(keys::DARK_MODE, if next { "true" } else { "false" });
    }
    next
}
