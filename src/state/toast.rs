//! Transient notification queue.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::{RwSignal, Update};

/// Severity of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible toasts, newest last. Ids are monotonically assigned
/// per page load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// How long a toast stays on screen.
pub const AUTO_DISMISS_MS: u64 = 5_000;

/// Push a toast and schedule its auto-dismissal. In native builds the
/// toast stays until dismissed by hand.
pub fn show(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_DISMISS_MS)).await;
            // The signal may be gone if the app was torn down meanwhile.
            let _ = toasts.try_update(|t| t.dismiss(id));
        });
    }
}
