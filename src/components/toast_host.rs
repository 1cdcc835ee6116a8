//! Fixed overlay that renders the toast queue.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Toast overlay, mounted once above the router so notifications survive
/// route changes. Clicking a toast dismisses it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For each=move || toasts.get().toasts key=|toast| toast.id let:toast>
                {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| {
                            toasts.update(|t| t.dismiss(id));
                        }>{toast.message.clone()}</div>
                    }
                }
            </For>
        </div>
    }
}
