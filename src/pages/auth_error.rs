//! Landing page for platform-side OAuth failure redirects. Forwards to the
//! home route with `x_error=true` so the boot-time handler reports it.

use leptos::prelude::*;

#[component]
pub fn AuthErrorPage() -> impl IntoView {
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href("/?x_error=true") {
                leptos::logging::warn!("redirect home after auth error failed: {err:?}");
            }
        }
    });

    view! {
        <div class="auth-page auth-page--error">
            <p class="auth-page__message">"Connection failed. Taking you back..."</p>
        </div>
    }
}
