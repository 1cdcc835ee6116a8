//! Landing page for platform-side OAuth success redirects.
//!
//! The API sometimes redirects straight to `/auth/success` instead of the
//! origin root. This page persists any tokens it received and then
//! hard-navigates home with the same parameters, so the single boot-time
//! handler on `/` remains the only place that interprets them.

use leptos::prelude::*;

#[component]
pub fn AuthSuccessPage() -> impl IntoView {
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::auth::{AuthState, CallbackOutcome, apply_callback};
            use crate::util::query;
            use crate::util::storage::BrowserStore;

            let Some(window) = web_sys::window() else {
                return;
            };
            let search = window.location().search().unwrap_or_default();
            let params = query::parse(&search);
            let outcome = CallbackOutcome::classify(&params);

            let target = match &outcome {
                CallbackOutcome::Tokens {
                    access,
                    refresh,
                    username,
                } => {
                    // Persist immediately so the tokens survive even if the
                    // forwarding navigation is interrupted.
                    let mut store = BrowserStore;
                    let mut state = AuthState::default();
                    apply_callback(&mut state, &mut store, &outcome);

                    let mut target = format!(
                        "/?access_token={}&refresh_token={}",
                        query::encode(access),
                        query::encode(refresh)
                    );
                    if let Some(username) = username {
                        target.push_str(&format!("&username={}", query::encode(username)));
                    }
                    target
                }
                _ => "/?x_connected=true".to_owned(),
            };
            if let Err(err) = window.location().set_href(&target) {
                leptos::logging::warn!("redirect home after auth success failed: {err:?}");
            }
        }
    });

    view! {
        <div class="auth-page auth-page--success">
            <p class="auth-page__message">"Connecting your account..."</p>
        </div>
    }
}
