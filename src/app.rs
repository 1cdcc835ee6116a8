//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    auth_error::AuthErrorPage, auth_success::AuthSuccessPage, home::HomePage,
    projects::ProjectsPage,
};
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, boots the session exactly once
/// on the client, and sets up client-side routing. The OAuth completion
/// parameters are accepted on any route; `/auth/success` and `/auth/error`
/// exist purely to normalize platform-side redirects onto the home route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    // Session boot: rehydrate from storage, normalize OAuth callback
    // parameters, kick off a profile sync when the cached flag is set.
    // Effects only run on the client, so this never executes during SSR.
    Effect::new(move || {
        crate::net::session::start(auth, toasts);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/wispr-client.css"/>
        <Title text="wispr"/>

        <Router>
            <ToastHost/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("projects") view=ProjectsPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("success")) view=AuthSuccessPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("error")) view=AuthErrorPage/>
            </Routes>
        </Router>
    }
}
