//! Top navigation bar: brand, tabs, dark mode toggle, and the connect /
//! account control.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::ui::NavTab;
use crate::util::dark_mode;

/// Top navigation bar.
///
/// The active tab follows the route. The right side shows either a
/// "Connect" button (no linked account) or the avatar menu with the
/// disconnect action. Opening the avatar menu re-syncs the profile, so a
/// session revoked elsewhere is noticed without a reload.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    let active_tab = Memo::new(move |_| NavTab::from_path(&location.pathname.get()));
    let menu_open = RwSignal::new(false);
    let dropdown_open = RwSignal::new(false);
    let dark = RwSignal::new(false);

    // Preference and media-query reads need the browser, so the initial
    // state lands in an effect rather than at component construction.
    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        dark.set(enabled);
    });

    let on_dark_toggle = move |_| {
        dark.set(dark_mode::toggle(dark.get_untracked()));
    };
    let on_connect = move |_| {
        crate::net::session::connect();
    };
    let on_avatar = move |_| {
        let opening = !dropdown_open.get_untracked();
        dropdown_open.set(opening);
        if opening {
            crate::net::session::sync_profile(auth);
        }
    };
    let on_disconnect = move |_| {
        dropdown_open.set(false);
        crate::net::session::disconnect(auth);
    };

    let connected = move || auth.get().connected;
    let display_name = move || {
        auth.get()
            .user
            .as_ref()
            .and_then(|u| u.display().map(str::to_owned))
            .unwrap_or_else(|| "Connected".to_owned())
    };
    let avatar = move || {
        auth.get()
            .user
            .as_ref()
            .and_then(|u| u.avatar().map(str::to_owned))
    };
    let initial = move || {
        auth.get()
            .user
            .as_ref()
            .map_or('U', crate::net::types::UserProfile::initial)
            .to_string()
    };

    let tabs = move || {
        NavTab::ALL
            .into_iter()
            .map(|tab| {
                let class = move || {
                    if active_tab.get() == tab {
                        "navbar__tab navbar__tab--active"
                    } else {
                        "navbar__tab"
                    }
                };
                view! {
                    <a class=class href=tab.path()>
                        {tab.label()}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "wispr"
            </a>

            <div class="navbar__tabs">{tabs}</div>

            <div class="navbar__actions">
                <button
                    class="navbar__dark-toggle"
                    title="Toggle dark mode"
                    on:click=on_dark_toggle
                >
                    {move || if dark.get() { "\u{2600}" } else { "\u{263e}" }}
                </button>

                <Show
                    when=connected
                    fallback=move || {
                        view! {
                            <button class="btn navbar__connect" on:click=on_connect>
                                "Connect \u{1d54f}"
                            </button>
                        }
                    }
                >
                    <button class="navbar__avatar" on:click=on_avatar>
                        {move || match avatar() {
                            Some(url) => {
                                view! { <img class="navbar__avatar-img" src=url alt="avatar"/> }
                                    .into_any()
                            }
                            None => {
                                view! { <span class="navbar__avatar-initial">{initial()}</span> }
                                    .into_any()
                            }
                        }}
                    </button>
                    <Show when=move || dropdown_open.get()>
                        <div
                            class="navbar__backdrop"
                            on:click=move |_| dropdown_open.set(false)
                        ></div>
                        <div class="navbar__dropdown">
                            <div class="navbar__dropdown-name">{display_name}</div>
                            <button class="navbar__dropdown-item" on:click=on_disconnect>
                                "Disconnect \u{1d54f}"
                            </button>
                        </div>
                    </Show>
                </Show>

                <button
                    class="navbar__burger"
                    title="Menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "\u{2630}"
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar__menu">
                    {NavTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <a
                                    class="navbar__menu-item"
                                    href=tab.path()
                                    on:click=move |_| menu_open.set(false)
                                >
                                    {tab.menu_label()}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </nav>
    }
}
