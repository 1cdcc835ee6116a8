//! Home page: the mindshare leaderboard.

use leptos::prelude::*;

use crate::components::leaderboard::Leaderboard;
use crate::components::navbar::Navbar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <Navbar/>
            <main class="page__content">
                <Leaderboard/>
            </main>
        </div>
    }
}
