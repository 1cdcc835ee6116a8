//! Ranked project table with period and metric selectors.

use leptos::prelude::*;

use crate::components::sparkline::Sparkline;
use crate::net::api::LeaderboardSnapshot;
use crate::net::types::{LeaderboardProject, Momentum};
use crate::state::leaderboard::{self, Metric, Period};

/// Leaderboard section of the home page.
///
/// Changing the period triggers a re-fetch (the stats window is computed
/// server-side); changing the metric only re-sorts the rows already in
/// hand. A background loop re-fetches every five minutes until the
/// component unmounts.
#[component]
pub fn Leaderboard() -> impl IntoView {
    let period = RwSignal::new(Period::default());
    let metric = RwSignal::new(Metric::default());

    let snapshot = LocalResource::new(move || crate::net::api::fetch_leaderboard(period.get()));

    // Unmount guard for the refresh loop; signals survive the closure's
    // Send bound where a timer handle would not.
    let cancelled = RwSignal::new(false);
    on_cleanup(move || cancelled.set(true));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(
                crate::net::api::LEADERBOARD_REFRESH_MS,
            ))
            .await;
            if cancelled.try_get_untracked().unwrap_or(true) {
                break;
            }
            snapshot.refetch();
        }
    });

    let breadcrumb = move || {
        format!(
            "mindshare / {} / {}",
            period.get().breadcrumb(),
            metric.get().breadcrumb()
        )
    };

    view! {
        <section class="leaderboard">
            <header class="leaderboard__header">
                <h1 class="leaderboard__title">"Mindshare"</h1>
                <p class="leaderboard__breadcrumb">{breadcrumb}</p>

                <div class="leaderboard__controls">
                    <div class="leaderboard__periods">
                        {Period::ALL
                            .into_iter()
                            .map(|p| {
                                let class = move || {
                                    if period.get() == p {
                                        "leaderboard__chip leaderboard__chip--active"
                                    } else {
                                        "leaderboard__chip"
                                    }
                                };
                                view! {
                                    <button class=class on:click=move |_| period.set(p)>
                                        {p.query_value()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="leaderboard__metrics">
                        {Metric::ALL
                            .into_iter()
                            .map(|m| {
                                let class = move || {
                                    if metric.get() == m {
                                        "leaderboard__chip leaderboard__chip--active"
                                    } else {
                                        "leaderboard__chip"
                                    }
                                };
                                view! {
                                    <button class=class on:click=move |_| metric.set(m)>
                                        {m.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </header>

            <Suspense fallback=move || {
                view! { <p class="leaderboard__loading">"Loading projects..."</p> }
            }>
                {move || {
                    snapshot
                        .get()
                        .map(|result| match result {
                            Ok(snapshot) => {
                                view! { <LeaderboardTable snapshot metric/> }.into_any()
                            }
                            Err(message) => {
                                view! { <p class="leaderboard__error">{message}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

/// The table body for one fetched snapshot, re-sorted when the metric
/// selection changes.
#[component]
fn LeaderboardTable(snapshot: LeaderboardSnapshot, metric: RwSignal<Metric>) -> impl IntoView {
    let projects = snapshot.projects;
    let fetched_at = snapshot.fetched_at;

    let rows = move || {
        let mut rows = projects.clone();
        leaderboard::sort_by_metric(&mut rows, metric.get());
        rows.into_iter()
            .enumerate()
            .map(|(index, project)| {
                view! { <LeaderboardRow index project metric/> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="leaderboard__table">
            <div class="leaderboard__head">
                <span class="leaderboard__cell leaderboard__cell--rank">"#"</span>
                <span class="leaderboard__cell leaderboard__cell--project">"Project"</span>
                <span class="leaderboard__cell">"Followers"</span>
                <span class="leaderboard__cell">"Smart"</span>
                <span class="leaderboard__cell">
                    {move || metric.get().column_label()}
                </span>
                <span class="leaderboard__cell">"Trend"</span>
            </div>
            {rows}
            <footer class="leaderboard__footer">"Last updated " {fetched_at}</footer>
        </div>
    }
}

#[component]
fn LeaderboardRow(
    index: usize,
    project: LeaderboardProject,
    metric: RwSignal<Metric>,
) -> impl IntoView {
    let rank = leaderboard::rank_label(index);
    let smart = leaderboard::smart_ratio(&project);
    let followers = leaderboard::format_count(project.followers_count as f64);
    let growth = project
        .stats
        .as_ref()
        .map(|s| s.followers_growth)
        .filter(|g| *g != 0.0)
        .map(|g| {
            if g > 0.0 {
                format!("+{}", leaderboard::format_count(g))
            } else {
                leaderboard::format_count(g)
            }
        });
    let momentum = project.momentum();
    let trend_glyph = match momentum {
        Momentum::Rising => "\u{2197}",
        Momentum::Falling => "\u{2198}",
        Momentum::Stable => "\u{2212}",
    };
    let samples = project
        .stats
        .as_ref()
        .map(|s| s.sparkline.clone())
        .unwrap_or_default();
    let avatar = project.avatar_url.clone();
    let initial = project.initial().to_string();
    let name = project.display_name.clone();
    let handle = project.username.clone().map(|u| format!("@{u}"));

    let metric_value = move || leaderboard::format_count(metric.get().value(&project));

    view! {
        <div class="leaderboard__row">
            <span class="leaderboard__cell leaderboard__cell--rank">{rank}</span>
            <span class="leaderboard__cell leaderboard__cell--project">
                {match avatar {
                    Some(url) => {
                        view! { <img class="leaderboard__avatar" src=url alt=""/> }.into_any()
                    }
                    None => {
                        view! { <span class="leaderboard__initial">{initial}</span> }.into_any()
                    }
                }}
                <span class="leaderboard__name">{name}</span>
                {handle.map(|h| view! { <span class="leaderboard__handle">{h}</span> })}
            </span>
            <span class="leaderboard__cell">
                {followers}
                {growth.map(|g| view! { <span class="leaderboard__growth">{g}</span> })}
            </span>
            <span class="leaderboard__cell">{smart}</span>
            <span class="leaderboard__cell leaderboard__cell--metric">{metric_value}</span>
            <span class="leaderboard__cell leaderboard__cell--trend">
                <Sparkline values=samples momentum=momentum/>
                <span class="leaderboard__momentum">{trend_glyph}</span>
            </span>
        </div>
    }
}
