//! Projects directory page: a curated card grid with status filter and
//! sort controls.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::directory::{self, DirectoryProject, SortKey, StatusFilter};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let filter = RwSignal::new(StatusFilter::default());
    let sort = RwSignal::new(SortKey::default());

    let rows = move || directory::filter_and_sort(directory::PROJECTS, filter.get(), sort.get());

    view! {
        <div class="page page--projects">
            <Navbar/>
            <main class="page__content">
                <header class="directory__header">
                    <h1 class="directory__title">"Projects"</h1>

                    <div class="directory__controls">
                        <div class="directory__filters">
                            {StatusFilter::ALL
                                .into_iter()
                                .map(|f| {
                                    let class = move || {
                                        if filter.get() == f {
                                            "directory__chip directory__chip--active"
                                        } else {
                                            "directory__chip"
                                        }
                                    };
                                    view! {
                                        <button class=class on:click=move |_| filter.set(f)>
                                            {f.label()}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>

                        <select
                            class="directory__sort"
                            on:change=move |ev| {
                                sort.set(SortKey::parse(&event_target_value(&ev)));
                            }
                        >
                            {SortKey::ALL
                                .into_iter()
                                .map(|key| {
                                    view! {
                                        <option value=key.label() selected=move || sort.get() == key>
                                            {key.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                </header>

                <div class="directory__grid">
                    {move || {
                        rows()
                            .into_iter()
                            .map(|project| view! { <ProjectCard project/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </main>
        </div>
    }
}

#[component]
fn ProjectCard(project: DirectoryProject) -> impl IntoView {
    let status_class = format!(
        "directory__status directory__status--{}",
        project.status.label()
    );

    view! {
        <article class="directory__card">
            <header class="directory__card-head">
                <h2 class="directory__name">{project.name}</h2>
                <span class=status_class>{project.status.label()}</span>
            </header>
            <p class="directory__description">{project.description}</p>
            <div class="directory__tags">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="directory__tag">{*tag}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <footer class="directory__card-foot">
                <span class="directory__language">
                    <span
                        class="directory__language-dot"
                        style:background=project.language_color
                    ></span>
                    {project.language}
                </span>
                <span class="directory__stat">"\u{2605} " {project.stars.to_string()}</span>
                <span class="directory__stat">"\u{2442} " {project.forks.to_string()}</span>
                <span class="directory__stat">"\u{1f441} " {project.views.to_string()}</span>
                <span class="directory__updated">{project.last_update}</span>
            </footer>
        </article>
    }
}
