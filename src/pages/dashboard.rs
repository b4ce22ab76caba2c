//! Dashboard page — the job listing with a manual refresh.
//!
//! The listing is fetched once when the page mounts and again only when the
//! user hits Refresh. Each completed fetch replaces the snapshot wholesale;
//! a refresh racing another simply loses to whichever completes last. The
//! jobs signal lives at the app root, so a response arriving after
//! navigation away is just a signal write, not a dangling update.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::job_card::JobCard;
use crate::components::top_bar::TopBar;
use crate::state::jobs::JobsState;
use crate::state::session::SessionState;

/// Start a listing fetch; the snapshot is replaced when it completes.
fn fetch_jobs_into(jobs: RwSignal<JobsState>) {
    #[cfg(feature = "hydrate")]
    {
        jobs.update(JobsState::begin_fetch);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_jobs().await {
                Ok(items) => jobs.update(|s| s.apply_snapshot(items)),
                Err(e) => {
                    leptos::logging::warn!("jobs fetch failed: {e}");
                    jobs.update(|s| s.fail(e.to_string()));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = jobs;
    }
}

/// Dashboard page — job listing plus role-aware navigation.
/// Redirects to `/login` if the visitor is anonymous.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let jobs = expect_context::<RwSignal<JobsState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.get().session.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Initial load, exactly once per mount.
    fetch_jobs_into(jobs);

    let on_refresh = move |_| fetch_jobs_into(jobs);

    view! {
        <div class="dashboard-page">
            <TopBar/>
            <main class="dashboard-page__main">
                <div class="listing-header">
                    <div>
                        <h2>"Open jobs"</h2>
                        <p class="listing-header__sub">"Recently posted gigs, straight from the board."</p>
                    </div>
                    <button class="btn" on:click=on_refresh>
                        "Refresh"
                    </button>
                </div>

                {move || {
                    jobs.get()
                        .error
                        .map(|msg| view! { <div class="form-error">{msg}</div> })
                }}
                <Show when=move || jobs.get().loading>
                    <p class="muted">"Loading jobs..."</p>
                </Show>
                <Show when=move || {
                    let state = jobs.get();
                    !state.loading && state.items.is_empty()
                }>
                    <p class="muted">"No jobs posted yet."</p>
                </Show>

                <div class="job-list">
                    {move || {
                        jobs.get()
                            .items
                            .into_iter()
                            .map(|job| view! { <JobCard job=job/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </main>
        </div>
    }
}
