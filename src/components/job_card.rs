//! Card rendering one job from the listing snapshot.

use leptos::prelude::*;

use crate::net::types::{Job, Role};
use crate::state::session::SessionState;

/// One job in the listing. Workers get an apply link; the employer who
/// posted the job gets a link to its applications.
#[component]
pub fn JobCard(job: Job) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let rate = if let Some(rate) = job.hourly_rate {
        format!("{rate} {}/h", job.currency.code())
    } else {
        "Rate negotiable".to_owned()
    };
    let location = if job.location.is_empty() {
        "Remote".to_owned()
    } else {
        job.location.clone()
    };
    let poster = job
        .created_by
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Anonymous".to_owned());
    let poster_id = job.created_by.as_ref().map(|p| p.id.clone());
    let applications_href = format!("/jobs/{}/applications", job.id);

    // Role-gated footer link. Rendering only — the server checks the role
    // again on every applications call.
    let link_label = move || {
        let state = session.get();
        match state.role() {
            Some(Role::Worker) => Some("Apply"),
            Some(Role::Employer)
                if poster_id.as_deref() == state.user_id() =>
            {
                Some("Applications")
            }
            _ => None,
        }
    };

    view! {
        <article class="job-card">
            <div class="job-card__header">
                <span class="job-card__title">{job.title.clone()}</span>
                <span class="job-card__badge">{job.category.clone()}</span>
            </div>
            <div class="job-card__meta">{location} " • " {rate}</div>
            <p class="job-card__description">{job.description.clone()}</p>
            <div class="job-card__footer">
                <span class="job-card__poster">"Posted by " {poster}</span>
                <span class="job-card__status">{job.status.clone()}</span>
                {move || {
                    link_label()
                        .map(|label| {
                            view! {
                                <a class="job-card__link" href=applications_href.clone()>
                                    {label}
                                </a>
                            }
                        })
                }}
            </div>
        </article>
    }
}
