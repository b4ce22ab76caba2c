//! Per-job applications page.
//!
//! Role-aware: the employer who posted a job reviews its applications here;
//! a worker uses the same route to send one. Both operations carry the
//! session token; the server decides what each account may actually see
//! or do.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::top_bar::TopBar;
use crate::net::types::Role;
use crate::state::session::SessionState;

/// Applications page for one job, reached via `/jobs/:id/applications`.
#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    Effect::new(move || {
        if session.get().session.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let job_id = move || params.read().get("id").unwrap_or_default();
    let is_worker = move || session.get().role() == Some(Role::Worker);

    view! {
        <div class="applications-page">
            <TopBar/>
            <main class="applications-page__main">
                <Show
                    when=is_worker
                    fallback=move || view! { <ApplicationList job_id=Signal::derive(job_id)/> }
                >
                    <ApplyForm job_id=Signal::derive(job_id)/>
                </Show>
            </main>
        </div>
    }
}

/// Employer view: the applications received for this job.
#[component]
fn ApplicationList(job_id: Signal<String>) -> impl IntoView {
    let applications = LocalResource::new(move || {
        let id = job_id.get();
        async move { crate::net::api::fetch_applications(&id).await }
    });

    view! {
        <h2>"Applications"</h2>
        <Suspense fallback=move || view! { <p class="muted">"Loading applications..."</p> }>
            {move || {
                applications
                    .get()
                    .map(|result| match result {
                        Ok(items) if items.is_empty() => {
                            view! { <p class="muted">"No applications yet."</p> }.into_any()
                        }
                        Ok(items) => {
                            view! {
                                <ul class="application-list">
                                    {items
                                        .into_iter()
                                        .map(|app| {
                                            let worker = app
                                                .worker
                                                .as_ref()
                                                .map(|w| w.name.clone())
                                                .unwrap_or_else(|| "Anonymous".to_owned());
                                            view! {
                                                <li class="application-list__item">
                                                    <span class="application-list__worker">{worker}</span>
                                                    <span class="application-list__status">{app.status.clone()}</span>
                                                    <p class="application-list__message">{app.message.clone()}</p>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                        Err(e) => {
                            view! { <div class="form-error">{e.to_string()}</div> }.into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

/// Worker view: a short message and a submit.
#[component]
fn ApplyForm(job_id: Signal<String>) -> impl IntoView {
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get() || sent.get() {
            return;
        }
        error.set(None);
        sending.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let payload = crate::net::types::ApplyPayload {
                    message: message.get_untracked().trim().to_owned(),
                };
                match crate::net::api::apply_to_job(&job_id.get_untracked(), &payload).await {
                    Ok(_) => {
                        sending.set(false);
                        sent.set(true);
                        message.set(String::new());
                    }
                    Err(e) => {
                        sending.set(false);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = job_id;
            sending.set(false);
        }
    };

    view! {
        <h2>"Apply for this job"</h2>
        <form class="apply-form" on:submit=on_submit>
            <label>
                "Message to the employer"
                <textarea
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
            <Show when=move || sent.get()>
                <div class="form-success">"Application sent"</div>
            </Show>
            <button
                class="btn btn--primary"
                type="submit"
                prop:disabled=move || sending.get() || sent.get()
            >
                {move || if sending.get() { "Sending..." } else { "Apply" }}
            </button>
        </form>
    }
}
