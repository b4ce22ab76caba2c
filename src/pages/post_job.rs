//! Job posting page — the employer's submission form.
//!
//! Mounted only for employer sessions; workers are sent back to the
//! dashboard. That check gates rendering, nothing more — the server
//! authorizes the actual write. On success the draft resets to its default
//! shape; the listing is refreshed manually from the dashboard, not here.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::top_bar::TopBar;
use crate::net::types::Currency;
use crate::state::job_form::JobDraft;
use crate::state::session::SessionState;

/// Post-a-job page, employer only.
#[component]
pub fn PostJobPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if state.session.is_none() {
            navigate("/login", NavigateOptions::default());
        } else if !state.is_employer() {
            navigate("/", NavigateOptions::default());
        }
    });

    let draft = RwSignal::new(JobDraft::default());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let posted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        posted.set(false);
        if let Err(msg) = draft.get().validate() {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        saving.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let payload = draft.get_untracked().to_payload();
                match crate::net::api::create_job(&payload).await {
                    Ok(_job) => {
                        draft.set(JobDraft::default());
                        saving.set(false);
                        posted.set(true);
                    }
                    // Draft is preserved so the user can correct and resubmit.
                    Err(e) => {
                        saving.set(false);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            saving.set(false);
        }
    };

    view! {
        <div class="post-job-page">
            <TopBar/>
            <main class="post-job-page__main">
                <h2>"Post a job"</h2>
                <p class="muted">"Describe what you need; the right people can apply."</p>
                <form class="job-form" on:submit=on_submit>
                    <label>
                        "Title"
                        <input
                            type="text"
                            prop:value=move || draft.get().title
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Description"
                        <textarea
                            prop:value=move || draft.get().description
                            on:input=move |ev| {
                                draft.update(|d| d.description = event_target_value(&ev));
                            }
                        ></textarea>
                    </label>
                    <label>
                        "Location"
                        <input
                            type="text"
                            placeholder="e.g. Bucharest or Remote"
                            prop:value=move || draft.get().location
                            on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                        />
                    </label>
                    <div class="job-form__row">
                        <label>
                            "Hourly rate"
                            <input
                                type="text"
                                placeholder="e.g. 80, or leave empty"
                                prop:value=move || draft.get().hourly_rate
                                on:input=move |ev| {
                                    draft.update(|d| d.hourly_rate = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label>
                            "Currency"
                            <select
                                prop:value=move || draft.get().currency.code()
                                on:change=move |ev| {
                                    draft
                                        .update(|d| {
                                            d.currency = Currency::from_form_value(
                                                &event_target_value(&ev),
                                            );
                                        });
                                }
                            >
                                <option value="EUR">"EUR"</option>
                                <option value="RON">"RON"</option>
                                <option value="USD">"USD"</option>
                            </select>
                        </label>
                    </div>
                    <label>
                        "Category"
                        <select
                            prop:value=move || draft.get().category
                            on:change=move |ev| {
                                draft.update(|d| d.category = event_target_value(&ev));
                            }
                        >
                            <option value="general">"General"</option>
                            <option value="construction">"Construction"</option>
                            <option value="it">"IT"</option>
                            <option value="delivery">"Delivery"</option>
                            <option value="office">"Office"</option>
                        </select>
                    </label>
                    {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                    <Show when=move || posted.get()>
                        <div class="form-success">"Job posted successfully"</div>
                    </Show>
                    <button class="btn btn--primary" type="submit" prop:disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Post job" }}
                    </button>
                </form>
            </main>
        </div>
    }
}
