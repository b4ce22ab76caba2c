//! Login page — email/password form driving the login flow.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};
use crate::state::session::{self, SessionState};

/// Login page. On success the session is persisted, the session signal is
/// updated, and the user lands on the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Already signed in — go straight to the dashboard.
    let nav_authed = navigate.clone();
    Effect::new(move || {
        if session_signal.get().session.is_some() {
            nav_authed("/", NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let auth_state = RwSignal::new(AuthState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth_state.get().submitting {
            return;
        }
        if let Err(msg) = auth::validate_login(&email.get(), &password.get()) {
            auth_state.update(|s| s.fail(msg));
            return;
        }
        auth_state.update(AuthState::begin);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let payload = crate::net::types::LoginPayload {
                    email: email.get_untracked().trim().to_owned(),
                    password: password.get_untracked(),
                };
                match crate::net::api::login(&payload).await {
                    Ok(s) => {
                        auth_state.update(AuthState::finish);
                        session::establish(session_signal, s);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => auth_state.update(|st| st.fail(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <div class="auth-page">
            <section class="auth-page__hero">
                <h1>"Gigs today, freedom tomorrow."</h1>
                <p>"Short gigs, posted in seconds, matched with people ready to work."</p>
            </section>
            <section class="auth-card">
                <div class="auth-card__tabs">
                    <span class="auth-card__tab auth-card__tab--active">"Login"</span>
                    <a class="auth-card__tab" href="/register">"Register"</a>
                </div>
                <form class="auth-card__form" on:submit=on_submit>
                    <label>
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || {
                        auth_state
                            .get()
                            .error
                            .map(|msg| view! { <div class="form-error">{msg}</div> })
                    }}
                    <button
                        class="btn btn--primary"
                        type="submit"
                        prop:disabled=move || auth_state.get().submitting
                    >
                        {move || if auth_state.get().submitting { "Please wait..." } else { "Login" }}
                    </button>
                </form>
            </section>
        </div>
    }
}
