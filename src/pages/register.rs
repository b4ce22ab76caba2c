//! Registration page — register-then-login flow.
//!
//! Registration and the follow-up login are two separate round trips, not
//! one atomic step: if registration fails nothing else happens, and if
//! registration succeeds but the login fails, the account exists and the
//! user stays signed out with the login error shown. Registration is never
//! retried from here.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::{self, AuthState};
use crate::state::session::{self, SessionState};

/// Registration page for both roles.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let nav_authed = navigate.clone();
    Effect::new(move || {
        if session_signal.get().session.is_some() {
            nav_authed("/", NavigateOptions::default());
        }
    });

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Employer);
    let auth_state = RwSignal::new(AuthState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth_state.get().submitting {
            return;
        }
        if let Err(msg) = auth::validate_register(&name.get(), &email.get(), &password.get()) {
            auth_state.update(|s| s.fail(msg));
            return;
        }
        auth_state.update(AuthState::begin);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let register_payload = crate::net::types::RegisterPayload {
                    name: name.get_untracked().trim().to_owned(),
                    email: email.get_untracked().trim().to_owned(),
                    password: password.get_untracked(),
                    role: role.get_untracked(),
                };
                let login_payload = crate::net::types::LoginPayload {
                    email: register_payload.email.clone(),
                    password: register_payload.password.clone(),
                };
                let outcome = auth::register_then_login(
                    || async move { crate::net::api::register(&register_payload).await },
                    || async move { crate::net::api::login(&login_payload).await },
                )
                .await;
                match outcome {
                    Ok(s) => {
                        auth_state.update(AuthState::finish);
                        session::establish(session_signal, s);
                        navigate("/", NavigateOptions::default());
                    }
                    // Either step failed: surface the message and leave the
                    // user on this page. After a register failure no login
                    // was attempted; after a login failure the account
                    // exists but the user stays signed out.
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
            <section class="auth-card">
                <div class="auth-card__tabs">
                    <a class="auth-card__tab" href="/login">"Login"</a>
                    <span class="auth-card__tab auth-card__tab--active">"Register"</span>
                </div>
                <form class="auth-card__form" on:submit=on_submit>
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Role"
                        <select on:change=move |ev| {
                            role.set(Role::from_form_value(&event_target_value(&ev)));
                        }>
                            <option value="employer">"Employer"</option>
                            <option value="worker">"Worker"</option>
                        </select>
                    </label>
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
                        {move || {
                            if auth_state.get().submitting { "Please wait..." } else { "Create account" }
                        }}
                    </button>
                </form>
            </section>
        </div>
    }
}
