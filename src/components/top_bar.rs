//! Top bar with brand, navigation, and the logout control.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};

/// Header shown on authenticated pages: brand, current user, logout.
#[component]
pub fn TopBar() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let user_name = move || {
        session_signal
            .get()
            .session
            .map(|s| s.user.name)
            .unwrap_or_default()
    };
    let user_role = move || {
        session_signal
            .get()
            .role()
            .map(|r| r.as_str())
            .unwrap_or_default()
    };
    let is_employer = move || session_signal.get().is_employer();

    let on_logout = move |_| {
        session::sign_out(session_signal);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="top-bar">
            <a class="top-bar__brand" href="/">
                <span class="top-bar__logo"></span>
                <span>
                    <span class="top-bar__name">"WorkForMe"</span>
                    <span class="top-bar__tagline">"Instant jobs. Real people."</span>
                </span>
            </a>
            <nav class="top-bar__nav">
                <a href="/">"Jobs"</a>
                <Show when=is_employer>
                    <a href="/post">"Post a job"</a>
                </Show>
            </nav>
            <div class="top-bar__user">
                <span class="top-bar__user-name">{user_name}</span>
                <span class="top-bar__user-role">{user_role}</span>
                <button class="btn btn--logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
