//! Root application component with routing and context providers.
//!
//! The composition root owns the reactive session copy: it rehydrates it
//! from the persisted store once at startup and provides it as context.
//! Which pages are reachable follows from session presence and role —
//! anonymous visitors land on login/register, authenticated users on the
//! dashboard, and only employers get the posting page. That gating is a
//! rendering convenience; the server enforces the real authorization.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    applications::ApplicationsPage, dashboard::DashboardPage, login::LoginPage,
    post_job::PostJobPage, register::RegisterPage,
};
use crate::state::{jobs::JobsState, session::SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and job-list contexts and sets up client-side
/// routing for login, registration, dashboard, job posting, and per-job
/// applications.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The session signal is the only in-memory copy of the persisted session.
    let session = RwSignal::new(SessionState::from_store());
    let jobs = RwSignal::new(JobsState::default());

    provide_context(session);
    provide_context(jobs);

    view! {
        <Stylesheet id="leptos" href="/pkg/workforme.css"/>
        <Title text="WorkForMe"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("post") view=PostJobPage/>
                <Route
                    path=(StaticSegment("jobs"), ParamSegment("id"), StaticSegment("applications"))
                    view=ApplicationsPage
                />
            </Routes>
        </Router>
    }
}
