//! In-memory session state — the reactive mirror of the persisted store.
//!
//! The composition root provides this as an `RwSignal` context. It is a
//! read-only copy from the pages' point of view: durable state changes go
//! through [`establish`]/[`sign_out`], which keep the store and the signal
//! in step.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Set};

use crate::net::types::{Role, Session};

/// Current session, if any. Absent means the anonymous view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    /// Rehydrate from the persisted store at startup.
    pub fn from_store() -> Self {
        Self {
            session: crate::util::session_store::load(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.user.role)
    }

    /// Whether the job-posting page may be mounted. This is a rendering
    /// convenience only — the server re-checks the role on every write.
    pub fn is_employer(&self) -> bool {
        self.role() == Some(Role::Employer)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.id.as_str())
    }
}

/// Persist a freshly authenticated session and publish it to the UI.
pub fn establish(signal: RwSignal<SessionState>, session: Session) {
    crate::util::session_store::save(&session);
    signal.set(SessionState {
        session: Some(session),
    });
}

/// Explicit logout: wipe durable storage, then the in-memory copy.
pub fn sign_out(signal: RwSignal<SessionState>) {
    crate::util::session_store::clear();
    signal.set(SessionState::default());
}
