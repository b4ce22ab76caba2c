//! Auth flow state and presence validation.
//!
//! One struct covers the login and register forms: idle (the default),
//! submitting (submit control disabled, no concurrent double-submits from
//! the same form), or carrying an inline error. Validation runs before any
//! network call so empty fields never reach the server.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use crate::net::api::ApiError;
use crate::net::types::Session;

/// Submission state for an auth form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub submitting: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Enter the submitting state, dropping any stale error.
    pub fn begin(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    /// Return to idle with an inline error message.
    pub fn fail(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    /// Return to idle after success.
    pub fn finish(&mut self) {
        self.submitting = false;
        self.error = None;
    }
}

/// Run the two-step registration flow: register first, then sign in.
///
/// A failed registration aborts the sequence — the login call is never
/// started. Register success followed by login failure is a valid terminal
/// state (the account exists but the user is not signed in); registration
/// is never retried from here.
pub async fn register_then_login<R, RFut, L, LFut>(
    register: R,
    login: L,
) -> Result<Session, ApiError>
where
    R: FnOnce() -> RFut,
    RFut: Future<Output = Result<(), ApiError>>,
    L: FnOnce() -> LFut,
    LFut: Future<Output = Result<Session, ApiError>>,
{
    register().await?;
    login().await
}

/// Presence check for the login form.
pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Email and password are required".to_owned());
    }
    Ok(())
}

/// Presence check for the register form.
pub fn validate_register(name: &str, email: &str, password: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_owned());
    }
    validate_login(email, password)
}
