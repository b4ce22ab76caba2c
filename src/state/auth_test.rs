use super::*;

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn auth_state_default_is_idle() {
    let state = AuthState::default();
    assert!(!state.submitting);
    assert!(state.error.is_none());
}

#[test]
fn begin_clears_a_previous_error() {
    let mut state = AuthState::default();
    state.fail("Login failed".to_owned());
    state.begin();
    assert!(state.submitting);
    assert!(state.error.is_none());
}

#[test]
fn fail_returns_to_idle_with_message() {
    let mut state = AuthState::default();
    state.begin();
    state.fail("Email already registered".to_owned());
    assert!(!state.submitting);
    assert_eq!(state.error.as_deref(), Some("Email already registered"));
}

// =============================================================
// Register-then-login sequencing
// =============================================================

use std::cell::Cell;

use crate::net::types::{Role, User};

/// The flow never suspends in these tests, so one poll resolves it.
fn poll_ready<T>(fut: impl Future<Output = T>) -> T {
    let mut fut = std::pin::pin!(fut);
    let mut cx = std::task::Context::from_waker(std::task::Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        std::task::Poll::Ready(value) => value,
        std::task::Poll::Pending => panic!("flow suspended unexpectedly"),
    }
}

fn session() -> Session {
    Session {
        token: "tok".to_owned(),
        user: User {
            id: "u-1".to_owned(),
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            role: Role::Worker,
        },
    }
}

#[test]
fn failed_registration_aborts_without_a_login_call() {
    let login_called = Cell::new(false);

    let result = poll_ready(register_then_login(
        || async { Err(ApiError("Email already registered".to_owned())) },
        || async {
            login_called.set(true);
            Ok(session())
        },
    ));

    assert_eq!(result, Err(ApiError("Email already registered".to_owned())));
    assert!(!login_called.get());
}

#[test]
fn register_success_with_login_failure_is_terminal() {
    // The account exists but no session is produced.
    let result = poll_ready(register_then_login(
        || async { Ok(()) },
        || async { Err(ApiError("Login failed".to_owned())) },
    ));

    assert_eq!(result, Err(ApiError("Login failed".to_owned())));
}

#[test]
fn register_success_then_login_yields_the_session() {
    let result = poll_ready(register_then_login(
        || async { Ok(()) },
        || async { Ok(session()) },
    ));

    assert_eq!(result, Ok(session()));
}

// =============================================================
// Presence validation
// =============================================================

#[test]
fn login_requires_email_and_password() {
    assert!(validate_login("", "secret").is_err());
    assert!(validate_login("ana@example.com", "").is_err());
    assert!(validate_login("   ", "secret").is_err());
    assert!(validate_login("ana@example.com", "secret").is_ok());
}

#[test]
fn register_additionally_requires_name() {
    assert!(validate_register("", "ana@example.com", "secret").is_err());
    assert!(validate_register("Ana", "ana@example.com", "secret").is_ok());
}
