//! Persisted session store over `localStorage`.
//!
//! Holds the auth token and the serialized user profile across page reloads.
//! The two keys are written and removed together: a partial or corrupt pair
//! is treated as no session at all and wiped on the next `load`. Requires a
//! browser environment; on the server every operation degrades to "no
//! session".
//!
//! This module is the only writer of durable session state. Controllers hand
//! sessions to it through [`save`]/[`clear`]; nothing else touches these keys.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::net::types::Session;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "workforme_token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "workforme_user";

/// Build a session from raw storage entries.
///
/// Returns `None` unless both entries are present and the user record
/// parses. This is the fail-safe core of [`load`], kept free of `web_sys`
/// so it can be exercised in tests.
fn session_from_entries(token: Option<String>, user_json: Option<String>) -> Option<Session> {
    let token = token?;
    let user = serde_json::from_str(&user_json?).ok()?;
    Some(Session { token, user })
}

/// Read the persisted session. A missing or unparseable entry clears both
/// keys and yields `None` — a partial session is no session.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let user_json = storage.get_item(USER_KEY).ok().flatten();
        let session = session_from_entries(token, user_json);
        if session.is_none() {
            clear();
        }
        session
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a session. Both keys are written back-to-back before control
/// returns, so no consumer can observe one without the other.
pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Ok(user_json) = serde_json::to_string(&session.user) else {
            return;
        };
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &session.token);
            let _ = storage.set_item(USER_KEY, &user_json);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove both session keys.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

/// Read just the stored token, for the API client's auth header.
pub fn stored_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
