//! REST client for the job-board API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning errors since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call funnels through one request path that normalizes failures into
//! [`ApiError`]: a rejected request surfaces the server's `{ "error": ... }`
//! message when the body parses, and a per-endpoint fallback otherwise.
//! Transport failures take the same path, so callers render one message
//! inline and never need to distinguish the two.
//!
//! No retries, no timeouts, no cancellation: each call is a single
//! best-effort round trip, and retrying is the user's decision (the Refresh
//! button). The current token is read from the persisted session store and
//! attached as the `x-auth-token` header; this module never writes to the
//! store.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Application, ApplyPayload, Job, JobPayload, LoginPayload, RegisterPayload, Session,
};

/// Base path for all API routes, matching the server's mount point.
pub const API_BASE: &str = "/api";

/// Header carrying the raw session token (no bearer prefix).
#[cfg(feature = "hydrate")]
const AUTH_HEADER: &str = "x-auth-token";

/// Uniform API failure carrying a user-presentable message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ApiError(pub String);

impl ApiError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Extract the server's error message from a response body, falling back to
/// the endpoint's generic message when the body is not `{ "error": string }`.
fn error_message(body: &str, fallback: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| fallback.to_owned())
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(
    path: &str,
    fallback: &str,
) -> Result<T, ApiError> {
    let mut builder = gloo_net::http::Request::get(&format!("{API_BASE}{path}"));
    if let Some(token) = crate::util::session_store::stored_token() {
        builder = builder.header(AUTH_HEADER, &token);
    }
    let resp = builder
        .send()
        .await
        .map_err(|_| ApiError::new(fallback))?;
    decode(resp, fallback).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned, B: serde::Serialize>(
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<T, ApiError> {
    let mut builder = gloo_net::http::Request::post(&format!("{API_BASE}{path}"));
    if let Some(token) = crate::util::session_store::stored_token() {
        builder = builder.header(AUTH_HEADER, &token);
    }
    let resp = builder
        .json(body)
        .map_err(|_| ApiError::new(fallback))?
        .send()
        .await
        .map_err(|_| ApiError::new(fallback))?;
    decode(resp, fallback).await
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    fallback: &str,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::new(error_message(&body, fallback)));
    }
    resp.json::<T>()
        .await
        .map_err(|_| ApiError::new(fallback))
}

/// Create an account via `POST /api/auth/register`. The created-user ack
/// body is discarded; only success matters to the caller.
pub async fn register(payload: &RegisterPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _ack: serde_json::Value =
            post_json("/auth/register", payload, "Registration failed").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::new("not available on server"))
    }
}

/// Sign in via `POST /api/auth/login`, yielding the `{token, user}` pair.
/// The caller decides when to persist it.
pub async fn login(payload: &LoginPayload) -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/auth/login", payload, "Login failed").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::new("not available on server"))
    }
}

/// Fetch the full job collection via `GET /api/jobs`. Listing is public.
pub async fn fetch_jobs() -> Result<Vec<Job>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/jobs", "Could not load jobs").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::new("not available on server"))
    }
}

/// Post a new job via `POST /api/jobs` (token required).
pub async fn create_job(payload: &JobPayload) -> Result<Job, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/jobs", payload, "Could not create job").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::new("not available on server"))
    }
}

/// Fetch the applications for one job via `GET /api/jobs/:id/applications`.
pub async fn fetch_applications(job_id: &str) -> Result<Vec<Application>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(
            &format!("/jobs/{job_id}/applications"),
            "Could not load applications",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err(ApiError::new("not available on server"))
    }
}

/// Apply to a job via `POST /api/jobs/:id/applications` (token required).
pub async fn apply_to_job(job_id: &str, payload: &ApplyPayload) -> Result<Application, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            &format!("/jobs/{job_id}/applications"),
            payload,
            "Could not send application",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (job_id, payload);
        Err(ApiError::new("not available on server"))
    }
}
