//! Wire types shared with the job-board API.
//!
//! Field names follow the server's camelCase JSON. Everything the server may
//! legitimately omit carries `#[serde(default)]` so a listing never fails to
//! parse because one job is missing an optional field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. Gates which pages the composition root mounts; the server
/// is the real authority on what each role may do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Employer,
    Worker,
}

impl Role {
    /// Parse a `<select>` value; anything unrecognized falls back to worker.
    pub fn from_form_value(value: &str) -> Self {
        if value == "employer" { Self::Employer } else { Self::Worker }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employer => "employer",
            Self::Worker => "worker",
        }
    }
}

/// Currency for hourly rates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Ron,
    Usd,
}

impl Currency {
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "RON" => Self::Ron,
            "USD" => Self::Usd,
            _ => Self::Eur,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Ron => "RON",
            Self::Usd => "USD",
        }
    }
}

/// The authenticated account. Immutable for the lifetime of a session;
/// a new login replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Token + user pairing returned by the login endpoint and persisted by the
/// session store. The two fields are saved and cleared together, never
/// one without the other.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// User summary embedded in a job's `createdBy`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPoster {
    pub id: String,
    pub name: String,
}

/// A job as the server returns it. The client never mutates one of these;
/// listings are wholesale snapshots of server state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_by: Option<JobPoster>,
}

/// A worker's application to a job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    #[serde(default)]
    pub job_id: String,
    #[serde(default)]
    pub worker: Option<JobPoster>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

/// Body for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/jobs`. Produced from a [`crate::state::job_form::JobDraft`];
/// `hourly_rate` is `None` when the rate is negotiable, never zero or NaN.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    pub title: String,
    pub description: String,
    pub location: String,
    pub hourly_rate: Option<f64>,
    pub currency: Currency,
    pub category: String,
}

/// Body for `POST /api/jobs/:id/applications`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApplyPayload {
    pub message: String,
}
