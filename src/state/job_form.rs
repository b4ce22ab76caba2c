//! Job submission draft: form state, coercion, and reset.
//!
//! The draft is component-local and never persisted. `hourly_rate` is kept
//! as the raw input string until submission; an empty value means "rate
//! negotiable" and maps to `None` in the payload — never zero, never NaN.

#[cfg(test)]
#[path = "job_form_test.rs"]
mod job_form_test;

use crate::net::types::{Currency, JobPayload};

/// Draft state for the post-a-job form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub hourly_rate: String,
    pub currency: Currency,
    pub category: String,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            hourly_rate: String::new(),
            currency: Currency::Eur,
            category: "general".to_owned(),
        }
    }
}

impl JobDraft {
    /// Check the draft before any network call. Title and description are
    /// required; a non-empty rate must parse as a finite number so the
    /// payload can never carry NaN.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err("Title and description are required".to_owned());
        }
        if parse_rate(&self.hourly_rate).is_err() {
            return Err("Hourly rate must be a number".to_owned());
        }
        Ok(())
    }

    /// Build the request body. Call only after [`Self::validate`]; an
    /// unparseable rate degrades to `None` rather than a bad number.
    pub fn to_payload(&self) -> JobPayload {
        JobPayload {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            location: self.location.trim().to_owned(),
            hourly_rate: parse_rate(&self.hourly_rate).unwrap_or_default(),
            currency: self.currency,
            category: self.category.clone(),
        }
    }
}

/// Coerce the raw rate input: empty means negotiable (`None`), otherwise the
/// value must be a finite number.
fn parse_rate(raw: &str) -> Result<Option<f64>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(()),
    }
}
