//! Route-level pages.

pub mod applications;
pub mod dashboard;
pub mod login;
pub mod post_job;
pub mod register;
