//! Reusable UI components.

pub mod job_card;
pub mod top_bar;
