//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth`, `jobs`, `job_form`) so
//! individual pages can depend on small focused models. The structs are
//! plain data with pure transition methods; pages wrap them in `RwSignal`s
//! and drive them from async network calls.

pub mod auth;
pub mod job_form;
pub mod jobs;
pub mod session;
