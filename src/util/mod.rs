//! Browser utilities.

pub mod session_store;
