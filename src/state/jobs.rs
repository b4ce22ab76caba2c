//! Job listing snapshot state.
//!
//! The listing holds exactly what the last completed fetch returned: each
//! refresh replaces the collection wholesale, in server order, with no merge,
//! sort, or filter. Two refreshes racing each other therefore settle on
//! whichever response completes last, never a mixture.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use crate::net::types::Job;

/// Snapshot of the job collection plus fetch status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobsState {
    pub items: Vec<Job>,
    pub loading: bool,
    pub error: Option<String>,
}

impl JobsState {
    /// Mark a fetch as in flight. The previous snapshot stays visible.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the snapshot with a completed server response.
    pub fn apply_snapshot(&mut self, items: Vec<Job>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch, keeping the previous snapshot.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}
