use super::*;
use crate::net::types::Currency;

fn job(id: &str, title: &str) -> Job {
    Job {
        id: id.to_owned(),
        title: title.to_owned(),
        description: "desc".to_owned(),
        location: String::new(),
        hourly_rate: None,
        currency: Currency::Eur,
        category: "general".to_owned(),
        status: "open".to_owned(),
        created_by: None,
    }
}

#[test]
fn default_state_is_empty_and_idle() {
    let state = JobsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_snapshot_replaces_wholesale() {
    let mut state = JobsState::default();
    state.apply_snapshot(vec![job("j-1", "Clean apartment"), job("j-2", "Move boxes")]);
    state.apply_snapshot(vec![job("j-3", "Walk dog")]);

    // The second response fully replaces the first; nothing is merged.
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "j-3");
}

#[test]
fn racing_refreshes_settle_on_the_last_completion() {
    // Two in-flight refreshes; completion order decides the final snapshot.
    let mut state = JobsState::default();
    state.begin_fetch();
    state.begin_fetch();

    let response_a = vec![job("j-1", "Clean apartment")];
    let response_b = vec![job("j-2", "Move boxes"), job("j-3", "Walk dog")];

    state.apply_snapshot(response_a);
    state.apply_snapshot(response_b.clone());

    assert_eq!(state.items, response_b);
    assert!(!state.loading);
}

#[test]
fn failure_keeps_the_previous_snapshot() {
    let mut state = JobsState::default();
    state.apply_snapshot(vec![job("j-1", "Clean apartment")]);
    state.begin_fetch();
    state.fail("Could not load jobs".to_owned());

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Could not load jobs"));
}

#[test]
fn begin_fetch_clears_a_stale_error() {
    let mut state = JobsState::default();
    state.fail("Could not load jobs".to_owned());
    state.begin_fetch();
    assert!(state.loading);
    assert!(state.error.is_none());
}
