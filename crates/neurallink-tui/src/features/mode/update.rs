use std::time::Instant;

use crate::state::{ActiveTransition, AppState};

/// Flips the mode and starts the exit/enter transition for the change.
///
/// A toggle during a running transition replaces it; the latest change wins.
pub fn toggle_mode(app: &mut AppState, now: Instant) {
    let change = app.mode.toggle();
    app.transition = Some(ActiveTransition {
        transition: change.into(),
        started_at: now,
    });
}

/// Drops the transition once it has fully played.
pub fn settle_transition(app: &mut AppState, now: Instant) {
    if app
        .transition
        .is_some_and(|active| active.is_finished_at(now))
    {
        app.transition = None;
    }
}
