use neurallink_core::core::TimerId;

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::state::AppState;

/// Submits the current mode's form. No-op while a submission is in flight.
pub fn handle_submit(app: &mut AppState) -> Vec<UiEffect> {
    let id = app.timer_seq.next_id();
    match app.submission.submit(app.mode.current_mode(), id) {
        Some(id) => vec![UiEffect::StartTimer {
            kind: TaskKind::SubmitTimer,
            id,
            delay: app.submission.delay(),
        }],
        None => vec![],
    }
}

/// Applies expiry of submit timer `id`.
pub fn handle_elapsed(app: &mut AppState, id: TimerId) {
    app.submission.on_elapsed(id);
}
