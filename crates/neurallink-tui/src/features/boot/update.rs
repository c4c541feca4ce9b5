use std::time::Instant;

use neurallink_core::core::TimerId;

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::state::AppState;

/// Starts (or restarts) the boot delay.
///
/// A restart cancels the previously armed timer. Once ready, nothing is
/// scheduled and the phase stays `Ready`.
pub fn handle_mounted(app: &mut AppState, now: Instant) -> Vec<UiEffect> {
    let id = app.timer_seq.next_id();
    let start = app.boot.start(id);

    let mut effects = Vec::new();
    if let Some(stale) = start.cancel {
        effects.push(UiEffect::cancel_timer(
            &mut app.tasks,
            TaskKind::BootTimer,
            stale,
        ));
    }
    if let Some(id) = start.arm {
        app.mounted_at = Some(now);
        effects.push(UiEffect::StartTimer {
            kind: TaskKind::BootTimer,
            id,
            delay: app.boot.delay(),
        });
    }
    effects
}

/// Applies expiry of boot timer `id`.
pub fn handle_elapsed(app: &mut AppState, id: TimerId, now: Instant) {
    if app.boot.on_elapsed(id) {
        app.ready_at = Some(now);
    }
}
