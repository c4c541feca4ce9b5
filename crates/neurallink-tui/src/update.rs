//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Timer completions are matched against the id the owning controller has
//! armed; anything else is stale and ignored.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use neurallink_core::core::TimerId;

use crate::common::{TaskCompleted, TaskKind, TaskStarted, TimerOutcome};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{boot, mode, pull, submission, surface};
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    update_at(app, event, Instant::now())
}

/// Reducer with an explicit clock, for deterministic tests.
pub fn update_at(app: &mut AppState, event: UiEvent, now: Instant) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            mode::settle_transition(app, now);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.terminal_size = (width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event, now),
        UiEvent::Mounted => boot::handle_mounted(app, now),
        UiEvent::Unmounted => handle_unmounted(app),
        UiEvent::TaskStarted { kind, started } => handle_task_started(app, kind, started),
        UiEvent::TaskCompleted { kind, completed } => {
            handle_task_completed(app, kind, completed, now);
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event, now: Instant) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key, now),
        Event::Mouse(mouse) => {
            // Nothing to grab until the surface is shown.
            if !app.boot.is_ready() {
                return vec![];
            }
            pull::handle_mouse(app, mouse, now);
            surface::handle_mouse(app, mouse, now)
        }
        Event::Resize(width, height) => {
            app.terminal_size = (width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) -> Vec<UiEffect> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::Esc if app.pull.is_active() => {
            pull::cancel_drag(app);
            vec![]
        }
        KeyCode::Esc | KeyCode::Char('q') => vec![UiEffect::Quit],
        _ if !app.boot.is_ready() => vec![],
        KeyCode::Tab => {
            mode::toggle_mode(app, now);
            vec![]
        }
        KeyCode::Char('t') if ctrl => {
            mode::toggle_mode(app, now);
            vec![]
        }
        KeyCode::Enter => submission::handle_submit(app),
        _ => vec![],
    }
}

/// Tears the surface down: drops any drag, clears busy and cancels both timers.
fn handle_unmounted(app: &mut AppState) -> Vec<UiEffect> {
    pull::cancel_drag(app);
    app.transition = None;

    let mut effects = Vec::new();
    if let Some(id) = app.boot.teardown() {
        effects.push(UiEffect::cancel_timer(
            &mut app.tasks,
            TaskKind::BootTimer,
            id,
        ));
    }
    if let Some(id) = app.submission.teardown() {
        effects.push(UiEffect::cancel_timer(
            &mut app.tasks,
            TaskKind::SubmitTimer,
            id,
        ));
    }
    tracing::debug!(cancelled = effects.len(), "surface unmounted");
    effects
}

fn armed_timer(app: &AppState, kind: TaskKind) -> Option<TimerId> {
    match kind {
        TaskKind::BootTimer => app.boot.pending_timer(),
        TaskKind::SubmitTimer => app.submission.pending_timer(),
    }
}

fn handle_task_started(app: &mut AppState, kind: TaskKind, started: TaskStarted) -> Vec<UiEffect> {
    if armed_timer(app, kind) == Some(started.id) {
        app.tasks.state_mut(kind).on_started(&started);
        return vec![];
    }
    // Disarmed before its task registered: cancel it now.
    tracing::debug!(task = kind.label(), timer = started.id.0, "stale timer cancelled");
    vec![UiEffect::CancelTask {
        kind,
        token: started.cancel,
    }]
}

fn handle_task_completed(
    app: &mut AppState,
    kind: TaskKind,
    completed: TaskCompleted<TimerOutcome>,
    now: Instant,
) {
    app.tasks.state_mut(kind).finish_if_active(completed.id);
    if completed.result == TimerOutcome::Cancelled {
        return;
    }
    match kind {
        TaskKind::BootTimer => boot::handle_elapsed(app, completed.id, now),
        TaskKind::SubmitTimer => submission::handle_elapsed(app, completed.id),
    }
}
