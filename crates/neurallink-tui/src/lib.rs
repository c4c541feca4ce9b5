//! Full-screen TUI for NeuralLink.
//!
//! Elm-style split: `state` holds the model, `update` is the reducer,
//! `render` draws, and `runtime` owns the terminal and executes effects.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use neurallink_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive login surface until the user quits.
pub fn run_interactive(config: Config) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "NeuralLink requires a terminal.\n\
             Use `neurallink config show` to inspect the effective configuration."
        );
    }

    tracing::info!(
        boot_delay_ms = config.boot_delay_ms,
        submit_delay_ms = config.submit_delay_ms,
        "starting interactive surface"
    );
    let mut runtime = TuiRuntime::new(config)?;
    runtime.run()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use neurallink_core::config::Config;
    use neurallink_core::core::TimerId;
    use tokio_util::sync::CancellationToken;

    use crate::common::{TaskCompleted, TaskKind, TaskStarted, TimerOutcome};
    use crate::effects::UiEffect;
    use crate::events::UiEvent;
    use crate::state::AppState;
    use crate::update::update;

    pub fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    pub fn ctrl(c: char) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    /// Registers a cancel token for timer `id`, as the runtime would.
    pub fn register(app: &mut AppState, kind: TaskKind, id: TimerId) -> CancellationToken {
        let token = CancellationToken::new();
        update(
            app,
            UiEvent::TaskStarted {
                kind,
                started: TaskStarted {
                    id,
                    cancel: Some(token.clone()),
                },
            },
        );
        token
    }

    /// Delivers an elapsed completion for timer `id`.
    pub fn complete(app: &mut AppState, kind: TaskKind, id: TimerId) {
        update(
            app,
            UiEvent::TaskCompleted {
                kind,
                completed: TaskCompleted {
                    id,
                    result: TimerOutcome::Elapsed,
                },
            },
        );
    }

    /// An app that has been mounted and finished booting.
    pub fn ready_app(width: u16, height: u16) -> AppState {
        let mut app = AppState::new(Config::default());
        update(&mut app, UiEvent::Frame { width, height });
        let effects = update(&mut app, UiEvent::Mounted);
        let Some(UiEffect::StartTimer { id, .. }) = effects.into_iter().next() else {
            panic!("boot timer not started");
        };
        complete(&mut app, TaskKind::BootTimer, id);
        assert!(app.boot.is_ready());
        app
    }
}
