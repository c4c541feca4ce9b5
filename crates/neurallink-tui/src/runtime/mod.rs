//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Spawned timer tasks send `UiEvent`s directly to `inbox_tx`
//! - Runtime drains `inbox_rx` each loop iteration
//!
//! ## Lifecycle
//!
//! `run` dispatches `Mounted` before the first frame and `Unmounted` after the
//! loop ends. `Drop` cancels any token still registered, including those whose
//! `TaskStarted` never left the inbox, and restores the terminal.

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use neurallink_core::config::Config;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted, Tasks, TimerOutcome};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Frame cadence while something is animating (60fps = ~16ms per frame).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle. Still short enough for the integrity meter.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
    /// Last time a terminal event was received (for fast tick during interaction).
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime, switching the terminal into the alternate
    /// screen.
    pub fn new(config: Config) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state: AppState::new(config),
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        let size = self.terminal.size()?;
        self.dispatch_event(UiEvent::Frame {
            width: size.width,
            height: size.height,
        });
        self.dispatch_event(UiEvent::Mounted);

        let result = self.event_loop();

        self.dispatch_event(UiEvent::Unmounted);
        let _ = terminal::disable_input_features();

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            // Frame first so layout-dependent handlers see the current size.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Only Tick triggers render - this caps frame rate at tick cadence
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if self.state.is_animating() || recent_terminal_activity {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        self.collect_inbox_events(&mut events);

        // Block until the next tick is due unless there is already work queued.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn collect_inbox_events(&mut self, events: &mut Vec<UiEvent>) {
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        if !effects.is_empty() {
            self.execute_effects(effects);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::StartTimer { kind, id, delay } => {
                tracing::debug!(
                    task = kind.label(),
                    timer = id.0,
                    delay_ms = delay.as_millis() as u64,
                    "timer spawned"
                );
                spawn_task(&self.inbox_tx, kind, id, move |cancel| {
                    handlers::one_shot(delay, cancel)
                });
            }
            UiEffect::CancelTask { token, .. } => {
                if let Some(cancel) = token {
                    cancel.cancel();
                }
            }
        }
    }
}

/// Spawns an async task with a uniform TaskStarted/TaskCompleted lifecycle.
///
/// `TaskStarted` is queued before the task runs, so the reducer always sees
/// it ahead of the matching `TaskCompleted`.
fn spawn_task<F, Fut>(tx: &UiEventSender, kind: TaskKind, id: TaskId, f: F)
where
    F: FnOnce(CancellationToken) -> Fut + Send + 'static,
    Fut: Future<Output = TimerOutcome> + Send + 'static,
{
    let tx = tx.clone();
    let cancel = CancellationToken::new();
    let started = TaskStarted {
        id,
        cancel: Some(cancel.clone()),
    };
    let _ = tx.send(UiEvent::TaskStarted { kind, started });
    tokio::spawn(async move {
        let result = f(cancel).await;
        let completed = TaskCompleted { id, result };
        let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
    });
}

/// Cancels every timer task still alive: registered tokens plus the ones
/// whose `TaskStarted` is still queued in the inbox.
fn cancel_outstanding(tasks: &mut Tasks, inbox: &mut UiEventReceiver) -> usize {
    let mut cancelled = 0;
    for token in tasks.drain_cancels() {
        token.cancel();
        cancelled += 1;
    }
    while let Ok(event) = inbox.try_recv() {
        if let UiEvent::TaskStarted {
            started: TaskStarted {
                cancel: Some(token),
                ..
            },
            ..
        } = event
        {
            token.cancel();
            cancelled += 1;
        }
    }
    cancelled
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let cancelled = cancel_outstanding(&mut self.state.tasks, &mut self.inbox_rx);
        tracing::debug!(cancelled, "runtime dropped");
        let _ = terminal::restore_terminal();
    }
}

#[cfg(test)]
mod tests {
    use neurallink_core::core::{Phase, TimerId};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_spawn_task_reports_started_then_completed() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_task(&tx, TaskKind::SubmitTimer, TimerId(7), |cancel| {
            handlers::one_shot(Duration::from_millis(2000), cancel)
        });

        match rx.recv().await {
            Some(UiEvent::TaskStarted { kind, started }) => {
                assert_eq!(kind, TaskKind::SubmitTimer);
                assert_eq!(started.id, TimerId(7));
                assert!(started.cancel.is_some());
            }
            other => panic!("expected TaskStarted, got {other:?}"),
        }
        match rx.recv().await {
            Some(UiEvent::TaskCompleted { kind, completed }) => {
                assert_eq!(kind, TaskKind::SubmitTimer);
                assert_eq!(completed.id, TimerId(7));
                assert_eq!(completed.result, TimerOutcome::Elapsed);
            }
            other => panic!("expected TaskCompleted, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_task_reports_cancelled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_task(&tx, TaskKind::BootTimer, TimerId(1), |cancel| {
            handlers::one_shot(Duration::from_millis(2000), cancel)
        });

        let Some(UiEvent::TaskStarted { started, .. }) = rx.recv().await else {
            panic!("expected TaskStarted");
        };
        started.cancel.unwrap().cancel();

        let Some(UiEvent::TaskCompleted { completed, .. }) = rx.recv().await else {
            panic!("expected TaskCompleted");
        };
        assert_eq!(completed.result, TimerOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_outstanding_reaches_queued_task_started() {
        let mut app = AppState::new(Config::default());
        let (tx, mut rx) = mpsc::unbounded_channel();

        // Registered boot timer.
        let boot = CancellationToken::new();
        app.tasks.state_mut(TaskKind::BootTimer).on_started(&TaskStarted {
            id: TimerId(1),
            cancel: Some(boot.clone()),
        });
        // Submit timer whose TaskStarted is still queued.
        spawn_task(&tx, TaskKind::SubmitTimer, TimerId(2), |cancel| {
            handlers::one_shot(Duration::from_millis(2000), cancel)
        });

        assert_eq!(cancel_outstanding(&mut app.tasks, &mut rx), 2);
        assert!(boot.is_cancelled());
        assert!(!app.tasks.is_any_running());

        let Some(UiEvent::TaskCompleted { kind, completed }) = rx.recv().await else {
            panic!("expected TaskCompleted");
        };
        assert_eq!(kind, TaskKind::SubmitTimer);
        assert_eq!(completed.result, TimerOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_boot_turns_ready_at_two_seconds() {
        let mut app = AppState::new(Config::default());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = tokio::time::Instant::now();

        for effect in update::update(&mut app, UiEvent::Mounted) {
            if let UiEffect::StartTimer { kind, id, delay } = effect {
                spawn_task(&tx, kind, id, move |cancel| handlers::one_shot(delay, cancel));
            }
        }

        tokio::time::sleep(Duration::from_millis(1999)).await;
        while let Ok(event) = rx.try_recv() {
            update::update(&mut app, event);
        }
        assert_eq!(app.phase(), Phase::Booting);

        while !app.boot.is_ready() {
            let event = rx.recv().await.expect("inbox open");
            update::update(&mut app, event);
        }
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(2000));
        assert!(elapsed < Duration::from_millis(2010));
    }

    #[tokio::test(start_paused = true)]
    async fn test_inbox_round_trip_through_reducer() {
        let mut app = AppState::new(Config::default());
        let (tx, mut rx) = mpsc::unbounded_channel();

        for effect in update::update(&mut app, UiEvent::Mounted) {
            if let UiEffect::StartTimer { kind, id, delay } = effect {
                spawn_task(&tx, kind, id, move |cancel| handlers::one_shot(delay, cancel));
            }
        }
        assert!(!app.boot.is_ready());

        while !app.boot.is_ready() {
            let event = rx.recv().await.expect("inbox open");
            update::update(&mut app, event);
        }
        assert!(!app.tasks.is_any_running());
    }
}
