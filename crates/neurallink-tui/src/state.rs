//! Application state composition.
//!
//! ```text
//! AppState
//! ├── config: Config               (effective tunables)
//! ├── boot: BootSequencer          (Booting → Ready)
//! ├── mode: ModeController         (Login ⇄ SignUp)
//! ├── transition: Option<ActiveTransition> (exit/enter animation)
//! ├── gesture: GestureTrigger      (pull-string state machine)
//! ├── pull: PullState              (pointer plumbing for the gesture)
//! ├── submission: SubmissionController (busy flag + timer)
//! ├── timer_seq: TimerSeq          (timer id generator)
//! └── tasks: Tasks                 (cancel tokens of spawned timers)
//! ```
//!
//! Controllers own the semantics; this module only wires them together.

use std::time::{Duration, Instant};

use neurallink_core::config::Config;
use neurallink_core::core::{
    BootSequencer, GestureTrigger, ModeController, Phase, SubmissionController, TimerSeq,
};
use neurallink_core::view::{ModeTransition, TransitionFrame, ViewInput};

use crate::common::Tasks;
use crate::features::pull::PullState;

/// A mode transition together with the instant it started.
#[derive(Debug, Clone, Copy)]
pub struct ActiveTransition {
    pub transition: ModeTransition,
    pub started_at: Instant,
}

impl ActiveTransition {
    pub fn frame_at(&self, now: Instant) -> TransitionFrame {
        self.transition
            .frame(now.saturating_duration_since(self.started_at))
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.transition
            .is_finished(now.saturating_duration_since(self.started_at))
    }
}

/// Combined application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub config: Config,
    pub boot: BootSequencer,
    pub mode: ModeController,
    pub transition: Option<ActiveTransition>,
    pub gesture: GestureTrigger,
    pub pull: PullState,
    pub submission: SubmissionController,
    /// Generator for timer task ids.
    pub timer_seq: TimerSeq,
    /// Cancel tokens of in-flight timer tasks.
    pub tasks: Tasks,
    /// Last known terminal size (width, height).
    pub terminal_size: (u16, u16),
    /// Animation frame counter, advanced on every tick.
    pub spinner_frame: usize,
    /// When the boot sequence was started (on mount).
    pub mounted_at: Option<Instant>,
    /// When the surface became ready.
    pub ready_at: Option<Instant>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            boot: BootSequencer::new(config.boot_delay()),
            mode: ModeController::default(),
            transition: None,
            gesture: GestureTrigger::new(config.gesture_bounds()),
            pull: PullState::default(),
            submission: SubmissionController::new(config.submit_delay()),
            timer_seq: TimerSeq::default(),
            tasks: Tasks::default(),
            terminal_size: (0, 0),
            spinner_frame: 0,
            mounted_at: None,
            ready_at: None,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.boot.phase()
    }

    /// Whether any animation needs the fast tick cadence.
    pub fn is_animating(&self) -> bool {
        !self.boot.is_ready()
            || self.transition.is_some()
            || self.submission.is_busy()
            || self.gesture.is_dragging()
            || self.tasks.is_any_running()
    }

    /// Snapshot of the state for view composition at `now`.
    pub fn view_input(&self, now: Instant) -> ViewInput<'_> {
        ViewInput {
            phase: self.boot.phase(),
            mode: self.mode.current_mode(),
            busy: self.submission.is_busy(),
            gesture: &self.gesture,
            transition: self.transition.map(|active| active.frame_at(now)),
            boot_elapsed: since(self.mounted_at, now),
            ready_elapsed: since(self.ready_at, now),
            spinner_frame: self.spinner_frame,
        }
    }
}

fn since(start: Option<Instant>, now: Instant) -> Duration {
    start.map_or(Duration::ZERO, |start| now.saturating_duration_since(start))
}

#[cfg(test)]
mod tests {
    use neurallink_core::core::Mode;
    use neurallink_core::view::TransitionStage;

    use super::*;

    #[test]
    fn test_new_state_is_booting_login_idle() {
        let state = AppState::new(Config::default());

        assert_eq!(state.phase(), Phase::Booting);
        assert_eq!(state.mode.current_mode(), Mode::Login);
        assert!(!state.submission.is_busy());
        assert!(!state.gesture.is_dragging());
        assert!(state.is_animating());
    }

    #[test]
    fn test_state_uses_configured_delays() {
        let config = Config {
            boot_delay_ms: 10,
            submit_delay_ms: 20,
            ..Config::default()
        };
        let state = AppState::new(config);

        assert_eq!(state.boot.delay(), Duration::from_millis(10));
        assert_eq!(state.submission.delay(), Duration::from_millis(20));
    }

    #[test]
    fn test_view_input_reports_transition_frame() {
        let mut state = AppState::new(Config::default());
        let change = state.mode.toggle();
        let started_at = Instant::now();
        state.transition = Some(ActiveTransition {
            transition: change.into(),
            started_at,
        });

        let input = state.view_input(started_at + Duration::from_millis(100));
        let frame = input.transition.unwrap();
        assert_eq!(frame.stage, TransitionStage::Exiting);
        assert_eq!(frame.shown, Mode::Login);
        assert_eq!(input.mode, Mode::SignUp);
    }

    #[test]
    fn test_view_input_elapsed_zero_before_mount() {
        let state = AppState::new(Config::default());
        let input = state.view_input(Instant::now());

        assert_eq!(input.boot_elapsed, Duration::ZERO);
        assert_eq!(input.ready_elapsed, Duration::ZERO);
    }
}
