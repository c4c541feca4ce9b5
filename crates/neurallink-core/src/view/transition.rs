//! Mode-keyed exit/enter transition.
//!
//! Every [`ModeChanged`] starts a new transition: the previous mode's content
//! plays its exit, then the new mode's content plays its enter. The content
//! shown during the exit is the *old* mode; the swap happens at the midpoint.

use std::time::Duration;

use crate::core::{Mode, ModeChanged};

pub const EXIT_DURATION: Duration = Duration::from_millis(400);
pub const ENTER_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStage {
    Exiting,
    Entering,
    Settled,
}

/// Snapshot of a transition at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub stage: TransitionStage,
    /// Mode whose content is on screen.
    pub shown: Mode,
    /// Progress through the current stage, `0.0..=1.0`.
    pub progress: f64,
    /// Key of the change that started this transition.
    pub seq: u64,
}

impl TransitionFrame {
    pub fn is_active(&self) -> bool {
        self.stage != TransitionStage::Settled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: Mode,
    pub to: Mode,
    pub seq: u64,
}

impl From<ModeChanged> for ModeTransition {
    fn from(change: ModeChanged) -> Self {
        Self {
            from: change.from,
            to: change.to,
            seq: change.seq,
        }
    }
}

impl ModeTransition {
    pub fn total_duration() -> Duration {
        EXIT_DURATION + ENTER_DURATION
    }

    pub fn frame(&self, elapsed: Duration) -> TransitionFrame {
        if elapsed < EXIT_DURATION {
            TransitionFrame {
                stage: TransitionStage::Exiting,
                shown: self.from,
                progress: ratio(elapsed, EXIT_DURATION),
                seq: self.seq,
            }
        } else if elapsed < Self::total_duration() {
            TransitionFrame {
                stage: TransitionStage::Entering,
                shown: self.to,
                progress: ratio(elapsed - EXIT_DURATION, ENTER_DURATION),
                seq: self.seq,
            }
        } else {
            TransitionFrame {
                stage: TransitionStage::Settled,
                shown: self.to,
                progress: 1.0,
                seq: self.seq,
            }
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= Self::total_duration()
    }
}

fn ratio(part: Duration, whole: Duration) -> f64 {
    if whole.is_zero() {
        return 1.0;
    }
    (part.as_secs_f64() / whole.as_secs_f64()).clamp(0.0, 1.0)
}
