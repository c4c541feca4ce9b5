//! Busy gating for the primary action.
//!
//! This is where a real authentication or registration request would be
//! issued. Here the request is simulated by a fixed delay: `submit` raises
//! the busy flag and arms a timer, and the timer's expiry lowers it again.

use std::time::Duration;

use super::mode::Mode;
use super::timer::{OneShot, TimerId};

#[derive(Debug, Clone)]
pub struct SubmissionController {
    busy: bool,
    delay: Duration,
    timer: OneShot,
    /// Mode whose primary action started the in-flight submission.
    origin: Option<Mode>,
}

impl SubmissionController {
    pub fn new(delay: Duration) -> Self {
        Self {
            busy: false,
            delay,
            timer: OneShot::default(),
            origin: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn origin(&self) -> Option<Mode> {
        self.origin
    }

    /// Starts a submission for `mode`, arming `timer`.
    ///
    /// Returns the timer to schedule, or `None` when already busy (duplicate
    /// submissions are ignored and no second timer is armed).
    pub fn submit(&mut self, mode: Mode, timer: TimerId) -> Option<TimerId> {
        if self.busy {
            tracing::debug!(mode = mode.label(), "submit ignored while busy");
            return None;
        }
        self.busy = true;
        self.origin = Some(mode);
        self.timer.arm(timer);
        tracing::info!(mode = mode.label(), timer = timer.0, "submission started");
        Some(timer)
    }

    /// Handles expiry of `timer`. Returns true if busy was cleared.
    pub fn on_elapsed(&mut self, timer: TimerId) -> bool {
        if !self.timer.fire(timer) {
            return false;
        }
        self.busy = false;
        let origin = self.origin.take();
        tracing::info!(mode = origin.map(Mode::label), "submission settled");
        true
    }

    /// Disarms the pending timer, returning the one that must be cancelled.
    ///
    /// Busy is cleared with it, since nothing is left to lower it.
    pub fn teardown(&mut self) -> Option<TimerId> {
        self.busy = false;
        self.origin = None;
        self.timer.disarm()
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.timer.pending()
    }
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}
