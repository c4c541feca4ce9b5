//! Boot sequence: `Booting` until a one-shot delay expires, then `Ready`.

use std::time::Duration;

use super::timer::{OneShot, TimerId};

/// Top-level lifecycle phase of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Booting,
    Ready,
}

/// Timers to schedule and cancel after [`BootSequencer::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootStart {
    /// Timer to schedule for the boot delay (`None` when already ready).
    pub arm: Option<TimerId>,
    /// Previously pending timer that must be cancelled.
    pub cancel: Option<TimerId>,
}

/// One-shot boot timer owner.
#[derive(Debug, Clone)]
pub struct BootSequencer {
    phase: Phase,
    delay: Duration,
    timer: OneShot,
}

impl BootSequencer {
    pub fn new(delay: Duration) -> Self {
        Self {
            phase: Phase::Booting,
            delay,
            timer: OneShot::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// Starts (or restarts) the boot delay using `timer`.
    ///
    /// Any previously armed timer is invalidated and returned for
    /// cancellation. Once `Ready`, the phase never reverts and no timer is
    /// armed.
    pub fn start(&mut self, timer: TimerId) -> BootStart {
        let cancel = self.timer.disarm();
        if self.phase == Phase::Ready {
            return BootStart { arm: None, cancel };
        }
        self.timer.arm(timer);
        tracing::debug!(timer = timer.0, delay_ms = self.delay.as_millis() as u64, "boot armed");
        BootStart {
            arm: Some(timer),
            cancel,
        }
    }

    /// Handles expiry of `timer`. Returns true if the phase became `Ready`.
    pub fn on_elapsed(&mut self, timer: TimerId) -> bool {
        if !self.timer.fire(timer) || self.phase == Phase::Ready {
            return false;
        }
        self.phase = Phase::Ready;
        tracing::info!("boot sequence complete");
        true
    }

    /// Disarms the boot timer, returning the one that must be cancelled.
    pub fn teardown(&mut self) -> Option<TimerId> {
        self.timer.disarm()
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.timer.pending()
    }
}

impl Default for BootSequencer {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}
