//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent task spawning and cancellation only (no direct UI mutations).
//!
//! ## Cancellation Effects
//!
//! Cancellation is initiated from the reducer via `UiEffect::CancelTask`.
//! The runtime executes these by calling `token.cancel()` on the provided token.
//! A timer whose token was not registered yet is still harmless: its
//! completion carries an id the owning controller no longer accepts.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind, Tasks};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Schedule a one-shot timer that posts its outcome to the inbox.
    StartTimer {
        kind: TaskKind,
        id: TaskId,
        delay: Duration,
    },

    /// Cancel an in-progress task.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}

impl UiEffect {
    /// Cancels timer `id` of `kind`, taking its token if it is registered.
    pub fn cancel_timer(tasks: &mut Tasks, kind: TaskKind, id: TaskId) -> Self {
        tracing::debug!(task = kind.label(), timer = id.0, "timer cancelled");
        UiEffect::CancelTask {
            kind,
            token: tasks.state_mut(kind).take_cancel_for(id),
        }
    }
}
