//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! the frame clock, lifecycle notifications from the runtime, and results
//! posted to the inbox by spawned tasks.

use crossterm::event::Event;

use crate::common::{TaskCompleted, TaskKind, TaskStarted, TimerOutcome};

#[derive(Debug)]
pub enum UiEvent {
    /// Animation/render cadence tick.
    Tick,

    /// Current terminal size, emitted before other events each loop.
    Frame { width: u16, height: u16 },

    /// Raw terminal input (keys, mouse, resize).
    Terminal(Event),

    /// The surface was mounted: start the boot sequence.
    Mounted,

    /// The surface is being torn down: invalidate pending timers.
    Unmounted,

    /// A spawned task registered its cancel token.
    TaskStarted { kind: TaskKind, started: TaskStarted },

    /// A spawned timer task finished.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<TimerOutcome>,
    },
}
