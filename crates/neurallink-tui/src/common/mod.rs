//! Shared TUI helpers (task lifecycle, text utilities).

pub mod task;
pub mod text;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskStarted, TaskState, Tasks, TimerOutcome};
pub use text::{display_width, meter, truncate_with_ellipsis};
