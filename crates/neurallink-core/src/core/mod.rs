//! Interaction state machines.
//!
//! Every controller here is plain owned state with synchronous methods.
//! Nothing in this module spawns tasks or reads the clock: timers are
//! represented by [`timer::TimerId`] handles that the caller arms, fires and
//! cancels. This keeps every transition directly unit-testable.

pub mod boot;
pub mod gesture;
pub mod mode;
pub mod submission;
pub mod timer;

pub use boot::{BootSequencer, BootStart, Phase};
pub use gesture::{Activate, GestureBounds, GestureState, GestureTrigger};
pub use mode::{Mode, ModeChanged, ModeController};
pub use submission::SubmissionController;
pub use timer::{OneShot, TimerId, TimerSeq};
