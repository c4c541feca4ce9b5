//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions; the runtime spawns them and posts their
//! results to the inbox. They never touch state.

pub mod timer;

pub use timer::one_shot;
