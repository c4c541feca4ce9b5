//! Submission feature slice.

mod update;

pub use update::{handle_elapsed, handle_submit};
