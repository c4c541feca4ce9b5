//! Feature slices for the TUI (state/update/render per slice).

pub mod boot;
pub mod mode;
pub mod pull;
pub mod submission;
pub mod surface;
