//! Boot feature slice.
//!
//! Starts the boot timer when the surface is mounted and flips the phase to
//! `Ready` when that timer fires. While booting, the boot screen is the only
//! thing drawn and pointer input is ignored.

mod render;
mod update;

pub use render::render_boot;
pub use update::{handle_elapsed, handle_mounted};
