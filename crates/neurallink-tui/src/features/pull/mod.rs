//! Pull-string feature slice.
//!
//! Turns left-button mouse input on the handle into gesture updates. The
//! gesture itself (clamping, threshold, reset) lives in
//! `neurallink_core::core::gesture`; this slice only maps terminal rows to
//! gesture units and back.
//!
//! ## Module Structure
//!
//! - `state.rs`: drag anchor and raw pointer offset
//! - `layout.rs`: where the string and its handle sit inside the form
//! - `update.rs`: mouse handling
//! - `render.rs`: drawing the string, handle and tooltip

mod layout;
mod render;
mod state;
mod update;

pub use layout::{PullLayout, REST_ROWS, pull_layout};
pub use render::render_pull_string;
pub use state::PullState;
pub use update::{cancel_drag, drawn_offset, handle_mouse};
