//! Main surface slice: side panel and form, drawn from a composed
//! `MainSurface`, plus clicks on the form's controls.

mod layout;
mod render;
pub mod style;
mod update;

pub use layout::{FormTargets, MIN_PANEL_WIDTH, SurfaceLayout, form_targets, layout};
pub use render::{RenderOptions, render_main};
pub use update::handle_mouse;
