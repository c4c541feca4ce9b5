use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::layout::{PullLayout, pull_layout};
use crate::features::{mode, surface};
use crate::state::AppState;

/// Handles mouse input for the pull string.
///
/// - Left press on the handle starts a drag at offset 0
/// - Dragging maps rows below the press point to gesture units
/// - Release ends the gesture; past the threshold it toggles the mode
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent, now: Instant) {
    let units = app.config.units_per_row();
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.pull.is_active() {
                return;
            }
            if rest_layout(app).hit(mouse.column, mouse.row) {
                app.pull.begin(mouse.row);
                app.gesture.on_drag_update(0.0);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(raw) = app.pull.track(mouse.row, units) {
                app.gesture.on_drag_update(raw);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(raw) = app.pull.finish(mouse.row, units)
                && app.gesture.on_drag_end(raw).is_some()
            {
                mode::toggle_mode(app, now);
            }
        }
        _ => {}
    }
}

/// Drops any in-progress drag without activating.
pub fn cancel_drag(app: &mut AppState) {
    app.pull.reset();
    app.gesture.cancel();
}

/// Offset to draw the handle at: the raw pointer offset with elastic
/// overshoot past the bounds, or 0 when idle.
pub fn drawn_offset(app: &AppState) -> f64 {
    if app.gesture.is_dragging() {
        app.gesture.bounds().elastic(app.pull.raw_offset())
    } else {
        0.0
    }
}

fn rest_layout(app: &AppState) -> PullLayout {
    let (width, height) = app.terminal_size;
    let area = Rect::new(0, 0, width, height);
    let form = surface::layout(area, app.config.ui.show_side_panel).form;
    pull_layout(form, 0.0, app.config.units_per_row())
}
