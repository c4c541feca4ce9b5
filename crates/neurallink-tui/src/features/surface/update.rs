use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use neurallink_core::view::{Surface, compose};
use ratatui::layout::{Position, Rect};

use super::layout::{form_targets, layout};
use crate::effects::UiEffect;
use crate::features::{mode, submission};
use crate::state::AppState;

/// Handles left clicks on the form's primary action and mode link.
///
/// Targets are located on the surface as drawn at `now`, so a click during a
/// transition hits what is on screen. Ignored while the pull string is held.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent, now: Instant) -> Vec<UiEffect> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || app.pull.is_active() {
        return vec![];
    }
    let Surface::Main(main) = compose(&app.view_input(now)) else {
        return vec![];
    };

    let (width, height) = app.terminal_size;
    let form = layout(Rect::new(0, 0, width, height), app.config.ui.show_side_panel).form;
    let targets = form_targets(form, &main);
    let at = Position::new(mouse.column, mouse.row);

    if targets.action.contains(at) {
        submission::handle_submit(app)
    } else if targets.toggle_link.contains(at) {
        mode::toggle_mode(app, now);
        vec![]
    } else {
        vec![]
    }
}
