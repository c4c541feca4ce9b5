use neurallink_core::view::{MainSurface, PrimaryAction};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::common::display_width;

/// Narrowest terminal that still shows the side panel.
pub const MIN_PANEL_WIDTH: u16 = 100;

/// Form lines above the first field: spacer, heading, spacer.
pub const FORM_HEADER_LINES: u16 = 3;

/// Form lines per field: label, input, spacer.
pub const FIELD_LINES: u16 = 3;

/// Split of the screen between the side panel and the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceLayout {
    pub panel: Option<Rect>,
    pub form: Rect,
}

/// Lays out the main surface. The panel takes 40% of the width when shown.
pub fn layout(area: Rect, show_side_panel: bool) -> SurfaceLayout {
    if !show_side_panel || area.width < MIN_PANEL_WIDTH {
        return SurfaceLayout {
            panel: None,
            form: area,
        };
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Min(0)])
        .split(area);
    SurfaceLayout {
        panel: Some(chunks[0]),
        form: chunks[1],
    }
}

/// Content area of the form: inside the border, one column of padding.
pub fn form_inner(form: Rect) -> Rect {
    Rect::new(
        form.x.saturating_add(2),
        form.y.saturating_add(1),
        form.width.saturating_sub(4),
        form.height.saturating_sub(2),
    )
}

/// Text of the primary action button.
pub fn action_text(action: &PrimaryAction) -> String {
    match action.spinner {
        Some(spinner) => format!("[ {spinner} {} ]", action.label),
        None => format!("[ {} ]", action.label),
    }
}

/// Clickable regions of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTargets {
    pub action: Rect,
    pub toggle_link: Rect,
}

/// Locates the primary action and the mode link for `surface` inside `form`.
///
/// Targets cover the drawn text only; rows clipped by the form are empty.
pub fn form_targets(form: Rect, surface: &MainSurface) -> FormTargets {
    let inner = form_inner(form);
    let fields = u16::try_from(surface.fields.len()).unwrap_or(u16::MAX);
    let action_row = inner
        .y
        .saturating_add(FORM_HEADER_LINES)
        .saturating_add(fields.saturating_mul(FIELD_LINES));
    let link_row = action_row.saturating_add(2);

    let line = |row: u16, width: u16| Rect::new(inner.x, row, width, 1).intersection(inner);
    FormTargets {
        action: line(action_row, display_width(&action_text(&surface.action))),
        toggle_link: line(link_row, display_width(surface.toggle_link)),
    }
}
