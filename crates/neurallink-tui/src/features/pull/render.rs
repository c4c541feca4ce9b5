use neurallink_core::view::PullString;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::layout::pull_layout;
use crate::common::display_width;
use crate::features::surface::style;

const HANDLE: &str = "(●)";

/// Draws the string hanging from the top of `form`, its handle and, while
/// dragging, the tooltip to the left of the handle.
pub fn render_pull_string(
    frame: &mut Frame,
    pull: &PullString,
    form: Rect,
    drawn_offset: f64,
    units_per_row: f64,
) {
    let layout = pull_layout(form, drawn_offset, units_per_row);
    if layout.handle.is_empty() {
        return;
    }

    let buf = frame.buffer_mut();
    let string_style = Style::default().fg(style::glow(0.3 + 0.4 * pull.intensity));
    for row in layout.top..layout.handle.y {
        let glyph = if row == layout.top { "┬" } else { "│" };
        buf.set_string(layout.column, row, glyph, string_style);
    }

    let mut handle_style = Style::default().fg(style::glow(pull.intensity));
    if pull.dragging {
        handle_style = handle_style.add_modifier(Modifier::BOLD);
    }
    buf.set_stringn(
        layout.handle.x,
        layout.handle.y,
        HANDLE,
        usize::from(layout.handle.width),
        handle_style,
    );

    if let Some(tooltip) = pull.tooltip {
        let width = display_width(tooltip).saturating_add(1);
        if let Some(x) = layout.handle.x.checked_sub(width)
            && x >= form.x
        {
            buf.set_string(x, layout.handle.y, tooltip, style::accent());
        }
    }
}
