use neurallink_core::view::BootScreen;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::{display_width, meter};
use crate::features::surface::style;

/// Widest the boot progress bar gets.
const BAR_MAX_WIDTH: u16 = 40;

/// Renders the boot log lines and progress bar, centered in `area`.
pub fn render_boot(frame: &mut Frame, screen: &BootScreen, area: Rect) {
    let bar_width = area.width.min(BAR_MAX_WIDTH);
    let (filled, empty) = meter(bar_width, screen.progress);

    let mut lines: Vec<Line> = screen
        .lines
        .iter()
        .map(|(text, intensity)| {
            Line::from(Span::styled(
                *text,
                Style::default().fg(style::glow(*intensity)),
            ))
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(filled, style::accent()),
        Span::styled(empty, style::muted()),
    ]));

    let content_width = screen
        .lines
        .iter()
        .map(|(text, _)| display_width(text))
        .max()
        .unwrap_or(0)
        .max(bar_width);
    let content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let centered = Rect::new(
        area.x + area.width.saturating_sub(content_width) / 2,
        area.y + area.height.saturating_sub(content_height) / 2,
        content_width,
        content_height,
    )
    .intersection(area);

    frame.render_widget(Paragraph::new(lines), centered);
}
