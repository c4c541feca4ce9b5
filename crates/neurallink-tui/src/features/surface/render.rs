//! Main surface view.
//!
//! Pure rendering of a composed `MainSurface`. No state is read here beyond
//! what the caller passes in.

use neurallink_core::view::{MainSurface, SidePanel};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::layout::{action_text, form_inner, layout};
use super::style;
use crate::common::{meter, truncate_with_ellipsis};
use crate::features::pull;

/// Widest the integrity meter gets.
const METER_MAX_WIDTH: u16 = 30;

/// Render settings that come from config and pointer state rather than the
/// composed surface.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_side_panel: bool,
    pub units_per_row: f64,
    /// Handle offset to draw, in gesture units.
    pub drawn_offset: f64,
}

/// Renders the side panel (when it fits), the form and the pull string.
pub fn render_main(frame: &mut Frame, surface: &MainSurface, area: Rect, options: RenderOptions) {
    let split = layout(area, options.show_side_panel);
    if let Some(panel_area) = split.panel {
        render_panel(frame, &surface.panel, panel_area);
    }
    render_form(frame, surface, split.form);
    pull::render_pull_string(
        frame,
        &surface.pull,
        split.form,
        options.drawn_offset,
        options.units_per_row,
    );
}

fn render_panel(frame: &mut Frame, panel: &SidePanel, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style::border());
    let inner = padded(block.inner(area));
    frame.render_widget(block, area);
    if inner.is_empty() {
        return;
    }

    let (filled, empty) = meter(inner.width.min(METER_MAX_WIDTH), panel.integrity_fill);
    let lines = vec![
        Line::from(Span::styled(
            panel.header,
            style::accent().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(panel.node_id, style::muted())),
        Line::default(),
        Line::from(Span::styled(panel.title, style::heading())),
        Line::default(),
        Line::from(panel.description),
        Line::default(),
        Line::from(vec![
            Span::styled(panel.integrity_label, style::muted()),
            Span::raw("  "),
            Span::styled(panel.integrity_value, style::accent()),
        ]),
        Line::from(vec![
            Span::styled(filled, style::accent()),
            Span::styled(empty, style::muted()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

    let (layer, copyright) = panel.footer;
    let footer = truncate_with_ellipsis(
        &format!("{layer} · {copyright}"),
        usize::from(inner.width),
    );
    let footer_area = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(footer, style::muted())),
        footer_area,
    );
}

fn render_form(frame: &mut Frame, surface: &MainSurface, area: Rect) {
    let width = usize::from(area.width.saturating_sub(4));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style::border())
        .title(Span::styled(
            format!(" {} ", truncate_with_ellipsis(surface.protocol, width)),
            style::muted(),
        ));
    let inner = form_inner(area);
    frame.render_widget(block, area);
    if inner.is_empty() {
        return;
    }

    let dim = |s: Style| {
        if surface.transition.is_some() {
            style::in_transition(s)
        } else {
            s
        }
    };
    let width = usize::from(inner.width);

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            truncate_with_ellipsis(surface.heading, width),
            dim(style::heading()),
        )),
        Line::default(),
    ];

    // Row offsets here must match `form_targets`.
    for field in &surface.fields {
        lines.push(Line::from(Span::styled(field.label, dim(style::muted()))));
        lines.push(Line::from(vec![
            Span::styled("> ", dim(style::accent())),
            Span::styled(
                field.placeholder,
                dim(Style::default().add_modifier(Modifier::DIM)),
            ),
        ]));
        lines.push(Line::default());
    }

    let action_style = if surface.action.busy {
        style::muted()
    } else {
        style::accent().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    };
    lines.push(Line::from(Span::styled(
        action_text(&surface.action),
        dim(action_style),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        surface.toggle_link,
        dim(style::accent()),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        surface.links_caption,
        style::muted(),
    )));
    lines.push(Line::from(
        surface
            .links
            .iter()
            .map(|link| Span::styled(format!("{link}  "), style::accent()))
            .collect::<Vec<_>>(),
    ));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        truncate_with_ellipsis(surface.pull_hint, width),
        style::muted(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn padded(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y,
        area.width.saturating_sub(2),
        area.height,
    )
}
