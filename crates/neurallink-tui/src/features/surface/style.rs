//! Palette for the neural theme.

use ratatui::style::{Color, Modifier, Style};

/// Accent color scaled by `intensity` (`0.0..=1.0`).
pub fn glow(intensity: f64) -> Color {
    let t = intensity.clamp(0.0, 1.0);
    let channel = |max: f64| (max * t).round() as u8;
    Color::Rgb(channel(40.0), channel(255.0), channel(210.0))
}

pub fn accent() -> Style {
    Style::default().fg(glow(1.0))
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn heading() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn border() -> Style {
    Style::default().fg(glow(0.5))
}

/// Style applied to form content while a mode transition is in flight.
pub fn in_transition(style: Style) -> Style {
    style.add_modifier(Modifier::DIM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_scales_and_clamps() {
        assert_eq!(glow(1.0), Color::Rgb(40, 255, 210));
        assert_eq!(glow(0.0), Color::Rgb(0, 0, 0));
        assert_eq!(glow(5.0), glow(1.0));
    }
}
