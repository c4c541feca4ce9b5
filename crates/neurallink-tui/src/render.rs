//! Top-level rendering.
//!
//! Composes the surface from state via `neurallink_core::view::compose` and
//! hands the result to the feature renderers. Rendering never mutates state.

use std::time::Instant;

use neurallink_core::view::{Surface, compose};
use ratatui::Frame;

use crate::features::surface::RenderOptions;
use crate::features::{boot, pull, surface};
use crate::state::AppState;

/// Renders the whole screen for the current instant.
pub fn render(app: &AppState, frame: &mut Frame) {
    render_at(app, frame, Instant::now());
}

/// Renders the whole screen as of `now`.
pub fn render_at(app: &AppState, frame: &mut Frame, now: Instant) {
    let area = frame.area();
    match compose(&app.view_input(now)) {
        Surface::Boot(screen) => boot::render_boot(frame, &screen, area),
        Surface::Main(main) => {
            let options = RenderOptions {
                show_side_panel: app.config.ui.show_side_panel,
                units_per_row: app.config.units_per_row(),
                drawn_offset: pull::drawn_offset(app),
            };
            surface::render_main(frame, &main, area, options);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyCode;
    use neurallink_core::config::Config;
    use neurallink_core::core::Mode;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::common::TaskKind;
    use crate::events::UiEvent;
    use crate::test_support::{complete, key, ready_app};
    use crate::update::update;

    fn screen_text(app: &AppState, width: u16, height: u16, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render_at(app, frame, now)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_boot_screen_while_booting() {
        let mut app = AppState::new(Config::default());
        update(&mut app, UiEvent::Frame { width: 120, height: 40 });
        update(&mut app, UiEvent::Mounted);

        let text = screen_text(&app, 120, 40, Instant::now());
        assert!(text.contains("> INICIALIZANDO LINK_NEURAL_V4.0"));
        assert!(!text.contains("PORTAL DE ACESSO"));
    }

    #[test]
    fn test_login_surface_when_ready() {
        let app = ready_app(120, 40);

        let text = screen_text(&app, 120, 40, Instant::now());
        assert!(text.contains("PORTAL DE ACESSO"));
        assert!(text.contains("[ INICIAR_SESSÃO ]"));
        assert!(text.contains("INTERFACE NEURAL"));
        assert!(text.contains("ACESSO_RESTRITO"));
        assert!(!text.contains("NOME DA ENTIDADE"));
    }

    #[test]
    fn test_controls_drawn_on_their_click_targets() {
        let app = ready_app(120, 40);
        let text = screen_text(&app, 120, 40, Instant::now());
        let rows: Vec<&str> = text.lines().collect();

        let form = surface::layout(ratatui::layout::Rect::new(0, 0, 120, 40), true).form;
        let Surface::Main(main) = compose(&app.view_input(Instant::now())) else {
            panic!("expected main surface");
        };
        let targets = surface::form_targets(form, &main);

        let action_row: String = rows[usize::from(targets.action.y)]
            .chars()
            .skip(usize::from(targets.action.x))
            .collect();
        assert!(action_row.starts_with("[ INICIAR_SESSÃO ]"));
        let link_row: String = rows[usize::from(targets.toggle_link.y)]
            .chars()
            .skip(usize::from(targets.toggle_link.x))
            .collect();
        assert!(link_row.starts_with("[ Solicitar_Novo_Acesso ]"));
    }

    #[test]
    fn test_narrow_terminal_hides_side_panel() {
        let app = ready_app(80, 40);

        let text = screen_text(&app, 80, 40, Instant::now());
        assert!(text.contains("PORTAL DE ACESSO"));
        assert!(!text.contains("INTERFACE NEURAL"));
    }

    #[test]
    fn test_signup_surface_after_transition() {
        let mut app = ready_app(120, 40);
        crate::features::mode::toggle_mode(&mut app, Instant::now());
        assert_eq!(app.mode.current_mode(), Mode::SignUp);

        let later = Instant::now() + Duration::from_secs(1);
        let text = screen_text(&app, 120, 40, later);
        assert!(text.contains("CRIAÇÃO DE IDENTIDADE"));
        assert!(text.contains("NOME DA ENTIDADE"));
        assert!(text.contains("[ REGISTRAR_IDENTIDADE ]"));
    }

    #[test]
    fn test_exit_stage_still_shows_previous_mode() {
        let mut app = ready_app(120, 40);
        let now = Instant::now();
        crate::features::mode::toggle_mode(&mut app, now);

        let text = screen_text(&app, 120, 40, now + Duration::from_millis(100));
        assert!(text.contains("PORTAL DE ACESSO"));
    }

    #[test]
    fn test_busy_surface_shows_processing() {
        let mut app = ready_app(120, 40);
        let effects = update(&mut app, key(KeyCode::Enter));
        assert_eq!(effects.len(), 1);

        let text = screen_text(&app, 120, 40, Instant::now());
        assert!(text.contains("PROCESSANDO..."));

        let id = app.submission.pending_timer().unwrap();
        complete(&mut app, TaskKind::SubmitTimer, id);
        let text = screen_text(&app, 120, 40, Instant::now());
        assert!(text.contains("[ INICIAR_SESSÃO ]"));
    }
}
