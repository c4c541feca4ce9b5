//! View composition.
//!
//! [`compose`] maps a snapshot of interaction state to a [`Surface`]: a plain
//! description of what is on screen. It owns no state, performs no I/O and
//! reads no clock (elapsed times are inputs), so it is safe to call at any
//! time and trivially testable. Drawing the surface is the renderer's job.

pub mod copy;
pub mod transition;

use std::f64::consts::PI;
use std::time::Duration;

use crate::core::{GestureTrigger, Mode, Phase};
pub use transition::{ModeTransition, TransitionFrame, TransitionStage};

/// Time for the boot progress bar to fill.
pub const BOOT_PROGRESS_DURATION: Duration = Duration::from_millis(1500);

/// Period of the integrity meter oscillation.
const INTEGRITY_PERIOD: Duration = Duration::from_secs(5);

/// Integrity meter keyframes (fill fraction), evenly spaced over the period.
const INTEGRITY_KEYFRAMES: [f64; 3] = [0.8, 1.0, 0.9];

/// Busy spinner frames.
const SPINNER_FRAMES: &[char] = &['◐', '◓', '◑', '◒'];

/// Snapshot of everything the surface depends on.
#[derive(Debug, Clone, Copy)]
pub struct ViewInput<'a> {
    pub phase: Phase,
    pub mode: Mode,
    pub busy: bool,
    pub gesture: &'a GestureTrigger,
    /// Active mode transition, if any, at the current instant.
    pub transition: Option<TransitionFrame>,
    /// Time since the boot sequence started.
    pub boot_elapsed: Duration,
    /// Time since the surface became ready (drives decorations).
    pub ready_elapsed: Duration,
    /// Animation frame counter.
    pub spinner_frame: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Boot(BootScreen),
    Main(MainSurface),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BootScreen {
    /// Log lines with their intensity (`0.0..=1.0`).
    pub lines: Vec<(&'static str, f64)>,
    /// Progress bar fill, `0.0..=1.0`.
    pub progress: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub kind: FieldKind,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub masked: bool,
}

impl Field {
    fn of(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Name => Self {
                kind,
                label: "NOME DA ENTIDADE",
                placeholder: "IDENTIFICADOR_001",
                masked: false,
            },
            FieldKind::Email => Self {
                kind,
                label: "ENDEREÇO NEURAL",
                placeholder: "usuario@neural.net",
                masked: false,
            },
            FieldKind::Password => Self {
                kind,
                label: "CHAVE DE ACESSO",
                placeholder: "••••••••",
                masked: true,
            },
        }
    }
}

/// Fields displayed for `mode`, top to bottom.
pub fn field_set(mode: Mode) -> Vec<Field> {
    let kinds: &[FieldKind] = match mode {
        Mode::Login => &[FieldKind::Email, FieldKind::Password],
        Mode::SignUp => &[FieldKind::Name, FieldKind::Email, FieldKind::Password],
    };
    kinds.iter().copied().map(Field::of).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryAction {
    pub label: &'static str,
    pub busy: bool,
    /// Busy spinner glyph (only while busy).
    pub spinner: Option<char>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidePanel {
    pub header: &'static str,
    pub node_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub integrity_label: &'static str,
    pub integrity_value: &'static str,
    pub integrity_fill: f64,
    pub footer: (&'static str, &'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PullString {
    /// Tracked drag offset in gesture units.
    pub offset: f64,
    pub max_travel: f64,
    pub dragging: bool,
    /// String length as a percentage of rest length (100..=250).
    pub length_percent: f64,
    /// Handle intensity (0.4..=1.0).
    pub intensity: f64,
    pub tooltip: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MainSurface {
    /// Mode whose content is displayed (lags the current mode during an exit).
    pub shown: Mode,
    pub transition: Option<TransitionFrame>,
    pub panel: SidePanel,
    pub protocol: &'static str,
    pub heading: &'static str,
    pub fields: Vec<Field>,
    pub action: PrimaryAction,
    pub links_caption: &'static str,
    pub links: [&'static str; 2],
    pub pull_hint: &'static str,
    pub toggle_link: &'static str,
    pub pull: PullString,
}

/// Composes the surface for `input`.
pub fn compose(input: &ViewInput<'_>) -> Surface {
    match input.phase {
        Phase::Booting => Surface::Boot(compose_boot(input.boot_elapsed)),
        Phase::Ready => Surface::Main(compose_main(input)),
    }
}

fn compose_boot(elapsed: Duration) -> BootScreen {
    let intensities = [1.0, 0.6, 0.4];
    BootScreen {
        lines: copy::BOOT_LINES.into_iter().zip(intensities).collect(),
        progress: ease_in_out(ratio(elapsed, BOOT_PROGRESS_DURATION)),
    }
}

fn compose_main(input: &ViewInput<'_>) -> MainSurface {
    let transition = input.transition.filter(TransitionFrame::is_active);
    let shown = transition.map_or(input.mode, |frame| frame.shown);

    let action = if input.busy {
        PrimaryAction {
            label: copy::BUSY_LABEL,
            busy: true,
            spinner: Some(SPINNER_FRAMES[input.spinner_frame % SPINNER_FRAMES.len()]),
        }
    } else {
        PrimaryAction {
            label: copy::action(shown),
            busy: false,
            spinner: None,
        }
    };

    let gesture = input.gesture;
    let pull = PullString {
        offset: gesture.offset(),
        max_travel: gesture.bounds().max_travel,
        dragging: gesture.is_dragging(),
        length_percent: gesture.string_length_percent(),
        intensity: gesture.handle_intensity(),
        tooltip: gesture
            .is_dragging()
            .then(|| copy::pull_tooltip(input.mode)),
    };

    MainSurface {
        shown,
        transition,
        panel: SidePanel {
            header: copy::PANEL_HEADER,
            node_id: copy::NODE_ID,
            title: copy::title(shown),
            description: copy::description(shown),
            integrity_label: copy::INTEGRITY_LABEL,
            integrity_value: copy::INTEGRITY_VALUE,
            integrity_fill: integrity_fill(input.ready_elapsed),
            footer: (copy::FOOTER_LAYER, copy::FOOTER_COPYRIGHT),
        },
        protocol: copy::protocol(shown),
        heading: copy::heading(shown),
        fields: field_set(shown),
        action,
        links_caption: copy::LINKS_CAPTION,
        links: copy::EXTERNAL_LINKS,
        pull_hint: copy::PULL_HINT,
        toggle_link: copy::toggle_link(shown),
        pull,
    }
}

fn integrity_fill(elapsed: Duration) -> f64 {
    let period = INTEGRITY_PERIOD.as_secs_f64();
    let t = (elapsed.as_secs_f64() % period) / period;
    let segments = (INTEGRITY_KEYFRAMES.len() - 1) as f64;
    let pos = t * segments;
    let idx = (pos.floor() as usize).min(INTEGRITY_KEYFRAMES.len() - 2);
    let local = pos - idx as f64;
    let (a, b) = (INTEGRITY_KEYFRAMES[idx], INTEGRITY_KEYFRAMES[idx + 1]);
    a + (b - a) * local
}

fn ratio(part: Duration, whole: Duration) -> f64 {
    if whole.is_zero() {
        return 1.0;
    }
    (part.as_secs_f64() / whole.as_secs_f64()).clamp(0.0, 1.0)
}

fn ease_in_out(t: f64) -> f64 {
    0.5 - 0.5 * (PI * t.clamp(0.0, 1.0)).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(phase: Phase, mode: Mode, busy: bool, gesture: &GestureTrigger) -> ViewInput<'_> {
        ViewInput {
            phase,
            mode,
            busy,
            gesture,
            transition: None,
            boot_elapsed: Duration::ZERO,
            ready_elapsed: Duration::ZERO,
            spinner_frame: 0,
        }
    }

    fn main_surface(surface: Surface) -> MainSurface {
        match surface {
            Surface::Main(main) => main,
            Surface::Boot(_) => panic!("expected main surface"),
        }
    }

    fn kinds(fields: &[Field]) -> Vec<FieldKind> {
        fields.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn test_booting_shows_only_boot_screen() {
        let mut gesture = GestureTrigger::default();
        gesture.on_drag_update(120.0);
        let surface = compose(&input(Phase::Booting, Mode::SignUp, true, &gesture));

        let Surface::Boot(boot) = surface else {
            panic!("expected boot screen");
        };
        assert_eq!(boot.lines.len(), 3);
        assert_eq!(boot.lines[0].0, "> INICIALIZANDO LINK_NEURAL_V4.0");
        assert_eq!(boot.progress, 0.0);
    }

    #[test]
    fn test_boot_progress_fills() {
        let gesture = GestureTrigger::default();
        let mut view = input(Phase::Booting, Mode::Login, false, &gesture);

        view.boot_elapsed = Duration::from_millis(750);
        let Surface::Boot(half) = compose(&view) else {
            panic!("expected boot screen");
        };
        assert!((half.progress - 0.5).abs() < 1e-9);

        view.boot_elapsed = Duration::from_secs(3);
        let Surface::Boot(done) = compose(&view) else {
            panic!("expected boot screen");
        };
        assert!((done.progress - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_field_set_follows_mode() {
        let gesture = GestureTrigger::default();
        let login = main_surface(compose(&input(Phase::Ready, Mode::Login, false, &gesture)));
        let signup = main_surface(compose(&input(Phase::Ready, Mode::SignUp, false, &gesture)));

        assert_eq!(kinds(&login.fields), vec![FieldKind::Email, FieldKind::Password]);
        assert_eq!(
            kinds(&signup.fields),
            vec![FieldKind::Name, FieldKind::Email, FieldKind::Password]
        );
        assert_eq!(login.action.label, "INICIAR_SESSÃO");
        assert_eq!(signup.action.label, "REGISTRAR_IDENTIDADE");
        assert_eq!(signup.toggle_link, "[ Retornar_ao_Portal ]");
    }

    #[test]
    fn test_busy_replaces_action_label() {
        let gesture = GestureTrigger::default();
        let mut view = input(Phase::Ready, Mode::SignUp, true, &gesture);
        view.spinner_frame = 5;
        let main = main_surface(compose(&view));

        assert!(main.action.busy);
        assert_eq!(main.action.label, "PROCESSANDO...");
        assert_eq!(main.action.spinner, Some('◓'));
    }

    #[test]
    fn test_exit_stage_keeps_previous_content() {
        let gesture = GestureTrigger::default();
        let transition = ModeTransition {
            from: Mode::Login,
            to: Mode::SignUp,
            seq: 1,
        };
        let mut view = input(Phase::Ready, Mode::SignUp, false, &gesture);

        view.transition = Some(transition.frame(Duration::from_millis(100)));
        let exiting = main_surface(compose(&view));
        assert_eq!(exiting.shown, Mode::Login);
        assert_eq!(exiting.fields.len(), 2);

        view.transition = Some(transition.frame(Duration::from_millis(500)));
        let entering = main_surface(compose(&view));
        assert_eq!(entering.shown, Mode::SignUp);
        assert_eq!(entering.fields.len(), 3);

        view.transition = Some(transition.frame(Duration::from_secs(1)));
        let settled = main_surface(compose(&view));
        assert_eq!(settled.transition, None);
    }

    #[test]
    fn test_pull_string_reflects_drag() {
        let mut gesture = GestureTrigger::default();
        let idle = main_surface(compose(&input(Phase::Ready, Mode::Login, false, &gesture)));
        assert_eq!(idle.pull.tooltip, None);
        assert!(!idle.pull.dragging);

        gesture.on_drag_update(75.0);
        let dragging = main_surface(compose(&input(Phase::Ready, Mode::Login, false, &gesture)));
        assert!(dragging.pull.dragging);
        assert_eq!(dragging.pull.tooltip, Some("PUXE PARA CADASTRAR"));
        assert!((dragging.pull.length_percent - 175.0).abs() < 1e-9);
    }

    #[test]
    fn test_compose_is_pure() {
        let gesture = GestureTrigger::default();
        let view = input(Phase::Ready, Mode::Login, false, &gesture);
        assert_eq!(compose(&view), compose(&view));
    }

    #[test]
    fn test_integrity_oscillates_between_keyframes() {
        assert!((integrity_fill(Duration::ZERO) - 0.8).abs() < 1e-9);
        assert!((integrity_fill(Duration::from_millis(2500)) - 1.0).abs() < 1e-9);
        let late = integrity_fill(Duration::from_millis(4999));
        assert!(late > 0.9 && late < 0.91);
    }
}
