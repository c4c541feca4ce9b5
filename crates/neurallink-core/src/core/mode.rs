//! Login / sign-up mode state.

/// Form variant currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Login,
    SignUp,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Login => Mode::SignUp,
            Mode::SignUp => Mode::Login,
        }
    }

    pub fn is_login(self) -> bool {
        self == Mode::Login
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Login => "login",
            Mode::SignUp => "signup",
        }
    }
}

/// Notification emitted on every mode change.
///
/// `seq` increases by one per change and keys the view transition, so two
/// rapid toggles produce two distinct transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChanged {
    pub from: Mode,
    pub to: Mode,
    pub seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: Mode,
    seq: u64,
}

impl ModeController {
    pub fn new(mode: Mode) -> Self {
        Self { mode, seq: 0 }
    }

    pub fn current_mode(&self) -> Mode {
        self.mode
    }

    /// Number of changes applied so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Flips the mode. Never gated, never coalesced.
    pub fn toggle(&mut self) -> ModeChanged {
        let from = self.mode;
        self.mode = from.toggled();
        self.seq += 1;
        tracing::info!(from = from.label(), to = self.mode.label(), seq = self.seq, "mode changed");
        ModeChanged {
            from,
            to: self.mode,
            seq: self.seq,
        }
    }
}
