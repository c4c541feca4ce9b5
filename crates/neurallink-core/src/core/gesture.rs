//! Pull-string gesture.
//!
//! A handle travels along one axis within `[0, max_travel]`. Releasing it past
//! `threshold` yields a single [`Activate`]; every release returns the handle
//! to rest. The threshold sits below the travel bound so short accidental
//! drags never activate.
//!
//! ```text
//!   Idle --update(x)--> Dragging(clamp(x)) --update(y)--> Dragging(clamp(y))
//!     ^                        |
//!     +------ end(x) ----------+   emits Activate iff clamp(x) > threshold
//! ```

/// Fraction of overshoot shown past a bound while dragging.
pub const ELASTIC_FACTOR: f64 = 0.2;

/// String length (percent of rest length) at rest and at full travel.
const STRING_LENGTH_RANGE: (f64, f64) = (100.0, 250.0);

/// Handle intensity at rest and once the threshold is reached.
const HANDLE_INTENSITY_RANGE: (f64, f64) = (0.4, 1.0);

/// Travel bound and activation threshold, in gesture units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureBounds {
    pub max_travel: f64,
    pub threshold: f64,
}

impl Default for GestureBounds {
    fn default() -> Self {
        Self {
            max_travel: 150.0,
            threshold: 100.0,
        }
    }
}

impl GestureBounds {
    pub fn new(max_travel: f64, threshold: f64) -> Self {
        Self {
            max_travel,
            threshold,
        }
    }

    /// Clamps `offset` into `[0, max_travel]`. NaN maps to 0.
    pub fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_travel)
    }

    /// Position to draw for a raw pointer offset, allowing elastic overshoot.
    pub fn elastic(&self, raw: f64) -> f64 {
        if raw.is_nan() {
            0.0
        } else if raw < 0.0 {
            raw * ELASTIC_FACTOR
        } else if raw > self.max_travel {
            self.max_travel + (raw - self.max_travel) * ELASTIC_FACTOR
        } else {
            raw
        }
    }
}

/// Whether releasing at `offset` activates, for the given bounds.
pub fn release(bounds: &GestureBounds, offset: f64) -> bool {
    bounds.clamp(offset) > bounds.threshold
}

/// Emitted once per release past the threshold. Carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activate;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        offset: f64,
    },
}

#[derive(Debug, Clone, Default)]
pub struct GestureTrigger {
    bounds: GestureBounds,
    state: GestureState,
}

impl GestureTrigger {
    pub fn new(bounds: GestureBounds) -> Self {
        Self {
            bounds,
            state: GestureState::Idle,
        }
    }

    pub fn bounds(&self) -> &GestureBounds {
        &self.bounds
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Tracked offset; 0 while idle.
    pub fn offset(&self) -> f64 {
        match self.state {
            GestureState::Idle => 0.0,
            GestureState::Dragging { offset } => offset,
        }
    }

    /// Records the current drag position (clamped).
    pub fn on_drag_update(&mut self, offset: f64) {
        self.state = GestureState::Dragging {
            offset: self.bounds.clamp(offset),
        };
    }

    /// Ends the drag at `offset`, returning [`Activate`] if past the threshold.
    ///
    /// The tracked offset is 0 afterwards whether or not activation fired.
    pub fn on_drag_end(&mut self, offset: f64) -> Option<Activate> {
        let activated = release(&self.bounds, offset);
        self.state = GestureState::Idle;
        if activated {
            tracing::debug!(offset, threshold = self.bounds.threshold, "pull gesture activated");
            Some(Activate)
        } else {
            None
        }
    }

    /// Drops an in-progress drag without evaluating it.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Length of the string as a percentage of its rest length.
    pub fn string_length_percent(&self) -> f64 {
        let (rest, full) = STRING_LENGTH_RANGE;
        if self.bounds.max_travel <= 0.0 {
            return rest;
        }
        let t = (self.offset() / self.bounds.max_travel).clamp(0.0, 1.0);
        rest + (full - rest) * t
    }

    /// Handle intensity in `[0.4, 1.0]`, saturating at the threshold.
    pub fn handle_intensity(&self) -> f64 {
        let (rest, lit) = HANDLE_INTENSITY_RANGE;
        if self.bounds.threshold <= 0.0 {
            return lit;
        }
        let t = (self.offset() / self.bounds.threshold).clamp(0.0, 1.0);
        rest + (lit - rest) * t
    }
}
