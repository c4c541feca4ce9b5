/// Pointer bookkeeping for an in-progress pull.
#[derive(Debug, Default, Clone, Copy)]
pub struct PullState {
    /// Row where the drag started; `None` when not dragging.
    anchor_row: Option<u16>,
    /// Unclamped offset under the pointer, in gesture units.
    raw_offset: f64,
}

impl PullState {
    pub fn begin(&mut self, row: u16) {
        self.anchor_row = Some(row);
        self.raw_offset = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.anchor_row.is_some()
    }

    pub fn raw_offset(&self) -> f64 {
        self.raw_offset
    }

    /// Updates the raw offset for the pointer at `row`.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn track(&mut self, row: u16, units_per_row: f64) -> Option<f64> {
        let anchor = self.anchor_row?;
        self.raw_offset = (f64::from(row) - f64::from(anchor)) * units_per_row;
        Some(self.raw_offset)
    }

    /// Ends the drag at `row`, returning the final raw offset.
    pub fn finish(&mut self, row: u16, units_per_row: f64) -> Option<f64> {
        let raw = self.track(row, units_per_row)?;
        self.reset();
        Some(raw)
    }

    pub fn reset(&mut self) {
        self.anchor_row = None;
        self.raw_offset = 0.0;
    }
}
