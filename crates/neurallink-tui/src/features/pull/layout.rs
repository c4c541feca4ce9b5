use ratatui::layout::Rect;

/// Rows of string shown above the handle at rest.
pub const REST_ROWS: u16 = 2;

/// Columns between the string and the right edge of the form.
const HANDLE_INSET: u16 = 6;

/// Screen placement of the pull string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullLayout {
    /// Column the string hangs from.
    pub column: u16,
    /// Row the string is anchored at.
    pub top: u16,
    /// Handle cells (three wide, centered on `column`).
    pub handle: Rect,
}

impl PullLayout {
    /// Whether a pointer at (`column`, `row`) grabs the handle.
    ///
    /// The grab area extends one cell around the handle.
    pub fn hit(&self, column: u16, row: u16) -> bool {
        if self.handle.is_empty() {
            return false;
        }
        let left = self.handle.x.saturating_sub(1);
        let right = self.handle.right();
        column >= left && column <= right && row.abs_diff(self.handle.y) <= 1
    }

    /// Rows of string drawn between the anchor and the handle.
    pub fn string_rows(&self) -> u16 {
        self.handle.y.saturating_sub(self.top)
    }
}

/// Lays out the pull string inside `form` for a drawn offset in gesture units.
pub fn pull_layout(form: Rect, drawn_offset: f64, units_per_row: f64) -> PullLayout {
    let column = form.right().saturating_sub(HANDLE_INSET).max(form.x);
    let top = form.y;

    let travel_rows = if units_per_row > 0.0 && drawn_offset.is_finite() {
        (drawn_offset / units_per_row).round() as i64
    } else {
        0
    };
    let last_row = form.bottom().saturating_sub(1).max(top);
    let row = (i64::from(top) + i64::from(REST_ROWS) + travel_rows)
        .clamp(i64::from(top), i64::from(last_row));
    let row = u16::try_from(row).unwrap_or(top);

    let handle = Rect::new(column.saturating_sub(1), row, 3, 1).intersection(form);
    PullLayout {
        column,
        top,
        handle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> Rect {
        Rect::new(40, 0, 60, 30)
    }

    #[test]
    fn test_rest_layout() {
        let layout = pull_layout(form(), 0.0, 15.0);

        assert_eq!(layout.column, 94);
        assert_eq!(layout.top, 0);
        assert_eq!(layout.handle, Rect::new(93, REST_ROWS, 3, 1));
        assert_eq!(layout.string_rows(), REST_ROWS);
    }

    #[test]
    fn test_handle_follows_offset() {
        let layout = pull_layout(form(), 120.0, 15.0);
        assert_eq!(layout.handle.y, REST_ROWS + 8);
    }

    #[test]
    fn test_handle_stays_inside_form() {
        let layout = pull_layout(Rect::new(0, 0, 20, 5), 1_000.0, 15.0);
        assert_eq!(layout.handle.y, 4);

        let layout = pull_layout(form(), -100.0, 15.0);
        assert_eq!(layout.handle.y, 0);
    }

    #[test]
    fn test_hit_includes_margin() {
        let layout = pull_layout(form(), 0.0, 15.0);

        assert!(layout.hit(94, REST_ROWS));
        assert!(layout.hit(92, REST_ROWS + 1));
        assert!(layout.hit(96, REST_ROWS - 1));
        assert!(!layout.hit(91, REST_ROWS));
        assert!(!layout.hit(94, REST_ROWS + 2));
    }
}
