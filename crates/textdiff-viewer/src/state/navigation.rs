//! Focus and result cursor/scroll state.

/// The focusable panes of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    /// Input for text1.
    #[default]
    Original,
    /// Input for text2.
    Modified,
    /// The comparison result.
    Result,
}

impl Pane {
    /// Next pane in tab order.
    pub fn next(self) -> Self {
        match self {
            Pane::Original => Pane::Modified,
            Pane::Modified => Pane::Result,
            Pane::Result => Pane::Original,
        }
    }

    /// Previous pane in tab order.
    pub fn prev(self) -> Self {
        match self {
            Pane::Original => Pane::Result,
            Pane::Modified => Pane::Original,
            Pane::Result => Pane::Modified,
        }
    }

    /// Whether this pane is one of the text inputs.
    pub fn is_input(self) -> bool {
        !matches!(self, Pane::Result)
    }
}

/// Cursor and scroll position within the rendered result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Cursor row (display row, not source line).
    pub cursor_row: usize,
    /// Scroll offset (first visible row).
    pub scroll_offset: usize,
}

impl NavigationState {
    /// Create new navigation state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move cursor down by one row.
    pub fn cursor_down(&mut self, max_rows: usize) {
        if self.cursor_row + 1 < max_rows {
            self.cursor_row += 1;
        }
    }

    /// Move cursor up by one row.
    pub fn cursor_up(&mut self) {
        self.cursor_row = self.cursor_row.saturating_sub(1);
    }

    /// Move cursor to the first row.
    pub fn cursor_first(&mut self) {
        self.cursor_row = 0;
        self.scroll_offset = 0;
    }

    /// Move cursor to the last row.
    pub fn cursor_last(&mut self, max_rows: usize) {
        self.cursor_row = max_rows.saturating_sub(1);
    }

    /// Keep the cursor inside `max_rows` (after sections collapse).
    pub fn clamp(&mut self, max_rows: usize, visible_height: usize) {
        self.cursor_row = self.cursor_row.min(max_rows.saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.cursor_row);
        self.ensure_cursor_visible(visible_height);
    }

    /// Adjust scroll to keep cursor visible.
    pub fn ensure_cursor_visible(&mut self, visible_height: usize) {
        if self.cursor_row < self.scroll_offset {
            self.scroll_offset = self.cursor_row;
        } else if visible_height > 0 && self.cursor_row >= self.scroll_offset + visible_height {
            self.scroll_offset = self.cursor_row + 1 - visible_height;
        }
    }

    /// Scroll down by full page.
    pub fn scroll_page_down(&mut self, visible_height: usize, max_rows: usize) {
        self.cursor_row = (self.cursor_row + visible_height).min(max_rows.saturating_sub(1));
        self.ensure_cursor_visible(visible_height);
    }

    /// Scroll up by full page.
    pub fn scroll_page_up(&mut self, visible_height: usize) {
        self.cursor_row = self.cursor_row.saturating_sub(visible_height);
        self.ensure_cursor_visible(visible_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_cycle() {
        assert_eq!(Pane::Original.next(), Pane::Modified);
        assert_eq!(Pane::Result.next(), Pane::Original);
        assert_eq!(Pane::Original.prev(), Pane::Result);
        assert!(!Pane::Result.is_input());
    }

    #[test]
    fn test_cursor_movement() {
        let mut nav = NavigationState::new();

        nav.cursor_down(10);
        assert_eq!(nav.cursor_row, 1);

        nav.cursor_up();
        assert_eq!(nav.cursor_row, 0);

        // Can't go below 0
        nav.cursor_up();
        assert_eq!(nav.cursor_row, 0);

        // Can't go past max
        nav.cursor_row = 9;
        nav.cursor_down(10);
        assert_eq!(nav.cursor_row, 9);
    }

    #[test]
    fn test_scroll_visibility() {
        let mut nav = NavigationState::new();
        nav.cursor_row = 50;

        nav.ensure_cursor_visible(20);
        assert_eq!(nav.scroll_offset, 31); // 50 - 20 + 1
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut nav = NavigationState {
            cursor_row: 40,
            scroll_offset: 30,
        };

        nav.clamp(12, 10);
        assert_eq!(nav.cursor_row, 11);
        assert_eq!(nav.scroll_offset, 11);
    }
}
