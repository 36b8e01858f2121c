//! Main text diff composite widget.

use super::{DiffResultWidget, TextInputWidget};
use crate::event::TextSide;
use crate::model::TextPair;
use crate::state::{Pane, TextDiffState};
use crate::traits::ThemeProvider;
use ratatui::prelude::*;
use ratatui::widgets::Widget;

/// A single hint entry for the footer.
#[derive(Debug, Clone)]
pub struct FooterHint {
    /// The key (e.g., "F5", "Tab").
    pub key: String,
    /// The description (e.g., "Compare", "Focus").
    pub description: String,
}

impl FooterHint {
    /// Create a new footer hint.
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// The main text diff widget.
///
/// This is a composite widget that combines:
/// - Two text inputs side by side (original, modified)
/// - The compare control with key hints
/// - The result pane, only once a comparison produced something to show
///
/// # Example
///
/// ```ignore
/// use textdiff_viewer::{DefaultTheme, TextDiffView};
///
/// let theme = DefaultTheme;
/// let widget = TextDiffView::new(store.text_diff(), &theme);
/// widget.render_with_state(area, frame.buffer_mut(), &mut state);
/// ```
pub struct TextDiffView<'a, T: ThemeProvider> {
    /// The texts from the shared store.
    pair: &'a TextPair,
    /// Theme provider.
    theme: &'a T,
    /// Footer hints to display next to the compare control.
    footer_hints: Vec<FooterHint>,
    show_line_numbers: bool,
}

impl<'a, T: ThemeProvider> TextDiffView<'a, T> {
    /// Create a new text diff widget.
    pub fn new(pair: &'a TextPair, theme: &'a T) -> Self {
        Self {
            pair,
            theme,
            footer_hints: Vec::new(),
            show_line_numbers: true,
        }
    }

    /// Set footer hints to display next to the compare control.
    pub fn with_footer_hints(mut self, hints: Vec<FooterHint>) -> Self {
        self.footer_hints = hints;
        self
    }

    pub fn show_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Render the widget with state.
    pub fn render_with_state(self, area: Rect, buf: &mut Buffer, state: &mut TextDiffState) {
        let has_result = state.has_result();

        let [inputs_area, control_area, result_area] = if has_result {
            Layout::vertical([
                Constraint::Percentage(40),
                Constraint::Length(1),
                Constraint::Min(3),
            ])
            .areas(area)
        } else {
            Layout::vertical([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(0),
            ])
            .areas(area)
        };

        let [original_area, modified_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(inputs_area);

        TextInputWidget::new(
            TextSide::Original,
            &self.pair.text1,
            &state.original_cursor,
            state.focus == Pane::Original,
            self.theme,
        )
        .render(original_area, buf);

        TextInputWidget::new(
            TextSide::Modified,
            &self.pair.text2,
            &state.modified_cursor,
            state.focus == Pane::Modified,
            self.theme,
        )
        .render(modified_area, buf);

        self.render_control(control_area, buf);

        if !has_result {
            return;
        }

        // Update viewport height from actual render area (minus borders)
        state.viewport_height = result_area.height.saturating_sub(2) as usize;
        let focused = state.focus == Pane::Result;
        let (cursor_row, scroll_offset) = (state.nav.cursor_row, state.nav.scroll_offset);
        let rows = state.display_rows().to_vec();

        DiffResultWidget::new(&state.result, &state.expanded, &rows, self.theme)
            .with_cursor(cursor_row, scroll_offset)
            .focused(focused)
            .show_line_numbers(self.show_line_numbers)
            .render(result_area, buf);
    }

    fn render_control(&self, area: Rect, buf: &mut Buffer) {
        let button_style = Style::default()
            .fg(self.theme.button_foreground())
            .bg(self.theme.button_background())
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled(" ⇄ Compare Texts ", button_style)];

        if !self.footer_hints.is_empty() {
            spans.push(Span::raw("  "));
            for (i, hint) in self.footer_hints.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(
                        " │ ",
                        Style::default().fg(self.theme.hint_text_foreground()),
                    ));
                }
                spans.push(Span::styled(
                    hint.key.as_str(),
                    Style::default()
                        .fg(self.theme.hint_key_foreground())
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(
                    format!(" {}", hint.description),
                    Style::default().fg(self.theme.hint_text_foreground()),
                ));
            }
        }

        Line::from(spans).centered().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::DiffAction;
    use crate::traits::{DefaultTheme, ToolStateStore};

    struct Store(TextPair);

    impl ToolStateStore for Store {
        fn text_diff(&self) -> &TextPair {
            &self.0
        }

        fn set_text_diff(&mut self, text1: String, text2: String) {
            self.0 = TextPair { text1, text2 };
        }
    }

    fn render(store: &Store, state: &mut TextDiffState) -> Buffer {
        let theme = DefaultTheme;
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        TextDiffView::new(store.text_diff(), &theme)
            .with_footer_hints(vec![FooterHint::new("F5", "Compare")])
            .render_with_state(buf.area, &mut buf, state);
        buf
    }

    fn contents(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_no_result_pane_before_compare() {
        let store = Store(TextPair::new("", "b"));
        let mut state = TextDiffState::default();

        let text = contents(&render(&store, &mut state));
        assert!(text.contains("Original Text"));
        assert!(text.contains("Modified Text"));
        assert!(text.contains("Compare Texts"));
        assert!(!text.contains("Result"));
    }

    #[test]
    fn test_result_pane_after_compare() {
        let mut store = Store(TextPair::new("", "b"));
        let mut state = TextDiffState::default();

        let events = state.handle_action(&mut store, DiffAction::Compare);
        assert_eq!(events.len(), 1);

        let text = contents(&render(&store, &mut state));
        assert!(text.contains("Result"));
        assert!(text.contains("+ b"));
        // Result pane takes what the inputs and control row leave, minus borders
        assert!(state.viewport_height >= 10);
        assert!(state.viewport_height < 22);
    }

    #[test]
    fn test_nothing_to_show_for_empty_texts() {
        let mut store = Store(TextPair::default());
        let mut state = TextDiffState::default();

        state.handle_action(&mut store, DiffAction::Compare);
        let text = contents(&render(&store, &mut state));
        assert!(!text.contains("Result"));
    }
}
