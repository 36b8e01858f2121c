//! Text input widget for one side of the comparison.

use crate::display::{expand_line, skip_cells};
use crate::event::TextSide;
use crate::state::TextCursor;
use crate::traits::ThemeProvider;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

/// Widget for rendering one editable text.
pub struct TextInputWidget<'a, T: ThemeProvider> {
    /// Which text this input shows.
    side: TextSide,
    /// Current text from the store.
    text: &'a str,
    /// Cursor within the text.
    cursor: &'a TextCursor,
    /// Whether this input is focused.
    focused: bool,
    /// Theme provider.
    theme: &'a T,
}

impl<'a, T: ThemeProvider> TextInputWidget<'a, T> {
    pub fn new(
        side: TextSide,
        text: &'a str,
        cursor: &'a TextCursor,
        focused: bool,
        theme: &'a T,
    ) -> Self {
        Self {
            side,
            text,
            cursor,
            focused,
            theme,
        }
    }
}

impl<T: ThemeProvider> Widget for TextInputWidget<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            self.theme.focused_border()
        } else {
            self.theme.unfocused_border()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", self.side.label()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let cursor_line = self.cursor.line(self.text);
        let cursor_col = self.cursor.column(self.text);

        if self.text.is_empty() {
            buf.set_stringn(
                inner.x,
                inner.y,
                self.side.placeholder(),
                inner.width as usize,
                Style::default().fg(self.theme.placeholder_foreground()),
            );
        } else {
            // Scroll so the cursor stays in view (columns are cells)
            let height = inner.height as usize;
            let width = inner.width as usize;
            let v_scroll = cursor_line.saturating_sub(height - 1);
            let h_scroll = cursor_col.saturating_sub(width - 1);

            for (i, line) in self.text.split('\n').skip(v_scroll).take(height).enumerate() {
                let expanded = expand_line(line);
                let visible = skip_cells(&expanded, h_scroll);
                buf.set_stringn(inner.x, inner.y + i as u16, &visible, width, Style::default());
            }

            if self.focused {
                let x = inner.x + (cursor_col - h_scroll) as u16;
                let y = inner.y + (cursor_line - v_scroll) as u16;
                buf.set_style(
                    Rect::new(x, y, 1, 1),
                    Style::default().bg(Color::White).fg(Color::Black),
                );
            }
            return;
        }

        if self.focused {
            buf.set_style(
                Rect::new(inner.x, inner.y, 1, 1),
                Style::default().bg(Color::White).fg(Color::Black),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::DefaultTheme;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let theme = DefaultTheme;
        let cursor = TextCursor::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 4));

        TextInputWidget::new(TextSide::Original, "", &cursor, false, &theme)
            .render(buf.area, &mut buf);

        assert!(row(&buf, 0).contains("Original Text"));
        assert!(row(&buf, 1).contains("Enter original text..."));
    }

    #[test]
    fn test_scrolls_to_cursor() {
        let theme = DefaultTheme;
        let text = "one\ntwo\nthree\nfour";
        let cursor = TextCursor::at_end(text);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 4));

        TextInputWidget::new(TextSide::Modified, text, &cursor, true, &theme)
            .render(buf.area, &mut buf);

        // Two visible rows: the last two lines
        assert!(row(&buf, 1).contains("three"));
        assert!(row(&buf, 2).contains("four"));
    }

    fn cursor_x(buf: &Buffer, y: u16) -> Vec<u16> {
        (0..buf.area.width)
            .filter(|&x| buf[(x, y)].bg == Color::White)
            .collect()
    }

    #[test]
    fn test_cursor_after_wide_chars() {
        let theme = DefaultTheme;
        let text = "日本";
        let cursor = TextCursor::at_end(text);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 3));

        TextInputWidget::new(TextSide::Original, text, &cursor, true, &theme)
            .render(buf.area, &mut buf);

        // Text covers x=1..=4, the cursor sits right after it
        assert_eq!(buf[(1, 1)].symbol(), "日");
        assert_eq!(buf[(3, 1)].symbol(), "本");
        assert_eq!(cursor_x(&buf, 1), vec![5]);
    }

    #[test]
    fn test_horizontal_scroll_by_cells() {
        let theme = DefaultTheme;
        let text = "日本語テキスト";
        let cursor = TextCursor::at_end(text);
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 3));

        TextInputWidget::new(TextSide::Original, text, &cursor, true, &theme)
            .render(buf.area, &mut buf);

        // 14 cells of text in a 6 cell input: cursor pinned to the last cell
        assert_eq!(cursor_x(&buf, 1), vec![6]);
        assert_eq!(buf[(4, 1)].symbol(), "ト");
    }

    #[test]
    fn test_tabs_are_expanded() {
        let theme = DefaultTheme;
        let text = "\tx";
        let cursor = TextCursor::at_end(text);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 3));

        TextInputWidget::new(TextSide::Modified, text, &cursor, true, &theme)
            .render(buf.area, &mut buf);

        assert_eq!(buf[(5, 1)].symbol(), "x");
        assert_eq!(cursor_x(&buf, 1), vec![6]);
    }
}
