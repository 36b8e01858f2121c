//! Result widget rendering the comparison with collapsible sections.

use crate::display::expand_line;
use crate::model::{DiffResult, DiffSegment, DisplayRow, ExpandedSections, SegmentKind};
use crate::traits::ThemeProvider;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

/// Widget for rendering a [`DiffResult`].
///
/// Purely presentational: it takes the result, the expanded sections and
/// the precomputed display rows, and draws what is visible from the scroll
/// offset on. Toggling happens through actions on the state.
pub struct DiffResultWidget<'a, T: ThemeProvider> {
    result: &'a DiffResult,
    expanded: &'a ExpandedSections,
    /// Rows from `result.display_rows(expanded)`.
    rows: &'a [DisplayRow],
    cursor_row: usize,
    scroll_offset: usize,
    /// Whether this pane is focused (cursor only shown when focused).
    focused: bool,
    show_line_numbers: bool,
    theme: &'a T,
}

impl<'a, T: ThemeProvider> DiffResultWidget<'a, T> {
    pub fn new(
        result: &'a DiffResult,
        expanded: &'a ExpandedSections,
        rows: &'a [DisplayRow],
        theme: &'a T,
    ) -> Self {
        Self {
            result,
            expanded,
            rows,
            cursor_row: 0,
            scroll_offset: 0,
            focused: false,
            show_line_numbers: true,
            theme,
        }
    }

    /// Set cursor row and scroll offset.
    pub fn with_cursor(mut self, cursor_row: usize, scroll_offset: usize) -> Self {
        self.cursor_row = cursor_row;
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn show_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    fn line_no_width(&self) -> usize {
        if !self.show_line_numbers {
            return 0;
        }
        let max = self
            .result
            .segments
            .iter()
            .map(DiffSegment::max_line_no)
            .max()
            .unwrap_or(1);
        max.to_string().len().max(3)
    }
}

impl<T: ThemeProvider> Widget for DiffResultWidget<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            self.theme.focused_border()
        } else {
            self.theme.unfocused_border()
        };

        let title = Line::from(vec![
            Span::raw(" Result "),
            Span::styled(
                format!("+{}", self.result.additions()),
                Style::default().fg(Color::Green),
            ),
            Span::raw(" "),
            Span::styled(
                format!("-{}", self.result.deletions()),
                Style::default().fg(Color::Red),
            ),
            Span::raw(" "),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let line_no_width = self.line_no_width();
        let visible = self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner.height as usize);

        for (offset, (row_idx, row)) in visible.enumerate() {
            let y = inner.y + offset as u16;
            let is_cursor = self.focused && row_idx == self.cursor_row;

            match *row {
                DisplayRow::Line { segment, line } => {
                    if let Some(segment) = self.result.segments.get(segment) {
                        self.render_line(
                            segment,
                            line,
                            inner.x,
                            y,
                            inner.width,
                            line_no_width,
                            is_cursor,
                            buf,
                        );
                    }
                }
                DisplayRow::Collapsed { segment, hidden } => {
                    let expanded = self.is_expanded(segment);
                    let text = format!("▸ ⋯ {} unchanged lines", hidden);
                    self.render_marker(&text, expanded, inner.x, y, inner.width, is_cursor, buf);
                }
                DisplayRow::SectionHeader { segment, lines } => {
                    let expanded = self.is_expanded(segment);
                    let text = format!("▾ {} unchanged lines", lines);
                    self.render_marker(&text, expanded, inner.x, y, inner.width, is_cursor, buf);
                }
            }
        }
    }
}

impl<T: ThemeProvider> DiffResultWidget<'_, T> {
    fn is_expanded(&self, segment: usize) -> bool {
        self.result
            .segments
            .get(segment)
            .is_some_and(|s| self.expanded.contains(&s.id))
    }

    #[allow(clippy::too_many_arguments)]
    fn render_marker(
        &self,
        text: &str,
        expanded: bool,
        x: u16,
        y: u16,
        width: u16,
        is_cursor: bool,
        buf: &mut Buffer,
    ) {
        let (fg, bg) = if is_cursor {
            (self.theme.cursor_foreground(), self.theme.cursor_background())
        } else {
            (
                self.theme.section_marker_foreground(),
                self.theme.section_marker_background(),
            )
        };
        let mut style = Style::default().fg(fg).bg(bg);
        if expanded {
            style = style.add_modifier(Modifier::BOLD);
        }

        buf.set_style(Rect::new(x, y, width, 1), style);
        buf.set_stringn(x, y, text, width as usize, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn render_line(
        &self,
        segment: &DiffSegment,
        line: usize,
        x: u16,
        y: u16,
        width: u16,
        line_no_width: usize,
        is_cursor: bool,
        buf: &mut Buffer,
    ) {
        let bg = if is_cursor {
            self.theme.cursor_background()
        } else {
            match segment.kind {
                SegmentKind::Added => self.theme.addition_background(),
                SegmentKind::Removed => self.theme.deletion_background(),
                SegmentKind::Unchanged => self.theme.context_background(),
            }
        };
        let base_style = if is_cursor {
            Style::default().fg(self.theme.cursor_foreground()).bg(bg)
        } else {
            Style::default().bg(bg)
        };

        // Fill background
        buf.set_style(Rect::new(x, y, width, 1), base_style);

        let mut current_x = x;
        let right = x + width;

        if line_no_width > 0 {
            let line_no_style = if is_cursor {
                base_style
            } else {
                base_style.fg(self.theme.line_number_foreground())
            };
            let format_no = |n: Option<u32>| {
                n.map(|n| format!("{:>width$} ", n, width = line_no_width))
                    .unwrap_or_else(|| " ".repeat(line_no_width + 1))
            };
            let numbers = format!(
                "{}{}",
                format_no(segment.old_line(line)),
                format_no(segment.new_line(line))
            );
            let (next_x, _) = buf.set_stringn(
                current_x,
                y,
                &numbers,
                (right - current_x) as usize,
                line_no_style,
            );
            current_x = next_x;
        }

        let prefix_style = match segment.kind.color() {
            Some(color) if !is_cursor => base_style.fg(color),
            _ => base_style,
        };
        let (next_x, _) = buf.set_stringn(
            current_x,
            y,
            format!("{} ", segment.kind.prefix()),
            right.saturating_sub(current_x) as usize,
            prefix_style,
        );
        current_x = next_x;

        if let Some(content) = segment.lines.get(line) {
            buf.set_stringn(
                current_x,
                y,
                expand_line(content),
                right.saturating_sub(current_x) as usize,
                base_style,
            );
        }
    }
}
