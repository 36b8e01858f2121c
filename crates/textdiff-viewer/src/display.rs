//! Terminal cell layout of text lines.
//!
//! The buffer drops control characters, so lines are expanded before they
//! are drawn: tabs become spaces up to the next tab stop and any other
//! control character is shown as `�`. Widths follow `unicode-width`, so
//! CJK and most emoji take two cells.

use std::borrow::Cow;
use unicode_width::UnicodeWidthChar;

/// Distance between tab stops, in cells.
pub(crate) const TAB_WIDTH: usize = 4;

const REPLACEMENT: char = '\u{FFFD}';

/// Cells taken by `c` when it starts at column `col`.
pub(crate) fn char_width(c: char, col: usize) -> usize {
    if c == '\t' {
        TAB_WIDTH - col % TAB_WIDTH
    } else if c.is_control() {
        1
    } else {
        c.width().unwrap_or(0)
    }
}

/// Width in cells of a line (or line prefix) starting at column 0.
pub(crate) fn display_width(line: &str) -> usize {
    line.chars().fold(0, |col, c| col + char_width(c, col))
}

/// The line as it appears on screen.
pub(crate) fn expand_line(line: &str) -> Cow<'_, str> {
    if !line.chars().any(char::is_control) {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len() + TAB_WIDTH);
    let mut col = 0;
    for c in line.chars() {
        let width = char_width(c, col);
        match c {
            '\t' => out.push_str(&" ".repeat(width)),
            c if c.is_control() => out.push(REPLACEMENT),
            c => out.push(c),
        }
        col += width;
    }
    Cow::Owned(out)
}

/// Drop the first `skip` cells of an expanded line.
///
/// A wide character cut by the scroll edge is replaced by spaces so the rest
/// of the line keeps its columns.
pub(crate) fn skip_cells(line: &str, skip: usize) -> Cow<'_, str> {
    if skip == 0 {
        return Cow::Borrowed(line);
    }

    let mut col = 0;
    for (i, c) in line.char_indices() {
        if col >= skip {
            let pad = col - skip;
            return if pad == 0 {
                Cow::Borrowed(&line[i..])
            } else {
                Cow::Owned(format!("{}{}", " ".repeat(pad), &line[i..]))
            };
        }
        col += c.width().unwrap_or(0);
    }

    Cow::Owned(" ".repeat(col.saturating_sub(skip)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_expand_to_next_stop() {
        assert_eq!(expand_line("\tfoo"), "    foo");
        assert_eq!(expand_line("ab\tc"), "ab  c");
        assert_eq!(display_width("ab\tc"), 5);
    }

    #[test]
    fn test_control_chars_are_visible() {
        assert_eq!(expand_line("a\u{1b}b"), "a\u{FFFD}b");
        assert!(matches!(expand_line("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_wide_chars_take_two_cells() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("a日"), 3);
        assert_eq!(char_width('日', 0), 2);
    }

    #[test]
    fn test_skip_cells() {
        assert_eq!(skip_cells("abcdef", 2), "cdef");
        assert_eq!(skip_cells("日本語", 2), "本語");
        // Half of 本 scrolled away
        assert_eq!(skip_cells("日本語", 3), " 語");
        assert_eq!(skip_cells("ab", 5), "");
    }
}
