//! Cursor for editing a text the widget does not own.

use crate::display::{char_width, display_width};

/// Byte cursor into one of the store's texts.
///
/// Edits take the current text and return the new value instead of
/// mutating it, so the caller can hand it to the store. The position is
/// clamped before every use because the store may replace the text
/// underneath the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextCursor {
    /// Byte offset, always on a char boundary once clamped.
    pub position: usize,
}

impl TextCursor {
    /// Cursor at the end of `text`.
    pub fn at_end(text: &str) -> Self {
        Self {
            position: text.len(),
        }
    }

    /// Clamp the position into `text`, backing up to a char boundary.
    pub fn clamp(&mut self, text: &str) -> usize {
        let mut pos = self.position.min(text.len());
        while !text.is_char_boundary(pos) {
            pos -= 1;
        }
        self.position = pos;
        pos
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, text: &str, c: char) -> String {
        let mut buf = [0u8; 4];
        self.insert_str(text, c.encode_utf8(&mut buf))
    }

    /// Insert a string at the cursor.
    pub fn insert_str(&mut self, text: &str, s: &str) -> String {
        let pos = self.clamp(text);
        let mut value = String::with_capacity(text.len() + s.len());
        value.push_str(&text[..pos]);
        value.push_str(s);
        value.push_str(&text[pos..]);
        self.position = pos + s.len();
        value
    }

    /// Delete the character before the cursor (backspace).
    ///
    /// Returns `None` when there is nothing to delete.
    pub fn delete_before(&mut self, text: &str) -> Option<String> {
        let pos = self.clamp(text);
        let (prev_start, _) = text[..pos].char_indices().last()?;
        let mut value = text.to_string();
        value.remove(prev_start);
        self.position = prev_start;
        Some(value)
    }

    /// Delete the character at the cursor (delete key).
    pub fn delete_at(&mut self, text: &str) -> Option<String> {
        let pos = self.clamp(text);
        if pos >= text.len() {
            return None;
        }
        let mut value = text.to_string();
        value.remove(pos);
        Some(value)
    }

    /// Move cursor left by one character.
    pub fn left(&mut self, text: &str) {
        let pos = self.clamp(text);
        self.position = text[..pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }

    /// Move cursor right by one character.
    pub fn right(&mut self, text: &str) {
        let pos = self.clamp(text);
        self.position = text[pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| pos + i)
            .unwrap_or(text.len());
    }

    /// Move cursor to the start of the current line.
    pub fn home(&mut self, text: &str) {
        let pos = self.clamp(text);
        self.position = line_start(text, pos);
    }

    /// Move cursor to the end of the current line.
    pub fn end(&mut self, text: &str) {
        let pos = self.clamp(text);
        self.position = text[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(text.len());
    }

    /// Move cursor to the same column on the previous line.
    ///
    /// Stays put on the first line.
    pub fn up(&mut self, text: &str) {
        let pos = self.clamp(text);
        let start = line_start(text, pos);
        if start == 0 {
            return;
        }
        let column = display_width(&text[start..pos]);
        let prev_end = start - 1;
        self.position = position_at_column(text, line_start(text, prev_end), prev_end, column);
    }

    /// Move cursor to the same column on the next line.
    ///
    /// Stays put on the last line.
    pub fn down(&mut self, text: &str) {
        let pos = self.clamp(text);
        let Some(offset) = text[pos..].find('\n') else {
            return;
        };
        let column = display_width(&text[line_start(text, pos)..pos]);
        let next_start = pos + offset + 1;
        let next_end = text[next_start..]
            .find('\n')
            .map(|i| next_start + i)
            .unwrap_or(text.len());
        self.position = position_at_column(text, next_start, next_end, column);
    }

    /// Current line (0-indexed).
    pub fn line(&self, text: &str) -> usize {
        let pos = self.clone().clamp(text);
        text[..pos].matches('\n').count()
    }

    /// Current column in terminal cells (tabs and wide characters included).
    pub fn column(&self, text: &str) -> usize {
        let pos = self.clone().clamp(text);
        display_width(&text[line_start(text, pos)..pos])
    }
}

fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

/// Byte offset of the char covering `column` in `text[start..end]`,
/// or `end` when the line is shorter.
fn position_at_column(text: &str, start: usize, end: usize, column: usize) -> usize {
    let mut width = 0;
    for (i, c) in text[start..end].char_indices() {
        let next = width + char_width(c, width);
        if next > column {
            return start + i;
        }
        width = next;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete() {
        let mut cursor = TextCursor::default();

        let text = cursor.insert_str("", "Hello");
        assert_eq!(text, "Hello");
        assert_eq!(cursor.position, 5);

        let text = cursor.insert_char(&text, '!');
        assert_eq!(text, "Hello!");

        let text = cursor.delete_before(&text).unwrap();
        assert_eq!(text, "Hello");

        cursor.position = 0;
        assert!(cursor.delete_before(&text).is_none());
        let text = cursor.delete_at(&text).unwrap();
        assert_eq!(text, "ello");
    }

    #[test]
    fn test_cursor_movement() {
        let mut cursor = TextCursor::at_end("Hello\nWorld");

        cursor.home("Hello\nWorld");
        assert_eq!(cursor.position, 6); // Start of "World"

        cursor.end("Hello\nWorld");
        assert_eq!(cursor.position, 11); // End of "World"

        cursor.position = 0;
        cursor.end("Hello\nWorld");
        assert_eq!(cursor.position, 5); // End of "Hello"
    }

    #[test]
    fn test_multibyte_chars() {
        let mut cursor = TextCursor::default();
        let text = cursor.insert_str("", "añb");
        assert_eq!(cursor.position, 4);

        cursor.left(&text);
        cursor.left(&text);
        assert_eq!(cursor.position, 1);
        assert_eq!(cursor.column(&text), 1);

        cursor.right(&text);
        assert_eq!(cursor.position, 3);

        let text = cursor.delete_before(&text).unwrap();
        assert_eq!(text, "ab");
        assert_eq!(cursor.position, 1);
    }

    #[test]
    fn test_clamps_when_text_shrinks() {
        let mut cursor = TextCursor::at_end("a long line");

        let text = cursor.insert_char("ab", 'c');
        assert_eq!(text, "abc");
        assert_eq!(cursor.position, 3);

        // Inside a multibyte char: back up to its start
        cursor.position = 2;
        assert_eq!(cursor.clamp("añ"), 1);
    }

    #[test]
    fn test_column_counts_cells() {
        let cursor = TextCursor::at_end("日本");
        assert_eq!(cursor.column("日本"), 4);

        let cursor = TextCursor::at_end("a\n\tx");
        assert_eq!(cursor.column("a\n\tx"), 5);
    }

    #[test]
    fn test_up_and_down_keep_column() {
        let text = "first line\nab\nthird";
        let mut cursor = TextCursor { position: 4 }; // "t" in "first"

        cursor.down(text);
        assert_eq!(cursor.position, 13); // clamped to end of "ab"

        cursor.down(text);
        assert_eq!(cursor.line(text), 2);
        assert_eq!(cursor.column(text), 2);

        // Last line: nowhere to go
        cursor.down(text);
        assert_eq!(cursor.line(text), 2);

        cursor.up(text);
        cursor.up(text);
        assert_eq!(cursor.position, 2);

        cursor.up(text);
        assert_eq!(cursor.position, 2);
    }

    #[test]
    fn test_down_across_wide_chars() {
        let text = "abcd\n日本";
        let mut cursor = TextCursor { position: 3 }; // column 3

        // Column 3 is the second half of 本: land on its start
        cursor.down(text);
        assert_eq!(cursor.position, 8);
        assert_eq!(cursor.column(text), 2);
    }

    #[test]
    fn test_line_info() {
        let text = "Line 1\nLine 2\nLine 3";
        let mut cursor = TextCursor::at_end(text);
        assert_eq!(cursor.line(text), 2);

        cursor.position = 8; // "i" in "Line 2"
        assert_eq!(cursor.line(text), 1);
        assert_eq!(cursor.column(text), 1);
    }
}
