//! Text buffer with a selection

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Largest char boundary of `text` not greater than `offset`
pub fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// 1-based line and column of a byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    /// Position of `offset` in `text`; the column counts characters
    pub fn of(text: &str, offset: usize) -> Self {
        let before = &text[..floor_char_boundary(text, offset)];
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        Self {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }

    /// Byte offset of a 1-based line and column, clamped to the line
    pub fn to_offset(self, text: &str) -> usize {
        let mut line_start = 0;
        for _ in 1..self.line.max(1) {
            match text[line_start..].find('\n') {
                Some(i) => line_start += i + 1,
                None => return text.len(),
            }
        }
        let line = text[line_start..].split('\n').next().unwrap_or("");
        let column_bytes: usize = line
            .chars()
            .take(self.column.saturating_sub(1))
            .map(char::len_utf8)
            .sum();
        line_start + column_bytes
    }
}

impl std::fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ln {}, Col {}", self.line, self.column)
    }
}

/// Number of lines in `text`; an empty buffer has one line
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Editable text plus the current selection (a collapsed selection is the caret)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorBuffer {
    text: String,
    selection: Range<usize>,
}

impl EditorBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: 0..0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Caret offset (start of the selection)
    pub fn cursor(&self) -> usize {
        self.selection.start
    }

    pub fn selected_text(&self) -> &str {
        &self.text[self.selection.clone()]
    }

    pub fn position(&self) -> CursorPosition {
        CursorPosition::of(&self.text, self.cursor())
    }

    pub fn line_count(&self) -> usize {
        line_count(&self.text)
    }

    /// Replace the whole text and move the caret to the start
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selection = 0..0;
    }

    pub fn set_cursor(&mut self, offset: usize) {
        let offset = floor_char_boundary(&self.text, offset);
        self.selection = offset..offset;
    }

    pub fn select(&mut self, range: Range<usize>) {
        let a = floor_char_boundary(&self.text, range.start);
        let b = floor_char_boundary(&self.text, range.end);
        self.selection = a.min(b)..a.max(b);
    }

    /// Text between the start of the caret's line and the caret
    pub fn line_before_cursor(&self) -> &str {
        let before = &self.text[..self.cursor()];
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        &before[line_start..]
    }

    /// Replace `range` with `replacement` and put the caret at `caret`
    pub fn replace(&mut self, range: Range<usize>, replacement: &str, caret: usize) {
        let end = floor_char_boundary(&self.text, range.end);
        let start = floor_char_boundary(&self.text, range.start.min(end));
        self.text.replace_range(start..end, replacement);
        self.set_cursor(caret);
    }

    /// Replace the selection with `s`, caret after the inserted text
    pub fn insert(&mut self, s: &str) {
        let start = self.selection.start;
        self.replace(self.selection(), s, start + s.len());
    }

    /// Delete the selection, or the character before the caret
    pub fn backspace(&mut self) {
        if !self.selection.is_empty() {
            self.insert("");
            return;
        }
        let cursor = self.cursor();
        if let Some(c) = self.text[..cursor].chars().next_back() {
            let start = cursor - c.len_utf8();
            self.replace(start..cursor, "", start);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_char_boundary() {
        let text = "aé";
        assert_eq!(floor_char_boundary(text, 2), 1);
        assert_eq!(floor_char_boundary(text, 3), 3);
        assert_eq!(floor_char_boundary(text, 99), 3);
    }

    #[test]
    fn test_cursor_position() {
        let text = "line one\nline two\n";
        assert_eq!(CursorPosition::of(text, 0), CursorPosition { line: 1, column: 1 });
        assert_eq!(CursorPosition::of(text, 9), CursorPosition { line: 2, column: 1 });
        assert_eq!(CursorPosition::of(text, 13), CursorPosition { line: 2, column: 5 });
        assert_eq!(CursorPosition::of(text, 18), CursorPosition { line: 3, column: 1 });
        assert_eq!(CursorPosition::of("éé", 4), CursorPosition { line: 1, column: 3 });
    }

    #[test]
    fn test_position_to_offset() {
        let text = "ab\ncdé\n";
        assert_eq!(CursorPosition { line: 1, column: 1 }.to_offset(text), 0);
        assert_eq!(CursorPosition { line: 2, column: 3 }.to_offset(text), 5);
        assert_eq!(CursorPosition { line: 2, column: 99 }.to_offset(text), 7);
        assert_eq!(CursorPosition { line: 9, column: 1 }.to_offset(text), text.len());
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("a\nb"), 2);
        assert_eq!(line_count("a\n"), 2);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut buffer = EditorBuffer::new("hello world");
        buffer.select(6..11);
        buffer.insert("there");
        assert_eq!(buffer.text(), "hello there");
        assert_eq!(buffer.cursor(), 11);
    }

    #[test]
    fn test_backspace() {
        let mut buffer = EditorBuffer::new("abé");
        buffer.set_cursor(4);
        buffer.backspace();
        assert_eq!(buffer.text(), "ab");
        assert_eq!(buffer.cursor(), 2);

        buffer.set_cursor(0);
        buffer.backspace();
        assert_eq!(buffer.text(), "ab");

        buffer.select(0..2);
        buffer.backspace();
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn test_line_before_cursor() {
        let mut buffer = EditorBuffer::new("a {\n    b = 1;");
        buffer.set_cursor(10);
        assert_eq!(buffer.line_before_cursor(), "    b ");
    }
}
