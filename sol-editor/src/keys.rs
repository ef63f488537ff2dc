//! Keystroke handling for the editor
//!
//! Typing runs through [`Editor::handle_key`]: brackets and quotes are
//! auto-paired, Tab inserts spaces, Enter keeps the indentation of the
//! current line, and while the suggestion popup is open the arrow keys,
//! Enter, Tab and Escape drive the popup instead of the buffer.

use crate::{
    anchor::{LayoutMetrics, PopupAnchor},
    buffer::{CursorPosition, EditorBuffer},
    completion::{apply_item, Completion, Dictionary},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default number of spaces inserted by Tab and added after `{`
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// A key press the editor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Tab,
    Enter,
    Escape,
    ArrowUp,
    ArrowDown,
    Backspace,
    /// Ctrl+Enter (or Cmd+Enter)
    CtrlEnter,
}

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The buffer changed
    Edited,
    /// The popup highlight moved
    Navigated,
    /// A suggestion was inserted
    Accepted,
    /// The popup was closed
    Dismissed,
    /// The caller should compile the buffer
    CompileRequested,
    /// Nothing happened
    Ignored,
}

/// Closing partner of an auto-paired character
pub fn closing_pair(open: char) -> Option<char> {
    match open {
        '{' => Some('}'),
        '(' => Some(')'),
        '[' => Some(']'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

/// Open suggestion list and its highlighted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionPopup {
    completion: Completion,
    selected: usize,
}

impl SuggestionPopup {
    pub fn completion(&self) -> &Completion {
        &self.completion
    }

    pub fn labels(&self) -> Vec<&str> {
        self.completion.labels()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.completion
            .items
            .get(self.selected)
            .map(|item| item.label.as_str())
    }

    fn move_down(&mut self) {
        self.selected = (self.selected + 1).min(self.completion.items.len().saturating_sub(1));
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// Buffer, caret and suggestion popup
#[derive(Debug, Clone)]
pub struct Editor {
    buffer: EditorBuffer,
    dictionary: Dictionary,
    popup: Option<SuggestionPopup>,
    tab_width: usize,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new("")
    }
}

impl Editor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            buffer: EditorBuffer::new(text),
            dictionary: Dictionary::default(),
            popup: None,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn buffer(&self) -> &EditorBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn position(&self) -> CursorPosition {
        self.buffer.position()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn popup(&self) -> Option<&SuggestionPopup> {
        self.popup.as_ref()
    }

    /// Replace the whole buffer, closing the popup
    pub fn load(&mut self, text: impl Into<String>) {
        self.buffer.set_text(text);
        self.popup = None;
    }

    /// Move the caret; any open popup no longer applies
    pub fn set_cursor(&mut self, offset: usize) {
        self.buffer.set_cursor(offset);
        self.popup = None;
    }

    pub fn select(&mut self, range: std::ops::Range<usize>) {
        self.buffer.select(range);
        self.popup = None;
    }

    pub fn dismiss_popup(&mut self) {
        self.popup = None;
    }

    /// Where the popup should be drawn, if one is open
    pub fn popup_anchor(&self, scroll_top: f32, metrics: &LayoutMetrics) -> Option<PopupAnchor> {
        let popup = self.popup.as_ref()?;
        let completion = popup.completion();
        let prefix_chars = self.text()[completion.prefix_start..completion.cursor]
            .chars()
            .count();
        Some(PopupAnchor::compute(
            self.text(),
            completion.cursor,
            prefix_chars,
            scroll_top,
            metrics,
        ))
    }

    /// Accept the suggestion at `index` of the open popup
    pub fn accept_suggestion(&mut self, index: usize) -> bool {
        let Some(popup) = self.popup.take() else {
            return false;
        };
        let Some(item) = popup.completion.items.get(index) else {
            return false;
        };
        let applied = apply_item(self.buffer.text(), item);
        debug!(label = %item.label, "accepted suggestion");
        self.buffer.set_text(applied.text);
        self.buffer.set_cursor(applied.cursor);
        true
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if let Some(popup) = self.popup.as_mut() {
            match key {
                Key::ArrowDown => {
                    popup.move_down();
                    return KeyOutcome::Navigated;
                }
                Key::ArrowUp => {
                    popup.move_up();
                    return KeyOutcome::Navigated;
                }
                Key::Enter | Key::Tab => {
                    let selected = popup.selected;
                    return if self.accept_suggestion(selected) {
                        KeyOutcome::Accepted
                    } else {
                        KeyOutcome::Ignored
                    };
                }
                Key::Escape => {
                    self.popup = None;
                    return KeyOutcome::Dismissed;
                }
                _ => {}
            }
        }

        match key {
            Key::CtrlEnter => KeyOutcome::CompileRequested,
            Key::Tab => {
                self.buffer.insert(&" ".repeat(self.tab_width));
                self.popup = None;
                KeyOutcome::Edited
            }
            Key::Enter => {
                self.insert_newline();
                self.popup = None;
                KeyOutcome::Edited
            }
            Key::Char(c) => {
                match closing_pair(c) {
                    Some(close) => {
                        self.insert_pair(c, close);
                        self.popup = None;
                    }
                    None => {
                        let mut utf8 = [0u8; 4];
                        self.buffer.insert(c.encode_utf8(&mut utf8));
                        self.refresh_popup();
                    }
                }
                KeyOutcome::Edited
            }
            Key::Backspace => {
                self.buffer.backspace();
                self.refresh_popup();
                KeyOutcome::Edited
            }
            Key::Escape | Key::ArrowUp | Key::ArrowDown => KeyOutcome::Ignored,
        }
    }

    /// Type a string one character at a time
    pub fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            let key = match c {
                '\n' => Key::Enter,
                '\t' => Key::Tab,
                c => Key::Char(c),
            };
            self.handle_key(key);
        }
    }

    /// Recompute suggestions for the word before the caret
    pub fn refresh_popup(&mut self) {
        let completion = self.dictionary.complete(self.buffer.text(), self.buffer.cursor());
        self.popup = if completion.is_empty() {
            None
        } else {
            Some(SuggestionPopup {
                completion,
                selected: 0,
            })
        };
    }

    /// Wrap the selection in `open`/`close`; the caret lands after `open`
    fn insert_pair(&mut self, open: char, close: char) {
        let selection = self.buffer.selection();
        let wrapped = format!("{}{}{}", open, self.buffer.selected_text(), close);
        let caret = selection.start + open.len_utf8();
        self.buffer.replace(selection, &wrapped, caret);
    }

    /// Newline keeping the current indentation, one level deeper after `{`
    fn insert_newline(&mut self) {
        let line = self.buffer.line_before_cursor();
        let indent: String = line.chars().take_while(|c| c.is_whitespace()).collect();
        let extra = if line.trim_end().ends_with('{') {
            " ".repeat(self.tab_width)
        } else {
            String::new()
        };
        let inserted = format!("\n{}{}", indent, extra);
        self.buffer.insert(&inserted);
    }
}
