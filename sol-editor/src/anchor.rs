//! Screen position of the suggestion popup

use crate::buffer::floor_char_boundary;
use serde::{Deserialize, Serialize};

/// Editor layout constants in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    pub line_height: f32,
    pub char_width: f32,
    /// Width of the line-number gutter
    pub gutter: f32,
    /// Gap between the caret line and the popup
    pub offset_y: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            line_height: 22.0,
            char_width: 9.6,
            gutter: 46.0,
            offset_y: 2.0,
        }
    }
}

/// Top-left corner of the popup relative to the editor viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopupAnchor {
    pub top: f32,
    pub left: f32,
}

impl PopupAnchor {
    /// Anchor the popup below the caret line, aligned with the start of the
    /// `prefix_chars` characters before `cursor`
    pub fn compute(
        text: &str,
        cursor: usize,
        prefix_chars: usize,
        scroll_top: f32,
        metrics: &LayoutMetrics,
    ) -> Self {
        let before = &text[..floor_char_boundary(text, cursor)];
        let line = before.matches('\n').count() + 1;
        let column = before.rsplit('\n').next().unwrap_or("").chars().count();

        Self {
            top: line as f32 * metrics.line_height - scroll_top + metrics.offset_y,
            left: column.saturating_sub(prefix_chars) as f32 * metrics.char_width + metrics.gutter,
        }
    }
}
