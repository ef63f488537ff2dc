//! Editing core for the Solidity editor
//!
//! Everything the text area needs besides highlighting: dictionary
//! completion, the buffer and caret, key handling with auto-pairing and
//! indentation, popup placement and the bundled templates. Nothing here
//! performs I/O.

pub mod anchor;
pub mod buffer;
pub mod completion;
pub mod keys;
pub mod templates;

pub use anchor::{LayoutMetrics, PopupAnchor};
pub use buffer::{line_count, CursorPosition, EditorBuffer};
pub use completion::{
    apply_item, complete, suggest, Applied, Completion, CompletionItem, Dictionary,
    MAX_SUGGESTIONS, MIN_PREFIX_LEN,
};
pub use keys::{Editor, Key, KeyOutcome, SuggestionPopup, DEFAULT_TAB_WIDTH};
pub use templates::Template;
