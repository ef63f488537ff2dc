//! Prefix completion against a static dictionary
//!
//! The word before the cursor (letters, digits, `_` and `.`) is matched
//! case-insensitively against the start of every dictionary entry. Entries
//! made of several words are also matched against the same number of words
//! at the end of the cursor's line, so `pragma so` completes to
//! `pragma solidity`.

use crate::buffer::floor_char_boundary;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::debug;

/// Maximum number of suggestions returned for one query
pub const MAX_SUGGESTIONS: usize = 8;

/// Shortest prefix that produces suggestions
pub const MIN_PREFIX_LEN: usize = 2;

const SOLIDITY_ENTRIES: &[&str] = &[
    "pragma solidity", "contract", "function", "constructor", "modifier", "event", "struct",
    "mapping", "address", "uint256", "uint8", "bool", "string", "bytes32", "memory", "storage",
    "calldata", "public", "private", "internal", "external", "view", "pure", "payable",
    "returns", "require", "emit", "revert", "msg.sender", "msg.value", "block.timestamp",
    "block.number", "address(0)", "keccak256", "abi.encodePacked", "override", "virtual",
    "indexed",
];

static SOLIDITY: Lazy<Dictionary> = Lazy::new(|| Dictionary::new(SOLIDITY_ENTRIES.iter().copied()));

/// Ordered set of completion entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    entries: Vec<String>,
}

impl Dictionary {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Built-in Solidity dictionary
    pub fn solidity() -> &'static Dictionary {
        &SOLIDITY
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Complete the word ending at `offset` in `buffer`
    pub fn complete(&self, buffer: &str, offset: usize) -> Completion {
        let cursor = floor_char_boundary(buffer, offset);
        let before = &buffer[..cursor];
        let prefix_start = prefix_start(before);
        let prefix = &before[prefix_start..];

        let mut completion = Completion {
            prefix: prefix.to_string(),
            prefix_start,
            cursor,
            items: Vec::new(),
        };

        if prefix.len() < MIN_PREFIX_LEN {
            return completion;
        }

        let lowered_prefix = prefix.to_lowercase();
        for entry in &self.entries {
            if completion.items.len() == MAX_SUGGESTIONS {
                break;
            }
            let lowered = entry.to_lowercase();
            let start = if is_proper_prefix(&lowered, &lowered_prefix) {
                Some(prefix_start)
            } else {
                phrase_start(before, prefix_start, entry.split(' ').count())
                    .filter(|&start| is_proper_prefix(&lowered, &before[start..].to_lowercase()))
            };

            if let Some(start) = start {
                completion.items.push(CompletionItem {
                    label: entry.clone(),
                    replace: start..cursor,
                });
            }
        }

        debug!(prefix = %prefix, matches = completion.items.len(), "completed prefix");
        completion
    }

    /// Labels of the suggestions for the word ending at `offset`
    pub fn suggest(&self, buffer: &str, offset: usize) -> Vec<String> {
        self.complete(buffer, offset)
            .items
            .into_iter()
            .map(|item| item.label)
            .collect()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::solidity().clone()
    }
}

/// Suggestion labels from the built-in dictionary
pub fn suggest(buffer: &str, offset: usize) -> Vec<String> {
    Dictionary::solidity().suggest(buffer, offset)
}

/// Completion against the built-in dictionary
pub fn complete(buffer: &str, offset: usize) -> Completion {
    Dictionary::solidity().complete(buffer, offset)
}

/// One suggestion and the byte range it replaces when accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    pub label: String,
    pub replace: Range<usize>,
}

/// Result of a completion query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Word before the cursor
    pub prefix: String,
    /// Byte offset where `prefix` starts
    pub prefix_start: usize,
    /// Clamped cursor offset the query ran at
    pub cursor: usize,
    pub items: Vec<CompletionItem>,
}

impl Completion {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.label.as_str()).collect()
    }

    /// Accept the item at `index`
    pub fn apply(&self, buffer: &str, index: usize) -> Option<Applied> {
        self.items.get(index).map(|item| apply_item(buffer, item))
    }
}

/// Buffer contents after accepting a suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub text: String,
    pub cursor: usize,
}

/// Replace the item's range with its label; the cursor lands after the label
pub fn apply_item(buffer: &str, item: &CompletionItem) -> Applied {
    let end = floor_char_boundary(buffer, item.replace.end);
    let start = floor_char_boundary(buffer, item.replace.start.min(end));

    let mut text = String::with_capacity(buffer.len() + item.label.len());
    text.push_str(&buffer[..start]);
    text.push_str(&item.label);
    text.push_str(&buffer[end..]);

    Applied {
        text,
        cursor: start + item.label.len(),
    }
}

fn is_prefix_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

fn is_proper_prefix(entry: &str, fragment: &str) -> bool {
    entry.starts_with(fragment) && entry != fragment
}

/// Byte offset where the trailing prefix token of `before` starts
fn prefix_start(before: &str) -> usize {
    before.trim_end_matches(is_prefix_char).len()
}

/// Start of the last `words` single-space separated words of `before`,
/// the last of which begins at `token_start`
fn phrase_start(before: &str, token_start: usize, words: usize) -> Option<usize> {
    if words < 2 {
        return None;
    }
    let mut start = token_start;
    for _ in 1..words {
        let head = before[..start].strip_suffix(' ')?;
        let word_start = prefix_start(head);
        if word_start == head.len() {
            return None;
        }
        start = word_start;
    }
    Some(start)
}
