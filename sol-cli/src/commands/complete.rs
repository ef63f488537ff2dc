//! Completion query

use super::read_source;
use anyhow::{Context, Result};
use colored::*;
use sol_editor::{complete, CursorPosition};
use std::path::Path;
use tracing::debug;

/// Where the cursor sits in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Offset(usize),
    Position { line: usize, column: usize },
    End,
}

impl Cursor {
    /// Byte offset of the cursor in `text`
    pub fn resolve(self, text: &str) -> usize {
        match self {
            Cursor::Offset(offset) => offset,
            Cursor::Position { line, column } => CursorPosition { line, column }.to_offset(text),
            Cursor::End => text.len(),
        }
    }
}

pub fn complete_command(input: &Path, cursor: Cursor, json: bool) -> Result<()> {
    let source = read_source(input)?;
    let offset = cursor.resolve(&source);
    let completion = complete(&source, offset);
    debug!(offset, prefix = %completion.prefix, count = completion.items.len(), "completion");

    if json {
        let out =
            serde_json::to_string_pretty(&completion).context("Failed to serialize completion")?;
        println!("{}", out);
        return Ok(());
    }

    if completion.is_empty() {
        println!("{}", "No suggestions".dimmed());
        return Ok(());
    }

    let position = CursorPosition::of(&source, completion.cursor);
    println!(
        "{} {} ({})",
        "Prefix:".bold(),
        completion.prefix.cyan(),
        position
    );
    for (i, label) in completion.labels().iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).dimmed(), label);
    }
    Ok(())
}
