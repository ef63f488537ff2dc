//! Command implementations for the sol CLI

pub mod compile;
pub mod complete;
pub mod highlight;
pub mod templates;
pub mod tokens;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub use compile::{compile_command, CompileOptions};
pub use complete::{complete_command, Cursor};
pub use highlight::highlight_command;
pub use templates::{new_command, templates_command};
pub use tokens::tokens_command;

/// Read a source file for any command
pub(crate) fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
