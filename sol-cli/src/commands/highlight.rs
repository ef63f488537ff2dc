//! Colored source listing

use super::read_source;
use crate::utils::paint;
use anyhow::Result;
use colored::*;
use sol_lexer::{classify_lines, Theme};
use std::path::Path;

pub fn highlight_command(input: &Path) -> Result<()> {
    let source = read_source(input)?;
    for line in render(&source, &Theme::default()) {
        println!("{}", line);
    }
    Ok(())
}

/// One output line per source line, prefixed with a right-aligned number
pub fn render(source: &str, theme: &Theme) -> Vec<String> {
    let lines = classify_lines(source);
    let width = lines.len().to_string().len();

    lines
        .iter()
        .enumerate()
        .map(|(i, tokens)| {
            let number = format!("{:>width$}", i + 1, width = width);
            let body: String = tokens
                .iter()
                .map(|token| paint(token.text, theme.color(token.kind)).to_string())
                .collect();
            format!("{} {}", number.dimmed(), body)
        })
        .collect()
}
