//! Token dump

use super::read_source;
use anyhow::{Context, Result};
use serde::Serialize;
use sol_lexer::{classify_lines, Token};
use std::path::Path;

#[derive(Serialize)]
struct LineTokens<'a> {
    line: usize,
    tokens: Vec<Token<'a>>,
}

pub fn tokens_command(input: &Path, json: bool) -> Result<()> {
    let source = read_source(input)?;
    let lines: Vec<LineTokens> = classify_lines(&source)
        .into_iter()
        .enumerate()
        .map(|(i, tokens)| LineTokens {
            line: i + 1,
            tokens,
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&lines).context("Failed to serialize tokens")?;
        println!("{}", out);
        return Ok(());
    }

    for line in &lines {
        for token in &line.tokens {
            println!(
                "{:>4}:{:<4} {:<12} {:?}",
                line.line,
                token.span.start,
                token.kind.as_str(),
                token.text
            );
        }
    }
    Ok(())
}
