//! Terminal output helpers

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use sol_lexer::Rgb;
use std::time::Duration;

/// Spinner shown while waiting on the analyzer
pub struct ProgressIndicator {
    bar: ProgressBar,
}

impl ProgressIndicator {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ");
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(format!("{} {}", "✓".green(), message));
    }

    pub fn finish_error(&self, message: &str) {
        self.bar.finish_with_message(format!("{} {}", "✗".red(), message));
    }
}

/// Parse a `#rrggbb` color
pub fn parse_hex(color: &str) -> Option<Rgb> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().map(Rgb::from_hex)
}

/// Paint text with a theme color
pub fn paint(text: &str, color: Rgb) -> ColoredString {
    text.truecolor(color.0, color.1, color.2)
}

/// Print a styled header
pub fn print_header(title: &str) {
    println!();
    println!("{}", title.bold().underline());
    println!("{}", "─".repeat(title.chars().count()));
}

pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#50fa7b"), Some(Rgb(0x50, 0xfa, 0x7b)));
        assert_eq!(parse_hex("50fa7b"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }
}
