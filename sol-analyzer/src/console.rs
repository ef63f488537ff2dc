//! Console log lines for a compile run

use crate::report::AnalysisReport;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Success,
    Error,
    Warning,
    Info,
    Plain,
}

impl LogLevel {
    /// Display color as `#rrggbb`
    pub fn color(&self) -> &'static str {
        match self {
            LogLevel::Success => "#50fa7b",
            LogLevel::Error => "#ff5555",
            LogLevel::Warning => "#ffb86c",
            LogLevel::Info => "#8be9fd",
            LogLevel::Plain => "#f8f8f2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub level: LogLevel,
    pub icon: String,
    pub text: String,
    /// Local wall-clock time, `HH:MM:SS`
    pub time: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, icon: &str, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            icon: icon.to_string(),
            text: text.into(),
            time: Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {} {}", self.time, self.icon, self.text)
    }
}

/// Lines shown while a compile is in flight
pub fn intro_logs() -> Vec<LogEntry> {
    vec![
        LogEntry::new(LogLevel::Info, "🤖", "Claude AI Solidity Compiler starting..."),
        LogEntry::new(
            LogLevel::Info,
            "⬡",
            "Sending code for deep analysis & security audit...",
        ),
    ]
}

/// Single line for a compile that never produced a report
pub fn error_log(message: impl fmt::Display) -> LogEntry {
    LogEntry::new(LogLevel::Error, "✖", format!("Compiler error: {}", message))
}

/// Console lines describing a report
pub fn render_logs(report: &AnalysisReport) -> Vec<LogEntry> {
    if report.is_failure() {
        render_failure(report)
    } else {
        render_success(report)
    }
}

fn render_failure(report: &AnalysisReport) -> Vec<LogEntry> {
    let name = if report.contract_name.is_empty() {
        "Unknown"
    } else {
        report.contract_name.as_str()
    };

    let mut logs = vec![LogEntry::new(
        LogLevel::Error,
        "✖",
        format!("Compilation FAILED — {}", name),
    )];
    logs.extend(
        report
            .errors
            .iter()
            .map(|e| LogEntry::new(LogLevel::Error, "  ✖", e.as_str())),
    );
    logs.extend(
        report
            .warnings
            .iter()
            .map(|w| LogEntry::new(LogLevel::Warning, "  ⚠", w.as_str())),
    );
    logs
}

fn render_success(report: &AnalysisReport) -> Vec<LogEntry> {
    let mut logs = vec![
        LogEntry::new(
            LogLevel::Success,
            "✔",
            format!("Contract \"{}\" compiled successfully!", report.contract_name),
        ),
        LogEntry::new(LogLevel::Success, "✔", format!("Pragma: {}", report.pragma)),
    ];

    if let Some(license) = &report.license {
        logs.push(LogEntry::new(
            LogLevel::Plain,
            "📄",
            format!("License: {}", license),
        ));
    }

    logs.push(LogEntry::new(
        LogLevel::Info,
        "📋",
        format!(
            "Functions: {} | Events: {} | State Vars: {} | Modifiers: {}",
            report.functions.len(),
            report.events.len(),
            report.state_vars.len(),
            report.modifiers.len()
        ),
    ));

    if let Some(deployment) = &report.gas_estimates.deployment {
        logs.push(LogEntry::new(
            LogLevel::Info,
            "⛽",
            format!("Estimated deployment gas: {}", deployment),
        ));
    }

    logs.extend(
        report
            .warnings
            .iter()
            .map(|w| LogEntry::new(LogLevel::Warning, "⚠", w.as_str())),
    );

    if report.security_issues.is_empty() {
        logs.push(LogEntry::new(
            LogLevel::Success,
            "🔒",
            "Security audit passed — no issues found.",
        ));
    } else {
        logs.push(LogEntry::new(
            LogLevel::Error,
            "🔒",
            format!("{} security issue(s) found:", report.security_issues.len()),
        ));
        logs.extend(
            report
                .security_issues
                .iter()
                .map(|s| LogEntry::new(LogLevel::Error, "  ›", s.as_str())),
        );
    }

    if !report.suggestions.is_empty() {
        logs.push(LogEntry::new(LogLevel::Plain, "💡", "Suggestions:"));
        logs.extend(
            report
                .suggestions
                .iter()
                .map(|s| LogEntry::new(LogLevel::Plain, "  ›", s.as_str())),
        );
    }

    if !report.summary.is_empty() {
        logs.push(LogEntry::new(LogLevel::Info, "📝", report.summary.as_str()));
    }

    logs.push(LogEntry::new(
        LogLevel::Success,
        "⬡",
        "AI compilation & audit complete.",
    ));
    logs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(logs: &[LogEntry]) -> Vec<&str> {
        logs.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_failure_lines() {
        let report = AnalysisReport {
            success: false,
            errors: vec!["line 4: expected ';'".into()],
            warnings: vec!["unused variable".into()],
            ..Default::default()
        };
        let logs = render_logs(&report);
        assert_eq!(
            texts(&logs),
            vec![
                "Compilation FAILED — Unknown",
                "line 4: expected ';'",
                "unused variable"
            ]
        );
        assert_eq!(logs[1].level, LogLevel::Error);
        assert_eq!(logs[2].level, LogLevel::Warning);
    }

    #[test]
    fn test_minimal_success_lines() {
        let report = AnalysisReport {
            success: true,
            contract_name: "Counter".into(),
            pragma: "^0.8.0".into(),
            ..Default::default()
        };
        assert_eq!(
            texts(&render_logs(&report)),
            vec![
                "Contract \"Counter\" compiled successfully!",
                "Pragma: ^0.8.0",
                "Functions: 0 | Events: 0 | State Vars: 0 | Modifiers: 0",
                "Security audit passed — no issues found.",
                "AI compilation & audit complete.",
            ]
        );
    }

    #[test]
    fn test_time_format() {
        let entry = LogEntry::new(LogLevel::Info, "i", "x");
        assert_eq!(entry.time.len(), 8);
        assert_eq!(entry.time.as_bytes()[2], b':');
        assert_ne!(entry.id, LogEntry::new(LogLevel::Info, "i", "x").id);
    }

    #[test]
    fn test_error_log() {
        let entry = error_log("HTTP 500");
        assert_eq!(entry.text, "Compiler error: HTTP 500");
        assert_eq!(entry.level, LogLevel::Error);
    }
}
