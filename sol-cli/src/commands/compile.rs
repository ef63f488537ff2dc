//! AI compile and audit

use super::read_source;
use crate::config::CliConfig;
use crate::utils::{paint, parse_hex, print_header, ProgressIndicator};
use anyhow::{bail, Context, Result};
use colored::*;
use sol_analyzer::{
    abi_rows, info_rows, AnalysisReport, AnalyzeError, AnthropicAnalyzer, LogEntry,
};
use sol_editor::Editor;
use sol_ide::{CompileStatus, Workbench};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct CompileOptions {
    pub abi: bool,
    pub info: bool,
    pub json: bool,
}

pub async fn compile_command(input: &Path, config: &CliConfig, options: CompileOptions) -> Result<()> {
    let source = read_source(input)?;
    if source.trim().is_empty() {
        bail!("{} is empty", input.display());
    }

    let analyzer = AnthropicAnalyzer::from_env(config.analyzer.clone())
        .context("Failed to set up the analyzer")?;
    let mut bench = Workbench::with_editor(Editor::new(source), Box::new(analyzer));

    let progress = ProgressIndicator::new(CompileStatus::Compiling.label());
    if !bench.compile().await {
        progress.finish_error("Nothing to compile");
        bail!("{} is empty", input.display());
    }

    let status = bench.status();
    if status == CompileStatus::Compiled {
        progress.finish(status.label());
    } else {
        progress.finish_error(status.label());
    }

    if options.json {
        if let Some(report) = bench.report() {
            let out = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            println!("{}", out);
        }
    } else {
        print_logs(bench.logs());
        if let Some(report) = bench.report() {
            if options.info {
                print_info(report);
            }
            if options.abi {
                print_abi(report);
            }
        }
    }

    match (status, bench.last_error()) {
        (CompileStatus::Compiled, _) => Ok(()),
        (CompileStatus::Failed, _) => bail!("Compilation failed"),
        (_, Some(err)) => bail!("{}", error_message(err)),
        _ => bail!("Compiler error"),
    }
}

fn error_message(err: &AnalyzeError) -> String {
    if err.is_retryable() {
        format!("Compiler error: {} (temporary failure, try again)", err)
    } else {
        format!("Compiler error: {}", err)
    }
}

fn print_logs(logs: &[LogEntry]) {
    for log in logs {
        let text = match parse_hex(log.level.color()) {
            Some(color) => paint(&log.text, color).to_string(),
            None => log.text.clone(),
        };
        println!("{} {} {}", log.time.dimmed(), log.icon, text);
    }
}

fn print_info(report: &AnalysisReport) {
    print_header("Analysis Report");
    for (key, value) in info_rows(report) {
        println!("  {:<12} {}", key.dimmed(), value);
    }
}

fn print_abi(report: &AnalysisReport) {
    print_header("ABI");
    let rows = abi_rows(report);
    if rows.is_empty() {
        println!("  {}", "No entries".dimmed());
    }
    for row in rows {
        println!("  {:<12} {}", row.badge().magenta(), row);
    }
}
