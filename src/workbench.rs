//! Editor session: buffer, active template and the last compile

use serde::Serialize;
use sol_analyzer::{
    console::{error_log, intro_logs, render_logs},
    AnalysisReport, AnalyzeError, Analyzer, LogEntry,
};
use sol_editor::{templates, Editor, Key, KeyOutcome};
use sol_lexer::{classify_lines, Token};
use std::fmt;
use tracing::{debug, info, warn};

/// Status bar state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompileStatus {
    Ready,
    Compiling,
    Failed,
    Compiled,
    Error,
}

impl CompileStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CompileStatus::Ready => "Ready",
            CompileStatus::Compiling => "AI Compiling...",
            CompileStatus::Failed => "Compilation Failed",
            CompileStatus::Compiled => "Compiled OK ✔",
            CompileStatus::Error => "Error",
        }
    }

    /// Indicator dot color
    pub fn color(&self) -> &'static str {
        match self {
            CompileStatus::Ready => "#6272a4",
            CompileStatus::Compiling => "#ffd166",
            CompileStatus::Failed | CompileStatus::Error => "#ff5555",
            CompileStatus::Compiled => "#50fa7b",
        }
    }
}

impl fmt::Display for CompileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub struct Workbench {
    editor: Editor,
    analyzer: Box<dyn Analyzer>,
    active_template: Option<&'static str>,
    status: CompileStatus,
    logs: Vec<LogEntry>,
    report: Option<AnalysisReport>,
    last_error: Option<AnalyzeError>,
    compiling: bool,
}

impl fmt::Debug for Workbench {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workbench")
            .field("active_template", &self.active_template)
            .field("status", &self.status)
            .field("logs", &self.logs.len())
            .field("compiling", &self.compiling)
            .finish_non_exhaustive()
    }
}

impl Workbench {
    /// Open on the default template
    pub fn new(analyzer: Box<dyn Analyzer>) -> Self {
        let template = templates::default_template();
        Self::with_editor(Editor::new(template.source), analyzer).active(template.key)
    }

    /// Open on an existing editor, with no template selected
    pub fn with_editor(editor: Editor, analyzer: Box<dyn Analyzer>) -> Self {
        Self {
            editor,
            analyzer,
            active_template: None,
            status: CompileStatus::Ready,
            logs: Vec::new(),
            report: None,
            last_error: None,
            compiling: false,
        }
    }

    fn active(mut self, key: &'static str) -> Self {
        self.active_template = Some(key);
        self
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn source(&self) -> &str {
        self.editor.text()
    }

    pub fn active_template(&self) -> Option<&'static str> {
        self.active_template
    }

    pub fn status(&self) -> CompileStatus {
        self.status
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    /// Error of the last compile, when it ended in [`CompileStatus::Error`]
    pub fn last_error(&self) -> Option<&AnalyzeError> {
        self.last_error.as_ref()
    }

    pub fn is_compiling(&self) -> bool {
        self.compiling
    }

    /// Highlight tokens for every line of the buffer
    pub fn highlighted(&self) -> Vec<Vec<Token<'_>>> {
        classify_lines(self.editor.text())
    }

    /// Replace the buffer with a bundled template and reset the session
    pub fn load_template(&mut self, key: &str) -> bool {
        let Some(template) = templates::find(key) else {
            warn!(key, "unknown template");
            return false;
        };
        self.editor.load(template.source);
        self.active_template = Some(template.key);
        self.logs.clear();
        self.report = None;
        self.last_error = None;
        self.status = CompileStatus::Ready;
        debug!(template = template.key, "loaded template");
        true
    }

    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        self.editor.handle_key(key)
    }

    /// Enter the compiling state and hand out the source to analyze
    ///
    /// Returns `None` when the buffer is blank or a compile is already
    /// running.
    pub fn begin_compile(&mut self) -> Option<String> {
        if self.compiling || self.editor.text().trim().is_empty() {
            return None;
        }
        self.compiling = true;
        self.status = CompileStatus::Compiling;
        self.logs = intro_logs();
        self.report = None;
        self.last_error = None;
        Some(self.editor.text().to_string())
    }

    /// Record the outcome of a compile started with [`Self::begin_compile`]
    pub fn finish_compile(&mut self, outcome: sol_analyzer::Result<AnalysisReport>) {
        match outcome {
            Ok(report) => {
                self.status = if report.is_failure() {
                    CompileStatus::Failed
                } else {
                    CompileStatus::Compiled
                };
                self.logs = render_logs(&report);
                info!(status = %self.status, contract = %report.contract_name, "compile finished");
                self.report = Some(report);
            }
            Err(err) => {
                warn!(error = %err, "compile failed");
                self.status = CompileStatus::Error;
                self.logs = vec![error_log(&err)];
                self.last_error = Some(err);
            }
        }
        self.compiling = false;
    }

    /// Send the buffer to the analyzer and record the result
    ///
    /// Returns `false` without doing anything when the buffer is blank or a
    /// compile is already running.
    pub async fn compile(&mut self) -> bool {
        let Some(source) = self.begin_compile() else {
            return false;
        };
        let outcome = self.analyzer.analyze(&source).await;
        self.finish_compile(outcome);
        true
    }
}
