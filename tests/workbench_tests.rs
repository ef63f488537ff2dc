//! Workbench compile cycle against scripted analyzers

use async_trait::async_trait;
use sol_ide::{
    analyzer::{AnalysisReport, AnalyzeError, Analyzer, LogLevel},
    editor::{Editor, Key, KeyOutcome},
    CompileStatus, Workbench,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// Returns a fixed outcome and counts calls
struct Scripted {
    outcome: Result<AnalysisReport, AnalyzeError>,
    calls: Arc<AtomicUsize>,
}

impl Scripted {
    fn boxed(outcome: Result<AnalysisReport, AnalyzeError>) -> (Box<dyn Analyzer>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let analyzer = Scripted {
            outcome,
            calls: calls.clone(),
        };
        (Box::new(analyzer), calls)
    }
}

#[async_trait]
impl Analyzer for Scripted {
    async fn analyze(&self, _source: &str) -> sol_ide::analyzer::Result<AnalysisReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

fn compiled_report() -> AnalysisReport {
    AnalysisReport {
        success: true,
        contract_name: "Counter".into(),
        pragma: "^0.8.0".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_successful_compile() -> anyhow::Result<()> {
    let (analyzer, calls) = Scripted::boxed(Ok(compiled_report()));
    let mut bench = Workbench::new(analyzer);
    assert_eq!(bench.active_template(), Some("counter"));
    assert_eq!(bench.status(), CompileStatus::Ready);

    assert!(bench.compile().await);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(bench.status(), CompileStatus::Compiled);
    assert_eq!(bench.status().label(), "Compiled OK ✔");
    assert_eq!(bench.report().map(|r| r.contract_name.as_str()), Some("Counter"));
    assert_eq!(
        bench.logs().last().map(|l| l.text.as_str()),
        Some("AI compilation & audit complete.")
    );
    assert!(!bench.is_compiling());
    Ok(())
}

#[tokio::test]
async fn test_failed_compile() {
    let report = AnalysisReport {
        success: true,
        contract_name: "Counter".into(),
        errors: vec!["line 9: undeclared identifier".into()],
        ..Default::default()
    };
    let (analyzer, _) = Scripted::boxed(Ok(report));
    let mut bench = Workbench::new(analyzer);

    assert!(bench.compile().await);
    assert_eq!(bench.status(), CompileStatus::Failed);
    assert_eq!(bench.logs()[0].text, "Compilation FAILED — Counter");
    assert_eq!(bench.logs()[1].text, "line 9: undeclared identifier");
    assert!(bench.report().is_some());
}

#[tokio::test]
async fn test_analyzer_error() {
    let (analyzer, _) = Scripted::boxed(Err(AnalyzeError::api(529, "Overloaded")));
    let mut bench = Workbench::new(analyzer);

    assert!(bench.compile().await);
    assert_eq!(bench.status(), CompileStatus::Error);
    assert_eq!(bench.logs().len(), 1);
    assert_eq!(bench.logs()[0].text, "Compiler error: Overloaded");
    assert_eq!(bench.logs()[0].level, LogLevel::Error);
    assert!(bench.report().is_none());
    assert!(bench.last_error().is_some_and(AnalyzeError::is_retryable));
}

#[tokio::test]
async fn test_rejected_request_is_not_retryable() {
    let (analyzer, _) = Scripted::boxed(Err(AnalyzeError::api(400, "prompt is too long")));
    let mut bench = Workbench::new(analyzer);

    bench.compile().await;
    assert_eq!(bench.last_error(), Some(&AnalyzeError::api(400, "prompt is too long")));
    assert!(!bench.last_error().unwrap().is_retryable());

    bench.load_template("blank");
    assert!(bench.last_error().is_none());
}

#[tokio::test]
async fn test_blank_buffer_is_noop() {
    let (analyzer, calls) = Scripted::boxed(Ok(compiled_report()));
    let mut bench = Workbench::with_editor(Editor::new("  \n\t\n"), analyzer);

    assert!(!bench.compile().await);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(bench.status(), CompileStatus::Ready);
    assert!(bench.logs().is_empty());
}

#[test]
fn test_overlapping_compile_is_refused() {
    let (analyzer, _) = Scripted::boxed(Ok(compiled_report()));
    let mut bench = Workbench::new(analyzer);

    let source = bench.begin_compile().unwrap();
    assert!(source.contains("contract Counter"));
    assert_eq!(bench.status(), CompileStatus::Compiling);
    assert_eq!(bench.logs().len(), 2);
    assert!(bench.begin_compile().is_none());

    bench.finish_compile(Ok(compiled_report()));
    assert_eq!(bench.status(), CompileStatus::Compiled);
    assert!(bench.begin_compile().is_some());
}

#[tokio::test]
async fn test_load_template_resets_session() {
    let (analyzer, _) = Scripted::boxed(Ok(compiled_report()));
    let mut bench = Workbench::new(analyzer);
    bench.compile().await;
    assert!(!bench.logs().is_empty());

    assert!(bench.load_template("erc20"));
    assert_eq!(bench.active_template(), Some("erc20"));
    assert!(bench.source().contains("contract"));
    assert_eq!(bench.status(), CompileStatus::Ready);
    assert!(bench.logs().is_empty());
    assert!(bench.report().is_none());
    assert!(bench.editor().popup().is_none());

    assert!(!bench.load_template("nope"));
    assert_eq!(bench.active_template(), Some("erc20"));
}

#[test]
fn test_keys_and_highlighting() {
    let (analyzer, _) = Scripted::boxed(Ok(compiled_report()));
    let mut bench = Workbench::with_editor(Editor::new(""), analyzer);

    for c in "addr".chars() {
        bench.handle_key(Key::Char(c));
    }
    assert!(bench.editor().popup().is_some());
    assert_eq!(bench.handle_key(Key::Tab), KeyOutcome::Accepted);
    assert_eq!(bench.source(), "address");
    assert_eq!(bench.handle_key(Key::CtrlEnter), KeyOutcome::CompileRequested);

    let lines = bench.highlighted();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0][0].text, "address");
}
