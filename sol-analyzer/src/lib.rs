//! Contract analysis through an external AI service
//!
//! There is no compiler in this crate. Source text is sent to a large
//! language model together with a fixed auditing instruction, and the JSON
//! it answers with is read defensively into an [`AnalysisReport`]. The
//! [`Analyzer`] trait is the seam: the editor only ever talks to it, so
//! tests can substitute a canned implementation.

pub mod client;
pub mod config;
pub mod console;
pub mod error;
pub mod panels;
pub mod prompt;
pub mod report;
pub mod response;

pub use client::{Analyzer, AnthropicAnalyzer};
pub use config::AnalyzerConfig;
pub use console::{error_log, intro_logs, render_logs, LogEntry, LogLevel};
pub use error::{AnalyzeError, Result};
pub use panels::{abi_rows, info_rows, AbiRow};
pub use report::{AnalysisReport, EventInfo, FunctionInfo, GasEstimates, StateVarInfo};
