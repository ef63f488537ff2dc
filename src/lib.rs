//! Solidity editor core
//!
//! Ties the highlighter, the completion-aware editor and the analysis
//! client together into a [`Workbench`] session.

pub mod workbench;

pub use sol_analyzer as analyzer;
pub use sol_editor as editor;
pub use sol_lexer as lexer;

pub use workbench::{CompileStatus, Workbench};
