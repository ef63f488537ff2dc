//! Solidity lexical classifier
//!
//! Splits one line of Solidity source into highlight tokens. There is no
//! grammar behind it: words are classified against fixed vocabularies and
//! everything else by character class. The scan never fails and the token
//! texts always concatenate back to the input line.

pub mod lexer;
pub mod theme;
pub mod token;
pub mod vocabulary;

pub use lexer::{classify, classify_lines, classify_word, Lexer};
pub use theme::{Rgb, Theme};
pub use token::{Span, Token, TokenKind};
