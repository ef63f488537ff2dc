//! Token definitions for syntax highlighting

use serde::Serialize;
use std::fmt;

/// Highlight class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Keyword,
    Type,
    Builtin,
    Constant,
    #[serde(rename = "classname")]
    ClassName,
    Identifier,
    FunctionCall,
    String,
    Number,
    Comment,
    Operator,
    Punctuation,
    Plain,
}

impl TokenKind {
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Keyword,
        TokenKind::Type,
        TokenKind::Builtin,
        TokenKind::Constant,
        TokenKind::ClassName,
        TokenKind::Identifier,
        TokenKind::FunctionCall,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Comment,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Plain,
    ];

    /// Stable lowercase name, used in token dumps
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Type => "type",
            TokenKind::Builtin => "builtin",
            TokenKind::Constant => "constant",
            TokenKind::ClassName => "classname",
            TokenKind::Identifier => "identifier",
            TokenKind::FunctionCall => "functionCall",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Comment => "comment",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Plain => "plain",
        }
    }

    /// Returns true for kinds produced from an identifier-like word
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            TokenKind::Keyword
                | TokenKind::Type
                | TokenKind::Builtin
                | TokenKind::Constant
                | TokenKind::ClassName
                | TokenKind::Identifier
                | TokenKind::FunctionCall
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte range of a token within its line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A classified slice of one source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_are_unique() {
        let mut names: Vec<&str> = TokenKind::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TokenKind::ALL.len());
    }

    #[test]
    fn test_serialized_kind_matches_name() {
        for kind in TokenKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
