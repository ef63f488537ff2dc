//! Lexer for Solidity highlighting
//!
//! Classifies a single line of text into tokens. The scan is total: every
//! character ends up in exactly one token, and unterminated strings or
//! comments simply run to the end of the line.

use crate::{
    token::{Span, Token, TokenKind},
    vocabulary,
};

/// Classify one line of source text
pub fn classify(line: &str) -> Vec<Token<'_>> {
    Lexer::new(line).tokenize()
}

/// Classify every line of a buffer, splitting on `\n`
pub fn classify_lines(text: &str) -> Vec<Vec<Token<'_>>> {
    text.split('\n').map(classify).collect()
}

/// Single-line lexical classifier
pub struct Lexer<'a> {
    line: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given line
    pub fn new(line: &'a str) -> Self {
        Lexer { line, position: 0 }
    }

    /// Tokenize the entire line
    pub fn tokenize(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    /// Get current character
    fn current_char(&self) -> Option<char> {
        self.line[self.position..].chars().next()
    }

    /// Peek at next character
    fn peek_char(&self) -> Option<char> {
        let mut chars = self.line[self.position..].chars();
        chars.next();
        chars.next()
    }

    /// Advance past the current character
    fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.position += c.len_utf8();
        }
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current_char() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    fn make_token(&self, kind: TokenKind, start: usize) -> Token<'a> {
        Token::new(kind, &self.line[start..self.position], Span::new(start, self.position))
    }

    /// Get the next token, or `None` at end of line
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let start = self.position;
        let c = self.current_char()?;

        let token = match c {
            '/' if self.peek_char() == Some('/') => {
                self.position = self.line.len();
                self.make_token(TokenKind::Comment, start)
            }
            '"' | '\'' => self.read_string(c),
            c if c.is_ascii_digit() => {
                self.advance_while(is_number_continue);
                self.make_token(TokenKind::Number, start)
            }
            c if is_ident_start(c) => self.read_word(),
            c if is_operator_char(c) => {
                self.advance_while(is_operator_char);
                self.make_token(TokenKind::Operator, start)
            }
            c if is_punctuation(c) => {
                self.advance();
                self.make_token(TokenKind::Punctuation, start)
            }
            _ => {
                self.advance();
                self.make_token(TokenKind::Plain, start)
            }
        };

        Some(token)
    }

    /// Read a quoted string up to and including the matching quote
    fn read_string(&mut self, quote: char) -> Token<'a> {
        let start = self.position;
        self.advance();
        self.advance_while(|c| c != quote);
        // Closing quote, if the line has one
        self.advance();
        self.make_token(TokenKind::String, start)
    }

    /// Read an identifier-like word and classify it
    fn read_word(&mut self) -> Token<'a> {
        let start = self.position;
        self.advance_while(is_ident_continue);
        let word = &self.line[start..self.position];

        let mut kind = classify_word(word);
        if kind == TokenKind::Identifier && self.followed_by_paren() {
            kind = TokenKind::FunctionCall;
        }
        self.make_token(kind, start)
    }

    /// Whether the next non-space character is `(`
    fn followed_by_paren(&self) -> bool {
        self.line[self.position..].trim_start_matches(' ').starts_with('(')
    }
}

/// Classify a bare word by vocabulary precedence
pub fn classify_word(word: &str) -> TokenKind {
    if vocabulary::is_keyword(word) {
        TokenKind::Keyword
    } else if vocabulary::is_type(word) {
        TokenKind::Type
    } else if vocabulary::is_builtin(word) {
        TokenKind::Builtin
    } else if vocabulary::is_constant(word) {
        TokenKind::Constant
    } else if word.starts_with(|c: char| c.is_ascii_uppercase()) {
        TokenKind::ClassName
    } else {
        TokenKind::Identifier
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn is_number_continue(c: char) -> bool {
    c.is_ascii_hexdigit() || matches!(c, 'x' | 'X' | '_' | '.')
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '=' | '!' | '<' | '>' | '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '~')
}

fn is_punctuation(c: char) -> bool {
    matches!(c, '{' | '}' | '(' | ')' | '[' | ']' | ';' | ':' | ',' | '.')
}
