//! Highlight colors per token kind

use crate::token::TokenKind;
use serde::Serialize;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build from a `0xrrggbb` literal
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Color assignment for every token kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub keyword: Rgb,
    pub r#type: Rgb,
    pub builtin: Rgb,
    pub constant: Rgb,
    pub classname: Rgb,
    pub function_call: Rgb,
    pub string: Rgb,
    pub number: Rgb,
    pub comment: Rgb,
    pub operator: Rgb,
    pub foreground: Rgb,
}

impl Default for Theme {
    /// Dracula palette
    fn default() -> Self {
        Self {
            keyword: Rgb::from_hex(0xff79c6),
            r#type: Rgb::from_hex(0x8be9fd),
            builtin: Rgb::from_hex(0x50fa7b),
            constant: Rgb::from_hex(0xbd93f9),
            classname: Rgb::from_hex(0xf1fa8c),
            function_call: Rgb::from_hex(0x50fa7b),
            string: Rgb::from_hex(0xf1fa8c),
            number: Rgb::from_hex(0xbd93f9),
            comment: Rgb::from_hex(0x6272a4),
            operator: Rgb::from_hex(0xff79c6),
            foreground: Rgb::from_hex(0xf8f8f2),
        }
    }
}

impl Theme {
    pub fn color(&self, kind: TokenKind) -> Rgb {
        match kind {
            TokenKind::Keyword => self.keyword,
            TokenKind::Type => self.r#type,
            TokenKind::Builtin => self.builtin,
            TokenKind::Constant => self.constant,
            TokenKind::ClassName => self.classname,
            TokenKind::FunctionCall => self.function_call,
            TokenKind::String => self.string,
            TokenKind::Number => self.number,
            TokenKind::Comment => self.comment,
            TokenKind::Operator => self.operator,
            TokenKind::Identifier | TokenKind::Punctuation | TokenKind::Plain => self.foreground,
        }
    }
}
