use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Register,
    Number,
    HexNumber,
    String,
    Comment,
    Delimiter,
    /// A label name, without its leading `:`.
    Label,
    Whitespace,
    /// Unlexable text, always running to the end of the line.
    Error,
}

/// Display style of a token for syntax highlighters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Keyword,
    Comment,
    Identifier,
    String,
    Number,
    Text,
}

impl TokenKind {
    pub fn classification(&self) -> Classification {
        match self {
            TokenKind::Keyword => Classification::Keyword,
            TokenKind::Comment => Classification::Comment,
            TokenKind::Identifier | TokenKind::Register | TokenKind::Label => {
                Classification::Identifier
            }
            TokenKind::String => Classification::String,
            TokenKind::Number | TokenKind::HexNumber => Classification::Number,
            TokenKind::Delimiter | TokenKind::Whitespace | TokenKind::Error => Classification::Text,
        }
    }

    /// Trivia never takes part in a statement's operands.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// Declared width of a numeric literal, taken from its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralWidth {
    /// `t`
    Byte,
    /// `s`
    Short,
    Int,
    /// `L`
    Long,
    /// `f`
    Float,
    /// `d`
    Double,
}

impl LiteralWidth {
    pub fn from_suffix(c: char) -> Option<Self> {
        Some(match c {
            't' | 'T' => LiteralWidth::Byte,
            's' | 'S' => LiteralWidth::Short,
            'l' | 'L' => LiteralWidth::Long,
            'f' | 'F' => LiteralWidth::Float,
            'd' | 'D' => LiteralWidth::Double,
            _ => return None,
        })
    }

    pub fn bytes(&self) -> usize {
        match self {
            LiteralWidth::Byte => 1,
            LiteralWidth::Short => 2,
            LiteralWidth::Int | LiteralWidth::Float => 4,
            LiteralWidth::Long | LiteralWidth::Double => 8,
        }
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, LiteralWidth::Float | LiteralWidth::Double)
    }
}

/// Zero-based line, byte column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A span within a single line, `end` exclusive.
    pub fn on_line(line: usize, start: usize, end: usize) -> Self {
        Self::new(Position::new(line, start), Position::new(line, end))
    }

    /// The smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}

/// One lexeme of a line.
///
/// `start` and `len` are byte offsets into the line the token came from, so
/// `&line[token.start..token.end()] == token.text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
    pub len: usize,
    pub line: usize,
    /// Set on numeric literals carrying a width suffix.
    pub width: Option<LiteralWidth>,
    /// Grouping punctuation: kept for spans, never an operand.
    pub transient: bool,
}

impl<'a> Token<'a> {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn span(&self) -> Span {
        Span::on_line(self.line, self.start, self.end())
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_delimiter(&self, text: &str) -> bool {
        self.kind == TokenKind::Delimiter && self.text == text
    }

    /// Identifier-like words, including keywords such as `public` or `null`.
    pub fn is_word(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier | TokenKind::Keyword) && !self.text.starts_with('.')
    }

    /// What went wrong, for `Error` tokens.
    pub fn error_message(&self) -> Option<String> {
        if self.kind != TokenKind::Error {
            return None;
        }
        Some(match self.text.chars().next() {
            Some('"') => "unterminated string literal".to_string(),
            Some('\'') => "unterminated character literal".to_string(),
            Some(c) => format!("unexpected character `{c}`"),
            None => "unexpected end of line".to_string(),
        })
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_cover() {
        let a = Span::on_line(0, 4, 8);
        let b = Span::on_line(2, 0, 11);
        let c = a.to(b);
        assert_eq!(c.start, Position::new(0, 4));
        assert_eq!(c.end, Position::new(2, 11));
        assert!(c.contains(Position::new(1, 50)));
        assert!(!a.contains(Position::new(0, 8)));
    }

    #[test]
    fn classification() {
        assert_eq!(TokenKind::HexNumber.classification(), Classification::Number);
        assert_eq!(TokenKind::Register.classification(), Classification::Identifier);
        assert_eq!(TokenKind::Delimiter.classification(), Classification::Text);
    }

    #[test]
    fn suffixes() {
        assert_eq!(LiteralWidth::from_suffix('t'), Some(LiteralWidth::Byte));
        assert_eq!(LiteralWidth::from_suffix('L'), Some(LiteralWidth::Long));
        assert_eq!(LiteralWidth::from_suffix('x'), None);
        assert_eq!(LiteralWidth::Short.bytes(), 2);
    }
}
