use std::str::FromStr;

use winnow::{ModalParser, error::InputError};

use crate::{
    error::Diagnostic,
    literal::Literal,
    register::{Register, RegisterRange},
    statement::{Operand, OperandValue},
    token::{Span, Token, TokenKind},
};

pub(crate) type PResult<T> = Result<T, Diagnostic>;

/// Walks the significant tokens of one line.
///
/// Descriptors and references are not split into meaningful tokens by the
/// lexer, so [`Cursor::structured`] runs a winnow grammar over the raw line
/// text instead and then skips the tokens it covered.
pub(crate) struct Cursor<'a, 't> {
    line: &'a str,
    line_no: usize,
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'a, 't> Cursor<'a, 't> {
    pub fn new(line: &'a str, line_no: usize, tokens: &'t [Token<'a>]) -> Self {
        Self {
            line,
            line_no,
            tokens,
            pos: 0,
        }
    }

    pub fn peek(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos)
    }

    pub fn peek_nth(&self, n: usize) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos + n)
    }

    pub fn next(&mut self) -> Option<&'t Token<'a>> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Zero-width span just past the last token.
    fn eol_span(&self) -> Span {
        let end = self
            .tokens
            .last()
            .map(Token::end)
            .unwrap_or_else(|| self.line.trim_end().len());
        Span::on_line(self.line_no, end, end)
    }

    /// Error at the current token, or at end of line.
    pub fn error(&self, message: impl Into<String>) -> Diagnostic {
        let span = self.peek().map(Token::span).unwrap_or_else(|| self.eol_span());
        Diagnostic::syntax(span, message)
    }

    pub fn expected(&self, what: &str) -> Diagnostic {
        match self.peek() {
            Some(t) => self.error(format!("expected {what}, found `{}`", t.text)),
            None => self.error(format!("expected {what} before end of line")),
        }
    }

    pub fn peek_delim(&self, text: &str) -> bool {
        self.peek().is_some_and(|t| t.is_delimiter(text))
    }

    pub fn eat_delim(&mut self, text: &str) -> bool {
        if self.peek_delim(text) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect_delim(&mut self, text: &str) -> PResult<Span> {
        match self.peek() {
            Some(t) if t.is_delimiter(text) => {
                self.pos += 1;
                Ok(t.span())
            }
            _ => Err(self.expected(&format!("`{text}`"))),
        }
    }

    /// Consumes a bare word such as `local` or `runtime`.
    pub fn eat_word(&mut self, word: &str) -> bool {
        if self.peek().is_some_and(|t| t.is_word() && t.text == word) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect_end(&self) -> PResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(t) => Err(self.error(format!("unexpected `{}`, expected end of line", t.text))),
        }
    }

    pub fn register(&mut self) -> PResult<Operand<'a>> {
        let (register, span) = self.bare_register()?;
        Ok(Operand::new(OperandValue::Register(register), span))
    }

    fn bare_register(&mut self) -> PResult<(Register, Span)> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::Register => {
                let register = Register::from_str(t.text).map_err(|e| self.error(e.to_string()))?;
                self.pos += 1;
                Ok((register, t.span()))
            }
            _ => Err(self.expected("register")),
        }
    }

    /// `{v0, v1, v2}`
    pub fn register_list(&mut self) -> PResult<Operand<'a>> {
        let open = self.expect_delim("{")?;
        let mut registers = Vec::new();
        if !self.peek_delim("}") {
            loop {
                registers.push(self.bare_register()?.0);
                if !self.eat_delim(",") {
                    break;
                }
            }
        }
        let close = self.expect_delim("}")?;
        Ok(Operand::new(
            OperandValue::RegisterList(registers),
            open.to(close),
        ))
    }

    /// `{v0 .. v5}`; a single register or an empty pair of braces is accepted too.
    pub fn register_range(&mut self) -> PResult<Operand<'a>> {
        let open = self.expect_delim("{")?;
        if let Some(close) = self.peek().filter(|t| t.is_delimiter("}")).map(Token::span) {
            self.pos += 1;
            return Ok(Operand::new(
                OperandValue::RegisterList(Vec::new()),
                open.to(close),
            ));
        }
        let (start, _) = self.bare_register()?;
        let end = if self.eat_delim("..") {
            self.bare_register()?.0
        } else {
            start
        };
        let close = self.expect_delim("}")?;
        Ok(Operand::new(
            OperandValue::RegisterRange(RegisterRange { start, end }),
            open.to(close),
        ))
    }

    pub fn literal(&mut self) -> PResult<Operand<'a>> {
        let (literal, span) = self.bare_literal()?;
        Ok(Operand::new(OperandValue::Literal(literal), span))
    }

    pub fn bare_literal(&mut self) -> PResult<(Literal, Span)> {
        match self.peek() {
            Some(t) if matches!(t.kind, TokenKind::Number | TokenKind::HexNumber) => {
                let literal = Literal::parse(t.text).map_err(|e| self.error(e.to_string()))?;
                self.pos += 1;
                Ok((literal, t.span()))
            }
            _ => Err(self.expected("literal")),
        }
    }

    pub fn is_string(&self) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == TokenKind::String && t.text.starts_with('"'))
    }

    /// A double-quoted string; the operand holds the text between the quotes.
    pub fn string(&mut self) -> PResult<Operand<'a>> {
        match self.peek() {
            Some(t) if self.is_string() => {
                self.pos += 1;
                let inner = &t.text[1..t.text.len() - 1];
                Ok(Operand::new(OperandValue::String(inner), t.span()))
            }
            _ => Err(self.expected("string")),
        }
    }

    /// `:name`
    pub fn label(&mut self) -> PResult<Operand<'a>> {
        let (name, span) = self.bare_label()?;
        Ok(Operand::new(OperandValue::Label(name), span))
    }

    pub fn bare_label(&mut self) -> PResult<(&'a str, Span)> {
        match (self.peek(), self.peek_nth(1)) {
            (Some(colon), Some(name)) if colon.is_delimiter(":") && name.kind == TokenKind::Label => {
                self.pos += 2;
                Ok((name.text, colon.span().to(name.span())))
            }
            _ => Err(self.expected("label")),
        }
    }

    /// `kind@0x12`
    pub fn index(&mut self) -> PResult<Operand<'a>> {
        let kind = match (self.peek(), self.peek_nth(1)) {
            (Some(k), Some(at)) if k.is_word() && at.is_delimiter("@") => k,
            _ => return Err(self.expected("index such as `field@0x10`")),
        };
        self.pos += 2;
        let (literal, span) = self.bare_literal()?;
        let value = literal
            .as_int::<u64>()
            .ok_or_else(|| Diagnostic::syntax(span, format!("invalid index `{literal}`")))?;
        Ok(Operand::new(
            OperandValue::Index {
                kind: kind.text,
                value,
            },
            kind.span().to(span),
        ))
    }

    /// Runs `parser` on the raw text starting at the current token and skips
    /// the tokens it consumed. A token cut in half by the match is an error.
    pub fn structured<T, P>(&mut self, what: &str, mut parser: P) -> PResult<(T, Span)>
    where
        P: ModalParser<&'a str, T, InputError<&'a str>>,
    {
        let Some(first) = self.peek() else {
            return Err(self.expected(what));
        };
        let mut input = &self.line[first.start..];
        let value = parser
            .parse_next(&mut input)
            .map_err(|_| self.expected(what))?;
        let end = self.line.len() - input.len();

        while let Some(t) = self.peek() {
            if t.start >= end {
                break;
            }
            if t.end() > end {
                return Err(Diagnostic::syntax(
                    Span::on_line(self.line_no, first.start, t.end()),
                    format!("malformed {what}"),
                ));
            }
            self.pos += 1;
        }
        Ok((value, Span::on_line(self.line_no, first.start, end)))
    }
}
