//! Line parser and document assembly.
//!
//! [`Parser::parse_line`] turns one line into a [`Statement`], using the
//! enclosing blocks to decide how body lines are read. [`Parser::parse_document`]
//! drives it over a whole file and nests block contents.

use std::{ops::Range, str::FromStr};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::Catalog,
    directive::{BlockKind, BlockStack, Directive},
    error::Diagnostic,
    lexer::Tokenizer,
    statement::{Operand, OperandValue, Statement, StatementKind},
    token::{Span, Token, TokenKind},
};

mod body;
mod cursor;
mod directive;
mod document;
mod instruction;

use cursor::{Cursor, PResult};

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Accept instructions that only exist in optimized dex files.
    pub odex: bool,
    /// Emit `Blank` statements for empty lines from [`Parser::parse_document`].
    pub keep_blank_lines: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            odex: true,
            keep_blank_lines: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Parser<'c> {
    catalog: &'c Catalog,
    tokenizer: Tokenizer<'c>,
    options: ParseOptions,
}

impl<'c> Parser<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_options(catalog, ParseOptions::default())
    }

    pub fn with_options(catalog: &'c Catalog, options: ParseOptions) -> Self {
        Self {
            catalog,
            tokenizer: Tokenizer::new(catalog),
            options,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn tokenizer(&self) -> &Tokenizer<'c> {
        &self.tokenizer
    }

    /// Parses a single line inside the blocks given by `stack`.
    ///
    /// # Examples
    ///
    /// ```
    ///  use smali_syntax::{BlockStack, Catalog, Parser, StatementKind};
    ///
    ///  let parser = Parser::new(Catalog::builtin());
    ///  let stmt = parser.parse_line("const/4 v1, 0x2", &BlockStack::new());
    ///  assert_eq!(stmt.kind, StatementKind::Instruction);
    ///  assert_eq!(stmt.mnemonic(), Some("const/4"));
    ///  assert_eq!(stmt.operands.len(), 2);
    /// ```
    pub fn parse_line<'a>(&self, line: &'a str, stack: &BlockStack) -> Statement<'a>
    where
        'c: 'a,
    {
        self.parse_line_at(line, 0, stack)
    }

    /// Like [`Parser::parse_line`], with spans reported on line `line_no`.
    pub fn parse_line_at<'a>(&self, line: &'a str, line_no: usize, stack: &BlockStack) -> Statement<'a>
    where
        'c: 'a,
    {
        let tokens = self.tokenizer.tokenize_line(line, line_no).into_tokens();
        let significant: Vec<Token<'a>> = tokens
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .cloned()
            .collect();
        let comment = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Comment)
            .map(|t| t.text);
        let span = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => first.span().to(last.span()),
            _ => Span::on_line(line_no, 0, 0),
        };

        let mut stmt = Statement::new(StatementKind::Blank, tokens, span);
        stmt.comment = comment;

        if significant.is_empty() {
            if comment.is_some() {
                stmt.kind = StatementKind::Comment;
            }
            return stmt;
        }

        if let Some(bad) = significant.iter().find(|t| t.kind == TokenKind::Error) {
            stmt.kind = StatementKind::Error;
            stmt.error = Some(Diagnostic::lex(
                bad.span(),
                bad.error_message().unwrap_or_default(),
            ));
            return stmt;
        }

        let mut cursor = Cursor::new(line, line_no, &significant);
        if let Err(diagnostic) = self.dispatch(&mut cursor, &mut stmt, stack) {
            trace!("{}: {}", line_no + 1, diagnostic.message);
            stmt.kind = StatementKind::Error;
            stmt.error = Some(diagnostic);
        } else {
            trace!("{}: {:?}", line_no + 1, stmt.kind);
        }
        stmt
    }

    fn dispatch<'a>(
        &self,
        c: &mut Cursor<'a, '_>,
        stmt: &mut Statement<'a>,
        stack: &BlockStack,
    ) -> PResult<()>
    where
        'c: 'a,
    {
        let Some(head) = c.peek() else {
            return Ok(());
        };
        let innermost = stack.innermost();
        let is_directive = head.kind == TokenKind::Keyword && head.text.starts_with('.');

        // `.enum` and `.subannotation` start values inside an array
        let value_keyword = matches!(head.text, ".enum" | ".subannotation");
        if is_directive && !(innermost == Some(BlockKind::ValueArray) && value_keyword) {
            return self.directive(c, stmt);
        }

        match innermost {
            Some(BlockKind::ArrayData) => return body::array_entry(c, stmt),
            Some(BlockKind::PackedSwitch) => return body::packed_switch_entry(c, stmt),
            Some(BlockKind::SparseSwitch) => return body::sparse_switch_entry(c, stmt),
            Some(kind) if kind.holds_elements() => return body::annotation_element(c, stmt),
            Some(BlockKind::ValueArray) => return body::array_element(c, stmt),
            _ => {}
        }

        if head.text.starts_with('.') && head.kind == TokenKind::Identifier {
            return Err(c.error(format!("unknown directive `{}`", head.text)));
        }

        if head.is_delimiter(":") {
            stmt.kind = StatementKind::Label;
            let label = c.label()?;
            stmt.operands.push(label);
            return c.expect_end();
        }

        if head.kind == TokenKind::Keyword {
            if let Some(entry) = self.catalog.lookup(head.text).filter(|e| !e.is_directive()) {
                return self.instruction(c, stmt, entry);
            }
        }

        if head.is_word() {
            return Err(c.error(format!("unknown instruction `{}`", head.text)));
        }
        Err(c.error(format!("unexpected `{}` at start of statement", head.text)))
    }

    /// Parses `text` line by line, nesting block contents under their opening statement.
    ///
    /// Problems never abort the parse: they are attached to the statements
    /// concerned and listed by [`crate::Document::diagnostics`].
    ///
    /// # Examples
    ///
    /// ```
    ///  use smali_syntax::{Catalog, Directive, Parser, StatementKind};
    ///
    ///  let parser = Parser::new(Catalog::builtin());
    ///  let doc = parser.parse_document(".method public foo()V\n    return-void\n.end method\n");
    ///  assert_eq!(doc.statements.len(), 1);
    ///  let method = &doc.statements[0];
    ///  assert_eq!(method.kind, StatementKind::Directive(Directive::Method));
    ///  assert_eq!(method.children.len(), 1);
    ///  assert_eq!(method.children[0].mnemonic(), Some("return-void"));
    /// ```
    pub fn parse_document<'a>(&self, text: &'a str) -> crate::statement::Document<'a>
    where
        'c: 'a,
    {
        let mut builder = document::Builder::default();
        for (line_no, line) in text.lines().enumerate() {
            let stmt = self.parse_line_at(line, line_no, &builder.stack());
            if stmt.kind == StatementKind::Blank && !self.options.keep_blank_lines {
                continue;
            }
            builder.push(stmt);
        }
        builder.finish()
    }

    /// Flat statements for the lines in `lines`, without nesting. Lines before
    /// the range are only read to find the enclosing blocks.
    pub fn parse_range<'a>(&self, text: &'a str, lines: Range<usize>) -> Vec<Statement<'a>>
    where
        'c: 'a,
    {
        let mut stack = self.block_stack_at(text, lines.start);
        text.lines()
            .enumerate()
            .skip(lines.start)
            .take(lines.len())
            .map(|(line_no, line)| {
                let stmt = self.parse_line_at(line, line_no, &stack);
                document::track(&mut stack, &stmt);
                stmt
            })
            .collect()
    }

    /// The blocks open at the start of line `line`.
    pub fn block_stack_at(&self, text: &str, line: usize) -> BlockStack {
        let mut stack = BlockStack::new();
        for (line_no, l) in text.lines().enumerate().take(line) {
            let stmt = self.parse_line_at(l, line_no, &stack);
            document::track(&mut stack, &stmt);
        }
        stack
    }
}

/// Class descriptor operand of `.class`, `.super`, `.implements` and the like.
fn class_type<'a>(c: &mut Cursor<'a, '_>) -> PResult<Operand<'a>> {
    let (ty, span) = c.structured(
        "class descriptor",
        crate::signature::type_signature::parse_type_descriptor(),
    )?;
    if ty.is_array() || ty.class_path().is_none() {
        return Err(Diagnostic::syntax(
            span,
            format!("expected class descriptor, found `{ty}`"),
        ));
    }
    Ok(Operand::new(OperandValue::Type(ty), span))
}

fn directive_of(stmt: &Statement<'_>) -> Option<Directive> {
    stmt.opcode
        .and_then(|e| e.directive())
        .or_else(|| stmt.keyword.and_then(|k| Directive::from_str(k).ok()))
}

#[cfg(test)]
mod tests;
