use std::str::FromStr;

use crate::{
    directive::{BlockKind, Directive},
    error::Diagnostic,
    modifier::{AccessFlags, AnnotationVisibility},
    signature::{
        Member,
        method_signature::parse_method_signature,
        reference::{parse_field_member, parse_reference},
        type_signature::parse_type_descriptor,
    },
    statement::{Operand, OperandValue, Statement, StatementKind},
    token::{Span, TokenKind},
};

use super::{
    Parser, body, class_type,
    cursor::{Cursor, PResult},
};

impl<'c> Parser<'c> {
    pub(super) fn directive<'a>(&self, c: &mut Cursor<'a, '_>, stmt: &mut Statement<'a>) -> PResult<()>
    where
        'c: 'a,
    {
        let Some(head) = c.next() else {
            return Err(c.expected("directive"));
        };
        let directive =
            Directive::from_str(head.text).map_err(|e| Diagnostic::syntax(head.span(), e.to_string()))?;
        stmt.kind = StatementKind::Directive(directive);
        stmt.keyword = Some(head.text);
        stmt.opcode = self.catalog.lookup(head.text);
        stmt.opens = directive.opens_block();

        let result = operands(c, stmt, directive).and_then(|()| c.expect_end());
        match (result, stmt.opcode) {
            (Err(d), Some(entry)) => Err(d.expecting(entry.syntax_name)),
            (result, _) => result,
        }
    }
}

fn operands<'a>(c: &mut Cursor<'a, '_>, stmt: &mut Statement<'a>, directive: Directive) -> PResult<()> {
    let ops = &mut stmt.operands;
    match directive {
        Directive::Class => {
            flags(c, ops);
            ops.push(class_type(c)?);
        }
        Directive::Super | Directive::Implements | Directive::SubAnnotation => {
            ops.push(class_type(c)?);
        }
        Directive::Source => ops.push(c.string()?),
        Directive::Field => {
            flags(c, ops);
            let (member, span) = c.structured("field name and type", parse_field_member())?;
            ops.push(Operand::new(OperandValue::Member(member), span));
            if c.eat_delim("=") {
                match body::value(c, false)? {
                    body::Value::Complete(value) => ops.push(value),
                    _ => return Err(c.error("field initializers cannot span lines")),
                }
            }
        }
        Directive::Method => {
            flags(c, ops);
            let (signature, span) = c.structured("method signature", parse_method_signature())?;
            ops.push(Operand::new(
                OperandValue::Member(Member::Method(signature)),
                span,
            ));
        }
        Directive::Locals | Directive::Registers => ops.push(count(c, "register count")?),
        Directive::Line => ops.push(count(c, "line number")?),
        Directive::Param => {
            ops.push(c.register()?);
            if c.eat_delim(",") {
                ops.push(c.string()?);
            }
        }
        Directive::Annotation => {
            let visibility = match c.peek() {
                Some(t) if t.is_word() => AnnotationVisibility::from_str(t.text)
                    .map(|v| Operand::new(OperandValue::Visibility(v), t.span()))
                    .map_err(|_| c.expected("annotation visibility"))?,
                _ => return Err(c.expected("annotation visibility")),
            };
            c.next();
            ops.push(visibility);
            ops.push(class_type(c)?);
        }
        Directive::Enum => {
            let (reference, span) = c.structured("enum field reference", parse_reference())?;
            ops.push(Operand::new(OperandValue::Enum(reference), span));
        }
        Directive::Catch => {
            ops.push(class_type(c)?);
            ops.push(label_range(c)?);
            ops.push(c.label()?);
        }
        Directive::CatchAll => {
            ops.push(label_range(c)?);
            ops.push(c.label()?);
        }
        Directive::ArrayData => {
            let width = c.literal()?;
            let valid = width
                .as_literal()
                .and_then(|l| l.as_int::<u8>())
                .is_some_and(|w| matches!(w, 1 | 2 | 4 | 8));
            if !valid {
                return Err(Diagnostic::syntax(
                    width.span,
                    "array element width must be 1, 2, 4 or 8",
                ));
            }
            ops.push(width);
        }
        Directive::PackedSwitch => ops.push(c.literal()?),
        Directive::SparseSwitch | Directive::Prologue | Directive::Epilogue => {}
        Directive::Local => {
            ops.push(c.register()?);
            if c.eat_delim(",") {
                match c.peek() {
                    Some(t) if t.is_word() && t.text == "null" => {
                        c.next();
                        ops.push(Operand::new(OperandValue::Null, t.span()));
                    }
                    _ => ops.push(c.string()?),
                }
                c.expect_delim(":")?;
                let (ty, span) = c.structured("type descriptor", parse_type_descriptor())?;
                ops.push(Operand::new(OperandValue::Type(ty), span));
                if c.eat_delim(",") {
                    ops.push(c.string()?);
                }
            }
        }
        Directive::End | Directive::EndLocal => {
            if c.eat_word("local") {
                stmt.kind = StatementKind::Directive(Directive::EndLocal);
                ops.push(c.register()?);
                return Ok(());
            }
            let kind = match c.peek() {
                Some(t) if t.kind == TokenKind::Keyword => BlockKind::from_end_word(t.text),
                _ => None,
            };
            let Some(kind) = kind else {
                return Err(c.expected("block kind such as `method`"));
            };
            c.next();
            stmt.closes = Some(kind);
            // elements of a value array are comma separated
            if kind == BlockKind::SubAnnotation {
                c.eat_delim(",");
            }
        }
        Directive::RestartLocal => {
            if !c.eat_word("local") {
                return Err(c.expected("`local`"));
            }
            ops.push(c.register()?);
        }
    }
    Ok(())
}

/// Leading access flags. A flag word directly followed by `:` or `(` is the
/// member name instead.
fn flags<'a>(c: &mut Cursor<'a, '_>, ops: &mut Vec<Operand<'a>>) {
    let mut flags = AccessFlags::empty();
    let mut span = None;
    while let Some(t) = c.peek() {
        let is_name = c
            .peek_nth(1)
            .is_some_and(|n| n.is_delimiter(":") || n.is_delimiter("("));
        let Ok(flag) = AccessFlags::from_str(t.text) else {
            break;
        };
        if !t.is_word() || is_name {
            break;
        }
        flags |= flag;
        span = Some(span.map_or(t.span(), |s: Span| s.to(t.span())));
        c.next();
    }
    if let Some(span) = span {
        ops.push(Operand::new(OperandValue::Flags(flags), span));
    }
}

/// A non-negative count such as `.locals 3`.
fn count<'a>(c: &mut Cursor<'a, '_>, what: &str) -> PResult<Operand<'a>> {
    let operand = c.literal().map_err(|_| c.expected(what))?;
    if operand.as_literal().and_then(|l| l.as_int::<u32>()).is_none() {
        return Err(Diagnostic::syntax(operand.span, format!("invalid {what}")));
    }
    Ok(operand)
}

/// `{:try_start_0 .. :try_end_0}`
fn label_range<'a>(c: &mut Cursor<'a, '_>) -> PResult<Operand<'a>> {
    let open = c.expect_delim("{")?;
    let (start, _) = c.bare_label()?;
    c.expect_delim("..")?;
    let (end, _) = c.bare_label()?;
    let close = c.expect_delim("}")?;
    Ok(Operand::new(
        OperandValue::LabelRange { start, end },
        open.to(close),
    ))
}
