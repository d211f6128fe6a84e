//! Lines inside array-data, switch, annotation and value array blocks.

use winnow::{Parser as _, combinator::alt};

use crate::{
    directive::BlockKind,
    signature::{reference::parse_reference, type_signature::parse_type_descriptor},
    statement::{Operand, OperandValue, Statement, StatementKind},
    token::TokenKind,
};

use super::{
    class_type,
    cursor::{Cursor, PResult},
};

/// An annotation value, which may continue on the following lines.
pub(super) enum Value<'a> {
    Complete(Operand<'a>),
    /// `{` at end of line; elements follow, closed by a lone `}`.
    OpenArray,
    /// `.subannotation Lfoo;` whose elements follow up to `.end subannotation`.
    SubAnnotation(Operand<'a>),
}

/// `0x1t 0x2t` inside `.array-data`.
pub(super) fn array_entry<'a>(c: &mut Cursor<'a, '_>, stmt: &mut Statement<'a>) -> PResult<()> {
    stmt.kind = StatementKind::Entry;
    stmt.operands.push(c.literal()?);
    while !c.at_end() {
        c.eat_delim(",");
        stmt.operands.push(c.literal()?);
    }
    Ok(())
}

/// `:pswitch_0`
pub(super) fn packed_switch_entry<'a>(c: &mut Cursor<'a, '_>, stmt: &mut Statement<'a>) -> PResult<()> {
    stmt.kind = StatementKind::Entry;
    stmt.operands.push(c.label()?);
    c.expect_end()
}

/// `0x7f -> :sswitch_0`
pub(super) fn sparse_switch_entry<'a>(c: &mut Cursor<'a, '_>, stmt: &mut Statement<'a>) -> PResult<()> {
    stmt.kind = StatementKind::Entry;
    stmt.operands.push(c.literal()?);
    c.expect_delim("->")?;
    stmt.operands.push(c.label()?);
    c.expect_end()
}

/// `name = value` inside an annotation or subannotation.
pub(super) fn annotation_element<'a>(c: &mut Cursor<'a, '_>, stmt: &mut Statement<'a>) -> PResult<()> {
    stmt.kind = StatementKind::Entry;
    let name = match c.peek() {
        Some(t) if t.is_word() => Operand::new(OperandValue::Identifier(t.text), t.span()),
        _ => return Err(c.expected("element name")),
    };
    c.next();
    stmt.operands.push(name);
    c.expect_delim("=")?;
    element_value(c, stmt)?;
    c.expect_end()
}

/// One element of a value array left open by a previous line, or its closing `}`.
pub(super) fn array_element<'a>(c: &mut Cursor<'a, '_>, stmt: &mut Statement<'a>) -> PResult<()> {
    stmt.kind = StatementKind::Entry;
    if c.eat_delim("}") {
        stmt.closes = Some(BlockKind::ValueArray);
        return c.expect_end();
    }
    element_value(c, stmt)?;
    c.eat_delim(",");
    c.expect_end()
}

fn element_value<'a>(c: &mut Cursor<'a, '_>, stmt: &mut Statement<'a>) -> PResult<()> {
    match value(c, true)? {
        Value::Complete(operand) => stmt.operands.push(operand),
        Value::OpenArray => stmt.opens = Some(BlockKind::ValueArray),
        Value::SubAnnotation(ty) => {
            stmt.operands.push(ty);
            stmt.opens = Some(BlockKind::SubAnnotation);
        }
    }
    Ok(())
}

/// Reads an encoded value. With `allow_open` false the value must end on this line.
pub(super) fn value<'a>(c: &mut Cursor<'a, '_>, allow_open: bool) -> PResult<Value<'a>> {
    let Some(t) = c.peek() else {
        return Err(c.expected("value"));
    };
    let span = t.span();
    let operand =
        |value: OperandValue<'a>| -> PResult<Value<'a>> { Ok(Value::Complete(Operand::new(value, span))) };

    match t.kind {
        TokenKind::Number | TokenKind::HexNumber => return Ok(Value::Complete(c.literal()?)),
        TokenKind::String if t.text.starts_with('\'') => {
            c.next();
            return operand(OperandValue::Char(&t.text[1..t.text.len() - 1]));
        }
        TokenKind::String => return Ok(Value::Complete(c.string()?)),
        _ => {}
    }

    match t.text {
        "null" => {
            c.next();
            return operand(OperandValue::Null);
        }
        "true" | "false" => {
            c.next();
            return operand(OperandValue::Boolean(t.text == "true"));
        }
        ".enum" => {
            c.next();
            let (reference, ref_span) = c.structured("enum field reference", parse_reference())?;
            return Ok(Value::Complete(Operand::new(
                OperandValue::Enum(reference),
                span.to(ref_span),
            )));
        }
        ".subannotation" if allow_open => {
            c.next();
            return Ok(Value::SubAnnotation(class_type(c)?));
        }
        "{" => return array(c, allow_open),
        _ => {}
    }

    let (value, value_span) = c.structured(
        "value",
        alt((
            parse_reference().map(OperandValue::Reference),
            parse_type_descriptor().map(OperandValue::Type),
        )),
    )?;
    Ok(Value::Complete(Operand::new(value, value_span)))
}

/// `{ a, b }` on one line, or `{` opening a multi-line array.
fn array<'a>(c: &mut Cursor<'a, '_>, allow_open: bool) -> PResult<Value<'a>> {
    let open = c.expect_delim("{")?;
    if c.at_end() {
        if allow_open {
            return Ok(Value::OpenArray);
        }
        return Err(c.expected("`}`"));
    }

    let mut elements = Vec::new();
    if !c.peek_delim("}") {
        loop {
            match value(c, false)? {
                Value::Complete(operand) => elements.push(operand),
                _ => return Err(c.error("nested arrays must be closed on the same line")),
            }
            if !c.eat_delim(",") {
                break;
            }
        }
    }
    let close = c.expect_delim("}")?;
    Ok(Value::Complete(Operand::new(
        OperandValue::Array(elements),
        open.to(close),
    )))
}
