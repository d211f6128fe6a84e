use crate::{
    catalog::{OpcodeEntry, OperandKind},
    error::Diagnostic,
    signature::{
        Member,
        method_signature::parse_prototype,
        reference::parse_reference,
        type_signature::parse_type_descriptor,
    },
    statement::{Operand, OperandValue, Statement, StatementKind},
};

use super::{
    Parser,
    cursor::{Cursor, PResult},
};

impl<'c> Parser<'c> {
    /// One routine for every instruction: walk the operand slots of the
    /// entry's shape, separated by commas.
    pub(super) fn instruction<'a>(
        &self,
        c: &mut Cursor<'a, '_>,
        stmt: &mut Statement<'a>,
        entry: &'c OpcodeEntry,
    ) -> PResult<()>
    where
        'c: 'a,
    {
        let Some(head) = c.next() else {
            return Err(c.expected("instruction"));
        };
        stmt.kind = StatementKind::Instruction;
        stmt.keyword = Some(head.text);
        stmt.opcode = Some(entry);

        let expecting = |d: Diagnostic| d.expecting(entry.syntax_name);

        if entry.is_odex_only() && !self.options.odex {
            return Err(expecting(Diagnostic::syntax(
                head.span(),
                format!("`{}` is only valid in odex files", entry.mnemonic),
            )));
        }
        let Some(shape) = entry.shape() else {
            return Err(expecting(Diagnostic::syntax(
                head.span(),
                format!("`{}` is not an instruction", head.text),
            )));
        };

        for (i, kind) in shape.operands().iter().enumerate() {
            if i > 0 {
                c.expect_delim(",").map_err(expecting)?;
            }
            let operand = operand(c, *kind).map_err(expecting)?;
            stmt.operands.push(operand);
        }
        c.expect_end().map_err(expecting)
    }
}

fn operand<'a>(c: &mut Cursor<'a, '_>, kind: OperandKind) -> PResult<Operand<'a>> {
    match kind {
        OperandKind::Register => c.register(),
        OperandKind::RegisterList => c.register_list(),
        OperandKind::RegisterRange => c.register_range(),
        OperandKind::Literal => c.literal(),
        OperandKind::String => c.string(),
        OperandKind::Label => c.label(),
        OperandKind::Index => c.index(),
        OperandKind::Type => {
            let (ty, span) = c.structured("type descriptor", parse_type_descriptor())?;
            Ok(Operand::new(OperandValue::Type(ty), span))
        }
        OperandKind::Proto => {
            let (proto, span) = c.structured("method prototype", parse_prototype())?;
            Ok(Operand::new(OperandValue::Prototype(proto), span))
        }
        OperandKind::Field | OperandKind::Method => {
            let what = kind.describe();
            let (reference, span) = c.structured(what, parse_reference())?;
            let is_field = matches!(reference.member, Member::Field { .. });
            if is_field != (kind == OperandKind::Field) {
                return Err(Diagnostic::syntax(
                    span,
                    format!("expected {what}, found `{reference}`"),
                ));
            }
            Ok(Operand::new(OperandValue::Reference(reference), span))
        }
    }
}
