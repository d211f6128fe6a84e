//! The opcode and directive catalog.
//!
//! Every instruction mnemonic and directive keyword the parser accepts has
//! one row here, carrying its operand shape plus the text shown by
//! completion and hover.

use std::collections::HashMap;

use bitflags::bitflags;
use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::{directive::Directive, error::SmaliError};

mod opcodes;

/// Operand lists of the Dalvik instruction formats, as they appear in smali.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperandShape {
    None,
    Reg,
    RegReg,
    RegRegReg,
    RegLiteral,
    RegRegLiteral,
    RegString,
    RegType,
    RegRegType,
    RegField,
    RegRegField,
    RegLabel,
    RegRegLabel,
    Label,
    RegListType,
    RegRangeType,
    RegListMethod,
    RegRangeMethod,
    RegListMethodProto,
    RegRangeMethodProto,
    RegProto,
    RegListIndex,
    RegRangeIndex,
    RegRegIndex,
}

/// A single operand slot of an [`OperandShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperandKind {
    Register,
    /// `{v0, v1, v2}`
    RegisterList,
    /// `{v0 .. v5}`
    RegisterRange,
    Literal,
    String,
    Type,
    Field,
    Method,
    Label,
    /// `field@0x12`, `vtable@0x3`, `inline@0x4`
    Index,
    Proto,
}

impl OperandKind {
    pub fn describe(&self) -> &'static str {
        match self {
            OperandKind::Register => "register",
            OperandKind::RegisterList => "register list",
            OperandKind::RegisterRange => "register range",
            OperandKind::Literal => "literal",
            OperandKind::String => "string",
            OperandKind::Type => "type descriptor",
            OperandKind::Field => "field reference",
            OperandKind::Method => "method reference",
            OperandKind::Label => "label",
            OperandKind::Index => "index",
            OperandKind::Proto => "method prototype",
        }
    }
}

impl OperandShape {
    pub fn operands(&self) -> &'static [OperandKind] {
        use OperandKind as K;

        match self {
            OperandShape::None => &[],
            OperandShape::Reg => &[K::Register],
            OperandShape::RegReg => &[K::Register, K::Register],
            OperandShape::RegRegReg => &[K::Register, K::Register, K::Register],
            OperandShape::RegLiteral => &[K::Register, K::Literal],
            OperandShape::RegRegLiteral => &[K::Register, K::Register, K::Literal],
            OperandShape::RegString => &[K::Register, K::String],
            OperandShape::RegType => &[K::Register, K::Type],
            OperandShape::RegRegType => &[K::Register, K::Register, K::Type],
            OperandShape::RegField => &[K::Register, K::Field],
            OperandShape::RegRegField => &[K::Register, K::Register, K::Field],
            OperandShape::RegLabel => &[K::Register, K::Label],
            OperandShape::RegRegLabel => &[K::Register, K::Register, K::Label],
            OperandShape::Label => &[K::Label],
            OperandShape::RegListType => &[K::RegisterList, K::Type],
            OperandShape::RegRangeType => &[K::RegisterRange, K::Type],
            OperandShape::RegListMethod => &[K::RegisterList, K::Method],
            OperandShape::RegRangeMethod => &[K::RegisterRange, K::Method],
            OperandShape::RegListMethodProto => &[K::RegisterList, K::Method, K::Proto],
            OperandShape::RegRangeMethodProto => &[K::RegisterRange, K::Method, K::Proto],
            OperandShape::RegProto => &[K::Register, K::Proto],
            OperandShape::RegListIndex => &[K::RegisterList, K::Index],
            OperandShape::RegRangeIndex => &[K::RegisterRange, K::Index],
            OperandShape::RegRegIndex => &[K::Register, K::Register, K::Index],
        }
    }

    /// Human readable operand list, e.g. `register, register, field reference`.
    pub fn describe(&self) -> String {
        let operands = self.operands();
        if operands.is_empty() {
            return "no operands".to_string();
        }
        operands
            .iter()
            .map(OperandKind::describe)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Syntax {
    Instruction(OperandShape),
    Directive(Directive),
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct OpcodeFlags: u8 {
        /// Only valid in optimized dex files.
        const ODEX_ONLY = 0x01;
        const BRANCH = 0x02;
        const INVOKE = 0x04;
        /// Operates on 64-bit register pairs.
        const WIDE = 0x08;
        const DIRECTIVE = 0x10;
        /// Opens a block closed by `.end`.
        const BLOCK = 0x20;
    }
}

/// A raw catalog row, before the mnemonic and flags are derived.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeDef {
    pub code: &'static str,
    pub syntax_name: &'static str,
    pub syntax: Syntax,
    pub description: &'static str,
    pub example: &'static str,
    pub odex: bool,
}

impl OpcodeDef {
    pub const fn op(
        code: &'static str,
        syntax_name: &'static str,
        shape: OperandShape,
        description: &'static str,
        example: &'static str,
    ) -> Self {
        Self {
            code,
            syntax_name,
            syntax: Syntax::Instruction(shape),
            description,
            example,
            odex: false,
        }
    }

    pub const fn odex(
        code: &'static str,
        syntax_name: &'static str,
        shape: OperandShape,
        description: &'static str,
        example: &'static str,
    ) -> Self {
        Self {
            code,
            syntax_name,
            syntax: Syntax::Instruction(shape),
            description,
            example,
            odex: true,
        }
    }

    pub const fn directive(
        syntax_name: &'static str,
        directive: Directive,
        description: &'static str,
        example: &'static str,
    ) -> Self {
        Self {
            code: "",
            syntax_name,
            syntax: Syntax::Directive(directive),
            description,
            example,
            odex: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpcodeEntry {
    /// Two hex digits, empty for directives.
    pub code: &'static str,
    /// Mnemonic with operand placeholders, e.g. `move vx,vy`.
    pub syntax_name: &'static str,
    /// `syntax_name` up to the first space.
    pub mnemonic: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub syntax: Syntax,
    pub flags: OpcodeFlags,
}

impl OpcodeEntry {
    fn from_def(def: &OpcodeDef) -> Result<Self, SmaliError> {
        let mnemonic = def.syntax_name.split(' ').next().unwrap_or_default();
        if mnemonic.is_empty() {
            return Err(SmaliError::EmptySyntaxName {
                code: def.code.to_string(),
            });
        }
        if let Syntax::Instruction(_) = def.syntax {
            if def.code.len() != 2 || u8::from_str_radix(def.code, 16).is_err() {
                return Err(SmaliError::InvalidCode {
                    syntax_name: def.syntax_name.to_string(),
                    code: def.code.to_string(),
                });
            }
        }

        let mut flags = OpcodeFlags::empty();
        match def.syntax {
            Syntax::Directive(directive) => {
                flags |= OpcodeFlags::DIRECTIVE;
                if directive.opens_block().is_some()
                    || matches!(directive, Directive::Field | Directive::Param)
                {
                    flags |= OpcodeFlags::BLOCK;
                }
            }
            Syntax::Instruction(_) => {
                if def.odex {
                    flags |= OpcodeFlags::ODEX_ONLY;
                }
                if mnemonic.starts_with("goto")
                    || mnemonic.starts_with("if-")
                    || mnemonic.ends_with("-switch")
                {
                    flags |= OpcodeFlags::BRANCH;
                }
                if mnemonic.starts_with("invoke-") || mnemonic.starts_with("execute-inline") {
                    flags |= OpcodeFlags::INVOKE;
                }
                if mnemonic.contains("-wide") || mnemonic.contains("long") || mnemonic.contains("double")
                {
                    flags |= OpcodeFlags::WIDE;
                }
            }
        }

        Ok(Self {
            code: def.code,
            syntax_name: def.syntax_name,
            mnemonic,
            description: def.description,
            example: def.example,
            syntax: def.syntax,
            flags,
        })
    }

    /// The instruction byte, `None` for directives.
    pub fn opcode(&self) -> Option<u8> {
        match self.syntax {
            Syntax::Instruction(_) => u8::from_str_radix(self.code, 16).ok(),
            Syntax::Directive(_) => None,
        }
    }

    pub fn shape(&self) -> Option<OperandShape> {
        match self.syntax {
            Syntax::Instruction(shape) => Some(shape),
            Syntax::Directive(_) => None,
        }
    }

    pub fn directive(&self) -> Option<Directive> {
        match self.syntax {
            Syntax::Directive(d) => Some(d),
            Syntax::Instruction(_) => None,
        }
    }

    pub fn is_directive(&self) -> bool {
        self.flags.contains(OpcodeFlags::DIRECTIVE)
    }

    pub fn is_odex_only(&self) -> bool {
        self.flags.contains(OpcodeFlags::ODEX_ONLY)
    }

    /// Placeholder text after the mnemonic, e.g. `vx,vy` for `move vx,vy`.
    pub fn operand_syntax(&self) -> &'static str {
        self.syntax_name
            .split_once(' ')
            .map(|(_, rest)| rest)
            .unwrap_or_default()
    }
}

/// Read-only table of [`OpcodeEntry`] rows keyed by mnemonic.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<OpcodeEntry>,
    by_mnemonic: HashMap<&'static str, usize>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(opcodes::INSTRUCTIONS.iter().chain(opcodes::DIRECTIVES))
        .expect("builtin opcode table is consistent")
});

impl Catalog {
    /// Builds a catalog from raw rows.
    ///
    /// Instructions are ordered by opcode byte, directives follow in the order
    /// given. Fails on an empty syntax name or a repeated mnemonic.
    pub fn new<'r>(rows: impl IntoIterator<Item = &'r OpcodeDef>) -> Result<Self, SmaliError> {
        let mut entries = rows
            .into_iter()
            .map(OpcodeEntry::from_def)
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|e| (e.is_directive(), e.opcode().unwrap_or_default()));

        let mut by_mnemonic = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if by_mnemonic.insert(entry.mnemonic, idx).is_some() {
                return Err(SmaliError::DuplicateMnemonic(entry.mnemonic.to_string()));
            }
        }
        debug!("opcode catalog built with {} entries", entries.len());

        Ok(Self {
            entries,
            by_mnemonic,
        })
    }

    /// The catalog of all Dalvik instructions and smali directives, built on first use.
    ///
    /// # Examples
    ///
    /// ```
    ///  use smali_syntax::Catalog;
    ///
    ///  let entry = Catalog::builtin().lookup("move-object").unwrap();
    ///  assert_eq!(entry.opcode(), Some(0x07));
    /// ```
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn lookup(&self, mnemonic: &str) -> Option<&OpcodeEntry> {
        self.by_mnemonic.get(mnemonic).map(|&idx| &self.entries[idx])
    }

    pub fn all(&self) -> &[OpcodeEntry] {
        &self.entries
    }

    pub fn instructions(&self) -> impl Iterator<Item = &OpcodeEntry> {
        self.entries.iter().filter(|e| !e.is_directive())
    }

    pub fn directives(&self) -> impl Iterator<Item = &OpcodeEntry> {
        self.entries.iter().filter(|e| e.is_directive())
    }

    /// Entries whose mnemonic starts with `prefix`, in [`Catalog::all`] order.
    pub fn completions<'s, 'p>(
        &'s self,
        prefix: &'p str,
    ) -> impl Iterator<Item = &'s OpcodeEntry> + use<'s, 'p> {
        self.entries
            .iter()
            .filter(move |e| e.mnemonic.starts_with(prefix))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn lookup_round_trip() {
        let catalog = Catalog::builtin();
        for entry in catalog.all() {
            assert_eq!(catalog.lookup(entry.mnemonic), Some(entry));
        }
    }

    #[test]
    fn mnemonics_are_unique() {
        let rows = opcodes::INSTRUCTIONS.iter().chain(opcodes::DIRECTIVES);
        let mut seen = HashSet::new();
        for row in rows {
            let mnemonic = row.syntax_name.split(' ').next().unwrap();
            assert!(seen.insert(mnemonic), "duplicate {mnemonic}");
        }
    }

    #[test]
    fn ordering() {
        let catalog = Catalog::builtin();
        let codes: Vec<u8> = catalog.instructions().filter_map(|e| e.opcode()).collect();
        assert!(codes.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(catalog.all()[0].mnemonic, "nop");

        let first_directive = catalog.all().iter().position(|e| e.is_directive()).unwrap();
        assert!(catalog.all()[first_directive..].iter().all(|e| e.is_directive()));
        assert_eq!(catalog.all()[first_directive].mnemonic, ".class");
        assert_eq!(catalog.all().last().unwrap().mnemonic, ".end");
    }

    #[test]
    fn derived_fields() {
        let catalog = Catalog::builtin();
        let mv = catalog.lookup("move").unwrap();
        assert_eq!(mv.syntax_name, "move vx,vy");
        assert_eq!(mv.operand_syntax(), "vx,vy");
        assert_eq!(mv.shape(), Some(OperandShape::RegReg));

        let invoke = catalog.lookup("invoke-virtual").unwrap();
        assert!(invoke.flags.contains(OpcodeFlags::INVOKE));
        assert_eq!(invoke.shape(), Some(OperandShape::RegListMethod));

        assert!(catalog.lookup("goto/16").unwrap().flags.contains(OpcodeFlags::BRANCH));
        assert!(catalog.lookup("iget-quick").unwrap().is_odex_only());
        assert!(!catalog.lookup("iget").unwrap().is_odex_only());
        assert!(catalog.lookup("add-long/2addr").unwrap().flags.contains(OpcodeFlags::WIDE));

        let method = catalog.lookup(".method").unwrap();
        assert_eq!(method.directive(), Some(Directive::Method));
        assert!(method.flags.contains(OpcodeFlags::BLOCK));
        assert_eq!(method.opcode(), None);
        assert!(!catalog.lookup(".locals").unwrap().flags.contains(OpcodeFlags::BLOCK));
    }

    #[test]
    fn completions_filter_by_prefix() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.completions("return").map(|e| e.mnemonic).collect();
        assert!(names.contains(&"return-void"));
        assert!(names.contains(&"return-object"));
        assert!(names.iter().all(|n| n.starts_with("return")));
        assert_eq!(catalog.completions("").count(), catalog.len());
        assert_eq!(catalog.completions(".end").count(), 1);
    }

    #[test]
    fn duplicate_mnemonic_is_rejected() {
        let rows = [
            OpcodeDef::op("00", "nop", OperandShape::None, "", ""),
            OpcodeDef::op("01", "nop vx", OperandShape::Reg, "", ""),
        ];
        assert!(matches!(
            Catalog::new(&rows),
            Err(SmaliError::DuplicateMnemonic(m)) if m == "nop"
        ));
    }

    #[test]
    fn empty_syntax_name_is_rejected() {
        let rows = [OpcodeDef::op("00", "", OperandShape::None, "", "")];
        assert!(matches!(
            Catalog::new(&rows),
            Err(SmaliError::EmptySyntaxName { .. })
        ));
    }
}
