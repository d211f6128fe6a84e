use serde::Serialize;

use crate::{
    catalog::OpcodeEntry,
    directive::{BlockKind, Directive},
    error::Diagnostic,
    literal::Literal,
    modifier::{AccessFlags, AnnotationVisibility},
    register::{Register, RegisterRange},
    signature::{FieldOrMethodReference, Member, Prototype, TypeDescriptor},
    token::{Span, Token},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatementKind {
    Instruction,
    Directive(Directive),
    /// `:name` defining a jump or switch target.
    Label,
    /// A line inside an array-data, switch, annotation or value array block.
    Entry,
    Comment,
    Blank,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OperandValue<'a> {
    Register(Register),
    RegisterList(Vec<Register>),
    RegisterRange(RegisterRange),
    Literal(Literal),
    /// Raw contents between the quotes, escapes untouched.
    String(&'a str),
    /// Raw contents between the single quotes.
    Char(&'a str),
    Label(&'a str),
    /// `{:start .. :end}` of a `.catch` directive.
    LabelRange { start: &'a str, end: &'a str },
    Type(TypeDescriptor<'a>),
    Reference(FieldOrMethodReference<'a>),
    /// Member being declared by `.field` or `.method`.
    Member(Member<'a>),
    Prototype(Prototype<'a>),
    /// Odex `field@0x..`, `vtable@0x..` or `inline@0x..`.
    Index { kind: &'a str, value: u64 },
    Flags(AccessFlags),
    Visibility(AnnotationVisibility),
    Identifier(&'a str),
    Null,
    Boolean(bool),
    Enum(FieldOrMethodReference<'a>),
    Array(Vec<Operand<'a>>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operand<'a> {
    pub value: OperandValue<'a>,
    pub span: Span,
}

impl<'a> Operand<'a> {
    pub fn new(value: OperandValue<'a>, span: Span) -> Self {
        Self { value, span }
    }

    pub fn as_register(&self) -> Option<Register> {
        match self.value {
            OperandValue::Register(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&'a str> {
        match self.value {
            OperandValue::Label(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match &self.value {
            OperandValue::Literal(l) => Some(l),
            _ => None,
        }
    }
}

/// One parsed line, or a block spanning several lines.
///
/// Block statements (`.method`, `.annotation`, switch tables and the like)
/// own the statements between their opening and closing lines in
/// `children`; the closing line itself is kept in `end`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement<'a> {
    pub kind: StatementKind,
    /// Mnemonic or directive keyword as written.
    pub keyword: Option<&'a str>,
    pub opcode: Option<&'a OpcodeEntry>,
    pub operands: Vec<Operand<'a>>,
    pub children: Vec<Statement<'a>>,
    pub end: Option<Box<Statement<'a>>>,
    /// Every token of the line, transient delimiters and comments included.
    pub tokens: Vec<Token<'a>>,
    /// Trailing `#` comment.
    pub comment: Option<&'a str>,
    pub span: Span,
    pub error: Option<Diagnostic>,
    /// Block this line opens.
    pub opens: Option<BlockKind>,
    /// Block this line closes.
    pub closes: Option<BlockKind>,
}

impl<'a> Statement<'a> {
    pub fn new(kind: StatementKind, tokens: Vec<Token<'a>>, span: Span) -> Self {
        Self {
            kind,
            keyword: None,
            opcode: None,
            operands: Vec::new(),
            children: Vec::new(),
            end: None,
            tokens,
            comment: None,
            span,
            error: None,
            opens: None,
            closes: None,
        }
    }

    /// The instruction mnemonic, e.g. `const/4`.
    pub fn mnemonic(&self) -> Option<&'a str> {
        match self.kind {
            StatementKind::Instruction => self.keyword,
            _ => self.opcode.map(|e| e.mnemonic),
        }
    }

    pub fn directive(&self) -> Option<Directive> {
        match self.kind {
            StatementKind::Directive(d) => Some(d),
            _ => None,
        }
    }

    /// Name of the label defined by a `Label` statement.
    pub fn label_name(&self) -> Option<&'a str> {
        match self.kind {
            StatementKind::Label => self.operands.first().and_then(Operand::as_label),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatementKind::Error
    }

    /// Whether this statement or anything nested in it carries a diagnostic.
    pub fn has_errors(&self) -> bool {
        self.error.is_some()
            || self.children.iter().any(Statement::has_errors)
            || self.end.as_ref().is_some_and(|e| e.has_errors())
    }

    /// Diagnostics of this statement and its descendants, in source order.
    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        let mut out = Vec::new();
        self.collect_diagnostics(&mut out);
        out
    }

    fn collect_diagnostics<'s>(&'s self, out: &mut Vec<&'s Diagnostic>) {
        if let Some(e) = &self.error {
            out.push(e);
        }
        for child in &self.children {
            child.collect_diagnostics(out);
        }
        if let Some(end) = &self.end {
            end.collect_diagnostics(out);
        }
    }

    /// Depth-first walk over this statement and everything nested in it.
    pub fn walk(&self) -> Box<dyn Iterator<Item = &Statement<'a>> + '_> {
        Box::new(
            std::iter::once(self)
                .chain(self.children.iter().flat_map(|c| c.walk()))
                .chain(self.end.iter().flat_map(|e| e.walk())),
        )
    }
}

/// A parsed file: top-level statements with blocks nested inside.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document<'a> {
    pub statements: Vec<Statement<'a>>,
}

impl<'a> Document<'a> {
    /// Every diagnostic in the document, in source order.
    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        let mut out: Vec<&Diagnostic> = self
            .statements
            .iter()
            .flat_map(Statement::diagnostics)
            .collect();
        out.sort_by_key(|d| d.span.start);
        out
    }

    pub fn has_errors(&self) -> bool {
        self.statements.iter().any(Statement::has_errors)
    }

    pub fn walk(&self) -> impl Iterator<Item = &Statement<'a>> {
        self.statements.iter().flat_map(|s| s.walk())
    }

    /// Names of all labels defined in the document.
    pub fn labels(&self) -> Vec<&'a str> {
        self.walk().filter_map(Statement::label_name).collect()
    }
}
