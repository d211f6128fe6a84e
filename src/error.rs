use std::{fmt, io, path::PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::token::Span;

/// Library-level failures. Problems inside smali text are never reported
/// through this type, see [`Diagnostic`] for those.
#[derive(Debug, Error)]
pub enum SmaliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("duplicate mnemonic `{0}` in opcode catalog")]
    DuplicateMnemonic(String),
    #[error("catalog row with code `{code}` has an empty syntax name")]
    EmptySyntaxName { code: String },
    #[error("`{syntax_name}` has an invalid opcode `{code}`")]
    InvalidCode { syntax_name: String, code: String },
    #[error("unknown keyword `{0}`")]
    UnknownKeyword(String),
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("invalid register `{0}`")]
    InvalidRegister(String),
    #[error("invalid literal `{0}`")]
    InvalidLiteral(String),
    #[error("invalid descriptor `{0}`")]
    InvalidDescriptor(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// Invalid character sequence or unterminated string.
    Lex,
    /// Unknown leading token or operands not matching the expected shape.
    Syntax,
    /// A block directive whose `.end` never came.
    UnterminatedBlock,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DiagnosticKind::Lex => "lexical error",
            DiagnosticKind::Syntax => "syntax error",
            DiagnosticKind::UnterminatedBlock => "unterminated block",
        })
    }
}

/// A problem found in smali source, with enough position information to be
/// shown to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{span}: {kind}: {message}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub message: String,
    /// The operand shape that was expected, e.g. `vx, vy`.
    pub expected: Option<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
            expected: None,
        }
    }

    pub fn lex(span: Span, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Lex, span, message)
    }

    pub fn syntax(span: Span, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Syntax, span, message)
    }

    pub fn unterminated(span: Span, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::UnterminatedBlock, span, message)
    }

    pub fn expecting(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}
