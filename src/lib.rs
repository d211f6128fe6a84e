//! # Smali syntax
//!
//! Tokenizer, opcode catalog and line parser for the textual smali syntax of
//! Dalvik bytecode, as produced by apktool and baksmali.
//!
//! Everything is driven by a [`Catalog`] handed to the [`Tokenizer`] and
//! [`Parser`]. Parsing never fails as a whole: problems are reported as
//! [`Diagnostic`]s on the statements they concern.
//!
//! ```
//!  use smali_syntax::{Catalog, Parser};
//!
//!  let parser = Parser::new(Catalog::builtin());
//!  let doc = parser.parse_document(
//!      ".class public Lcom/example/Hello;\n\
//!       .super Ljava/lang/Object;\n\
//!       .method public static main([Ljava/lang/String;)V\n\
//!           .locals 0\n\
//!           return-void\n\
//!       .end method\n",
//!  );
//!  assert!(!doc.has_errors());
//!  assert_eq!(doc.statements.len(), 3);
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

pub mod catalog;
pub mod directive;
pub mod error;
pub mod lexer;
pub mod literal;
pub mod modifier;
pub mod object_identifier;
pub mod parser;
pub mod query;
pub mod register;
pub mod signature;
pub mod statement;
pub mod token;

pub use catalog::{Catalog, OpcodeEntry, OpcodeFlags, OperandKind, OperandShape, Syntax};
pub use directive::{BlockKind, BlockStack, Directive};
pub use error::{Diagnostic, DiagnosticKind, SmaliError};
pub use lexer::{LexState, Lexer, TokenLine, Tokenizer};
pub use literal::{Literal, LiteralValue};
pub use modifier::{AccessFlags, AnnotationVisibility};
pub use object_identifier::ClassPath;
pub use parser::{ParseOptions, Parser};
pub use register::{Register, RegisterRange};
pub use signature::{FieldOrMethodReference, Member, MethodSignature, Prototype, TypeDescriptor};
pub use statement::{Document, Operand, OperandValue, Statement, StatementKind};
pub use token::{Classification, LiteralWidth, Position, Span, Token, TokenKind};

/// Tokens of one line, using the builtin catalog.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    Tokenizer::new(Catalog::builtin()).tokenize(line)
}

/// Parses one line outside of any block, using the builtin catalog.
pub fn parse_line(line: &str) -> Statement<'_> {
    Parser::new(Catalog::builtin()).parse_line(line, &BlockStack::new())
}

/// Parses a whole file, using the builtin catalog.
pub fn parse_document(text: &str) -> Document<'_> {
    Parser::new(Catalog::builtin()).parse_document(text)
}

/// A `.smali` file read from disk.
#[derive(Debug, Clone)]
pub struct SmaliFile {
    pub path: PathBuf,
    pub text: String,
}

impl SmaliFile {
    pub fn read(path: &Path) -> Result<Self, SmaliError> {
        let text = fs::read_to_string(path).map_err(|source| SmaliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    pub fn parse<'a>(&'a self, parser: &Parser<'a>) -> Document<'a> {
        parser.parse_document(&self.text)
    }
}

/// Recurses a base path, typically a `smali` folder from apktool, returning every `.smali` file found.
///
/// # Examples
///
/// ```no_run
///  use smali_syntax::{Catalog, Parser, find_smali_files};
///  use std::path::Path;
///
///  let parser = Parser::new(Catalog::builtin());
///  let files = find_smali_files(Path::new("smali")).unwrap();
///  for file in &files {
///      let doc = file.parse(&parser);
///      println!("{}: {} diagnostics", file.path.display(), doc.diagnostics().len());
///  }
/// ```
pub fn find_smali_files(dir: &Path) -> Result<Vec<SmaliFile>, SmaliError> {
    let io_error = |source| SmaliError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = dir
        .read_dir()
        .map_err(io_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error)?;
    entries.sort_by_key(|e| e.file_name());

    let mut results = vec![];
    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(io_error)?;
        if file_type.is_dir() {
            results.extend(find_smali_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "smali") {
            debug!("reading {}", path.display());
            results.push(SmaliFile::read(&path)?);
        }
    }

    info!("{} smali files found under {}", results.len(), dir.display());
    Ok(results)
}
