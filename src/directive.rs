use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SmaliError;

/// The smali directives, i.e. every statement keyword starting with a dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Directive {
    Class,
    Super,
    Implements,
    Source,
    Field,
    Method,
    Locals,
    Registers,
    Param,
    Annotation,
    SubAnnotation,
    Enum,
    Catch,
    CatchAll,
    ArrayData,
    PackedSwitch,
    SparseSwitch,
    Prologue,
    Epilogue,
    Line,
    Local,
    EndLocal,
    RestartLocal,
    End,
}

impl Directive {
    /// The keyword as written in source, including the leading dot.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => ".class",
            Self::Super => ".super",
            Self::Implements => ".implements",
            Self::Source => ".source",
            Self::Field => ".field",
            Self::Method => ".method",
            Self::Locals => ".locals",
            Self::Registers => ".registers",
            Self::Param => ".param",
            Self::Annotation => ".annotation",
            Self::SubAnnotation => ".subannotation",
            Self::Enum => ".enum",
            Self::Catch => ".catch",
            Self::CatchAll => ".catchall",
            Self::ArrayData => ".array-data",
            Self::PackedSwitch => ".packed-switch",
            Self::SparseSwitch => ".sparse-switch",
            Self::Prologue => ".prologue",
            Self::Epilogue => ".epilogue",
            Self::Line => ".line",
            Self::Local => ".local",
            Self::EndLocal | Self::End => ".end",
            Self::RestartLocal => ".restart",
        }
    }

    /// The keyword without its dot, e.g. `locals`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EndLocal => "end local",
            Self::RestartLocal => "restart local",
            _ => &self.keyword()[1..],
        }
    }

    /// The block this directive opens, if it opens one unconditionally.
    pub fn opens_block(&self) -> Option<BlockKind> {
        match self {
            Self::Method => Some(BlockKind::Method),
            Self::Annotation => Some(BlockKind::Annotation),
            Self::SubAnnotation => Some(BlockKind::SubAnnotation),
            Self::ArrayData => Some(BlockKind::ArrayData),
            Self::PackedSwitch => Some(BlockKind::PackedSwitch),
            Self::SparseSwitch => Some(BlockKind::SparseSwitch),
            _ => None,
        }
    }

    /// Directives that only make sense at class level. Meeting one while a
    /// block is still open means that block was never closed.
    pub fn is_top_level(&self) -> bool {
        matches!(
            self,
            Self::Class | Self::Super | Self::Implements | Self::Source | Self::Field | Self::Method
        )
    }
}

impl FromStr for Directive {
    type Err = SmaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            ".class" => Self::Class,
            ".super" => Self::Super,
            ".implements" => Self::Implements,
            ".source" => Self::Source,
            ".field" => Self::Field,
            ".method" => Self::Method,
            ".locals" => Self::Locals,
            ".registers" => Self::Registers,
            ".param" => Self::Param,
            ".annotation" => Self::Annotation,
            ".subannotation" => Self::SubAnnotation,
            ".enum" => Self::Enum,
            ".catch" => Self::Catch,
            ".catchall" => Self::CatchAll,
            ".array-data" => Self::ArrayData,
            ".packed-switch" => Self::PackedSwitch,
            ".sparse-switch" => Self::SparseSwitch,
            ".prologue" => Self::Prologue,
            ".epilogue" => Self::Epilogue,
            ".line" => Self::Line,
            ".local" => Self::Local,
            ".restart" => Self::RestartLocal,
            ".end" => Self::End,
            _ => return Err(SmaliError::UnknownKeyword(s.to_string())),
        })
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kinds of multi-line constructs closed by `.end <kind>` (or `}` for a value array).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Method,
    Annotation,
    SubAnnotation,
    ArrayData,
    PackedSwitch,
    SparseSwitch,
    /// `.field` followed by annotations; the block is optional.
    Field,
    /// `.param` followed by annotations; the block is optional.
    Param,
    /// An annotation element value `{` left open at end of line.
    ValueArray,
}

impl BlockKind {
    /// Word following `.end`, if the block is closed by one.
    pub fn end_word(&self) -> Option<&'static str> {
        Some(match self {
            Self::Method => "method",
            Self::Annotation => "annotation",
            Self::SubAnnotation => "subannotation",
            Self::ArrayData => "array-data",
            Self::PackedSwitch => "packed-switch",
            Self::SparseSwitch => "sparse-switch",
            Self::Field => "field",
            Self::Param => "param",
            Self::ValueArray => return None,
        })
    }

    pub fn from_end_word(word: &str) -> Option<Self> {
        Some(match word {
            "method" => Self::Method,
            "annotation" => Self::Annotation,
            "subannotation" => Self::SubAnnotation,
            "array-data" => Self::ArrayData,
            "packed-switch" => Self::PackedSwitch,
            "sparse-switch" => Self::SparseSwitch,
            "field" => Self::Field,
            "param" => Self::Param,
            _ => return None,
        })
    }

    /// Optional blocks are opened retroactively by their `.end` line.
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Field | Self::Param)
    }

    /// Blocks whose lines are annotation element values.
    pub fn holds_elements(&self) -> bool {
        matches!(self, Self::Annotation | Self::SubAnnotation)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end_word() {
            Some(word) => f.write_str(word),
            None => f.write_str("value array"),
        }
    }
}

/// The blocks enclosing a line, outermost first.
///
/// A line's meaning depends on where it sits: `:pswitch_0` is a label
/// definition in a method body but a jump target inside `.packed-switch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStack(Vec<BlockKind>);

impl BlockStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: BlockKind) {
        self.0.push(kind);
    }

    pub fn pop(&mut self) -> Option<BlockKind> {
        self.0.pop()
    }

    /// Closes the innermost `kind` block together with anything still open inside it.
    /// Returns false when no such block is open.
    pub fn close(&mut self, kind: BlockKind) -> bool {
        match self.0.iter().rposition(|k| *k == kind) {
            Some(idx) => {
                self.0.truncate(idx);
                true
            }
            None => false,
        }
    }

    /// Closes everything opened inside the innermost `kind` block, keeping the block itself.
    pub fn unwind_to(&mut self, kind: BlockKind) -> bool {
        match self.0.iter().rposition(|k| *k == kind) {
            Some(idx) => {
                self.0.truncate(idx + 1);
                true
            }
            None => false,
        }
    }

    pub fn innermost(&self) -> Option<BlockKind> {
        self.0.last().copied()
    }

    pub fn contains(&self, kind: BlockKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockKind> {
        self.0.iter()
    }
}

impl From<Vec<BlockKind>> for BlockStack {
    fn from(kinds: Vec<BlockKind>) -> Self {
        Self(kinds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip() {
        for d in [
            Directive::Class,
            Directive::Method,
            Directive::ArrayData,
            Directive::SparseSwitch,
            Directive::CatchAll,
            Directive::RestartLocal,
        ] {
            assert_eq!(d.keyword().parse::<Directive>().unwrap(), d);
        }
        assert!(".bogus".parse::<Directive>().is_err());
    }

    #[test]
    fn close_pops_inner_blocks() {
        let mut stack = BlockStack::from(vec![
            BlockKind::Method,
            BlockKind::Annotation,
            BlockKind::ValueArray,
        ]);
        assert!(stack.close(BlockKind::Annotation));
        assert_eq!(stack.innermost(), Some(BlockKind::Method));
        assert!(!stack.close(BlockKind::PackedSwitch));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn unwind_keeps_the_target_block() {
        let mut stack = BlockStack::from(vec![BlockKind::Method, BlockKind::Annotation]);
        assert!(stack.unwind_to(BlockKind::Method));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![BlockKind::Method]);
        assert!(!stack.unwind_to(BlockKind::SparseSwitch));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn end_words() {
        assert_eq!(BlockKind::from_end_word("array-data"), Some(BlockKind::ArrayData));
        assert_eq!(BlockKind::from_end_word("local"), None);
        assert_eq!(BlockKind::ValueArray.end_word(), None);
    }
}
