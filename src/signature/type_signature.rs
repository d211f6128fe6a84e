use std::fmt;

use serde::{Deserialize, Serialize};
use winnow::{
    ModalParser, Parser,
    combinator::alt,
    error::InputError,
    token::{one_of, take_while},
};

use crate::object_identifier::{ClassPath, parse_class_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveKind {
    pub fn from_descriptor(c: char) -> Option<Self> {
        Some(match c {
            'Z' => Self::Boolean,
            'B' => Self::Byte,
            'S' => Self::Short,
            'C' => Self::Char,
            'I' => Self::Int,
            'J' => Self::Long,
            'F' => Self::Float,
            'D' => Self::Double,
            'V' => Self::Void,
            _ => return None,
        })
    }

    pub fn descriptor(&self) -> char {
        match self {
            Self::Boolean => 'Z',
            Self::Byte => 'B',
            Self::Short => 'S',
            Self::Char => 'C',
            Self::Int => 'I',
            Self::Long => 'J',
            Self::Float => 'F',
            Self::Double => 'D',
            Self::Void => 'V',
        }
    }

    /// Display name used in hover text, e.g. `Boolean`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Char => "Char",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Void => "Void",
        }
    }

    pub fn is_wide(&self) -> bool {
        matches!(self, Self::Long | Self::Double)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TypeBase<'a> {
    Primitive(PrimitiveKind),
    Class(ClassPath<'a>),
}

/// Represents a Java type: a primitive or class, wrapped in zero or more array dimensions
///
/// # Examples
///
/// ```
///  use smali_syntax::signature::{PrimitiveKind, TypeBase, TypeDescriptor};
///
///  let t = TypeDescriptor::parse("[[I").unwrap();
///  assert_eq!(t.array_depth, 2);
///  assert_eq!(t.base, TypeBase::Primitive(PrimitiveKind::Int));
///  assert_eq!(t.to_java(), "int[][]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeDescriptor<'a> {
    pub array_depth: usize,
    pub base: TypeBase<'a>,
}

impl fmt::Display for TypeDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_jni())
    }
}

impl<'a> TypeDescriptor<'a> {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self {
            array_depth: 0,
            base: TypeBase::Primitive(kind),
        }
    }

    /// Parses a complete descriptor; trailing input is an error.
    pub fn parse(s: &'a str) -> Result<Self, crate::error::SmaliError> {
        parse_type_descriptor()
            .parse(s)
            .map_err(|_| crate::error::SmaliError::InvalidDescriptor(s.to_string()))
    }

    pub fn to_jni(&self) -> String {
        let mut s = "[".repeat(self.array_depth);
        match &self.base {
            TypeBase::Primitive(p) => s.push(p.descriptor()),
            TypeBase::Class(c) => s.push_str(&c.as_jni_type()),
        }
        s
    }

    pub fn to_java(&self) -> String {
        let mut s = match &self.base {
            TypeBase::Primitive(p) => p.name().to_lowercase(),
            TypeBase::Class(c) => c.as_java_type(),
        };
        for _ in 0..self.array_depth {
            s.push_str("[]");
        }
        s
    }

    pub fn is_array(&self) -> bool {
        self.array_depth > 0
    }

    /// Plain primitive, not an array of one.
    pub fn is_primitive(&self) -> bool {
        self.array_depth == 0 && matches!(self.base, TypeBase::Primitive(_))
    }

    pub fn class_path(&self) -> Option<&ClassPath<'a>> {
        match &self.base {
            TypeBase::Class(c) => Some(c),
            TypeBase::Primitive(_) => None,
        }
    }
}

pub(crate) fn parse_primitive<'a>() -> impl ModalParser<&'a str, PrimitiveKind, InputError<&'a str>> {
    alt((
        one_of('Z').value(PrimitiveKind::Boolean),
        one_of('B').value(PrimitiveKind::Byte),
        one_of('S').value(PrimitiveKind::Short),
        one_of('C').value(PrimitiveKind::Char),
        one_of('I').value(PrimitiveKind::Int),
        one_of('J').value(PrimitiveKind::Long),
        one_of('F').value(PrimitiveKind::Float),
        one_of('D').value(PrimitiveKind::Double),
        one_of('V').value(PrimitiveKind::Void),
    ))
}

pub fn parse_type_descriptor<'a>()
-> impl ModalParser<&'a str, TypeDescriptor<'a>, InputError<&'a str>> {
    (
        take_while(0.., '['),
        alt((
            parse_class_path().map(TypeBase::Class),
            parse_primitive().map(TypeBase::Primitive),
        )),
    )
        .map(|(dims, base): (&str, TypeBase<'a>)| TypeDescriptor {
            array_depth: dims.len(),
            base,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives() {
        for (text, kind) in [
            ("Z", PrimitiveKind::Boolean),
            ("J", PrimitiveKind::Long),
            ("V", PrimitiveKind::Void),
        ] {
            let t = TypeDescriptor::parse(text).unwrap();
            assert_eq!(t, TypeDescriptor::primitive(kind));
            assert!(t.is_primitive());
            assert_eq!(t.to_jni(), text);
        }
    }

    #[test]
    fn words_are_not_descriptors() {
        assert!(TypeDescriptor::parse("Boolean").is_err());
        assert!(TypeDescriptor::parse("X").is_err());
    }

    #[test]
    fn class_arrays() {
        let t = TypeDescriptor::parse("[Ljava/lang/String;").unwrap();
        assert_eq!(t.array_depth, 1);
        assert!(!t.is_primitive());
        assert_eq!(t.class_path().unwrap().simple_name(), "String");
        assert_eq!(t.to_java(), "java.lang.String[]");
        assert_eq!(t.to_string(), "[Ljava/lang/String;");
    }

    #[test]
    fn stops_after_one_type() {
        let mut input = "IJ";
        let t = parse_type_descriptor().parse_next(&mut input).unwrap();
        assert_eq!(t.base, TypeBase::Primitive(PrimitiveKind::Int));
        assert_eq!(input, "J");
    }
}
