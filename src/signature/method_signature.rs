use std::fmt;

use serde::Serialize;
use winnow::{
    ModalParser, Parser,
    combinator::{alt, delimited, repeat},
    error::InputError,
    token::{literal, one_of, take_while},
};

use crate::{
    error::SmaliError,
    signature::type_signature::{TypeDescriptor, parse_type_descriptor},
};

/// A method prototype: parameter types and return type, e.g. `(ILjava/lang/String;)V`.
#[derive(Debug, PartialEq, Eq, Hash, Serialize, Clone)]
pub struct Prototype<'a> {
    pub parameters: Vec<TypeDescriptor<'a>>,
    pub return_type: TypeDescriptor<'a>,
}

impl fmt::Display for Prototype<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for p in &self.parameters {
            write!(f, "{p}")?;
        }
        write!(f, "){}", self.return_type)
    }
}

/// Represents a method name together with its prototype
///
/// # Examples
///
/// ```
///  use smali_syntax::signature::MethodSignature;
///
///  let m = MethodSignature::parse("access$000(Lcom/example/Foo;)I").unwrap();
///  assert!(m.is_synthetic_accessor());
///  assert_eq!(m.parameters.len(), 1);
///  assert_eq!(m.to_string(), "access$000(Lcom/example/Foo;)I");
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Serialize, Clone)]
pub struct MethodSignature<'a> {
    pub name: &'a str,
    pub parameters: Vec<TypeDescriptor<'a>>,
    pub return_type: TypeDescriptor<'a>,
}

impl fmt::Display for MethodSignature<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        write!(f, "(")?;
        for p in &self.parameters {
            write!(f, "{p}")?;
        }
        write!(f, "){}", self.return_type)
    }
}

impl<'a> MethodSignature<'a> {
    pub fn parse(s: &'a str) -> Result<Self, SmaliError> {
        parse_method_signature()
            .parse(s)
            .map_err(|_| SmaliError::InvalidDescriptor(s.to_string()))
    }

    pub fn is_constructor(&self) -> bool {
        self.name == "<init>"
    }

    pub fn is_static_initializer(&self) -> bool {
        self.name == "<clinit>"
    }

    /// `access$N`, generated by javac for nested class access.
    pub fn is_synthetic_accessor(&self) -> bool {
        self.name
            .strip_prefix("access$")
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
    }

    pub fn prototype(&self) -> Prototype<'a> {
        Prototype {
            parameters: self.parameters.clone(),
            return_type: self.return_type.clone(),
        }
    }
}

pub(crate) fn is_member_name_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '(' | ')' | ':' | ';' | ',' | '{' | '}' | '[' | ']' | '=' | '<' | '>' | '"' | '#')
}

/// A field or method name, `<init>` and `<clinit>` included.
pub(crate) fn parse_member_name<'a>() -> impl ModalParser<&'a str, &'a str, InputError<&'a str>> {
    alt((
        literal("<init>"),
        literal("<clinit>"),
        take_while(1.., is_member_name_char),
    ))
}

pub fn parse_prototype<'a>() -> impl ModalParser<&'a str, Prototype<'a>, InputError<&'a str>> {
    (
        delimited(one_of('('), repeat(0.., parse_type_descriptor()), one_of(')')),
        parse_type_descriptor(),
    )
        .map(|(parameters, return_type)| Prototype {
            parameters,
            return_type,
        })
}

pub fn parse_method_signature<'a>()
-> impl ModalParser<&'a str, MethodSignature<'a>, InputError<&'a str>> {
    (parse_member_name(), parse_prototype()).map(|(name, proto)| MethodSignature {
        name,
        parameters: proto.parameters,
        return_type: proto.return_type,
    })
}

#[cfg(test)]
mod tests {
    use winnow::Parser;

    use super::*;
    use crate::signature::type_signature::{PrimitiveKind, TypeBase};

    #[test]
    fn constructor() {
        let m = MethodSignature::parse("<init>()V").unwrap();
        assert!(m.is_constructor());
        assert!(m.parameters.is_empty());
        assert_eq!(m.return_type.base, TypeBase::Primitive(PrimitiveKind::Void));
    }

    #[test]
    fn parameters() {
        let ts = "foo(I[JLjava/lang/String;[[Landroid/view/View;)Ljava/lang/Object;";
        let m = MethodSignature::parse(ts).unwrap();
        assert_eq!(m.name, "foo");
        assert_eq!(m.parameters.len(), 4);
        assert_eq!(m.parameters[1].array_depth, 1);
        assert_eq!(m.parameters[3].array_depth, 2);
        assert_eq!(m.to_string(), ts);
        assert!(!m.is_synthetic_accessor());
    }

    #[test]
    fn prototype_only() {
        let p = parse_prototype().parse_next(&mut "(II)Z").unwrap();
        assert_eq!(p.parameters.len(), 2);
        assert_eq!(p.to_string(), "(II)Z");
    }

    #[test]
    fn malformed() {
        assert!(MethodSignature::parse("foo(I").is_err());
        assert!(MethodSignature::parse("foo()").is_err());
        assert!(MethodSignature::parse("(I)V").is_err());
    }
}
