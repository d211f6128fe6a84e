use std::fmt;

use serde::Serialize;
use winnow::{
    ModalParser, Parser,
    combinator::{alt, preceded},
    error::InputError,
    token::{literal, one_of},
};

use crate::{
    error::SmaliError,
    signature::{
        method_signature::{MethodSignature, parse_member_name, parse_method_signature},
        type_signature::{TypeDescriptor, parse_type_descriptor},
    },
};

/// The member half of a reference, after `->`.
#[derive(Debug, PartialEq, Eq, Hash, Serialize, Clone)]
pub enum Member<'a> {
    Field { name: &'a str, ty: TypeDescriptor<'a> },
    Method(MethodSignature<'a>),
}

impl<'a> Member<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Member::Field { name, .. } => name,
            Member::Method(m) => m.name,
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Member::Field { .. })
    }
}

impl fmt::Display for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Member::Field { name, ty } => write!(f, "{name}:{ty}"),
            Member::Method(m) => write!(f, "{m}"),
        }
    }
}

/// `Lowner;->member`, where the owner is a class or array type
///
/// # Examples
///
/// ```
///  use smali_syntax::signature::FieldOrMethodReference;
///
///  let r = FieldOrMethodReference::parse("Ljava/lang/System;->out:Ljava/io/PrintStream;").unwrap();
///  assert!(r.member.is_field());
///  assert_eq!(r.member.name(), "out");
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Serialize, Clone)]
pub struct FieldOrMethodReference<'a> {
    pub owner: TypeDescriptor<'a>,
    pub member: Member<'a>,
}

impl fmt::Display for FieldOrMethodReference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}->{}", self.owner, self.member)
    }
}

impl<'a> FieldOrMethodReference<'a> {
    pub fn parse(s: &'a str) -> Result<Self, SmaliError> {
        parse_reference()
            .parse(s)
            .map_err(|_| SmaliError::InvalidDescriptor(s.to_string()))
    }
}

/// `name:Type`
pub fn parse_field_member<'a>() -> impl ModalParser<&'a str, Member<'a>, InputError<&'a str>> {
    (parse_member_name(), preceded(one_of(':'), parse_type_descriptor()))
        .map(|(name, ty)| Member::Field { name, ty })
}

pub fn parse_member<'a>() -> impl ModalParser<&'a str, Member<'a>, InputError<&'a str>> {
    alt((parse_method_signature().map(Member::Method), parse_field_member()))
}

pub fn parse_reference<'a>()
-> impl ModalParser<&'a str, FieldOrMethodReference<'a>, InputError<&'a str>> {
    (
        parse_type_descriptor().verify(|t: &TypeDescriptor<'_>| !t.is_primitive()),
        preceded(literal("->"), parse_member()),
    )
        .map(|(owner, member)| FieldOrMethodReference { owner, member })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_reference() {
        let r = FieldOrMethodReference::parse(
            "Ljava/lang/StringBuilder;->append(Ljava/lang/String;)Ljava/lang/StringBuilder;",
        )
        .unwrap();
        let Member::Method(m) = &r.member else {
            panic!("expected a method");
        };
        assert_eq!(m.name, "append");
        assert_eq!(m.parameters.len(), 1);
        assert_eq!(r.owner.class_path().unwrap().simple_name(), "StringBuilder");
    }

    #[test]
    fn array_owner() {
        let r = FieldOrMethodReference::parse("[I->clone()Ljava/lang/Object;").unwrap();
        assert_eq!(r.owner.array_depth, 1);
    }

    #[test]
    fn primitive_owner_is_rejected() {
        assert!(FieldOrMethodReference::parse("I->foo:I").is_err());
    }

    #[test]
    fn synthetic_names() {
        let r = FieldOrMethodReference::parse("Lcom/example/Outer;->this$0:Lcom/example/Outer;")
            .unwrap();
        assert_eq!(r.member.name(), "this$0");
        let r = FieldOrMethodReference::parse("Lcom/example/A;->-$$Nest$mrun(Lcom/example/A;)V")
            .unwrap();
        assert_eq!(r.member.name(), "-$$Nest$mrun");
        assert_eq!(
            r.to_string(),
            "Lcom/example/A;->-$$Nest$mrun(Lcom/example/A;)V"
        );
    }
}
