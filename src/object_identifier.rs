use core::fmt;

use serde::Serialize;
use winnow::{
    ModalParser, Parser,
    combinator::delimited,
    error::InputError,
    token::{one_of, take_while},
};

/// Represents a Java class path as written inside `L...;`
///
/// # Examples
///
/// ```
///  use smali_syntax::signature::TypeDescriptor;
///
///  let t = TypeDescriptor::parse("Lcom/basic/Test$1;").unwrap();
///  let class = t.class_path().unwrap();
///  assert_eq!(class.segments, vec!["com", "basic", "Test"]);
///  assert_eq!(class.nested, Some("1"));
///  assert_eq!(class.as_java_type(), "com.basic.Test$1");
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Serialize, Clone)]
pub struct ClassPath<'a> {
    /// Everything between `L` and `;`.
    pub text: &'a str,
    /// `/`-separated segments, the numeric nested suffix removed from the last one.
    pub segments: Vec<&'a str>,
    /// Digits of a trailing `$N` anonymous class suffix.
    pub nested: Option<&'a str>,
}

impl fmt::Display for ClassPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "L{};", self.text)
    }
}

impl<'a> ClassPath<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut segments: Vec<&'a str> = text.split('/').collect();
        let mut nested = None;
        if let Some(last) = segments.last_mut() {
            let name: &'a str = *last;
            if let Some((outer, suffix)) = name.rsplit_once('$') {
                if !outer.is_empty()
                    && !suffix.is_empty()
                    && suffix.bytes().all(|b| b.is_ascii_digit())
                {
                    nested = Some(suffix);
                    *last = outer;
                }
            }
        }
        Self {
            text,
            segments,
            nested,
        }
    }

    pub fn as_jni_type(&self) -> String {
        format!("L{};", self.text)
    }

    pub fn as_java_type(&self) -> String {
        self.text.replace('/', ".")
    }

    /// Class name without its package, nested suffix included.
    pub fn simple_name(&self) -> &'a str {
        self.text.rsplit('/').next().unwrap_or(self.text)
    }

    pub fn package(&self) -> Option<&'a str> {
        self.text.rsplit_once('/').map(|(package, _)| package)
    }
}

pub(crate) fn is_class_path_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, ';' | '<' | '>' | '(' | ')' | ',' | '{' | '}' | ':' | '.' | '[')
}

pub fn parse_class_path<'a>() -> impl ModalParser<&'a str, ClassPath<'a>, InputError<&'a str>> {
    delimited(
        one_of('L'),
        take_while(1.., is_class_path_char),
        one_of(';'),
    )
    .map(ClassPath::new)
}

#[cfg(test)]
mod tests {
    use winnow::Parser;

    use super::*;

    #[test]
    fn class_path() {
        let c = parse_class_path()
            .parse_next(&mut "Ljava/lang/String;")
            .unwrap();
        assert_eq!(c.segments, vec!["java", "lang", "String"]);
        assert_eq!(c.nested, None);
        assert_eq!(c.simple_name(), "String");
        assert_eq!(c.package(), Some("java/lang"));
        assert_eq!(c.to_string(), "Ljava/lang/String;");
    }

    #[test]
    fn nested_suffix() {
        let c = ClassPath::new("com/example/Outer$Inner$12");
        assert_eq!(c.segments, vec!["com", "example", "Outer$Inner"]);
        assert_eq!(c.nested, Some("12"));

        let named = ClassPath::new("com/example/Outer$Inner");
        assert_eq!(named.nested, None);
        assert_eq!(named.simple_name(), "Outer$Inner");
    }

    #[test]
    fn rejects_unterminated() {
        assert!(parse_class_path().parse_next(&mut "Ljava/lang/String").is_err());
        assert!(parse_class_path().parse_next(&mut "L;").is_err());
    }
}
