use std::{fmt, str::FromStr};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::SmaliError;

bitflags! {
    /// Java access flags of classes, methods and fields, with their dex values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct AccessFlags: u32 {
        const PUBLIC = 0x1;
        const PRIVATE = 0x2;
        const PROTECTED = 0x4;
        const STATIC = 0x8;
        const FINAL = 0x10;
        const SYNCHRONIZED = 0x20;
        const VOLATILE = 0x40;
        const BRIDGE = 0x40;
        const TRANSIENT = 0x80;
        const VARARGS = 0x80;
        const NATIVE = 0x100;
        const INTERFACE = 0x200;
        const ABSTRACT = 0x400;
        const STRICT = 0x800;
        const SYNTHETIC = 0x1000;
        const ANNOTATION = 0x2000;
        const ENUM = 0x4000;
        const CONSTRUCTOR = 0x10000;
        const DECLARED_SYNCHRONIZED = 0x20000;
    }
}

const WORDS: &[(&str, AccessFlags)] = &[
    ("public", AccessFlags::PUBLIC),
    ("private", AccessFlags::PRIVATE),
    ("protected", AccessFlags::PROTECTED),
    ("static", AccessFlags::STATIC),
    ("final", AccessFlags::FINAL),
    ("synchronized", AccessFlags::SYNCHRONIZED),
    ("volatile", AccessFlags::VOLATILE),
    ("bridge", AccessFlags::BRIDGE),
    ("transient", AccessFlags::TRANSIENT),
    ("varargs", AccessFlags::VARARGS),
    ("native", AccessFlags::NATIVE),
    ("interface", AccessFlags::INTERFACE),
    ("abstract", AccessFlags::ABSTRACT),
    ("strictfp", AccessFlags::STRICT),
    ("strict", AccessFlags::STRICT),
    ("synthetic", AccessFlags::SYNTHETIC),
    ("annotation", AccessFlags::ANNOTATION),
    ("enum", AccessFlags::ENUM),
    ("constructor", AccessFlags::CONSTRUCTOR),
    ("declared-synchronized", AccessFlags::DECLARED_SYNCHRONIZED),
];

impl AccessFlags {
    pub fn is_modifier_word(word: &str) -> bool {
        WORDS.iter().any(|(w, _)| *w == word)
    }
}

/// Parses a single modifier word such as `public`.
impl FromStr for AccessFlags {
    type Err = SmaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WORDS
            .iter()
            .find(|(w, _)| *w == s)
            .map(|(_, f)| *f)
            .ok_or_else(|| SmaliError::UnknownModifier(s.to_string()))
    }
}

/// Retention of an `.annotation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationVisibility {
    Build,
    Runtime,
    System,
}

impl FromStr for AnnotationVisibility {
    type Err = SmaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "build" => Self::Build,
            "runtime" => Self::Runtime,
            "system" => Self::System,
            _ => return Err(SmaliError::UnknownModifier(s.to_string())),
        })
    }
}

impl fmt::Display for AnnotationVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Build => "build",
            Self::Runtime => "runtime",
            Self::System => "system",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_words() {
        let flags = ["public", "static", "final"]
            .iter()
            .map(|w| w.parse::<AccessFlags>().unwrap())
            .fold(AccessFlags::empty(), |acc, f| acc | f);
        assert_eq!(flags.bits(), 0x19);
        assert_eq!(
            "constructor".parse::<AccessFlags>().unwrap(),
            AccessFlags::CONSTRUCTOR
        );
        assert!("publik".parse::<AccessFlags>().is_err());
        assert!(AccessFlags::is_modifier_word("declared-synchronized"));
    }

    #[test]
    fn visibility() {
        assert_eq!(
            "system".parse::<AnnotationVisibility>().unwrap(),
            AnnotationVisibility::System
        );
        assert!("public".parse::<AnnotationVisibility>().is_err());
    }
}
