use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use winnow::{
    ModalParser, Parser,
    ascii::digit1,
    combinator::alt,
    error::InputError,
    token::one_of,
};

use crate::error::SmaliError;

/// A register reference: `vN` for locals, `pN` for parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Register {
    Local(u16),
    Parameter(u16),
}

impl Register {
    pub fn number(&self) -> u16 {
        match self {
            Register::Local(n) | Register::Parameter(n) => *n,
        }
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self, Register::Parameter(_))
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::Parameter(n) => write!(f, "p{n}"),
            Register::Local(n) => write!(f, "v{n}"),
        }
    }
}

impl FromStr for Register {
    type Err = SmaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_register()
            .parse(s)
            .map_err(|_| SmaliError::InvalidRegister(s.to_string()))
    }
}

/// A range of registers as written in smali, e.g. `{v0 .. v6}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRange {
    pub start: Register,
    pub end: Register,
}

impl RegisterRange {
    /// Number of registers covered, zero when the range runs backwards or
    /// mixes `v` and `p` registers.
    pub fn len(&self) -> usize {
        if self.start.is_parameter() != self.end.is_parameter() {
            return 0;
        }
        (self.end.number() as usize + 1).saturating_sub(self.start.number() as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for RegisterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} .. {}}}", self.start, self.end)
    }
}

/// Parse a register reference like "v0" or "p1".
pub fn parse_register<'a>() -> impl ModalParser<&'a str, Register, InputError<&'a str>> {
    (alt((one_of('v'), one_of('p'))), digit1).try_map(|(t, o): (char, &str)| {
        let num = o.parse::<u16>().map_err(|_| InputError::at(o))?;
        Ok::<Register, InputError<&str>>(match t {
            'p' => Register::Parameter(num),
            _ => Register::Local(num),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_registers() {
        assert_eq!("v12".parse::<Register>().unwrap(), Register::Local(12));
        assert_eq!("p0".parse::<Register>().unwrap(), Register::Parameter(0));
        assert!("v".parse::<Register>().is_err());
        assert!("x1".parse::<Register>().is_err());
        assert!("v70000".parse::<Register>().is_err());
    }

    #[test]
    fn range_len() {
        let r = RegisterRange {
            start: Register::Local(2),
            end: Register::Local(5),
        };
        assert_eq!(r.len(), 4);
        assert_eq!(r.to_string(), "{v2 .. v5}");
        let mixed = RegisterRange {
            start: Register::Local(2),
            end: Register::Parameter(5),
        };
        assert!(mixed.is_empty());
    }
}
