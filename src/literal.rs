use std::fmt;

use num_traits::{FromPrimitive, ToPrimitive};
use serde::Serialize;

use crate::{error::SmaliError, token::LiteralWidth};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
}

/// A numeric literal as written in smali, e.g. `0x10`, `-0x1L`, `12t`, `1.5f`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Literal {
    pub value: LiteralValue,
    /// Width declared by the suffix, `None` when there is no suffix.
    pub width: Option<LiteralWidth>,
    pub hex: bool,
}

impl Literal {
    /// Parses the text of a `Number` or `HexNumber` token.
    ///
    /// Hex literals keep their bit pattern, so `0xffffffffffffffffL` is `-1`.
    pub fn parse(text: &str) -> Result<Self, SmaliError> {
        let invalid = || SmaliError::InvalidLiteral(text.to_string());

        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let hex_digits = body
            .strip_prefix("0x")
            .or_else(|| body.strip_prefix("0X"));

        let width = match body.chars().last() {
            // `d`, `f` and friends are hex digits in a hex literal
            Some(c) if hex_digits.is_some() => match c {
                'l' | 'L' | 't' | 'T' | 's' | 'S' => LiteralWidth::from_suffix(c),
                _ => None,
            },
            Some(c) if !c.is_ascii_digit() => LiteralWidth::from_suffix(c),
            _ => None,
        };
        let strip = |s: &'_ str| -> String {
            match width {
                Some(_) => s[..s.len() - 1].to_string(),
                None => s.to_string(),
            }
        };

        if let Some(digits) = hex_digits {
            let digits = strip(digits);
            let raw = u64::from_str_radix(&digits, 16).map_err(|_| invalid())?;
            let value = raw as i64;
            return Ok(Self {
                value: LiteralValue::Int(if negative { value.wrapping_neg() } else { value }),
                width,
                hex: true,
            });
        }

        let digits = strip(body);
        let special = match digits.as_str() {
            "Infinity" => Some(f64::INFINITY),
            "NaN" => Some(f64::NAN),
            _ => None,
        };
        let floating = width.is_some_and(|w| w.is_floating())
            || special.is_some()
            || digits.contains(['.', 'e', 'E']);

        let value = if floating {
            let v = match special {
                Some(v) => v,
                None => digits.parse::<f64>().map_err(|_| invalid())?,
            };
            LiteralValue::Float(if negative { -v } else { v })
        } else {
            let v = digits.parse::<u64>().map_err(|_| invalid())?;
            let v = if negative {
                0i64.checked_sub_unsigned(v).ok_or_else(invalid)?
            } else {
                i64::try_from(v).map_err(|_| invalid())?
            };
            LiteralValue::Int(v)
        };

        Ok(Self {
            value,
            width,
            hex: false,
        })
    }

    /// The width the literal occupies, `Int` when no suffix was given.
    pub fn effective_width(&self) -> LiteralWidth {
        self.width.unwrap_or(match self.value {
            LiteralValue::Int(_) => LiteralWidth::Int,
            LiteralValue::Float(_) => LiteralWidth::Float,
        })
    }

    /// The value converted to `T`, or `None` if it is fractional or does not fit.
    ///
    /// # Examples
    ///
    /// ```
    ///  use smali_syntax::Literal;
    ///
    ///  let l = Literal::parse("0x7f").unwrap();
    ///  assert_eq!(l.as_int::<u8>(), Some(127));
    ///  assert_eq!(Literal::parse("300").unwrap().as_int::<u8>(), None);
    /// ```
    pub fn as_int<T: FromPrimitive>(&self) -> Option<T> {
        match self.value {
            LiteralValue::Int(v) => T::from_i64(v),
            LiteralValue::Float(v) if v.fract() == 0.0 => v.to_i64().and_then(T::from_i64),
            LiteralValue::Float(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            LiteralValue::Int(v) => v.to_f64(),
            LiteralValue::Float(v) => Some(v),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            LiteralValue::Int(v) if self.hex && v < 0 => write!(f, "-0x{:x}", v.unsigned_abs())?,
            LiteralValue::Int(v) if self.hex => write!(f, "0x{v:x}")?,
            LiteralValue::Int(v) => write!(f, "{v}")?,
            LiteralValue::Float(v) => write!(f, "{v}")?,
        }
        match self.width {
            Some(LiteralWidth::Byte) => f.write_str("t"),
            Some(LiteralWidth::Short) => f.write_str("s"),
            Some(LiteralWidth::Long) => f.write_str("L"),
            Some(LiteralWidth::Float) => f.write_str("f"),
            Some(LiteralWidth::Double) => f.write_str("d"),
            Some(LiteralWidth::Int) | None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literals() {
        let l = Literal::parse("0x2").unwrap();
        assert_eq!(l.value, LiteralValue::Int(2));
        assert!(l.hex);
        assert_eq!(l.width, None);

        let l = Literal::parse("-0x80000000").unwrap();
        assert_eq!(l.value, LiteralValue::Int(-0x80000000));

        let l = Literal::parse("0xffffffffffffffffL").unwrap();
        assert_eq!(l.value, LiteralValue::Int(-1));
        assert_eq!(l.width, Some(LiteralWidth::Long));

        let l = Literal::parse("0x7ft").unwrap();
        assert_eq!(l.width, Some(LiteralWidth::Byte));
        assert_eq!(l.as_int::<i8>(), Some(127));

        // `d` is a digit here, not a suffix
        assert_eq!(Literal::parse("0xd").unwrap().value, LiteralValue::Int(13));
    }

    #[test]
    fn decimal_literals() {
        assert_eq!(Literal::parse("2").unwrap().value, LiteralValue::Int(2));
        assert_eq!(Literal::parse("-5s").unwrap().width, Some(LiteralWidth::Short));
        assert_eq!(Literal::parse("1.5f").unwrap().value, LiteralValue::Float(1.5));
        assert_eq!(Literal::parse("2d").unwrap().value, LiteralValue::Float(2.0));
        assert_eq!(
            Literal::parse("-Infinityf").unwrap().value,
            LiteralValue::Float(f64::NEG_INFINITY)
        );
        assert!(Literal::parse("12abc").is_err());
    }

    #[test]
    fn narrowing() {
        let l = Literal::parse("-1").unwrap();
        assert_eq!(l.as_int::<i32>(), Some(-1));
        assert_eq!(l.as_int::<u32>(), None);
        assert_eq!(Literal::parse("1.5").unwrap().as_int::<i32>(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Literal::parse("-0x1L").unwrap().to_string(), "-0x1L");
        assert_eq!(Literal::parse("10t").unwrap().to_string(), "10t");
    }
}
