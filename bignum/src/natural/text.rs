use alloc::string::String;
use alloc::vec::Vec;
use strum_macros::{Display, EnumIter};

use super::division::long_division;
use super::Natural;
use crate::errors::ParseError;

/// Radix for textual input and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Base {
    #[strum(serialize = "binary")]
    Binary = 2,
    #[strum(serialize = "octal")]
    Octal = 8,
    #[strum(serialize = "decimal")]
    Decimal = 10,
    #[strum(serialize = "hexadecimal")]
    Hexadecimal = 16,
}

impl Base {
    #[inline(always)]
    pub const fn radix(self) -> u32 {
        self as u32
    }

    /// Prefix written by the alternate (`#`) formatting flag.
    pub const fn prefix(self) -> &'static str {
        match self {
            Base::Binary => "0b",
            Base::Octal => "0",
            Base::Decimal => "",
            Base::Hexadecimal => "0x",
        }
    }

    fn strip_prefix(self, text: &str) -> &str {
        let prefixes: &[&str] = match self {
            Base::Binary => &["0b", "0B"],
            Base::Octal => &["0o", "0O"],
            Base::Decimal => &[],
            Base::Hexadecimal => &["0x", "0X"],
        };
        prefixes
            .iter()
            .find_map(|prefix| text.strip_prefix(*prefix))
            .unwrap_or(text)
    }
}

/// Digits of `value` in `base`, most significant first, lowercase, no prefix.
pub(crate) fn to_str_radix<N: Natural>(value: &N, base: Base) -> String {
    if value.is_zero() {
        return String::from("0");
    }

    let radix = N::from(base.radix() as u64);
    let mut digits = Vec::new();
    let mut rest = value.clone();
    while !rest.is_zero() {
        let (quotient, remainder) = long_division(rest, &radix);
        let digit = remainder.low_u32();
        match char::from_digit(digit, base.radix()) {
            Some(character) => digits.push(character),
            None => unreachable!("remainder {digit} is not below the radix"),
        }
        rest = quotient;
    }
    digits.iter().rev().collect()
}

/// Parses digits of `base`. A matching prefix (`0x`, `0o`, `0b`) is skipped,
/// letters are case-insensitive and `_` may separate digits.
pub(crate) fn from_str_radix<N: Natural>(text: &str, base: Base) -> Result<N, ParseError> {
    let digits = base.strip_prefix(text);
    let offset = text.len() - digits.len();

    let radix = N::from(base.radix() as u64);
    let mut result = N::zero();
    let mut seen_digit = false;
    for (position, character) in digits.char_indices() {
        if character == '_' {
            continue;
        }
        let digit = character
            .to_digit(base.radix())
            .ok_or(ParseError::InvalidDigit {
                position: offset + position,
                character,
            })?;
        result *= &radix;
        result += &N::from(digit as u64);
        seen_digit = true;
    }

    if seen_digit {
        Ok(result)
    } else {
        Err(ParseError::Empty)
    }
}

/// Parses a Rust-style integer literal, picking the base from its prefix.
/// Surrounding double quotes (a string literal) are accepted as well.
///
/// Prefixes follow Rust literal rules for both forms: octal needs `0o`, and a
/// bare leading zero stays decimal, so `"017"` is seventeen. Text written by
/// `{:#o}` has to go through [`Natural::from_str_radix`] with [`Base::Octal`].
pub fn from_literal<N: Natural>(literal: &str) -> Result<N, ParseError> {
    let text = literal
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(literal);

    let base = match text.get(..2) {
        Some("0x" | "0X") => Base::Hexadecimal,
        Some("0o" | "0O") => Base::Octal,
        Some("0b" | "0B") => Base::Binary,
        _ => Base::Decimal,
    };
    from_str_radix(text, base)
}
