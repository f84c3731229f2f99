use alloc::string::String;
use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::ops::{AddAssign, DivAssign, MulAssign, RemAssign, ShlAssign, ShrAssign, SubAssign};
use core::str::FromStr;

use crate::errors::{DomainError, NarrowingError, ParseError};
use crate::power::Exponent;

#[macro_use]
mod ops;

mod bits;
mod division;
#[cfg(feature = "serde")]
mod serialization;
mod text;
mod words;

pub use self::bits::BitNatural;
pub use self::text::{from_literal, Base};
pub use self::words::WordNatural;

/// Arithmetic interface shared by the natural-number representations.
///
/// Division, text conversion and everything built on top (modular operators,
/// Euclid, primality) is written once against this trait. The operator
/// supertraits panic on domain violations the same way builtin integers do;
/// the `checked_*` methods report them as [`DomainError`] instead.
pub trait Natural:
    Clone
    + Eq
    + Ord
    + Hash
    + Debug
    + Default
    + Display
    + Exponent
    + From<u64>
    + From<u128>
    + FromStr<Err = ParseError>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
    + for<'a> RemAssign<&'a Self>
    + ShlAssign<usize>
    + ShrAssign<usize>
    + 'static
{
    /// Number of binary digits without leading zeros; `0` for zero.
    fn bit_len(&self) -> usize;

    /// Number of zero bits below the lowest set bit. Zero has no set bit and
    /// reports `0`.
    fn trailing_zeros(&self) -> usize;

    /// Least significant 32 bits.
    fn low_u32(&self) -> u32;

    /// `self -= rhs`, or an error (leaving `self` untouched) if `rhs > self`.
    fn checked_sub_assign(&mut self, rhs: &Self) -> Result<(), DomainError>;

    fn try_to_u128(&self) -> Result<u128, NarrowingError>;

    fn try_to_u64(&self) -> Result<u64, NarrowingError> {
        let value = self.try_to_u128()?;
        u64::try_from(value).map_err(|_| NarrowingError { target: "u64" })
    }

    fn is_even(&self) -> bool {
        !self.is_odd()
    }

    fn checked_sub(&self, rhs: &Self) -> Result<Self, DomainError> {
        let mut result = self.clone();
        result.checked_sub_assign(rhs)?;
        Ok(result)
    }

    /// `(self / divisor, self % divisor)` by the largest-doubling method.
    fn divmod(&self, divisor: &Self) -> Result<(Self, Self), DomainError> {
        division::divmod(self.clone(), divisor)
    }

    fn to_str_radix(&self, base: Base) -> String {
        text::to_str_radix(self, base)
    }

    fn from_str_radix(text: &str, base: Base) -> Result<Self, ParseError> {
        text::from_str_radix(text, base)
    }

    fn from_decimal_str(text: &str) -> Result<Self, ParseError> {
        text::from_str_radix(text, Base::Decimal)
    }

    fn from_hex_str(text: &str) -> Result<Self, ParseError> {
        text::from_str_radix(text, Base::Hexadecimal)
    }
}

/// Builds a [`BitNatural`] from an integer literal (`0x`, `0o`, `0b` prefixes
/// and `_` separators allowed) or from a string literal holding one. A bare
/// leading zero does not mean octal, see [`from_literal`].
#[macro_export]
macro_rules! bit_nat {
    ($lit:literal) => {
        match $crate::natural::from_literal::<$crate::BitNatural>(stringify!($lit)) {
            Ok(value) => value,
            Err(e) => panic!("invalid natural literal {}: {}", stringify!($lit), e),
        }
    };
}

/// Builds a [`WordNatural`] from a literal, see [`bit_nat!`].
#[macro_export]
macro_rules! word_nat {
    ($lit:literal) => {
        match $crate::natural::from_literal::<$crate::WordNatural>(stringify!($lit)) {
            Ok(value) => value,
            Err(e) => panic!("invalid natural literal {}: {}", stringify!($lit), e),
        }
    };
}
