use core::cmp::Ordering;
use core::fmt::{Debug, Formatter};
use core::ops::{AddAssign, DivAssign, MulAssign, Neg, RemAssign, SubAssign};
use core::str::FromStr;

use crate::errors::{DomainError, NarrowingError, ParseError};
use crate::natural::{Base, BitNatural, Natural, WordNatural};
use crate::power::{Exponent, SignedExponent};

/// Integer made of a sign flag and a natural magnitude.
///
/// Zero is never negative: every constructor and operation clears the flag
/// when the magnitude ends up zero, so the derived equality and hashing are
/// well defined.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Signed<M> {
    negative: bool,
    magnitude: M,
}

pub type BitInteger = Signed<BitNatural>;
pub type WordInteger = Signed<WordNatural>;

impl<M: Natural> Signed<M> {
    pub fn from_parts(negative: bool, magnitude: M) -> Self {
        let negative = negative && !magnitude.is_zero();
        Self {
            negative,
            magnitude,
        }
    }

    pub fn zero() -> Self {
        Self::from_parts(false, M::zero())
    }

    pub fn one() -> Self {
        Self::from_parts(false, M::one())
    }

    #[inline(always)]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline(always)]
    pub fn magnitude(&self) -> &M {
        &self.magnitude
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self::from_parts(false, self.magnitude.clone())
    }

    pub fn into_parts(self) -> (bool, M) {
        (self.negative, self.magnitude)
    }

    pub fn negate(&mut self) {
        self.negative = !self.negative && !self.magnitude.is_zero();
    }

    #[inline(always)]
    fn normalize_sign(&mut self) {
        self.negative &= !self.magnitude.is_zero();
    }

    fn add_signed(&mut self, negative: bool, magnitude: &M) {
        if self.negative == negative {
            self.magnitude += magnitude;
        } else if self.magnitude >= *magnitude {
            self.magnitude -= magnitude;
        } else {
            let mut larger = magnitude.clone();
            larger -= &self.magnitude;
            self.magnitude = larger;
            self.negative = negative;
        }
        self.normalize_sign();
    }

    /// Quotient truncated toward zero and the remainder carrying the sign of
    /// the dividend, so that `self == q * divisor + r`.
    pub fn checked_div_rem(&self, divisor: &Self) -> Result<(Self, Self), DomainError> {
        let (quotient, remainder) = self.magnitude.divmod(&divisor.magnitude)?;
        Ok((
            Self::from_parts(self.negative ^ divisor.negative, quotient),
            Self::from_parts(self.negative, remainder),
        ))
    }

    fn div_rem_or_panic(&self, divisor: &Self) -> (Self, Self) {
        match self.checked_div_rem(divisor) {
            Ok(result) => result,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn to_str_radix(&self, base: Base) -> alloc::string::String {
        let digits = self.magnitude.to_str_radix(base);
        if self.negative {
            alloc::format!("-{digits}")
        } else {
            digits
        }
    }

    /// Parses an optional `+`/`-` sign followed by digits of `base`.
    pub fn from_str_radix(text: &str, base: Base) -> Result<Self, ParseError> {
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let offset = text.len() - digits.len();
        let magnitude = M::from_str_radix(digits, base).map_err(|e| e.shifted(offset))?;
        Ok(Self::from_parts(negative, magnitude))
    }
}

impl<M: Natural> From<M> for Signed<M> {
    #[inline(always)]
    fn from(magnitude: M) -> Self {
        Self::from_parts(false, magnitude)
    }
}

macro_rules! impl_from_builtin {
    (unsigned: $($t:ty),*) => {
        $(
            impl<M: Natural> From<$t> for Signed<M> {
                #[inline(always)]
                fn from(value: $t) -> Self {
                    Self::from_parts(false, M::from(value as u128))
                }
            }
        )*
    };
    (signed: $($t:ty),*) => {
        $(
            impl<M: Natural> From<$t> for Signed<M> {
                #[inline(always)]
                fn from(value: $t) -> Self {
                    Self::from_parts(value < 0, M::from(value.unsigned_abs() as u128))
                }
            }
        )*
    };
}

impl_from_builtin!(unsigned: u8, u16, u32, u64, u128, usize);
impl_from_builtin!(signed: i8, i16, i32, i64, i128, isize);

macro_rules! impl_narrowing {
    ($($t:ident),*) => {
        $(
            impl<M: Natural> TryFrom<&Signed<M>> for $t {
                type Error = NarrowingError;

                fn try_from(value: &Signed<M>) -> Result<Self, Self::Error> {
                    let error = NarrowingError { target: stringify!($t) };
                    let magnitude = value.magnitude.try_to_u128().map_err(|_| error)?;
                    let wide = if value.negative {
                        0i128.checked_sub_unsigned(magnitude)
                    } else {
                        i128::try_from(magnitude).ok()
                    };
                    wide.and_then(|wide| $t::try_from(wide).ok()).ok_or(error)
                }
            }
        )*
    };
}

impl_narrowing!(i8, i16, i32, i64, i128, isize);

impl<M: Natural> PartialOrd for Signed<M> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<M: Natural> Ord for Signed<M> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl<M: Natural> AddAssign<&Signed<M>> for Signed<M> {
    fn add_assign(&mut self, rhs: &Signed<M>) {
        self.add_signed(rhs.negative, &rhs.magnitude);
    }
}

impl<M: Natural> SubAssign<&Signed<M>> for Signed<M> {
    fn sub_assign(&mut self, rhs: &Signed<M>) {
        self.add_signed(!rhs.negative, &rhs.magnitude);
    }
}

impl<M: Natural> MulAssign<&Signed<M>> for Signed<M> {
    fn mul_assign(&mut self, rhs: &Signed<M>) {
        self.magnitude *= &rhs.magnitude;
        self.negative ^= rhs.negative;
        self.normalize_sign();
    }
}

impl<M: Natural> DivAssign<&Signed<M>> for Signed<M> {
    /// # Panics
    /// If `rhs` is zero.
    fn div_assign(&mut self, rhs: &Signed<M>) {
        *self = self.div_rem_or_panic(rhs).0;
    }
}

impl<M: Natural> RemAssign<&Signed<M>> for Signed<M> {
    /// # Panics
    /// If `rhs` is zero.
    fn rem_assign(&mut self, rhs: &Signed<M>) {
        *self = self.div_rem_or_panic(rhs).1;
    }
}

macro_rules! forward_signed_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl<M: Natural> core::ops::$imp<Signed<M>> for Signed<M> {
            type Output = Signed<M>;

            #[inline(always)]
            fn $method(mut self, rhs: Signed<M>) -> Signed<M> {
                <Self as $assign_imp<&Signed<M>>>::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl<M: Natural> core::ops::$imp<&Signed<M>> for Signed<M> {
            type Output = Signed<M>;

            #[inline(always)]
            fn $method(mut self, rhs: &Signed<M>) -> Signed<M> {
                <Self as $assign_imp<&Signed<M>>>::$assign_method(&mut self, rhs);
                self
            }
        }

        impl<M: Natural> core::ops::$imp<&Signed<M>> for &Signed<M> {
            type Output = Signed<M>;

            #[inline(always)]
            fn $method(self, rhs: &Signed<M>) -> Signed<M> {
                let mut result = self.clone();
                <Signed<M> as $assign_imp<&Signed<M>>>::$assign_method(&mut result, rhs);
                result
            }
        }

        impl<M: Natural> core::ops::$imp<Signed<M>> for &Signed<M> {
            type Output = Signed<M>;

            #[inline(always)]
            fn $method(self, rhs: Signed<M>) -> Signed<M> {
                let mut result = self.clone();
                <Signed<M> as $assign_imp<&Signed<M>>>::$assign_method(&mut result, &rhs);
                result
            }
        }

        impl<M: Natural> $assign_imp<Signed<M>> for Signed<M> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Signed<M>) {
                <Self as $assign_imp<&Signed<M>>>::$assign_method(self, &rhs);
            }
        }
    };
}

forward_signed_binop!(Add, add, AddAssign, add_assign);
forward_signed_binop!(Sub, sub, SubAssign, sub_assign);
forward_signed_binop!(Mul, mul, MulAssign, mul_assign);
forward_signed_binop!(Div, div, DivAssign, div_assign);
forward_signed_binop!(Rem, rem, RemAssign, rem_assign);

impl<M: Natural> Neg for Signed<M> {
    type Output = Signed<M>;

    fn neg(mut self) -> Signed<M> {
        self.negate();
        self
    }
}

impl<M: Natural> Neg for &Signed<M> {
    type Output = Signed<M>;

    fn neg(self) -> Signed<M> {
        -self.clone()
    }
}

impl<M: Natural> num_traits::Zero for Signed<M> {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl<M: Natural> num_traits::One for Signed<M> {
    fn one() -> Self {
        Self::one()
    }
}

impl<M: Natural> Exponent for Signed<M> {
    #[inline(always)]
    fn is_odd(&self) -> bool {
        self.magnitude.is_odd()
    }

    /// Halves toward zero.
    fn halve(&mut self) {
        self.magnitude.halve();
        self.normalize_sign();
    }

    #[inline(always)]
    fn is_negative(&self) -> bool {
        self.negative
    }
}

impl<M: Natural> SignedExponent for Signed<M> {
    #[inline(always)]
    fn negate(&mut self) {
        Signed::negate(self);
    }
}

macro_rules! impl_signed_fmt {
    ($($imp:ident => $base:ident, $uppercase:literal);*) => {
        $(
            impl<M: Natural> core::fmt::$imp for Signed<M> {
                fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
                    let mut digits = self.magnitude.to_str_radix(Base::$base);
                    if $uppercase {
                        digits.make_ascii_uppercase();
                    }
                    f.pad_integral(!self.negative, Base::$base.prefix(), &digits)
                }
            }
        )*
    };
}

impl_signed_fmt!(
    Display => Decimal, false;
    LowerHex => Hexadecimal, false;
    UpperHex => Hexadecimal, true;
    Octal => Octal, false;
    Binary => Binary, false
);

impl<M: Natural> Debug for Signed<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Signed({self})")
    }
}

impl<M: Natural> FromStr for Signed<M> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, Base::Decimal)
    }
}
