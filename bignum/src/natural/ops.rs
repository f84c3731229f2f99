// Operator, conversion and formatting impls shared by the natural types.
//
// A type passed to `impl_natural!` provides the inherent methods `zero`,
// `one`, `is_zero`, `is_odd`, `bit_len`, `trailing_zeros`, `low_u32`,
// `add_assign_ref`, `checked_sub_assign`, `mul_ref`, `shl_bits`, `shr_bits`,
// `to_u128_checked`, plus `From<u128>`, `Ord` and `Clone`.

macro_rules! forward_binop {
    ($t:ty, $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl core::ops::$imp<$t> for $t {
            type Output = $t;

            #[inline(always)]
            fn $method(mut self, rhs: $t) -> $t {
                <$t as core::ops::$assign_imp<&$t>>::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl core::ops::$imp<&$t> for $t {
            type Output = $t;

            #[inline(always)]
            fn $method(mut self, rhs: &$t) -> $t {
                <$t as core::ops::$assign_imp<&$t>>::$assign_method(&mut self, rhs);
                self
            }
        }

        impl core::ops::$imp<&$t> for &$t {
            type Output = $t;

            #[inline(always)]
            fn $method(self, rhs: &$t) -> $t {
                let mut result = self.clone();
                <$t as core::ops::$assign_imp<&$t>>::$assign_method(&mut result, rhs);
                result
            }
        }

        impl core::ops::$imp<$t> for &$t {
            type Output = $t;

            #[inline(always)]
            fn $method(self, rhs: $t) -> $t {
                let mut result = self.clone();
                <$t as core::ops::$assign_imp<&$t>>::$assign_method(&mut result, &rhs);
                result
            }
        }

        impl core::ops::$assign_imp<$t> for $t {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: $t) {
                <$t as core::ops::$assign_imp<&$t>>::$assign_method(self, &rhs);
            }
        }
    };
}

macro_rules! forward_shift {
    ($t:ty, $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $inherent:ident) => {
        impl core::ops::$assign_imp<usize> for $t {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: usize) {
                self.$inherent(rhs);
            }
        }

        impl core::ops::$imp<usize> for $t {
            type Output = $t;

            #[inline(always)]
            fn $method(mut self, rhs: usize) -> $t {
                self.$inherent(rhs);
                self
            }
        }

        impl core::ops::$imp<usize> for &$t {
            type Output = $t;

            #[inline(always)]
            fn $method(self, rhs: usize) -> $t {
                let mut result = self.clone();
                result.$inherent(rhs);
                result
            }
        }
    };
}

macro_rules! impl_natural {
    ($t:ident) => {
        impl core::ops::AddAssign<&$t> for $t {
            #[inline(always)]
            fn add_assign(&mut self, rhs: &$t) {
                self.add_assign_ref(rhs);
            }
        }

        impl core::ops::SubAssign<&$t> for $t {
            /// # Panics
            /// If `rhs > self`.
            fn sub_assign(&mut self, rhs: &$t) {
                if let Err(e) = self.checked_sub_assign(rhs) {
                    panic!("{e}");
                }
            }
        }

        impl core::ops::MulAssign<&$t> for $t {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: &$t) {
                *self = self.mul_ref(rhs);
            }
        }

        impl core::ops::DivAssign<&$t> for $t {
            /// # Panics
            /// If `rhs` is zero.
            fn div_assign(&mut self, rhs: &$t) {
                if rhs.is_zero() {
                    panic!("{}", $crate::errors::DomainError::DivisionByZero);
                }
                let dividend = core::mem::take(self);
                *self = $crate::natural::division::divmod_or_panic(dividend, rhs).0;
            }
        }

        impl core::ops::RemAssign<&$t> for $t {
            /// # Panics
            /// If `rhs` is zero.
            fn rem_assign(&mut self, rhs: &$t) {
                if rhs.is_zero() {
                    panic!("{}", $crate::errors::DomainError::DivisionByZero);
                }
                let dividend = core::mem::take(self);
                *self = $crate::natural::division::divmod_or_panic(dividend, rhs).1;
            }
        }

        forward_binop!($t, Add, add, AddAssign, add_assign);
        forward_binop!($t, Sub, sub, SubAssign, sub_assign);
        forward_binop!($t, Mul, mul, MulAssign, mul_assign);
        forward_binop!($t, Div, div, DivAssign, div_assign);
        forward_binop!($t, Rem, rem, RemAssign, rem_assign);

        forward_shift!($t, Shl, shl, ShlAssign, shl_assign, shl_bits);
        forward_shift!($t, Shr, shr, ShrAssign, shr_assign, shr_bits);

        impl num_traits::Zero for $t {
            #[inline(always)]
            fn zero() -> Self {
                <$t>::zero()
            }

            #[inline(always)]
            fn is_zero(&self) -> bool {
                <$t>::is_zero(self)
            }
        }

        impl num_traits::One for $t {
            #[inline(always)]
            fn one() -> Self {
                <$t>::one()
            }
        }

        impl $crate::power::Exponent for $t {
            #[inline(always)]
            fn is_odd(&self) -> bool {
                <$t>::is_odd(self)
            }

            #[inline(always)]
            fn halve(&mut self) {
                self.shr_bits(1);
            }
        }

        impl $crate::natural::Natural for $t {
            #[inline(always)]
            fn bit_len(&self) -> usize {
                <$t>::bit_len(self)
            }

            #[inline(always)]
            fn trailing_zeros(&self) -> usize {
                <$t>::trailing_zeros(self)
            }

            #[inline(always)]
            fn low_u32(&self) -> u32 {
                <$t>::low_u32(self)
            }

            #[inline(always)]
            fn checked_sub_assign(&mut self, rhs: &Self) -> Result<(), $crate::errors::DomainError> {
                <$t>::checked_sub_assign(self, rhs)
            }

            fn try_to_u128(&self) -> Result<u128, $crate::errors::NarrowingError> {
                self.to_u128_checked()
                    .ok_or($crate::errors::NarrowingError { target: "u128" })
            }
        }

        impl core::iter::Sum for $t {
            fn sum<I: Iterator<Item = $t>>(iter: I) -> $t {
                iter.fold(<$t>::zero(), |mut acc, value| {
                    acc.add_assign_ref(&value);
                    acc
                })
            }
        }

        impl<'a> core::iter::Sum<&'a $t> for $t {
            fn sum<I: Iterator<Item = &'a $t>>(iter: I) -> $t {
                iter.fold(<$t>::zero(), |mut acc, value| {
                    acc.add_assign_ref(value);
                    acc
                })
            }
        }

        impl core::iter::Product for $t {
            fn product<I: Iterator<Item = $t>>(iter: I) -> $t {
                iter.fold(<$t>::one(), |acc, value| acc.mul_ref(&value))
            }
        }

        impl<'a> core::iter::Product<&'a $t> for $t {
            fn product<I: Iterator<Item = &'a $t>>(iter: I) -> $t {
                iter.fold(<$t>::one(), |acc, value| acc.mul_ref(value))
            }
        }

        impl_natural!(@from $t; u8, u16, u32, u64, usize);
        impl_natural!(@narrow $t; u8, u16, u32, u64, u128, usize);
        impl_natural!(@fmt $t; Display => Decimal, false);
        impl_natural!(@fmt $t; LowerHex => Hexadecimal, false);
        impl_natural!(@fmt $t; UpperHex => Hexadecimal, true);
        impl_natural!(@fmt $t; Octal => Octal, false);
        impl_natural!(@fmt $t; Binary => Binary, false);

        impl core::fmt::Debug for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}({})", stringify!($t), self)
            }
        }

        impl core::str::FromStr for $t {
            type Err = $crate::errors::ParseError;

            /// Parses decimal digits, optionally preceded by a single `+`.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let base = $crate::natural::Base::Decimal;
                match s.strip_prefix('+') {
                    Some(digits) => $crate::natural::text::from_str_radix(digits, base)
                        .map_err(|e| e.shifted(1)),
                    None => $crate::natural::text::from_str_radix(s, base),
                }
            }
        }
    };

    (@from $t:ident; $($builtin:ty),*) => {
        $(
            impl From<$builtin> for $t {
                #[inline(always)]
                fn from(value: $builtin) -> Self {
                    Self::from(value as u128)
                }
            }
        )*
    };

    (@narrow $t:ident; $($builtin:ident),*) => {
        $(
            impl TryFrom<&$t> for $builtin {
                type Error = $crate::errors::NarrowingError;

                fn try_from(value: &$t) -> Result<Self, Self::Error> {
                    value
                        .to_u128_checked()
                        .and_then(|wide| $builtin::try_from(wide).ok())
                        .ok_or($crate::errors::NarrowingError {
                            target: stringify!($builtin),
                        })
                }
            }

            impl TryFrom<$t> for $builtin {
                type Error = $crate::errors::NarrowingError;

                #[inline(always)]
                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    $builtin::try_from(&value)
                }
            }
        )*
    };

    (@fmt $t:ident; $imp:ident => $base:ident, $uppercase:literal) => {
        impl core::fmt::$imp for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let base = $crate::natural::Base::$base;
                let mut digits = $crate::natural::text::to_str_radix(self, base);
                if $uppercase {
                    digits.make_ascii_uppercase();
                }
                f.pad_integral(true, base.prefix(), &digits)
            }
        }
    };
}
