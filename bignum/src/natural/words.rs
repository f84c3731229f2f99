use alloc::vec::Vec;
use core::cmp::Ordering;
use ruint::Uint;

use super::bits::BitNatural;
use crate::errors::{DomainError, NarrowingError};

pub type Digit = u32;
pub type DoubleDigit = u64;
pub const DIGIT_BITS: usize = Digit::BITS as usize;
const DIGIT_BYTES: usize = core::mem::size_of::<Digit>();

/// Natural number in base `2^32`. The digits are stored in little-endian
/// order, i.e. `digits[0]` is the least significant digit, and there is never
/// a zero most significant digit (zero has no digits at all).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct WordNatural {
    digits: Vec<Digit>,
}

impl WordNatural {
    pub const fn zero() -> Self {
        Self { digits: Vec::new() }
    }

    pub fn one() -> Self {
        Self {
            digits: alloc::vec![1],
        }
    }

    /// Builds a number from little-endian digits, dropping high zero digits.
    pub fn from_digits(digits: Vec<Digit>) -> Self {
        let mut result = Self { digits };
        result.normalize();
        result
    }

    #[inline(always)]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    #[inline(always)]
    fn digit(&self, index: usize) -> Digit {
        self.digits.get(index).copied().unwrap_or(0)
    }

    #[inline(always)]
    fn normalize(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }

    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    #[inline(always)]
    pub fn is_odd(&self) -> bool {
        self.digit(0) & 1 == 1
    }

    #[inline(always)]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    pub fn bit_len(&self) -> usize {
        match self.digits.last() {
            None => 0,
            Some(top) => {
                self.digits.len() * DIGIT_BITS - top.leading_zeros() as usize
            }
        }
    }

    pub fn trailing_zeros(&self) -> usize {
        self.digits
            .iter()
            .position(|digit| *digit != 0)
            .map_or(0, |index| {
                index * DIGIT_BITS + self.digits[index].trailing_zeros() as usize
            })
    }

    #[inline(always)]
    pub fn low_u32(&self) -> u32 {
        self.digit(0)
    }

    pub(crate) fn to_u128_checked(&self) -> Option<u128> {
        if self.digits.len() > 4 {
            return None;
        }
        Some(
            self.digits
                .iter()
                .rev()
                .fold(0u128, |acc, digit| (acc << DIGIT_BITS) | *digit as u128),
        )
    }

    pub(crate) fn add_assign_ref(&mut self, other: &Self) {
        if self.digits.len() < other.digits.len() {
            self.digits.resize(other.digits.len(), 0);
        }

        let mut carry: DoubleDigit = 0;
        for i in 0..self.digits.len() {
            if i >= other.digits.len() && carry == 0 {
                break;
            }
            let sum = self.digits[i] as DoubleDigit + other.digit(i) as DoubleDigit + carry;
            self.digits[i] = sum as Digit;
            carry = sum >> DIGIT_BITS;
        }
        if carry != 0 {
            self.digits.push(carry as Digit);
        }
    }

    pub fn checked_sub_assign(&mut self, other: &Self) -> Result<(), DomainError> {
        if *self < *other {
            return Err(DomainError::NegativeDifference);
        }

        let mut borrow = false;
        for i in 0..self.digits.len() {
            if i >= other.digits.len() && !borrow {
                break;
            }
            let (difference, borrow_digit) = self.digits[i].overflowing_sub(other.digit(i));
            let (difference, borrow_carry) = difference.overflowing_sub(borrow as Digit);
            self.digits[i] = difference;
            borrow = borrow_digit | borrow_carry;
        }
        debug_assert!(!borrow);
        self.normalize();
        Ok(())
    }

    /// Schoolbook product. Every partial `a * b + t + carry` of 32-bit digits
    /// fits a 64-bit accumulator.
    pub(crate) fn mul_ref(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut product = alloc::vec![0 as Digit; self.digits.len() + other.digits.len()];
        for (j, b) in other.digits.iter().enumerate() {
            if *b == 0 {
                continue;
            }
            let mut carry: DoubleDigit = 0;
            for (i, a) in self.digits.iter().enumerate() {
                let t = *a as DoubleDigit * *b as DoubleDigit
                    + product[i + j] as DoubleDigit
                    + carry;
                product[i + j] = t as Digit;
                carry = t >> DIGIT_BITS;
            }
            product[j + self.digits.len()] = carry as Digit;
        }
        Self::from_digits(product)
    }

    pub(crate) fn shl_bits(&mut self, amount: usize) {
        if amount == 0 || self.is_zero() {
            return;
        }
        let whole_digits = amount / DIGIT_BITS;
        let bits = amount % DIGIT_BITS;

        if bits != 0 {
            let mut carry: Digit = 0;
            for digit in self.digits.iter_mut() {
                let next_carry = *digit >> (DIGIT_BITS - bits);
                *digit = (*digit << bits) | carry;
                carry = next_carry;
            }
            if carry != 0 {
                self.digits.push(carry);
            }
        }
        if whole_digits != 0 {
            self.digits
                .splice(0..0, core::iter::repeat(0).take(whole_digits));
        }
    }

    pub(crate) fn shr_bits(&mut self, amount: usize) {
        if amount == 0 {
            return;
        }
        let whole_digits = amount / DIGIT_BITS;
        if whole_digits >= self.digits.len() {
            *self = Self::zero();
            return;
        }
        self.digits.drain(..whole_digits);

        let bits = amount % DIGIT_BITS;
        if bits != 0 {
            let mut carry: Digit = 0;
            for digit in self.digits.iter_mut().rev() {
                let next_carry = *digit << (DIGIT_BITS - bits);
                *digit = (*digit >> bits) | carry;
                carry = next_carry;
            }
        }
        self.normalize();
    }

    /// Parses big-endian bytes; leading zero bytes are allowed.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let digits = bytes
            .rchunks(DIGIT_BYTES)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0 as Digit, |acc, byte| (acc << 8) | *byte as Digit)
            })
            .collect();
        Self::from_digits(digits)
    }

    /// Minimal big-endian encoding; zero encodes as no bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.digits.len() * DIGIT_BYTES);
        for digit in self.digits.iter().rev() {
            bytes.extend_from_slice(&digit.to_be_bytes());
        }
        let leading_zeros = bytes.iter().take_while(|byte| **byte == 0).count();
        bytes.drain(..leading_zeros);
        bytes
    }

    /// Converts into a fixed-width `ruint` integer if the value fits.
    pub fn try_to_uint<const BITS: usize, const LIMBS: usize>(
        &self,
    ) -> Result<Uint<BITS, LIMBS>, NarrowingError> {
        let limbs: Vec<u64> = self
            .digits
            .chunks(2)
            .map(|pair| pair[0] as u64 | (pair.get(1).copied().unwrap_or(0) as u64) << 32)
            .collect();
        Uint::checked_from_limbs_slice(&limbs).ok_or(NarrowingError {
            target: "ruint::Uint",
        })
    }
}

impl From<u128> for WordNatural {
    fn from(value: u128) -> Self {
        Self::from_digits(alloc::vec![
            value as Digit,
            (value >> 32) as Digit,
            (value >> 64) as Digit,
            (value >> 96) as Digit,
        ])
    }
}

impl<const BITS: usize, const LIMBS: usize> From<Uint<BITS, LIMBS>> for WordNatural {
    fn from(value: Uint<BITS, LIMBS>) -> Self {
        let digits = value
            .as_limbs()
            .iter()
            .flat_map(|limb| [*limb as Digit, (*limb >> 32) as Digit])
            .collect();
        Self::from_digits(digits)
    }
}

impl<const BITS: usize, const LIMBS: usize> TryFrom<&WordNatural> for Uint<BITS, LIMBS> {
    type Error = NarrowingError;

    #[inline(always)]
    fn try_from(value: &WordNatural) -> Result<Self, Self::Error> {
        value.try_to_uint()
    }
}

impl From<&BitNatural> for WordNatural {
    fn from(value: &BitNatural) -> Self {
        let mut digits = alloc::vec![0 as Digit; value.bit_len().div_ceil(DIGIT_BITS)];
        for (i, bit) in value.bits().iter().enumerate() {
            if bit {
                digits[i / DIGIT_BITS] |= 1 << (i % DIGIT_BITS);
            }
        }
        Self::from_digits(digits)
    }
}

impl PartialOrd for WordNatural {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordNatural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
}

impl_natural!(WordNatural);
