use bit_sequence::BitSequence;
use core::cmp::Ordering;

use super::words::WordNatural;
use crate::errors::DomainError;

/// Natural number stored one binary digit per element.
///
/// The sequence is always normalized: the highest stored bit is set, and zero
/// is the empty sequence. Arithmetic works bit by bit (ripple carry, ripple
/// borrow, shift-and-add multiplication), which keeps it obviously correct
/// but slow; [`WordNatural`] is the fast representation.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitNatural {
    bits: BitSequence,
}

impl BitNatural {
    pub const fn zero() -> Self {
        Self {
            bits: BitSequence::new(),
        }
    }

    pub fn one() -> Self {
        let mut bits = BitSequence::new();
        bits.push(true);
        Self { bits }
    }

    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline(always)]
    pub fn is_odd(&self) -> bool {
        !self.bits.is_empty() && self.bits.get(0)
    }

    #[inline(always)]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    #[inline(always)]
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Bit at `index`; positions at or above [`Self::bit_len`] read as zero.
    #[inline(always)]
    pub fn bit(&self, index: usize) -> bool {
        index < self.bits.len() && self.bits.get(index)
    }

    pub fn bits(&self) -> &BitSequence {
        &self.bits
    }

    pub fn trailing_zeros(&self) -> usize {
        self.bits.iter().position(|bit| bit).unwrap_or(0)
    }

    pub fn low_u32(&self) -> u32 {
        self.bits
            .iter()
            .take(32)
            .enumerate()
            .fold(0, |acc, (i, bit)| acc | ((bit as u32) << i))
    }

    pub(crate) fn to_u128_checked(&self) -> Option<u128> {
        if self.bits.len() > 128 {
            return None;
        }
        Some(
            self.bits
                .iter()
                .enumerate()
                .fold(0u128, |acc, (i, bit)| acc | ((bit as u128) << i)),
        )
    }

    pub(crate) fn add_assign_ref(&mut self, other: &Self) {
        if other.is_zero() {
            return;
        }
        let len = self.bit_len().max(other.bit_len());
        self.bits.extend_to(len);

        let mut carry = false;
        for i in 0..len {
            if i >= other.bit_len() && !carry {
                break;
            }
            let a = self.bits.get(i);
            let b = other.bit(i);
            self.bits.set(i, a ^ b ^ carry);
            carry = (a & b) | (carry & (a ^ b));
        }
        if carry {
            self.bits.push(true);
        }
        debug_assert!(self.bits.is_normalized());
    }

    pub fn checked_sub_assign(&mut self, other: &Self) -> Result<(), DomainError> {
        match (*self).cmp(other) {
            Ordering::Less => return Err(DomainError::NegativeDifference),
            Ordering::Equal => {
                *self = Self::zero();
                return Ok(());
            }
            Ordering::Greater => {}
        }

        let mut borrow = false;
        for i in 0..self.bit_len() {
            if i >= other.bit_len() && !borrow {
                break;
            }
            let a = self.bits.get(i);
            let b = other.bit(i);
            self.bits.set(i, a ^ b ^ borrow);
            borrow = (!a & (b | borrow)) | (a & b & borrow);
        }
        debug_assert!(!borrow);
        self.bits.normalize();
        Ok(())
    }

    pub(crate) fn mul_ref(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        // the shorter factor is consumed bit by bit
        let (mut doubled, mut halved) = if self.bit_len() >= other.bit_len() {
            (self.clone(), other.clone())
        } else {
            (other.clone(), self.clone())
        };

        let mut product = Self::zero();
        loop {
            if halved.is_odd() {
                product.add_assign_ref(&doubled);
            }
            halved.shr_bits(1);
            if halved.is_zero() {
                return product;
            }
            doubled.shl_bits(1);
        }
    }

    pub(crate) fn shl_bits(&mut self, amount: usize) {
        if amount == 0 || self.is_zero() {
            return;
        }
        self.bits <<= amount;
    }

    pub(crate) fn shr_bits(&mut self, amount: usize) {
        if amount == 0 {
            return;
        }
        if amount >= self.bits.len() {
            *self = Self::zero();
            return;
        }
        self.bits >>= amount;
    }
}

impl From<u128> for BitNatural {
    fn from(value: u128) -> Self {
        Self::from(BitSequence::from(value))
    }
}

impl From<BitSequence> for BitNatural {
    /// Drops the leading zero bits of `bits`.
    fn from(mut bits: BitSequence) -> Self {
        bits.normalize();
        Self { bits }
    }
}

impl From<&WordNatural> for BitNatural {
    fn from(value: &WordNatural) -> Self {
        let mut bits = BitSequence::new();
        for digit in value.digits() {
            for i in 0..u32::BITS {
                bits.push((digit >> i) & 1 == 1);
            }
        }
        Self::from(bits)
    }
}

impl PartialOrd for BitNatural {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitNatural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bit_len()
            .cmp(&other.bit_len())
            .then_with(|| self.bits.iter().rev().cmp(other.bits.iter().rev()))
    }
}

impl_natural!(BitNatural);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Natural;
    use proptest::{prop_assert, prop_assert_eq, proptest};

    #[test]
    fn zero_is_empty() {
        assert_eq!(BitNatural::from(0u64).bit_len(), 0);
        assert_eq!(BitNatural::default(), BitNatural::zero());
        assert!(BitNatural::zero().is_even());
    }

    #[test]
    fn carries_grow_the_number() {
        let mut value = BitNatural::from(0b1111u64);
        value += &BitNatural::one();
        assert_eq!(value, BitNatural::from(0b10000u64));
        assert_eq!(value.bit_len(), 5);
    }

    #[test]
    fn subtraction_renormalizes() {
        let mut value = BitNatural::from(0b10000u64);
        value.checked_sub_assign(&BitNatural::one()).unwrap();
        assert_eq!(value, BitNatural::from(0b1111u64));
        assert!(value.bits().is_normalized());

        value.checked_sub_assign(&BitNatural::from(15u64)).unwrap();
        assert!(value.is_zero());
    }

    #[test]
    fn negative_difference_is_rejected() {
        let mut value = BitNatural::from(3u64);
        assert_eq!(
            value.checked_sub_assign(&BitNatural::from(4u64)),
            Err(DomainError::NegativeDifference)
        );
        assert_eq!(value, BitNatural::from(3u64));
    }

    #[test]
    #[should_panic]
    fn operator_subtraction_panics_below_zero() {
        let _ = BitNatural::from(3u64) - BitNatural::from(4u64);
    }

    #[test]
    fn shifting_past_the_top_gives_zero() {
        let value = BitNatural::from(0b101u64);
        assert!((&value >> 3).is_zero());
        assert!((&value >> 100).is_zero());
        assert_eq!(&value >> 0, value);
        assert_eq!(&value << 0, value);
        assert!((BitNatural::zero() << 5).is_zero());
    }

    #[test]
    fn trailing_zeros_and_low_word() {
        assert_eq!(BitNatural::from(0b1011000u64).trailing_zeros(), 3);
        assert_eq!(BitNatural::zero().trailing_zeros(), 0);
        assert_eq!(BitNatural::from(0x1_2345_6789u64).low_u32(), 0x2345_6789);
    }

    #[test]
    fn narrowing() {
        let value = BitNatural::from(300u64);
        assert_eq!(u16::try_from(&value), Ok(300));
        assert!(u8::try_from(&value).is_err());
        let huge = BitNatural::one() << 128;
        assert!(huge.try_to_u128().is_err());
        assert_eq!((huge - BitNatural::one()).try_to_u128(), Ok(u128::MAX));
    }

    #[test]
    fn arithmetic_matches_builtin() {
        proptest!(|(a: u64, b: u64)| {
            let (x, y) = (BitNatural::from(a), BitNatural::from(b));
            prop_assert_eq!(&x + &y, BitNatural::from(a as u128 + b as u128));
            prop_assert_eq!(&x * &y, BitNatural::from(a as u128 * b as u128));
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
            if a >= b {
                prop_assert_eq!(&x - &y, BitNatural::from(a - b));
            } else {
                prop_assert!(x.checked_sub(&y).is_err());
            }
        })
    }

    #[test]
    fn shifts_match_builtin() {
        proptest!(|(a: u64, amount in 0usize..64)| {
            let x = BitNatural::from(a);
            prop_assert_eq!(&x << amount, BitNatural::from((a as u128) << amount));
            prop_assert_eq!(&x >> amount, BitNatural::from(a >> amount));
            prop_assert!((&x << amount).bits().is_normalized());
        })
    }

    #[test]
    fn converts_from_words() {
        proptest!(|(a: u128)| {
            prop_assert_eq!(BitNatural::from(&WordNatural::from(a)), BitNatural::from(a));
        })
    }
}
