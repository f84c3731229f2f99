#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use core::ops::{ShlAssign, ShrAssign};

/// Growable sequence of bits, least significant bit at index 0.
///
/// Every bit is stored as its own `bool`, so the sequence can be used as the
/// digit storage of a base-2 number as well as a plain bit set (e.g. a sieve).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSequence {
    bits: Vec<bool>,
}

impl BitSequence {
    pub const fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Creates a sequence of `len` bits, all set to `value`.
    pub fn with_len(len: usize, value: bool) -> Self {
        let mut bits = Vec::with_capacity(len);
        bits.resize(len, value);
        Self { bits }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.bits.capacity()
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    /// If `index >= self.len()`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.bits.len(), "bit index {index} out of range");
        self.bits[index]
    }

    /// # Panics
    /// If `index >= self.len()`.
    #[inline(always)]
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.bits.len(), "bit index {index} out of range");
        self.bits[index] = value;
    }

    #[inline(always)]
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Removes all `false` bits above the highest `true` bit. An all-zero
    /// sequence becomes empty.
    pub fn normalize(&mut self) {
        let significant = self
            .bits
            .iter()
            .rposition(|bit| *bit)
            .map_or(0, |highest| highest + 1);
        self.bits.truncate(significant);
    }

    /// Returns `true` if there are no `false` bits above the highest `true` bit.
    pub fn is_normalized(&self) -> bool {
        self.bits.last().map_or(true, |top| *top)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
        self.bits.iter().copied()
    }

    pub fn extend_to(&mut self, len: usize) {
        if len > self.bits.len() {
            self.bits.resize(len, false);
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BitSequence {
                /// One bit per binary digit of the builtin type, including the
                /// leading zeros. Call [`BitSequence::normalize`] to drop them.
                fn from(value: $t) -> Self {
                    let bits = (0..<$t>::BITS).map(|i| (value >> i) & 1 == 1).collect();
                    Self { bits }
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl ShlAssign<usize> for BitSequence {
    /// Inserts `rhs` zero bits at index 0.
    ///
    /// # Panics
    /// If `rhs == 0`.
    fn shl_assign(&mut self, rhs: usize) {
        assert!(rhs > 0, "shift amount must be positive");
        let len_before = self.bits.len();
        self.bits.splice(0..0, core::iter::repeat(false).take(rhs));
        debug_assert_eq!(len_before + rhs, self.bits.len());
    }
}

impl ShrAssign<usize> for BitSequence {
    /// Drops the `rhs` lowest bits.
    ///
    /// # Panics
    /// If `rhs == 0` or `rhs >= self.len()`.
    fn shr_assign(&mut self, rhs: usize) {
        assert!(rhs > 0, "shift amount must be positive");
        assert!(
            rhs < self.bits.len(),
            "shift amount {rhs} must be smaller than length {}",
            self.bits.len()
        );
        let len_before = self.bits.len();
        self.bits.drain(0..rhs);
        debug_assert_eq!(len_before - rhs, self.bits.len());
    }
}

impl Debug for BitSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "BitSequence(")?;
        for bit in self.bits.iter().rev() {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        write!(f, ")")
    }
}
