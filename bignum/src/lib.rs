#![cfg_attr(not(test), no_std)]
#![allow(clippy::new_without_default)]

//! Arbitrary-precision natural numbers and integers, with exponentiation by
//! squaring generic over the combining operation.
//!
//! Two interchangeable natural representations implement [`Natural`]:
//! [`BitNatural`] stores one bit per position, [`WordNatural`] stores 32-bit
//! limbs. Everything else (signed integers, rationals, modular operators,
//! Euclid, primality) is written once against the trait.

extern crate alloc;

pub mod errors;
pub mod euclid;
pub mod matrix;
pub mod modular;
pub mod natural;
pub mod power;
pub mod primes;
pub mod rational;
pub mod signed;

pub use self::errors::{ArithmeticError, DomainError, NarrowingError, ParseError};
pub use self::natural::{from_literal, Base, BitNatural, Natural, WordNatural};
pub use self::power::{
    power_group, power_monoid, power_semigroup, Exponent, GroupOp, MonoidOp, SemigroupOp,
    SignedExponent,
};
pub use self::rational::{BitRational, Rational, WordRational};
pub use self::signed::{BitInteger, Signed, WordInteger};

pub use ruint;
