//! Exponentiation by repeated squaring, generic over the operation.
//!
//! `power_*(a, n, &op)` computes `a op a op ... op a` (`n` operands) using
//! `O(log n)` applications of `op`. Nothing here assumes multiplication: the
//! same routine yields `n * a` for [`Plus`], `a^n` for [`Multiplies`], a
//! repeated string for [`Concat`] and matrix powers for any matrix semiring.

use num_traits::{One, Zero};

mod algebra;

pub use self::algebra::{
    Concat, FnMonoid, FnSemigroup, GroupOp, LogicalAnd, LogicalOr, MonoidOp, Multiplies, Plus,
    SemigroupOp,
};

/// Integer usable as an exponent.
pub trait Exponent: Clone + PartialEq + Zero + One {
    fn is_odd(&self) -> bool;

    /// Divides by two, rounding toward zero.
    fn halve(&mut self);

    fn is_negative(&self) -> bool {
        false
    }
}

/// Exponent that may be negative, for [`power_group`].
pub trait SignedExponent: Exponent {
    fn negate(&mut self);
}

macro_rules! impl_unsigned_exponent {
    ($($t:ty),*) => {
        $(
            impl Exponent for $t {
                #[inline(always)]
                fn is_odd(&self) -> bool {
                    *self & 1 == 1
                }

                #[inline(always)]
                fn halve(&mut self) {
                    *self >>= 1;
                }
            }
        )*
    };
}

macro_rules! impl_signed_exponent {
    ($($t:ty),*) => {
        $(
            impl Exponent for $t {
                #[inline(always)]
                fn is_odd(&self) -> bool {
                    *self & 1 != 0
                }

                #[inline(always)]
                fn halve(&mut self) {
                    *self /= 2;
                }

                #[inline(always)]
                fn is_negative(&self) -> bool {
                    *self < 0
                }
            }

            impl SignedExponent for $t {
                #[inline(always)]
                fn negate(&mut self) {
                    *self = -*self;
                }
            }
        )*
    };
}

impl_unsigned_exponent!(u8, u16, u32, u64, u128, usize);
impl_signed_exponent!(i8, i16, i32, i64, i128, isize);

/// `a` combined with itself `n` times.
///
/// # Panics
/// If `n` is zero or negative.
pub fn power_semigroup<A, N, Op>(mut a: A, mut n: N, op: &Op) -> A
where
    N: Exponent,
    Op: SemigroupOp<A> + ?Sized,
{
    assert!(
        !n.is_negative() && !n.is_zero(),
        "semigroup power needs a positive exponent"
    );
    while !n.is_odd() {
        a = op.combine(&a, &a);
        n.halve();
    }
    if n.is_one() {
        return a;
    }
    let squared = op.combine(&a, &a);
    // n is odd, so halving yields (n - 1) / 2
    n.halve();
    power_accumulate(a, squared, n, op)
}

/// `r op a^n`, with the invariant `r op a^n` preserved across iterations.
fn power_accumulate<A, N, Op>(mut r: A, mut a: A, mut n: N, op: &Op) -> A
where
    N: Exponent,
    Op: SemigroupOp<A> + ?Sized,
{
    if n.is_zero() {
        return r;
    }
    loop {
        if n.is_odd() {
            r = op.combine(&r, &a);
            if n.is_one() {
                return r;
            }
        }
        n.halve();
        a = op.combine(&a, &a);
    }
}

/// Like [`power_semigroup`], with `n == 0` giving the identity element.
///
/// # Panics
/// If `n` is negative.
pub fn power_monoid<A, N, Op>(a: A, n: N, op: &Op) -> A
where
    N: Exponent,
    Op: MonoidOp<A> + ?Sized,
{
    assert!(!n.is_negative(), "monoid power needs a non-negative exponent");
    if n.is_zero() {
        return op.identity();
    }
    power_semigroup(a, n, op)
}

/// Like [`power_monoid`]; a negative `n` raises the inverse of `a` to `-n`.
pub fn power_group<A, N, Op>(a: A, mut n: N, op: &Op) -> A
where
    N: SignedExponent,
    Op: GroupOp<A> + ?Sized,
{
    if !n.is_negative() {
        return power_monoid(a, n, op);
    }
    // negate only the halved exponent, -n itself may not be representable
    let odd = n.is_odd();
    n.halve();
    n.negate();
    let inverse = op.inverse(&a);
    let result = power_monoid(op.combine(&inverse, &inverse), n, op);
    if odd {
        op.combine(&result, &inverse)
    } else {
        result
    }
}
