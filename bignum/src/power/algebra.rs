use alloc::string::String;
use alloc::vec::Vec;
use core::ops::{Add, Div, Mul, Neg};
use num_traits::{One, Zero};

/// Associative binary operation on `A`.
pub trait SemigroupOp<A> {
    fn combine(&self, a: &A, b: &A) -> A;
}

/// Semigroup operation with an identity element.
pub trait MonoidOp<A>: SemigroupOp<A> {
    fn identity(&self) -> A;
}

/// Monoid operation where every element has an inverse.
pub trait GroupOp<A>: MonoidOp<A> {
    fn inverse(&self, a: &A) -> A;
}

/// Addition. Identity `0`, inverse negation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Plus;

impl<A> SemigroupOp<A> for Plus
where
    for<'a> &'a A: Add<&'a A, Output = A>,
{
    #[inline(always)]
    fn combine(&self, a: &A, b: &A) -> A {
        a + b
    }
}

impl<A: Zero> MonoidOp<A> for Plus
where
    for<'a> &'a A: Add<&'a A, Output = A>,
{
    #[inline(always)]
    fn identity(&self) -> A {
        A::zero()
    }
}

impl<A: Zero> GroupOp<A> for Plus
where
    for<'a> &'a A: Add<&'a A, Output = A> + Neg<Output = A>,
{
    #[inline(always)]
    fn inverse(&self, a: &A) -> A {
        -a
    }
}

/// Multiplication. Identity `1`, inverse the reciprocal `1 / a`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Multiplies;

impl<A> SemigroupOp<A> for Multiplies
where
    for<'a> &'a A: Mul<&'a A, Output = A>,
{
    #[inline(always)]
    fn combine(&self, a: &A, b: &A) -> A {
        a * b
    }
}

impl<A: One> MonoidOp<A> for Multiplies
where
    for<'a> &'a A: Mul<&'a A, Output = A>,
{
    #[inline(always)]
    fn identity(&self) -> A {
        A::one()
    }
}

impl<A: One + Zero> GroupOp<A> for Multiplies
where
    for<'a> &'a A: Mul<&'a A, Output = A> + Div<&'a A, Output = A>,
{
    /// # Panics
    /// If `a` is zero.
    fn inverse(&self, a: &A) -> A {
        assert!(!a.is_zero(), "zero has no multiplicative inverse");
        &A::one() / a
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LogicalOr;

impl SemigroupOp<bool> for LogicalOr {
    #[inline(always)]
    fn combine(&self, a: &bool, b: &bool) -> bool {
        *a || *b
    }
}

impl MonoidOp<bool> for LogicalOr {
    #[inline(always)]
    fn identity(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LogicalAnd;

impl SemigroupOp<bool> for LogicalAnd {
    #[inline(always)]
    fn combine(&self, a: &bool, b: &bool) -> bool {
        *a && *b
    }
}

impl MonoidOp<bool> for LogicalAnd {
    #[inline(always)]
    fn identity(&self) -> bool {
        true
    }
}

/// Concatenation of strings or vectors; not commutative. Identity is the
/// empty sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Concat;

impl SemigroupOp<String> for Concat {
    fn combine(&self, a: &String, b: &String) -> String {
        let mut result = String::with_capacity(a.len() + b.len());
        result.push_str(a);
        result.push_str(b);
        result
    }
}

impl MonoidOp<String> for Concat {
    #[inline(always)]
    fn identity(&self) -> String {
        String::new()
    }
}

impl<T: Clone> SemigroupOp<Vec<T>> for Concat {
    fn combine(&self, a: &Vec<T>, b: &Vec<T>) -> Vec<T> {
        let mut result = Vec::with_capacity(a.len() + b.len());
        result.extend_from_slice(a);
        result.extend_from_slice(b);
        result
    }
}

impl<T: Clone> MonoidOp<Vec<T>> for Concat {
    #[inline(always)]
    fn identity(&self) -> Vec<T> {
        Vec::new()
    }
}

/// Lifts an associative closure into a [`SemigroupOp`].
#[derive(Debug, Clone, Copy)]
pub struct FnSemigroup<F>(pub F);

impl<A, F> SemigroupOp<A> for FnSemigroup<F>
where
    F: Fn(&A, &A) -> A,
{
    #[inline(always)]
    fn combine(&self, a: &A, b: &A) -> A {
        (self.0)(a, b)
    }
}

/// Lifts an associative closure and its identity element into a [`MonoidOp`].
#[derive(Debug, Clone, Copy)]
pub struct FnMonoid<F, A> {
    pub op: F,
    pub identity: A,
}

impl<F, A> FnMonoid<F, A> {
    pub const fn new(op: F, identity: A) -> Self {
        Self { op, identity }
    }
}

impl<A, F> SemigroupOp<A> for FnMonoid<F, A>
where
    F: Fn(&A, &A) -> A,
{
    #[inline(always)]
    fn combine(&self, a: &A, b: &A) -> A {
        (self.op)(a, b)
    }
}

impl<A: Clone, F> MonoidOp<A> for FnMonoid<F, A>
where
    F: Fn(&A, &A) -> A,
{
    #[inline(always)]
    fn identity(&self) -> A {
        self.identity.clone()
    }
}
