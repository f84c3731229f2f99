use core::fmt::{Debug, Display, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, Index, IndexMut, Mul};
use num_traits::{One, Zero};

/// The two operations a matrix product is built from: `add` must be
/// associative and commutative with identity `zero`, `mul` associative with
/// identity `one`, and `zero` must annihilate under `mul`.
pub trait Semiring<T> {
    fn zero() -> T;
    fn one() -> T;
    fn add(a: &T, b: &T) -> T;
    fn mul(a: &T, b: &T) -> T;
}

/// Ordinary `+` and `*`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Arithmetic;

impl<T: Zero + One> Semiring<T> for Arithmetic
where
    for<'a> &'a T: Add<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    #[inline(always)]
    fn zero() -> T {
        T::zero()
    }

    #[inline(always)]
    fn one() -> T {
        T::one()
    }

    #[inline(always)]
    fn add(a: &T, b: &T) -> T {
        a + b
    }

    #[inline(always)]
    fn mul(a: &T, b: &T) -> T {
        a * b
    }
}

/// Tropical semiring over path lengths, `None` standing for "unreachable".
/// Matrix powers of an adjacency matrix give shortest path lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinPlus;

impl<T: Zero + Ord + Clone> Semiring<Option<T>> for MinPlus
where
    for<'a> &'a T: Add<&'a T, Output = T>,
{
    #[inline(always)]
    fn zero() -> Option<T> {
        None
    }

    #[inline(always)]
    fn one() -> Option<T> {
        Some(T::zero())
    }

    fn add(a: &Option<T>, b: &Option<T>) -> Option<T> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.min(b).clone()),
            (Some(value), None) | (None, Some(value)) => Some(value.clone()),
            (None, None) => None,
        }
    }

    fn mul(a: &Option<T>, b: &Option<T>) -> Option<T> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a + b),
            _ => None,
        }
    }
}

/// Boolean `||` and `&&`; matrix powers give reachability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OrAnd;

impl Semiring<bool> for OrAnd {
    #[inline(always)]
    fn zero() -> bool {
        false
    }

    #[inline(always)]
    fn one() -> bool {
        true
    }

    #[inline(always)]
    fn add(a: &bool, b: &bool) -> bool {
        *a || *b
    }

    #[inline(always)]
    fn mul(a: &bool, b: &bool) -> bool {
        *a && *b
    }
}

/// `N x N` matrix whose product is taken over the semiring `S`.
pub struct SquareMatrix<T, const N: usize, S = Arithmetic> {
    entries: [[T; N]; N],
    _semiring: PhantomData<fn() -> S>,
}

impl<T, const N: usize, S: Semiring<T>> SquareMatrix<T, N, S> {
    /// # Panics
    /// If `N == 0`.
    pub fn from_rows(rows: [[T; N]; N]) -> Self {
        assert!(N > 0, "matrix must have a positive dimension");
        Self {
            entries: rows,
            _semiring: PhantomData,
        }
    }

    /// Every entry is the semiring zero.
    pub fn zero() -> Self {
        Self::from_rows(core::array::from_fn(|_| core::array::from_fn(|_| S::zero())))
    }

    /// Semiring one on the diagonal, zero elsewhere.
    pub fn identity() -> Self {
        Self::from_rows(core::array::from_fn(|i| {
            core::array::from_fn(|j| if i == j { S::one() } else { S::zero() })
        }))
    }

    pub fn rows(&self) -> &[[T; N]; N] {
        &self.entries
    }

    pub fn into_rows(self) -> [[T; N]; N] {
        self.entries
    }

    pub fn mul_ref(&self, other: &Self) -> Self {
        Self::from_rows(core::array::from_fn(|i| {
            core::array::from_fn(|j| {
                (0..N).fold(S::zero(), |acc, k| {
                    S::add(&acc, &S::mul(&self.entries[i][k], &other.entries[k][j]))
                })
            })
        }))
    }
}

impl<T: Clone, const N: usize, S> Clone for SquareMatrix<T, N, S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            _semiring: PhantomData,
        }
    }
}

impl<T: PartialEq, const N: usize, S> PartialEq for SquareMatrix<T, N, S> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Eq, const N: usize, S> Eq for SquareMatrix<T, N, S> {}

impl<T: Debug, const N: usize, S> Debug for SquareMatrix<T, N, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

impl<T: Display, const N: usize, S> Display for SquareMatrix<T, N, S> {
    /// One row per line, entries separated by `, `.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for row in &self.entries {
            for (j, entry) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{entry}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T, const N: usize, S> Index<(usize, usize)> for SquareMatrix<T, N, S> {
    type Output = T;

    /// # Panics
    /// If either index is out of range.
    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.entries[i][j]
    }
}

impl<T, const N: usize, S> IndexMut<(usize, usize)> for SquareMatrix<T, N, S> {
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.entries[i][j]
    }
}

impl<T, const N: usize, S: Semiring<T>> Mul for SquareMatrix<T, N, S> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self.mul_ref(&rhs)
    }
}

impl<'a, 'b, T, const N: usize, S: Semiring<T>> Mul<&'b SquareMatrix<T, N, S>>
    for &'a SquareMatrix<T, N, S>
{
    type Output = SquareMatrix<T, N, S>;

    #[inline(always)]
    fn mul(self, rhs: &'b SquareMatrix<T, N, S>) -> SquareMatrix<T, N, S> {
        self.mul_ref(rhs)
    }
}

impl<T, const N: usize, S: Semiring<T>> One for SquareMatrix<T, N, S> {
    #[inline(always)]
    fn one() -> Self {
        Self::identity()
    }
}
