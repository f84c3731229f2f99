use crate::errors::DomainError;
use crate::euclid::extended_gcd;
use crate::natural::Natural;
use crate::power::{power_monoid, Exponent, GroupOp, MonoidOp, SemigroupOp};

macro_rules! modular_operator {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name<N> {
            modulus: N,
        }

        impl<N: Natural> $name<N> {
            /// # Errors
            /// [`DomainError::DivisionByZero`] for a zero modulus.
            pub fn new(modulus: N) -> Result<Self, DomainError> {
                if modulus.is_zero() {
                    return Err(DomainError::DivisionByZero);
                }
                Ok(Self { modulus })
            }

            #[inline(always)]
            pub fn modulus(&self) -> &N {
                &self.modulus
            }

            #[inline(always)]
            fn reduce(&self, mut value: N) -> N {
                value %= &self.modulus;
                value
            }
        }
    };
}

modular_operator!(
    /// `(a + b) mod n`.
    PlusMod
);
modular_operator!(
    /// `(a - b) mod n`, always in `[0, n)`.
    MinusMod
);
modular_operator!(
    /// `(a * b) mod n`.
    MultipliesMod
);
modular_operator!(
    /// `(a / b) mod n` with natural-number (truncating) division.
    DividesMod
);

impl<N: Natural> PlusMod<N> {
    pub fn apply(&self, a: &N, b: &N) -> N {
        let mut sum = a.clone();
        sum += b;
        self.reduce(sum)
    }
}

impl<N: Natural> MinusMod<N> {
    pub fn apply(&self, a: &N, b: &N) -> N {
        let mut difference = self.reduce(a.clone());
        difference += &self.modulus;
        difference -= &self.reduce(b.clone());
        self.reduce(difference)
    }
}

impl<N: Natural> MultipliesMod<N> {
    pub fn apply(&self, a: &N, b: &N) -> N {
        let mut product = a.clone();
        product *= b;
        self.reduce(product)
    }
}

impl<N: Natural> DividesMod<N> {
    /// # Errors
    /// [`DomainError::DivisionByZero`] if `b` is zero.
    pub fn apply(&self, a: &N, b: &N) -> Result<N, DomainError> {
        let (quotient, _) = a.divmod(b)?;
        Ok(self.reduce(quotient))
    }
}

impl<N: Natural> SemigroupOp<N> for PlusMod<N> {
    #[inline(always)]
    fn combine(&self, a: &N, b: &N) -> N {
        self.apply(a, b)
    }
}

impl<N: Natural> MonoidOp<N> for PlusMod<N> {
    #[inline(always)]
    fn identity(&self) -> N {
        N::zero()
    }
}

impl<N: Natural> GroupOp<N> for PlusMod<N> {
    fn inverse(&self, a: &N) -> N {
        let mut inverse = self.modulus.clone();
        inverse -= &self.reduce(a.clone());
        self.reduce(inverse)
    }
}

impl<N: Natural> SemigroupOp<N> for MultipliesMod<N> {
    #[inline(always)]
    fn combine(&self, a: &N, b: &N) -> N {
        self.apply(a, b)
    }
}

impl<N: Natural> MonoidOp<N> for MultipliesMod<N> {
    /// `1 mod n`, which is `0` for `n == 1`.
    fn identity(&self) -> N {
        self.reduce(N::one())
    }
}

/// `base^exponent mod modulus`.
///
/// # Errors
/// [`DomainError::DivisionByZero`] for a zero modulus.
pub fn modular_pow<N, E>(base: &N, exponent: E, modulus: &N) -> Result<N, DomainError>
where
    N: Natural,
    E: Exponent,
{
    let op = MultipliesMod::new(modulus.clone())?;
    let base = op.reduce(base.clone());
    Ok(power_monoid(base, exponent, &op))
}

/// `x` in `[0, n)` with `a * x ≡ 1 (mod n)`, if `a` and `n` are coprime.
pub fn modular_inverse<N: Natural>(a: &N, modulus: &N) -> Option<N> {
    if modulus.is_zero() {
        return None;
    }
    let mut reduced = a.clone();
    reduced %= modulus;
    let (gcd, x, _) = extended_gcd(&reduced, modulus);
    if !gcd.is_one() {
        return None;
    }

    let (negative, magnitude) = x.into_parts();
    let mut inverse = magnitude;
    inverse %= modulus;
    if negative && !inverse.is_zero() {
        let mut positive = modulus.clone();
        positive -= &inverse;
        inverse = positive;
    }
    Some(inverse)
}
