use super::Natural;
use crate::errors::DomainError;

pub(crate) fn divmod<N: Natural>(dividend: N, divisor: &N) -> Result<(N, N), DomainError> {
    if divisor.is_zero() {
        return Err(DomainError::DivisionByZero);
    }
    Ok(long_division(dividend, divisor))
}

pub(crate) fn divmod_or_panic<N: Natural>(dividend: N, divisor: &N) -> (N, N) {
    match divmod(dividend, divisor) {
        Ok(result) => result,
        Err(e) => panic!("{e}"),
    }
}

/// Quotient and remainder of `dividend` by a nonzero `divisor`.
///
/// The divisor is doubled until doubling once more would exceed the dividend,
/// then halved back down, subtracting wherever it fits. Only comparison,
/// subtraction and single-bit shifts are used, so both representations share
/// this routine.
pub(crate) fn long_division<N: Natural>(dividend: N, divisor: &N) -> (N, N) {
    debug_assert!(!divisor.is_zero());
    if dividend < *divisor {
        return (N::zero(), dividend);
    }
    if divisor.is_one() {
        return (dividend, N::zero());
    }

    let one = N::one();
    let mut helper = largest_doubling(&dividend, divisor.clone());
    let mut remainder = dividend;
    remainder -= &helper;
    let mut quotient = N::one();

    while helper != *divisor {
        helper >>= 1;
        quotient <<= 1;
        if helper <= remainder {
            remainder -= &helper;
            quotient += &one;
        }
    }

    debug_assert!(remainder < *divisor);
    (quotient, remainder)
}

/// Largest `candidate * 2^k` that does not exceed `dividend`.
fn largest_doubling<N: Natural>(dividend: &N, mut candidate: N) -> N {
    loop {
        let mut doubled = candidate.clone();
        doubled <<= 1;
        if doubled > *dividend {
            return candidate;
        }
        candidate = doubled;
    }
}
