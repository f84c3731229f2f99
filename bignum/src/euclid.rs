use crate::natural::Natural;
use crate::signed::Signed;

/// Greatest common divisor; `gcd(0, 0) == 0`.
pub fn gcd<N: Natural>(a: &N, b: &N) -> N {
    let (mut a, mut b) = if a < b {
        (b.clone(), a.clone())
    } else {
        (a.clone(), b.clone())
    };
    while !b.is_zero() {
        a %= &b;
        core::mem::swap(&mut a, &mut b);
    }
    a
}

/// Least common multiple; zero if either argument is zero.
pub fn lcm<N: Natural>(a: &N, b: &N) -> N {
    if a.is_zero() || b.is_zero() {
        return N::zero();
    }
    let divisor = gcd(a, b);
    let (smaller, larger) = if a > b { (b, a) } else { (a, b) };
    let mut result = larger.clone();
    result /= &divisor;
    result *= smaller;
    result
}

/// `(g, x, y)` with `g == gcd(a, b)` and `a * x + b * y == g`.
pub fn extended_gcd<N: Natural>(a: &N, b: &N) -> (N, Signed<N>, Signed<N>) {
    let mut old_r = Signed::<N>::from(a.clone());
    let mut r = Signed::<N>::from(b.clone());
    let (mut old_s, mut s) = (Signed::<N>::one(), Signed::<N>::zero());
    let (mut old_t, mut t) = (Signed::<N>::zero(), Signed::<N>::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &(&quotient * &r);
        old_r = core::mem::replace(&mut r, next_r);

        let next_s = &old_s - &(&quotient * &s);
        old_s = core::mem::replace(&mut s, next_s);

        let next_t = &old_t - &(&quotient * &t);
        old_t = core::mem::replace(&mut t, next_t);
    }

    let (_, g) = old_r.into_parts();
    (g, old_s, old_t)
}
