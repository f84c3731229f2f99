use alloc::vec::Vec;
use bit_sequence::BitSequence;
use log::{debug, trace};
use rand_core::RngCore;

use crate::modular::MultipliesMod;
use crate::natural::Natural;
use crate::power::{power_monoid, SemigroupOp};

/// Trial division by every prime below this bound precedes Miller-Rabin.
pub const SMALL_PRIME_LIMIT: usize = 8000;

/// Settings of the probabilistic primality test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MillerRabinConfig {
    /// Number of random witnesses; a composite survives each with
    /// probability at most 1/4.
    pub rounds: u32,
}

impl Default for MillerRabinConfig {
    fn default() -> Self {
        Self { rounds: 30 }
    }
}

/// All primes strictly below `limit`.
pub fn sieve_of_eratosthenes(limit: usize) -> Vec<usize> {
    if limit < 3 {
        return Vec::new();
    }
    let mut candidates = BitSequence::with_len(limit, true);
    candidates.set(0, false);
    candidates.set(1, false);

    let mut p = 2;
    while p * p < limit {
        if candidates.get(p) {
            let mut multiple = p * p;
            while multiple < limit {
                candidates.set(multiple, false);
                multiple += p;
            }
        }
        p += 1;
    }

    candidates
        .iter()
        .enumerate()
        .filter_map(|(n, is_prime)| is_prime.then_some(n))
        .collect()
}

/// Prime factors of `n` in ascending order, with multiplicity.
///
/// The trivial factorization is left out: `0`, `1` and every prime yield an
/// empty list.
pub fn prime_factors<N: Natural>(n: &N) -> Vec<N> {
    let mut factors = Vec::new();
    let two = N::from(2u64);
    if *n <= two {
        return factors;
    }

    let mut rest = n.clone();
    let mut divisor = two.clone();
    loop {
        let mut square = divisor.clone();
        square *= &divisor;
        if square > rest {
            break;
        }

        let (quotient, remainder) = match rest.divmod(&divisor) {
            Ok(result) => result,
            Err(_) => break,
        };
        if remainder.is_zero() {
            factors.push(divisor.clone());
            rest = quotient;
        } else if divisor == two {
            divisor = N::from(3u64);
        } else {
            divisor += &two;
        }
    }

    if !factors.is_empty() {
        factors.push(rest);
    }
    factors
}

/// Deterministic primality check by trial division.
pub fn is_prime<N: Natural>(n: &N) -> bool {
    *n > N::one() && prime_factors(n).is_empty()
}

/// Small primes lifted into `N` once per search.
struct SmallPrimes<N> {
    primes: Vec<N>,
}

impl<N: Natural> SmallPrimes<N> {
    fn new() -> Self {
        let primes = sieve_of_eratosthenes(SMALL_PRIME_LIMIT)
            .into_iter()
            .map(|p| N::from(p as u64))
            .collect();
        Self { primes }
    }

    fn divides(&self, n: &N) -> bool {
        if *n <= N::one() {
            return true;
        }
        self.primes.iter().any(|p| {
            if p == n {
                return false;
            }
            let mut remainder = n.clone();
            remainder %= p;
            remainder.is_zero()
        })
    }
}

/// `true` if `n` is `0`, `1`, or has a prime factor below
/// [`SMALL_PRIME_LIMIT`] other than itself.
pub fn is_divisible_by_small_prime<N: Natural>(n: &N) -> bool {
    SmallPrimes::new().divides(n)
}

/// Uniformly random number with exactly `bits` binary digits (the highest
/// one set).
///
/// # Panics
/// If `bits == 0`.
pub fn random_bits<N: Natural, R: RngCore + ?Sized>(bits: usize, rng: &mut R) -> N {
    assert!(bits > 0, "random number needs at least one bit");
    let mut top = N::one();
    top <<= bits - 1;
    let mut result = random_up_to_bits::<N, R>(bits - 1, rng);
    result += &top;
    result
}

fn random_up_to_bits<N: Natural, R: RngCore + ?Sized>(mut bits: usize, rng: &mut R) -> N {
    let mut result = N::zero();
    while bits >= 32 {
        result <<= 32;
        result += &N::from(rng.next_u32() as u64);
        bits -= 32;
    }
    if bits > 0 {
        result <<= bits;
        result += &N::from((rng.next_u32() >> (32 - bits)) as u64);
    }
    result
}

/// Uniformly random number in `[0, bound)`, by rejection sampling.
///
/// # Panics
/// If `bound` is zero.
pub fn random_below<N: Natural, R: RngCore + ?Sized>(bound: &N, rng: &mut R) -> N {
    assert!(!bound.is_zero(), "cannot sample below zero");
    let bits = bound.bit_len();
    loop {
        let candidate = random_up_to_bits::<N, R>(bits, rng);
        if candidate < *bound {
            return candidate;
        }
    }
}

/// Miller-Rabin test. `false` is always correct; `true` is wrong with
/// probability at most `4^-rounds`.
pub fn is_probable_prime<N: Natural, R: RngCore + ?Sized>(
    n: &N,
    config: &MillerRabinConfig,
    rng: &mut R,
) -> bool {
    let one = N::one();
    let three = N::from(3u64);
    if *n <= three {
        return *n > one;
    }
    if n.is_even() {
        return false;
    }
    let Ok(multiplies) = MultipliesMod::new(n.clone()) else {
        return false;
    };

    let mut n_minus_one = n.clone();
    n_minus_one -= &one;
    let s = n_minus_one.trailing_zeros();
    let mut d = n_minus_one.clone();
    d >>= s;

    // witnesses come from [2, n - 2]
    let mut span = n.clone();
    span -= &three;
    let two = N::from(2u64);

    'witness: for round in 0..config.rounds {
        let mut a = random_below(&span, rng);
        a += &two;
        trace!("Miller-Rabin round {round} for {n} with witness {a}");

        let mut x = power_monoid(a.clone(), d.clone(), &multiplies);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = multiplies.combine(&x, &x);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        debug!("{n} is composite, witness {a}");
        return false;
    }
    true
}

/// Smallest probable prime `>= start`.
pub fn find_next_prime<N: Natural, R: RngCore + ?Sized>(
    start: &N,
    config: &MillerRabinConfig,
    rng: &mut R,
) -> N {
    let two = N::from(2u64);
    if *start <= two {
        return two;
    }

    let small_primes = SmallPrimes::new();
    let mut candidate = start.clone();
    if candidate.is_even() {
        candidate += &N::one();
    }
    while small_primes.divides(&candidate) || !is_probable_prime(&candidate, config, rng) {
        trace!("{candidate} rejected");
        candidate += &two;
    }
    debug!("found prime {candidate}");
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BitNatural, WordNatural};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word(value: u64) -> WordNatural {
        WordNatural::from(value)
    }

    #[test]
    fn sieve_up_to_one_thousand() {
        let primes = sieve_of_eratosthenes(1000);
        assert_eq!(primes.len(), 168);
        assert_eq!(primes.first(), Some(&2));
        assert_eq!(primes.last(), Some(&997));
        assert!(sieve_of_eratosthenes(2).is_empty());
        assert_eq!(sieve_of_eratosthenes(3), [2]);
        assert_eq!(sieve_of_eratosthenes(SMALL_PRIME_LIMIT).last(), Some(&7993));
    }

    #[test]
    fn factorization() {
        let factors: Vec<u64> = prime_factors(&word(120391248))
            .iter()
            .map(|f| f.try_to_u64().unwrap())
            .collect();
        assert_eq!(factors, [2, 2, 2, 2, 3, 2508151]);

        assert_eq!(prime_factors(&BitNatural::from(84u64)).len(), 4);
        assert!(prime_factors(&word(0)).is_empty());
        assert!(prime_factors(&word(1)).is_empty());
        assert!(prime_factors(&word(2)).is_empty());
        assert!(prime_factors(&word(7919)).is_empty());
        assert_eq!(prime_factors(&word(4)), [word(2), word(2)]);
    }

    #[test]
    fn trial_division_agrees_with_sieve() {
        let primes = sieve_of_eratosthenes(500);
        for n in 0..500u64 {
            assert_eq!(is_prime(&word(n)), primes.contains(&(n as usize)), "{n}");
        }
    }

    #[test]
    fn small_prime_divisibility() {
        assert!(is_divisible_by_small_prime(&word(0)));
        assert!(is_divisible_by_small_prime(&word(1)));
        assert!(is_divisible_by_small_prime(&word(7993 * 3)));
        assert!(!is_divisible_by_small_prime(&word(7993)));
        assert!(!is_divisible_by_small_prime(&word(8009)));
    }

    #[test]
    fn random_numbers_have_the_requested_size() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for bits in [1usize, 7, 31, 32, 33, 64, 100, 256] {
            let n: WordNatural = random_bits(bits, &mut rng);
            assert_eq!(n.bit_len(), bits);
        }
        let bound = word(1000);
        for _ in 0..200 {
            assert!(random_below(&bound, &mut rng) < bound);
        }
        assert!(random_below(&word(1), &mut rng).is_zero());
    }

    #[test]
    fn miller_rabin_vectors() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = MillerRabinConfig::default();
        let mersenne_61 = (WordNatural::one() << 61) - WordNatural::one();
        let mersenne_89 = (WordNatural::one() << 89) - WordNatural::one();
        assert!(is_probable_prime(&mersenne_61, &config, &mut rng));
        assert!(is_probable_prime(&mersenne_89, &config, &mut rng));

        assert!(!is_probable_prime(&word(561), &config, &mut rng));
        assert!(!is_probable_prime(&word(132049 * 216091), &config, &mut rng));
        assert!(!is_probable_prime(&word(1), &config, &mut rng));
        assert!(is_probable_prime(&word(2), &config, &mut rng));
        assert!(is_probable_prime(&word(5), &config, &mut rng));
        assert!(!is_probable_prime(&word(9), &config, &mut rng));
    }

    #[test]
    fn next_prime_search() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = MillerRabinConfig { rounds: 20 };
        assert_eq!(find_next_prime(&word(0), &config, &mut rng), word(2));
        assert_eq!(find_next_prime(&word(3), &config, &mut rng), word(3));
        assert_eq!(find_next_prime(&word(24), &config, &mut rng), word(29));
        assert_eq!(find_next_prime(&word(7920), &config, &mut rng), word(7927));
        assert_eq!(find_next_prime(&word(1_000_000), &config, &mut rng), word(1_000_003));
    }
}
