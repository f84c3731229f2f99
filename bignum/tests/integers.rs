use bignum::ruint::aliases::U256;
use bignum::{Base, BitInteger, BitNatural, DomainError, Natural, ParseError, WordInteger, WordNatural};
use std::panic::{catch_unwind, AssertUnwindSafe};
use num_bigint::BigInt;
use proptest::prelude::*;

fn reference(value: &WordInteger) -> BigInt {
    value.to_string().parse().unwrap()
}

proptest! {
    #[test]
    fn signed_arithmetic_matches_bigint(a: i128, b: i128) {
        rig::init_logger();
        let (x, y) = (WordInteger::from(a), WordInteger::from(b));
        let (rx, ry) = (BigInt::from(a), BigInt::from(b));

        prop_assert_eq!(reference(&(&x + &y)), &rx + &ry);
        prop_assert_eq!(reference(&(&x - &y)), &rx - &ry);
        prop_assert_eq!(reference(&(&x * &y)), &rx * &ry);
        if b != 0 {
            // both truncate toward zero
            prop_assert_eq!(reference(&(&x / &y)), &rx / &ry);
            prop_assert_eq!(reference(&(&x % &y)), &rx % &ry);
        }
        prop_assert_eq!(x.cmp(&y), rx.cmp(&ry));
    }

    #[test]
    fn zero_is_never_negative(a: i64) {
        let x = WordInteger::from(a);
        let difference = &x - &x;
        prop_assert!(difference.is_zero());
        prop_assert!(!difference.is_negative());
        prop_assert!(!(-difference).is_negative());
        prop_assert!(!(&x * &WordInteger::zero()).is_negative());
    }

    #[test]
    fn signed_text_round_trip(a: i128) {
        let x = BitInteger::from(a);
        prop_assert_eq!(x.to_string(), a.to_string());
        for base in [Base::Binary, Base::Octal, Base::Hexadecimal] {
            let text = x.to_str_radix(base);
            prop_assert_eq!(BitInteger::from_str_radix(&text, base).unwrap(), x.clone());
        }
        prop_assert_eq!(i128::try_from(&x).unwrap(), a);
    }

    #[test]
    fn uint_round_trip(limbs: [u64; 4]) {
        let uint = U256::from_limbs(limbs);
        let natural = WordNatural::from(uint);
        prop_assert_eq!(natural.try_to_uint::<256, 4>().unwrap(), uint);
        prop_assert_eq!(natural.to_string(), uint.to_string());
        prop_assert_eq!(U256::try_from(&natural).unwrap(), uint);
    }
}

#[test]
fn division_by_zero_is_reported() {
    let x = WordInteger::from(-7i64);
    assert_eq!(
        x.checked_div_rem(&WordInteger::zero()),
        Err(DomainError::DivisionByZero)
    );
    assert_eq!(
        WordNatural::from(7u64).divmod(&WordNatural::zero()),
        Err(DomainError::DivisionByZero)
    );
    assert_eq!(
        WordNatural::zero().checked_sub(&WordNatural::one()),
        Err(DomainError::NegativeDifference)
    );
}

#[test]
#[should_panic(expected = "division by zero")]
fn operator_division_by_zero_panics() {
    let _ = WordNatural::from(7u64) / WordNatural::zero();
}

#[test]
fn failed_compound_division_keeps_the_receiver() {
    let mut words = WordNatural::from(1234u64);
    let zero = WordNatural::zero();
    assert!(catch_unwind(AssertUnwindSafe(|| words /= &zero)).is_err());
    assert_eq!(words, WordNatural::from(1234u64));

    let mut bits = BitNatural::from(99u64);
    let zero = BitNatural::zero();
    assert!(catch_unwind(AssertUnwindSafe(|| bits %= &zero)).is_err());
    assert_eq!(bits, BitNatural::from(99u64));

    let mut signed = WordInteger::from(-17i64);
    assert!(catch_unwind(AssertUnwindSafe(|| signed /= &WordInteger::zero())).is_err());
    assert_eq!(signed, WordInteger::from(-17i64));

    words /= &WordNatural::from(10u64);
    assert_eq!(words, WordNatural::from(123u64));
}

#[test]
fn natural_parse_accepts_an_explicit_plus() {
    assert_eq!("+5".parse::<WordNatural>(), Ok(WordNatural::from(5u64)));
    assert_eq!("+1_000".parse::<BitNatural>(), Ok(BitNatural::from(1000u64)));
    assert_eq!("+".parse::<WordNatural>(), Err(ParseError::Empty));
    assert_eq!(
        "++5".parse::<WordNatural>(),
        Err(ParseError::InvalidDigit { position: 1, character: '+' })
    );
    assert_eq!(
        "-5".parse::<WordNatural>(),
        Err(ParseError::InvalidDigit { position: 0, character: '-' })
    );
}

#[test]
fn narrowing_checks_the_range() {
    let big = WordInteger::from(i64::MIN) * WordInteger::from(2i64);
    assert!(i64::try_from(&big).is_err());
    assert_eq!(i128::try_from(&big).unwrap(), i64::MIN as i128 * 2);
    assert!(u64::try_from(&(WordNatural::one() << 64)).is_err());
}
