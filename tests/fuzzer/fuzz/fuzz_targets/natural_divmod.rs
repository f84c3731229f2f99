#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use bignum::{BitNatural, Natural, WordNatural};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use num_traits::Zero;

#[derive(Debug, Arbitrary)]
struct DivisionInput {
    dividend: Vec<u8>,
    divisor: Vec<u8>,
}

fn fuzz(data: &[u8]) {
    let u = &mut Unstructured::new(data);
    let Ok(input) = u.arbitrary::<DivisionInput>() else {
        return;
    };
    if input.dividend.len() > 64 || input.divisor.len() > 64 {
        return;
    }

    let dividend = WordNatural::from_be_bytes(&input.dividend);
    let divisor = WordNatural::from_be_bytes(&input.divisor);
    let reference_dividend = BigUint::from_bytes_be(&input.dividend);
    let reference_divisor = BigUint::from_bytes_be(&input.divisor);

    let Ok((quotient, remainder)) = dividend.divmod(&divisor) else {
        assert!(reference_divisor.is_zero());
        return;
    };
    assert_eq!(
        quotient.to_string(),
        (&reference_dividend / &reference_divisor).to_string()
    );
    assert_eq!(
        remainder.to_string(),
        (&reference_dividend % &reference_divisor).to_string()
    );

    let bit_dividend = BitNatural::from(&dividend);
    let bit_divisor = BitNatural::from(&divisor);
    let (bit_quotient, bit_remainder) = bit_dividend.divmod(&bit_divisor).unwrap();
    assert_eq!(WordNatural::from(&bit_quotient), quotient);
    assert_eq!(WordNatural::from(&bit_remainder), remainder);
}

fuzz_target!(|data: &[u8]| {
    // call fuzzing in a separate function, so we can see its coverage
    fuzz(data);
});
