#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use bignum::modular::modular_pow;
use bignum::{DomainError, WordNatural};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

#[derive(Debug, Arbitrary)]
struct ModPowInput {
    base: Vec<u8>,
    exponent: Vec<u8>,
    modulus: Vec<u8>,
}

fn fuzz(data: &[u8]) {
    let u = &mut Unstructured::new(data);
    let Ok(input) = u.arbitrary::<ModPowInput>() else {
        return;
    };
    if input.base.len() > 64 || input.exponent.len() > 32 || input.modulus.len() > 64 {
        return;
    }

    let base = WordNatural::from_be_bytes(&input.base);
    let exponent = WordNatural::from_be_bytes(&input.exponent);
    let modulus = WordNatural::from_be_bytes(&input.modulus);

    match modular_pow(&base, exponent, &modulus) {
        Ok(result) => {
            let reference = BigUint::from_bytes_be(&input.base).modpow(
                &BigUint::from_bytes_be(&input.exponent),
                &BigUint::from_bytes_be(&input.modulus),
            );
            assert_eq!(result.to_string(), reference.to_string());
        }
        Err(error) => {
            assert_eq!(error, DomainError::DivisionByZero);
            assert!(modulus.is_zero());
        }
    }
}

fuzz_target!(|data: &[u8]| {
    // call fuzzing in a separate function, so we can see its coverage
    fuzz(data);
});
