#![no_main]

use bignum::{Base, Natural, ParseError, WordNatural};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

fn fuzz(data: &[u8]) {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if text.len() > 256 {
        return;
    }

    for base in [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal] {
        match WordNatural::from_str_radix(text, base) {
            Ok(value) => {
                let printed = value.to_str_radix(base);
                assert_eq!(WordNatural::from_str_radix(&printed, base), Ok(value));
                let reference = BigUint::parse_bytes(printed.as_bytes(), base.radix()).unwrap();
                assert_eq!(reference.to_str_radix(base.radix()), printed);
            }
            Err(ParseError::InvalidDigit { position, .. }) => assert!(position < text.len()),
            Err(ParseError::Empty) => {}
        }
    }
}

fuzz_target!(|data: &[u8]| {
    // call fuzzing in a separate function, so we can see its coverage
    fuzz(data);
});
