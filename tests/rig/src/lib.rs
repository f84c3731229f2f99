//!
//! Shared infrastructure for the integration tests: logger setup, proptest
//! strategies for multi-limb numbers and conversion into the `num-bigint`
//! reference implementation.
//!
use num_bigint::BigUint;
use proptest::collection::vec;
use proptest::prelude::*;
use std::sync::Once;

pub use log;
pub use num_bigint;
pub use proptest;

static INIT_LOGGER_ONCE: Once = Once::new();
pub fn init_logger() {
    INIT_LOGGER_ONCE.call_once(env_logger::init);
}

/// Little-endian 32-bit limbs, between one and `max_limbs` of them.
pub fn limbs(max_limbs: usize) -> impl Strategy<Value = Vec<u32>> {
    vec(any::<u32>(), 1..=max_limbs)
}

/// Limbs of a nonzero number.
pub fn nonzero_limbs(max_limbs: usize) -> impl Strategy<Value = Vec<u32>> {
    limbs(max_limbs).prop_filter("zero", |limbs| limbs.iter().any(|&limb| limb != 0))
}

pub fn reference_from_limbs(limbs: &[u32]) -> BigUint {
    BigUint::from_slice(limbs)
}
