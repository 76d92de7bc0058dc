//! Seedable 64-bit linear congruential generator.
//!
//! Not suitable for cryptography. Sequences are fully determined by the seed:
//! two generators built from the same seed produce the same outputs forever.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod constants;
pub mod error;
pub mod rng;
pub mod seed;

pub use error::SeedError;
pub use rng::Lcg;
pub use seed::parse_seed;

/// Create a generator whose state is `seed`.
pub const fn init(seed: u64) -> Lcg {
    Lcg::new(seed)
}

/// Advance `rng` and return the high 32 bits of its new state.
#[inline]
pub fn next(rng: &mut Lcg) -> u32 {
    rng.next_u32()
}
