//! Recurrence parameters.
//!
//! `state' = MULTIPLIER * state + INCREMENT (mod 2^64)`. The pair is the one
//! Knuth lists for MMIX; it gives the full 2^64 period because `INCREMENT` is
//! odd and `MULTIPLIER - 1` is divisible by 4.

pub const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
pub const INCREMENT: u64 = 1_442_695_040_888_963_407;

// Output is the high half of the new state; the low bits of a power-of-two
// LCG have short periods.
pub const OUTPUT_SHIFT: u32 = 32;
