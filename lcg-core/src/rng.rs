//! 64-bit linear congruential generator with 32-bit output.
//!
//! The seed is used as the initial state unchanged, so `Lcg::new(s).state() == s`
//! for every `s`, including zero. Each step applies the recurrence from
//! [`crate::constants`] with wrapping arithmetic and reports the high 32 bits.

use serde::{Deserialize, Serialize};

use crate::constants::{INCREMENT, MULTIPLIER, OUTPUT_SHIFT};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Rebuild a generator from a previously observed `state()`.
    pub const fn from_state(state: u64) -> Self {
        Self { state }
    }

    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Advance once and return the full 64-bit state.
    #[inline]
    pub fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.step() >> OUTPUT_SHIFT) as u32
    }

    /// Random i32 in [-2^31, 2^31).
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    /// Random integer in [0, max). Returns 0 without stepping when `max == 0`.
    pub fn next_int(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Random i32 in [min, max_exclusive). An empty range yields `min`.
    pub fn next_range(&mut self, min: i32, max_exclusive: i32) -> i32 {
        if max_exclusive <= min {
            return min;
        }
        let span = max_exclusive.wrapping_sub(min) as u32;
        min.wrapping_add(self.next_int(span) as i32)
    }

    pub fn discard(&mut self, count: u64) {
        for _ in 0..count {
            self.step();
        }
    }
}

impl Iterator for Lcg {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
