// Copyright @yucwang 2026

use crate::math::constants::Float;

const PCG32_DEFAULT_STATE: u64 = 0xffc5d3a96def55f9;
const PCG32_DEFAULT_STREAM: u64 = 0xc3579e39d9baf6b8;
const PCG32_MULT: u64 = 6364136223846793005;

/// PCG32 generator (XSH-RR output). Distinct `stream` values give
/// statistically independent sequences.
#[derive(Debug, Clone)]
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Default for Pcg32 {
    fn default() -> Self {
        Self::new(PCG32_DEFAULT_STATE, PCG32_DEFAULT_STREAM)
    }
}

impl Pcg32 {
    pub fn new(init_state: u64, stream: u64) -> Self {
        let mut rng = Self { state: 0, inc: (stream << 1) | 1 };
        rng.next_u32();
        rng.state = rng.state.wrapping_add(init_state);
        rng.next_u32();
        rng
    }

    pub fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.state = old_state.wrapping_mul(PCG32_MULT).wrapping_add(self.inc);
        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform float in [0, 1).
    pub fn next_float(&mut self) -> Float {
        (self.next_u32() as Float) * (1.0 / 4294967296.0)
    }
}
