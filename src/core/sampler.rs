// Copyright @yucwang 2026

use crate::core::rng::Pcg32;
use crate::math::constants::{Float, Vector2f};

/// Random stream owned by one render worker. Seeded from the tile index
/// range the worker processes.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: Pcg32,
}

impl Sampler {
    pub fn new(begin: u64, end: u64) -> Self {
        Self { rng: Pcg32::new(begin, end) }
    }

    pub fn next_1d(&mut self) -> Float {
        self.rng.next_float()
    }

    pub fn next_2d(&mut self) -> Vector2f {
        let x = self.rng.next_float();
        let y = self.rng.next_float();
        Vector2f::new(x, y)
    }
}
