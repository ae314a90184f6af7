//! Injectable randomness
//!
//! The core only ever needs one capability: a uniform float in a closed range.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform random values in `[min, max]`
pub trait UniformSource {
    fn uniform(&mut self, min: f32, max: f32) -> f32;
}

/// Seeded PCG source used for real runs
#[derive(Debug, Clone)]
pub struct PcgUniform {
    seed: u64,
    rng: Pcg32,
}

impl PcgUniform {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl UniformSource for PcgUniform {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each value is clamped into the requested range so a sequence written for
/// one range never produces an out-of-range sample. `values` must not be
/// empty; an empty sequence yields `min` for every request.
#[derive(Debug, Clone)]
pub struct SequenceUniform {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceUniform {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let values = values.into();
        debug_assert!(!values.is_empty(), "SequenceUniform needs at least one value");
        Self { values, cursor: 0 }
    }
}

impl UniformSource for SequenceUniform {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(min, max)
    }
}
