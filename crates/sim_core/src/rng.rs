//! Seeded random source.
//!
//! Every draw the simulation makes goes through this stream, so all
//! participants sharing a seed reproduce the same world and the same
//! cosmetic rolls.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct SimRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The seed this stream was built from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in `[min, max]`. A degenerate range returns `min`.
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if !(min < max) {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Uniform integer in `[min, max]`. A degenerate range returns `min`.
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Bernoulli draw; `p` is clamped into `[0, 1]`.
    pub fn chance(&mut self, p: f32) -> bool {
        self.rng.random_bool(f64::from(p.clamp(0.0, 1.0)))
    }

    /// Uniform pick from a slice; `None` when empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.rng.random_range(0..items.len());
        items.get(i)
    }

    /// Direct access for callers taking `impl Rng` (world generation).
    #[inline]
    pub fn inner(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}
