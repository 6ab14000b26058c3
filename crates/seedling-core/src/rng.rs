//! Random source abstraction for determinism.
//!
//! In production, this wraps a seeded ChaCha generator. In tests, a scripted
//! or fixed implementation is injected through [`crate::seed::SeedState`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The primitive generator every draw funnels through.
///
/// Implementations only need the two primitives below; all higher-level
/// sampling is built on top of them by the randomizer.
pub trait RandomSource: Send {
    /// Generate a uniform integer in the half-open range `[low, high)`.
    ///
    /// Callers guarantee `low < high`.
    fn next_range(&mut self, low: i64, high: i64) -> i64;

    /// Generate a uniform `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

/// Production source backed by `ChaCha8Rng`.
///
/// The ChaCha stream is value-stable across platforms. Range sampling comes
/// from `rand` and is only stable within a `rand` minor series, so a recorded
/// seed reproduces the same draws as long as `rand` stays on 0.9.
#[derive(Debug, Clone)]
pub struct ChaChaSource {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ChaChaSource {
    /// Create a source from a 64-bit seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed this source was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for ChaChaSource {
    fn next_range(&mut self, low: i64, high: i64) -> i64 {
        self.inner.random_range(low..high)
    }

    fn next_f64(&mut self) -> f64 {
        self.inner.random()
    }
}
