//! Shared seed state.
//!
//! A single random source guarded by a mutex, shared by handle between every
//! randomizer in the process. Each primitive draw holds the lock for exactly
//! one call into the source; composite operations are never atomic.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::clock::Clock;
use crate::rng::{ChaChaSource, RandomSource};

/// Cloneable handle to the process-wide random source.
///
/// All clones observe the same source, including after [`SeedState::reseed`]
/// or [`SeedState::replace_source`].
#[derive(Clone)]
pub struct SeedState {
    source: Arc<Mutex<Box<dyn RandomSource>>>,
}

impl SeedState {
    /// Create a state backed by a ChaCha source with a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        tracing::debug!(seed, "seed state created");
        Self::with_source(ChaChaSource::from_seed(seed))
    }

    /// Create a state seeded from the current time of `clock`.
    #[must_use]
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::from_seed(clock.time_seed())
    }

    /// Create a state around an arbitrary source.
    #[must_use]
    pub fn with_source(source: impl RandomSource + 'static) -> Self {
        let source: Box<dyn RandomSource> = Box::new(source);
        Self {
            source: Arc::new(Mutex::new(source)),
        }
    }

    /// Replace the underlying generator with a fresh ChaCha source.
    ///
    /// Every handle to this state draws from the new source afterwards.
    pub fn reseed(&self, seed: u64) {
        tracing::debug!(seed, "seed state reseeded");
        self.replace_source(ChaChaSource::from_seed(seed));
    }

    /// Replace the underlying generator wholesale.
    pub fn replace_source(&self, source: impl RandomSource + 'static) {
        *self.lock() = Box::new(source);
    }

    /// Run one primitive draw under the lock.
    ///
    /// The closure must make exactly one call into the source; the lock is
    /// released as soon as it returns.
    pub fn draw<T>(&self, f: impl FnOnce(&mut dyn RandomSource) -> T) -> T {
        let mut guard = self.lock();
        f(&mut **guard)
    }

    // A single primitive call cannot leave the source half-updated, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Box<dyn RandomSource>> {
        self.source.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SeedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedState")
            .field("handles", &Arc::strong_count(&self.source))
            .finish_non_exhaustive()
    }
}
