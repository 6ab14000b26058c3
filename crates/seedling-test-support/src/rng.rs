//! Deterministic `RandomSource` implementations for tests.

use std::sync::{Arc, Mutex};

use seedling_core::rng::RandomSource;

/// A source that always returns the low bound for `next_range` and `0.0` for
/// `next_f64`. Suitable for tests that do not depend on specific values.
#[derive(Debug)]
pub struct FixedSource;

impl RandomSource for FixedSource {
    fn next_range(&mut self, low: i64, _high: i64) -> i64 {
        low
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// Shared record of the `[low, high)` ranges a `SequenceSource` was asked
/// for, readable after the source has been moved into a seed state.
#[derive(Debug, Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<(i64, i64)>>>);

impl RequestLog {
    /// Returns every requested range in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn ranges(&self) -> Vec<(i64, i64)> {
        self.0.lock().unwrap().clone()
    }

    /// Returns how many integer draws were made.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    /// Returns `true` if no integer draw was made.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A source that returns values from a predetermined script. Panics if the
/// script is exhausted or a scripted value falls outside the requested range,
/// so tests fail loudly when the draw order changes.
#[derive(Debug)]
pub struct SequenceSource {
    values: Vec<i64>,
    reals: Vec<f64>,
    index: usize,
    real_index: usize,
    log: RequestLog,
}

impl SequenceSource {
    /// Create a new `SequenceSource` scripting the integer draws.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            reals: Vec::new(),
            index: 0,
            real_index: 0,
            log: RequestLog::default(),
        }
    }

    /// Script the `next_f64` draws as well.
    #[must_use]
    pub fn with_reals(mut self, reals: Vec<f64>) -> Self {
        self.reals = reals;
        self
    }

    /// Handle to the log of requested ranges.
    #[must_use]
    pub fn request_log(&self) -> RequestLog {
        self.log.clone()
    }
}

impl RandomSource for SequenceSource {
    fn next_range(&mut self, low: i64, high: i64) -> i64 {
        self.log.0.lock().unwrap().push((low, high));
        let value = *self
            .values
            .get(self.index)
            .unwrap_or_else(|| panic!("SequenceSource exhausted after {} draws", self.index));
        self.index += 1;
        assert!(
            (low..high).contains(&value),
            "scripted value {value} outside requested range [{low}, {high})"
        );
        value
    }

    fn next_f64(&mut self) -> f64 {
        let value = *self
            .reals
            .get(self.real_index)
            .unwrap_or_else(|| panic!("SequenceSource exhausted after {} reals", self.real_index));
        self.real_index += 1;
        value
    }
}
