//! The randomizer façade: bounded numbers and the samplers built on them.
//!
//! A `Randomizer` holds no random state of its own. Every draw goes through
//! the shared [`SeedState`], so two randomizers over the same state are
//! interchangeable and only call order determines the values produced.

use std::fmt::Display;
use std::num::NonZeroU32;

use seedling_core::clock::Clock;
use seedling_core::config::RandomizerConfig;
use seedling_core::error::{Parity, RandomizerError};
use seedling_core::seed::SeedState;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Stateless handle over the shared seed state.
#[derive(Debug, Clone)]
pub struct Randomizer {
    seed: SeedState,
    parity_attempt_cap: Option<NonZeroU32>,
}

impl Randomizer {
    /// Create a randomizer drawing from `seed`.
    #[must_use]
    pub fn new(seed: SeedState) -> Self {
        Self {
            seed,
            parity_attempt_cap: None,
        }
    }

    /// Build the seed state described by `config` and a randomizer over it.
    #[must_use]
    pub fn from_config(config: &RandomizerConfig, clock: &dyn Clock) -> Self {
        Self {
            seed: config.seed_state(clock),
            parity_attempt_cap: config.parity_attempt_cap,
        }
    }

    /// Make [`Randomizer::even`] and [`Randomizer::odd`] give up after `cap`
    /// draws instead of retrying forever.
    #[must_use]
    pub fn with_parity_attempt_cap(mut self, cap: NonZeroU32) -> Self {
        self.parity_attempt_cap = Some(cap);
        self
    }

    /// The seed state this randomizer draws from.
    #[must_use]
    pub fn seed_state(&self) -> &SeedState {
        &self.seed
    }

    // --- numbers ---

    /// Uniform integer in `[min, max]`, inclusive at both ends.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn number(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "number: min ({min}) must not exceed max ({max})");
        // Widened so `max = i32::MAX` still has an exclusive bound.
        let drawn = self
            .seed
            .draw(|source| source.next_range(i64::from(min), i64::from(max) + 1));
        drawn as i32
    }

    /// Uniform integer in `[0, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `max` is negative.
    #[must_use]
    pub fn number_to(&self, max: i32) -> i32 {
        self.number(0, max)
    }

    /// Two-valued draw, `0` or `1`.
    #[must_use]
    pub fn coin(&self) -> i32 {
        self.number(0, 1)
    }

    /// Uniform real in `[0, 1)`.
    #[must_use]
    pub fn double(&self) -> f64 {
        self.seed.draw(|source| source.next_f64())
    }

    /// `true` when the coin lands on `0`.
    #[must_use]
    pub fn bool(&self) -> bool {
        self.coin() == 0
    }

    /// A fresh v4 identifier. Not driven by the seed.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        Uuid::new_v4()
    }

    // --- digits and parity ---

    /// `count` independent digits in `[0, 9]`.
    #[must_use]
    pub fn digits(&self, count: usize) -> Vec<i32> {
        (0..count).map(|_| self.number(0, 9)).collect()
    }

    /// `count` independent digits in `[min_digit, max_digit]`.
    ///
    /// # Errors
    ///
    /// Returns `RandomizerError::DigitOutOfRange` if either bound is outside
    /// `[0, 9]`, or `RandomizerError::InvertedRange` if
    /// `min_digit > max_digit`.
    pub fn digits_in(
        &self,
        count: usize,
        min_digit: i32,
        max_digit: i32,
    ) -> Result<Vec<i32>, RandomizerError> {
        if !(0..=9).contains(&max_digit) {
            return Err(RandomizerError::DigitOutOfRange {
                bound: "max_digit",
                value: max_digit,
            });
        }
        if !(0..=9).contains(&min_digit) {
            return Err(RandomizerError::DigitOutOfRange {
                bound: "min_digit",
                value: min_digit,
            });
        }
        if min_digit > max_digit {
            return Err(RandomizerError::InvertedRange {
                min: min_digit,
                max: max_digit,
            });
        }
        Ok((0..count).map(|_| self.number(min_digit, max_digit)).collect())
    }

    /// Even integer in `[min, max]` by rejection sampling.
    ///
    /// The range must contain an even value. Without an attempt cap a range
    /// with none never returns.
    ///
    /// # Errors
    ///
    /// Returns `RandomizerError::InvertedRange` if `min > max`, or
    /// `RandomizerError::ParityAttemptsExhausted` once a configured cap is
    /// reached.
    pub fn even(&self, min: i32, max: i32) -> Result<i32, RandomizerError> {
        self.sample_parity(Parity::Even, min, max)
    }

    /// Odd integer in `[min, max]` by rejection sampling.
    ///
    /// The range must contain an odd value. Without an attempt cap a range
    /// with none never returns.
    ///
    /// # Errors
    ///
    /// Returns `RandomizerError::InvertedRange` if `min > max`, or
    /// `RandomizerError::ParityAttemptsExhausted` once a configured cap is
    /// reached.
    pub fn odd(&self, min: i32, max: i32) -> Result<i32, RandomizerError> {
        self.sample_parity(Parity::Odd, min, max)
    }

    fn sample_parity(&self, parity: Parity, min: i32, max: i32) -> Result<i32, RandomizerError> {
        if min > max {
            return Err(RandomizerError::InvertedRange { min, max });
        }
        let mut attempts: u32 = 0;
        loop {
            let value = self.number(min, max);
            if parity.matches(value) {
                return Ok(value);
            }
            attempts = attempts.saturating_add(1);
            if let Some(cap) = self.parity_attempt_cap {
                if attempts >= cap.get() {
                    tracing::warn!(%parity, min, max, attempts, "parity sampling gave up");
                    return Err(RandomizerError::ParityAttemptsExhausted {
                        parity,
                        min,
                        max,
                        attempts,
                    });
                }
            }
        }
    }

    // --- element selection ---

    /// Uniformly chosen element of `items`.
    ///
    /// # Errors
    ///
    /// Returns `RandomizerError::EmptyCollection` if `items` is empty, or
    /// `RandomizerError::CollectionTooLarge` if it cannot be indexed by an
    /// `i32` draw.
    pub fn element<'a, T>(&self, items: &'a [T]) -> Result<&'a T, RandomizerError> {
        let index = self.pick_index(items.len())?;
        Ok(&items[index])
    }

    /// Owned copy of a uniformly chosen element.
    ///
    /// # Errors
    ///
    /// Same as [`Randomizer::element`].
    pub fn element_cloned<T: Clone>(&self, items: &[T]) -> Result<T, RandomizerError> {
        self.element(items).cloned()
    }

    /// Text form of a uniformly chosen element.
    ///
    /// # Errors
    ///
    /// Same as [`Randomizer::element`].
    pub fn element_string<T: Display>(&self, items: &[T]) -> Result<String, RandomizerError> {
        self.element(items).map(ToString::to_string)
    }

    /// Uniformly chosen element of a JSON array. String elements come back
    /// unquoted; anything else is rendered as JSON.
    ///
    /// # Errors
    ///
    /// Returns `RandomizerError::NotAnArray` if `array` is not an array, or
    /// `RandomizerError::EmptyCollection` if it is empty.
    pub fn element_json(&self, array: &Value) -> Result<String, RandomizerError> {
        let items = array.as_array().ok_or(RandomizerError::NotAnArray)?;
        Ok(match self.element(items)? {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }

    /// Uniformly chosen property of a JSON object, in key order.
    ///
    /// # Errors
    ///
    /// Returns `RandomizerError::EmptyCollection` if `object` has no
    /// properties.
    pub fn entry_json(&self, object: &Map<String, Value>) -> Result<(String, Value), RandomizerError> {
        let index = self.pick_index(object.len())?;
        object
            .iter()
            .nth(index)
            .map(|(key, value)| (key.clone(), value.clone()))
            .ok_or(RandomizerError::EmptyCollection)
    }

    /// Draws an index in `[0, len)` with the same single draw as
    /// `number_to(len - 1)`.
    pub(crate) fn pick_index(&self, len: usize) -> Result<usize, RandomizerError> {
        let last = len.checked_sub(1).ok_or(RandomizerError::EmptyCollection)?;
        let last = i32::try_from(last).map_err(|_| RandomizerError::CollectionTooLarge { len })?;
        Ok(self.number_to(last).unsigned_abs() as usize)
    }
}

#[cfg(test)]
mod tests {
    use seedling_core::rng::RandomSource;
    use seedling_test_support::{FixedSource, SequenceSource};
    use serde_json::json;

    use super::*;

    fn scripted(values: Vec<i64>) -> (Randomizer, seedling_test_support::RequestLog) {
        let source = SequenceSource::new(values);
        let log = source.request_log();
        (Randomizer::new(SeedState::with_source(source)), log)
    }

    fn cap(attempts: u32) -> NonZeroU32 {
        NonZeroU32::new(attempts).unwrap()
    }

    /// Returns the high end of every requested range.
    struct HighSource;

    impl RandomSource for HighSource {
        fn next_range(&mut self, _low: i64, high: i64) -> i64 {
            high - 1
        }

        fn next_f64(&mut self) -> f64 {
            0.999
        }
    }

    // --- number tests ---

    #[test]
    fn test_number_requests_exclusive_bound_one_past_max() {
        let (randomizer, log) = scripted(vec![7]);

        assert_eq!(randomizer.number(3, 7), 7);
        assert_eq!(log.ranges(), vec![(3, 8)]);
    }

    #[test]
    fn test_number_reaches_both_ends() {
        let low = Randomizer::new(SeedState::with_source(FixedSource));
        let high = Randomizer::new(SeedState::with_source(HighSource));

        assert_eq!(low.number(-5, 5), -5);
        assert_eq!(high.number(-5, 5), 5);
    }

    #[test]
    fn test_number_accepts_i32_max() {
        let high = Randomizer::new(SeedState::with_source(HighSource));
        assert_eq!(high.number(i32::MAX - 1, i32::MAX), i32::MAX);
    }

    #[test]
    fn test_number_to_uses_zero_floor() {
        let (randomizer, log) = scripted(vec![4]);

        assert_eq!(randomizer.number_to(9), 4);
        assert_eq!(log.ranges(), vec![(0, 10)]);
    }

    #[test]
    #[should_panic(expected = "must not exceed max")]
    fn test_number_with_inverted_bounds_panics() {
        let randomizer = Randomizer::new(SeedState::with_source(FixedSource));
        let _ = randomizer.number(2, 1);
    }

    #[test]
    fn test_bool_is_true_on_zero() {
        let (randomizer, log) = scripted(vec![0, 1]);

        assert!(randomizer.bool());
        assert!(!randomizer.bool());
        assert_eq!(log.ranges(), vec![(0, 2), (0, 2)]);
    }

    #[test]
    fn test_double_passes_through_source() {
        let source = SequenceSource::new(vec![]).with_reals(vec![0.25]);
        let randomizer = Randomizer::new(SeedState::with_source(source));

        assert!((randomizer.double() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_uuid_is_fresh_and_does_not_draw() {
        let (randomizer, log) = scripted(vec![]);

        assert_ne!(randomizer.uuid(), randomizer.uuid());
        assert!(log.is_empty());
    }

    // --- digits tests ---

    #[test]
    fn test_digits_returns_count_draws_in_order() {
        let (randomizer, log) = scripted(vec![3, 1, 4]);

        assert_eq!(randomizer.digits(3), vec![3, 1, 4]);
        assert_eq!(log.ranges(), vec![(0, 10); 3]);
    }

    #[test]
    fn test_digits_in_uses_bounds() {
        let (randomizer, log) = scripted(vec![5, 6]);

        assert_eq!(randomizer.digits_in(2, 5, 6).unwrap(), vec![5, 6]);
        assert_eq!(log.ranges(), vec![(5, 7), (5, 7)]);
    }

    #[test]
    fn test_digits_in_rejects_max_above_nine() {
        let randomizer = Randomizer::new(SeedState::with_source(FixedSource));

        assert_eq!(
            randomizer.digits_in(3, 0, 10),
            Err(RandomizerError::DigitOutOfRange {
                bound: "max_digit",
                value: 10,
            })
        );
    }

    #[test]
    fn test_digits_in_rejects_negative_min() {
        let randomizer = Randomizer::new(SeedState::with_source(FixedSource));

        assert_eq!(
            randomizer.digits_in(3, -1, 9),
            Err(RandomizerError::DigitOutOfRange {
                bound: "min_digit",
                value: -1,
            })
        );
    }

    #[test]
    fn test_digits_in_rejects_inverted_bounds_without_drawing() {
        let (randomizer, log) = scripted(vec![]);

        assert_eq!(
            randomizer.digits_in(1, 7, 3),
            Err(RandomizerError::InvertedRange { min: 7, max: 3 })
        );
        assert!(log.is_empty());
    }

    // --- parity tests ---

    #[test]
    fn test_even_rejects_until_even() {
        let (randomizer, log) = scripted(vec![3, 5, 4]);

        assert_eq!(randomizer.even(0, 10).unwrap(), 4);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_odd_rejects_until_odd() {
        let (randomizer, _) = scripted(vec![2, 0, 7]);
        assert_eq!(randomizer.odd(0, 10).unwrap(), 7);
    }

    #[test]
    fn test_even_treats_negative_odd_as_odd() {
        let (randomizer, _) = scripted(vec![-3, -2]);
        assert_eq!(randomizer.even(-3, -2).unwrap(), -2);
    }

    #[test]
    fn test_capped_parity_sampling_fails_on_impossible_range() {
        let randomizer =
            Randomizer::new(SeedState::with_source(FixedSource)).with_parity_attempt_cap(cap(5));

        assert_eq!(
            randomizer.even(1, 1),
            Err(RandomizerError::ParityAttemptsExhausted {
                parity: Parity::Even,
                min: 1,
                max: 1,
                attempts: 5,
            })
        );
    }

    #[test]
    fn test_smallest_cap_reports_one_attempt() {
        let (randomizer, log) = scripted(vec![3, 4]);
        let randomizer = randomizer.with_parity_attempt_cap(cap(1));

        assert_eq!(
            randomizer.even(0, 10),
            Err(RandomizerError::ParityAttemptsExhausted {
                parity: Parity::Even,
                min: 0,
                max: 10,
                attempts: 1,
            })
        );
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_parity_rejects_inverted_range() {
        let randomizer = Randomizer::new(SeedState::with_source(FixedSource));
        assert_eq!(
            randomizer.odd(4, 2),
            Err(RandomizerError::InvertedRange { min: 4, max: 2 })
        );
    }

    // --- element tests ---

    #[test]
    fn test_element_indexes_with_last_position_bound() {
        let (randomizer, log) = scripted(vec![2]);
        let items = ["a", "b", "c"];

        assert_eq!(*randomizer.element(&items).unwrap(), "c");
        assert_eq!(log.ranges(), vec![(0, 3)]);
    }

    #[test]
    fn test_element_of_empty_slice_fails() {
        let randomizer = Randomizer::new(SeedState::with_source(FixedSource));
        let empty: [u8; 0] = [];

        assert_eq!(randomizer.element(&empty), Err(RandomizerError::EmptyCollection));
    }

    #[test]
    fn test_element_string_renders_display() {
        let (randomizer, _) = scripted(vec![1]);
        assert_eq!(randomizer.element_string(&[10, 20, 30]).unwrap(), "20");
    }

    #[test]
    fn test_element_json_unquotes_strings() {
        let (randomizer, _) = scripted(vec![0, 1]);
        let array = json!(["Sport", 42]);

        assert_eq!(randomizer.element_json(&array).unwrap(), "Sport");
        assert_eq!(randomizer.element_json(&array).unwrap(), "42");
    }

    #[test]
    fn test_element_json_rejects_non_array() {
        let randomizer = Randomizer::new(SeedState::with_source(FixedSource));
        assert_eq!(
            randomizer.element_json(&json!({"a": 1})),
            Err(RandomizerError::NotAnArray)
        );
    }

    #[test]
    fn test_entry_json_picks_property_in_key_order() {
        let (randomizer, _) = scripted(vec![1]);
        let object = json!({"alpha": 1, "beta": 2, "gamma": 3});

        let (key, value) = randomizer.entry_json(object.as_object().unwrap()).unwrap();
        assert_eq!(key, "beta");
        assert_eq!(value, json!(2));
    }

    // --- config tests ---

    #[test]
    fn test_from_config_applies_seed_and_cap() {
        use seedling_test_support::FixedClock;

        let config = RandomizerConfig {
            seed: Some(3116),
            parity_attempt_cap: Some(cap(3)),
        };
        let clock = FixedClock::at_unix(0, 0);
        let a = Randomizer::from_config(&config, &clock);
        let b = Randomizer::new(SeedState::from_seed(3116));

        assert_eq!(a.digits(8), b.digits(8));
        assert!(matches!(
            a.odd(2, 2),
            Err(RandomizerError::ParityAttemptsExhausted { attempts: 3, .. })
        ));
    }
}
