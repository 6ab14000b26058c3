//! Randomizer error types.

use std::fmt;

use thiserror::Error;

/// Parity required by the rejection samplers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Divisible by two.
    Even,
    /// Not divisible by two.
    Odd,
}

impl Parity {
    /// Returns `true` if `value` has this parity.
    #[must_use]
    pub fn matches(self, value: i32) -> bool {
        let remainder = value.rem_euclid(2);
        match self {
            Self::Even => remainder == 0,
            Self::Odd => remainder == 1,
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => f.write_str("even"),
            Self::Odd => f.write_str("odd"),
        }
    }
}

/// Top-level error type for randomizer operations.
///
/// Every variant is a caller error surfaced at the call that received the bad
/// input; none of them is retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RandomizerError {
    /// A digit bound fell outside `[0, 9]`.
    #[error("{bound} must be between 0 and 9, got {value}")]
    DigitOutOfRange {
        /// Which bound was rejected (`min_digit` or `max_digit`).
        bound: &'static str,
        /// The rejected value.
        value: i32,
    },

    /// A lower bound exceeded its upper bound.
    #[error("min ({min}) must not exceed max ({max})")]
    InvertedRange {
        /// Lower bound, inclusive.
        min: i32,
        /// Upper bound, inclusive.
        max: i32,
    },

    /// The type passed to enum selection declares no variants.
    #[error("{type_name} is not an enumerable closed set")]
    NotEnumerable {
        /// The offending type.
        type_name: &'static str,
    },

    /// Exclusion removed every candidate variant.
    #[error("there are no values of {type_name} left to choose from after exclusion")]
    AllVariantsExcluded {
        /// The enum type.
        type_name: &'static str,
    },

    /// Element selection over an empty collection.
    #[error("cannot select an element from an empty collection")]
    EmptyCollection,

    /// The collection has more elements than a draw can index.
    #[error("collection of {len} elements is too large to index")]
    CollectionTooLarge {
        /// Number of elements in the collection.
        len: usize,
    },

    /// A JSON element selection was given something other than an array.
    #[error("expected a JSON array")]
    NotAnArray,

    /// Capped rejection sampling ran out of attempts.
    #[error("no {parity} value drawn from [{min}, {max}] after {attempts} attempts")]
    ParityAttemptsExhausted {
        /// The parity that was requested.
        parity: Parity,
        /// Lower bound, inclusive.
        min: i32,
        /// Upper bound, inclusive.
        max: i32,
        /// How many draws were made.
        attempts: u32,
    },

    /// A configuration value could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Embedded dataset tables could not be loaded.
    #[error("dataset error: {0}")]
    Dataset(String),
}
