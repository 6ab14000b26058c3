//! Word composition over a registry of category generators.
//!
//! The registry is an ordered list of tagged producers, each bound to one
//! operation of an externally owned category generator. A category can be
//! registered more than once to weight selection towards it.

use std::fmt;
use std::sync::Arc;

use seedling_core::error::RandomizerError;

use crate::randomizer::Randomizer;

type Producer = Box<dyn Fn() -> String + Send + Sync>;

/// One registry entry: a label and the producer it stands for.
pub struct WordFunction {
    label: &'static str,
    produce: Producer,
}

impl WordFunction {
    /// The label this entry was registered under.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Invoke the producer.
    #[must_use]
    pub fn call(&self) -> String {
        (self.produce)()
    }
}

impl fmt::Debug for WordFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordFunction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Append-only builder for a [`WordRegistry`].
#[derive(Debug, Default)]
pub struct WordRegistryBuilder {
    functions: Vec<WordFunction>,
}

impl WordRegistryBuilder {
    /// Append a producer under `label`.
    #[must_use]
    pub fn register(
        mut self,
        label: &'static str,
        produce: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        self.functions.push(WordFunction {
            label,
            produce: Box::new(produce),
        });
        self
    }

    /// Freeze the registry.
    ///
    /// # Errors
    ///
    /// Returns `RandomizerError::EmptyCollection` if nothing was registered,
    /// or `RandomizerError::CollectionTooLarge` if the entries cannot be
    /// indexed by a single draw.
    pub fn build(self) -> Result<WordRegistry, RandomizerError> {
        let len = self.functions.len();
        let last_index = len
            .checked_sub(1)
            .ok_or(RandomizerError::EmptyCollection)
            .and_then(|last| {
                i32::try_from(last).map_err(|_| RandomizerError::CollectionTooLarge { len })
            })?;
        tracing::debug!(entries = len, "word registry built");
        Ok(WordRegistry {
            functions: self.functions,
            last_index,
        })
    }
}

/// Read-only, non-empty list of word producers.
#[derive(Debug)]
pub struct WordRegistry {
    functions: Vec<WordFunction>,
    last_index: i32,
}

impl WordRegistry {
    /// Start building a registry.
    #[must_use]
    pub fn builder() -> WordRegistryBuilder {
        WordRegistryBuilder::default()
    }

    /// Number of entries, counting repeated registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Always `false`; a built registry has at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered entries in order.
    #[must_use]
    pub fn entries(&self) -> &[WordFunction] {
        &self.functions
    }
}

/// Builds words and phrases from a [`WordRegistry`].
#[derive(Debug, Clone)]
pub struct WordComposer {
    randomizer: Randomizer,
    registry: Arc<WordRegistry>,
}

impl WordComposer {
    /// Compose over `registry`, choosing entries with `randomizer`.
    #[must_use]
    pub fn new(randomizer: Randomizer, registry: Arc<WordRegistry>) -> Self {
        Self {
            randomizer,
            registry,
        }
    }

    /// The registry this composer draws from.
    #[must_use]
    pub fn registry(&self) -> &WordRegistry {
        &self.registry
    }

    /// Invoke one uniformly chosen registry entry.
    #[must_use]
    pub fn word(&self) -> String {
        let index = self.randomizer.number_to(self.registry.last_index).unsigned_abs() as usize;
        self.registry.functions[index].call()
    }

    /// Join `count` words with single spaces. Without a count, one to three
    /// words are drawn.
    #[must_use]
    pub fn words(&self, count: Option<usize>) -> String {
        let count = count.unwrap_or_else(|| self.randomizer.number(1, 3).unsigned_abs() as usize);
        (0..count)
            .map(|_| self.word())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
