//! Lazy shuffling.
//!
//! Position `i` draws `j` from `[i, n)`, yields the element at `j`, then
//! moves the element at `i` into slot `j`. Slot `i` is never read again, so
//! it is left empty rather than receiving the yielded element. Seeded
//! fixtures recorded against this draw order depend on it staying exact.

use std::iter::FusedIterator;

use seedling_core::seed::SeedState;

use crate::randomizer::Randomizer;

/// Iterator over a random permutation of its input, drawing one value per
/// element as it is pulled.
#[derive(Debug)]
pub struct Shuffle<T> {
    seed: SeedState,
    buffer: Vec<Option<T>>,
    position: usize,
}

impl<T> Iterator for Shuffle<T> {
    type Item = T;

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    fn next(&mut self) -> Option<T> {
        let len = self.buffer.len();
        let i = self.position;
        if i >= len {
            return None;
        }
        let j = self
            .seed
            .draw(|source| source.next_range(i as i64, len as i64)) as usize;

        let picked = self.buffer[j].take();
        self.buffer[j] = self.buffer[i].take();
        self.position += 1;
        picked
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Shuffle<T> {}

impl<T> FusedIterator for Shuffle<T> {}

impl Randomizer {
    /// Shuffle `source` lazily. The input is buffered immediately; each
    /// element costs one draw when it is pulled.
    pub fn shuffle<I: IntoIterator>(&self, source: I) -> Shuffle<I::Item> {
        Shuffle {
            seed: self.seed_state().clone(),
            buffer: source.into_iter().map(Some).collect(),
            position: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use seedling_test_support::{FixedSource, SequenceSource};

    use super::*;

    #[test]
    fn test_shuffle_follows_one_directional_update() {
        // n = 4. i=0 draws 2 -> 'c', slot 2 <- 'a'      => [_, b, a, d]
        //        i=1 draws 3 -> 'd', slot 3 <- 'b'      => [_, _, a, b]
        //        i=2 draws 3 -> 'b', slot 3 <- 'a'      => [_, _, _, a]
        //        i=3 draws 3 -> 'a'
        let source = SequenceSource::new(vec![2, 3, 3, 3]);
        let log = source.request_log();
        let randomizer = Randomizer::new(SeedState::with_source(source));

        let shuffled: Vec<char> = randomizer.shuffle(['a', 'b', 'c', 'd']).collect();

        assert_eq!(shuffled, vec!['c', 'd', 'b', 'a']);
        assert_eq!(log.ranges(), vec![(0, 4), (1, 4), (2, 4), (3, 4)]);
    }

    #[test]
    fn test_shuffle_with_low_draws_is_identity() {
        let randomizer = Randomizer::new(SeedState::with_source(FixedSource));
        let shuffled: Vec<i32> = randomizer.shuffle(1..=5).collect();

        assert_eq!(shuffled, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shuffle_draws_lazily() {
        let source = SequenceSource::new(vec![1, 1]);
        let log = source.request_log();
        let randomizer = Randomizer::new(SeedState::with_source(source));

        let mut shuffle = randomizer.shuffle(vec!["x", "y", "z"]);
        assert!(log.is_empty());
        assert_eq!(shuffle.len(), 3);

        assert_eq!(shuffle.next(), Some("y"));
        assert_eq!(log.len(), 1);
        assert_eq!(shuffle.len(), 2);
    }

    #[test]
    fn test_shuffle_of_empty_input_is_empty() {
        let randomizer = Randomizer::new(SeedState::with_source(FixedSource));
        assert_eq!(randomizer.shuffle(Vec::<u8>::new()).next(), None);
    }

    #[test]
    fn test_shuffle_moves_non_clone_values() {
        let randomizer = Randomizer::new(SeedState::from_seed(3116));
        let boxed: Vec<Box<u32>> = (0..10).map(Box::new).collect();

        let mut values: Vec<u32> = randomizer.shuffle(boxed).map(|b| *b).collect();
        values.sort_unstable();

        assert_eq!(values, (0..10).collect::<Vec<u32>>());
    }
}
