//! Template substitution.
//!
//! `#` becomes a digit, `?` an uppercase letter, and `*` either of the two.
//! Placeholders are resolved left to right, each with its own draws.

use crate::randomizer::Randomizer;

const DIGIT: char = '#';
const LETTER: char = '?';
const EITHER: char = '*';

impl Randomizer {
    /// Replace every `#` in `format` with a random digit.
    #[must_use]
    pub fn replace_numbers(&self, format: &str) -> String {
        self.replace_numbers_with(format, DIGIT)
    }

    /// Replace every `symbol` in `format` with a random digit. Other
    /// characters are copied unchanged.
    #[must_use]
    pub fn replace_numbers_with(&self, format: &str, symbol: char) -> String {
        format
            .chars()
            .map(|c| if c == symbol { self.digit_char() } else { c })
            .collect()
    }

    /// Resolve `#`, `?` and `*` placeholders in `format`.
    ///
    /// `*` first spends a coin draw choosing between digit and letter, then
    /// a second draw for the value itself.
    #[must_use]
    pub fn replace(&self, format: &str) -> String {
        format
            .chars()
            .map(|c| {
                let class = if c == EITHER {
                    if self.bool() { DIGIT } else { LETTER }
                } else {
                    c
                };
                match class {
                    DIGIT => self.digit_char(),
                    LETTER => self.letter_char(),
                    other => other,
                }
            })
            .collect()
    }

    fn digit_char(&self) -> char {
        offset_char(b'0', self.number_to(9))
    }

    fn letter_char(&self) -> char {
        offset_char(b'A', self.number_to(25))
    }
}

// offset is always a draw from [0, 25]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn offset_char(base: u8, offset: i32) -> char {
    char::from(base + offset as u8)
}
