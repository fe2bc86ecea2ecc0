use crate::{Promptable, Rejection, utils::has_digit};

/// Promptable type for words: text without any digit.
///
/// See [`word()`] for more information.
pub struct Word<'a> {
    question: &'a str,
    min_length: usize,
}

/// Returns a type that asks for a word of at least `min_length` bytes.
///
/// A `min_length` of `0` disables the length check. Digits are always rejected,
/// whatever the length.
pub fn word(question: &str, min_length: usize) -> Word<'_> {
    Word {
        question,
        min_length,
    }
}

impl Promptable for Word<'_> {
    type Output = String;

    fn question(&self) -> &str {
        self.question
    }

    fn validate(&mut self, input: &str) -> Result<Self::Output, Rejection> {
        if has_digit(input).is_some() {
            return Err(Rejection::ContainsDigit);
        }

        if self.min_length > 0 && input.len() < self.min_length {
            return Err(Rejection::TooShort {
                min: self.min_length,
            });
        }

        Ok(input.to_owned())
    }
}
