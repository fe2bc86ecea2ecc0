use crate::{Promptable, Rejection};

/// Promptable type for yes/no questions.
///
/// See [`yes_or_no()`] for more information.
pub struct YesOrNo<'a> {
    question: &'a str,
}

/// Returns a type that asks a yes/no question.
///
/// Accepts `y` or `n` in any case, surrounding whitespace ignored.
pub fn yes_or_no(question: &str) -> YesOrNo<'_> {
    YesOrNo { question }
}

impl Promptable for YesOrNo<'_> {
    type Output = bool;

    fn question(&self) -> &str {
        self.question
    }

    fn validate(&mut self, input: &str) -> Result<Self::Output, Rejection> {
        match input.to_lowercase().as_str() {
            "y" => Ok(true),
            "n" => Ok(false),
            _ => Err(Rejection::NotBoolean),
        }
    }
}
