use crate::{Promptable, Rejection};

/// Promptable type backed by a custom validator.
///
/// See [`validated()`] for more information.
pub struct Validated<'a, F> {
    question: &'a str,
    validate: F,
}

/// Returns a type that asks `question` until `validate` accepts the trimmed input.
///
/// ```rust,no_run
/// use reprompt::{Config, Rejection, prelude::*};
///
/// let port = reprompt::validated("Port?", |s: &str| {
///     s.parse::<u16>()
///         .map_err(|_| Rejection::custom("Not a port number"))
/// })
/// .prompt(&Config::default())?;
/// # Ok::<(), reprompt::Error>(())
/// ```
pub fn validated<T, F>(question: &str, validate: F) -> Validated<'_, F>
where
    F: FnMut(&str) -> Result<T, Rejection>,
{
    Validated { question, validate }
}

impl<T, F> Promptable for Validated<'_, F>
where
    F: FnMut(&str) -> Result<T, Rejection>,
{
    type Output = T;

    fn question(&self) -> &str {
        self.question
    }

    fn validate(&mut self, input: &str) -> Result<Self::Output, Rejection> {
        (self.validate)(input)
    }
}
