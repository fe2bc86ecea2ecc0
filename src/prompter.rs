use std::{
    fmt::Display,
    io::{self, StdinLock, Stdout},
};

use crate::{Config, Promptable, Rejection, Result, utils};

/// A [`Config`] bound to one input and one output.
///
/// Convenient when a program asks many questions in a row:
///
/// ```rust,no_run
/// use reprompt::{Config, Prompter};
///
/// let mut term = Prompter::stdio(Config::new().space_before_text(true));
/// let name = term.get_string("Name?", 2)?;
/// if term.get_yes_or_no(&format!("Is {name} right? (y/n)"))? {
///     let lucky = term.get_number("Lucky number?")?;
///     term.display_slice(&[name.as_str(), &lucky.to_string()], true)?;
/// }
/// # Ok::<(), reprompt::Error>(())
/// ```
pub struct Prompter<R, W> {
    config: Config,
    read: R,
    write: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio(config: Config) -> Self {
        Self::new(config, io::stdin().lock(), io::stdout())
    }
}

impl<R, W> Prompter<R, W>
where
    R: io::BufRead,
    W: io::Write,
{
    pub fn new(config: Config, read: R, write: W) -> Self {
        Self {
            config,
            read,
            write,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_inner(self) -> (R, W) {
        (self.read, self.write)
    }

    /// Runs any promptable against this prompter's input and output.
    pub fn ask<P: Promptable>(&mut self, mut prompt: P) -> Result<P::Output> {
        prompt.prompt_with(&mut self.read, &mut self.write, &self.config)
    }

    pub fn get_yes_or_no(&mut self, question: &str) -> Result<bool> {
        self.ask(crate::yes_or_no(question))
    }

    pub fn get_number(&mut self, question: &str) -> Result<i64> {
        self.ask(crate::number(question))
    }

    pub fn get_string(&mut self, question: &str, min_length: usize) -> Result<String> {
        self.ask(crate::word(question, min_length))
    }

    pub fn get_validated<T, F>(&mut self, question: &str, validate: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, Rejection>,
    {
        self.ask(crate::validated(question, validate))
    }

    /// See [`utils::display_slice`].
    pub fn display_slice<T: Display>(&mut self, items: &[T], comma_mode: bool) -> Result<()> {
        Ok(utils::display_slice(&mut self.write, items, comma_mode)?)
    }

    /// Flushes pending output, then clears the terminal. See [`utils::clear_screen`].
    pub fn clear_screen(&mut self) -> Result<()> {
        self.write.flush()?;
        utils::clear_screen();
        Ok(())
    }
}
