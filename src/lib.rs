//! Line-based prompts that keep asking until the answer is valid.
//!
//! Every prompt follows the same loop: write the question, write the answer marker,
//! read one line, trim it, validate it. An invalid answer prints a message (and plays
//! the configured sound cue) before asking again. A valid answer plays the success
//! cue and is returned.
//!
//! ```rust,no_run
//! use reprompt::{Config, prelude::*};
//!
//! fn main() -> reprompt::Result<()> {
//!     let config = Config::new().colored_text(true);
//!
//!     let name = reprompt::word("Your name?", 2).prompt(&config)?;
//!     let age = reprompt::number("Your age?").prompt(&config)?;
//!     let sure = reprompt::yes_or_no("Are you sure? (y/n)").prompt(&config)?;
//!
//!     println!("{name}, {age}, {sure}");
//!     Ok(())
//! }
//! ```
//!
//! The [`Prompter`] type bundles a configuration with an input and an output, for
//! programs that prefer method calls over the [`Promptable`] builders.

use std::{io, ops::ControlFlow};

use log::{debug, warn};

pub mod config;
pub use config::{Config, SoundPlayer};

mod error;
pub use error::{Error, Rejection, Result};

pub mod feedback;
use feedback::{Cue, Presenter};

mod promptables;
pub use promptables::*;

mod prompter;
pub use prompter::Prompter;

pub mod utils;

pub mod prelude {
    pub use super::Promptable as _;
}

/// Why a single attempt did not produce a value.
#[derive(Debug)]
pub enum Retry {
    Rejected(Rejection),
    ReadFailed(io::Error),
}

pub trait Promptable: Sized {
    type Output;

    /// The question written before each attempt.
    fn question(&self) -> &str;

    /// Checks a trimmed input line and converts it into the output.
    fn validate(&mut self, input: &str) -> std::result::Result<Self::Output, Rejection>;

    /// Runs a single attempt: question, answer marker, one line of input.
    ///
    /// Rejected answers and read failures are reported to `write` and returned as
    /// [`ControlFlow::Continue`]. Only rejection messages go through the presenter;
    /// read failures are written raw. The end of the input stream is an error.
    fn prompt_once<R, W>(
        &mut self, mut read: R, mut write: W, presenter: &Presenter<'_>,
    ) -> Result<ControlFlow<Self::Output, Retry>>
    where
        R: io::BufRead,
        W: io::Write,
    {
        presenter.question(&mut write, self.question())?;
        presenter.answer_marker(&mut write)?;

        let mut line = String::new();
        match read.read_line(&mut line) {
            Ok(0) => return Err(Error::InputClosed),
            Ok(_) => {}
            Err(e) => {
                warn!("failed to read input: {e}");
                writeln!(write, "Error reading input: {e}")?;
                return Ok(ControlFlow::Continue(Retry::ReadFailed(e)));
            }
        }

        match self.validate(line.trim()) {
            Ok(out) => {
                debug!("accepted answer to {:?}", self.question());
                presenter.cue(Cue::Valid);
                Ok(ControlFlow::Break(out))
            }
            Err(rejection) => {
                debug!("rejected answer to {:?}: {rejection:?}", self.question());
                presenter.error(&mut write, &rejection.to_string())?;
                presenter.cue(Cue::Invalid);
                Ok(ControlFlow::Continue(Retry::Rejected(rejection)))
            }
        }
    }

    /// Asks until the answer is valid, reading from `read` and writing to `write`.
    ///
    /// Gives up with [`Error::Read`] after [`Config::read_attempts`] consecutive read
    /// failures, and with [`Error::InputClosed`] when the input ends.
    fn prompt_with<R, W>(
        &mut self, mut read: R, mut write: W, config: &Config,
    ) -> Result<Self::Output>
    where
        R: io::BufRead,
        W: io::Write,
    {
        let presenter = Presenter::new(config);
        let mut read_failures = 0;

        loop {
            match self.prompt_once(&mut read, &mut write, &presenter)? {
                ControlFlow::Break(out) => return Ok(out),
                ControlFlow::Continue(Retry::Rejected(_)) => read_failures = 0,
                ControlFlow::Continue(Retry::ReadFailed(source)) => {
                    read_failures += 1;
                    if read_failures >= config.read_attempts {
                        return Err(Error::Read {
                            attempts: read_failures,
                            source,
                        });
                    }
                }
            }
        }
    }

    /// Asks on the standard input and output.
    fn prompt(&mut self, config: &Config) -> Result<Self::Output> {
        self.prompt_with(io::stdin().lock(), io::stdout(), config)
    }
}
