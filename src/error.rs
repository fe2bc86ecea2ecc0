use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the caller of a prompt.
///
/// Invalid answers are never reported through this type: they are turned into a
/// [`Rejection`] and the user is asked again.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to write prompt: {}", .0)]
    Io(#[from] io::Error),

    #[error("Input stream closed before a valid answer was given")]
    InputClosed,

    #[error("Failed to read input {} times in a row: {}", .attempts, .source)]
    Read {
        attempts: usize,
        #[source]
        source: io::Error,
    },
}

/// Reason an input line was rejected by a validator.
///
/// The `Display` output is the message shown to the user before re-prompting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Invalid input!")]
    NotBoolean,

    #[error("Please enter a whole number")]
    NotInteger,

    #[error("The word can't have any digit!")]
    ContainsDigit,

    #[error("The word must contain at least {} letters!", .min)]
    TooShort { min: usize },

    #[error("{}", .0)]
    Custom(String),
}

impl Rejection {
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages() {
        assert_eq!(Rejection::NotBoolean.to_string(), "Invalid input!");
        assert_eq!(Rejection::NotInteger.to_string(), "Please enter a whole number");
        assert_eq!(
            Rejection::ContainsDigit.to_string(),
            "The word can't have any digit!"
        );
        assert_eq!(
            Rejection::TooShort { min: 3 }.to_string(),
            "The word must contain at least 3 letters!"
        );
        assert_eq!(Rejection::custom("nope").to_string(), "nope");
    }

    #[test]
    fn read_error_mentions_attempts() {
        let err = Error::Read {
            attempts: 3,
            source: io::Error::other("broken pipe"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read input 3 times in a row: broken pipe"
        );
    }
}
