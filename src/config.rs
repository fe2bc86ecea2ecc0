//! Prompt configuration.
//!
//! A [`Config`] is built once by the caller and shared by every prompt. It is never
//! mutated by the prompts themselves.
//!
//! ```rust
//! use reprompt::Config;
//!
//! let config = Config::new()
//!     .space_before_text(true)
//!     .colored_text(true)
//!     .valid_input_sound("ding")
//!     .invalid_input_sound("buzz")
//!     .sound_player(|id: &str| println!("*plays {id}*"));
//! # let _ = config;
//! ```

use std::fmt;

use crossterm::style::{Stylize as _, style};

/// Capability used to play a named sound cue.
///
/// Implemented for any `Fn(&str)`, so a closure is usually enough.
pub trait SoundPlayer {
    fn play(&self, sound_id: &str);
}

impl<F> SoundPlayer for F
where
    F: Fn(&str),
{
    fn play(&self, sound_id: &str) {
        self(sound_id)
    }
}

type Emphasis = Box<dyn Fn(&str) -> String>;

/// The default emphasis: red foreground.
pub fn red(text: &str) -> String {
    style(text).red().to_string()
}

pub struct Config {
    pub(crate) space_before_text: bool,
    pub(crate) colored_text: bool,
    pub(crate) valid_input_sound: Option<String>,
    pub(crate) invalid_input_sound: Option<String>,
    pub(crate) sound_player: Option<Box<dyn SoundPlayer>>,
    pub(crate) emphasis: Emphasis,
    pub(crate) answer_marker: String,
    pub(crate) read_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            space_before_text: false,
            colored_text: false,
            valid_input_sound: None,
            invalid_input_sound: None,
            sound_player: None,
            emphasis: Box::new(red),
            answer_marker: Self::DEFAULT_ANSWER_MARKER.to_owned(),
            read_attempts: Self::DEFAULT_READ_ATTEMPTS,
        }
    }
}

impl Config {
    pub const DEFAULT_ANSWER_MARKER: &'static str = "-> ";
    pub const DEFAULT_READ_ATTEMPTS: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every non-question message with a single space, unless it already
    /// starts with one.
    pub fn space_before_text(mut self, value: bool) -> Self {
        self.space_before_text = value;
        self
    }

    /// Apply the [emphasis](Self::emphasis) to error messages.
    pub fn colored_text(mut self, value: bool) -> Self {
        self.colored_text = value;
        self
    }

    pub fn valid_input_sound(mut self, sound_id: impl Into<String>) -> Self {
        self.valid_input_sound = Some(sound_id.into());
        self
    }

    pub fn invalid_input_sound(mut self, sound_id: impl Into<String>) -> Self {
        self.invalid_input_sound = Some(sound_id.into());
        self
    }

    pub fn sound_player<P>(mut self, player: P) -> Self
    where
        P: SoundPlayer + 'static,
    {
        self.sound_player = Some(Box::new(player));
        self
    }

    /// Replaces the styling applied to emphasized messages. Defaults to [`red`].
    pub fn emphasis<F>(mut self, emphasis: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.emphasis = Box::new(emphasis);
        self
    }

    /// The text written right before the user types an answer.
    pub fn answer_marker(mut self, marker: impl Into<String>) -> Self {
        self.answer_marker = marker.into();
        self
    }

    /// How many consecutive read failures are tolerated before a prompt gives up.
    ///
    /// A value of `0` is treated as `1`.
    pub fn read_attempts(mut self, attempts: usize) -> Self {
        self.read_attempts = attempts.max(1);
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("space_before_text", &self.space_before_text)
            .field("colored_text", &self.colored_text)
            .field("valid_input_sound", &self.valid_input_sound)
            .field("invalid_input_sound", &self.invalid_input_sound)
            .field("sound_player", &self.sound_player.is_some())
            .field("answer_marker", &self.answer_marker)
            .field("read_attempts", &self.read_attempts)
            .finish_non_exhaustive()
    }
}
