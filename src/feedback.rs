//! Formatting and sound cues applied around every prompt message.

use std::io;

use crate::Config;

/// Which sound cue to trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Valid,
    Invalid,
}

/// Applies the [`Config`] rules to the messages written by a prompt.
pub struct Presenter<'c> {
    config: &'c Config,
}

impl<'c> Presenter<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'c Config {
        self.config
    }

    /// Adds the leading space and, if `emphasize` is set and colors are enabled,
    /// the configured emphasis. Empty messages are returned as-is.
    pub fn decorate(&self, msg: &str, emphasize: bool) -> String {
        if msg.is_empty() {
            return String::new();
        }

        let spaced = if self.config.space_before_text && !msg.starts_with(' ') {
            format!(" {msg}")
        } else {
            msg.to_owned()
        };

        if emphasize && self.config.colored_text {
            (self.config.emphasis)(&spaced)
        } else {
            spaced
        }
    }

    /// Writes the question on its own line, untouched.
    pub fn question<W: io::Write>(&self, mut write: W, question: &str) -> io::Result<()> {
        writeln!(write, "{question}")
    }

    /// Writes the answer marker without breaking the line, then flushes.
    pub fn answer_marker<W: io::Write>(&self, mut write: W) -> io::Result<()> {
        write!(write, "{}", self.decorate(&self.config.answer_marker, false))?;
        write.flush()
    }

    /// Writes an emphasized error line.
    pub fn error<W: io::Write>(&self, mut write: W, msg: &str) -> io::Result<()> {
        writeln!(write, "{}", self.decorate(msg, true))
    }

    /// Plays the sound configured for `cue`, if there is both a sound and a player.
    pub fn cue(&self, cue: Cue) {
        let sound = match cue {
            Cue::Valid => self.config.valid_input_sound.as_deref(),
            Cue::Invalid => self.config.invalid_input_sound.as_deref(),
        };

        if let (Some(player), Some(id)) = (&self.config.sound_player, sound) {
            if !id.is_empty() {
                player.play(id);
            }
        }
    }
}
