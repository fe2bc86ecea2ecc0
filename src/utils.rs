//! Small stateless helpers for interactive programs.

use std::{fmt::Display, io, process::Command};

use log::debug;
use rand::Rng;

/// Returns a random integer within `[min, max)`, using the thread-local generator.
///
/// # Panics
///
/// Panics if `max <= min`.
pub fn ranged_random(min: i64, max: i64) -> i64 {
    ranged_random_with(&mut rand::rng(), min, max)
}

/// Same as [`ranged_random`], with a caller-provided generator.
///
/// # Panics
///
/// Panics if `max <= min`.
pub fn ranged_random_with<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.random_range(min..max)
}

/// Returns the index of the first element equal to `element`.
pub fn str_in_slice<S: AsRef<str>>(slice: &[S], element: &str) -> Option<usize> {
    slice.iter().position(|s| s.as_ref() == element)
}

/// Returns the byte index of the first decimal digit in `s`.
///
/// Any Unicode `Nd` character counts, not only ASCII digits.
pub fn has_digit(s: &str) -> Option<usize> {
    s.char_indices()
        .find(|(_, c)| is_decimal_digit(*c))
        .map(|(i, _)| i)
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || (!c.is_ascii() && is_unicode_digit(c))
}

/// Every `Nd` block is ten consecutive code points; these are the zeros (Unicode 14).
fn is_unicode_digit(c: char) -> bool {
    const ND_ZEROS: &[u32] = &[
        0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
        0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
        0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0,
        0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0,
        0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
        0x11DA0, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
        0x1E140, 0x1E2F0, 0x1E950, 0x1FBF0,
    ];

    let code = u32::from(c);
    ND_ZEROS.iter().any(|&zero| (zero..zero + 10).contains(&code))
}

/// Clears the terminal with the host's clear command.
///
/// Failures are ignored.
pub fn clear_screen() {
    let command = if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/c", "cls"]);
        cmd
    } else {
        Command::new("clear")
    };

    run_clear(command);
}

fn run_clear(mut command: Command) {
    match command.status() {
        Ok(status) if !status.success() => debug!("clear command exited with {status}"),
        Err(e) => debug!("failed to run clear command: {e}"),
        _ => {}
    }
}

/// Writes the items on one line, after a leading space.
///
/// With `comma_mode`, items are separated by `", "`; otherwise they are written
/// back to back.
pub fn display_slice<W, T>(mut write: W, items: &[T], comma_mode: bool) -> io::Result<()>
where
    W: io::Write,
    T: Display,
{
    write!(write, " ")?;
    for (i, item) in items.iter().enumerate() {
        write!(write, "{item}")?;
        if comma_mode && i + 1 != items.len() {
            write!(write, ", ")?;
        }
    }
    writeln!(write)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    #[test]
    fn ranged_random_stays_in_range() {
        for _ in 0..1000 {
            let v = ranged_random(1, 5);
            assert!((1..5).contains(&v), "{v} out of [1, 5)");
        }
        for _ in 0..100 {
            assert_eq!(ranged_random(-3, -2), -3);
        }
    }

    #[test]
    fn ranged_random_covers_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            let v = ranged_random_with(&mut rng, -3, 3);
            seen[(v + 3) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn seeded_generator_is_reproducible() {
        let a: Vec<_> = {
            let mut rng = SmallRng::seed_from_u64(42);
            (0..20).map(|_| ranged_random_with(&mut rng, 0, 1000)).collect()
        };
        let b: Vec<_> = {
            let mut rng = SmallRng::seed_from_u64(42);
            (0..20).map(|_| ranged_random_with(&mut rng, 0, 1000)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn str_in_slice_finds_first_match() {
        assert_eq!(str_in_slice(&["test", "string"], "test"), Some(0));
        assert_eq!(str_in_slice(&["test", "string"], "not in slice"), None);
        assert_eq!(str_in_slice(&["a", "b", "a"], "a"), Some(0));

        let owned = vec!["x".to_owned(), "y".to_owned()];
        assert_eq!(str_in_slice(&owned[..], "y"), Some(1));
        assert_eq!(str_in_slice::<&str>(&[], "y"), None);
    }

    #[test]
    fn has_digit_finds_first_digit() {
        assert_eq!(has_digit("test"), None);
        assert_eq!(has_digit("test12"), Some(4));
        assert_eq!(has_digit(""), None);
        assert_eq!(has_digit("9lives"), Some(0));
    }

    #[test]
    fn has_digit_handles_unicode() {
        // ARABIC-INDIC DIGIT THREE
        assert_eq!(has_digit("ab\u{0663}"), Some(2));
        // FULLWIDTH DIGIT SEVEN, after a two-byte character
        assert_eq!(has_digit("é\u{FF17}"), Some(2));
        // not decimal digits
        assert_eq!(has_digit("Ⅻ½²"), None);
        assert_eq!(has_digit("café"), None);
    }

    #[test]
    fn clear_failures_are_swallowed() {
        run_clear(Command::new("reprompt-no-such-clear-command"));
        #[cfg(unix)]
        run_clear(Command::new("false"));
    }

    #[test]
    fn display_slice_formats() -> anyhow::Result<()> {
        let mut output = Vec::new();
        display_slice(&mut output, &[1, 2, 3], true)?;
        display_slice(&mut output, &["a", "b"], false)?;
        display_slice(&mut output, &[0.5], true)?;
        display_slice::<_, u8>(&mut output, &[], true)?;
        assert_eq!(String::from_utf8(output)?, " 1, 2, 3\n ab\n 0.5\n \n");

        Ok(())
    }
}
