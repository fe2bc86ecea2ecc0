use crate::{Promptable, Rejection};

/// Promptable type for whole numbers.
///
/// See [`number()`] for more information.
pub struct Number<'a> {
    question: &'a str,
}

/// Returns a type that asks for a base-10 signed integer.
pub fn number(question: &str) -> Number<'_> {
    Number { question }
}

impl Promptable for Number<'_> {
    type Output = i64;

    fn question(&self) -> &str {
        self.question
    }

    fn validate(&mut self, input: &str) -> Result<Self::Output, Rejection> {
        input.parse().map_err(|_| Rejection::NotInteger)
    }
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use crate::{Config, prelude::*};

    #[test]
    fn normal_int_input() -> anyhow::Result<()> {
        let input = b"42\n";
        let mut output = Vec::new();

        let res = crate::number("How old?").prompt_with(
            BufReader::new(input.as_slice()),
            &mut output,
            &Config::default(),
        )?;
        assert_eq!(res, 42);
        assert_eq!(output.as_slice(), b"How old?\n-> ");

        Ok(())
    }

    #[test]
    fn signs_and_whitespace() -> anyhow::Result<()> {
        let config = Config::default();
        for (input, expected) in [(" -17 \n", -17), ("+5\n", 5), ("0", 0)] {
            let res = crate::number("").prompt_with(input.as_bytes(), std::io::sink(), &config)?;
            assert_eq!(res, expected);
        }

        Ok(())
    }

    #[test]
    fn repeat_until_int_input() -> anyhow::Result<()> {
        let input = b"abc\n4.5\n\n99999999999999999999\n7\n";
        let mut output = Vec::new();

        let res =
            crate::number("n").prompt_with(input.as_slice(), &mut output, &Config::default())?;
        assert_eq!(res, 7);

        let rejected = "n\n-> Please enter a whole number\n";
        assert_eq!(String::from_utf8(output)?, format!("{}n\n-> ", rejected.repeat(4)));

        Ok(())
    }
}
