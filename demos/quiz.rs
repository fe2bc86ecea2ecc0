//! A tiny guessing game built on the prompts.
//!
//! Run with `RUST_LOG=debug` to see accepted and rejected answers in the log.

use reprompt::{Config, Prompter, utils};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::new()
        .space_before_text(true)
        .colored_text(true)
        .valid_input_sound("ok")
        .invalid_input_sound("error")
        .sound_player(|id: &str| log::info!("playing sound {id}"));
    let mut term = Prompter::stdio(config);

    term.clear_screen()?;
    let name = term.get_string("What's your name?", 2)?;

    loop {
        let secret = utils::ranged_random(1, 11);
        let guess = term.get_number(&format!("{name}, guess a number from 1 to 10"))?;

        if guess == secret {
            println!("Well done!");
        } else {
            println!("Nope, it was {secret}.");
        }

        if !term.get_yes_or_no("Play again? (y/n)")? {
            break;
        }
    }

    Ok(())
}
