//! # Guess My Number
//!
//! Terminal front end: you think of a number, the machine guesses it.
//!
//! Answer each guess with `l` (your number is lower) or `g` (it is greater).
//! Lies are caught. Run with `RUST_LOG=debug` to watch the range narrow.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use guess_my_number::{Feedback, GameConfig, GameSession, GuessError, Outcome};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Seed for reproducible guesses
    #[clap(short, long)]
    seed: Option<u64>,

    /// Smallest number you may pick
    #[clap(long, allow_negative_numbers = true, default_value_t = guess_my_number::core::DEFAULT_LOWER)]
    lower: i32,

    /// One past the largest number you may pick
    #[clap(long, allow_negative_numbers = true, default_value_t = guess_my_number::core::DEFAULT_UPPER)]
    upper: i32,

    /// Pick the number up front instead of being asked
    #[clap(long)]
    secret: Option<String>,

    /// Answer every guess honestly and print the result
    #[clap(long, action = clap::ArgAction::SetTrue)]
    auto: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if i64::from(args.upper) - i64::from(args.lower) < 2 {
        anyhow::bail!("--lower {} --upper {} leave fewer than 2 numbers", args.lower, args.upper);
    }
    let mut config = GameConfig::new().with_bounds(args.lower, args.upper);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut session = GameSession::new(config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let picked = match &args.secret {
            Some(text) => text.clone(),
            None => {
                let max = session.config().max_secret();
                match prompt(&mut lines, &format!("Enter a number between {} and {}: ", args.lower, max))? {
                    Some(text) => text,
                    None => return Ok(()),
                }
            }
        };

        let started = if args.auto {
            session.play_truthfully(&picked).map(|_| ())
        } else {
            session.pick_number(&picked).map(|_| ())
        };
        match started {
            Ok(()) => {}
            Err(err @ (GuessError::NotANumber(_) | GuessError::SecretOutOfRange { .. }))
                if args.secret.is_none() =>
            {
                println!("{}", err);
                continue;
            }
            Err(err) => return Err(err.into()),
        }
        if !args.auto && !play_rounds(&mut session, &mut lines)? {
            return Ok(());
        }

        print_game_over(&session);

        if args.secret.is_some() || args.auto {
            return Ok(());
        }
        match prompt(&mut lines, "Start a new game? [y/N] ")? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => session.start_new_game(),
            _ => return Ok(()),
        }
    }
}

/// Ask for feedback until the engine wins. Returns `false` on end of input.
fn play_rounds<B: BufRead>(session: &mut GameSession, lines: &mut io::Lines<B>) -> Result<bool> {
    while let Some(guess) = session.current_guess() {
        println!();
        println!("Opponent's guess: {}", guess);
        let Some(answer) = prompt(lines, "Higher or lower? [g/l] ")? else {
            return Ok(false);
        };
        let feedback = match answer.parse::<Feedback>() {
            Ok(feedback) => feedback,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        match session.feedback(feedback)? {
            Outcome::Invalid => println!("Don't lie! You know that this is wrong..."),
            Outcome::Continue | Outcome::Won { .. } => {}
        }
    }
    Ok(true)
}

fn print_game_over(session: &GameSession) {
    println!();
    println!("Game Over!");
    for entry in session.guess_log() {
        println!("  {}", entry);
    }
    if let Some(summary) = session.summary() {
        println!("{}", summary);
    }
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    Ok(lines.next().transpose()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_bounds() {
        let args = Args::try_parse_from(["guess-my-number", "--lower", "-5", "--upper", "-1"]).unwrap();
        assert_eq!(args.lower, -5);
        assert_eq!(args.upper, -1);
    }

    #[test]
    fn test_default_bounds() {
        let args = Args::try_parse_from(["guess-my-number", "--auto", "--secret", "42"]).unwrap();
        assert_eq!((args.lower, args.upper), (1, 100));
        assert!(args.auto);
        assert_eq!(args.secret.as_deref(), Some("42"));
    }
}
