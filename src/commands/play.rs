//! Interactive round in the terminal
//!
//! Text-based loop: read a guess per line, show the tiles, stop on a win,
//! on running out of guesses, or when the player quits.

use crate::game::{GameError, GameSession, RoundStatus};
use crate::output::print_guess;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Configuration for an interactive round
pub struct PlayConfig {
    pub secret: String,
    pub max_guesses: usize,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: 6,
        }
    }
}

/// Play one round, reading guesses from `input`
///
/// Returns the session in whatever state the round ended; it is still
/// `InProgress` if the player quit or input ran out.
///
/// # Errors
///
/// Returns an error if the round cannot be set up or input cannot be read.
pub fn run_play<R: BufRead>(config: PlayConfig, mut input: R) -> Result<GameSession> {
    let mut session = GameSession::new(config.secret, config.max_guesses)?;
    let length = session.secret().chars().count();

    println!("\nGuess the {length}-letter word. You have {} tries.", session.max_guesses());
    println!("Type 'q' to give up.\n");

    while session.status() == RoundStatus::InProgress {
        let Some(line) = prompt(&mut input, session.guesses().len() + 1)? else {
            break;
        };

        if line.is_empty() {
            continue;
        }
        // A quit word the length of the secret is played as a guess
        if is_quit_word(&line) && line.chars().count() != length {
            break;
        }

        match session.submit(&line) {
            Ok(guess) => print_guess(guess),
            Err(e @ (GameError::AlreadyGuessed(_) | GameError::Evaluate(_))) => {
                println!("{} {e}", "❌".red());
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(session)
}

fn is_quit_word(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit")
}

/// Read one trimmed line, `None` at end of input
fn prompt<R: BufRead>(input: &mut R, attempt: usize) -> Result<Option<String>> {
    print!("Guess {attempt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read guess")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
