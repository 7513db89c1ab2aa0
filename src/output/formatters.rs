//! Formatting utilities for terminal output

use crate::core::{Guess, LetterState};
use colored::Colorize;

/// Format a guess as an emoji row
#[must_use]
pub fn guess_to_emoji(guess: &Guess) -> String {
    guess.to_emoji()
}

/// Format a guess as coloured tiles, one uppercase letter per tile
#[must_use]
pub fn colored_guess(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .map(|letter| {
            let tile = format!(" {} ", letter.character().to_uppercase());
            match letter.state() {
                LetterState::Correct => tile.black().on_green().bold().to_string(),
                LetterState::Misplaced => tile.black().on_yellow().bold().to_string(),
                LetterState::Incorrect => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Shareable result grid
///
/// The header is `attempts/max` for a solved round and `X/max` otherwise,
/// followed by one emoji row per guess.
#[must_use]
pub fn share_grid(guesses: &[Guess], max_guesses: usize) -> String {
    let score = guesses
        .iter()
        .position(Guess::is_correct)
        .map_or_else(|| "X".to_string(), |i| (i + 1).to_string());

    let mut grid = format!("{score}/{max_guesses}");
    for guess in guesses {
        grid.push('\n');
        grid.push_str(&guess.to_emoji());
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_all_incorrect() {
        let guess = Guess::evaluate("abcde", "fghij").unwrap();
        assert_eq!(guess_to_emoji(&guess), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_all_correct() {
        let guess = Guess::evaluate("crane", "crane").unwrap();
        assert_eq!(guess_to_emoji(&guess), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let guess = Guess::evaluate("crane", "slate").unwrap();
        assert_eq!(colored_guess(&guess), " S  L  A  T  E ");
    }

    #[test]
    fn share_grid_solved() {
        let guesses = vec![
            Guess::evaluate("apple", "alien").unwrap(),
            Guess::evaluate("apple", "apple").unwrap(),
        ];
        assert_eq!(share_grid(&guesses, 6), "2/6\n🟩🟨⬜🟨⬜\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_unsolved() {
        let guesses = vec![Guess::evaluate("apple", "zzzzz").unwrap()];
        assert_eq!(share_grid(&guesses, 1), "X/1\n⬜⬜⬜⬜⬜");
    }
}
