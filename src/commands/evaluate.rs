//! One-shot guess evaluation

use crate::core::Guess;
use anyhow::{Context, Result};

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if the secret is empty or the lengths differ.
pub fn evaluate_word(secret: &str, guess: &str) -> Result<Guess> {
    Guess::evaluate(secret, guess).with_context(|| format!("Cannot evaluate '{guess}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates() {
        let guess = evaluate_word("apple", "alien").unwrap();
        assert_eq!(guess.to_emoji(), "🟩🟨⬜🟨⬜");
    }

    #[test]
    fn mismatch_error_mentions_guess() {
        let err = evaluate_word("apple", "pear").unwrap_err();
        assert!(err.to_string().contains("'pear'"));
        assert!(format!("{err:#}").contains("4 letters but the secret has 5"));
    }
}
