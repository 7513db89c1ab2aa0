//! One round of play against a secret word

use crate::core::{EvaluateError, Guess, fold_word};
use thiserror::Error;

/// Rejected submission or round setup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("secret word must not be empty")]
    EmptySecret,
    #[error("a round needs at least one guess")]
    NoAttempts,
    #[error("the round is already over")]
    Finished,
    #[error("'{0}' was already guessed this round")]
    AlreadyGuessed(String),
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won { attempts: usize },
    Lost,
}

/// A single round: the secret, the guesses so far, and the attempt limit
///
/// The session only orders submissions and rejects repeats; scoring is
/// delegated to [`Guess::evaluate`].
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: String,
    max_guesses: usize,
    guesses: Vec<Guess>,
}

impl GameSession {
    /// Start a round
    ///
    /// # Errors
    /// Returns `GameError` if the secret is empty or `max_guesses` is zero.
    pub fn new(secret: impl Into<String>, max_guesses: usize) -> Result<Self, GameError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(GameError::EmptySecret);
        }
        if max_guesses == 0 {
            return Err(GameError::NoAttempts);
        }

        Ok(Self {
            secret,
            max_guesses,
            guesses: Vec::new(),
        })
    }

    /// Evaluate and record a guess
    ///
    /// # Errors
    /// Returns `GameError` if the round is over, the word was already
    /// guessed (ignoring case and accents), or the lengths differ.
    pub fn submit(&mut self, word: &str) -> Result<&Guess, GameError> {
        if self.status() != RoundStatus::InProgress {
            return Err(GameError::Finished);
        }

        let folded = fold_word(word);
        if self.guesses.iter().any(|g| fold_word(&g.word()) == folded) {
            return Err(GameError::AlreadyGuessed(word.to_string()));
        }

        let guess = Guess::evaluate(&self.secret, word)?;
        tracing::debug!(
            attempt = self.guesses.len() + 1,
            pattern = %guess.to_emoji(),
            "guess evaluated"
        );
        self.guesses.push(guess);

        Ok(&self.guesses[self.guesses.len() - 1])
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        match self.guesses.iter().position(Guess::is_correct) {
            Some(i) => RoundStatus::Won { attempts: i + 1 },
            None if self.guesses.len() >= self.max_guesses => RoundStatus::Lost,
            None => RoundStatus::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses.len())
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}
