//! Per-letter feedback
//!
//! A guess is scored one letter at a time. Each letter keeps the character the
//! player typed at its position, plus the computed state.

use std::fmt;

/// Feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    /// Letter matches the secret at the same position
    Correct,
    /// Letter appears in the secret at another, still unclaimed, position
    Misplaced,
    /// Letter matches no remaining occurrence in the secret
    Incorrect,
}

impl LetterState {
    /// Emoji square used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Incorrect => '⬜',
        }
    }

    /// Whether the letter occurs in the secret at all
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Correct | Self::Misplaced)
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Misplaced => "misplaced",
            Self::Incorrect => "incorrect",
        };
        f.write_str(name)
    }
}

/// One evaluated letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    position: usize,
    character: char,
    state: LetterState,
}

impl Letter {
    #[must_use]
    pub(crate) const fn new(position: usize, character: char, state: LetterState) -> Self {
        Self {
            position,
            character,
            state,
        }
    }

    /// Zero-based index within the guess
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The character as submitted (NFC, original case and accents)
    #[inline]
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> LetterState {
        self.state
    }
}
