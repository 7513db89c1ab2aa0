//! Guess evaluation against a secret word
//!
//! Implements the Wordle feedback rules, including duplicate letters:
//! a letter that appears `k` times in the secret can light up at most `k`
//! positions of the guess (Correct and Misplaced combined).

use super::fold::{fold_letter, letters};
use super::letter::{Letter, LetterState};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Invalid input handed to the evaluator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error("secret word must not be empty")]
    EmptySecret,
    #[error("guess has {guess} letters but the secret has {secret}")]
    LengthMismatch { secret: usize, guess: usize },
}

/// Score every letter of `guess` against `secret`
///
/// Comparison ignores case and diacritics. The returned letters keep the
/// guess characters verbatim, one per position.
///
/// # Algorithm
/// 1. First pass: mark exact position matches Correct and consume them
/// 2. Count the secret letters left over
/// 3. Second pass, left to right: a letter with a leftover occurrence is
///    Misplaced and consumes it, anything else is Incorrect
///
/// # Errors
/// Returns `EvaluateError` if the secret is empty or the lengths differ.
///
/// # Examples
/// ```
/// use wordle_streaks::core::{evaluate, LetterState::*};
///
/// let letters = evaluate("apple", "alien").unwrap();
/// let states: Vec<_> = letters.iter().map(|l| l.state()).collect();
/// assert_eq!(states, [Correct, Misplaced, Incorrect, Misplaced, Incorrect]);
/// ```
pub fn evaluate(secret: &str, guess: &str) -> Result<Vec<Letter>, EvaluateError> {
    let secret_letters = letters(secret);
    let guess_letters = letters(guess);

    if secret_letters.is_empty() {
        return Err(EvaluateError::EmptySecret);
    }
    if secret_letters.len() != guess_letters.len() {
        return Err(EvaluateError::LengthMismatch {
            secret: secret_letters.len(),
            guess: guess_letters.len(),
        });
    }

    let secret_keys: Vec<String> = secret_letters.iter().copied().map(fold_letter).collect();
    let guess_keys: Vec<String> = guess_letters.iter().copied().map(fold_letter).collect();

    let mut states = vec![LetterState::Incorrect; guess_keys.len()];
    let mut available: FxHashMap<&str, usize> = FxHashMap::default();

    // First pass: exact matches. Unmatched secret letters stay available.
    for (i, (g, s)) in guess_keys.iter().zip(&secret_keys).enumerate() {
        if g == s {
            states[i] = LetterState::Correct;
        } else {
            *available.entry(s.as_str()).or_insert(0) += 1;
        }
    }

    // Second pass: earlier guess positions claim leftover occurrences first
    for (state, key) in states.iter_mut().zip(&guess_keys) {
        if *state == LetterState::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(key.as_str())
            && *count > 0
        {
            *count -= 1;
            *state = LetterState::Misplaced;
        }
    }

    Ok(guess_letters
        .into_iter()
        .zip(states)
        .enumerate()
        .map(|(position, (character, state))| Letter::new(position, character, state))
        .collect())
}

/// An evaluated guess
///
/// Created once per submission and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    letters: Vec<Letter>,
}

impl Guess {
    /// Evaluate `guess` against `secret`
    ///
    /// # Errors
    /// Returns `EvaluateError` if the secret is empty or the lengths differ.
    pub fn evaluate(secret: &str, guess: &str) -> Result<Self, EvaluateError> {
        evaluate(secret, guess).map(|letters| Self { letters })
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// The submitted word, rebuilt from its letters
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(Letter::character).collect()
    }

    #[must_use]
    pub fn states(&self) -> Vec<LetterState> {
        self.letters.iter().map(Letter::state).collect()
    }

    /// True iff every letter is Correct
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|l| l.state() == LetterState::Correct)
    }

    /// Number of letters with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.letters.iter().filter(|l| l.state() == state).count()
    }

    /// Emoji row such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|l| l.state().emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::{Correct, Incorrect, Misplaced};

    fn states(secret: &str, guess: &str) -> Vec<LetterState> {
        Guess::evaluate(secret, guess).unwrap().states()
    }

    #[test]
    fn identical_words_all_correct() {
        for word in ["crane", "slate", "zzzzz", "aaaaa"] {
            let guess = Guess::evaluate(word, word).unwrap();
            assert!(guess.is_correct());
            assert_eq!(guess.count(Correct), 5);
        }
    }

    #[test]
    fn absent_letters_incorrect() {
        assert_eq!(states("abcde", "fghij"), vec![Incorrect; 5]);
    }

    #[test]
    fn apple_alien() {
        assert_eq!(
            states("apple", "alien"),
            vec![Correct, Misplaced, Incorrect, Misplaced, Incorrect]
        );
    }

    #[test]
    fn pools_onion_two_misplaced() {
        let guess = Guess::evaluate("pools", "onion").unwrap();
        assert_eq!(
            guess.states(),
            vec![Misplaced, Incorrect, Incorrect, Misplaced, Incorrect]
        );
        assert_eq!(guess.count(Misplaced), 2);
    }

    #[test]
    fn single_occurrence_goes_to_earlier_position() {
        // BACON has one O; ROOMS offers two at non-matching positions
        assert_eq!(
            states("bacon", "rooms"),
            vec![Incorrect, Misplaced, Incorrect, Incorrect, Incorrect]
        );
    }

    #[test]
    fn exact_matches_claimed_before_misplaced() {
        // The leading L would be misplaced, but both Ls of HELLO are taken
        // by the exact matches in the first pass
        assert_eq!(
            states("hello", "lolly"),
            vec![Incorrect, Misplaced, Correct, Correct, Incorrect]
        );
    }

    #[test]
    fn duplicate_letters_both_misplaced() {
        // SPEED vs ERASE: both Es are misplaced because ERASE has two
        assert_eq!(
            states("erase", "speed"),
            vec![Misplaced, Incorrect, Misplaced, Misplaced, Incorrect]
        );
    }

    #[test]
    fn duplicate_letters_green_and_yellow() {
        // ROBOT vs FLOOR: first O misplaced, second O correct
        assert_eq!(
            states("floor", "robot"),
            vec![Misplaced, Misplaced, Incorrect, Correct, Incorrect]
        );
    }

    #[test]
    fn case_and_accents_ignored() {
        assert!(Guess::evaluate("café", "CAFE").unwrap().is_correct());
        assert!(Guess::evaluate("naive", "NAÏVE").unwrap().is_correct());
        assert!(Guess::evaluate("crème", "creme").unwrap().is_correct());
    }

    #[test]
    fn decomposed_accent_counts_as_one_letter() {
        let guess = Guess::evaluate("cafe", "cafe\u{301}").unwrap();
        assert!(guess.is_correct());
        assert_eq!(guess.word(), "café");
    }

    #[test]
    fn letters_preserve_input_verbatim() {
        let guess = Guess::evaluate("slate", "CRÂNE").unwrap();
        assert_eq!(guess.word(), "CRÂNE");
        for (i, letter) in guess.letters().iter().enumerate() {
            assert_eq!(letter.position(), i);
        }
        assert_eq!(guess.letters()[2].character(), 'Â');
        assert_eq!(guess.letters()[2].state(), Correct);
    }

    #[test]
    fn length_mismatch_rejected() {
        assert_eq!(
            evaluate("apple", "pear"),
            Err(EvaluateError::LengthMismatch {
                secret: 5,
                guess: 4
            })
        );
        assert!(evaluate("pear", "apples").is_err());
    }

    #[test]
    fn empty_secret_rejected() {
        assert_eq!(evaluate("", ""), Err(EvaluateError::EmptySecret));
        assert_eq!(evaluate("", "a"), Err(EvaluateError::EmptySecret));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let first = evaluate("geese", "eerie").unwrap();
        let second = evaluate("geese", "eerie").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_hangul_syllables_do_not_match() {
        // 한 and 하 share a leading jamo but are different letters
        assert_eq!(states("한", "하"), vec![Incorrect]);
        assert_eq!(states("한글", "글한"), vec![Misplaced, Misplaced]);
        assert!(Guess::evaluate("한글", "한글").unwrap().is_correct());
    }

    #[test]
    fn hits_never_exceed_secret_occurrences() {
        let pairs = [
            ("apple", "ppppp"),
            ("geese", "eerie"),
            ("pools", "ooooo"),
            ("abbey", "babes"),
            ("mamma", "amass"),
            ("llama", "allay"),
            ("élève", "EEEEE"),
            ("crème", "ÉÈÊËE"),
            ("Ångå", "aaaa"),
            ("naïve", "ÏIÎiI"),
            ("하한하", "한한한"),
        ];

        for (secret, guess) in pairs {
            let secret_keys: Vec<String> = secret.chars().map(fold_letter).collect();
            let result = evaluate(secret, guess).unwrap();
            for letter in &result {
                let key = fold_letter(letter.character());
                let in_secret = secret_keys.iter().filter(|&s| *s == key).count();
                let hits = result
                    .iter()
                    .filter(|l| fold_letter(l.character()) == key && l.state().is_hit())
                    .count();
                assert!(
                    hits <= in_secret,
                    "{guess} vs {secret}: {hits} hits for '{key}' but only {in_secret} in secret"
                );
            }
        }
    }

    #[test]
    fn accented_duplicates_follow_occurrence_count() {
        // ÉLÈVE folds to "eleve": three Es, one of them at position 4
        assert_eq!(
            states("élève", "EEEEE"),
            vec![Correct, Incorrect, Correct, Incorrect, Correct]
        );
        // Both Ns of NANAS are taken by exact matches, the other Ñs get nothing
        assert_eq!(
            states("nanas", "ÑÑÑÑÑ"),
            vec![Correct, Incorrect, Correct, Incorrect, Incorrect]
        );
    }

    #[test]
    fn emoji_row() {
        let guess = Guess::evaluate("apple", "alien").unwrap();
        assert_eq!(guess.to_emoji(), "🟩🟨⬜🟨⬜");
    }
}
