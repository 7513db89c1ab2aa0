//! Text folding for accent- and case-insensitive comparison
//!
//! Submitted words are composed to NFC first so that a decomposed "e + ◌́"
//! counts as one letter. Comparison then works on a folded key per letter:
//! canonical decomposition, combining marks dropped, lowercased.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compose a submitted word into its letters (NFC)
#[must_use]
pub fn letters(text: &str) -> Vec<char> {
    text.nfc().collect()
}

/// Fold a single letter to its comparison key
///
/// Every base scalar of the canonical decomposition is kept, so a Hangul
/// syllable keeps all of its jamo; only combining marks are dropped.
///
/// # Examples
/// ```
/// use wordle_streaks::core::fold_letter;
///
/// assert_eq!(fold_letter('É'), "e");
/// assert_eq!(fold_letter('ñ'), "n");
/// assert_eq!(fold_letter('Z'), "z");
/// assert_ne!(fold_letter('한'), fold_letter('하'));
/// ```
#[must_use]
pub fn fold_letter(letter: char) -> String {
    std::iter::once(letter)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Fold a whole word, letter by letter
#[must_use]
pub fn fold_word(text: &str) -> String {
    letters(text).into_iter().map(fold_letter).collect()
}
