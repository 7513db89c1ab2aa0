//! Core domain types for guess evaluation
//!
//! Pure and deterministic: no I/O, no logging, no shared state.

mod fold;
mod guess;
mod letter;

pub use fold::{fold_letter, fold_word};
pub use guess::{EvaluateError, Guess, evaluate};
pub use letter::{Letter, LetterState};
