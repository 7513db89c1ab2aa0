//! Wordle Streaks
//!
//! Wordle-style guess evaluation and per-player daily streak tracking.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wordle_streaks::core::Guess;
//! use wordle_streaks::streak::{StreakState, record_activity};
//!
//! let guess = Guess::evaluate("apple", "alien").unwrap();
//! assert_eq!(guess.to_emoji(), "🟩🟨⬜🟨⬜");
//!
//! let mut state = StreakState::default();
//! record_activity(&mut state, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//! record_activity(&mut state, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
//! assert_eq!(state.current_streak, 1);
//! ```

// Guess evaluation
pub mod core;

// Streak state machine and sweeps
pub mod streak;

// Game rounds
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
