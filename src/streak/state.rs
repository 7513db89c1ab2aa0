//! Per (player, game) streak record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Streak bookkeeping for one player in one game
///
/// A plain value: the transition functions in [`super::tracker`] take it by
/// reference and the caller owns loading, locking and saving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    pub current_streak: u32,
    /// Historical peak, never decreases
    pub max_streak: u32,
    pub last_activity_date: Option<NaiveDate>,
    pub reminder_sent_date: Option<NaiveDate>,
}

/// A record that breaks the streak invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreakError {
    #[error("max streak {max} is below current streak {current}")]
    MaxBelowCurrent { current: u32, max: u32 },
}

impl StreakState {
    /// Check the record invariants
    ///
    /// # Errors
    /// Returns `StreakError::MaxBelowCurrent` when `max_streak < current_streak`.
    pub const fn validate(&self) -> Result<(), StreakError> {
        if self.max_streak < self.current_streak {
            return Err(StreakError::MaxBelowCurrent {
                current: self.current_streak,
                max: self.max_streak,
            });
        }
        Ok(())
    }
}

/// Identifies one streak record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StreakKey {
    pub player: String,
    pub game: String,
}

impl StreakKey {
    #[must_use]
    pub fn new(player: impl Into<String>, game: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            game: game.into(),
        }
    }
}

impl fmt::Display for StreakKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.player, self.game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fresh() {
        let state = StreakState::default();
        assert_eq!(state.current_streak, 0);
        assert_eq!(state.max_streak, 0);
        assert!(state.last_activity_date.is_none());
        assert!(state.reminder_sent_date.is_none());
        assert!(state.validate().is_ok());
    }

    #[test]
    fn validate_rejects_max_below_current() {
        let state = StreakState {
            current_streak: 4,
            max_streak: 2,
            ..StreakState::default()
        };
        assert_eq!(
            state.validate(),
            Err(StreakError::MaxBelowCurrent { current: 4, max: 2 })
        );
    }

    #[test]
    fn serializes_dates_as_iso() {
        let state = StreakState {
            current_streak: 1,
            max_streak: 3,
            last_activity_date: NaiveDate::from_ymd_opt(2024, 3, 9),
            reminder_sent_date: None,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"2024-03-09\""));

        let back: StreakState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn key_display() {
        assert_eq!(StreakKey::new("ana", "wordle").to_string(), "ana/wordle");
    }
}
