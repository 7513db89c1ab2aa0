//! Keyed collection of streak records
//!
//! The book is what a caller loads, mutates and saves as a unit. On disk it is
//! a flat list of records; loading validates each one so that a corrupted
//! store surfaces as an error instead of being silently clamped.

use super::state::{StreakError, StreakKey, StreakState};
use super::sweep::SweepSchedule;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// All streak records known to a caller, plus sweep bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookFile", into = "BookFile")]
pub struct StreakBook {
    pub(crate) states: FxHashMap<StreakKey, StreakState>,
    pub schedule: SweepSchedule,
}

/// A stored record that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("invalid streak record for {key}: {source}")]
    InvalidRecord { key: StreakKey, source: StreakError },
    #[error("duplicate streak record for {0}")]
    DuplicateRecord(StreakKey),
}

impl StreakBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &StreakKey) -> Option<&StreakState> {
        self.states.get(key)
    }

    /// State for `key`, created with defaults on first use
    pub fn entry(&mut self, key: StreakKey) -> &mut StreakState {
        self.states.entry(key).or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Records sorted by key
    #[must_use]
    pub fn sorted(&self) -> Vec<(&StreakKey, &StreakState)> {
        let mut records: Vec<_> = self.states.iter().collect();
        records.sort_by(|a, b| a.0.cmp(b.0));
        records
    }
}

#[derive(Serialize, Deserialize)]
struct BookFile {
    #[serde(default)]
    schedule: SweepSchedule,
    #[serde(default)]
    records: Vec<BookRecord>,
}

#[derive(Serialize, Deserialize)]
struct BookRecord {
    #[serde(flatten)]
    key: StreakKey,
    #[serde(flatten)]
    state: StreakState,
}

impl TryFrom<BookFile> for StreakBook {
    type Error = BookError;

    fn try_from(file: BookFile) -> Result<Self, Self::Error> {
        let mut states = FxHashMap::default();
        for BookRecord { key, state } in file.records {
            if let Err(source) = state.validate() {
                return Err(BookError::InvalidRecord { key, source });
            }
            if states.contains_key(&key) {
                return Err(BookError::DuplicateRecord(key));
            }
            states.insert(key, state);
        }

        Ok(Self {
            states,
            schedule: file.schedule,
        })
    }
}

impl From<StreakBook> for BookFile {
    fn from(book: StreakBook) -> Self {
        let mut records: Vec<BookRecord> = book
            .states
            .into_iter()
            .map(|(key, state)| BookRecord { key, state })
            .collect();
        records.sort_by(|a, b| a.key.cmp(&b.key));

        Self {
            schedule: book.schedule,
            records,
        }
    }
}
