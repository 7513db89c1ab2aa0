//! Streak commands
//!
//! Read-modify-write of one record in the store. Several CLI processes may
//! write the same store at once (a cron sweep overlapping a round, two
//! players finishing together), so the store lock is held from load to save.

use super::store::{load_book, lock_store, save_book};
use crate::streak::{Activity, StreakKey, StreakState, record_activity};
use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;

/// Record a qualifying activity for `key` on `today` and persist it
///
/// # Errors
///
/// Returns an error if the store cannot be loaded or saved.
pub fn record_in_store(
    store: &Path,
    key: &StreakKey,
    today: NaiveDate,
) -> Result<(StreakState, Activity)> {
    let _lock = lock_store(store)?;
    let mut book = load_book(store)?;
    let state = book.entry(key.clone());
    let activity = record_activity(state, today);
    let state = state.clone();

    tracing::info!(%key, ?activity, streak = state.current_streak, "activity recorded");

    if activity != Activity::AlreadyRecorded {
        save_book(store, &book)?;
    }
    Ok((state, activity))
}

/// Look up the record for `key`, defaulting to a fresh one
///
/// # Errors
///
/// Returns an error if the store cannot be loaded.
pub fn show_from_store(store: &Path, key: &StreakKey) -> Result<StreakState> {
    let book = load_book(store)?;
    Ok(book.get(key).cloned().unwrap_or_default())
}
