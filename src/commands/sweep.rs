//! Sweep command
//!
//! Meant to be invoked from cron or a systemd timer as often as the shortest
//! interval; each run only performs the sweeps that are due. The store lock
//! is held for the whole run so activity recorded meanwhile is not lost.

use super::store::{load_book, lock_store, save_book};
use crate::streak::sweep::run_sweep;
use crate::streak::{DueSweeps, SweepConfig, SweepReport};
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Run the due sweeps (or all of them with `force`) over the store
///
/// Returns `None` when nothing was due.
///
/// # Errors
///
/// Returns an error if the store cannot be loaded or saved.
pub fn sweep_store(
    store: &Path,
    config: &SweepConfig,
    now: DateTime<Utc>,
    force: bool,
) -> Result<Option<SweepReport>> {
    let _lock = lock_store(store)?;
    let mut book = load_book(store)?;

    let due = if force {
        DueSweeps::ALL
    } else {
        book.schedule.due(config, now)
    };
    if !due.any() {
        tracing::info!("no sweep due");
        return Ok(None);
    }

    let report = run_sweep(&mut book, due, now);
    save_book(store, &book)?;
    Ok(Some(report))
}
