//! Scheduled reset and reminder sweeps
//!
//! Two periodic jobs run over every record in a [`StreakBook`]:
//! - reset: zero streaks that outlived their grace day (every 6 hours by default)
//! - remind: pick players whose streak lapses tomorrow (daily by default)
//!
//! Records are independent, so each sweep fans out across threads. The book
//! is borrowed mutably for the duration, which gives the single-writer
//! guarantee per record for free.

use super::book::StreakBook;
use super::state::StreakKey;
use super::tracker::{mark_reminder_sent, reset, should_reset, should_send_reminder};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Sweep cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    pub reset_every: TimeDelta,
    pub remind_every: TimeDelta,
}

impl SweepConfig {
    #[must_use]
    pub const fn new(reset_every: TimeDelta, remind_every: TimeDelta) -> Self {
        Self {
            reset_every,
            remind_every,
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new(TimeDelta::hours(6), TimeDelta::hours(24))
    }
}

/// When each sweep last ran
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepSchedule {
    pub last_reset: Option<DateTime<Utc>>,
    pub last_reminder: Option<DateTime<Utc>>,
}

/// Which sweeps are due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueSweeps {
    pub reset: bool,
    pub remind: bool,
}

impl DueSweeps {
    pub const ALL: Self = Self {
        reset: true,
        remind: true,
    };

    #[must_use]
    pub const fn any(self) -> bool {
        self.reset || self.remind
    }
}

impl SweepSchedule {
    /// Sweeps whose interval has elapsed at `now`; a sweep that never ran is due
    #[must_use]
    pub fn due(&self, config: &SweepConfig, now: DateTime<Utc>) -> DueSweeps {
        let elapsed = |last: Option<DateTime<Utc>>, every: TimeDelta| {
            last.is_none_or(|last| now - last >= every)
        };

        DueSweeps {
            reset: elapsed(self.last_reset, config.reset_every),
            remind: elapsed(self.last_reminder, config.remind_every),
        }
    }
}

/// A streak zeroed by the reset sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetOutcome {
    pub key: StreakKey,
    /// Streak length before the reset
    pub lost_streak: u32,
    pub max_streak: u32,
}

/// Result of one sweep run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub examined: usize,
    pub resets: Vec<ResetOutcome>,
    pub reminders: Vec<StreakKey>,
}

/// Reset every expired streak in the book
///
/// Returns the affected records sorted by key.
pub fn run_resets(book: &mut StreakBook, today: NaiveDate) -> Vec<ResetOutcome> {
    let mut outcomes: Vec<ResetOutcome> = book
        .states
        .par_iter_mut()
        .filter(|(_, state)| should_reset(state, today))
        .map(|(key, state)| {
            let lost_streak = state.current_streak;
            reset(state);
            ResetOutcome {
                key: key.clone(),
                lost_streak,
                max_streak: state.max_streak,
            }
        })
        .collect();

    outcomes.sort_by(|a, b| a.key.cmp(&b.key));
    for outcome in &outcomes {
        tracing::info!(
            key = %outcome.key,
            lost = outcome.lost_streak,
            "streak reset"
        );
    }
    outcomes
}

/// Pick every record due a reminder today and mark it as sent
///
/// The caller delivers the reminders; the returned keys are sorted.
pub fn run_reminders(book: &mut StreakBook, today: NaiveDate) -> Vec<StreakKey> {
    let mut keys: Vec<StreakKey> = book
        .states
        .par_iter_mut()
        .filter(|(_, state)| should_send_reminder(state, today))
        .map(|(key, state)| {
            mark_reminder_sent(state, today);
            key.clone()
        })
        .collect();

    keys.sort();
    tracing::debug!(count = keys.len(), %today, "reminders selected");
    keys
}

/// Run the due sweeps at `now` and stamp them on the book's schedule
pub fn run_sweep(book: &mut StreakBook, due: DueSweeps, now: DateTime<Utc>) -> SweepReport {
    let today = now.date_naive();
    let mut report = SweepReport {
        examined: book.len(),
        ..SweepReport::default()
    };

    if due.reset {
        report.resets = run_resets(book, today);
        book.schedule.last_reset = Some(now);
    }
    if due.remind {
        report.reminders = run_reminders(book, today);
        book.schedule.last_reminder = Some(now);
    }

    tracing::debug!(
        examined = report.examined,
        resets = report.resets.len(),
        reminders = report.reminders.len(),
        "sweep finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streak::StreakState;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn at(d: u32, hour: u32) -> DateTime<Utc> {
        day(d).and_hms_opt(hour, 0, 0).unwrap().and_utc()
    }

    fn book_with(records: &[(&str, u32, u32)]) -> StreakBook {
        let mut book = StreakBook::new();
        for &(player, current, last_day) in records {
            *book.entry(StreakKey::new(player, "wordle")) = StreakState {
                current_streak: current,
                max_streak: current,
                last_activity_date: Some(day(last_day)),
                reminder_sent_date: None,
            };
        }
        book
    }

    #[test]
    fn never_run_is_due() {
        let due = SweepSchedule::default().due(&SweepConfig::default(), at(1, 0));
        assert_eq!(due, DueSweeps::ALL);
    }

    #[test]
    fn due_respects_intervals() {
        let config = SweepConfig::default();
        let schedule = SweepSchedule {
            last_reset: Some(at(1, 0)),
            last_reminder: Some(at(1, 0)),
        };

        let due = schedule.due(&config, at(1, 5));
        assert!(!due.any());

        let due = schedule.due(&config, at(1, 6));
        assert!(due.reset);
        assert!(!due.remind);

        assert_eq!(schedule.due(&config, at(2, 0)), DueSweeps::ALL);
    }

    #[test]
    fn resets_only_expired_streaks() {
        let mut book = book_with(&[("ana", 3, 8), ("bo", 2, 9), ("cy", 0, 1), ("di", 4, 1)]);

        let outcomes = run_resets(&mut book, day(10));
        let keys: Vec<_> = outcomes.iter().map(|o| o.key.player.as_str()).collect();
        assert_eq!(keys, ["ana", "di"]);
        assert_eq!(outcomes[0].lost_streak, 3);
        assert_eq!(outcomes[1].max_streak, 4);

        let ana = book.get(&StreakKey::new("ana", "wordle")).unwrap();
        assert_eq!(ana.current_streak, 0);
        assert_eq!(ana.max_streak, 3);
        assert_eq!(book.get(&StreakKey::new("bo", "wordle")).unwrap().current_streak, 2);
    }

    #[test]
    fn reminders_marked_once() {
        let mut book = book_with(&[("ana", 3, 9), ("bo", 2, 10), ("cy", 0, 9)]);

        let first = run_reminders(&mut book, day(10));
        assert_eq!(first, vec![StreakKey::new("ana", "wordle")]);

        let second = run_reminders(&mut book, day(10));
        assert!(second.is_empty());
    }

    #[test]
    fn sweep_stamps_schedule() {
        let mut book = book_with(&[("ana", 3, 8), ("bo", 2, 9)]);
        let now = at(10, 12);

        let report = run_sweep(&mut book, DueSweeps::ALL, now);
        assert_eq!(report.examined, 2);
        assert_eq!(report.resets.len(), 1);
        assert_eq!(report.reminders, vec![StreakKey::new("bo", "wordle")]);
        assert_eq!(book.schedule.last_reset, Some(now));
        assert_eq!(book.schedule.last_reminder, Some(now));
    }

    #[test]
    fn sweep_skips_jobs_not_due() {
        let mut book = book_with(&[("ana", 3, 8)]);
        let due = DueSweeps {
            reset: false,
            remind: true,
        };

        let report = run_sweep(&mut book, due, at(10, 0));
        assert!(report.resets.is_empty());
        assert!(book.schedule.last_reset.is_none());
        assert_eq!(book.get(&StreakKey::new("ana", "wordle")).unwrap().current_streak, 3);
    }
}
