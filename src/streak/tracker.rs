//! Streak transitions and predicates
//!
//! All dates are calendar days. A streak survives one idle day (the grace
//! day): activity on day N keeps it alive through day N+1, and from day N+2
//! on it is eligible for reset.
//!
//! # Examples
//! ```
//! use chrono::NaiveDate;
//! use wordle_streaks::streak::{StreakState, record_activity, should_reset};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
//! let mut state = StreakState::default();
//!
//! record_activity(&mut state, day(1));
//! record_activity(&mut state, day(2));
//! assert_eq!(state.current_streak, 1);
//!
//! assert!(!should_reset(&state, day(3)));
//! assert!(should_reset(&state, day(4)));
//! ```

use super::state::StreakState;
use chrono::{Days, NaiveDate};

/// What an activity event did to the streak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// Already counted today, nothing changed
    AlreadyRecorded,
    /// Consecutive day, streak incremented
    Extended,
    /// First activity or a gap, streak set to zero
    Restarted,
}

/// Derived lifecycle phase of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakPhase {
    /// No activity recorded yet
    Fresh,
    /// Streak is zero
    Idle,
    /// Streak is running and not expired
    Active,
    /// Streak is running but past its expiry, awaiting a sweep
    ExpiredPendingReset,
}

/// `None` past the end of the calendar: such a day never arrives
fn days_after(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}

fn debug_check(state: &StreakState) {
    debug_assert!(
        state.validate().is_ok(),
        "inconsistent streak state: {state:?}"
    );
}

/// Record a qualifying activity on `today`
///
/// Counts at most once per day. A consecutive day extends the streak, any
/// other day (including the very first activity) restarts it at zero. The
/// peak is updated afterwards.
pub fn record_activity(state: &mut StreakState, today: NaiveDate) -> Activity {
    debug_check(state);

    if state.last_activity_date == Some(today) {
        return Activity::AlreadyRecorded;
    }

    let activity = match state.last_activity_date {
        Some(last) if days_after(last, 1) == Some(today) => {
            state.current_streak = state.current_streak.saturating_add(1);
            Activity::Extended
        }
        _ => {
            state.current_streak = 0;
            Activity::Restarted
        }
    };

    state.max_streak = state.max_streak.max(state.current_streak);
    state.last_activity_date = Some(today);
    activity
}

/// Whether a running streak has missed its grace day
#[must_use]
pub fn should_reset(state: &StreakState, today: NaiveDate) -> bool {
    debug_check(state);

    state.current_streak > 0
        && state
            .last_activity_date
            .and_then(|last| days_after(last, 2))
            .is_some_and(|expiry| expiry <= today)
}

/// Zero the streak, keeping its peak
pub fn reset(state: &mut StreakState) {
    debug_check(state);

    state.max_streak = state.max_streak.max(state.current_streak);
    state.current_streak = 0;
    state.reminder_sent_date = None;
}

/// Whether today is the last day to save the streak and no reminder went out yet
#[must_use]
pub fn should_send_reminder(state: &StreakState, today: NaiveDate) -> bool {
    debug_check(state);

    state.current_streak > 0
        && state.reminder_sent_date != Some(today)
        && state
            .last_activity_date
            .is_some_and(|last| days_after(last, 1) == Some(today))
}

/// Note that a reminder was delivered on `today`
pub fn mark_reminder_sent(state: &mut StreakState, today: NaiveDate) {
    state.reminder_sent_date = Some(today);
}

/// First day on which activity extends the streak
///
/// Saturates at `NaiveDate::MAX`; the predicates above never treat that
/// clamped value as a real day.
#[must_use]
pub fn next_streak_date(state: &StreakState, today: NaiveDate) -> NaiveDate {
    state
        .last_activity_date
        .map_or(today, |last| days_after(last, 1).unwrap_or(NaiveDate::MAX))
}

/// Day from which the streak may be reset, saturating at `NaiveDate::MAX`
#[must_use]
pub fn streak_expiry_date(state: &StreakState, today: NaiveDate) -> NaiveDate {
    state
        .last_activity_date
        .map_or(today, |last| days_after(last, 2).unwrap_or(NaiveDate::MAX))
}

#[must_use]
pub fn phase(state: &StreakState, today: NaiveDate) -> StreakPhase {
    if state.last_activity_date.is_none() {
        StreakPhase::Fresh
    } else if state.current_streak == 0 {
        StreakPhase::Idle
    } else if should_reset(state, today) {
        StreakPhase::ExpiredPendingReset
    } else {
        StreakPhase::Active
    }
}
