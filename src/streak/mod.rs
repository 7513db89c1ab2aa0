//! Daily activity streaks
//!
//! Pure transitions over a [`StreakState`] record, plus the keyed
//! [`StreakBook`] and the periodic sweeps that callers schedule over it.

mod book;
mod clock;
mod state;
pub mod sweep;
mod tracker;

pub use book::{BookError, StreakBook};
pub use clock::{Clock, FixedClock, SystemClock};
pub use state::{StreakError, StreakKey, StreakState};
pub use sweep::{DueSweeps, SweepConfig, SweepReport, SweepSchedule};
pub use tracker::{
    Activity, StreakPhase, mark_reminder_sent, next_streak_date, phase, record_activity, reset,
    should_reset, should_send_reminder, streak_expiry_date,
};
