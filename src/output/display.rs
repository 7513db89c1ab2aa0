//! Display functions for command results

use super::formatters::{colored_guess, guess_to_emoji, share_grid};
use crate::core::Guess;
use crate::game::{GameSession, RoundStatus};
use crate::streak::{
    StreakKey, StreakPhase, StreakState, SweepReport, next_streak_date, phase, streak_expiry_date,
};
use chrono::NaiveDate;
use colored::Colorize;

/// Print one evaluated guess as tiles plus emoji row
pub fn print_guess(guess: &Guess) {
    println!("{}  {}", colored_guess(guess), guess_to_emoji(guess));
}

/// Print the end-of-round banner and share grid
pub fn print_round_result(session: &GameSession) {
    println!("\n{}", "─".repeat(60).cyan());
    match session.status() {
        RoundStatus::Won { attempts } => println!(
            "{}",
            format!(
                "✅ Solved in {attempts} {}!",
                if attempts == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        ),
        RoundStatus::Lost => println!(
            "{} {}",
            "❌ Out of guesses. The word was".red().bold(),
            session.secret().to_uppercase().bright_yellow().bold()
        ),
        RoundStatus::InProgress => println!("{}", "Round abandoned".bright_black()),
    }
    println!("{}", "─".repeat(60).cyan());
    println!("\n{}\n", share_grid(session.guesses(), session.max_guesses()));
}

/// Print a streak record and its derived dates
pub fn print_streak_status(key: &StreakKey, state: &StreakState, today: NaiveDate) {
    let label = match phase(state, today) {
        StreakPhase::Fresh => "no activity yet".bright_black(),
        StreakPhase::Idle => "idle".yellow(),
        StreakPhase::Active => "active".green(),
        StreakPhase::ExpiredPendingReset => "expired, awaiting reset".red(),
    };

    println!("\n🔥 {} ({label})", key.to_string().bright_cyan().bold());
    println!(
        "   Current streak:  {}",
        state.current_streak.to_string().bright_yellow().bold()
    );
    println!("   Best streak:     {}", state.max_streak);
    match state.last_activity_date {
        Some(last) => {
            println!("   Last played:     {last}");
            println!("   Next day:        {}", next_streak_date(state, today));
            println!("   Expires:         {}", streak_expiry_date(state, today));
        }
        None => println!("   Last played:     never"),
    }
}

/// Print the outcome of a sweep run
pub fn print_sweep_report(report: &SweepReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SWEEP RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Records examined: {}", report.examined);
    println!(
        "   Streaks reset:    {}",
        report.resets.len().to_string().yellow()
    );
    for outcome in &report.resets {
        println!(
            "     • {} lost a streak of {} (best {})",
            outcome.key, outcome.lost_streak, outcome.max_streak
        );
    }

    println!(
        "   Reminders due:    {}",
        report.reminders.len().to_string().green()
    );
    for key in &report.reminders {
        println!("     • {key}");
    }
}
