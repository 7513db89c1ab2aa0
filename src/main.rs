//! Wordle Streaks - CLI
//!
//! Evaluate guesses, play a round, and keep daily streaks in a JSON store.

use anyhow::{Context, Result};
use chrono::{NaiveDate, TimeDelta};
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordle_streaks::{
    commands::{
        PlayConfig, evaluate_word, record_in_store, run_play, show_from_store, sweep_store,
    },
    game::RoundStatus,
    output::{print_guess, print_round_result, print_streak_status, print_sweep_report},
    streak::{Activity, Clock, FixedClock, StreakKey, SweepConfig, SystemClock},
};

#[derive(Parser)]
#[command(
    name = "wordle_streaks",
    about = "Wordle-style guess evaluation with daily streak tracking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Streak store file
    #[arg(short, long, global = true, default_value = "streaks.json")]
    store: PathBuf,

    /// Pretend today is this date (YYYY-MM-DD) instead of the UTC wall clock
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one guess against a secret
    Evaluate {
        /// The secret word
        secret: String,
        /// The guessed word
        guess: String,
    },

    /// Play a round in the terminal
    Play {
        /// The secret word
        secret: String,

        /// Number of guesses allowed
        #[arg(short = 'n', long, default_value = "6")]
        max_guesses: usize,

        /// Record a streak activity for this player when the round ends
        #[arg(short, long, requires = "game")]
        player: Option<String>,

        /// Game the streak belongs to
        #[arg(short, long, requires = "player")]
        game: Option<String>,
    },

    /// Inspect or update a streak
    Streak {
        #[command(subcommand)]
        action: StreakAction,
    },

    /// Run the reset and reminder sweeps that are due
    Sweep {
        /// Run both sweeps regardless of schedule
        #[arg(short, long)]
        force: bool,

        /// Hours between reset sweeps
        #[arg(long, default_value = "6")]
        reset_every_hours: u32,

        /// Hours between reminder sweeps
        #[arg(long, default_value = "24")]
        remind_every_hours: u32,
    },
}

#[derive(Subcommand)]
enum StreakAction {
    /// Record a qualifying activity for today
    Record(KeyArgs),
    /// Show a streak and its expiry
    Show(KeyArgs),
}

#[derive(Args)]
struct KeyArgs {
    /// Player identifier
    #[arg(short, long)]
    player: String,

    /// Game identifier
    #[arg(short, long)]
    game: String,
}

impl KeyArgs {
    fn key(self) -> StreakKey {
        StreakKey::new(self.player, self.game)
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let clock: Box<dyn Clock> = match cli.date {
        Some(date) => Box::new(FixedClock::at_date(date)),
        None => Box::new(SystemClock),
    };

    match cli.command {
        Commands::Evaluate { secret, guess } => {
            let guess = evaluate_word(&secret, &guess)?;
            print_guess(&guess);
            Ok(())
        }
        Commands::Play {
            secret,
            max_guesses,
            player,
            game,
        } => {
            let key = player.zip(game).map(|(p, g)| StreakKey::new(p, g));
            run_play_command(secret, max_guesses, key, &cli.store, clock.as_ref())
        }
        Commands::Streak { action } => run_streak_command(action, &cli.store, clock.as_ref()),
        Commands::Sweep {
            force,
            reset_every_hours,
            remind_every_hours,
        } => {
            let config = SweepConfig::new(
                TimeDelta::hours(i64::from(reset_every_hours)),
                TimeDelta::hours(i64::from(remind_every_hours)),
            );
            run_sweep_command(&config, force, &cli.store, clock.as_ref())
        }
    }
}

fn run_play_command(
    secret: String,
    max_guesses: usize,
    key: Option<StreakKey>,
    store: &Path,
    clock: &dyn Clock,
) -> Result<()> {
    let mut config = PlayConfig::new(secret);
    config.max_guesses = max_guesses;

    let session = run_play(config, io::stdin().lock())?;
    print_round_result(&session);

    // Only a finished round counts towards the streak
    if session.status() == RoundStatus::InProgress {
        return Ok(());
    }
    if let Some(key) = key {
        let today = clock.today();
        let (state, activity) = record_in_store(store, &key, today)
            .context("Round finished but the streak could not be saved")?;
        if activity == Activity::AlreadyRecorded {
            println!("Already played today, streak unchanged.");
        }
        print_streak_status(&key, &state, today);
    }
    Ok(())
}

fn run_streak_command(action: StreakAction, store: &Path, clock: &dyn Clock) -> Result<()> {
    let today = clock.today();
    match action {
        StreakAction::Record(args) => {
            let key = args.key();
            let (state, _) = record_in_store(store, &key, today)?;
            print_streak_status(&key, &state, today);
        }
        StreakAction::Show(args) => {
            let key = args.key();
            let state = show_from_store(store, &key)?;
            print_streak_status(&key, &state, today);
        }
    }
    Ok(())
}

fn run_sweep_command(
    config: &SweepConfig,
    force: bool,
    store: &Path,
    clock: &dyn Clock,
) -> Result<()> {
    match sweep_store(store, config, clock.now(), force)? {
        Some(report) => print_sweep_report(&report),
        None => println!("No sweep due."),
    }
    Ok(())
}
