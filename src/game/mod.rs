//! Game rounds built on the evaluator

mod session;

pub use session::{GameError, GameSession, RoundStatus};
