//! Command implementations

pub mod evaluate;
pub mod play;
pub mod store;
pub mod streak;
pub mod sweep;

pub use evaluate::evaluate_word;
pub use play::{PlayConfig, run_play};
pub use store::{load_book, save_book};
pub use streak::{record_in_store, show_from_store};
pub use sweep::sweep_store;
