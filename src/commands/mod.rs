//! Command implementations

pub mod audit;
pub mod check;
pub mod play;
pub mod shuffle;

pub use audit::{AuditResult, diagonals_preserved, displaced_letters, run_audit};
pub use check::{CheckResult, check_words};
pub use play::{PlayCommand, PlayOutcome, parse_command, run_play, run_play_with};
pub use shuffle::{ShuffleResult, shuffle_puzzle};
