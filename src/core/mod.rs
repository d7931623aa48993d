//! Core domain types for Waffle
//!
//! This module contains the puzzle model, the shuffle and the match engine.
//! Everything here is synchronous and free of terminal I/O.

mod error;
mod game;
mod grid;
mod puzzle;
mod shuffle;
mod status;

pub use error::{GridError, PuzzleError};
pub use game::WaffleMatch;
pub use grid::{BLANK_MARKER, Cell, Grid};
pub use puzzle::{BONUS_SWAPS, Puzzle};
pub use shuffle::{IndexSource, shuffled_grid};
pub use status::{LetterStatus, word_status, word_statuses};
