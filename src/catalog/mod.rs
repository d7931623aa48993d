//! Puzzle catalog
//!
//! Provides puzzles compiled into the binary, plus loading of custom puzzle files.

mod embedded;
pub mod loader;

pub use embedded::{PUZZLES, PUZZLES_COUNT};
pub use loader::{CatalogError, PuzzleEntry, load_from_file};

/// All built-in puzzles
#[must_use]
pub fn builtin() -> Vec<PuzzleEntry> {
    loader::puzzles_from_slice(PUZZLES)
}
