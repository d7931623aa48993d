//! Waffle Engine
//!
//! The logic of a Waffle word puzzle: building the grid from crossing words, shuffling
//! it into a starting position, and playing a match with per-word letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use waffle_engine::core::{Grid, LetterStatus, Puzzle, WaffleMatch};
//!
//! let puzzle = Puzzle::new(5, &["CHORE", "MINUS", "THREE"], &["COMET", "OWNER", "ENSUE"]).unwrap();
//! let start = Grid::from_rows(&["CONIE", "W*E*R", "MUNRU", "H*O*E", "THESE"]).unwrap();
//!
//! let mut game = WaffleMatch::new(puzzle, start).unwrap();
//! assert_eq!(game.clue(1, 5), LetterStatus::CorrectPosition);
//!
//! game.swap(1, 2, 1, 3);
//! assert_eq!(game.remaining_swaps(), 14);
//! ```

// Core domain types
pub mod core;

// Built-in and file-based puzzles
pub mod catalog;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup for the binary
pub mod logging;
