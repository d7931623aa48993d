//! Error types for puzzle construction and grid validation

use thiserror::Error;

/// Why a set of words cannot form a Waffle puzzle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("Puzzle size must be 5 or 7, got {0}")]
    InvalidSize(usize),

    #[error("Expected {expected} horizontal and {expected} vertical words, got {horizontal} and {vertical}")]
    WrongWordCount {
        expected: usize,
        horizontal: usize,
        vertical: usize,
    },

    #[error("Word \"{word}\" must be exactly {size} uppercase letters")]
    InvalidWord { word: String, size: usize },

    #[error("Words do not overlap at row {row}, column {col}")]
    NotOverlapping { row: usize, col: usize },
}

/// Why a grid is not a valid starting position for a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid has no rows")]
    Empty,

    #[error("Grid must be {expected}x{expected}")]
    WrongDimension { expected: usize },

    #[error("Grid row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Blank cells do not match the puzzle at row {row}, column {col}")]
    BlankMismatch { row: usize, col: usize },

    #[error("Cell at row {row}, column {col} is not an uppercase letter")]
    NotUppercase { row: usize, col: usize },

    #[error("Cell at row {row}, column {col} is not an ASCII character")]
    NotAscii { row: usize, col: usize },

    #[error("Letter {letter} appears {found} times, expected {expected}")]
    LetterCountMismatch {
        letter: char,
        found: usize,
        expected: usize,
    },
}
