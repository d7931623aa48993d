//! Shuffle command
//!
//! Produces a fresh starting grid for a puzzle.

use super::audit::displaced_letters;
use crate::core::{Grid, Puzzle, shuffled_grid};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A generated starting grid
pub struct ShuffleResult {
    pub puzzle: String,
    pub grid: Grid,
    pub displaced: usize,
    pub seed: Option<u64>,
}

/// Shuffle `puzzle`, reproducibly when a seed is given
#[must_use]
pub fn shuffle_puzzle(puzzle: &Puzzle, seed: Option<u64>) -> ShuffleResult {
    let grid = match seed {
        Some(seed) => shuffled_grid(puzzle, &mut StdRng::seed_from_u64(seed)),
        None => puzzle.shuffled_grid(),
    };

    ShuffleResult {
        puzzle: puzzle.to_string(),
        displaced: displaced_letters(puzzle, &grid),
        grid,
        seed,
    }
}
