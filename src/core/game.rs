//! A single Waffle match
//!
//! The match owns the live grid the player rearranges, a snapshot of the starting grid
//! for restarts, and the remaining swap budget. Positions are 1-based `(row, col)`.
//!
//! `swap` and `clue` follow a contract-by-precondition discipline: callers check
//! `swappable_position` / `valid_position` first. Debug builds assert the contract and
//! any out-of-range position panics; no error value is returned.

use super::error::GridError;
use super::grid::Grid;
use super::puzzle::Puzzle;
use super::status::{LetterStatus, word_status};

/// Live state of one Waffle match
#[derive(Debug, Clone)]
pub struct WaffleMatch {
    puzzle: Puzzle,
    grid: Grid,
    initial: Grid,
    remaining_swaps: usize,
}

impl WaffleMatch {
    /// Check that `grid` is a rearrangement of the puzzle's solved grid
    ///
    /// # Errors
    /// Returns the first `GridError` found: wrong dimension, blanks in the wrong
    /// places, non-uppercase letters, or letters appearing a different number of times
    /// than in the solution.
    pub fn check_grid(puzzle: &Puzzle, grid: &Grid) -> Result<(), GridError> {
        let solved = puzzle.solution();
        if grid.size() != solved.size() {
            return Err(GridError::WrongDimension {
                expected: solved.size(),
            });
        }

        for ((r, c), cell) in grid.cells() {
            if cell.is_blank() != solved.get(r, c).is_blank() {
                return Err(GridError::BlankMismatch {
                    row: r + 1,
                    col: c + 1,
                });
            }
            if let Some(ch) = cell.letter()
                && !ch.is_ascii_uppercase()
            {
                return Err(GridError::NotUppercase {
                    row: r + 1,
                    col: c + 1,
                });
            }
        }

        let expected = solved.letter_counts();
        let found = grid.letter_counts();
        let mut letters: Vec<u8> = expected.keys().chain(found.keys()).copied().collect();
        letters.sort_unstable();
        letters.dedup();

        for letter in letters {
            let want = expected.get(&letter).copied().unwrap_or(0);
            let have = found.get(&letter).copied().unwrap_or(0);
            if want != have {
                return Err(GridError::LetterCountMismatch {
                    letter: letter as char,
                    found: have,
                    expected: want,
                });
            }
        }

        Ok(())
    }

    /// Check whether `grid` is a valid starting grid for `puzzle`
    #[must_use]
    pub fn valid_grid(puzzle: &Puzzle, grid: &Grid) -> bool {
        Self::check_grid(puzzle, grid).is_ok()
    }

    /// Start a match on `puzzle` from `grid`
    ///
    /// # Errors
    /// Returns `GridError` if `grid` fails `check_grid`.
    pub fn new(puzzle: Puzzle, grid: Grid) -> Result<Self, GridError> {
        Self::check_grid(&puzzle, &grid)?;
        let remaining_swaps = puzzle.max_swaps();
        Ok(Self {
            puzzle,
            initial: grid.clone(),
            grid,
            remaining_swaps,
        })
    }

    /// Start a match from a freshly shuffled grid
    #[must_use]
    pub fn shuffled(puzzle: Puzzle) -> Self {
        let grid = puzzle.shuffled_grid();
        let remaining_swaps = puzzle.max_swaps();
        Self {
            puzzle,
            initial: grid.clone(),
            grid,
            remaining_swaps,
        }
    }

    /// Check whether a 1-based position holds a letter
    #[must_use]
    pub fn valid_position(&self, row: usize, col: usize) -> bool {
        let range = 1..=self.grid.size();
        range.contains(&row) && range.contains(&col) && !(row % 2 == 0 && col % 2 == 0)
    }

    /// Check whether a 1-based position may be picked for a swap
    ///
    /// Letters already in their solved position are locked.
    #[must_use]
    pub fn swappable_position(&self, row: usize, col: usize) -> bool {
        self.valid_position(row, col) && !self.is_correct(row - 1, col - 1)
    }

    /// Exchange two letters
    ///
    /// The swap is only charged to the budget when the two letters differ.
    ///
    /// # Panics
    /// Both positions must be swappable; debug builds assert this and any position
    /// outside the grid panics.
    pub fn swap(&mut self, row1: usize, col1: usize, row2: usize, col2: usize) {
        debug_assert!(
            self.swappable_position(row1, col1) && self.swappable_position(row2, col2),
            "swap ({row1}, {col1}) <-> ({row2}, {col2}) on locked or invalid position"
        );

        self.grid
            .swap_cells((row1 - 1, col1 - 1), (row2 - 1, col2 - 1));

        if self.grid.get(row1 - 1, col1 - 1) != self.grid.get(row2 - 1, col2 - 1) {
            self.remaining_swaps = self.remaining_swaps.saturating_sub(1);
        }
        log::debug!(
            "Swapped ({row1}, {col1}) <-> ({row2}, {col2}), {} swaps left",
            self.remaining_swaps
        );
    }

    /// Feedback for the letter at a 1-based position
    ///
    /// A misplaced letter is yellow if the horizontal word through an odd row, or the
    /// vertical word through an odd column, still has an unmatched copy of it.
    ///
    /// # Panics
    /// The position must be valid; debug builds assert this and any position outside
    /// the grid panics.
    #[must_use]
    pub fn clue(&self, row: usize, col: usize) -> LetterStatus {
        debug_assert!(
            self.valid_position(row, col),
            "clue on invalid position ({row}, {col})"
        );
        let (r, c) = (row - 1, col - 1);
        if self.is_correct(r, c) {
            return LetterStatus::CorrectPosition;
        }

        let solved = self.puzzle.solution();
        let in_row = r % 2 == 0
            && word_status(&solved.row_letters(r), &self.grid.row_letters(r), c)
                == LetterStatus::WrongPosition;
        let in_col = c % 2 == 0
            && word_status(&solved.column_letters(c), &self.grid.column_letters(c), r)
                == LetterStatus::WrongPosition;

        if in_row || in_col {
            LetterStatus::WrongPosition
        } else {
            LetterStatus::Absent
        }
    }

    /// Feedback for every cell, `None` on blanks
    #[must_use]
    pub fn clues(&self) -> Vec<Vec<Option<LetterStatus>>> {
        let size = self.grid.size();
        (1..=size)
            .map(|row| {
                (1..=size)
                    .map(|col| {
                        self.valid_position(row, col)
                            .then(|| self.clue(row, col))
                    })
                    .collect()
            })
            .collect()
    }

    /// Swap budget at the start of the match
    #[must_use]
    pub const fn max_swaps(&self) -> usize {
        self.puzzle.max_swaps()
    }

    #[must_use]
    pub const fn remaining_swaps(&self) -> usize {
        self.remaining_swaps
    }

    #[must_use]
    pub const fn current_grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn initial_grid(&self) -> &Grid {
        &self.initial
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Check whether every letter is in its solved position
    #[must_use]
    pub fn puzzle_found(&self) -> bool {
        &self.grid == self.puzzle.solution()
    }

    /// The match ends when the puzzle is solved or the swaps run out
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.puzzle_found() || self.remaining_swaps == 0
    }

    /// Go back to the starting grid with a full swap budget
    pub fn restart(&mut self) {
        self.grid.clone_from(&self.initial);
        self.remaining_swaps = self.max_swaps();
        log::debug!("Match restarted with {} swaps", self.remaining_swaps);
    }

    fn is_correct(&self, r: usize, c: usize) -> bool {
        self.grid.get(r, c) == self.puzzle.solution().get(r, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, CorrectPosition, WrongPosition};

    const H_WORDS: [&str; 3] = ["CHORE", "MINUS", "THREE"];
    const V_WORDS: [&str; 3] = ["COMET", "OWNER", "ENSUE"];
    const INITIAL: [&str; 5] = ["CONIE", "W*E*R", "MUNRU", "H*O*E", "THESE"];

    fn puzzle() -> Puzzle {
        Puzzle::new(5, &H_WORDS, &V_WORDS).unwrap()
    }

    fn new_match() -> WaffleMatch {
        WaffleMatch::new(puzzle(), Grid::from_rows(&INITIAL).unwrap()).unwrap()
    }

    #[test]
    fn valid_grid_accepts_solution_and_initial() {
        let puzzle = puzzle();
        assert!(WaffleMatch::valid_grid(&puzzle, puzzle.solution()));
        assert!(WaffleMatch::valid_grid(
            &puzzle,
            &Grid::from_rows(&INITIAL).unwrap()
        ));
    }

    #[test]
    fn valid_grid_rejects_letter_counts() {
        // A W replaces an E
        let grid = Grid::from_rows(&["CONIE", "W*E*R", "MUNRU", "H*O*E", "THWSE"]).unwrap();
        assert_eq!(
            WaffleMatch::check_grid(&puzzle(), &grid),
            Err(GridError::LetterCountMismatch {
                letter: 'E',
                found: 4,
                expected: 5
            })
        );
    }

    #[test]
    fn valid_grid_rejects_lowercase() {
        let grid = Grid::from_rows(&["CONIE", "o*E*R", "MUNRU", "H*O*E", "THESE"]).unwrap();
        assert_eq!(
            WaffleMatch::check_grid(&puzzle(), &grid),
            Err(GridError::NotUppercase { row: 2, col: 1 })
        );
    }

    #[test]
    fn valid_grid_rejects_blank_mismatch() {
        let grid = Grid::from_rows(&["CONIE", "WRE*R", "MUNRU", "H*O*E", "THESE"]).unwrap();
        assert_eq!(
            WaffleMatch::check_grid(&puzzle(), &grid),
            Err(GridError::BlankMismatch { row: 2, col: 2 })
        );
        let grid = Grid::from_rows(&["CONI*", "W*E*R", "MUNRU", "H*O*E", "THESE"]).unwrap();
        assert_eq!(
            WaffleMatch::check_grid(&puzzle(), &grid),
            Err(GridError::BlankMismatch { row: 1, col: 5 })
        );
    }

    #[test]
    fn valid_grid_rejects_dimension() {
        let grid = Grid::from_rows(&["ABC", "D*E", "FGH"]).unwrap();
        assert_eq!(
            WaffleMatch::check_grid(&puzzle(), &grid),
            Err(GridError::WrongDimension { expected: 5 })
        );
    }

    #[test]
    fn new_rejects_invalid_grid() {
        let grid = Grid::from_rows(&["CONIE", "W*E*R", "MUNRU", "H*O*E", "THWSE"]).unwrap();
        assert!(WaffleMatch::new(puzzle(), grid).is_err());
    }

    #[test]
    fn shuffled_match_is_valid() {
        let game = WaffleMatch::shuffled(puzzle());
        assert!(WaffleMatch::valid_grid(game.puzzle(), game.current_grid()));
        assert_eq!(game.remaining_swaps(), 15);
    }

    #[test]
    fn positions() {
        let game = new_match();
        assert!(game.valid_position(1, 4));
        assert!(game.valid_position(5, 5));
        assert!(!game.valid_position(2, 4));
        assert!(!game.valid_position(0, 2));
        assert!(!game.valid_position(6, 1));

        assert!(game.swappable_position(1, 2));
        assert!(!game.swappable_position(1, 1)); // C already placed
        assert!(!game.swappable_position(2, 2)); // blank
    }

    #[test]
    fn swap_budget() {
        let mut game = new_match();
        assert_eq!(game.max_swaps(), 15);
        assert_eq!(game.remaining_swaps(), 15);

        game.swap(1, 3, 1, 4);
        assert_eq!(game.current_grid().row_letters(0), b"COINE");
        assert_eq!(game.remaining_swaps(), 14);
    }

    #[test]
    fn swap_identical_letters_is_free() {
        let mut game = new_match();
        // U's at (3, 2) and (3, 5), both misplaced
        game.swap(3, 2, 3, 5);
        assert_eq!(game.remaining_swaps(), 15);
        assert_eq!(game.current_grid(), game.initial_grid());
    }

    #[test]
    fn clue_greens() {
        let game = new_match();
        assert_eq!(game.clue(1, 1), CorrectPosition);
        assert_eq!(game.clue(1, 5), CorrectPosition);
        assert_eq!(game.clue(5, 5), CorrectPosition);
    }

    #[test]
    fn clue_duplicates_per_word() {
        let mut game = new_match();
        game.swap(1, 3, 1, 4);

        // E's of the middle column and bottom row
        assert_eq!(game.clue(2, 3), WrongPosition);
        assert_eq!(game.clue(5, 3), WrongPosition);
        assert_eq!(game.clue(4, 5), Absent);

        // U's of the middle row: only the first is credited by MINUS,
        // the last one is yellow through ENSUE
        assert_eq!(game.clue(3, 2), WrongPosition);
        assert_eq!(game.clue(3, 5), WrongPosition);

        // O's of the top row and middle column
        assert_eq!(game.clue(1, 2), WrongPosition);
        assert_eq!(game.clue(4, 3), WrongPosition);

        game.swap(1, 2, 1, 3);
        assert_eq!(game.clue(1, 3), CorrectPosition);
        assert_eq!(game.clue(4, 3), Absent);
    }

    #[test]
    fn clue_letter_absent_from_both_words() {
        let game = new_match();
        // R does not belong to MINUS, and column 4 holds no word
        assert_eq!(game.clue(3, 4), Absent);
        // H at (4, 1) only crosses COMET
        assert_eq!(game.clue(4, 1), Absent);
    }

    #[test]
    fn clues_cover_letter_cells() {
        let game = new_match();
        let clues = game.clues();
        assert_eq!(clues.len(), 5);
        assert_eq!(clues[1][1], None);
        assert_eq!(clues[0][0], Some(CorrectPosition));
        let letters = clues.iter().flatten().filter(|s| s.is_some()).count();
        assert_eq!(letters, 21);
    }

    #[test]
    fn puzzle_found_and_over() {
        let puzzle = puzzle();
        let solved = WaffleMatch::new(puzzle.clone(), puzzle.build_grid()).unwrap();
        assert!(solved.puzzle_found());
        assert!(solved.is_over());
        assert_eq!(solved.remaining_swaps(), 15);

        let game = new_match();
        assert!(!game.puzzle_found());
        assert!(!game.is_over());
    }

    #[test]
    fn over_when_swaps_run_out() {
        let mut game = new_match();
        // O and I are both misplaced and stay misplaced after swapping
        for _ in 0..14 {
            game.swap(1, 2, 1, 4);
            assert!(!game.is_over());
        }
        game.swap(1, 2, 1, 4);
        assert_eq!(game.remaining_swaps(), 0);
        assert!(!game.puzzle_found());
        assert!(game.is_over());
    }

    #[test]
    fn restart_restores_start() {
        let mut game = new_match();
        game.swap(1, 2, 1, 4);
        game.swap(3, 2, 3, 4);
        assert_ne!(game.current_grid(), game.initial_grid());

        game.restart();
        assert_eq!(
            game.current_grid(),
            &Grid::from_rows(&INITIAL).unwrap()
        );
        assert_eq!(game.remaining_swaps(), game.max_swaps());
    }
}
