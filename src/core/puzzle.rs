//! Waffle puzzle construction
//!
//! A puzzle is a set of horizontal and vertical words that cross each other at every
//! even-indexed cell of the grid. Construction validates the words and lays them out
//! into the solved grid, which the puzzle keeps as its answer key.

use super::error::PuzzleError;
use super::grid::{Cell, Grid};
use std::fmt;

/// Extra swaps granted to the player on top of the shuffle swaps
pub const BONUS_SWAPS: usize = 5;

/// An immutable, validated Waffle puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    size: usize,
    h_words: Vec<String>,
    v_words: Vec<String>,
    solution: Grid,
}

impl Puzzle {
    /// Number of words on each axis for a given size
    #[inline]
    #[must_use]
    pub const fn words_per_axis(size: usize) -> usize {
        size.div_ceil(2)
    }

    /// Check that `size` and both word lists can form a puzzle
    ///
    /// Holds iff `size` is odd with `4 < size < 8`, both lists hold `(size + 1) / 2`
    /// words, and every word is exactly `size` uppercase ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use waffle_engine::core::Puzzle;
    ///
    /// let h = ["CHORE", "MINUS", "THREE"];
    /// assert!(Puzzle::valid_words(5, &h, &["COMET", "OWNER", "ENSUE"]));
    /// assert!(!Puzzle::valid_words(5, &h, &["COMET", "OWNER", "ENSU"]));
    /// ```
    #[must_use]
    pub fn valid_words<S: AsRef<str>>(size: usize, h_words: &[S], v_words: &[S]) -> bool {
        Self::check_words(size, h_words, v_words).is_ok()
    }

    /// Check that every horizontal/vertical pair agrees on the letter they share
    ///
    /// Horizontal word `j` and vertical word `i` cross at row `2j`, column `2i`, so the
    /// letter of `h_words[j]` at `2i` must equal the letter of `v_words[i]` at `2j`.
    /// Word lists that fail `valid_words` never overlap.
    #[must_use]
    pub fn overlapped_words<S: AsRef<str>>(size: usize, h_words: &[S], v_words: &[S]) -> bool {
        Self::check_words(size, h_words, v_words).is_ok()
            && Self::check_overlap(size, h_words, v_words).is_ok()
    }

    /// Build a puzzle from its words
    ///
    /// # Errors
    /// Returns `PuzzleError` describing the first rule the words break.
    pub fn new<S: AsRef<str>>(
        size: usize,
        h_words: &[S],
        v_words: &[S],
    ) -> Result<Self, PuzzleError> {
        Self::check_words(size, h_words, v_words)?;
        Self::check_overlap(size, h_words, v_words)?;

        let h_words: Vec<String> = h_words.iter().map(|w| w.as_ref().to_string()).collect();
        let v_words: Vec<String> = v_words.iter().map(|w| w.as_ref().to_string()).collect();
        let solution = Self::layout(size, &h_words, &v_words);

        log::debug!("Built {size}x{size} puzzle {h_words:?} / {v_words:?}");

        Ok(Self {
            size,
            h_words,
            v_words,
            solution,
        })
    }

    fn check_words<S: AsRef<str>>(
        size: usize,
        h_words: &[S],
        v_words: &[S],
    ) -> Result<(), PuzzleError> {
        if size % 2 != 1 || size <= 4 || size >= 8 {
            return Err(PuzzleError::InvalidSize(size));
        }

        let expected = Self::words_per_axis(size);
        if h_words.len() != expected || v_words.len() != expected {
            return Err(PuzzleError::WrongWordCount {
                expected,
                horizontal: h_words.len(),
                vertical: v_words.len(),
            });
        }

        for word in h_words.iter().chain(v_words).map(AsRef::as_ref) {
            if word.len() != size || !word.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(PuzzleError::InvalidWord {
                    word: word.to_string(),
                    size,
                });
            }
        }

        Ok(())
    }

    fn check_overlap<S: AsRef<str>>(
        size: usize,
        h_words: &[S],
        v_words: &[S],
    ) -> Result<(), PuzzleError> {
        let n = Self::words_per_axis(size);
        for i in 0..n {
            for j in 0..n {
                let across = h_words[j].as_ref().as_bytes().get(2 * i);
                let down = v_words[i].as_ref().as_bytes().get(2 * j);
                if across.is_none() || across != down {
                    return Err(PuzzleError::NotOverlapping {
                        row: 2 * j + 1,
                        col: 2 * i + 1,
                    });
                }
            }
        }
        Ok(())
    }

    fn layout(size: usize, h_words: &[String], v_words: &[String]) -> Grid {
        let mut cells = Vec::with_capacity(size * size);
        for r in 0..size {
            for c in 0..size {
                let cell = if r % 2 == 0 && c % 2 == 1 {
                    Cell::Letter(h_words[r / 2].as_bytes()[c])
                } else if c % 2 == 0 {
                    Cell::Letter(v_words[c / 2].as_bytes()[r])
                } else {
                    Cell::Blank
                };
                cells.push(cell);
            }
        }
        Grid::from_cells(size, cells)
    }

    /// Length of every word, and side of the grid
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total number of words, horizontal plus vertical
    #[inline]
    #[must_use]
    pub fn nr_words(&self) -> usize {
        self.h_words.len() + self.v_words.len()
    }

    /// Number of swaps the shuffle is budgeted for: `5 * (size - 3)`
    #[inline]
    #[must_use]
    pub const fn shuffle_swaps(&self) -> usize {
        5 * (self.size - 3)
    }

    /// Swap budget of a match on this puzzle
    #[inline]
    #[must_use]
    pub const fn max_swaps(&self) -> usize {
        self.shuffle_swaps() + BONUS_SWAPS
    }

    #[must_use]
    pub fn horizontal_words(&self) -> &[String] {
        &self.h_words
    }

    #[must_use]
    pub fn vertical_words(&self) -> &[String] {
        &self.v_words
    }

    /// Letter `i` of horizontal word `j`, both 1-based
    ///
    /// # Panics
    /// Panics unless `1 <= i <= size()` and `1 <= j <= nr_words() / 2`
    #[must_use]
    pub fn letter_in_horizontal_word(&self, i: usize, j: usize) -> char {
        self.h_words[j - 1].as_bytes()[i - 1] as char
    }

    /// Letter `i` of vertical word `j`, both 1-based
    ///
    /// # Panics
    /// Panics unless `1 <= i <= size()` and `1 <= j <= nr_words() / 2`
    #[must_use]
    pub fn letter_in_vertical_word(&self, i: usize, j: usize) -> char {
        self.v_words[j - 1].as_bytes()[i - 1] as char
    }

    /// The solved grid
    #[inline]
    #[must_use]
    pub const fn solution(&self) -> &Grid {
        &self.solution
    }

    /// A fresh copy of the solved grid
    #[must_use]
    pub fn build_grid(&self) -> Grid {
        self.solution.clone()
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {}",
            self.h_words.join(" "),
            self.v_words.join(" ")
        )
    }
}
