//! Waffle grid representation
//!
//! A grid is a square of cells where every cell at an (odd, odd) index pair is a blank
//! and every other cell holds a letter. Coordinates in this module are 0-based.

use super::error::GridError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Text marker used for blank cells
pub const BLANK_MARKER: char = '*';

/// A single cell of a Waffle grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Letter(u8),
    Blank,
}

impl Cell {
    /// Get the letter stored in this cell, if any
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<u8> {
        match self {
            Self::Letter(ch) => Some(ch),
            Self::Blank => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Text form of the cell, `*` for blanks
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Letter(ch) => ch as char,
            Self::Blank => BLANK_MARKER,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square Waffle grid stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Check whether a 0-based position is one of the blank holes of the waffle
    #[inline]
    #[must_use]
    pub const fn is_blank_position(row: usize, col: usize) -> bool {
        row % 2 == 1 && col % 2 == 1
    }

    /// Build a grid from row-major cells
    ///
    /// # Panics
    /// Panics if `cells.len() != size * size`
    #[must_use]
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), size * size, "grid must be square");
        Self { size, cells }
    }

    /// Parse a grid from text rows, using `*` for blank cells
    ///
    /// Letters are stored as given; whether they are uppercase and sit in the right
    /// places is checked later against a puzzle.
    ///
    /// # Errors
    /// Returns `GridError::Empty` for no rows, `GridError::RaggedRow` if the rows do not
    /// form a square and `GridError::NotAscii` for non-ASCII text.
    ///
    /// # Examples
    /// ```
    /// use waffle_engine::core::Grid;
    ///
    /// let grid = Grid::from_rows(&["CHORE", "O*W*N", "MINUS", "E*E*U", "THREE"]).unwrap();
    /// assert_eq!(grid.size(), 5);
    /// assert_eq!(grid.row_letters(2), b"MINUS");
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != size {
                return Err(GridError::RaggedRow {
                    row: r + 1,
                    found,
                    expected: size,
                });
            }
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    BLANK_MARKER => Cell::Blank,
                    ch if ch.is_ascii() => Cell::Letter(ch as u8),
                    _ => return Err(GridError::NotAscii { row: r + 1, col: c + 1 }),
                };
                cells.push(cell);
            }
        }

        Ok(Self { size, cells })
    }

    /// Side length of the grid
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Get the cell at a 0-based position
    ///
    /// # Panics
    /// Panics if the position is outside the grid
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Exchange the contents of two cells
    ///
    /// # Panics
    /// Panics if either position is outside the grid
    #[inline]
    pub fn swap_cells(&mut self, a: (usize, usize), b: (usize, usize)) {
        let ia = self.index(a.0, a.1);
        let ib = self.index(b.0, b.1);
        self.cells.swap(ia, ib);
    }

    /// Check whether a 0-based position lies on either diagonal
    #[inline]
    #[must_use]
    pub const fn is_diagonal(&self, row: usize, col: usize) -> bool {
        row == col || row + col == self.size - 1
    }

    /// The cells of a row as bytes, blanks as `*`
    #[must_use]
    pub fn row_letters(&self, row: usize) -> Vec<u8> {
        (0..self.size)
            .map(|col| self.get(row, col).to_char() as u8)
            .collect()
    }

    /// The cells of a column as bytes, blanks as `*`
    #[must_use]
    pub fn column_letters(&self, col: usize) -> Vec<u8> {
        (0..self.size)
            .map(|row| self.get(row, col).to_char() as u8)
            .collect()
    }

    /// Count the occurrences of every letter in the grid
    ///
    /// Blank cells are not counted.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for ch in self.cells.iter().filter_map(|cell| cell.letter()) {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Iterate over all cells with their 0-based positions
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| ((i / self.size, i % self.size), cell))
    }

    /// Text rows of the grid, blanks as `*`
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|cell| cell.to_char()).collect())
            .collect()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "position ({row}, {col}) outside {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rows().join("\n"))
    }
}
