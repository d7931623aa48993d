//! Puzzle catalog loading utilities
//!
//! A puzzle line lists the horizontal words, a `/`, the vertical words and, optionally,
//! a `|` followed by the rows of a starting grid:
//!
//! ```text
//! CHORE MINUS THREE / COMET OWNER ENSUE | CONIE W*E*R MUNRU H*O*E THESE
//! ```

use crate::core::{Grid, GridError, Puzzle, PuzzleError, WaffleMatch};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// A puzzle together with the starting grid it was published with, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleEntry {
    pub puzzle: Puzzle,
    pub start: Option<Grid>,
}

impl PuzzleEntry {
    /// Start a match from the published grid, or a fresh shuffle when there is none
    ///
    /// # Errors
    /// Returns `GridError` if the published grid is not a valid start for the puzzle.
    pub fn new_match(&self) -> Result<WaffleMatch, GridError> {
        match &self.start {
            Some(grid) => WaffleMatch::new(self.puzzle.clone(), grid.clone()),
            None => Ok(WaffleMatch::shuffled(self.puzzle.clone())),
        }
    }
}

/// Error reading a puzzle line or file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("expected \"HORIZONTAL WORDS / VERTICAL WORDS\", got \"{0}\"")]
    Malformed(String),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<CatalogError>,
    },

    #[error("cannot read puzzle file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a single puzzle line
///
/// The puzzle size is taken from the length of the first word.
///
/// # Errors
/// Returns `CatalogError` if the line is not in puzzle format, the words do not form a
/// puzzle, or the starting grid does not fit the puzzle.
///
/// # Examples
/// ```
/// use waffle_engine::catalog::loader::parse_line;
///
/// let entry = parse_line("CHORE MINUS THREE / COMET OWNER ENSUE").unwrap();
/// assert_eq!(entry.puzzle.size(), 5);
/// assert!(entry.start.is_none());
/// ```
pub fn parse_line(line: &str) -> Result<PuzzleEntry, CatalogError> {
    let (words, start) = match line.split_once('|') {
        Some((words, rows)) => (words, Some(rows)),
        None => (line, None),
    };

    let Some((across, down)) = words.split_once('/') else {
        return Err(CatalogError::Malformed(line.trim().to_string()));
    };
    let h_words: Vec<&str> = across.split_whitespace().collect();
    let v_words: Vec<&str> = down.split_whitespace().collect();
    let Some(size) = h_words.first().map(|w| w.len()) else {
        return Err(CatalogError::Malformed(line.trim().to_string()));
    };

    let puzzle = Puzzle::new(size, &h_words, &v_words)?;

    let start = match start {
        Some(rows) => {
            let rows: Vec<&str> = rows.split_whitespace().collect();
            let grid = Grid::from_rows(&rows)?;
            WaffleMatch::check_grid(&puzzle, &grid)?;
            Some(grid)
        }
        None => None,
    };

    Ok(PuzzleEntry { puzzle, start })
}

/// Parse every puzzle line of a text, skipping blank lines and `#` comments
///
/// # Errors
/// Returns the first bad line, tagged with its 1-based line number.
pub fn parse_puzzles(text: &str) -> Result<Vec<PuzzleEntry>, CatalogError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            parse_line(line).map_err(|e| CatalogError::AtLine {
                line: line_no,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Load puzzles from a file
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or any puzzle line is invalid.
///
/// # Examples
/// ```no_run
/// use waffle_engine::catalog::loader::load_from_file;
///
/// let puzzles = load_from_file("data/puzzles.txt").unwrap();
/// println!("Loaded {} puzzles", puzzles.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<PuzzleEntry>, CatalogError> {
    let content = fs::read_to_string(path)?;
    let entries = parse_puzzles(&content)?;
    log::debug!("Loaded {} puzzles from file", entries.len());
    Ok(entries)
}

/// Convert embedded puzzle lines to entries
///
/// Invalid lines are skipped with a warning.
#[must_use]
pub fn puzzles_from_slice(slice: &[&str]) -> Vec<PuzzleEntry> {
    slice
        .iter()
        .filter_map(|&line| match parse_line(line) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping puzzle \"{line}\": {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHORE: &str = "CHORE MINUS THREE / COMET OWNER ENSUE";

    #[test]
    fn parse_line_words_only() {
        let entry = parse_line(CHORE).unwrap();
        assert_eq!(entry.puzzle.horizontal_words(), ["CHORE", "MINUS", "THREE"]);
        assert_eq!(entry.puzzle.vertical_words(), ["COMET", "OWNER", "ENSUE"]);
        assert_eq!(entry.start, None);
    }

    #[test]
    fn parse_line_with_start_grid() {
        let entry = parse_line(&format!("{CHORE} | CONIE W*E*R MUNRU H*O*E THESE")).unwrap();
        let start = entry.start.as_ref().unwrap();
        assert_eq!(start.row_letters(0), b"CONIE");

        let game = entry.new_match().unwrap();
        assert_eq!(game.current_grid(), start);
    }

    #[test]
    fn parse_line_rejects_missing_separator() {
        assert!(matches!(
            parse_line("CHORE MINUS THREE COMET OWNER ENSUE"),
            Err(CatalogError::Malformed(_))
        ));
        assert!(matches!(parse_line(" / "), Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn parse_line_rejects_bad_words() {
        assert!(matches!(
            parse_line("CHORE MINUS THREE / COAST OWNER ENSUE"),
            Err(CatalogError::Puzzle(PuzzleError::NotOverlapping { .. }))
        ));
    }

    #[test]
    fn parse_line_rejects_bad_start_grid() {
        assert!(matches!(
            parse_line(&format!("{CHORE} | CONIE W*E*R MUNRU H*O*E THWSE")),
            Err(CatalogError::Grid(GridError::LetterCountMismatch { .. }))
        ));
    }

    #[test]
    fn parse_puzzles_skips_comments_and_reports_lines() {
        let text = format!("# catalog\n\n{CHORE}\n");
        assert_eq!(parse_puzzles(&text).unwrap().len(), 1);

        let text = format!("{CHORE}\n# comment\nCHORE / COMET\n");
        let err = parse_puzzles(&text).unwrap_err();
        assert!(matches!(err, CatalogError::AtLine { line: 3, .. }));
        assert!(err.to_string().starts_with("line 3: "));
    }

    #[test]
    fn puzzles_from_slice_skips_invalid() {
        let entries = puzzles_from_slice(&[CHORE, "not a puzzle", "CHORE / COMET"]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].puzzle.horizontal_words()[0], "CHORE");
    }

    #[test]
    fn shuffled_entry_gets_valid_match() {
        let entry = parse_line(CHORE).unwrap();
        let game = entry.new_match().unwrap();
        assert!(WaffleMatch::valid_grid(&entry.puzzle, game.current_grid()));
    }

    #[test]
    fn new_match_reports_bad_start_grid() {
        let mut entry = parse_line(CHORE).unwrap();
        // A W where an E belongs
        let grid = Grid::from_rows(&["CONIE", "W*E*R", "MUNRU", "H*O*E", "THWSE"]).unwrap();
        entry.start = Some(grid);

        assert_eq!(
            entry.new_match().unwrap_err(),
            GridError::LetterCountMismatch {
                letter: 'E',
                found: 4,
                expected: 5
            }
        );
    }
}
