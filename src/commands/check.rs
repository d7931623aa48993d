//! Word set checking command
//!
//! Validates a set of crossing words and builds the solved grid from them.

use crate::catalog::CatalogError;
use crate::catalog::loader::parse_line;
use crate::core::Puzzle;

/// Result of checking a word set
pub struct CheckResult {
    pub input: String,
    pub outcome: Result<Puzzle, CatalogError>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Check whether `words` (horizontal words, `/`, vertical words) form a puzzle
///
/// Words are uppercased first, so `chore minus three / comet owner ensue` is accepted.
/// A separator glued to a word (`THREE/ COMET`) is fine as well.
#[must_use]
pub fn check_words<S: AsRef<str>>(words: &[S]) -> CheckResult {
    let input = words
        .iter()
        .map(|w| w.as_ref().trim().to_uppercase())
        .collect::<Vec<_>>()
        .join(" ");

    let outcome = if input.contains('|') {
        Err(CatalogError::Malformed(input.clone()))
    } else {
        parse_line(&input).map(|entry| entry.puzzle)
    };

    CheckResult { input, outcome }
}
