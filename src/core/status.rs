//! Letter feedback for a Waffle grid
//!
//! Feedback is computed per word: a misplaced letter is only reported as present when
//! the word it sits in still has an unmatched occurrence of that letter.
//! - Green: letter in correct position
//! - Yellow: letter belongs to the word but elsewhere
//! - Gray: letter does not belong to the word

/// Feedback for a single letter cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// The cell holds its solved letter
    CorrectPosition,
    /// The letter belongs to a word crossing this cell, at another position
    WrongPosition,
    /// The letter does not belong to any word crossing this cell
    Absent,
}

impl LetterStatus {
    /// All statuses, best first
    pub const ALL: [Self; 3] = [Self::CorrectPosition, Self::WrongPosition, Self::Absent];

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::CorrectPosition => '🟩',
            Self::WrongPosition => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Status of the letter at `index` of a live word compared to its solved word
///
/// This implements the duplicate-letter rule used across Wordle-style games, scoped
/// to a single word of the grid.
///
/// # Algorithm
/// 1. A letter already matching the solved word is green
/// 2. Occurrences of the letter that are already green use up the solved word's copies
/// 3. The remaining copies are handed out to the misplaced occurrences from first to
///    last; the ones left over are gray
///
/// # Panics
/// Panics if the words differ in length or `index` is out of range
///
/// # Examples
/// ```
/// use waffle_engine::core::{LetterStatus, word_status};
///
/// // Only one E is left for the two misplaced ones, the first gets it
/// assert_eq!(word_status(b"THREE", b"EHETE", 0), LetterStatus::WrongPosition);
/// assert_eq!(word_status(b"THREE", b"EHETE", 2), LetterStatus::Absent);
/// ```
#[must_use]
pub fn word_status(solved: &[u8], live: &[u8], index: usize) -> LetterStatus {
    assert_eq!(solved.len(), live.len(), "words must have the same length");

    let letter = live[index];
    if solved[index] == letter {
        return LetterStatus::CorrectPosition;
    }

    let solved_count = solved.iter().filter(|&&ch| ch == letter).count();
    if solved_count == 0 {
        return LetterStatus::Absent;
    }

    let already_correct = solved
        .iter()
        .zip(live)
        .filter(|&(&s, &l)| l == letter && s == letter)
        .count();
    let remaining = solved_count - already_correct;

    // Misplaced occurrences of the letter before this one
    let rank = solved[..index]
        .iter()
        .zip(&live[..index])
        .filter(|&(&s, &l)| l == letter && s != letter)
        .count();

    if rank < remaining {
        LetterStatus::WrongPosition
    } else {
        LetterStatus::Absent
    }
}

/// Status of every position of a live word
#[must_use]
pub fn word_statuses(solved: &[u8], live: &[u8]) -> Vec<LetterStatus> {
    (0..live.len())
        .map(|index| word_status(solved, live, index))
        .collect()
}
