//! Shuffle audit - checks the starting-grid generator at scale
//!
//! Generates many shuffled grids in parallel and verifies each one is a valid
//! starting position with its diagonals untouched.

use crate::core::{Grid, Puzzle, WaffleMatch};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Statistics from auditing the shuffle of one puzzle
#[derive(Debug, Clone)]
pub struct AuditResult {
    pub puzzle: String,
    pub total_grids: usize,
    pub invalid_grids: usize,
    pub moved_diagonals: usize,
    pub unshuffled_grids: usize,
    pub average_displaced: f64,
    pub min_displaced: usize,
    pub max_displaced: usize,
    pub duration: Duration,
}

/// Findings for a single shuffled grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridAudit {
    valid: bool,
    diagonals_kept: bool,
    displaced: usize,
}

/// Number of letter cells that differ from the solution
#[must_use]
pub fn displaced_letters(puzzle: &Puzzle, grid: &Grid) -> usize {
    let solved = puzzle.solution();
    grid.cells()
        .filter(|&((r, c), cell)| !cell.is_blank() && cell != solved.get(r, c))
        .count()
}

/// Check that every diagonal cell of `grid` matches the solution
#[must_use]
pub fn diagonals_preserved(puzzle: &Puzzle, grid: &Grid) -> bool {
    let solved = puzzle.solution();
    grid.size() == solved.size()
        && grid
            .cells()
            .filter(|&((r, c), _)| grid.is_diagonal(r, c))
            .all(|((r, c), cell)| cell == solved.get(r, c))
}

fn audit_grid(puzzle: &Puzzle, grid: &Grid) -> GridAudit {
    GridAudit {
        valid: WaffleMatch::valid_grid(puzzle, grid),
        diagonals_kept: diagonals_preserved(puzzle, grid),
        displaced: displaced_letters(puzzle, grid),
    }
}

/// Shuffle `puzzle` `count` times and collect statistics
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
#[must_use]
pub fn run_audit(puzzle: &Puzzle, count: usize) -> AuditResult {
    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let audits: Vec<GridAudit> = (0..count)
        .into_par_iter()
        .map(|_| {
            let grid = puzzle.shuffled_grid();
            pb.inc(1);
            audit_grid(puzzle, &grid)
        })
        .collect();
    pb.finish_and_clear();

    let duration = start.elapsed();
    log::debug!("Audited {count} shuffles in {duration:?}");

    summarize(puzzle, &audits, duration)
}

fn summarize(puzzle: &Puzzle, audits: &[GridAudit], duration: Duration) -> AuditResult {
    let total_displaced: usize = audits.iter().map(|a| a.displaced).sum();
    let average_displaced = if audits.is_empty() {
        0.0
    } else {
        total_displaced as f64 / audits.len() as f64
    };

    AuditResult {
        puzzle: puzzle.to_string(),
        total_grids: audits.len(),
        invalid_grids: audits.iter().filter(|a| !a.valid).count(),
        moved_diagonals: audits.iter().filter(|a| !a.diagonals_kept).count(),
        unshuffled_grids: audits.iter().filter(|a| a.displaced == 0).count(),
        average_displaced,
        min_displaced: audits.iter().map(|a| a.displaced).min().unwrap_or(0),
        max_displaced: audits.iter().map(|a| a.displaced).max().unwrap_or(0),
        duration,
    }
}
