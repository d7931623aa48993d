//! Starting grid generation
//!
//! Turns a solved grid into a scrambled starting position in two phases:
//! 1. Adjacent: in every word, one letter is swapped with a neighbour along the word
//! 2. Cross: in every horizontal word, letters are swapped with their mirror cell in
//!    the vertical word of the same index
//!
//! Letters on either diagonal are never moved, so they stay as fixed hints.

use super::grid::Grid;
use super::puzzle::Puzzle;
use rand::Rng;

/// A source of uniformly distributed indices
///
/// Every `rand::Rng` is an `IndexSource`; tests can plug in scripted sources.
pub trait IndexSource {
    /// Return an index in `0..bound`
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Row,
    Column,
}

impl Axis {
    /// Grid position of letter `k` of the word on line `line`
    const fn cell(self, line: usize, k: usize) -> (usize, usize) {
        match self {
            Self::Row => (line, k),
            Self::Column => (k, line),
        }
    }
}

/// Build a shuffled starting grid for `puzzle`
///
/// The result has the same letters and blanks as the solved grid, with every diagonal
/// letter left in place.
///
/// # Examples
/// ```
/// use waffle_engine::core::{Puzzle, shuffled_grid};
///
/// let puzzle = Puzzle::new(5, &["CHORE", "MINUS", "THREE"], &["COMET", "OWNER", "ENSUE"]).unwrap();
/// let grid = shuffled_grid(&puzzle, &mut rand::rng());
/// assert_eq!(grid.get(2, 2), puzzle.solution().get(2, 2));
/// ```
pub fn shuffled_grid<S: IndexSource + ?Sized>(puzzle: &Puzzle, source: &mut S) -> Grid {
    shuffle_with_count(puzzle, source).0
}

/// Both shuffle phases, returning the grid and the number of swaps made
fn shuffle_with_count<S: IndexSource + ?Sized>(
    puzzle: &Puzzle,
    source: &mut S,
) -> (Grid, usize) {
    let mut grid = puzzle.build_grid();
    let lines: Vec<usize> = (0..puzzle.size()).step_by(2).collect();

    let mut swaps = 0;
    for axis in [Axis::Row, Axis::Column] {
        for &line in &lines {
            swap_with_neighbour(&mut grid, axis, line, source);
            swaps += 1;
        }
    }
    log::debug!("Adjacent phase made {swaps} swaps");

    let per_row = (puzzle.size() - 3) / 2;
    for &line in &lines {
        for _ in 0..per_row {
            let k = draw_position(&grid, line, source, |_| true);
            grid.swap_cells((line, k), (k, line));
            swaps += 1;
        }
    }
    log::debug!(
        "Shuffle made {swaps} swaps (budget {})",
        puzzle.shuffle_swaps()
    );

    (grid, swaps)
}

/// Swap one letter of a word with the letter next to it along the word
///
/// Neighbours wrap around, so the two ends of a word are adjacent.
fn swap_with_neighbour<S: IndexSource + ?Sized>(
    grid: &mut Grid,
    axis: Axis,
    line: usize,
    source: &mut S,
) {
    let size = grid.size();
    let neighbours = |k: usize| [(k + size - 1) % size, (k + 1) % size];

    let k = draw_position(grid, line, source, |k| {
        neighbours(k).iter().any(|&n| !grid.is_diagonal(line, n))
    });

    let options = neighbours(k);
    let direction = source.next_index(options.len());
    let mut target = options[direction];
    if grid.is_diagonal(line, target) {
        target = options[1 - direction];
    }

    grid.swap_cells(axis.cell(line, k), axis.cell(line, target));
}

/// Draw a non-diagonal position along a word line, retrying until `accept` holds
///
/// The diagonal test is symmetric, so the same check covers rows and columns.
fn draw_position<S, F>(grid: &Grid, line: usize, source: &mut S, accept: F) -> usize
where
    S: IndexSource + ?Sized,
    F: Fn(usize) -> bool,
{
    loop {
        let k = source.next_index(grid.size());
        if !grid.is_diagonal(line, k) && accept(k) {
            return k;
        }
    }
}

impl Puzzle {
    /// A shuffled starting grid drawn from the thread-local RNG
    #[must_use]
    pub fn shuffled_grid(&self) -> Grid {
        shuffled_grid(self, &mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Yields 0, 1, 2, ... reduced modulo the requested bound
    struct CountingSource(usize);

    impl IndexSource for CountingSource {
        fn next_index(&mut self, bound: usize) -> usize {
            let value = self.0 % bound;
            self.0 += 1;
            value
        }
    }

    /// Replays fixed indices, failing the test if one is out of bounds
    struct ScriptedSource {
        values: Vec<usize>,
        next: usize,
    }

    impl ScriptedSource {
        fn new(values: &[usize]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl IndexSource for ScriptedSource {
        fn next_index(&mut self, bound: usize) -> usize {
            let value = self.values[self.next];
            assert!(value < bound, "scripted {value} not below {bound}");
            self.next += 1;
            value
        }
    }

    fn puzzle_5() -> Puzzle {
        Puzzle::new(5, &["CHORE", "MINUS", "THREE"], &["COMET", "OWNER", "ENSUE"]).unwrap()
    }

    fn puzzle_7() -> Puzzle {
        Puzzle::new(
            7,
            &["ABCDEFG", "HIJKLMN", "OPQRSTU", "VWXYZAB"],
            &["AKHLOMV", "CNJPQRX", "ESLTSUZ", "GANBUCB"],
        )
        .unwrap()
    }

    fn assert_shuffle_invariants(puzzle: &Puzzle, grid: &Grid) {
        let solved = puzzle.solution();
        assert_eq!(grid.size(), solved.size());
        assert_eq!(grid.letter_counts(), solved.letter_counts());

        for ((r, c), cell) in grid.cells() {
            assert_eq!(cell.is_blank(), Grid::is_blank_position(r, c), "({r}, {c})");
            if grid.is_diagonal(r, c) {
                assert_eq!(cell, solved.get(r, c), "diagonal ({r}, {c}) moved");
            }
        }
    }

    #[test]
    fn shuffle_scripted_source() {
        let puzzle = puzzle_5();
        let grid = shuffled_grid(&puzzle, &mut CountingSource(0));

        assert_eq!(
            grid.to_rows(),
            vec!["COWRE", "O*H*R", "EINEU", "M*S*U", "TNHEE"]
        );
        assert_shuffle_invariants(&puzzle, &grid);
    }

    #[test]
    fn shuffle_preserves_invariants_size_five() {
        let puzzle = puzzle_5();
        for seed in 0..200 {
            let grid = shuffled_grid(&puzzle, &mut StdRng::seed_from_u64(seed));
            assert_shuffle_invariants(&puzzle, &grid);
        }
    }

    #[test]
    fn shuffle_preserves_invariants_size_seven() {
        let puzzle = puzzle_7();
        for seed in 0..200 {
            let grid = shuffled_grid(&puzzle, &mut StdRng::seed_from_u64(seed));
            assert_shuffle_invariants(&puzzle, &grid);
        }
    }

    #[test]
    fn shuffle_moves_letters() {
        // Letters in the seven puzzle are mostly distinct, so swaps show up
        let puzzle = puzzle_7();
        for seed in 0..10 {
            let grid = shuffled_grid(&puzzle, &mut StdRng::seed_from_u64(seed));
            assert_ne!(&grid, puzzle.solution(), "seed {seed}");
        }
    }

    #[test]
    fn shuffle_swap_count_size_five() {
        let puzzle = puzzle_5();
        for seed in 0..200 {
            let (grid, swaps) = shuffle_with_count(&puzzle, &mut StdRng::seed_from_u64(seed));
            // 6 adjacent swaps, then 1 cross swap on each of the 3 rows
            assert_eq!(swaps, 9, "seed {seed}");
            assert!(swaps <= puzzle.shuffle_swaps());
            assert_shuffle_invariants(&puzzle, &grid);
        }
    }

    #[test]
    fn shuffle_swap_count_size_seven() {
        let puzzle = puzzle_7();
        for seed in 0..200 {
            let (grid, swaps) = shuffle_with_count(&puzzle, &mut StdRng::seed_from_u64(seed));
            // 8 adjacent swaps, then 2 cross swaps on each of the 4 rows
            assert_eq!(swaps, 16, "seed {seed}");
            assert!(swaps <= puzzle.shuffle_swaps());
            assert_shuffle_invariants(&puzzle, &grid);
        }
    }

    #[test]
    fn shuffle_scripted_swap_count() {
        let (_, swaps) = shuffle_with_count(&puzzle_5(), &mut CountingSource(0));
        assert_eq!(swaps, 9);
    }

    #[test]
    fn neighbour_swap_redraws_cell_between_diagonals() {
        // On row 2 of a 7x7 grid, columns 2 and 4 are diagonal, so column 3 has no
        // movable neighbour and is drawn again
        let puzzle = puzzle_7();
        let mut grid = puzzle.build_grid();
        let mut source = ScriptedSource::new(&[3, 1, 0]);

        swap_with_neighbour(&mut grid, Axis::Row, 2, &mut source);

        assert_eq!(source.next, 3);
        let solved = puzzle.solution();
        assert_eq!(grid.get(2, 0), solved.get(2, 1));
        assert_eq!(grid.get(2, 1), solved.get(2, 0));
        assert_eq!(grid.get(2, 3), solved.get(2, 3));
    }

    #[test]
    fn neighbour_swap_takes_other_direction_at_diagonal() {
        // Row 0: column 1 sits between the diagonal column 0 and column 2
        let puzzle = puzzle_7();
        let mut grid = puzzle.build_grid();
        let mut source = ScriptedSource::new(&[1, 0]);

        swap_with_neighbour(&mut grid, Axis::Row, 0, &mut source);

        let solved = puzzle.solution();
        assert_eq!(grid.get(0, 0), solved.get(0, 0));
        assert_eq!(grid.get(0, 1), solved.get(0, 2));
        assert_eq!(grid.get(0, 2), solved.get(0, 1));
    }

    #[test]
    fn shuffle_with_thread_rng() {
        let puzzle = puzzle_5();
        let grid = puzzle.shuffled_grid();
        assert_shuffle_invariants(&puzzle, &grid);
    }

    #[test]
    fn index_source_for_rng_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for bound in 1..10 {
            for _ in 0..50 {
                assert!(rng.next_index(bound) < bound);
            }
        }
    }
}
