//! Display functions for command results

use super::formatters::{statuses_to_emoji, swaps_bar};
use crate::commands::{AuditResult, CheckResult, PlayOutcome, ShuffleResult};
use crate::core::{Cell, Grid, LetterStatus, WaffleMatch};
use colored::{ColoredString, Colorize};

/// Colour a grid letter by its clue
fn colored_cell(cell: Cell, status: Option<LetterStatus>) -> ColoredString {
    let text = format!(" {} ", cell.to_char());
    match (cell, status) {
        (Cell::Blank, _) | (_, None) => "   ".normal(),
        (_, Some(LetterStatus::CorrectPosition)) => text.black().on_green().bold(),
        (_, Some(LetterStatus::WrongPosition)) => text.black().on_yellow(),
        (_, Some(LetterStatus::Absent)) => text.white().on_bright_black(),
    }
}

fn column_header(size: usize) -> String {
    (1..=size).map(|c| format!(" {c} ")).collect()
}

/// Print the current grid with coloured clues and the swap budget
pub fn print_match(game: &WaffleMatch) {
    let grid = game.current_grid();
    let clues = game.clues();

    println!("\n    {}", column_header(grid.size()).bright_black());
    for (r, row) in clues.iter().enumerate() {
        let cells: String = row
            .iter()
            .enumerate()
            .map(|(c, &status)| colored_cell(grid.get(r, c), status).to_string())
            .collect();
        println!(" {} {cells}", format!("{:>2}", r + 1).bright_black());
    }

    let remaining = game.remaining_swaps();
    let bar = swaps_bar(remaining, game.max_swaps(), 20);
    let bar = if remaining * 3 <= game.max_swaps() {
        bar.red()
    } else {
        bar.green()
    };
    println!(
        "\n Swaps left: [{bar}] {}/{}\n",
        remaining.to_string().bright_yellow().bold(),
        game.max_swaps()
    );
}

/// Print a grid as plain text
pub fn print_grid(grid: &Grid) {
    for row in grid.to_rows() {
        let spaced: Vec<String> = row.chars().map(String::from).collect();
        println!("   {}", spaced.join(" "));
    }
}

/// Print the end-of-match banner
pub fn print_play_outcome(outcome: PlayOutcome, game: &WaffleMatch) {
    println!();
    match outcome {
        PlayOutcome::Won { swaps_left } => {
            println!(
                "{}",
                format!("✅ Solved with {swaps_left} swaps to spare!")
                    .green()
                    .bold()
            );
        }
        PlayOutcome::Lost => {
            println!("{}", "❌ Out of swaps! The solution was:".red().bold());
            print_grid(game.puzzle().solution());
        }
        PlayOutcome::Quit => println!("👋 Goodbye!"),
    }

    if outcome != PlayOutcome::Quit {
        println!();
        for row in game.clues() {
            println!("   {}", statuses_to_emoji(&row));
        }
    }
    println!();
}

/// Print the result of checking a word set
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Checking: {}", result.input.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        Ok(puzzle) => {
            println!(
                "\n{}",
                format!("✅ Valid {0}×{0} puzzle", puzzle.size()).green().bold()
            );
            println!(
                "   {} words, shuffled with {} swaps, solvable in {}\n",
                puzzle.nr_words(),
                puzzle.shuffle_swaps(),
                puzzle.max_swaps()
            );
            print_grid(puzzle.solution());
        }
        Err(e) => println!("\n{}", format!("❌ {e}").red().bold()),
    }
    println!();
}

/// Print a generated starting grid
pub fn print_shuffle_result(result: &ShuffleResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Puzzle: {}", result.puzzle.bright_yellow().bold());
    if let Some(seed) = result.seed {
        println!("Seed:   {seed}");
    }
    println!("{}", "─".repeat(60).cyan());
    println!();
    print_grid(&result.grid);
    println!("\n   {} letters out of place\n", result.displaced);
}

/// Print the result of a shuffle audit
pub fn print_audit_result(result: &AuditResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SHUFFLE AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🧇 Puzzle: {}", result.puzzle.bright_yellow());

    println!("\n📊 {}", "Invariants:".bright_cyan().bold());
    let violation = |count: usize| {
        if count == 0 {
            count.to_string().green()
        } else {
            count.to_string().red().bold()
        }
    };
    println!("   Grids generated:   {}", result.total_grids);
    println!("   Invalid grids:     {}", violation(result.invalid_grids));
    println!("   Moved diagonals:   {}", violation(result.moved_diagonals));
    println!("   Left solved:       {}", violation(result.unshuffled_grids));

    println!("\n📈 {}", "Displaced letters:".bright_cyan().bold());
    println!(
        "   Average:           {}",
        format!("{:.2}", result.average_displaced).bright_yellow().bold()
    );
    println!("   Fewest:            {}", result.min_displaced);
    println!("   Most:              {}", result.max_displaced);

    let secs = result.duration.as_secs_f64();
    println!("\n   Time taken:        {secs:.2}s");
    if secs > 0.0 {
        println!(
            "   Grids/second:      {:.0}",
            result.total_grids as f64 / secs
        );
    }
    println!();
}
