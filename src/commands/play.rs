//! Interactive play mode
//!
//! Text-based match: the player swaps letters by position until the grid is solved or
//! the swap budget runs out.

use crate::core::WaffleMatch;
use crate::output::display::{print_match, print_play_outcome};
use std::io::{self, BufRead, Write};

/// A parsed player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Exchange two letters, 1-based `(row, col)` positions
    Swap((usize, usize), (usize, usize)),
    Restart,
    Help,
    Quit,
}

/// How an interactive match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { swaps_left: usize },
    Lost,
    Quit,
}

impl PlayOutcome {
    /// Outcome of a match that is over
    #[must_use]
    pub fn of(game: &WaffleMatch) -> Self {
        if game.puzzle_found() {
            Self::Won {
                swaps_left: game.remaining_swaps(),
            }
        } else {
            Self::Lost
        }
    }
}

/// Parse one line of player input against the current match
///
/// # Errors
///
/// Returns a message describing why the input is not a usable command.
pub fn parse_command(input: &str, game: &WaffleMatch) -> Result<PlayCommand, String> {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Ok(PlayCommand::Quit),
        "restart" | "r" => return Ok(PlayCommand::Restart),
        "help" | "h" | "?" => return Ok(PlayCommand::Help),
        _ => {}
    }

    let numbers = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse::<usize>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| format!("Unknown command: '{}'", input.trim()))?;

    let &[row1, col1, row2, col2] = numbers.as_slice() else {
        return Err("A swap needs four numbers: row1 col1 row2 col2".to_string());
    };

    for (row, col) in [(row1, col1), (row2, col2)] {
        if !game.valid_position(row, col) {
            return Err(format!("({row}, {col}) is not a letter of the grid"));
        }
        if !game.swappable_position(row, col) {
            return Err(format!("({row}, {col}) is already in place"));
        }
    }
    if (row1, col1) == (row2, col2) {
        return Err("Pick two different positions".to_string());
    }

    Ok(PlayCommand::Swap((row1, col1), (row2, col2)))
}

/// Run an interactive match on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_play(game: &mut WaffleMatch) -> Result<PlayOutcome, String> {
    let stdin = io::stdin();
    run_play_with(game, stdin.lock())
}

/// Run an interactive match reading commands from `input`
///
/// End of input counts as quitting.
///
/// # Errors
///
/// Returns an error if reading from `input` fails.
pub fn run_play_with<R: BufRead>(
    game: &mut WaffleMatch,
    mut input: R,
) -> Result<PlayOutcome, String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Waffle - Play Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();
    print_match(game);

    while !game.is_over() {
        let Some(line) = read_command(&mut input)? else {
            return Ok(PlayOutcome::Quit);
        };
        if line.is_empty() {
            continue;
        }

        match parse_command(&line, game) {
            Ok(PlayCommand::Swap((row1, col1), (row2, col2))) => {
                game.swap(row1, col1, row2, col2);
                print_match(game);
            }
            Ok(PlayCommand::Restart) => {
                game.restart();
                println!("\n🔄 Back to the starting grid!");
                print_match(game);
            }
            Ok(PlayCommand::Help) => print_help(),
            Ok(PlayCommand::Quit) => return Ok(PlayOutcome::Quit),
            Err(message) => println!("❌ {message}\n"),
        }
    }

    let outcome = PlayOutcome::of(game);
    print_play_outcome(outcome, game);
    Ok(outcome)
}

fn print_help() {
    println!("Swap two letters by typing their positions: row1 col1 row2 col2");
    println!("  e.g. '1 2 3 2' swaps the letter at row 1, column 2 with row 3, column 2");
    println!("  Letters shown green are locked in place.");
    println!("Commands: 'restart' to start over, 'help' for this text, 'quit' to exit\n");
}

fn read_command<R: BufRead>(input: &mut R) -> Result<Option<String>, String> {
    print!("Swap: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
