//! Waffle - CLI
//!
//! Play Waffle puzzles in the terminal, generate starting grids and check word sets.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::Rng;
use std::path::{Path, PathBuf};
use waffle_engine::{
    catalog::{self, PuzzleEntry, load_from_file},
    commands::{check_words, run_audit, run_play, shuffle_puzzle},
    logging::init_logger,
    output::{print_audit_result, print_check_result, print_shuffle_result},
};

#[derive(Parser)]
#[command(
    name = "waffle",
    about = "Waffle word puzzle: swap letters until every word is spelled out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle number from the catalog (1-based, default: random)
    #[arg(short, long, global = true)]
    puzzle: Option<usize>,

    /// Load puzzles from a file instead of the built-in catalog
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a puzzle interactively (default)
    Play,

    /// Print a freshly shuffled starting grid
    Shuffle {
        /// Seed for a reproducible shuffle
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Check that a word set forms a puzzle: H1 H2 H3 / V1 V2 V3
    Check {
        /// Horizontal words, '/', vertical words
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Shuffle a puzzle many times and verify every starting grid
    Audit {
        /// Number of grids to generate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

/// Pick a puzzle from the catalog or a puzzle file
///
/// Without `--puzzle` a random entry is chosen.
fn select_puzzle(number: Option<usize>, file: Option<&Path>) -> Result<PuzzleEntry> {
    let mut entries = match file {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load puzzles from {}", path.display()))?,
        None => catalog::builtin(),
    };

    if entries.is_empty() {
        bail!("No puzzles available");
    }

    let index = match number {
        Some(n) if (1..=entries.len()).contains(&n) => n - 1,
        Some(n) => bail!(
            "Puzzle number {n} out of range, pick one of 1..={}",
            entries.len()
        ),
        None => rand::rng().random_range(0..entries.len()),
    };
    log::debug!("Selected puzzle {} of {}", index + 1, entries.len());

    Ok(entries.swap_remove(index))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let entry = select_puzzle(cli.puzzle, cli.file.as_deref())?;
            run_play_command(&entry)
        }
        Commands::Shuffle { seed } => {
            let entry = select_puzzle(cli.puzzle, cli.file.as_deref())?;
            print_shuffle_result(&shuffle_puzzle(&entry.puzzle, seed));
            Ok(())
        }
        Commands::Check { words } => {
            print_check_result(&check_words(&words));
            Ok(())
        }
        Commands::Audit { count } => {
            let entry = select_puzzle(cli.puzzle, cli.file.as_deref())?;
            println!("Auditing {count} shuffles of {}...", entry.puzzle);
            print_audit_result(&run_audit(&entry.puzzle, count));
            Ok(())
        }
    }
}

fn run_play_command(entry: &PuzzleEntry) -> Result<()> {
    let mut game = entry
        .new_match()
        .with_context(|| format!("Invalid starting grid for puzzle {}", entry.puzzle))?;
    run_play(&mut game).map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
