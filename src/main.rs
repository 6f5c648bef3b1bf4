//! Waffle Solver - CLI
//!
//! Solves waffle puzzles from tile colors alone: propagates constraints,
//! enumerates per-line dictionary candidates, searches for a consistent
//! assignment, and plans a minimal swap sequence.

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use waffle_solver::{
    commands::{SolveConfig, analyze_board, solve_board},
    core::Word,
    output::{print_analysis_report, print_solve_report},
    solver::DEFAULT_MAX_SWAPS,
    wordlists::{WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "waffle_solver",
    about = "Waffle puzzle solver using constraint propagation and minimal swap planning",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file of five-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle and print the swap plan
    Solve {
        /// Path to the puzzle file, or '-' for stdin
        puzzle: String,

        /// Show verbose output with candidate counts and all assignments
        #[arg(short, long)]
        verbose: bool,

        /// Maximum swap plan length
        #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_SWAPS)]
        max_swaps: usize,
    },

    /// Analyze a puzzle without solving it
    Analyze {
        /// Path to the puzzle file, or '-' for stdin
        puzzle: String,

        /// Show verbose output with candidate words and unresolved cells
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to load wordlist {path}")),
    }
}

/// Read the puzzle text from a file or stdin
fn read_puzzle(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read puzzle from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read puzzle {source}"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;

    match cli.command {
        Commands::Solve {
            puzzle,
            verbose,
            max_swaps,
        } => {
            let text = read_puzzle(&puzzle)?;
            let mut config = SolveConfig::new(text);
            config.max_swaps = max_swaps;
            let report = solve_board(config, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_report(&report, verbose);
            Ok(())
        }
        Commands::Analyze { puzzle, verbose } => {
            let text = read_puzzle(&puzzle)?;
            let report = analyze_board(&text, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_report(&report, verbose);
            Ok(())
        }
    }
}
