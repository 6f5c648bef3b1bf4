//! Display functions for command results

use super::formatters::{color_to_emoji, format_arrangement, format_swap};
use crate::commands::{AnalysisReport, SolveReport};
use crate::core::TileColor;
use colored::Colorize;

/// Print the current board with its tile colors
fn print_board(report_board: &crate::core::Board) {
    let size = report_board.topology().size();
    for y in 0..size {
        let mut row = String::new();
        for x in 0..size {
            match report_board.cell(report_board.topology().index_of(x, y)) {
                Some(cell) => {
                    let letter = (cell.letter() as char).to_string();
                    let colored = match cell.color() {
                        TileColor::Exact => letter.green().bold(),
                        TileColor::Present => letter.yellow().bold(),
                        TileColor::Absent => letter.white(),
                    };
                    row.push_str(&colored.to_string());
                }
                None => row.push(' '),
            }
        }
        println!("  {row}");
    }
}

/// Print the result of solving a board
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "PUZZLE".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    print_board(&report.board);

    if verbose {
        println!("\nCandidates per line:");
        for (id, count) in report.candidates_per_line.iter().enumerate() {
            println!("  line {id}: {count}");
        }
        println!("\nValid assignments: {}", report.assignments.len());
        for words in &report.assignments {
            println!("  {}", words.join(" "));
        }
    }

    println!("\n{}", "SOLUTION".bright_cyan().bold());
    print!(
        "{}",
        format_arrangement(&report.target, report.board.topology()).bright_green()
    );

    if report.swaps.is_empty() {
        println!("\n{}", "Already solved, no swaps needed".green().bold());
    } else {
        println!(
            "\n{}",
            format!("Swap plan ({} swaps):", report.swaps.len()).bold()
        );
        for (i, &(from, to)) in report.swaps.iter().enumerate() {
            println!("  {}", format_swap(i + 1, from, to));
        }
    }
}

/// Print the result of board analysis
pub fn print_analysis_report(report: &AnalysisReport, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BOARD ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    print_board(&report.board);

    println!("\nColors:");
    let size = report.board.topology().size();
    for y in 0..size {
        let mut row = String::new();
        for x in 0..size {
            match report.board.cell(report.board.topology().index_of(x, y)) {
                Some(cell) => row.push(color_to_emoji(cell.color())),
                None => row.push(' '),
            }
        }
        println!("  {row}");
    }

    println!("\nLines:");
    for (id, line) in report.lines.iter().enumerate() {
        println!(
            "  line {id}: {} candidates, known letters [{}]",
            line.candidates.len(),
            line.known_letters
        );
        if verbose && !line.candidates.is_empty() {
            println!("    {}", line.candidates.join(" "));
        }
    }

    if verbose {
        println!("\nUnresolved cells:");
        for cell in &report.cells {
            if cell.possible.len() > 1 {
                println!("  ({}, {}): {}", cell.x, cell.y, cell.possible);
            }
        }
    }
}
