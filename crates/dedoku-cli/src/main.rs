//! Batch test harness and single-puzzle front end for the dedoku solver.
//!
//! Reads puzzles as 81-character grid strings (`'0'` for blanks), either one
//! per CSV line with an optional expected solution, or inline via `--grid`,
//! and reports solve outcomes, technique usage, and difficulty.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use dedoku_core::DigitGrid;
use dedoku_solver::{SolveReport, StrategicSolver};

use crate::batch::{parse_batch, run_batch};

mod batch;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Batch file of test puzzles: one `grid[,solution]` line each.
    #[arg(value_name = "FILE", required_unless_present = "grid")]
    puzzles: Option<PathBuf>,

    /// Solve a single 81-character grid string instead of a file.
    #[arg(long, value_name = "GRID", conflicts_with = "puzzles")]
    grid: Option<String>,

    /// Print a human-readable explanation for every move.
    #[arg(short, long)]
    explain: bool,

    /// Suppress per-puzzle output; print only the batch summary.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Some(grid) = &args.grid {
        solve_single(grid, args.explain)
    } else if let Some(path) = &args.puzzles {
        solve_batch(path, &args)
    } else {
        // clap's required_unless_present rules make this unreachable.
        ExitCode::FAILURE
    }
}

fn solve_single(grid: &str, explain: bool) -> ExitCode {
    let puzzle: DigitGrid = match grid.parse() {
        Ok(puzzle) => puzzle,
        Err(err) => {
            log::error!("bad grid input: {err}");
            return ExitCode::FAILURE;
        }
    };

    let solver = StrategicSolver::with_all_techniques();
    let report = if explain {
        solver.solve_explained(&puzzle)
    } else {
        solver.solve(&puzzle)
    };

    print_report(&report, explain);
    if report.status.is_solved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn solve_batch(path: &Path, args: &Args) -> ExitCode {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            log::error!("cannot read {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let cases = parse_batch(&text);
    if cases.is_empty() {
        log::error!("{} contains no usable puzzles", path.display());
        return ExitCode::FAILURE;
    }

    let solver = StrategicSolver::with_all_techniques();
    let (outcomes, summary) = run_batch(&solver, cases, args.explain);

    if !args.quiet {
        for outcome in &outcomes {
            println!("[ Test {} ]", outcome.number);
            print_report(&outcome.report, args.explain);
            if let Some(passed) = outcome.passed {
                println!("Solution check: {}", if passed { "pass" } else { "FAIL" });
            }
            println!();
        }
    }
    println!("{summary}");

    if summary.solved == summary.total {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_report(report: &SolveReport, explain: bool) {
    if explain {
        for entry in report.log.entries() {
            println!("{entry}");
        }
    }
    println!("{}", report.grid.pretty());
    match &report.error {
        Some(error) => println!("Status: {} ({error})", report.status),
        None => println!("Status: {}", report.status),
    }
    println!(
        "Moves: {}, clues: {}, difficulty: {}",
        report.stats.moves(),
        report.stats.clues(),
        report.stats.difficulty()
    );
    for usage in report.stats.usage() {
        if usage.moves() > 0 {
            println!("  {}: {}", usage.name(), usage.moves());
        }
    }
}
