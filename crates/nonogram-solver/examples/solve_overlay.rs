//! Example deriving two-phase clues from an overlay picture and solving them
//! back.
//!
//! This example shows how to:
//! - Derive shade and erase clues from an overlay with `TwoPhasePuzzle`
//! - Configure a `NonogramSolver`
//! - Solve both phases and print the combined overlay
//!
//! # Usage
//!
//! Solve the built-in 7×15 sample:
//!
//! ```sh
//! cargo run --example solve_overlay
//! ```
//!
//! Solve an overlay given one row per argument (`-`, `1`, `2`, `X`):
//!
//! ```sh
//! cargo run --example solve_overlay -- X1X-X2X 2-X-1-X 22X-11X
//! ```
//!
//! Bound backtracking and solve the puzzle repeatedly in parallel:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example solve_overlay -- --node-limit 10000 --repeat 64
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use nonogram_core::{Clues, OverlayGrid, PhaseMark, Puzzle, TwoPhasePuzzle};
use nonogram_solver::{DEFAULT_MAX_ITERATIONS, NonogramSolver, TwoPhaseSolution};
use rayon::prelude::*;

const LARGE: [&str; 15] = [
    "1111111", "X1X-X1X", "X21212X", "2222222", "X2X1XXX", "XXX212X", "XXX121X", "X12X2XX",
    "XXXXXXX", "-------", "X-X-X-X", "X1X2XXX", "XX212XX", "111-1-1", "222-2-2",
];

const SMALL: [&str; 3] = ["X1X-X2X", "2-X-1-X", "22X-11X"];

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Sample {
    Large,
    Small,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Overlay rows to solve. Defaults to the selected sample.
    #[arg(value_name = "ROW")]
    rows: Vec<String>,

    /// Built-in sample used when no rows are given.
    #[arg(long, value_name = "NAME", default_value = "large")]
    sample: Sample,

    /// Maximum number of propagation passes per phase.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Maximum number of backtracking assignments per phase.
    #[arg(long, value_name = "COUNT")]
    node_limit: Option<u64>,

    /// Solve the puzzle this many times in parallel.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    repeat: usize,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let rows = if args.rows.is_empty() {
        match args.sample {
            Sample::Large => LARGE.map(String::from).to_vec(),
            Sample::Small => SMALL.map(String::from).to_vec(),
        }
    } else {
        args.rows.clone()
    };

    let overlay = match parse_overlay(&rows) {
        Ok(overlay) => overlay,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };
    if args.repeat == 0 {
        eprintln!("--repeat must be at least 1.");
        process::exit(1);
    }

    let mut solver = NonogramSolver::new().with_max_iterations(args.max_iterations);
    if let Some(limit) = args.node_limit {
        solver = solver.with_node_limit(limit);
    }
    let puzzle = TwoPhasePuzzle::from_overlay(&overlay);

    println!("Grid size: {}x{}", puzzle.width(), puzzle.height());
    println!();
    print_clues("Phase 1 - Shading", puzzle.shade());
    print_clues("Phase 2 - Erasing", puzzle.erase());

    let solutions = (0..args.repeat)
        .into_par_iter()
        .map(|_| solver.solve_two_phase(&puzzle))
        .collect::<Vec<_>>();
    let Some(solution) = solutions.first() else {
        return;
    };
    if solutions.iter().any(|other| other != solution) {
        eprintln!("Parallel solves disagreed.");
        process::exit(1);
    }

    print_solution(solution, &overlay);
    if !solution.is_solved() {
        process::exit(1);
    }
}

fn parse_overlay(rows: &[String]) -> Result<OverlayGrid, String> {
    let rows = rows
        .iter()
        .enumerate()
        .map(|(y, row)| {
            row.chars()
                .map(|c| {
                    PhaseMark::from_symbol(c)
                        .ok_or_else(|| format!("Row {}: unknown symbol {c:?}", y + 1))
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    OverlayGrid::from_rows(&rows).map_err(|err| err.to_string())
}

fn print_clues(title: &str, puzzle: &Puzzle) {
    println!("{title} Clues:");
    println!("Row clues:");
    print_clue_list("Row", puzzle.row_clues());
    println!("Column clues:");
    print_clue_list("Col", puzzle.column_clues());
    println!();
}

fn print_clue_list(label: &str, clues: &[Clues]) {
    for (i, clues) in clues.iter().enumerate() {
        println!("  {label} {}: {clues}", i + 1);
    }
}

fn print_solution(solution: &TwoPhaseSolution, expected: &OverlayGrid) {
    println!("Shade phase: {}", solution.shade().status());
    match solution.erase() {
        Some(erase) => println!("Erase phase: {}", erase.status()),
        None => println!("Erase phase: not attempted"),
    }
    for (i, stats) in [Some(solution.shade()), solution.erase()]
        .into_iter()
        .flatten()
        .map(|phase| phase.stats())
        .enumerate()
    {
        println!(
            "  phase {}: {} passes, {} cells forced, {} search nodes",
            i + 1,
            stats.passes(),
            stats.forced_cells(),
            stats.search_nodes()
        );
    }
    println!();

    println!("Solved overlay:");
    print!("{}", solution.grid());
    if solution.grid() != expected {
        println!();
        println!("The clues admit another overlay than the input.");
    }
}
