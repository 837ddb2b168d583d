//! Benchmarks for the nonogram solver.
//!
//! # Benchmarks
//!
//! - **`arrangements`**: enumerates placements of clue sequences in a
//!   30-cell line.
//! - **`reduce_line`**: reduces a partially known 30-cell line.
//! - **`solve`**: solves whole puzzles derived from a 10×10 picture and from a
//!   6×6 cross whose clues leave cells for backtracking.
//! - **`solve_two_phase`**: solves the 7×15 sample overlay.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use nonogram_core::{BoolGrid, CellState, Clues, OverlayGrid, PhaseMark, Puzzle, TwoPhasePuzzle};
use nonogram_solver::{NonogramSolver, arrangements, reduce_line};

const OVERLAY: [&str; 15] = [
    "1111111", "X1X-X1X", "X21212X", "2222222", "X2X1XXX", "XXX212X", "XXX121X", "X12X2XX",
    "XXXXXXX", "-------", "X-X-X-X", "X1X2XXX", "XX212XX", "111-1-1", "222-2-2",
];

const PICTURE_10X10: [&str; 10] = [
    "..####....",
    ".######...",
    "##.##.##..",
    "########..",
    "#.####.#..",
    "..#..#....",
    ".#.##.#...",
    "#.#..#.#..",
    "......####",
    ".....#####",
];

const CROSS_6X6: [&str; 6] = [
    "#....#", ".#..#.", "..##..", "..##..", ".#..#.", "#....#",
];

fn picture(rows: &[&str]) -> BoolGrid {
    let rows = rows
        .iter()
        .map(|row| row.chars().map(|c| c == '#').collect::<Vec<_>>())
        .collect::<Vec<_>>();
    BoolGrid::from_rows(&rows).unwrap()
}

fn overlay(rows: &[&str]) -> OverlayGrid {
    let rows = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| PhaseMark::from_symbol(c).unwrap())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    OverlayGrid::from_rows(&rows).unwrap()
}

fn bench_arrangements(c: &mut Criterion) {
    let inputs = [
        ("single_run", Clues::new([5]).unwrap()),
        ("three_runs", Clues::new([3, 1, 4]).unwrap()),
        ("six_runs", Clues::new([2, 1, 1, 3, 1, 2]).unwrap()),
    ];

    for (param, clues) in inputs {
        c.bench_with_input(BenchmarkId::new("arrangements", param), &clues, |b, clues| {
            b.iter(|| arrangements(hint::black_box(clues), 30));
        });
    }
}

fn bench_reduce_line(c: &mut Criterion) {
    let clues = Clues::new([3, 1, 4]).unwrap();
    let mut line = vec![CellState::Unknown; 30];
    line[4] = CellState::Filled;
    line[12] = CellState::Empty;
    line[25] = CellState::Filled;

    c.bench_function("reduce_line", |b| {
        b.iter(|| reduce_line(hint::black_box(&clues), hint::black_box(&line)));
    });
}

fn bench_solve(c: &mut Criterion) {
    let solver = NonogramSolver::new();
    let puzzles = [
        ("picture_10x10", Puzzle::from_grid(&picture(&PICTURE_10X10))),
        ("cross_6x6", Puzzle::from_grid(&picture(&CROSS_6X6))),
    ];

    for (param, puzzle) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &puzzle, |b, puzzle| {
            b.iter_batched(
                || hint::black_box(puzzle.clone()),
                |puzzle| solver.solve(&puzzle),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_solve_two_phase(c: &mut Criterion) {
    let solver = NonogramSolver::new();
    let puzzle = TwoPhasePuzzle::from_overlay(&overlay(&OVERLAY));

    c.bench_function("solve_two_phase", |b| {
        b.iter(|| solver.solve_two_phase(hint::black_box(&puzzle)));
    });
}

criterion_group!(
    benches,
    bench_arrangements,
    bench_reduce_line,
    bench_solve,
    bench_solve_two_phase
);
criterion_main!(benches);
