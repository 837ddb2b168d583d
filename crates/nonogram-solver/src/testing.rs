//! Test utilities for the solver.
//!
//! Grids are written as one string per row. Single-phase pictures use `#` for
//! filled and `.` for empty cells; working lines additionally use `?` for
//! unknown cells. Overlays use the `-`, `1`, `2` and `X` symbols.

use nonogram_core::{BoolGrid, CellState, Clues, Line, OverlayGrid, PhaseMark, Puzzle};

use crate::{NonogramSolver, Solution, SolveStatus};

/// Builds clues from run lengths.
#[track_caller]
pub fn clues(runs: &[usize]) -> Clues {
    Clues::new(runs.iter().copied()).unwrap()
}

/// Parses a working line such as `"?#."`.
#[track_caller]
pub fn line(s: &str) -> Vec<CellState> {
    s.chars()
        .map(|c| match c {
            '?' => CellState::Unknown,
            '#' => CellState::Filled,
            '.' => CellState::Empty,
            _ => panic!("invalid cell {c:?} in {s:?}"),
        })
        .collect()
}

/// Parses a picture such as `&["#.", ".#"]`.
#[track_caller]
pub fn bool_grid(rows: &[&str]) -> BoolGrid {
    let rows = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    '#' => true,
                    '.' => false,
                    _ => panic!("invalid cell {c:?} in {row:?}"),
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    BoolGrid::from_rows(&rows).unwrap()
}

/// Parses an overlay such as `&["X1", "-2"]`.
#[track_caller]
pub fn overlay(rows: &[&str]) -> OverlayGrid {
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

/// Builds a puzzle from row and column run lengths.
#[track_caller]
pub fn puzzle(rows: &[&[usize]], columns: &[&[usize]]) -> Puzzle {
    Puzzle::from_runs(rows, columns).unwrap()
}

/// A test harness for whole-puzzle solves.
///
/// All methods return `self` for chaining, and all assertions use
/// `#[track_caller]` to report the calling test's location.
#[derive(Debug)]
pub struct PuzzleTester {
    puzzle: Puzzle,
    solver: NonogramSolver,
    solution: Option<Solution>,
}

impl PuzzleTester {
    /// Creates a tester for `puzzle` using the default solver.
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            solver: NonogramSolver::new(),
            solution: None,
        }
    }

    /// Creates a tester for the puzzle whose clues describe `picture`.
    #[track_caller]
    pub fn from_picture(picture: &[&str]) -> Self {
        Self::new(Puzzle::from_grid(&bool_grid(picture)))
    }

    /// Replaces the solver configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: NonogramSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Solves the puzzle from an all-unknown grid.
    #[must_use]
    pub fn solve(mut self) -> Self {
        self.solution = Some(self.solver.solve(&self.puzzle));
        self
    }

    #[track_caller]
    fn solution(&self) -> &Solution {
        self.solution.as_ref().expect("call solve() before asserting")
    }

    /// Asserts the solve ended with `expected`.
    #[track_caller]
    pub fn assert_status(self, expected: SolveStatus) -> Self {
        assert_eq!(self.solution().status(), expected);
        self
    }

    /// Asserts the solve succeeded and its grid matches every clue.
    #[track_caller]
    pub fn assert_solved(self) -> Self {
        let solution = self.solution();
        assert!(solution.is_solved(), "solve ended with {}", solution.status());
        assert!(
            self.puzzle.is_satisfied_by(&solution.grid().into()),
            "solved grid does not match its clues"
        );
        self
    }

    /// Asserts the returned grid equals `expected`.
    #[track_caller]
    pub fn assert_grid(self, expected: &[&str]) -> Self {
        assert_eq!(self.solution().grid(), &bool_grid(expected));
        self
    }

    /// Asserts the first line the returned grid breaks.
    #[track_caller]
    pub fn assert_violated_line(self, expected: Option<Line>) -> Self {
        assert_eq!(self.solution().violated_line(), expected);
        self
    }

    /// Asserts backtracking ran and tried exactly `nodes` assignments.
    #[track_caller]
    pub fn assert_searched(self, nodes: u64) -> Self {
        let stats = self.solution().stats();
        assert!(stats.searched(), "backtracking did not run");
        assert_eq!(stats.search_nodes(), nodes);
        self
    }

    /// Asserts propagation alone settled the puzzle.
    #[track_caller]
    pub fn assert_no_search(self) -> Self {
        assert!(!self.solution().stats().searched(), "backtracking ran");
        self
    }
}
