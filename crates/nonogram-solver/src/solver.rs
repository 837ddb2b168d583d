use nonogram_core::{BoolGrid, Grid, Line, Puzzle, PuzzleError};

use crate::{
    BacktrackingSearch, DEFAULT_MAX_ITERATIONS, PropagationStatus, Propagator,
    SearchLimitExceeded,
};

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SolveStatus {
    /// Every cell was decided.
    ///
    /// A grid completed by propagation alone is reported as solved even if
    /// it does not match every clue; [`Solution::violated_line`] names the
    /// first line it breaks. Grids completed by backtracking always match.
    #[display("solved")]
    Solved,
    /// Propagation proved that `line` has no arrangement compatible with the
    /// rest of the grid.
    #[display("contradiction in {line}")]
    Contradiction {
        /// The contradictory line.
        line: Line,
    },
    /// Backtracking tried every completion and none matched the clues.
    #[display("no completion matches the clues")]
    Exhausted,
    /// Backtracking reached the configured node limit.
    #[display("search stopped after {limit} nodes")]
    SearchLimitReached {
        /// The configured node limit.
        limit: u64,
    },
}

/// Counters describing the work done by a solve.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    passes: usize,
    forced_cells: usize,
    search_nodes: u64,
    searched: bool,
}

impl SolveStats {
    /// Returns the number of propagation passes.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns the number of cells decided by propagation.
    #[must_use]
    pub fn forced_cells(&self) -> usize {
        self.forced_cells
    }

    /// Returns the number of tentative assignments made by backtracking.
    #[must_use]
    pub fn search_nodes(&self) -> u64 {
        self.search_nodes
    }

    /// Returns `true` if propagation stalled and backtracking ran.
    #[must_use]
    pub fn searched(&self) -> bool {
        self.searched
    }
}

/// The outcome of solving one puzzle.
///
/// The grid is always fully defined. When the solve failed it holds what
/// propagation decided, with every undecided cell reported as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    status: SolveStatus,
    grid: BoolGrid,
    stats: SolveStats,
    violated_line: Option<Line>,
}

impl Solution {
    /// Returns how the solve ended.
    #[must_use]
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    /// Returns `true` if the puzzle was solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status.is_solved()
    }

    /// Returns the solved grid, or the best-effort grid on failure.
    #[must_use]
    pub fn grid(&self) -> &BoolGrid {
        &self.grid
    }

    /// Consumes the solution and returns its grid.
    #[must_use]
    pub fn into_grid(self) -> BoolGrid {
        self.grid
    }

    /// Returns the work counters.
    #[must_use]
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Returns the first line of the grid that does not match its clues.
    ///
    /// This is `None` for every correct solution. It can be `Some` only when
    /// propagation completed the grid of an unsolvable puzzle.
    #[must_use]
    pub fn violated_line(&self) -> Option<Line> {
        self.violated_line
    }
}

/// Solves nonograms by propagation with a backtracking fallback.
///
/// The solver holds configuration only. Every solve works on a grid owned by
/// the call, so one solver can be shared across threads.
///
/// Propagation runs first. If it completes the grid the puzzle is solved. If
/// it proves a line contradictory while cells are still unknown the solve
/// fails without searching. Otherwise [`BacktrackingSearch`] decides the
/// remaining cells.
///
/// # Examples
///
/// ```
/// use nonogram_solver::{NonogramSolver, SolveStatus};
///
/// let solver = NonogramSolver::new().with_node_limit(1_000);
/// let solution = solver.solve_runs(&[[1], [1]], &[[1], [1]])?;
///
/// assert_eq!(solution.status(), SolveStatus::Solved);
/// assert!(solution.stats().searched());
/// assert_eq!(solution.grid().row(0), &[false, true]);
/// # Ok::<(), nonogram_core::PuzzleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonogramSolver {
    max_iterations: usize,
    node_limit: Option<u64>,
}

impl Default for NonogramSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NonogramSolver {
    /// Creates a solver with the default propagation cap and no search limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            node_limit: None,
        }
    }

    /// Sets the maximum number of propagation passes.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Limits the number of tentative assignments backtracking may make.
    #[must_use]
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Returns the maximum number of propagation passes.
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the backtracking node limit, if any.
    #[must_use]
    pub fn node_limit(&self) -> Option<u64> {
        self.node_limit
    }

    /// Solves `puzzle` from an all-unknown grid.
    #[must_use]
    pub fn solve(&self, puzzle: &Puzzle) -> Solution {
        self.run(puzzle, Grid::new(puzzle.width(), puzzle.height()))
    }

    /// Solves `puzzle` starting from a partially decided grid.
    ///
    /// Cells already decided in `grid` are kept. Since they were not derived
    /// from the clues, a completed grid is only accepted if it matches every
    /// clue; otherwise the solve fails with [`SolveStatus::Contradiction`]
    /// naming the first mismatching line.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::GridSizeMismatch`] if `grid` does not have the
    /// puzzle's size.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonogram_core::{BoolGrid, Grid, Line, Puzzle};
    /// use nonogram_solver::{NonogramSolver, SolveStatus};
    ///
    /// let puzzle = Puzzle::from_runs(&[[1], [1]], &[[1], [1]])?;
    /// let grid = Grid::from(BoolGrid::from_rows(&[[true, true], [false, false]])?);
    /// let solution = NonogramSolver::new().solve_from(&puzzle, grid)?;
    ///
    /// assert_eq!(solution.status(), SolveStatus::Contradiction { line: Line::Row { y: 0 } });
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn solve_from(&self, puzzle: &Puzzle, grid: Grid) -> Result<Solution, PuzzleError> {
        puzzle.check_size(&grid)?;
        let solution = self.run(puzzle, grid);
        let Some(line) = solution.violated_line else {
            return Ok(solution);
        };
        log::debug!("starting grid cannot be completed: {line} does not match its clues");
        Ok(Solution {
            status: SolveStatus::Contradiction { line },
            ..solution
        })
    }

    /// Solves the puzzle described by raw row and column run lengths.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidClues`] if any run list is malformed.
    pub fn solve_runs<R, C>(&self, row_runs: &[R], column_runs: &[C]) -> Result<Solution, PuzzleError>
    where
        R: AsRef<[usize]>,
        C: AsRef<[usize]>,
    {
        let puzzle = Puzzle::from_runs(row_runs, column_runs)?;
        Ok(self.solve(&puzzle))
    }

    fn run(&self, puzzle: &Puzzle, mut grid: Grid) -> Solution {
        let propagation = Propagator::new(puzzle)
            .with_max_iterations(self.max_iterations)
            .propagate(&mut grid);
        let mut stats = SolveStats {
            passes: propagation.passes(),
            forced_cells: propagation.forced_cells(),
            ..SolveStats::default()
        };

        let status = match propagation.status() {
            PropagationStatus::Complete => SolveStatus::Solved,
            PropagationStatus::Contradiction { line } => SolveStatus::Contradiction { line },
            PropagationStatus::Stalled | PropagationStatus::IterationLimit => {
                log::debug!(
                    "propagation left {} of {} cells unknown, searching",
                    grid.unknown_count(),
                    grid.cells().len()
                );
                let mut search = BacktrackingSearch::new(puzzle);
                if let Some(limit) = self.node_limit {
                    search = search.with_node_limit(limit);
                }
                let result = search.explore(&mut grid);
                stats.searched = true;
                stats.search_nodes = search.nodes();
                match result {
                    Ok(true) => SolveStatus::Solved,
                    Ok(false) => SolveStatus::Exhausted,
                    Err(SearchLimitExceeded { limit }) => SolveStatus::SearchLimitReached { limit },
                }
            }
        };

        log::debug!(
            "{}x{} puzzle: {status} ({} passes, {} search nodes)",
            puzzle.width(),
            puzzle.height(),
            stats.passes,
            stats.search_nodes
        );
        Solution {
            status,
            grid: grid.to_bool_grid(),
            stats,
            violated_line: propagation.violated_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use nonogram_core::{BoolGrid, CellState, Position};
    use proptest::prelude::*;
    use rayon::prelude::*;

    use super::*;
    use crate::testing::{PuzzleTester, bool_grid, puzzle};

    #[test]
    fn test_scenario_solved_by_propagation() {
        PuzzleTester::new(puzzle(&[&[1, 1], &[0], &[1, 1]], &[&[2], &[0], &[2]]))
            .solve()
            .assert_status(SolveStatus::Solved)
            .assert_no_search()
            .assert_grid(&["#.#", "...", "#.#"])
            .assert_violated_line(Some(Line::Column { x: 0 }));
    }

    #[test]
    fn test_unsolvable_completion_reports_violated_line() {
        // Row 0 forces column 1 filled although its clue is blank.
        PuzzleTester::new(puzzle(&[&[2], &[0]], &[&[1], &[0]]))
            .solve()
            .assert_status(SolveStatus::Solved)
            .assert_no_search()
            .assert_grid(&["##", ".."])
            .assert_violated_line(Some(Line::Column { x: 1 }));
    }

    #[test]
    fn test_picture_round_trip() {
        PuzzleTester::from_picture(&["###", ".#.", "#.#"])
            .solve()
            .assert_solved()
            .assert_no_search()
            .assert_grid(&["###", ".#.", "#.#"])
            .assert_violated_line(None);
    }

    #[test]
    fn test_stalled_puzzle_falls_back_to_search() {
        PuzzleTester::new(puzzle(&[&[1], &[1]], &[&[1], &[1]]))
            .solve()
            .assert_solved()
            .assert_searched(6)
            .assert_grid(&[".#", "#."]);
    }

    #[test]
    fn test_iteration_cap_hands_over_to_search() {
        PuzzleTester::from_picture(&["##.", ".#."])
            .with_solver(NonogramSolver::new().with_max_iterations(1))
            .solve()
            .assert_solved()
            .assert_searched(3)
            .assert_grid(&["##.", ".#."]);
    }

    #[test]
    fn test_contradiction_fails_without_search() {
        PuzzleTester::new(puzzle(&[&[3], &[1]], &[&[1], &[1]]))
            .solve()
            .assert_status(SolveStatus::Contradiction {
                line: Line::Row { y: 0 },
            })
            .assert_no_search();
    }

    #[test]
    fn test_exhausted_search_returns_defined_grid() {
        // Every line allows one filled cell, but three rows cannot share two
        // columns.
        let puzzle = puzzle(&[&[1], &[1], &[1]], &[&[1], &[1]]);
        let solution = NonogramSolver::new().solve(&puzzle);

        assert_eq!(solution.status(), SolveStatus::Exhausted);
        assert!(solution.stats().searched());
        assert_eq!(solution.grid(), &BoolGrid::new(2, 3));
    }

    #[test]
    fn test_node_limit() {
        PuzzleTester::new(puzzle(&[&[1], &[1]], &[&[1], &[1]]))
            .with_solver(NonogramSolver::new().with_node_limit(3))
            .solve()
            .assert_status(SolveStatus::SearchLimitReached { limit: 3 })
            .assert_searched(3)
            .assert_grid(&["..", ".."]);
    }

    #[test]
    fn test_solve_from_keeps_known_cells() {
        let puzzle = puzzle(&[&[1], &[1]], &[&[1], &[1]]);
        let mut grid = Grid::new(2, 2);
        grid.set(Position::new(0, 0), CellState::Filled);
        let solution = NonogramSolver::new().solve_from(&puzzle, grid).unwrap();

        assert!(solution.is_solved());
        assert!(!solution.stats().searched());
        assert_eq!(solution.grid().row(0), &[true, false]);
    }

    #[test]
    fn test_solve_from_rejects_conflicting_grid() {
        let puzzle = puzzle(&[&[1], &[1]], &[&[1], &[1]]);
        let grid = Grid::from(bool_grid(&["##", ".."]));
        let solution = NonogramSolver::new().solve_from(&puzzle, grid).unwrap();

        assert_eq!(
            solution.status(),
            SolveStatus::Contradiction {
                line: Line::Row { y: 0 }
            }
        );
        assert!(!solution.is_solved());
        assert_eq!(solution.grid(), &bool_grid(&["##", ".."]));
    }

    #[test]
    fn test_solve_from_rejects_grid_completed_against_clues() {
        // The starting cells leave row 1 to propagation, which fills it
        // although column 0 then holds two filled cells.
        let puzzle = puzzle(&[&[1], &[1]], &[&[1], &[1]]);
        let mut grid = Grid::new(2, 2);
        grid.set(Position::new(0, 0), CellState::Filled);
        grid.set(Position::new(1, 0), CellState::Empty);
        grid.set(Position::new(1, 1), CellState::Empty);
        let solution = NonogramSolver::new().solve_from(&puzzle, grid).unwrap();

        assert_eq!(
            solution.status(),
            SolveStatus::Contradiction {
                line: Line::Column { x: 0 }
            }
        );
        assert_eq!(solution.grid(), &bool_grid(&["#.", "#."]));
    }

    #[test]
    fn test_solve_from_rejects_wrong_size() {
        let puzzle = puzzle(&[&[1], &[1]], &[&[1], &[1]]);
        let err = NonogramSolver::new()
            .solve_from(&puzzle, Grid::new(3, 2))
            .unwrap_err();

        assert_eq!(
            err,
            PuzzleError::GridSizeMismatch {
                width: 2,
                height: 2,
                found_width: 3,
                found_height: 2,
            }
        );
    }

    #[test]
    fn test_solve_runs_rejects_zero_run() {
        let err = NonogramSolver::new()
            .solve_runs(&[vec![1, 0]], &[vec![1]])
            .unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::InvalidClues {
                line: Line::Row { y: 0 },
                ..
            }
        ));
    }

    #[test]
    fn test_overlong_clue_fails() {
        let solution = NonogramSolver::new()
            .solve_runs(&[vec![2, 2], vec![1]], &[vec![1], vec![1], vec![1]])
            .unwrap();
        assert_eq!(
            solution.status(),
            SolveStatus::Contradiction {
                line: Line::Row { y: 0 }
            }
        );
    }

    #[test]
    fn test_parallel_solves_match_sequential() {
        let pictures = [
            &["#.#", "...", "#.#"][..],
            &["##", "#."],
            &["###", ".#.", "#.#"],
            &["#..#", ".##.", ".##.", "#..#"],
        ];
        let puzzles = pictures
            .iter()
            .map(|picture| Puzzle::from_grid(&bool_grid(picture)))
            .collect::<Vec<_>>();
        let solver = NonogramSolver::new();

        let sequential = puzzles.iter().map(|p| solver.solve(p)).collect::<Vec<_>>();
        let parallel = puzzles.par_iter().map(|p| solver.solve(p)).collect::<Vec<_>>();
        assert_eq!(sequential, parallel);
    }

    fn arb_picture() -> impl Strategy<Value = BoolGrid> {
        (1usize..=4, 1usize..=4)
            .prop_flat_map(|(width, height)| {
                prop::collection::vec(prop::collection::vec(any::<bool>(), width), height)
            })
            .prop_map(|rows| BoolGrid::from_rows(&rows).unwrap())
    }

    proptest! {
        #[test]
        fn derived_clues_solve(picture in arb_picture()) {
            let puzzle = Puzzle::from_grid(&picture);
            let solution = NonogramSolver::new().solve(&puzzle);

            prop_assert!(solution.is_solved());
            prop_assert_eq!(solution.violated_line(), None);
            prop_assert!(puzzle.is_satisfied_by(&solution.grid().into()));
            if !solution.stats().searched() {
                prop_assert_eq!(solution.grid(), &picture);
            }
        }
    }
}
