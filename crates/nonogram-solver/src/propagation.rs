use nonogram_core::{CellState, Grid, Line, Puzzle, PuzzleError};

use crate::try_reduce_line;

/// Default cap on the number of propagation passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// How a propagation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum PropagationStatus {
    /// No unknown cells remain.
    #[display("complete")]
    Complete,
    /// A full pass changed nothing.
    #[display("stalled")]
    Stalled,
    /// The iteration cap was reached with unknown cells remaining.
    #[display("iteration limit reached")]
    IterationLimit,
    /// A pass left unknown cells and found a line with no arrangement
    /// compatible with its decided cells, so the puzzle has no solution.
    #[display("contradiction in {line}")]
    Contradiction {
        /// The first contradictory line found in the last pass.
        line: Line,
    },
}

/// The result of a propagation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Propagation {
    status: PropagationStatus,
    passes: usize,
    forced_cells: usize,
    violated_line: Option<Line>,
}

impl Propagation {
    /// Returns how the run ended.
    #[must_use]
    pub fn status(&self) -> PropagationStatus {
        self.status
    }

    /// Returns the number of full row-and-column passes performed.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns the number of cells decided by the run.
    #[must_use]
    pub fn forced_cells(&self) -> usize {
        self.forced_cells
    }

    /// Returns the first line whose clues the completed grid does not match.
    ///
    /// Only a [`Complete`](PropagationStatus::Complete) run can report one:
    /// the last pass may decide every cell even though a line had no
    /// compatible arrangement.
    #[must_use]
    pub fn violated_line(&self) -> Option<Line> {
        self.violated_line
    }
}

/// Repeatedly reduces every row and column of a grid until it reaches a
/// fixpoint.
///
/// Each pass reduces all rows top to bottom, then all columns left to right,
/// writing forced cells back into the grid. Decided cells are never changed,
/// so the fixpoint does not depend on the order lines are visited in.
///
/// A pass that decides the last unknown cell ends the run as
/// [`PropagationStatus::Complete`], even when a line turned out contradictory
/// during that pass. The completed grid is then checked against every clue
/// and the first mismatch is reported by [`Propagation::violated_line`].
///
/// # Examples
///
/// ```
/// use nonogram_core::{Grid, Puzzle};
/// use nonogram_solver::{PropagationStatus, Propagator};
///
/// let puzzle = Puzzle::from_runs(&[vec![1, 1], vec![0], vec![1, 1]], &[vec![1, 1], vec![0], vec![1, 1]])?;
/// let mut grid = Grid::new(puzzle.width(), puzzle.height());
/// let propagation = Propagator::new(&puzzle).run(&mut grid)?;
///
/// assert_eq!(propagation.status(), PropagationStatus::Complete);
/// assert_eq!(propagation.passes(), 1);
/// assert!(puzzle.is_satisfied_by(&grid));
/// # Ok::<(), nonogram_core::PuzzleError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Propagator<'a> {
    puzzle: &'a Puzzle,
    max_iterations: usize,
}

impl<'a> Propagator<'a> {
    /// Creates a propagator for `puzzle` with the default iteration cap.
    #[must_use]
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self {
            puzzle,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the maximum number of passes.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Propagates constraints through `grid` in place.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::GridSizeMismatch`] if `grid` does not have the
    /// puzzle's size. `grid` is left untouched.
    pub fn run(&self, grid: &mut Grid) -> Result<Propagation, PuzzleError> {
        self.puzzle.check_size(grid)?;
        Ok(self.propagate(grid))
    }

    /// Propagates through a grid already known to have the puzzle's size.
    pub(crate) fn propagate(&self, grid: &mut Grid) -> Propagation {
        let mut passes = 0;
        let mut forced_cells = 0;
        let mut violated_line = None;
        let status = loop {
            if passes == self.max_iterations {
                break PropagationStatus::IterationLimit;
            }

            let mut changed = false;
            let mut contradiction = None;
            for line in grid.lines() {
                match self.reduce(grid, line) {
                    Some(forced) => {
                        forced_cells += forced;
                        changed |= forced > 0;
                    }
                    None => {
                        log::trace!("no arrangement fits {line}");
                        contradiction.get_or_insert(line);
                    }
                }
            }
            passes += 1;
            log::trace!(
                "pass {passes}: {} unknown cells left",
                grid.unknown_count()
            );

            if grid.is_complete() {
                violated_line = self.puzzle.violated_line(grid);
                if let Some(line) = violated_line {
                    log::warn!("propagation completed the grid but {line} does not match its clues");
                }
                break PropagationStatus::Complete;
            }
            if let Some(line) = contradiction {
                break PropagationStatus::Contradiction { line };
            }
            if !changed {
                break PropagationStatus::Stalled;
            }
        };

        log::debug!("propagation {status} after {passes} passes, {forced_cells} cells forced");
        Propagation {
            status,
            passes,
            forced_cells,
            violated_line,
        }
    }

    /// Reduces one line and writes the forced cells back.
    ///
    /// Returns the number of newly decided cells, or `None` if the line has no
    /// compatible arrangement.
    fn reduce(&self, grid: &mut Grid, line: Line) -> Option<usize> {
        let cells = grid.line_cells(line).collect::<Vec<_>>();
        let reduced = try_reduce_line(self.puzzle.clues(line), &cells)?;

        let mut forced = 0;
        for (i, (before, after)) in cells.into_iter().zip(reduced).enumerate() {
            if before == after {
                continue;
            }
            debug_assert_eq!(before, CellState::Unknown);
            grid.set(line.position(i), after);
            forced += 1;
        }
        Some(forced)
    }
}
