use nonogram_core::{OverlayGrid, PhaseMark, TwoPhasePuzzle};

use crate::{NonogramSolver, Solution};

/// The outcome of solving a two-phase puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoPhaseSolution {
    grid: OverlayGrid,
    shade: Solution,
    erase: Option<Solution>,
}

impl TwoPhaseSolution {
    /// Returns `true` if both phases were solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.shade.is_solved() && self.erase.as_ref().is_some_and(Solution::is_solved)
    }

    /// Returns the combined grid.
    ///
    /// If the shade phase failed every cell is [`PhaseMark::None`]. If only
    /// the erase phase failed the grid shows the shade result alone.
    #[must_use]
    pub fn grid(&self) -> &OverlayGrid {
        &self.grid
    }

    /// Consumes the solution and returns the combined grid.
    #[must_use]
    pub fn into_grid(self) -> OverlayGrid {
        self.grid
    }

    /// Returns the shade phase result.
    #[must_use]
    pub fn shade(&self) -> &Solution {
        &self.shade
    }

    /// Returns the erase phase result, or `None` if the shade phase failed
    /// and the erase phase was not attempted.
    #[must_use]
    pub fn erase(&self) -> Option<&Solution> {
        self.erase.as_ref()
    }
}

impl NonogramSolver {
    /// Solves the shade puzzle, then the erase puzzle, and overlays the
    /// results cell by cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonogram_core::{OverlayGrid, PhaseMark::*, TwoPhasePuzzle};
    /// use nonogram_solver::NonogramSolver;
    ///
    /// let expected = OverlayGrid::from_rows(&[[Both, Phase1Only], [Phase2Only, None]])?;
    /// let puzzle = TwoPhasePuzzle::from_overlay(&expected);
    /// let solution = NonogramSolver::new().solve_two_phase(&puzzle);
    ///
    /// assert!(solution.is_solved());
    /// assert_eq!(solution.grid(), &expected);
    /// assert_eq!(solution.grid().to_string(), "X1\n2-\n");
    /// # Ok::<(), nonogram_core::GridError>(())
    /// ```
    #[must_use]
    pub fn solve_two_phase(&self, puzzle: &TwoPhasePuzzle) -> TwoPhaseSolution {
        let shade = self.solve(puzzle.shade());
        if !shade.is_solved() {
            log::debug!("shade phase failed: {}", shade.status());
            return TwoPhaseSolution {
                grid: OverlayGrid::blank(puzzle.width(), puzzle.height()),
                shade,
                erase: None,
            };
        }

        let erase = self.solve(puzzle.erase());
        let grid = if erase.is_solved() {
            OverlayGrid::from_fn(puzzle.width(), puzzle.height(), |pos| {
                let shaded = shade.grid().get(pos).unwrap_or(false);
                let erased = erase.grid().get(pos).unwrap_or(false);
                PhaseMark::from_phases(shaded, erased)
            })
        } else {
            log::debug!("erase phase failed: {}", erase.status());
            OverlayGrid::shade_only(shade.grid())
        };
        TwoPhaseSolution {
            grid,
            shade,
            erase: Some(erase),
        }
    }
}
