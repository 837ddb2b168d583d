//! Nonogram solving engine.
//!
//! The solver is built in layers, each usable on its own:
//!
//! 1. [`arrangements`] enumerates every placement of a clue sequence in a line.
//! 2. [`reduce_line`] intersects the placements compatible with a partially
//!    known line to force cells.
//! 3. [`Propagator`] reduces every row and column until nothing changes.
//! 4. [`BacktrackingSearch`] explores the cells propagation could not decide.
//! 5. [`NonogramSolver`] runs the above on a single puzzle, and
//!    [`NonogramSolver::solve_two_phase`] solves a shade puzzle and an erase
//!    puzzle and merges them into an [`OverlayGrid`](nonogram_core::OverlayGrid).
//!
//! # Examples
//!
//! ```
//! use nonogram_core::{BoolGrid, Puzzle};
//! use nonogram_solver::NonogramSolver;
//!
//! let puzzle = Puzzle::from_runs(&[vec![3], vec![1], vec![1, 1]], &[vec![1, 1], vec![2], vec![1, 1]])?;
//! let solution = NonogramSolver::new().solve(&puzzle);
//!
//! assert!(solution.is_solved());
//! assert_eq!(
//!     solution.grid(),
//!     &BoolGrid::from_rows(&[[true, true, true], [false, true, false], [true, false, true]])?,
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Cost
//!
//! Propagation is bounded by the iteration cap. Backtracking is exponential in
//! the number of cells left unknown after propagation; callers that need a
//! latency bound should set [`NonogramSolver::with_node_limit`].

pub use self::{
    arrangement::*, backtrack::*, error::*, line_reducer::*, propagation::*, solver::*,
    two_phase::*,
};

mod arrangement;
mod backtrack;
mod error;
mod line_reducer;
mod propagation;
mod solver;
mod two_phase;

#[cfg(test)]
mod testing;
