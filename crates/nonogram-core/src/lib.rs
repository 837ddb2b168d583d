//! Core data structures for nonogram solving.
//!
//! This crate provides the value types shared by the solver and by any
//! application built around it: clue sequences, cell states, grids and
//! puzzle definitions. It does no solving of its own.
//!
//! # Overview
//!
//! 1. **Cells and lines**
//!    - [`CellState`]: the three-valued state of a cell during solving
//!    - [`Position`] and [`Line`]: addressing cells and whole rows/columns
//!
//! 2. **Clues**
//!    - [`Clues`]: an ordered sequence of filled-run lengths for one line
//!
//! 3. **Grids**
//!    - [`Grid`]: the working grid of [`CellState`]s mutated by the solver
//!    - [`BoolGrid`]: a fully decided grid
//!    - [`OverlayGrid`]: the four-symbol result of a two-phase puzzle, made of
//!      [`PhaseMark`]s
//!
//! 4. **Puzzles**
//!    - [`Puzzle`]: row and column clues of one phase
//!    - [`TwoPhasePuzzle`]: a shade puzzle and an erase puzzle of the same size
//!
//! # Examples
//!
//! ```
//! use nonogram_core::{BoolGrid, Clues, Puzzle};
//!
//! let picture = BoolGrid::from_rows(&[
//!     [true, false, true],
//!     [false, false, false],
//!     [true, false, true],
//! ])?;
//! let puzzle = Puzzle::from_grid(&picture);
//!
//! assert_eq!(puzzle.row_clues()[0], Clues::new([1, 1])?);
//! assert!(puzzle.row_clues()[1].is_blank());
//! assert!(puzzle.is_satisfied_by(&picture.into()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bool_grid;
pub mod cell;
pub mod clues;
pub mod error;
pub mod grid;
pub mod overlay;
pub mod position;
pub mod puzzle;

pub use self::{
    bool_grid::BoolGrid,
    cell::CellState,
    clues::Clues,
    error::{ClueError, GridError, PuzzleError},
    grid::Grid,
    overlay::{OverlayGrid, PhaseMark},
    position::{Line, Position},
    puzzle::{Puzzle, TwoPhasePuzzle},
};
