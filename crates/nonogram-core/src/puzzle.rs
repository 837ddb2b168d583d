//! Puzzle definitions.

use crate::{BoolGrid, Clues, Grid, Line, OverlayGrid, PuzzleError};

/// A single-phase nonogram: one clue sequence per row and per column.
///
/// The grid is `column_clues().len()` cells wide and `row_clues().len()` cells
/// tall. Clue sequences that cannot fit their line are accepted here; they
/// make the puzzle unsolvable rather than invalid.
///
/// # Examples
///
/// ```
/// use nonogram_core::{Clues, Puzzle};
///
/// let puzzle = Puzzle::from_runs(&[vec![1, 1], vec![0], vec![1, 1]], &[vec![2], vec![0], vec![2]])?;
/// assert_eq!((puzzle.width(), puzzle.height()), (3, 3));
/// assert_eq!(puzzle.column_clues()[0], Clues::new([2])?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Puzzle {
    row_clues: Vec<Clues>,
    column_clues: Vec<Clues>,
}

impl Puzzle {
    /// Creates a puzzle of a declared size.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::RowCountMismatch`] if there is not exactly one
    /// row clue sequence per row, or [`PuzzleError::ColumnCountMismatch`] if
    /// there is not exactly one column clue sequence per column.
    pub fn new(
        width: usize,
        height: usize,
        row_clues: Vec<Clues>,
        column_clues: Vec<Clues>,
    ) -> Result<Self, PuzzleError> {
        if row_clues.len() != height {
            return Err(PuzzleError::RowCountMismatch {
                expected: height,
                found: row_clues.len(),
            });
        }
        if column_clues.len() != width {
            return Err(PuzzleError::ColumnCountMismatch {
                expected: width,
                found: column_clues.len(),
            });
        }
        Ok(Self::from_clues(row_clues, column_clues))
    }

    /// Creates a puzzle whose size is implied by the number of clue sequences.
    #[must_use]
    pub fn from_clues(row_clues: Vec<Clues>, column_clues: Vec<Clues>) -> Self {
        Self {
            row_clues,
            column_clues,
        }
    }

    /// Creates a puzzle from raw run lengths.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidClues`] naming the first line whose runs
    /// are structurally malformed.
    pub fn from_runs<R, C>(row_runs: &[R], column_runs: &[C]) -> Result<Self, PuzzleError>
    where
        R: AsRef<[usize]>,
        C: AsRef<[usize]>,
    {
        let row_clues = row_runs
            .iter()
            .enumerate()
            .map(|(y, runs)| parse_runs(Line::Row { y }, runs.as_ref()))
            .collect::<Result<_, _>>()?;
        let column_clues = column_runs
            .iter()
            .enumerate()
            .map(|(x, runs)| parse_runs(Line::Column { x }, runs.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(Self::from_clues(row_clues, column_clues))
    }

    /// Derives the clues describing `grid`.
    #[must_use]
    pub fn from_grid(grid: &BoolGrid) -> Self {
        let row_clues = grid.rows().map(|row| Clues::from_line(row.iter().copied())).collect();
        let column_clues = (0..grid.width())
            .map(|x| Clues::from_line(grid.column(x)))
            .collect();
        Self::from_clues(row_clues, column_clues)
    }

    /// Returns the number of columns.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.column_clues.len()
    }

    /// Returns the number of rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.row_clues.len()
    }

    /// Returns the row clue sequences, top to bottom.
    #[inline]
    #[must_use]
    pub fn row_clues(&self) -> &[Clues] {
        &self.row_clues
    }

    /// Returns the column clue sequences, left to right.
    #[inline]
    #[must_use]
    pub fn column_clues(&self) -> &[Clues] {
        &self.column_clues
    }

    /// Returns the clue sequence of `line`.
    ///
    /// # Panics
    ///
    /// Panics if `line` is out of bounds.
    #[inline]
    #[must_use]
    pub fn clues(&self, line: Line) -> &Clues {
        match line {
            Line::Row { y } => &self.row_clues[y],
            Line::Column { x } => &self.column_clues[x],
        }
    }

    /// Returns `true` if `grid` has this puzzle's size.
    #[inline]
    #[must_use]
    pub fn matches_size(&self, grid: &Grid) -> bool {
        (grid.width(), grid.height()) == (self.width(), self.height())
    }

    /// Checks that `grid` has this puzzle's size.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::GridSizeMismatch`] if it does not.
    pub fn check_size(&self, grid: &Grid) -> Result<(), PuzzleError> {
        if self.matches_size(grid) {
            return Ok(());
        }
        Err(PuzzleError::GridSizeMismatch {
            width: self.width(),
            height: self.height(),
            found_width: grid.width(),
            found_height: grid.height(),
        })
    }

    /// Returns the first line, rows before columns, that is not fully decided
    /// or whose runs differ from its clues.
    ///
    /// # Panics
    ///
    /// Panics if `grid` does not have this puzzle's size.
    #[must_use]
    pub fn violated_line(&self, grid: &Grid) -> Option<Line> {
        assert!(self.matches_size(grid));
        grid.lines()
            .find(|&line| !self.clues(line).is_satisfied_by(grid.line_cells(line)))
    }

    /// Returns `true` if every row and column of `grid` matches its clues.
    ///
    /// # Panics
    ///
    /// Panics if `grid` does not have this puzzle's size.
    #[must_use]
    pub fn is_satisfied_by(&self, grid: &Grid) -> bool {
        self.violated_line(grid).is_none()
    }
}

fn parse_runs(line: Line, runs: &[usize]) -> Result<Clues, PuzzleError> {
    Clues::try_from(runs).map_err(|source| PuzzleError::InvalidClues { line, source })
}

/// A two-phase nonogram: a shade puzzle and an erase puzzle over the same grid.
///
/// # Examples
///
/// ```
/// use nonogram_core::{OverlayGrid, PhaseMark, TwoPhasePuzzle};
///
/// let overlay = OverlayGrid::from_rows(&[[PhaseMark::Both, PhaseMark::Phase2Only]])?;
/// let puzzle = TwoPhasePuzzle::from_overlay(&overlay);
/// assert_eq!(puzzle.shade().row_clues()[0].runs(), &[1]);
/// assert_eq!(puzzle.erase().row_clues()[0].runs(), &[2]);
/// # Ok::<(), nonogram_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoPhasePuzzle {
    shade: Puzzle,
    erase: Puzzle,
}

impl TwoPhasePuzzle {
    /// Pairs a shade puzzle with an erase puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::PhaseSizeMismatch`] if the two puzzles differ in
    /// size.
    pub fn new(shade: Puzzle, erase: Puzzle) -> Result<Self, PuzzleError> {
        if (shade.width(), shade.height()) != (erase.width(), erase.height()) {
            return Err(PuzzleError::PhaseSizeMismatch {
                shade_width: shade.width(),
                shade_height: shade.height(),
                erase_width: erase.width(),
                erase_height: erase.height(),
            });
        }
        Ok(Self { shade, erase })
    }

    /// Derives both phases from a finished overlay.
    ///
    /// Cells marked `1` or `X` are shaded, cells marked `2` or `X` are erased.
    #[must_use]
    pub fn from_overlay(overlay: &OverlayGrid) -> Self {
        Self {
            shade: Puzzle::from_grid(&overlay.shade()),
            erase: Puzzle::from_grid(&overlay.erase()),
        }
    }

    /// Returns the number of columns.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.shade.width()
    }

    /// Returns the number of rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.shade.height()
    }

    /// Returns the shade (phase 1) puzzle.
    #[inline]
    #[must_use]
    pub fn shade(&self) -> &Puzzle {
        &self.shade
    }

    /// Returns the erase (phase 2) puzzle.
    #[inline]
    #[must_use]
    pub fn erase(&self) -> &Puzzle {
        &self.erase
    }
}
