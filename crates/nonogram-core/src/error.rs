//! Validation errors for puzzle data.

use crate::Line;

/// A structurally malformed clue sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ClueError {
    /// A zero-length run appears in a sequence with more than one run.
    ///
    /// Only the singleton `[0]` may contain a zero.
    #[display("run {index} has zero length")]
    ZeroLengthRun {
        /// Index of the offending run.
        index: usize,
    },
}

/// A grid that cannot be built from the given cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A row has a different length from the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// Two grids that must be combined differ in size.
    #[display("grid sizes differ: {left_width}x{left_height} and {right_width}x{right_height}")]
    SizeMismatch {
        /// Width of the first grid.
        left_width: usize,
        /// Height of the first grid.
        left_height: usize,
        /// Width of the second grid.
        right_width: usize,
        /// Height of the second grid.
        right_height: usize,
    },
}

/// A puzzle definition rejected before solving starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// The number of row clue sequences differs from the declared height.
    #[display("expected {expected} row clue sequences, found {found}")]
    RowCountMismatch {
        /// Declared height.
        expected: usize,
        /// Number of row clue sequences.
        found: usize,
    },
    /// The number of column clue sequences differs from the declared width.
    #[display("expected {expected} column clue sequences, found {found}")]
    ColumnCountMismatch {
        /// Declared width.
        expected: usize,
        /// Number of column clue sequences.
        found: usize,
    },
    /// A starting grid does not have the puzzle's size.
    #[display("grid is {found_width}x{found_height}, puzzle is {width}x{height}")]
    GridSizeMismatch {
        /// Puzzle width.
        width: usize,
        /// Puzzle height.
        height: usize,
        /// Grid width.
        found_width: usize,
        /// Grid height.
        found_height: usize,
    },
    /// The shade and erase puzzles of a two-phase puzzle differ in size.
    #[display(
        "phase sizes differ: shade is {shade_width}x{shade_height}, erase is {erase_width}x{erase_height}"
    )]
    PhaseSizeMismatch {
        /// Width of the shade puzzle.
        shade_width: usize,
        /// Height of the shade puzzle.
        shade_height: usize,
        /// Width of the erase puzzle.
        erase_width: usize,
        /// Height of the erase puzzle.
        erase_height: usize,
    },
    /// A clue sequence is structurally malformed.
    #[display("invalid clues for {line}: {source}")]
    InvalidClues {
        /// The line whose clues are malformed.
        line: Line,
        /// The underlying clue error.
        source: ClueError,
    },
}
