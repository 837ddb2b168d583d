//! Fully decided boolean grids.

use std::ops::Index;

use crate::{GridError, Position};

/// A width×height matrix of filled (`true`) and empty (`false`) cells.
///
/// This is the representation of a solved puzzle, and the input from which
/// clues are derived.
///
/// # Examples
///
/// ```
/// use nonogram_core::{BoolGrid, Position};
///
/// let grid = BoolGrid::from_rows(&[[true, false], [false, true]])?;
/// assert_eq!(grid.width(), 2);
/// assert!(grid[Position::new(1, 1)]);
/// assert_eq!(grid.column(0).collect::<Vec<_>>(), [true, false]);
/// # Ok::<(), nonogram_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoolGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl BoolGrid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Builds a grid from rows of cells.
    ///
    /// The width is taken from the first row; an empty slice yields a 0×0 grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRow`] if any row differs in length from the
    /// first one.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[bool]>,
    {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, cells_in_row) in rows.iter().enumerate() {
            let cells_in_row = cells_in_row.as_ref();
            if cells_in_row.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: cells_in_row.len(),
                });
            }
            cells.extend_from_slice(cells_in_row);
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Returns the number of columns.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `pos`, or `None` if it is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<bool> {
        (pos.x() < self.width && pos.y() < self.height).then(|| self.cells[pos.index(self.width)])
    }

    /// Returns the cells of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of bounds.
    #[inline]
    #[must_use]
    pub fn row(&self, y: usize) -> &[bool] {
        assert!(y < self.height);
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Returns an iterator over the cells of column `x`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of bounds.
    pub fn column(&self, x: usize) -> impl Iterator<Item = bool> + '_ {
        assert!(x < self.width);
        self.cells.iter().skip(x).step_by(self.width).copied()
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.height).map(|y| self.row(y))
    }

    /// Returns all cells in row-major order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

impl Index<Position> for BoolGrid {
    type Output = bool;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        assert!(pos.x() < self.width && pos.y() < self.height);
        &self.cells[pos.index(self.width)]
    }
}
