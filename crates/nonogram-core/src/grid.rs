//! The working grid mutated during solving.

use std::ops::Index;

use crate::{BoolGrid, CellState, Line, Position};

/// A width×height matrix of [`CellState`]s.
///
/// A grid starts all-[`Unknown`](CellState::Unknown) and is narrowed by the
/// solver until every cell is decided. Each solve owns its grid value; nothing
/// is shared between solves.
///
/// # Examples
///
/// ```
/// use nonogram_core::{CellState, Grid, Line, Position};
///
/// let mut grid = Grid::new(3, 2);
/// assert_eq!(grid.unknown_count(), 6);
///
/// grid.set(Position::new(1, 0), CellState::Filled);
/// assert_eq!(grid.first_unknown(), Some(Position::new(0, 0)));
/// assert_eq!(
///     grid.line_cells(Line::Column { x: 1 }).collect::<Vec<_>>(),
///     [CellState::Filled, CellState::Unknown],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid with every cell unknown.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Unknown; width * height],
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

    /// Returns `true` if `pos` lies inside the grid.
    #[inline]
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    /// Sets the cell at `pos` and returns its previous state.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[inline]
    pub fn set(&mut self, pos: Position, state: CellState) -> CellState {
        assert!(self.contains(pos), "{pos} is outside a {}x{} grid", self.width, self.height);
        std::mem::replace(&mut self.cells[pos.index(self.width)], state)
    }

    /// Returns the cells of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of bounds.
    #[inline]
    #[must_use]
    pub fn row(&self, y: usize) -> &[CellState] {
        assert!(y < self.height);
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Returns the number of cells in `line`.
    #[inline]
    #[must_use]
    pub fn line_len(&self, line: Line) -> usize {
        line.len(self.width, self.height)
    }

    /// Returns an iterator over the cells of `line`, in line order.
    ///
    /// # Panics
    ///
    /// The iterator panics if `line` is out of bounds.
    pub fn line_cells(&self, line: Line) -> impl Iterator<Item = CellState> + '_ {
        (0..self.line_len(line)).map(move |i| self[line.position(i)])
    }

    /// Returns all rows followed by all columns.
    pub fn lines(&self) -> impl Iterator<Item = Line> + use<> {
        let rows = (0..self.height).map(|y| Line::Row { y });
        let columns = (0..self.width).map(|x| Line::Column { x });
        rows.chain(columns)
    }

    /// Returns `true` if every cell of `line` is decided.
    #[must_use]
    pub fn is_line_complete(&self, line: Line) -> bool {
        self.line_cells(line).all(CellState::is_known)
    }

    /// Returns the first unknown cell in row-major order.
    #[inline]
    #[must_use]
    pub fn first_unknown(&self) -> Option<Position> {
        self.first_unknown_from(0)
    }

    /// Returns the first unknown cell in row-major order at or after the
    /// row-major index `start`.
    #[must_use]
    pub fn first_unknown_from(&self, start: usize) -> Option<Position> {
        self.cells
            .iter()
            .skip(start)
            .position(|cell| cell.is_unknown())
            .map(|offset| Position::from_index(start + offset, self.width))
    }

    /// Returns the number of unknown cells.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_unknown()).count()
    }

    /// Returns `true` if no unknown cells remain.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_known())
    }

    /// Returns all cells in row-major order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Converts the grid into a fully decided [`BoolGrid`].
    ///
    /// Remaining unknown cells are reported as empty.
    #[must_use]
    pub fn to_bool_grid(&self) -> BoolGrid {
        let cells = self
            .cells
            .iter()
            .map(|cell| cell.to_bool().unwrap_or(false))
            .collect();
        BoolGrid::from_cells(self.width, self.height, cells)
    }
}

impl Index<Position> for Grid {
    type Output = CellState;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "{pos} is outside a {}x{} grid", self.width, self.height);
        &self.cells[pos.index(self.width)]
    }
}

impl From<&BoolGrid> for Grid {
    fn from(grid: &BoolGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            cells: grid.cells().iter().copied().map(CellState::from).collect(),
        }
    }
}

impl From<BoolGrid> for Grid {
    #[inline]
    fn from(grid: BoolGrid) -> Self {
        Self::from(&grid)
    }
}
