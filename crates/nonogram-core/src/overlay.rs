//! Two-phase result grids.

use std::{
    fmt::{self, Display, Write as _},
    ops::Index,
};

use crate::{BoolGrid, GridError, Position};

/// The combined state of one cell in a two-phase puzzle.
///
/// Phase 1 is the *shade* puzzle and phase 2 the *erase* puzzle. Each variant
/// has a one-character symbol used by the surrounding application.
///
/// # Examples
///
/// ```
/// use nonogram_core::PhaseMark;
///
/// let mark = PhaseMark::from_phases(true, false);
/// assert_eq!(mark, PhaseMark::Phase1Only);
/// assert_eq!(mark.symbol(), '1');
/// assert_eq!(PhaseMark::from_symbol('X'), Some(PhaseMark::Both));
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseMark {
    /// Filled in neither phase.
    #[default]
    #[display("-")]
    None,
    /// Filled in the shade phase only.
    #[display("1")]
    Phase1Only,
    /// Filled in the erase phase only.
    #[display("2")]
    Phase2Only,
    /// Filled in both phases.
    #[display("X")]
    Both,
}

impl PhaseMark {
    /// Combines the filled state of one cell in each phase.
    #[inline]
    #[must_use]
    pub const fn from_phases(shade: bool, erase: bool) -> Self {
        match (shade, erase) {
            (true, true) => Self::Both,
            (true, false) => Self::Phase1Only,
            (false, true) => Self::Phase2Only,
            (false, false) => Self::None,
        }
    }

    /// Returns the symbol of this mark: `-`, `1`, `2` or `X`.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::None => '-',
            Self::Phase1Only => '1',
            Self::Phase2Only => '2',
            Self::Both => 'X',
        }
    }

    /// Returns the mark for a symbol, or `None` if the symbol is not one of
    /// `-`, `1`, `2` or `X`.
    #[inline]
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '-' => Some(Self::None),
            '1' => Some(Self::Phase1Only),
            '2' => Some(Self::Phase2Only),
            'X' => Some(Self::Both),
            _ => None,
        }
    }

    /// Returns `true` if the cell is filled in the shade phase.
    #[inline]
    #[must_use]
    pub const fn is_shaded(self) -> bool {
        matches!(self, Self::Phase1Only | Self::Both)
    }

    /// Returns `true` if the cell is filled in the erase phase.
    #[inline]
    #[must_use]
    pub const fn is_erased(self) -> bool {
        matches!(self, Self::Phase2Only | Self::Both)
    }
}

/// A width×height matrix of [`PhaseMark`]s: the result of a two-phase puzzle.
///
/// # Examples
///
/// ```
/// use nonogram_core::{BoolGrid, OverlayGrid, PhaseMark, Position};
///
/// let shade = BoolGrid::from_rows(&[[true, true, false]])?;
/// let erase = BoolGrid::from_rows(&[[false, true, true]])?;
/// let overlay = OverlayGrid::combine(&shade, &erase)?;
///
/// assert_eq!(overlay[Position::new(1, 0)], PhaseMark::Both);
/// assert_eq!(overlay.to_string(), "1X2\n");
/// assert_eq!(overlay.shade(), shade);
/// # Ok::<(), nonogram_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayGrid {
    width: usize,
    height: usize,
    cells: Vec<PhaseMark>,
}

impl OverlayGrid {
    /// Creates a grid with every cell [`PhaseMark::None`].
    #[must_use]
    pub fn blank(width: usize, height: usize) -> Self {
        Self::from_fn(width, height, |_| PhaseMark::None)
    }

    /// Builds a grid by calling `f` for every position in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonogram_core::{OverlayGrid, PhaseMark};
    ///
    /// let grid = OverlayGrid::from_fn(3, 1, |pos| PhaseMark::from_phases(pos.x() < 2, pos.x() > 0));
    /// assert_eq!(grid.to_string(), "1X2\n");
    /// ```
    #[must_use]
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(Position) -> PhaseMark,
    {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Position::new(x, y)))
            .map(&mut f)
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Builds a grid from rows of marks.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRow`] if any row differs in length from the
    /// first one.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[PhaseMark]>,
    {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, marks) in rows.iter().enumerate() {
            let marks = marks.as_ref();
            if marks.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: marks.len(),
                });
            }
            cells.extend_from_slice(marks);
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Merges the solved shade and erase grids cell by cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SizeMismatch`] if the grids differ in size.
    pub fn combine(shade: &BoolGrid, erase: &BoolGrid) -> Result<Self, GridError> {
        if (shade.width(), shade.height()) != (erase.width(), erase.height()) {
            return Err(GridError::SizeMismatch {
                left_width: shade.width(),
                left_height: shade.height(),
                right_width: erase.width(),
                right_height: erase.height(),
            });
        }
        Ok(Self::from_fn(shade.width(), shade.height(), |pos| {
            PhaseMark::from_phases(shade[pos], erase[pos])
        }))
    }

    /// Builds a grid exposing only the shade phase.
    ///
    /// Every cell is either [`PhaseMark::Phase1Only`] or [`PhaseMark::None`].
    #[must_use]
    pub fn shade_only(shade: &BoolGrid) -> Self {
        Self::from_fn(shade.width(), shade.height(), |pos| {
            PhaseMark::from_phases(shade[pos], false)
        })
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

    /// Returns the marks of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of bounds.
    #[inline]
    #[must_use]
    pub fn row(&self, y: usize) -> &[PhaseMark] {
        assert!(y < self.height);
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Returns all marks in row-major order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[PhaseMark] {
        &self.cells
    }

    /// Projects the shade phase back to a boolean grid.
    #[must_use]
    pub fn shade(&self) -> BoolGrid {
        self.project(PhaseMark::is_shaded)
    }

    /// Projects the erase phase back to a boolean grid.
    #[must_use]
    pub fn erase(&self) -> BoolGrid {
        self.project(PhaseMark::is_erased)
    }

    fn project(&self, f: fn(PhaseMark) -> bool) -> BoolGrid {
        let cells = self.cells.iter().copied().map(f).collect();
        BoolGrid::from_cells(self.width, self.height, cells)
    }
}

impl Index<Position> for OverlayGrid {
    type Output = PhaseMark;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        assert!(pos.x() < self.width && pos.y() < self.height);
        &self.cells[pos.index(self.width)]
    }
}

impl Display for OverlayGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for mark in self.row(y) {
                f.write_char(mark.symbol())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
