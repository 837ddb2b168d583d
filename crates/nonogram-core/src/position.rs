//! Cell positions and line identifiers.

/// A cell position, with `x` counting columns from the left and `y` counting
/// rows from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({x}, {y})")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    #[inline]
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column index.
    #[inline]
    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the row index.
    #[inline]
    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }

    /// Returns the row-major index of this position in a grid of the given width.
    #[inline]
    #[must_use]
    pub const fn index(self, width: usize) -> usize {
        self.y * width + self.x
    }

    /// Returns the position at a row-major index in a grid of the given width.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize, width: usize) -> Self {
        Self::new(index % width, index / width)
    }
}

/// A row or a column of a grid.
///
/// # Examples
///
/// ```
/// use nonogram_core::{Line, Position};
///
/// assert_eq!(Line::Row { y: 2 }.position(4), Position::new(4, 2));
/// assert_eq!(Line::Column { x: 1 }.position(3), Position::new(1, 3));
/// assert_eq!(Line::Column { x: 1 }.to_string(), "column 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Line {
    /// A row identified by its y coordinate.
    #[display("row {y}")]
    Row {
        /// Row index.
        y: usize,
    },
    /// A column identified by its x coordinate.
    #[display("column {x}")]
    Column {
        /// Column index.
        x: usize,
    },
}

impl Line {
    /// Converts a cell index within the line into an absolute [`Position`].
    #[inline]
    #[must_use]
    pub const fn position(self, i: usize) -> Position {
        match self {
            Line::Row { y } => Position::new(i, y),
            Line::Column { x } => Position::new(x, i),
        }
    }

    /// Returns the number of cells in this line for a grid of the given size.
    #[inline]
    #[must_use]
    pub const fn len(self, width: usize, height: usize) -> usize {
        match self {
            Line::Row { .. } => width,
            Line::Column { .. } => height,
        }
    }
}
