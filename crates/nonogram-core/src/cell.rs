//! Cell state representation.

/// The state of a single cell while a puzzle is being solved.
///
/// # Examples
///
/// ```
/// use nonogram_core::CellState;
///
/// assert_eq!(CellState::from(true), CellState::Filled);
/// assert_eq!(CellState::Empty.to_bool(), Some(false));
/// assert_eq!(CellState::Unknown.to_bool(), None);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Not decided yet.
    #[default]
    Unknown,
    /// Part of a run.
    Filled,
    /// Not part of any run.
    Empty,
}

impl CellState {
    /// Returns `true` if the cell is decided (either filled or empty).
    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns the boolean value of a decided cell, or `None` if it is unknown.
    #[inline]
    #[must_use]
    pub const fn to_bool(self) -> Option<bool> {
        match self {
            Self::Unknown => None,
            Self::Filled => Some(true),
            Self::Empty => Some(false),
        }
    }
}

impl From<bool> for CellState {
    #[inline]
    fn from(filled: bool) -> Self {
        if filled { Self::Filled } else { Self::Empty }
    }
}
