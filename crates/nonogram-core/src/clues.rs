//! Clue sequences.

use std::fmt::{self, Display};

use tinyvec::TinyVec;

use crate::{CellState, ClueError};

type Runs = TinyVec<[usize; 8]>;

/// The clue sequence of one line: the lengths of its filled runs, in order.
///
/// Runs must appear left-to-right (or top-to-bottom) in the given order,
/// separated by at least one empty cell. The sequences `[]` and `[0]` both
/// describe a line without filled cells and normalize to the same *blank*
/// value.
///
/// # Examples
///
/// ```
/// use nonogram_core::Clues;
///
/// let clues = Clues::new([2, 1])?;
/// assert_eq!(clues.runs(), &[2, 1]);
/// assert_eq!(clues.filled_count(), 3);
/// assert_eq!(clues.min_length(), 4);
/// assert_eq!(clues.to_string(), "2 1");
///
/// assert_eq!(Clues::new([0])?, Clues::blank());
/// assert!(Clues::new([1, 0]).is_err());
/// # Ok::<(), nonogram_core::ClueError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clues {
    runs: Runs,
}

impl Clues {
    /// Creates a clue sequence from run lengths.
    ///
    /// `[]` and `[0]` produce the blank sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ClueError::ZeroLengthRun`] if a zero appears in a sequence
    /// with more than one run.
    pub fn new<I>(runs: I) -> Result<Self, ClueError>
    where
        I: IntoIterator<Item = usize>,
    {
        let runs = runs.into_iter().collect::<Runs>();
        if runs.as_slice() == [0] {
            return Ok(Self::blank());
        }
        if let Some(index) = runs.iter().position(|&run| run == 0) {
            return Err(ClueError::ZeroLengthRun { index });
        }
        Ok(Self { runs })
    }

    /// Returns the clue sequence of a line without filled cells.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Derives the clue sequence describing a fully decided line.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonogram_core::Clues;
    ///
    /// let clues = Clues::from_line([true, true, false, true]);
    /// assert_eq!(clues.runs(), &[2, 1]);
    /// assert!(Clues::from_line([false, false]).is_blank());
    /// ```
    #[must_use]
    pub fn from_line<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut runs = Runs::new();
        let mut current = 0;
        for filled in cells {
            if filled {
                current += 1;
            } else if current > 0 {
                runs.push(current);
                current = 0;
            }
        }
        if current > 0 {
            runs.push(current);
        }
        Self { runs }
    }

    /// Returns the run lengths. Empty for the blank sequence.
    #[inline]
    #[must_use]
    pub fn runs(&self) -> &[usize] {
        &self.runs
    }

    /// Returns `true` if the line has no filled cells.
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns the total number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.runs.iter().sum()
    }

    /// Returns the shortest line length that can hold every run with the
    /// mandatory single-cell gaps between them.
    #[must_use]
    pub fn min_length(&self) -> usize {
        self.filled_count() + self.runs.len().saturating_sub(1)
    }

    /// Returns `true` if the runs fit in a line of length `len`.
    #[inline]
    #[must_use]
    pub fn fits(&self, len: usize) -> bool {
        self.min_length() <= len
    }

    /// Returns `true` if the cells are all decided and their filled runs equal
    /// this sequence exactly.
    ///
    /// Any [`CellState::Unknown`] cell makes the line unsatisfied.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonogram_core::{CellState::*, Clues};
    ///
    /// let clues = Clues::new([1, 1])?;
    /// assert!(clues.is_satisfied_by([Filled, Empty, Filled]));
    /// assert!(!clues.is_satisfied_by([Filled, Filled, Empty]));
    /// assert!(!clues.is_satisfied_by([Filled, Empty, Unknown]));
    /// # Ok::<(), nonogram_core::ClueError>(())
    /// ```
    pub fn is_satisfied_by<I>(&self, cells: I) -> bool
    where
        I: IntoIterator<Item = CellState>,
    {
        let mut expected = self.runs.iter().copied();
        let mut current = 0;
        for cell in cells {
            match cell {
                CellState::Unknown => return false,
                CellState::Filled => current += 1,
                CellState::Empty => {
                    if current > 0 {
                        if expected.next() != Some(current) {
                            return false;
                        }
                        current = 0;
                    }
                }
            }
        }
        if current > 0 && expected.next() != Some(current) {
            return false;
        }
        expected.next().is_none()
    }
}

impl Display for Clues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.runs.split_first() else {
            return write!(f, "0");
        };
        write!(f, "{first}")?;
        for run in rest {
            write!(f, " {run}")?;
        }
        Ok(())
    }
}

impl TryFrom<&[usize]> for Clues {
    type Error = ClueError;

    fn try_from(runs: &[usize]) -> Result<Self, Self::Error> {
        Self::new(runs.iter().copied())
    }
}
