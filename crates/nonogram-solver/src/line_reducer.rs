use nonogram_core::{CellState, Clues};

use crate::arrangements;

/// Forces every cell on which all arrangements compatible with `line` agree.
///
/// An arrangement is compatible when it matches `line` at every decided cell.
/// Cells on which the compatible arrangements disagree keep their current
/// state. Blank clues reduce to an all-empty line whatever the line holds.
/// When no arrangement is compatible the line is returned unchanged, which the
/// caller sees as "no progress"; use [`try_reduce_line`] to tell the two
/// apart.
///
/// # Examples
///
/// ```
/// use nonogram_core::{CellState::*, Clues};
/// use nonogram_solver::reduce_line;
///
/// let reduced = reduce_line(&Clues::new([3])?, &[Unknown; 5]);
/// assert_eq!(reduced, [Unknown, Unknown, Filled, Unknown, Unknown]);
///
/// let reduced = reduce_line(&Clues::new([0])?, &[Filled, Unknown, Empty]);
/// assert_eq!(reduced, [Empty, Empty, Empty]);
/// # Ok::<(), nonogram_core::ClueError>(())
/// ```
#[must_use]
pub fn reduce_line(clues: &Clues, line: &[CellState]) -> Vec<CellState> {
    if clues.is_blank() {
        return vec![CellState::Empty; line.len()];
    }
    try_reduce_line(clues, line).unwrap_or_else(|| line.to_vec())
}

/// Like [`reduce_line`], but returns `None` when no arrangement is compatible
/// with `line`.
///
/// Decided cells are never changed: a blank clue sequence over a line that
/// already holds a filled cell is reported as a contradiction.
#[must_use]
pub fn try_reduce_line(clues: &Clues, line: &[CellState]) -> Option<Vec<CellState>> {
    let mut compatible = arrangements(clues, line.len())
        .into_iter()
        .filter(|arrangement| is_compatible(line, arrangement));

    let first = compatible.next()?;
    let mut agreed = first.into_iter().map(CellState::from).collect::<Vec<_>>();
    for arrangement in compatible {
        for (cell, filled) in agreed.iter_mut().zip(arrangement) {
            if cell.to_bool() != Some(filled) {
                *cell = CellState::Unknown;
            }
        }
    }
    Some(agreed)
}

fn is_compatible(line: &[CellState], arrangement: &[bool]) -> bool {
    line.iter()
        .zip(arrangement)
        .all(|(cell, &filled)| cell.to_bool().is_none_or(|known| known == filled))
}
