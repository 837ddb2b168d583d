use nonogram_core::{CellState, Grid, Line, Position, Puzzle};

use crate::{SearchError, SearchLimitExceeded};

/// Values tried for each undecided cell, in order.
const CANDIDATES: [CellState; 2] = [CellState::Empty, CellState::Filled];

/// One entry of the undo log: the cell being tried and how to restore it.
#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: Position,
    previous: CellState,
    next_candidate: usize,
}

/// Exhaustive depth-first search over the cells propagation left unknown.
///
/// The first unknown cell in row-major order is tried as empty, then as
/// filled. After each assignment, its row and column are checked against
/// their clues once they are fully decided, and the candidate is rejected if
/// either does not match. The search stops at the first grid that satisfies
/// every clue, so puzzles with several solutions yield the one that is
/// smallest when read row-major with empty before filled.
///
/// The search is iterative. Each tentative assignment pushes a [`Frame`]
/// recording the cell's previous value, and exhausted frames are restored in
/// reverse order, so the grid is always back in its starting state when the
/// search fails.
///
/// Cost is exponential in the number of unknown cells in the worst case. Use
/// [`with_node_limit`](Self::with_node_limit) to bound it.
///
/// # Examples
///
/// ```
/// use nonogram_core::{CellState, Grid, Position, Puzzle};
/// use nonogram_solver::BacktrackingSearch;
///
/// let puzzle = Puzzle::from_runs(&[[1], [1]], &[[1], [1]])?;
/// let mut grid = Grid::new(2, 2);
/// let mut search = BacktrackingSearch::new(&puzzle);
///
/// assert!(search.search(&mut grid)?);
/// assert_eq!(grid[Position::new(0, 0)], CellState::Empty);
/// assert_eq!(grid[Position::new(1, 0)], CellState::Filled);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackingSearch<'a> {
    puzzle: &'a Puzzle,
    node_limit: Option<u64>,
    nodes: u64,
}

impl<'a> BacktrackingSearch<'a> {
    /// Creates an unbounded search for `puzzle`.
    #[must_use]
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self {
            puzzle,
            node_limit: None,
            nodes: 0,
        }
    }

    /// Limits the number of tentative assignments a search may make.
    #[must_use]
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Returns the number of tentative assignments made by the last search.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Completes `grid` in place.
    ///
    /// Returns `Ok(true)` with the solution written into `grid`, or
    /// `Ok(false)` with `grid` unchanged when no completion matches the clues.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::LimitExceeded`] when the node limit is reached
    /// first, with `grid` restored to its starting state.
    /// Returns [`SearchError::Puzzle`] if `grid` does not have the puzzle's
    /// size.
    pub fn search(&mut self, grid: &mut Grid) -> Result<bool, SearchError> {
        self.puzzle.check_size(grid)?;
        Ok(self.explore(grid)?)
    }

    /// Searches a grid already known to have the puzzle's size.
    pub(crate) fn explore(&mut self, grid: &mut Grid) -> Result<bool, SearchLimitExceeded> {
        self.nodes = 0;

        let Some(first) = grid.first_unknown() else {
            return Ok(self.puzzle.is_satisfied_by(grid));
        };
        let mut frames = vec![Frame::new(first, grid[first])];

        while let Some(frame) = frames.last_mut() {
            let Some(&candidate) = CANDIDATES.get(frame.next_candidate) else {
                grid.set(frame.pos, frame.previous);
                frames.pop();
                continue;
            };
            frame.next_candidate += 1;
            let pos = frame.pos;

            if let Some(limit) = self.node_limit.filter(|&limit| self.nodes >= limit) {
                log::debug!("search gave up after {limit} nodes");
                unwind(&mut frames, grid);
                return Err(SearchLimitExceeded { limit });
            }
            self.nodes += 1;

            grid.set(pos, candidate);
            if !self.accepts(grid, pos) {
                continue;
            }

            match grid.first_unknown_from(pos.index(grid.width()) + 1) {
                Some(next) => frames.push(Frame::new(next, grid[next])),
                None if self.puzzle.is_satisfied_by(grid) => {
                    log::debug!("search found a solution after {} nodes", self.nodes);
                    return Ok(true);
                }
                None => {}
            }
        }

        log::debug!("search exhausted after {} nodes", self.nodes);
        Ok(false)
    }

    /// Returns `false` if the row or column through `pos` is fully decided
    /// and does not match its clues.
    fn accepts(&self, grid: &Grid, pos: Position) -> bool {
        [Line::Row { y: pos.y() }, Line::Column { x: pos.x() }]
            .into_iter()
            .filter(|&line| grid.is_line_complete(line))
            .all(|line| self.puzzle.clues(line).is_satisfied_by(grid.line_cells(line)))
    }
}

impl Frame {
    fn new(pos: Position, previous: CellState) -> Self {
        Self {
            pos,
            previous,
            next_candidate: 0,
        }
    }
}

fn unwind(frames: &mut Vec<Frame>, grid: &mut Grid) {
    for frame in frames.drain(..).rev() {
        grid.set(frame.pos, frame.previous);
    }
}
