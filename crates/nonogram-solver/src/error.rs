use nonogram_core::PuzzleError;

/// Error returned when a backtracking search tries more candidate
/// assignments than its node limit allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("backtracking search exceeded its limit of {limit} nodes")]
pub struct SearchLimitExceeded {
    /// The configured node limit.
    pub limit: u64,
}

/// Error returned by [`BacktrackingSearch::search`](crate::BacktrackingSearch::search).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SearchError {
    /// The grid does not have the puzzle's size.
    #[display("cannot search: {_0}")]
    Puzzle(#[from] PuzzleError),
    /// The node limit was reached before the search finished.
    #[display("{_0}")]
    LimitExceeded(#[from] SearchLimitExceeded),
}
