use std::iter;

use nonogram_core::Clues;

/// Enumerates every placement of `clues` in a line of length `len`.
///
/// Each arrangement is a fully decided line (`true` = filled) whose runs,
/// read in order, equal `clues`. Blank clues have exactly one arrangement,
/// the all-empty line. When the runs and their mandatory gaps do not fit in
/// `len` cells the result is empty; callers treat that line as infeasible.
///
/// Runs are placed left to right. Run `i` may start anywhere from the current
/// cursor up to the last position that still leaves room for the remaining
/// runs and one separating cell before each of them. Every leaf of the
/// recursion yields a distinct arrangement, so no deduplication is needed.
///
/// # Examples
///
/// ```
/// use nonogram_core::Clues;
/// use nonogram_solver::arrangements;
///
/// let found = arrangements(&Clues::new([2, 1])?, 5);
/// assert_eq!(
///     found,
///     [
///         [true, true, false, true, false],
///         [true, true, false, false, true],
///         [false, true, true, false, true],
///     ],
/// );
/// assert!(arrangements(&Clues::new([3, 2])?, 5).is_empty());
/// # Ok::<(), nonogram_core::ClueError>(())
/// ```
#[must_use]
pub fn arrangements(clues: &Clues, len: usize) -> Vec<Vec<bool>> {
    if clues.is_blank() {
        return vec![vec![false; len]];
    }
    if !clues.fits(len) {
        log::trace!("clues {clues} cannot fit in {len} cells");
        return Vec::new();
    }

    let mut found = Vec::new();
    let mut line = Vec::with_capacity(len);
    place_runs(clues.runs(), len, &mut line, &mut found);
    found
}

fn place_runs(runs: &[usize], len: usize, line: &mut Vec<bool>, found: &mut Vec<Vec<bool>>) {
    let Some((&run, rest)) = runs.split_first() else {
        let mut arrangement = line.clone();
        arrangement.resize(len, false);
        found.push(arrangement);
        return;
    };

    let reserved = rest.iter().sum::<usize>() + rest.len();
    let Some(latest_start) = len.checked_sub(run + reserved) else {
        return;
    };

    let cursor = line.len();
    for start in cursor..=latest_start {
        line.resize(start, false);
        line.extend(iter::repeat_n(true, run));
        if !rest.is_empty() {
            line.push(false);
        }
        place_runs(rest, len, line, found);
        line.truncate(cursor);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::clues;

    fn binomial(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn test_blank_clues_yield_single_empty_line() {
        assert_eq!(arrangements(&Clues::blank(), 3), [[false, false, false]]);
        assert_eq!(arrangements(&clues(&[0]), 0), [Vec::<bool>::new()]);
    }

    #[test]
    fn test_single_run() {
        assert_eq!(
            arrangements(&clues(&[3]), 5),
            [
                [true, true, true, false, false],
                [false, true, true, true, false],
                [false, false, true, true, true],
            ]
        );
    }

    #[test]
    fn test_tight_fit_has_one_arrangement() {
        assert_eq!(
            arrangements(&clues(&[1, 1, 1]), 5),
            [[true, false, true, false, true]]
        );
        assert_eq!(arrangements(&clues(&[4]), 4), [[true; 4]]);
    }

    #[test]
    fn test_overlong_clues_yield_nothing() {
        assert!(arrangements(&clues(&[2, 2]), 4).is_empty());
        assert!(arrangements(&clues(&[1]), 0).is_empty());
    }

    #[test]
    fn test_arrangement_count_matches_binomial() {
        // k runs with f free cells can be placed in C(f + k, k) ways.
        for (runs, len) in [(&[1, 2][..], 8), (&[3, 1, 1][..], 10), (&[2][..], 7)] {
            let clues = clues(runs);
            let free = len - clues.min_length();
            assert_eq!(
                arrangements(&clues, len).len(),
                binomial(free + runs.len(), runs.len()),
                "clues {clues} in {len} cells"
            );
        }
    }

    #[test]
    fn test_arrangements_are_distinct() {
        let mut found = arrangements(&clues(&[1, 2, 1]), 9);
        let count = found.len();
        found.sort();
        found.dedup();
        assert_eq!(found.len(), count);
    }

    proptest! {
        #[test]
        fn arrangements_read_back_as_clues(
            runs in prop::collection::vec(1usize..5, 0..5),
            len in 0usize..14,
        ) {
            let clues = Clues::new(runs).unwrap();
            let found = arrangements(&clues, len);
            if clues.fits(len) {
                prop_assert!(!found.is_empty());
            } else {
                prop_assert!(found.is_empty());
            }
            for arrangement in &found {
                prop_assert_eq!(arrangement.len(), len);
                prop_assert_eq!(&Clues::from_line(arrangement.iter().copied()), &clues);
                prop_assert_eq!(
                    arrangement.iter().filter(|&&filled| filled).count(),
                    clues.filled_count()
                );
            }
        }
    }
}
