//! Two-sided path reconstruction from the meeting cell.

use crate::grid::{CellCoord, Grid};

use super::engine::{BidirectionalSearch, SearchDirection};

/// Reconstruct the full start-to-goal path after a meeting was found.
///
/// Walks the forward predecessor chain from the meeting cell back to the
/// start, reverses it, then appends the backward chain out to the goal.
/// The meeting cell appears exactly once. Reconstruction only reads the
/// recorded predecessor maps, so re-running it on the same engine state
/// yields an identical path.
pub fn reconstruct(search: &BidirectionalSearch, meeting: CellCoord) -> Vec<CellCoord> {
    let forward = search.frontier(SearchDirection::Forward);
    let backward = search.frontier(SearchDirection::Backward);

    let mut path = Vec::new();
    let mut cursor = Some(meeting);
    while let Some(cell) = cursor {
        path.push(cell);
        cursor = forward.predecessor_of(cell);
    }
    path.reverse();

    let mut cursor = backward.predecessor_of(meeting);
    while let Some(cell) = cursor {
        path.push(cell);
        cursor = backward.predecessor_of(cell);
    }

    path
}

/// Check the openness invariant: every consecutive pair is one grid step
/// apart with no wall between them.
pub fn path_is_open(grid: &Grid, path: &[CellCoord]) -> bool {
    !path.is_empty()
        && path
            .windows(2)
            .all(|pair| grid.wall_open_between(pair[0], pair[1]))
}
