//! Distance heuristics for the bidirectional search.

use std::f32::consts::SQRT_2;

use crate::grid::CellCoord;

/// Remaining-distance estimate used to order frontier expansion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Heuristic {
    /// Plain Manhattan distance. Admissible on a 4-connected grid and
    /// the safe default.
    Manhattan,
    /// Diagonal-aware adjustment:
    /// `weight * manhattan - (sqrt(2) - 2) * min(d_row, d_col)`.
    ///
    /// The correction targets 8-connected grids; on this 4-connected
    /// grid it would overestimate, so the estimate is capped at the
    /// Manhattan distance to stay admissible.
    DiagonalAdjusted {
        /// Multiplier applied to the Manhattan term.
        weight: f32,
    },
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Manhattan
    }
}

impl Heuristic {
    /// Estimated remaining cost from `from` to `target`.
    ///
    /// Never exceeds the Manhattan distance, which on a 4-connected grid
    /// with unit edges never exceeds the true remaining cost.
    pub fn estimate(&self, from: CellCoord, target: CellCoord) -> f32 {
        let manhattan = from.manhattan_distance(&target) as f32;
        match *self {
            Heuristic::Manhattan => manhattan,
            Heuristic::DiagonalAdjusted { weight } => {
                let (d_row, d_col) = from.axis_deltas(&target);
                let diagonal = d_row.min(d_col) as f32;
                let adjusted = weight * manhattan - (SQRT_2 - 2.0) * diagonal;
                adjusted.min(manhattan).max(0.0)
            }
        }
    }
}
