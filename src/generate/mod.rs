//! Parallel, section-based maze generation.

mod carver;
mod generator;
mod section;

pub use generator::{GenerateStats, GeneratorConfig, MazeGenerator};
pub use section::{adjacent_pairs, partition, Section, SectionLayout, SharedEdge};

use crate::grid::CellCoord;

/// One observable step of maze generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateEvent {
    /// A depth-first carve step removed the wall between two cells.
    Carved {
        /// Cell the carver stood on.
        from: CellCoord,
        /// Newly claimed cell.
        to: CellCoord,
    },
    /// A stitching step linked two sections across their boundary.
    Stitched {
        /// Boundary cell in the first section.
        from: CellCoord,
        /// Boundary cell in the second section.
        to: CellCoord,
    },
    /// The connectivity repair pass carved a link to an unreached cell.
    Repaired {
        /// A cell already reachable from the anchor.
        from: CellCoord,
        /// The previously unreachable cell.
        to: CellCoord,
    },
}
