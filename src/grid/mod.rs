//! Grid data model: cells, wall flags, and the N x N storage.

mod cell;
mod storage;

pub use cell::{Cell, CellCoord, CellRole, Direction};
pub use storage::Grid;
