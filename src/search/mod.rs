//! Bidirectional best-first search and path reconstruction.

mod engine;
mod frontier;
mod heuristic;
mod path;

pub use engine::{
    BidirectionalSearch, SearchConfig, SearchDirection, SearchStats, SearchStatus,
};
pub use heuristic::Heuristic;
pub use path::{path_is_open, reconstruct};
