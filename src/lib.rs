//! # VyuhaMaze
//!
//! Parallel maze generation and bidirectional best-first search on a
//! fixed 4-connected N x N grid.
//!
//! ## Overview
//!
//! VyuhaMaze carves a spanning maze by splitting the grid into sections,
//! growing a randomized depth-first tree inside each section on its own
//! worker thread, and stitching the sections together with random
//! boundary links. Search then runs two best-first frontiers toward each
//! other, start-to-goal and goal-to-start, alternating batched turns
//! until one side pops a cell the other side has already reached.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vyuha_maze::{Maze, SearchOutcome, VyuhaConfig};
//!
//! let mut config = VyuhaConfig::default();
//! config.grid.size = 25;
//! config.generator.seed = 42;
//!
//! let mut maze = Maze::new(config)?;
//! maze.generate();
//!
//! match maze.solve() {
//!     SearchOutcome::Path { cells, .. } => println!("path of {} cells", cells.len()),
//!     SearchOutcome::NoPath { .. } => println!("start and goal are disconnected"),
//! }
//! ```
//!
//! ## Coordinate System
//!
//! Cells are addressed as (row, col) with row 0 at the top and column 0
//! at the left. A wall between two adjacent cells is always mirrored on
//! both sides; the grid API keeps that invariant.

#![warn(missing_docs)]

// Grid data model
pub mod grid;

// Parallel section carving and stitching
pub mod generate;

// Bidirectional search engine
pub mod search;

// Unified configuration
pub mod config;

// Error types
pub mod error;

// Re-export commonly used types
pub use config::{GeneratorSection, GridSection, SearchSection, VyuhaConfig};
pub use error::{Result, VyuhaError};
pub use generate::{GenerateEvent, GenerateStats, GeneratorConfig, MazeGenerator};
pub use grid::{Cell, CellCoord, CellRole, Direction, Grid};
pub use search::{
    BidirectionalSearch, Heuristic, SearchConfig, SearchStats, SearchStatus,
};

/// Result of a solve call.
///
/// A missing path is a normal outcome, not an error: it only happens
/// when start and goal are genuinely disconnected.
#[derive(Clone, Debug)]
pub enum SearchOutcome {
    /// A path was found.
    Path {
        /// Ordered cells from start to goal inclusive.
        cells: Vec<CellCoord>,
        /// The cell where the two frontiers met.
        meeting: CellCoord,
        /// Search counters.
        stats: SearchStats,
    },
    /// Both frontiers exhausted without meeting.
    NoPath {
        /// Search counters.
        stats: SearchStats,
    },
}

impl SearchOutcome {
    /// The solved path, if one was found.
    pub fn path(&self) -> Option<&[CellCoord]> {
        match self {
            SearchOutcome::Path { cells, .. } => Some(cells),
            SearchOutcome::NoPath { .. } => None,
        }
    }
}

/// The maze aggregate: grid, endpoints, and the solved path.
///
/// This is the primary type for interacting with the crate. It owns the
/// grid exclusively and is the unit of lifecycle: [`Maze::reset`]
/// re-creates the grid and clears all generation and search state.
pub struct Maze {
    grid: Grid,
    start: CellCoord,
    goal: CellCoord,
    path: Vec<CellCoord>,
    generator_config: GeneratorConfig,
    search_config: SearchConfig,
}

impl Maze {
    /// Create a fully walled maze from configuration.
    ///
    /// All configuration errors are reported here, before any work
    /// begins: non-positive grid size, out-of-bounds or coincident
    /// endpoints, zero workers or batch size, an inverted stitch range,
    /// and unknown heuristic names.
    pub fn new(config: VyuhaConfig) -> Result<Self> {
        let size = config.grid.size;
        if size == 0 {
            return Err(VyuhaError::Config("grid size must be positive".into()));
        }

        let start = cell_from_pair(config.grid.start.unwrap_or([0, 0]));
        let goal = cell_from_pair(config.grid.goal.unwrap_or([size - 1, size - 1]));
        for (name, cell) in [("start", start), ("goal", goal)] {
            if cell.row >= size || cell.col >= size {
                return Err(VyuhaError::Config(format!(
                    "{name} cell {cell:?} is outside the {size}x{size} grid"
                )));
            }
        }
        if start == goal {
            return Err(VyuhaError::Config(
                "start and goal must be distinct cells".into(),
            ));
        }

        if config.generator.workers == 0 {
            return Err(VyuhaError::Config("worker count must be positive".into()));
        }
        if config.generator.stitch_min == 0
            || config.generator.stitch_min > config.generator.stitch_max
        {
            return Err(VyuhaError::Config(format!(
                "invalid stitch range {}..={}",
                config.generator.stitch_min, config.generator.stitch_max
            )));
        }
        if config.search.batch_size == 0 {
            return Err(VyuhaError::Config("batch size must be positive".into()));
        }

        let generator_config = config.generator.to_generator_config();
        let search_config = config.search.to_search_config()?;

        let mut grid = Grid::new(size);
        grid.set_role(start, CellRole::Start);
        grid.set_role(goal, CellRole::Goal);

        Ok(Self {
            grid,
            start,
            goal,
            path: Vec::new(),
            generator_config,
            search_config,
        })
    }

    /// Read access to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The search start cell.
    pub fn start(&self) -> CellCoord {
        self.start
    }

    /// The search goal cell.
    pub fn goal(&self) -> CellCoord {
        self.goal
    }

    /// The solved path; empty until a solve succeeds.
    pub fn path(&self) -> &[CellCoord] {
        &self.path
    }

    /// Carve the maze in place.
    pub fn generate(&mut self) -> GenerateStats {
        self.generate_with_observer(|_| {})
    }

    /// Carve the maze, forwarding generation events to `observer`.
    pub fn generate_with_observer(
        &mut self,
        observer: impl FnMut(&GenerateEvent),
    ) -> GenerateStats {
        let generator = MazeGenerator::new(self.generator_config.clone());
        generator.generate_with_observer(&mut self.grid, self.start, observer)
    }

    /// Run the bidirectional search.
    pub fn solve(&mut self) -> SearchOutcome {
        self.solve_with_observer(|_| {})
    }

    /// Run the bidirectional search, invoking `observer` after every
    /// batch with read-only engine state.
    pub fn solve_with_observer(
        &mut self,
        observer: impl FnMut(&BidirectionalSearch),
    ) -> SearchOutcome {
        let mut engine = BidirectionalSearch::new(self.search_config, self.start, self.goal);
        let status = engine.run(&self.grid, observer);
        let stats = engine.stats();

        match status {
            SearchStatus::MeetingFound(meeting) => {
                let cells = search::reconstruct(&engine, meeting);
                debug_assert!(search::path_is_open(&self.grid, &cells));

                self.grid.clear_roles();
                for &cell in &cells {
                    self.grid.set_role(cell, CellRole::Path);
                }
                self.grid.set_role(self.start, CellRole::Start);
                self.grid.set_role(self.goal, CellRole::Goal);
                self.path = cells.clone();

                log::info!(
                    "solved: {} cells, met at {:?}, {} fwd / {} bwd expansions, {} stale skips",
                    cells.len(),
                    meeting,
                    stats.expanded_forward,
                    stats.expanded_backward,
                    stats.stale_skipped
                );
                SearchOutcome::Path {
                    cells,
                    meeting,
                    stats,
                }
            }
            SearchStatus::Exhausted => {
                log::info!("no path between {:?} and {:?}", self.start, self.goal);
                SearchOutcome::NoPath { stats }
            }
            // run() only returns once the engine has left Running.
            SearchStatus::Running => unreachable!("engine yielded while still running"),
        }
    }

    /// Re-create the grid and clear all generation and search state.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.grid.size());
        self.path.clear();
        self.grid.set_role(self.start, CellRole::Start);
        self.grid.set_role(self.goal, CellRole::Goal);
    }
}

fn cell_from_pair(pair: [usize; 2]) -> CellCoord {
    CellCoord::new(pair[0], pair[1])
}
