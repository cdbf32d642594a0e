//! Turn-alternating bidirectional best-first search.
//!
//! Two frontiers expand toward each other: FORWARD from the start with a
//! to-goal heuristic, BACKWARD from the goal with a to-start heuristic.
//! The engine alternates turns, each turn popping at most `batch_size`
//! entries for the active direction, then returns control to the caller.
//! That batch boundary is the only suspension point: an observer can
//! render progress or stop issuing turns there.
//!
//! A meeting is declared the first time either side pops a cell the
//! other side has already reached; the two sides never need to pop the
//! same cell simultaneously. Both frontiers running dry without a
//! meeting means no path exists.

use crate::grid::{CellCoord, Grid};

use super::frontier::Frontier;
use super::heuristic::Heuristic;

/// Configuration for the bidirectional search engine.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    /// Maximum frontier pops per turn before control returns to the
    /// caller. Bounds work between observer callbacks.
    pub batch_size: usize,
    /// Remaining-distance estimate.
    pub heuristic: Heuristic,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            batch_size: 64,
            heuristic: Heuristic::Manhattan,
        }
    }
}

/// Which frontier a turn belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchDirection {
    /// Start-to-goal frontier.
    Forward,
    /// Goal-to-start frontier.
    Backward,
}

impl SearchDirection {
    fn flip(self) -> Self {
        match self {
            SearchDirection::Forward => SearchDirection::Backward,
            SearchDirection::Backward => SearchDirection::Forward,
        }
    }
}

/// Engine state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SearchStatus {
    /// At least one frontier still has work.
    Running,
    /// One side popped a cell the other side had reached.
    MeetingFound(CellCoord),
    /// Both frontiers exhausted without meeting; no path exists.
    Exhausted,
}

/// Counters accumulated over a search run.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Cells expanded by the forward frontier.
    pub expanded_forward: usize,
    /// Cells expanded by the backward frontier.
    pub expanded_backward: usize,
    /// Stale queue entries skipped (lazy deletion).
    pub stale_skipped: usize,
    /// Turns processed.
    pub batches: usize,
}

/// Bidirectional best-first search over a carved grid.
pub struct BidirectionalSearch {
    config: SearchConfig,
    start: CellCoord,
    goal: CellCoord,
    forward: Frontier,
    backward: Frontier,
    turn: SearchDirection,
    status: SearchStatus,
    stats: SearchStats,
}

impl BidirectionalSearch {
    /// Set up both frontiers for a start-to-goal search.
    ///
    /// The caller is responsible for bounds-checking start and goal (the
    /// `Maze` aggregate does this at construction).
    pub fn new(config: SearchConfig, start: CellCoord, goal: CellCoord) -> Self {
        let forward = Frontier::seeded(start, config.heuristic.estimate(start, goal));
        let backward = Frontier::seeded(goal, config.heuristic.estimate(goal, start));
        Self {
            config,
            start,
            goal,
            forward,
            backward,
            turn: SearchDirection::Forward,
            status: SearchStatus::Running,
            stats: SearchStats::default(),
        }
    }

    /// Current engine state.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Accumulated counters.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The direction that will act on the next turn.
    pub fn next_turn(&self) -> SearchDirection {
        self.turn
    }

    /// Cells reached so far as (forward, backward) counts.
    pub fn reached_counts(&self) -> (usize, usize) {
        (self.forward.reached_count(), self.backward.reached_count())
    }

    pub(crate) fn frontier(&self, direction: SearchDirection) -> &Frontier {
        match direction {
            SearchDirection::Forward => &self.forward,
            SearchDirection::Backward => &self.backward,
        }
    }

    /// Process one batch of pops for the active direction, then yield.
    ///
    /// Returns the status after the turn; once the status leaves
    /// `Running` further calls are no-ops.
    pub fn step_turn(&mut self, grid: &Grid) -> SearchStatus {
        if self.status != SearchStatus::Running {
            return self.status;
        }

        let heuristic = self.config.heuristic;
        let target = match self.turn {
            SearchDirection::Forward => self.goal,
            SearchDirection::Backward => self.start,
        };

        let mut expanded = 0usize;
        let mut stale = 0usize;
        let mut meeting = None;
        {
            let (active, other) = match self.turn {
                SearchDirection::Forward => (&mut self.forward, &self.backward),
                SearchDirection::Backward => (&mut self.backward, &self.forward),
            };

            for _ in 0..self.config.batch_size {
                let Some(entry) = active.pop() else {
                    break;
                };

                // Lazy deletion: a better route to this cell was recorded
                // after the entry was pushed.
                if active.cost_of(entry.cell) != Some(entry.cost) {
                    stale += 1;
                    continue;
                }

                if other.has_reached(entry.cell) {
                    meeting = Some(entry.cell);
                    break;
                }

                expanded += 1;
                for neighbor in grid.neighbors(entry.cell) {
                    let tentative = entry.cost + 1;
                    let improved = active.cost_of(neighbor).is_none_or(|c| tentative < c);
                    if improved {
                        active.record(neighbor, tentative, entry.cell);
                        let priority = tentative as f32 + heuristic.estimate(neighbor, target);
                        active.push(neighbor, tentative, priority);
                    }
                }
            }
        }

        match self.turn {
            SearchDirection::Forward => self.stats.expanded_forward += expanded,
            SearchDirection::Backward => self.stats.expanded_backward += expanded,
        }
        self.stats.stale_skipped += stale;
        self.stats.batches += 1;

        if let Some(cell) = meeting {
            log::debug!(
                "frontiers met at {cell:?} after {} batches ({} fwd / {} bwd expansions)",
                self.stats.batches,
                self.stats.expanded_forward,
                self.stats.expanded_backward
            );
            self.status = SearchStatus::MeetingFound(cell);
        } else if self.forward.is_exhausted() && self.backward.is_exhausted() {
            log::debug!("both frontiers exhausted; no path exists");
            self.status = SearchStatus::Exhausted;
        }

        self.turn = self.turn.flip();
        self.status
    }

    /// Run turns to completion, invoking `observer` after every batch
    /// with read-only engine state.
    pub fn run(&mut self, grid: &Grid, mut observer: impl FnMut(&Self)) -> SearchStatus {
        while self.status == SearchStatus::Running {
            self.step_turn(grid);
            observer(self);
        }
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Grid with every interior wall removed.
    fn open_grid(size: usize) -> Grid {
        let mut grid = Grid::new(size);
        for row in 0..size {
            for col in 0..size {
                let here = CellCoord::new(row, col);
                if col + 1 < size {
                    grid.remove_wall_between(here, CellCoord::new(row, col + 1));
                }
                if row + 1 < size {
                    grid.remove_wall_between(here, CellCoord::new(row + 1, col));
                }
            }
        }
        grid
    }

    #[test]
    fn test_turns_alternate() {
        let grid = open_grid(8);
        let mut search = BidirectionalSearch::new(
            SearchConfig {
                batch_size: 1,
                ..Default::default()
            },
            CellCoord::new(0, 0),
            CellCoord::new(7, 7),
        );

        assert_eq!(search.next_turn(), SearchDirection::Forward);
        search.step_turn(&grid);
        assert_eq!(search.next_turn(), SearchDirection::Backward);
        search.step_turn(&grid);
        assert_eq!(search.next_turn(), SearchDirection::Forward);
    }

    #[test]
    fn test_open_grid_finds_meeting() {
        let grid = open_grid(5);
        let mut search = BidirectionalSearch::new(
            SearchConfig::default(),
            CellCoord::new(0, 0),
            CellCoord::new(4, 4),
        );
        let status = search.run(&grid, |_| {});
        assert!(matches!(status, SearchStatus::MeetingFound(_)));
    }

    #[test]
    fn test_fully_walled_grid_exhausts() {
        let grid = Grid::new(5);
        let mut search = BidirectionalSearch::new(
            SearchConfig::default(),
            CellCoord::new(0, 0),
            CellCoord::new(4, 4),
        );
        let status = search.run(&grid, |_| {});
        assert_eq!(status, SearchStatus::Exhausted);
        // Only the two seeds ever popped; nothing expanded past them.
        assert_eq!(search.stats().expanded_forward, 1);
        assert_eq!(search.stats().expanded_backward, 1);
    }

    #[test]
    fn test_observer_called_per_batch() {
        let grid = open_grid(6);
        let mut search = BidirectionalSearch::new(
            SearchConfig {
                batch_size: 2,
                ..Default::default()
            },
            CellCoord::new(0, 0),
            CellCoord::new(5, 5),
        );
        let mut calls = 0usize;
        search.run(&grid, |_| calls += 1);
        assert_eq!(calls, search.stats().batches);
        assert!(calls > 1);
    }

    #[test]
    fn test_finished_engine_ignores_further_turns() {
        let grid = open_grid(4);
        let mut search = BidirectionalSearch::new(
            SearchConfig::default(),
            CellCoord::new(0, 0),
            CellCoord::new(3, 3),
        );
        let final_status = search.run(&grid, |_| {});
        let batches = search.stats().batches;

        assert_eq!(search.step_turn(&grid), final_status);
        assert_eq!(search.stats().batches, batches);
    }
}
