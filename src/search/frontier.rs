//! Best-first frontier for one search direction.
//!
//! The heap orders entries by priority ascending with FIFO tie-breaking:
//! each push gets a monotonically increasing sequence number, and among
//! equal priorities the lower sequence pops first. Improved costs are
//! handled by lazy deletion rather than decrease-key: a popped entry
//! whose recorded cost no longer matches the best known cost is stale
//! and must be skipped by the caller.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::grid::CellCoord;

/// One heap entry.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    /// Cost-plus-heuristic priority.
    pub priority: f32,
    /// Accumulated cost at push time; used for the staleness check.
    pub cost: u32,
    /// The candidate cell.
    pub cell: CellCoord,
    seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (lower priority pops first);
        // reverse the sequence too so equal priorities pop FIFO.
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue plus the per-direction cost and predecessor maps.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
    cost: HashMap<CellCoord, u32>,
    predecessor: HashMap<CellCoord, CellCoord>,
}

impl Frontier {
    /// A frontier seeded at `origin` with cost 0 and the given priority.
    pub fn seeded(origin: CellCoord, priority: f32) -> Self {
        let mut frontier = Self::default();
        frontier.cost.insert(origin, 0);
        frontier.push(origin, 0, priority);
        frontier
    }

    /// Push a candidate entry.
    pub fn push(&mut self, cell: CellCoord, cost: u32, priority: f32) {
        self.heap.push(FrontierEntry {
            priority,
            cost,
            cell,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    /// Pop the lowest-priority entry, FIFO among ties.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    /// Record an improved cost and its predecessor.
    pub fn record(&mut self, cell: CellCoord, cost: u32, predecessor: CellCoord) {
        self.cost.insert(cell, cost);
        self.predecessor.insert(cell, predecessor);
    }

    /// Best known cost for a cell.
    pub fn cost_of(&self, cell: CellCoord) -> Option<u32> {
        self.cost.get(&cell).copied()
    }

    /// Has this direction reached the cell at all?
    pub fn has_reached(&self, cell: CellCoord) -> bool {
        self.cost.contains_key(&cell)
    }

    /// Predecessor on the best known route; `None` at the origin.
    pub fn predecessor_of(&self, cell: CellCoord) -> Option<CellCoord> {
        self.predecessor.get(&cell).copied()
    }

    /// No entries left to pop.
    pub fn is_exhausted(&self) -> bool {
        self.heap.is_empty()
    }

    /// Cells with a recorded cost.
    pub fn reached_count(&self) -> usize {
        self.cost.len()
    }
}
