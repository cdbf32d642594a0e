//! Parallel maze generation orchestration.
//!
//! Generation runs in three phases:
//!
//! 1. **Carve**: the grid is split into sections and one worker thread per
//!    section grows a randomized depth-first spanning tree from the
//!    section seed. Wall mutation is serialized through a shared mutex;
//!    workers are joined before anything else happens (fork-join barrier).
//! 2. **Stitch**: each edge-adjacent section pair gets 1-3 random mirrored
//!    wall removals along the shared boundary.
//! 3. **Repair** (optional): random stitching alone does not prove full
//!    connectivity, so a breadth-first reachability check runs from the
//!    anchor cell and carves deterministic links until every cell is
//!    reachable. Disconnections are logged, never silently accepted.
//!
//! Workers publish carve events over a channel so a caller can observe
//! live progress without touching the grid lock.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::grid::{CellCoord, Grid};

use super::carver::carve_from;
use super::section::{adjacent_pairs, partition};
use super::GenerateEvent;

/// Configuration for the maze generator.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Parallel carve workers; the section tiling is sized from this.
    pub workers: usize,
    /// Minimum boundary links per adjacent section pair.
    pub stitch_min: usize,
    /// Maximum boundary links per adjacent section pair.
    pub stitch_max: usize,
    /// Random seed for reproducibility.
    /// 0 = use entropy-based seed (non-deterministic).
    pub seed: u64,
    /// Verify reachability after stitching and carve repair links until
    /// the maze is fully connected.
    pub repair_connectivity: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            stitch_min: 1,
            stitch_max: 3,
            seed: 0,
            repair_connectivity: true,
        }
    }
}

/// Summary of one generation run.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenerateStats {
    /// Sections in the tiling (including degenerate ones).
    pub sections: usize,
    /// Walls removed by depth-first carving.
    pub carved: usize,
    /// Walls removed while stitching section boundaries.
    pub stitched: usize,
    /// Walls removed by the connectivity repair pass.
    pub repaired: usize,
    /// The seed actually used (resolved from entropy when configured as 0).
    pub seed: u64,
}

/// Section-parallel maze generator.
pub struct MazeGenerator {
    config: GeneratorConfig,
}

impl MazeGenerator {
    /// Create a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Carve a maze into `grid`.
    ///
    /// `anchor` is the root of the reachability check used by the repair
    /// pass (callers normally pass the search start cell).
    pub fn generate(&self, grid: &mut Grid, anchor: CellCoord) -> GenerateStats {
        self.generate_with_observer(grid, anchor, |_| {})
    }

    /// Carve a maze into `grid`, invoking `observer` for every carve,
    /// stitch, and repair event.
    ///
    /// Carve events arrive while the workers are still running, which is
    /// what makes live progress rendering possible without holding the
    /// grid lock.
    pub fn generate_with_observer(
        &self,
        grid: &mut Grid,
        anchor: CellCoord,
        mut observer: impl FnMut(&GenerateEvent),
    ) -> GenerateStats {
        let started = Instant::now();
        let size = grid.size();

        let seed = if self.config.seed == 0 {
            rand::random::<u64>()
        } else {
            self.config.seed
        };
        let mut master = StdRng::seed_from_u64(seed);

        let layout = partition(size, self.config.workers);
        let mut stats = GenerateStats {
            sections: layout.sections.len(),
            seed,
            ..Default::default()
        };

        // Per-worker seeds are drawn up front from the master stream so a
        // fixed seed reproduces the same maze for a fixed worker count.
        let worker_seeds: Vec<u64> = layout.sections.iter().map(|_| master.gen()).collect();

        let shared = Arc::new(Mutex::new(std::mem::take(grid)));
        let (tx, rx) = crossbeam_channel::unbounded();

        let mut handles = Vec::new();
        for (idx, section) in layout.sections.iter().enumerate() {
            let Some(seed_cell) = section.seed() else {
                continue;
            };
            let shared = Arc::clone(&shared);
            let events = tx.clone();
            let worker_seed = worker_seeds[idx];
            let handle = thread::Builder::new()
                .name(format!("carve-{idx}"))
                .spawn(move || {
                    let mut rng = StdRng::seed_from_u64(worker_seed);
                    carve_from(&shared, seed_cell, &mut rng, &events);
                })
                .expect("Failed to spawn carve worker");
            handles.push(handle);
        }
        drop(tx);

        // Forward live carve events; the loop ends once every worker has
        // dropped its sender.
        for event in rx {
            stats.carved += 1;
            observer(&event);
        }

        for handle in handles {
            if handle.join().is_err() {
                log::warn!("carve worker panicked");
            }
        }

        let mut grid_out = match Arc::try_unwrap(shared) {
            Ok(mutex) => mutex.into_inner(),
            // Unreachable after the join barrier, but don't lose the grid.
            Err(arc) => arc.lock().clone(),
        };

        stats.stitched = self.stitch(&mut grid_out, &layout, &mut master, &mut observer);

        if self.config.repair_connectivity {
            stats.repaired = repair_connectivity(&mut grid_out, anchor, &mut observer);
        }

        grid_out.clear_carved();
        *grid = grid_out;

        log::info!(
            "generated {size}x{size} maze: {} sections, {} carved + {} stitched + {} repaired walls, seed {} ({:.1?})",
            stats.sections,
            stats.carved,
            stats.stitched,
            stats.repaired,
            stats.seed,
            started.elapsed()
        );
        stats
    }

    /// Remove 1-3 random boundary walls between each adjacent section pair.
    fn stitch(
        &self,
        grid: &mut Grid,
        layout: &super::section::SectionLayout,
        rng: &mut StdRng,
        observer: &mut impl FnMut(&GenerateEvent),
    ) -> usize {
        let mut stitched = 0;
        for edge in adjacent_pairs(layout) {
            let span = edge.cells.len();
            let want = rng
                .gen_range(self.config.stitch_min..=self.config.stitch_max)
                .min(span);

            let mut indices: Vec<usize> = (0..span).collect();
            indices.shuffle(rng);
            for &k in indices.iter().take(want) {
                let (a, b) = edge.cells[k];
                // The carvers may already have crossed here.
                if grid.remove_wall_between(a, b) {
                    stitched += 1;
                    observer(&GenerateEvent::Stitched { from: a, to: b });
                }
            }
        }
        stitched
    }
}

/// Carve links until every cell is reachable from `anchor`.
///
/// Repeatedly runs a breadth-first sweep over open walls; whenever
/// unreached cells remain, the first unreached cell (row-major) that
/// touches a reached one gets the separating wall removed. Terminates
/// because every pass strictly grows the reached set.
fn repair_connectivity(
    grid: &mut Grid,
    anchor: CellCoord,
    observer: &mut impl FnMut(&GenerateEvent),
) -> usize {
    let mut repaired = 0;
    loop {
        let reached = reachable_from(grid, anchor);
        if reached.len() == grid.cell_count() {
            break;
        }

        let link = grid.coords().find_map(|coord| {
            if reached.contains(&coord) {
                return None;
            }
            grid.adjacent(coord)
                .into_iter()
                .find(|n| reached.contains(n))
                .map(|n| (coord, n))
        });

        match link {
            Some((unreached, reached_neighbor)) => {
                log::warn!(
                    "maze disconnected after stitching; carving repair link {unreached:?} -> {reached_neighbor:?}"
                );
                grid.remove_wall_between(unreached, reached_neighbor);
                observer(&GenerateEvent::Repaired {
                    from: reached_neighbor,
                    to: unreached,
                });
                repaired += 1;
            }
            None => {
                // Impossible on a square grid: any proper subset of cells
                // has an adjacent cell outside it.
                log::error!("connectivity repair found no candidate link");
                break;
            }
        }
    }
    repaired
}

/// Cells reachable from `origin` through open walls.
fn reachable_from(grid: &Grid, origin: CellCoord) -> HashSet<CellCoord> {
    let mut reached = HashSet::new();
    let mut queue = VecDeque::new();
    reached.insert(origin);
    queue.push_back(origin);
    while let Some(current) = queue.pop_front() {
        for neighbor in grid.neighbors(current) {
            if reached.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    reached
}
