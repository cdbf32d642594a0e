//! Shared helpers for VyuhaMaze integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use vyuha_maze::{CellCoord, Grid, VyuhaConfig};

/// Breadth-first distances (in steps) from `origin` over open walls.
///
/// Independent oracle for shortest paths: no heuristic, no priorities.
pub fn bfs_distances(grid: &Grid, origin: CellCoord) -> HashMap<CellCoord, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(origin, 0);
    queue.push_back(origin);
    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        for neighbor in grid.neighbors(current) {
            if !dist.contains_key(&neighbor) {
                dist.insert(neighbor, d + 1);
                queue.push_back(neighbor);
            }
        }
    }
    dist
}

/// Shortest-path length in steps, if `to` is reachable from `from`.
pub fn bfs_distance(grid: &Grid, from: CellCoord, to: CellCoord) -> Option<usize> {
    bfs_distances(grid, from).get(&to).copied()
}

/// Number of cells reachable from `origin`.
pub fn reached_count(grid: &Grid, origin: CellCoord) -> usize {
    bfs_distances(grid, origin).len()
}

/// Grid with every interior wall removed.
pub fn open_grid(size: usize) -> Grid {
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

/// The cells of an L-shaped corridor: along row 0, then down the last
/// column. This is the only open route in [`l_corridor`].
pub fn l_corridor_cells(size: usize) -> Vec<CellCoord> {
    let mut cells: Vec<CellCoord> = (0..size).map(|col| CellCoord::new(0, col)).collect();
    cells.extend((1..size).map(|row| CellCoord::new(row, size - 1)));
    cells
}

/// Grid whose only open walls form the L-shaped corridor from (0,0) to
/// (size-1, size-1). When `gap` is set, the corridor link at that index
/// is left walled, disconnecting start from goal.
pub fn l_corridor(size: usize, gap: Option<usize>) -> Grid {
    let mut grid = Grid::new(size);
    let cells = l_corridor_cells(size);
    for (i, pair) in cells.windows(2).enumerate() {
        if gap == Some(i) {
            continue;
        }
        grid.remove_wall_between(pair[0], pair[1]);
    }
    grid
}

/// Config for an `size` x `size` maze with corner endpoints.
pub fn maze_config(size: usize, workers: usize, seed: u64) -> VyuhaConfig {
    let mut config = VyuhaConfig::default();
    config.grid.size = size;
    config.generator.workers = workers;
    config.generator.seed = seed;
    config
}
