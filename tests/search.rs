//! Integration tests for the bidirectional search engine.

mod common;

use vyuha_maze::search::{path_is_open, reconstruct};
use vyuha_maze::{
    BidirectionalSearch, CellCoord, GeneratorConfig, Grid, Heuristic, Maze, MazeGenerator,
    SearchConfig, SearchOutcome, SearchStatus,
};

fn generate(size: usize, workers: usize, seed: u64) -> Grid {
    let mut grid = Grid::new(size);
    let generator = MazeGenerator::new(GeneratorConfig {
        workers,
        seed,
        ..Default::default()
    });
    generator.generate(&mut grid, CellCoord::new(0, 0));
    grid
}

fn solve(grid: &Grid, config: SearchConfig, start: CellCoord, goal: CellCoord) -> Vec<CellCoord> {
    let mut search = BidirectionalSearch::new(config, start, goal);
    let SearchStatus::MeetingFound(meeting) = search.run(grid, |_| {}) else {
        panic!("expected a path from {start:?} to {goal:?}");
    };
    reconstruct(&search, meeting)
}

#[test]
fn test_open_grid_path_has_minimal_length() {
    let grid = common::open_grid(5);
    let start = CellCoord::new(0, 0);
    let goal = CellCoord::new(4, 4);

    let path = solve(&grid, SearchConfig::default(), start, goal);
    assert_eq!(path.len(), 9);
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    assert!(path_is_open(&grid, &path));
}

#[test]
fn test_corridor_path_matches_the_only_route() {
    let grid = common::l_corridor(6, None);
    let start = CellCoord::new(0, 0);
    let goal = CellCoord::new(5, 5);

    // A small batch forces many turn alternations along the corridor.
    let config = SearchConfig {
        batch_size: 3,
        ..Default::default()
    };
    let path = solve(&grid, config, start, goal);
    assert_eq!(path, common::l_corridor_cells(6));
}

#[test]
fn test_broken_corridor_exhausts_both_frontiers() {
    let grid = common::l_corridor(6, Some(4));
    let mut search = BidirectionalSearch::new(
        SearchConfig::default(),
        CellCoord::new(0, 0),
        CellCoord::new(5, 5),
    );
    assert_eq!(search.run(&grid, |_| {}), SearchStatus::Exhausted);
}

#[test]
fn test_tree_maze_paths_are_shortest() {
    // A single-worker maze is a spanning tree, so the simple path between
    // any two cells is unique and the search must find exactly it.
    for seed in 1..=10u64 {
        let grid = generate(11, 1, seed);
        let start = CellCoord::new(0, 0);
        let goal = CellCoord::new(10, 10);

        let path = solve(&grid, SearchConfig::default(), start, goal);
        let shortest = common::bfs_distance(&grid, start, goal).unwrap();
        assert_eq!(path.len(), shortest + 1, "non-shortest path with seed {seed}");
        assert!(path_is_open(&grid, &path));
    }
}

#[test]
fn test_stitched_maze_paths_are_shortest_with_large_batch() {
    // A batch larger than the grid lets the forward frontier run to the
    // goal in one turn, which makes the meeting cost exact even when
    // stitching has added cycles.
    for seed in 1..=10u64 {
        let grid = generate(10, 4, seed);
        let start = CellCoord::new(0, 0);
        let goal = CellCoord::new(9, 9);

        let config = SearchConfig {
            batch_size: 400,
            ..Default::default()
        };
        let path = solve(&grid, config, start, goal);
        let shortest = common::bfs_distance(&grid, start, goal).unwrap();
        assert_eq!(path.len(), shortest + 1, "non-shortest path with seed {seed}");
    }
}

#[test]
fn test_heuristics_never_overestimate() {
    let manhattan = Heuristic::Manhattan;
    let adjusted = Heuristic::DiagonalAdjusted { weight: 1.0 };

    for seed in 1..=5u64 {
        let grid = generate(5, 4, seed);
        let goal = CellCoord::new(4, 4);
        let true_dist = common::bfs_distances(&grid, goal);

        for coord in grid.coords() {
            let d = true_dist[&coord] as f32;
            assert!(
                manhattan.estimate(coord, goal) <= d + 1e-3,
                "manhattan overestimates at {coord:?} (seed {seed})"
            );
            assert!(
                adjusted.estimate(coord, goal) <= d + 1e-3,
                "diagonal-adjusted overestimates at {coord:?} (seed {seed})"
            );
        }
    }
}

#[test]
fn test_meeting_cell_lies_on_the_path() {
    let mut maze = Maze::new(common::maze_config(12, 4, 61)).unwrap();
    maze.generate();

    match maze.solve() {
        SearchOutcome::Path { cells, meeting, .. } => {
            assert!(cells.contains(&meeting));
            assert!(path_is_open(maze.grid(), &cells));
        }
        SearchOutcome::NoPath { .. } => panic!("connected maze must be solvable"),
    }
}

#[test]
fn test_diagonal_adjusted_heuristic_solves_tree_mazes_optimally() {
    let mut config = common::maze_config(9, 1, 13);
    config.search.heuristic = "diagonal-adjusted".to_string();

    let mut maze = Maze::new(config).unwrap();
    maze.generate();

    let outcome = maze.solve();
    let path = outcome.path().expect("connected maze must be solvable");
    let shortest =
        common::bfs_distance(maze.grid(), maze.start(), maze.goal()).unwrap();
    assert_eq!(path.len(), shortest + 1);
}

#[test]
fn test_repeated_solves_agree() {
    let mut maze = Maze::new(common::maze_config(10, 4, 29)).unwrap();
    maze.generate();

    let first = maze.solve().path().map(<[CellCoord]>::to_vec);
    let second = maze.solve().path().map(<[CellCoord]>::to_vec);
    assert!(first.is_some());
    assert_eq!(first, second);
}
