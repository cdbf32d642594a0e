//! VyuhaMaze demo binary.
//!
//! Generates a maze, solves it, and prints an ASCII rendering with the
//! solved path marked. Rendering lives here, not in the library.
//!
//! Usage:
//!   vyuha-maze --size 25 --seed 42
//!   vyuha-maze --config vyuha.toml

use std::path::Path;

use clap::Parser;

use vyuha_maze::{CellRole, Maze, Result, SearchOutcome, VyuhaConfig};

/// Maze generation and bidirectional search demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<String>,

    /// Grid dimension N (overrides config)
    #[arg(short, long)]
    size: Option<usize>,

    /// Parallel generation workers (overrides config)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Search expansions per turn (overrides config)
    #[arg(short, long)]
    batch_size: Option<usize>,

    /// Random seed, 0 = entropy (overrides config)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from {path}");
            VyuhaConfig::load(Path::new(path))?
        }
        None => VyuhaConfig::default(),
    };
    if let Some(size) = args.size {
        config.grid.size = size;
    }
    if let Some(workers) = args.workers {
        config.generator.workers = workers;
    }
    if let Some(batch_size) = args.batch_size {
        config.search.batch_size = batch_size;
    }
    if let Some(seed) = args.seed {
        config.generator.seed = seed;
    }

    let mut maze = Maze::new(config)?;

    let stats = maze.generate();
    log::info!(
        "generation done: seed {}, {} stitched links, {} repairs",
        stats.seed,
        stats.stitched,
        stats.repaired
    );

    match maze.solve() {
        SearchOutcome::Path { cells, stats, .. } => {
            log::info!(
                "path found: {} cells ({} forward / {} backward expansions)",
                cells.len(),
                stats.expanded_forward,
                stats.expanded_backward
            );
        }
        SearchOutcome::NoPath { .. } => {
            log::warn!("no path between start and goal");
        }
    }

    print!("{}", render_ascii(&maze));
    Ok(())
}

/// Render the maze as ASCII art: walls as lines, path cells as `*`,
/// start as `S`, goal as `G`.
fn render_ascii(maze: &Maze) -> String {
    use vyuha_maze::{CellCoord, Direction};

    let grid = maze.grid();
    let size = grid.size();
    let mut out = String::new();

    for row in 0..size {
        // Northern walls of this row.
        for col in 0..size {
            let cell = grid.cell(CellCoord::new(row, col));
            out.push('+');
            out.push_str(if cell.has_wall(Direction::North) {
                "---"
            } else {
                "   "
            });
        }
        out.push_str("+\n");

        // Cell bodies with their western walls.
        for col in 0..size {
            let coord = CellCoord::new(row, col);
            let cell = grid.cell(coord);
            out.push(if cell.has_wall(Direction::West) {
                '|'
            } else {
                ' '
            });
            let mark = match cell.role() {
                CellRole::Start => 'S',
                CellRole::Goal => 'G',
                CellRole::Path => '*',
                CellRole::None => ' ',
            };
            out.push(' ');
            out.push(mark);
            out.push(' ');
        }
        out.push_str("|\n");
    }

    // Southern border.
    for _ in 0..size {
        out.push_str("+---");
    }
    out.push_str("+\n");
    out
}
