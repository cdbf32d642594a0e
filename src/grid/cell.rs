//! Cell-level types: coordinates, directions, and wall flags.

use serde::{Deserialize, Serialize};

/// Integer (row, col) coordinate of a cell within the grid.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct CellCoord {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl CellCoord {
    /// Create a new coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell.
    #[inline]
    pub fn manhattan_distance(&self, other: &CellCoord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Absolute per-axis deltas to another cell: (rows, cols).
    #[inline]
    pub fn axis_deltas(&self, other: &CellCoord) -> (usize, usize) {
        (self.row.abs_diff(other.row), self.col.abs_diff(other.col))
    }

    /// Step one cell in `direction` within a `size` x `size` grid.
    ///
    /// Returns `None` when the step would leave the grid.
    pub fn step(&self, direction: Direction, size: usize) -> Option<CellCoord> {
        let (row, col) = (self.row, self.col);
        let stepped = match direction {
            Direction::North => (row.checked_sub(1)?, col),
            Direction::East => (row, col + 1),
            Direction::South => (row + 1, col),
            Direction::West => (row, col.checked_sub(1)?),
        };
        if stepped.0 < size && stepped.1 < size {
            Some(CellCoord::new(stepped.0, stepped.1))
        } else {
            None
        }
    }
}

/// One of the four cardinal wall directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0.
    North,
    /// Toward increasing columns.
    East,
    /// Toward increasing rows.
    South,
    /// Toward column 0.
    West,
}

impl Direction {
    /// All four directions, in wall-index order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Index into a cell's wall array.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// The direction seen from the other side of the wall.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Direction from `a` to `b`, if they are exactly one grid step apart.
    pub fn between(a: CellCoord, b: CellCoord) -> Option<Direction> {
        if a.row == b.row {
            if b.col == a.col + 1 {
                return Some(Direction::East);
            }
            if a.col == b.col + 1 {
                return Some(Direction::West);
            }
        } else if a.col == b.col {
            if b.row == a.row + 1 {
                return Some(Direction::South);
            }
            if a.row == b.row + 1 {
                return Some(Direction::North);
            }
        }
        None
    }
}

/// Renderer-facing role tag for a cell.
///
/// Roles are written after generation/search completes and are never
/// consulted by neighbor computation or the search itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellRole {
    /// No special role.
    #[default]
    None,
    /// The search start cell.
    Start,
    /// The search goal cell.
    Goal,
    /// A cell on the solved path.
    Path,
}

/// A single grid cell: four wall flags plus generation bookkeeping.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    walls: [bool; 4],
    carved: bool,
    role: CellRole,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            walls: [true; 4],
            carved: false,
            role: CellRole::None,
        }
    }
}

impl Cell {
    /// Is the wall in `direction` still standing?
    #[inline]
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    pub(crate) fn set_wall(&mut self, direction: Direction, present: bool) {
        self.walls[direction.index()] = present;
    }

    /// Has the maze generator visited this cell?
    #[inline]
    pub fn is_carved(&self) -> bool {
        self.carved
    }

    pub(crate) fn set_carved(&mut self, carved: bool) {
        self.carved = carved;
    }

    /// Renderer role tag.
    #[inline]
    pub fn role(&self) -> CellRole {
        self.role
    }

    pub(crate) fn set_role(&mut self, role: CellRole) {
        self.role = role;
    }
}
