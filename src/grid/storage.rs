//! Grid storage: an N x N collection of cells with symmetric wall operations.
//!
//! The grid owns every cell exclusively. Walls are stored per cell but the
//! flag between two adjacent cells is always mirrored: the only mutation
//! path is [`Grid::remove_wall_between`], which updates both sides in one
//! call.

use super::cell::{Cell, CellCoord, CellRole, Direction};

/// Fixed-size square grid of cells.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Grid {
    /// Create a fully walled grid of `size` x `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size * size],
        }
    }

    /// Grid dimension N (the grid is N x N).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total cell count.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn index(&self, coord: CellCoord) -> usize {
        coord.row * self.size + coord.col
    }

    /// Is the coordinate inside the grid?
    #[inline]
    pub fn in_bounds(&self, coord: CellCoord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Read access to a cell.
    #[inline]
    pub fn cell(&self, coord: CellCoord) -> &Cell {
        &self.cells[self.index(coord)]
    }

    #[inline]
    fn cell_mut(&mut self, coord: CellCoord) -> &mut Cell {
        let idx = self.index(coord);
        &mut self.cells[idx]
    }

    /// Iterate over all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| CellCoord::new(row, col)))
    }

    /// Cells reachable from `coord` through a currently open wall.
    ///
    /// Pure read of wall state; the returned order carries no meaning.
    pub fn neighbors(&self, coord: CellCoord) -> Vec<CellCoord> {
        let mut result = Vec::with_capacity(4);
        for direction in Direction::ALL {
            if self.cell(coord).has_wall(direction) {
                continue;
            }
            if let Some(neighbor) = coord.step(direction, self.size) {
                result.push(neighbor);
            }
        }
        result
    }

    /// All in-bounds adjacent cells, regardless of walls.
    pub fn adjacent(&self, coord: CellCoord) -> Vec<CellCoord> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| coord.step(direction, self.size))
            .collect()
    }

    /// Is the wall between two unit-adjacent cells open?
    pub fn wall_open_between(&self, a: CellCoord, b: CellCoord) -> bool {
        match Direction::between(a, b) {
            Some(direction) => !self.cell(a).has_wall(direction),
            None => false,
        }
    }

    /// Remove the wall between two unit-adjacent cells, mirrored on both.
    ///
    /// Returns `true` if a standing wall was removed, `false` if the cells
    /// are not adjacent or the wall was already open.
    pub fn remove_wall_between(&mut self, a: CellCoord, b: CellCoord) -> bool {
        let Some(direction) = Direction::between(a, b) else {
            return false;
        };
        if !self.in_bounds(a) || !self.in_bounds(b) {
            return false;
        }
        if !self.cell(a).has_wall(direction) {
            return false;
        }
        self.cell_mut(a).set_wall(direction, false);
        self.cell_mut(b).set_wall(direction.opposite(), false);
        true
    }

    pub(crate) fn is_carved(&self, coord: CellCoord) -> bool {
        self.cell(coord).is_carved()
    }

    pub(crate) fn mark_carved(&mut self, coord: CellCoord) {
        self.cell_mut(coord).set_carved(true);
    }

    /// Reset every generation-visited flag.
    ///
    /// Called once generation finishes so that a later phase can never
    /// observe stale carve state.
    pub(crate) fn clear_carved(&mut self) {
        for cell in &mut self.cells {
            cell.set_carved(false);
        }
    }

    pub(crate) fn set_role(&mut self, coord: CellCoord, role: CellRole) {
        self.cell_mut(coord).set_role(role);
    }

    pub(crate) fn clear_roles(&mut self) {
        for cell in &mut self.cells {
            cell.set_role(CellRole::None);
        }
    }

    /// Verify that every wall flag is mirrored on both sides.
    pub fn wall_symmetry_ok(&self) -> bool {
        for coord in self.coords() {
            for direction in [Direction::East, Direction::South] {
                if let Some(neighbor) = coord.step(direction, self.size) {
                    let here = self.cell(coord).has_wall(direction);
                    let there = self.cell(neighbor).has_wall(direction.opposite());
                    if here != there {
                        return false;
                    }
                }
            }
        }
        true
    }
}
