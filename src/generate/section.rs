//! Rectangular grid sections used to parallelize maze carving.
//!
//! Sections exist only during generation: the grid is split into an
//! `rows x cols` tiling, each section is carved by its own worker, and the
//! tiling is discarded once stitching completes.

use crate::grid::CellCoord;

/// A half-open rectangular sub-range of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    /// First row (inclusive).
    pub row_start: usize,
    /// First column (inclusive).
    pub col_start: usize,
    /// End row (exclusive).
    pub row_end: usize,
    /// End column (exclusive).
    pub col_end: usize,
}

impl Section {
    /// A degenerate section carves nothing.
    pub fn is_empty(&self) -> bool {
        self.row_start >= self.row_end || self.col_start >= self.col_end
    }

    /// The carve seed: the section's top-left cell.
    pub fn seed(&self) -> Option<CellCoord> {
        if self.is_empty() {
            None
        } else {
            Some(CellCoord::new(self.row_start, self.col_start))
        }
    }

    /// Cell count inside the section.
    pub fn cell_count(&self) -> usize {
        (self.row_end.saturating_sub(self.row_start)) * (self.col_end.saturating_sub(self.col_start))
    }
}

/// A tiling of the grid into sections.
#[derive(Clone, Debug)]
pub struct SectionLayout {
    /// Tiling rows.
    pub rows: usize,
    /// Tiling columns.
    pub cols: usize,
    /// Sections in row-major partition order.
    pub sections: Vec<Section>,
}

/// One pair of edge-adjacent sections and the mirrored boundary cell
/// pairs along their shared edge.
#[derive(Clone, Debug)]
pub struct SharedEdge {
    /// Index of the first section in partition order.
    pub first: usize,
    /// Index of the second section in partition order.
    pub second: usize,
    /// Unit-adjacent (first-side, second-side) cell pairs on the boundary.
    pub cells: Vec<(CellCoord, CellCoord)>,
}

/// Split a `size` x `size` grid into a section tiling sized from the
/// requested worker count.
///
/// The worker count is rounded down to the nearest `r x c` tiling
/// (4 workers gives quadrants, 1 worker gives the whole grid). Sections
/// partition the grid exactly: non-overlapping, covering every cell.
pub fn partition(size: usize, workers: usize) -> SectionLayout {
    let workers = workers.max(1);
    let rows = integer_sqrt(workers).max(1);
    let cols = (workers / rows).max(1);

    let row_bounds: Vec<usize> = (0..=rows).map(|i| i * size / rows).collect();
    let col_bounds: Vec<usize> = (0..=cols).map(|j| j * size / cols).collect();

    let mut sections = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            sections.push(Section {
                row_start: row_bounds[i],
                col_start: col_bounds[j],
                row_end: row_bounds[i + 1],
                col_end: col_bounds[j + 1],
            });
        }
    }

    SectionLayout {
        rows,
        cols,
        sections,
    }
}

/// Edge-adjacent section pairs with their shared boundaries, in
/// partition order.
pub fn adjacent_pairs(layout: &SectionLayout) -> Vec<SharedEdge> {
    let mut edges = Vec::new();
    for i in 0..layout.rows {
        for j in 0..layout.cols {
            let idx = i * layout.cols + j;
            let section = &layout.sections[idx];
            if section.is_empty() {
                continue;
            }

            // Neighbor to the east.
            if j + 1 < layout.cols {
                let other_idx = idx + 1;
                let other = &layout.sections[other_idx];
                if !other.is_empty() {
                    let row_lo = section.row_start.max(other.row_start);
                    let row_hi = section.row_end.min(other.row_end);
                    let cells: Vec<_> = (row_lo..row_hi)
                        .map(|row| {
                            (
                                CellCoord::new(row, section.col_end - 1),
                                CellCoord::new(row, other.col_start),
                            )
                        })
                        .collect();
                    if !cells.is_empty() {
                        edges.push(SharedEdge {
                            first: idx,
                            second: other_idx,
                            cells,
                        });
                    }
                }
            }

            // Neighbor to the south.
            if i + 1 < layout.rows {
                let other_idx = idx + layout.cols;
                let other = &layout.sections[other_idx];
                if !other.is_empty() {
                    let col_lo = section.col_start.max(other.col_start);
                    let col_hi = section.col_end.min(other.col_end);
                    let cells: Vec<_> = (col_lo..col_hi)
                        .map(|col| {
                            (
                                CellCoord::new(section.row_end - 1, col),
                                CellCoord::new(other.row_start, col),
                            )
                        })
                        .collect();
                    if !cells.is_empty() {
                        edges.push(SharedEdge {
                            first: idx,
                            second: other_idx,
                            cells,
                        });
                    }
                }
            }
        }
    }
    edges
}

fn integer_sqrt(n: usize) -> usize {
    let mut r = 0;
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_partition_covers_grid_exactly() {
        for (size, workers) in [(8, 4), (9, 4), (10, 1), (7, 3), (5, 9)] {
            let layout = partition(size, workers);
            let mut seen = HashSet::new();
            for section in &layout.sections {
                for row in section.row_start..section.row_end {
                    for col in section.col_start..section.col_end {
                        assert!(
                            seen.insert((row, col)),
                            "overlap at ({row},{col}) for size={size} workers={workers}"
                        );
                    }
                }
            }
            assert_eq!(seen.len(), size * size);
        }
    }

    #[test]
    fn test_four_workers_gives_quadrants() {
        let layout = partition(8, 4);
        assert_eq!(layout.rows, 2);
        assert_eq!(layout.cols, 2);
        assert_eq!(layout.sections.len(), 4);
        assert_eq!(layout.sections[0].cell_count(), 16);
        assert_eq!(layout.sections[0].seed(), Some(CellCoord::new(0, 0)));
        assert_eq!(layout.sections[3].seed(), Some(CellCoord::new(4, 4)));
    }

    #[test]
    fn test_quadrant_adjacency() {
        let layout = partition(8, 4);
        let edges = adjacent_pairs(&layout);
        // 2x2 tiling: two horizontal and two vertical shared edges.
        assert_eq!(edges.len(), 4);
        for edge in &edges {
            assert_eq!(edge.cells.len(), 4);
            for &(a, b) in &edge.cells {
                assert_eq!(a.manhattan_distance(&b), 1);
            }
        }
    }

    #[test]
    fn test_degenerate_sections_are_skipped() {
        // More workers than columns: some sections have zero width.
        let layout = partition(2, 9);
        assert!(layout.sections.iter().any(|s| s.is_empty()));
        for edge in adjacent_pairs(&layout) {
            assert!(!edge.cells.is_empty());
        }
    }

    #[test]
    fn test_single_worker_single_section() {
        let layout = partition(10, 1);
        assert_eq!(layout.sections.len(), 1);
        assert!(adjacent_pairs(&layout).is_empty());
        assert_eq!(layout.sections[0].cell_count(), 100);
    }
}
