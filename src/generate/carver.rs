//! Randomized iterative depth-first carving for one section worker.

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::Rng;

use crate::grid::{CellCoord, Grid};

use super::GenerateEvent;

/// Carve a depth-first spanning tree outward from `seed`.
///
/// The explicit stack keeps carving iterative; each step locks the shared
/// grid exactly once, and the critical section covers the whole
/// inspect-pick-carve-mark unit so no other worker can observe a
/// half-removed wall pair or a carved cell without its connecting
/// passage.
///
/// Neighbor validity is grid-wide visited state, not section-bounded, so
/// a worker may wander past its section boundary; whichever worker marks
/// a cell first owns it.
pub(crate) fn carve_from(
    grid: &Mutex<Grid>,
    seed: CellCoord,
    rng: &mut StdRng,
    events: &Sender<GenerateEvent>,
) {
    {
        let mut grid = grid.lock();
        if grid.is_carved(seed) {
            // Another worker's tree already claimed this seed.
            return;
        }
        grid.mark_carved(seed);
    }

    let mut stack = vec![seed];
    while let Some(&current) = stack.last() {
        let next = {
            let mut grid = grid.lock();
            let choices: Vec<CellCoord> = grid
                .adjacent(current)
                .into_iter()
                .filter(|&c| !grid.is_carved(c))
                .collect();
            if choices.is_empty() {
                None
            } else {
                let pick = choices[rng.gen_range(0..choices.len())];
                grid.remove_wall_between(current, pick);
                grid.mark_carved(pick);
                Some(pick)
            }
        };

        match next {
            Some(cell) => {
                // Receiver may already be gone; carving never blocks on it.
                let _ = events.send(GenerateEvent::Carved {
                    from: current,
                    to: cell,
                });
                stack.push(cell);
            }
            None => {
                stack.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_single_carver_spans_grid() {
        let grid = Mutex::new(Grid::new(6));
        let mut rng = StdRng::seed_from_u64(7);
        let (tx, rx) = crossbeam_channel::unbounded();

        carve_from(&grid, CellCoord::new(0, 0), &mut rng, &tx);
        drop(tx);

        let grid = grid.into_inner();
        for coord in grid.coords() {
            assert!(grid.is_carved(coord), "cell {coord:?} was never carved");
        }
        assert!(grid.wall_symmetry_ok());
        // A spanning tree of 36 cells carves exactly 35 walls.
        assert_eq!(rx.iter().count(), 35);
    }

    #[test]
    fn test_second_carver_on_claimed_seed_is_noop() {
        let grid = Mutex::new(Grid::new(4));
        let mut rng = StdRng::seed_from_u64(1);
        let (tx, rx) = crossbeam_channel::unbounded();

        carve_from(&grid, CellCoord::new(0, 0), &mut rng, &tx);
        let carved_walls = rx.try_iter().count();

        carve_from(&grid, CellCoord::new(2, 2), &mut rng, &tx);
        drop(tx);
        assert_eq!(rx.try_iter().count(), 0, "claimed seed must not re-carve");
        assert_eq!(carved_walls, 15);
    }
}
