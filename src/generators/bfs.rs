use std::collections::VecDeque;

use rand::Rng;

use crate::generators::Carving;
use crate::generators::Edge;
use crate::generators::dfs::visit;
use crate::grid::Grid;
use crate::maze::Maze;
use crate::random::random_room;

/// Breadth-first carving.
///
/// Same as [`crate::generators::dfs::dfs`] with a FIFO of candidate edges.
pub(crate) fn bfs<R: Rng>(grid: Grid, rng: &mut R) -> Maze {
    let mut carving = Carving::blocked(grid);
    let mut edges = VecDeque::<Edge>::new();

    let start = random_room(&grid, rng);
    visit(&mut carving, &mut edges, start, rng);

    while let Some(edge) = edges.pop_front() {
        if carving.is_open(&edge.to) {
            continue;
        }
        carving.carve(&edge);
        visit(&mut carving, &mut edges, edge.to, rng);
    }

    carving.into_maze()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use crate::grid::Point;
    use crate::maze::GenerationStep;

    #[test]
    fn builds_spanning_trees() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let grid = Grid::new(13, 9);
            let maze = bfs(grid, &mut rng);
            assert!(maze.is_perfect(), "seed {seed}:\n{maze}");
            assert_eq!(maze.records().len(), grid.rooms() - 1);
        }
    }

    #[test]
    fn carves_in_rings_around_the_start() {
        // Rooms are reached in non-decreasing room-distance from the start.
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let grid = Grid::new(11, 11);
        let maze = bfs(grid, &mut rng);

        let mut depth = vec![usize::MAX; grid.len()];
        let mut last = 0;
        for (i, step) in maze.records().iter().enumerate() {
            let GenerationStep::Road { sx, sy, ex, ey } = *step else {
                panic!("Carving only records roads");
            };
            let (from, to) = (Point::new(sx, sy), Point::new(ex, ey));
            if i == 0 {
                depth[grid.index(&from)] = 0;
            }
            let d = depth[grid.index(&from)] + 1;
            depth[grid.index(&to)] = d;
            assert!(d >= last, "{to} at depth {d} carved after depth {last}");
            last = d;
        }
    }
}
