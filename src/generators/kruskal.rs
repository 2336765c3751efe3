use rand::Rng;

use crate::disjoint_set::DisjointSet;
use crate::generators::Carving;
use crate::generators::Edge;
use crate::grid::Direction;
use crate::grid::Grid;
use crate::grid::Point;
use crate::maze::Maze;
use crate::random::pick_any;

/// Randomised Kruskal.
///
/// Every room-to-room adjacency is a candidate; candidates are drawn in
/// uniformly random order instead of by weight, and kept only when they join
/// two different trees.
pub(crate) fn kruskal<R: Rng>(grid: Grid, rng: &mut R) -> Maze {
    let mut carving = Carving::blocked(grid);
    let mut sets = DisjointSet::new(grid.len());
    let mut edges = Vec::<Edge>::with_capacity(2 * grid.rooms());

    // Right and down neighbours only, so each adjacency appears once.
    for y in (0..grid.rows).step_by(2) {
        for x in (0..grid.cols).step_by(2) {
            let from = Point::new(x, y);
            carving.open(&from);
            for d in [Direction::Right, Direction::Down] {
                if let Some(to) = grid.step(&from, d, 2) {
                    edges.push(Edge { from, to });
                }
            }
        }
    }

    while let Some(edge) = pick_any(&mut edges, rng) {
        if !sets.union(grid.index(&edge.from), grid.index(&edge.to)) {
            continue;
        }
        carving.carve(&edge);
    }

    carving.into_maze()
}
