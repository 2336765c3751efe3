//! Depth-first carving.

use rand::Rng;

use crate::generators::Carving;
use crate::generators::Edge;
use crate::grid::Direction;
use crate::grid::Grid;
use crate::grid::Point;
use crate::maze::Maze;
use crate::random::random_room;
use crate::random::shuffle;

/// Recursive backtracker.
///
/// Recursion depth is bounded by the number of rooms.
pub(crate) fn dfs_recursive<R: Rng>(grid: Grid, rng: &mut R) -> Maze {
    let mut carving = Carving::blocked(grid);
    let start = random_room(&grid, rng);
    carving.open(&start);
    carve_from(&mut carving, start, rng);
    carving.into_maze()
}

fn carve_from<R: Rng>(carving: &mut Carving, from: Point, rng: &mut R) {
    let mut directions = Direction::ALL;
    shuffle(&mut directions, rng);

    for d in directions {
        let Some(to) = carving.grid().step(&from, d, 2) else {
            continue;
        };
        // Visited by a deeper call since the directions were drawn.
        if carving.is_open(&to) {
            continue;
        }
        carving.carve(&Edge { from, to });
        carve_from(carving, to, rng);
    }
}

/// Depth-first carving with an explicit stack of candidate edges.
///
/// Edges, not rooms, are stacked: an edge is skipped when popped if its target
/// was reached through another edge in the meantime.
pub(crate) fn dfs<R: Rng>(grid: Grid, rng: &mut R) -> Maze {
    let mut carving = Carving::blocked(grid);
    let mut edges = Vec::<Edge>::new();

    let start = random_room(&grid, rng);
    visit(&mut carving, &mut edges, start, rng);

    while let Some(edge) = edges.pop() {
        if carving.is_open(&edge.to) {
            continue;
        }
        carving.carve(&edge);
        visit(&mut carving, &mut edges, edge.to, rng);
    }

    carving.into_maze()
}

/// Marks `room` as visited and queues the edges to its unvisited neighbours,
/// in random order.
pub(crate) fn visit<R: Rng>(carving: &mut Carving, edges: &mut impl Extend<Edge>, room: Point, rng: &mut R) {
    carving.open(&room);
    let mut directions = Direction::ALL;
    shuffle(&mut directions, rng);
    edges.extend(carving.closed_edges(room, &directions));
}
