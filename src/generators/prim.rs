use rand::Rng;

use crate::generators::Carving;
use crate::generators::Edge;
use crate::grid::Direction;
use crate::grid::Grid;
use crate::grid::Point;
use crate::maze::Maze;
use crate::random::pick_any;
use crate::random::random_room;

/// Randomised Prim.
///
/// Grows a single tree from a random room, always extending it through a
/// uniformly random edge of its frontier.
pub(crate) fn prim<R: Rng>(grid: Grid, rng: &mut R) -> Maze {
    let mut carving = Carving::blocked(grid);
    let mut edges = Vec::<Edge>::new();

    let start = random_room(&grid, rng);
    visit(&mut carving, &mut edges, start);

    while let Some(edge) = pick_any(&mut edges, rng) {
        if carving.is_open(&edge.to) {
            continue;
        }
        carving.carve(&edge);
        visit(&mut carving, &mut edges, edge.to);
    }

    carving.into_maze()
}

/// Edges are drawn at random later, so they are added in a fixed order.
fn visit(carving: &mut Carving, edges: &mut Vec<Edge>, room: Point) {
    carving.open(&room);
    edges.extend(carving.closed_edges(room, &Direction::ALL));
}
