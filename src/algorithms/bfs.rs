//! Breadth-first search.

use std::collections::VecDeque;

use crate::algorithms::found;
use crate::grid::Point;
use crate::maze::Maze;
use crate::maze::MazeSearchResult;
use crate::maze::SearchStep;
use crate::search::SearchTree;
use crate::search::SearchTreeNode;

/// Breadth-first search over a FIFO of nodes.
///
/// Cells are marked when queued, and the search stops as soon as `end` is
/// discovered. Every step costs the same, so the path is a shortest one.
///
/// Records each edge as it discovers a new cell.
pub(crate) fn bfs(maze: &Maze, start: Point, end: Point) -> Option<MazeSearchResult> {
    let mut search_tree = SearchTree::<()>::new(*maze.grid());
    let mut queue = VecDeque::from([search_tree.push(SearchTreeNode::new(start, None, ()))]);
    let mut records = Vec::<SearchStep>::new();

    while let Some(node_index) = queue.pop_front() {
        let p = *search_tree[node_index].point();
        // Only the start gets here undetected.
        if p == end {
            return Some(found(maze, search_tree.path(node_index), records));
        }

        for n in maze.neighbours(&p) {
            if search_tree.contains(search_tree.index(&n)) {
                continue;
            }
            let i = search_tree.push(SearchTreeNode::new(n, Some(node_index), ()));
            records.push(SearchStep::new(p, n));
            if n == end {
                return Some(found(maze, search_tree.path(i), records));
            }
            queue.push_back(i);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    use crate::problem::MazeProblem;

    #[test]
    fn shortest_path_in_open_square() {
        let maze = Maze::from_data(3, 3, vec![1; 9]).unwrap();
        let r = bfs(&maze, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(r.points.len(), 5);
        assert!(r.is_valid_path(&Point::new(0, 0), &Point::new(2, 2)));
        // Discovery stops at the goal.
        assert_eq!(r.records.last().map(|s| s.target()), Some(Point::new(2, 2)));
    }

    #[test]
    fn records_in_discovery_order() {
        let problem = MazeProblem::try_from(indoc! {"
            ..S..
            #####
            ....G
        "})
        .unwrap();
        assert_eq!(bfs(&problem.maze, problem.start, problem.end), None);

        let problem = MazeProblem::try_from(indoc! {"
            ..S.G
        "})
        .unwrap();
        let r = bfs(&problem.maze, problem.start, problem.end).unwrap();
        assert_eq!(
            r.records,
            vec![
                SearchStep::new(Point::new(2, 0), Point::new(3, 0)),
                SearchStep::new(Point::new(2, 0), Point::new(1, 0)),
                SearchStep::new(Point::new(3, 0), Point::new(4, 0)),
            ]
        );
        assert_eq!(r.len(), 2);
    }
}
