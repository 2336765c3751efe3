//! Depth-first search that keeps improving distances.

use crate::algorithms::found;
use crate::grid::Point;
use crate::maze::Maze;
use crate::maze::MazeSearchResult;
use crate::maze::SearchStep;
use crate::search::SearchTree;
use crate::search::SearchTreeNode;

/// Depth-first search that tracks the step count to each cell and re-stacks a
/// cell whenever a strictly shorter way to it shows up.
///
/// A later pop can always improve a distance, so this never stops early and
/// visits every reachable cell. The resulting path is shortest, but the work
/// done is far worse than breadth-first search; it is kept for comparison.
pub(crate) fn dfs_min_distance(maze: &Maze, start: Point, end: Point) -> Option<MazeSearchResult> {
    let mut search_tree = SearchTree::<usize>::new(*maze.grid());
    let mut stack = vec![search_tree.push(SearchTreeNode::new(start, None, 0))];
    let mut records = Vec::<SearchStep>::new();

    while let Some(node_index) = stack.pop() {
        records.extend(search_tree.step_into(node_index));

        let p = *search_tree[node_index].point();
        let d = *search_tree[node_index].value() + 1;
        for n in maze.neighbours(&p) {
            let i = search_tree.index(&n);
            if !search_tree.contains(i) {
                stack.push(search_tree.push(SearchTreeNode::new(n, Some(node_index), d)));
            } else if *search_tree[i].value() > d {
                log::trace!("{n}: shortened to {d} through {p}");
                search_tree[i].reach(node_index, d);
                stack.push(i);
            }
        }
    }

    let end_index = search_tree.index(&end);
    if !search_tree.contains(end_index) {
        return None;
    }
    Some(found(maze, search_tree.path(end_index), records))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    use crate::problem::MazeProblem;

    #[test]
    fn finds_the_short_way_around() {
        // Up is stacked last, so the goal is first reached the long way round
        // and later shortened through the route below.
        let problem = MazeProblem::try_from(indoc! {"
            .....
            .###.
            S#G#.
            .#.#.
            .....
        "})
        .unwrap();
        let r = dfs_min_distance(&problem.maze, problem.start, problem.end).unwrap();
        assert_eq!(r.len(), 6);
        assert!(r.is_valid_path(&problem.start, &problem.end));

        let goal_entries = r.records.iter().filter(|s| s.target() == problem.end).count();
        assert!(goal_entries >= 2, "{goal_entries}");
    }

    #[test]
    fn explores_everything() {
        let maze = Maze::from_data(3, 3, vec![1; 9]).unwrap();
        let r = dfs_min_distance(&maze, Point::new(0, 0), Point::new(1, 0)).unwrap();
        assert_eq!(r.len(), 1);
        // Every cell but the start is entered at least once.
        let mut targets: Vec<Point> = r.records.iter().map(|s| s.target()).collect();
        targets.sort();
        targets.dedup();
        assert_eq!(targets.len(), 8);
    }
}
